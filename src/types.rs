//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Query parameters: string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Video Period
// ============================================================================

/// Time window for the top videos listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VideoPeriod {
    /// Videos from the last week
    #[default]
    Week,
    /// Videos from the last month
    Month,
    /// All time
    All,
}

impl VideoPeriod {
    /// Query parameter value for this period
    pub fn as_str(self) -> &'static str {
        match self {
            VideoPeriod::Week => "week",
            VideoPeriod::Month => "month",
            VideoPeriod::All => "all",
        }
    }
}

impl fmt::Display for VideoPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_period_serde() {
        let period: VideoPeriod = serde_json::from_str("\"month\"").unwrap();
        assert_eq!(period, VideoPeriod::Month);

        let json = serde_json::to_string(&VideoPeriod::All).unwrap();
        assert_eq!(json, "\"all\"");
    }

    #[test]
    fn test_video_period_default() {
        assert_eq!(VideoPeriod::default(), VideoPeriod::Week);
        assert_eq!(VideoPeriod::default().to_string(), "week");
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!("test".to_string().none_if_empty(), Some("test".to_string()));
        assert_eq!(String::new().none_if_empty(), None);
    }
}
