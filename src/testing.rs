//! In-memory transports and record builders for unit tests

use crate::error::{Error, Result};
use crate::http::{Connection, Fetched, Transport};
use crate::types::StringMap;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Responder = Box<dyn Fn(&str, &StringMap) -> Result<Fetched> + Send + Sync>;

/// One request seen by a [`ScriptedTransport`]
#[derive(Debug, Clone)]
pub(crate) struct Request {
    pub path: String,
    pub params: StringMap,
}

impl Request {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// A transport that answers from a closure and records every request
pub(crate) struct ScriptedTransport {
    respond: Responder,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new(
        respond: impl Fn(&str, &StringMap) -> Result<Fetched> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer with `responses` in order, failing once they run out
    pub fn sequence(responses: Vec<Result<Fetched>>) -> Self {
        let responses = Mutex::new(VecDeque::from(responses));
        Self::new(move |path, _| {
            responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Other(format!("unscripted request to {path}"))))
        })
    }

    /// Serve `records` under `key` by `offset`/`limit`, like the real API
    pub fn collection(key: &str, records: Vec<Value>, with_total: bool) -> Self {
        let key = key.to_string();
        Self::new(move |_, params| {
            let offset: usize = params
                .get("offset")
                .and_then(|o| o.parse().ok())
                .unwrap_or(0);
            let limit: usize = params
                .get("limit")
                .and_then(|l| l.parse().ok())
                .unwrap_or(25);
            let page: Vec<Value> = records.iter().skip(offset).take(limit).cloned().collect();

            let mut body = serde_json::Map::new();
            body.insert(key.clone(), Value::Array(page));
            if with_total {
                body.insert("_total".to_string(), json!(records.len()));
            }
            Ok(Fetched::Found(Value::Object(body)))
        })
    }

    /// Share as a [`Connection`] while keeping a handle for assertions
    pub fn into_shared(self) -> (Arc<Self>, Connection) {
        let transport = Arc::new(self);
        let connection: Connection = transport.clone();
        (transport, connection)
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, params: &StringMap) -> Result<Fetched> {
        self.requests.lock().unwrap().push(Request {
            path: path.to_string(),
            params: params.clone(),
        });
        (self.respond)(path, params)
    }
}

pub(crate) fn found(value: Value) -> Result<Fetched> {
    Ok(Fetched::Found(value))
}

// ============================================================================
// Record builders
// ============================================================================

pub(crate) fn team_json(id: u64) -> Value {
    json!({
        "_id": id,
        "name": format!("team{id}"),
        "display_name": format!("Team {id}"),
        "info": "<p>info</p>",
        "background": null,
        "banner": format!("http://static-cdn.example/team{id}/banner.png"),
        "logo": format!("http://static-cdn.example/team{id}/logo.png"),
        "created_at": "2011-10-25T23:55:47Z",
        "updated_at": "2013-05-24T00:17:10Z"
    })
}

pub(crate) fn teams_page(ids: impl IntoIterator<Item = u64>) -> Value {
    let teams: Vec<Value> = ids.into_iter().map(team_json).collect();
    json!({ "teams": teams })
}

pub(crate) fn channel_json(id: u64, name: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "display_name": name.to_uppercase(),
        "status": "playing things",
        "game": "StarCraft II: Heart of the Swarm",
        "url": format!("http://www.twitch.tv/{name}"),
        "logo": null,
        "banner": null,
        "mature": false,
        "views": 1000 + id,
        "followers": 10 + id,
        "created_at": "2012-06-18T17:48:37Z",
        "updated_at": "2013-06-18T17:48:37Z"
    })
}

pub(crate) fn follow_json(id: u64, name: &str) -> Value {
    json!({
        "created_at": "2013-06-02T09:38:45Z",
        "channel": channel_json(id, name)
    })
}

pub(crate) fn user_json(name: &str) -> Value {
    json!({
        "_id": 23945610,
        "name": name,
        "display_name": name.to_uppercase(),
        "logo": null,
        "staff": false,
        "created_at": "2011-06-03T17:49:19Z",
        "updated_at": "2013-06-11T22:57:02Z"
    })
}

pub(crate) fn video_json(id: &str, channel: &str) -> Value {
    json!({
        "_id": id,
        "title": "DreamHack Open Stockholm 26-27 April",
        "description": "Day 1",
        "recorded_at": "2013-04-26T13:38:04Z",
        "url": format!("http://www.twitch.tv/{channel}/b/396294648"),
        "views": 2401,
        "length": 4205,
        "game": "StarCraft II: Heart of the Swarm",
        "preview": "http://static-cdn.example/preview.jpg",
        "channel": {
            "name": channel,
            "display_name": channel.to_uppercase()
        }
    })
}
