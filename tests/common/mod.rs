#![allow(dead_code)]

use league_coach::error::HttpError;
use league_coach::http::HttpTransport;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// In-memory transport answering from a fixed URL table.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, Result<String, HttpError>>,
    slow: HashSet<String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, url: impl Into<String>, body: serde_json::Value) -> Self {
        self.responses.insert(url.into(), Ok(body.to_string()));
        self
    }

    pub fn raw(mut self, url: impl Into<String>, body: &str) -> Self {
        self.responses.insert(url.into(), Ok(body.to_string()));
        self
    }

    pub fn status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), Err(HttpError::Status(status)));
        self
    }

    pub fn unreachable(mut self, url: impl Into<String>) -> Self {
        self.responses
            .insert(url.into(), Err(HttpError::Transport("connection refused".to_string())));
        self
    }

    /// Delays the answer for `url`, to let later requests finish first.
    pub fn slow(mut self, url: impl Into<String>) -> Self {
        self.slow.insert(url.into());
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    fn answer(
        &self,
        method: &'static str,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&str>,
    ) -> Result<String, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.map(str::to_string),
        });

        if self.slow.contains(url) {
            thread::sleep(Duration::from_millis(50));
        }

        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(HttpError::Transport(format!("unscripted url {}", url))))
    }
}

impl HttpTransport for ScriptedTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, HttpError> {
        self.answer("GET", url, headers, None)
    }

    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, HttpError> {
        self.answer("POST", url, headers, Some(body))
    }
}
