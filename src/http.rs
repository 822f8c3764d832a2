use crate::error::HttpError;
use std::time::Instant;
use tracing::debug;

const USER_AGENT: &str = concat!("league_coach/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP exchange used by the API clients.
///
/// Implementations must be shareable across threads since match details are
/// fetched in parallel.
pub trait HttpTransport: Send + Sync {
    /// GET `url` with the given headers, returning the body on a 2xx status.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, HttpError>;

    /// POST a JSON `body` to `url`, returning the response body on a 2xx status.
    fn post_json(&self, url: &str, headers: &[(&str, &str)], body: &str)
        -> Result<String, HttpError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(USER_AGENT).build();
        UreqTransport { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<String, HttpError> {
        let mut request = self.agent.get(url);
        for (name, value) in headers {
            request = request.set(name, value);
        }

        let started = Instant::now();
        let result = request.call();
        debug!(url, elapsed_ms = started.elapsed().as_millis() as u64, "GET");
        read_body(result)
    }

    fn post_json(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<String, HttpError> {
        let mut request = self
            .agent
            .post(url)
            .set("Content-Type", "application/json");
        for (name, value) in headers {
            request = request.set(name, value);
        }

        let started = Instant::now();
        let result = request.send_string(body);
        debug!(url, elapsed_ms = started.elapsed().as_millis() as u64, "POST");
        read_body(result)
    }
}

fn read_body(result: Result<ureq::Response, ureq::Error>) -> Result<String, HttpError> {
    match result {
        Ok(resp) => resp
            .into_string()
            .map_err(|e| HttpError::Transport(e.to_string())),
        Err(ureq::Error::Status(code, _)) => Err(HttpError::Status(code)),
        Err(ureq::Error::Transport(t)) => Err(HttpError::Transport(t.to_string())),
    }
}
