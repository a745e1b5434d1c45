//! Scripted in-process oracle for tests. Records every request it receives.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GroundingChunk, Oracle, OracleError, OracleReply, OracleRequest};

pub enum Scripted {
    Reply(OracleReply),
    Fail { status: u16, message: String },
}

/// Answers requests by matching the system instruction against registered
/// routes, so concurrent calls get deterministic replies regardless of order.
#[derive(Default)]
pub struct StubOracle {
    routes: Mutex<Vec<(String, VecDeque<Scripted>)>>,
    requests: Mutex<Vec<OracleRequest>>,
}

impl StubOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply for the next request whose system instruction contains `marker`.
    pub fn on(self, marker: &str, scripted: Scripted) -> Self {
        {
            let mut routes = self.routes.lock().unwrap();
            match routes.iter_mut().find(|(m, _)| m == marker) {
                Some((_, queue)) => queue.push_back(scripted),
                None => routes.push((marker.to_string(), VecDeque::from([scripted]))),
            }
        }
        self
    }

    pub fn on_text(self, marker: &str, text: &str) -> Self {
        self.on(marker, Scripted::Reply(reply(text, Vec::new())))
    }

    pub fn on_fail(self, marker: &str) -> Self {
        self.on(
            marker,
            Scripted::Fail {
                status: 503,
                message: "stub outage".to_string(),
            },
        )
    }

    pub fn requests(&self) -> Vec<OracleRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_matching(&self, marker: &str) -> Vec<OracleRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.system_instruction.contains(marker))
            .collect()
    }
}

pub fn reply(text: &str, grounding_chunks: Vec<GroundingChunk>) -> OracleReply {
    OracleReply {
        text: text.to_string(),
        grounding_chunks,
    }
}

#[async_trait]
impl Oracle for StubOracle {
    async fn generate(&self, request: &OracleRequest) -> Result<OracleReply, OracleError> {
        self.requests.lock().unwrap().push(request.clone());

        let next = {
            let mut routes = self.routes.lock().unwrap();
            routes
                .iter_mut()
                .find(|(marker, _)| request.system_instruction.contains(marker.as_str()))
                .and_then(|(_, queue)| queue.pop_front())
        };

        match next {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail { status, message }) => Err(OracleError::Api { status, message }),
            None => Err(OracleError::Api {
                status: 500,
                message: format!(
                    "no scripted reply for system instruction: {}",
                    request.system_instruction
                ),
            }),
        }
    }
}
