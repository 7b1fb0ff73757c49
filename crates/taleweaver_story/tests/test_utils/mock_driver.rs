//! Mock streaming driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use taleweaver_core::GenerateRequest;
use taleweaver_error::{GatewayError, GatewayErrorKind, TaleweaverError, TaleweaverResult};
use taleweaver_interface::{ChunkStream, StoryDriver, StreamChunk, Streaming};

/// Behavior configuration for mock streams.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Stream these deltas, then end
    Chunks(Vec<String>),
    /// Fail before any byte arrives
    FailToConnect(GatewayErrorKind),
    /// Stream these deltas, then yield an error
    FailMidStream {
        chunks: Vec<String>,
        error: GatewayErrorKind,
    },
    /// Stream these deltas, then never finish
    Stall(Vec<String>),
    /// One behavior per call, in order
    Sequence(Vec<MockBehavior>),
}

/// Scripted driver that records every request it receives.
#[derive(Debug, Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    /// Create a mock driver with custom behavior.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock driver that streams the given deltas.
    pub fn chunks<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MockBehavior::Chunks(chunks.into_iter().map(Into::into).collect()))
    }

    /// Create a mock driver that fails to connect.
    #[allow(dead_code)]
    pub fn unreachable(message: &str) -> Self {
        Self::new(MockBehavior::FailToConnect(GatewayErrorKind::Http(
            message.to_string(),
        )))
    }

    /// Shared handle to recorded requests, usable after the driver moves.
    pub fn requests(&self) -> Arc<Mutex<Vec<GenerateRequest>>> {
        Arc::clone(&self.requests)
    }

    /// Get the number of times generate_stream() was called.
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn behavior_for_call(&self, call: usize) -> MockBehavior {
        match &self.behavior {
            MockBehavior::Sequence(steps) => steps
                .get(call)
                .cloned()
                .unwrap_or(MockBehavior::FailToConnect(GatewayErrorKind::Http(format!(
                    "Mock sequence exhausted (call {} beyond {} steps)",
                    call + 1,
                    steps.len()
                )))),
            other => other.clone(),
        }
    }
}

impl StoryDriver for MockDriver {
    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[async_trait]
impl Streaming for MockDriver {
    async fn generate_stream(&self, req: &GenerateRequest) -> TaleweaverResult<ChunkStream> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        match self.behavior_for_call(call) {
            MockBehavior::Chunks(chunks) => Ok(Box::pin(async_stream::stream! {
                for chunk in chunks {
                    tokio::task::yield_now().await;
                    yield Ok::<_, TaleweaverError>(StreamChunk::delta(chunk));
                }
            })),
            MockBehavior::FailToConnect(kind) => Err(GatewayError::new(kind).into()),
            MockBehavior::FailMidStream { chunks, error } => Ok(Box::pin(async_stream::stream! {
                for chunk in chunks {
                    yield Ok::<_, TaleweaverError>(StreamChunk::delta(chunk));
                }
                yield Err(GatewayError::new(error).into());
            })),
            MockBehavior::Stall(chunks) => Ok(Box::pin(async_stream::stream! {
                for chunk in chunks {
                    yield Ok::<_, TaleweaverError>(StreamChunk::delta(chunk));
                }
                futures::future::pending::<()>().await;
            })),
            MockBehavior::Sequence(_) => unreachable!("sequences are flattened per call"),
        }
    }
}
