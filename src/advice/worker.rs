//! Background advice requests
//!
//! The provider call runs on its own tokio task so the caller never blocks
//! ledger operations on network I/O. The outcome comes back over a oneshot
//! channel.

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::client::AdvisorClient;
use super::error::AdviceError;

/// Pending result of a spawned advice request
#[derive(Debug)]
pub struct AdviceHandle {
    rx: oneshot::Receiver<Result<String, AdviceError>>,
}

impl AdviceHandle {
    /// Wait for the advice text
    ///
    /// Yields [`AdviceError::Cancelled`] if the task ended without a result.
    pub async fn wait(self) -> Result<String, AdviceError> {
        self.rx.await.map_err(|_| AdviceError::Cancelled)?
    }
}

/// Start an advice request on the current tokio runtime
pub fn spawn_advice(client: Arc<dyn AdvisorClient>, summary: String) -> AdviceHandle {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let result = client.advise(&summary).await;
        match &result {
            Ok(text) => debug!(chars = text.len(), "advice received"),
            Err(e) => warn!(error = %e, "advice request failed"),
        }
        // receiver gone means nobody is waiting any more
        let _ = tx.send(result);
    });

    AdviceHandle { rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubAdvisor {
        reply: Result<String, AdviceError>,
        seen: Mutex<Vec<String>>,
    }

    impl StubAdvisor {
        fn new(reply: Result<String, AdviceError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl AdvisorClient for StubAdvisor {
        async fn advise(&self, summary: &str) -> Result<String, AdviceError> {
            self.seen.lock().unwrap().push(summary.to_string());
            self.reply.clone()
        }
    }

    struct PanickingAdvisor;

    #[async_trait]
    impl AdvisorClient for PanickingAdvisor {
        async fn advise(&self, _summary: &str) -> Result<String, AdviceError> {
            panic!("provider blew up");
        }
    }

    #[tokio::test]
    async fn test_advice_delivered() {
        let stub = StubAdvisor::new(Ok("Spend less on snacks.".into()));

        let handle = spawn_advice(stub.clone(), "summary text".into());

        assert_eq!(handle.wait().await.unwrap(), "Spend less on snacks.");
        assert_eq!(*stub.seen.lock().unwrap(), vec!["summary text".to_string()]);
    }

    #[tokio::test]
    async fn test_provider_failure_delivered() {
        let stub = StubAdvisor::new(Err(AdviceError::Provider("rate limited".into())));

        let err = spawn_advice(stub, "s".into()).wait().await.unwrap_err();

        assert_eq!(err, AdviceError::Provider("rate limited".into()));
    }

    #[tokio::test]
    async fn test_crashed_task_reports_cancelled() {
        let err = spawn_advice(Arc::new(PanickingAdvisor), "s".into())
            .wait()
            .await
            .unwrap_err();

        assert_eq!(err, AdviceError::Cancelled);
    }
}
