//! Live Push Hub
//!
//! Process-wide broadcaster for dashboard updates. One ticker task
//! regenerates the prediction and parameter series every interval and
//! fans them out to all connected WebSocket clients.
//!
//! ```text
//!   start() ──► ticker task ──► broadcast::Sender<PushMessage> ──► /ws client 1
//!                   ▲                                          └─► /ws client N
//!   stop()  ──► shutdown signal
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;

use crate::mock;
use crate::models::{ParameterSnapshot, PredictionRecord};
use crate::prediction::{PredictionError, Weights};

/// Buffered messages per subscriber before it starts lagging
const CHANNEL_CAPACITY: usize = 64;

/// Message sent to live clients as `{"event": ..., "data": ...}`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum PushMessage {
    PredictionUpdate(PredictionRecord),
    ParameterUpdate(ParameterSnapshot),
}

#[derive(Clone)]
pub struct PushHub {
    inner: Arc<HubInner>,
}

struct HubInner {
    updates: broadcast::Sender<PushMessage>,
    shutdown: broadcast::Sender<()>,
    task: Mutex<Option<JoinHandle<()>>>,
    interval: Duration,
    weights: Weights,
}

impl PushHub {
    pub fn new(interval: Duration, weights: Weights) -> Self {
        let (updates, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (shutdown, _) = broadcast::channel(1);

        Self {
            inner: Arc::new(HubInner {
                updates,
                shutdown,
                task: Mutex::new(None),
                interval,
                weights,
            }),
        }
    }

    /// Fresh prediction and parameter series
    pub fn snapshot(&self) -> Result<Vec<PushMessage>, PredictionError> {
        let mut rng = rand::thread_rng();
        let prediction = mock::mock_prediction(&mut rng, &self.inner.weights)?;
        let parameters = mock::parameter_snapshot(&mut rng);

        Ok(vec![
            PushMessage::PredictionUpdate(prediction),
            PushMessage::ParameterUpdate(parameters),
        ])
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PushMessage> {
        self.inner.updates.subscribe()
    }

    /// Fires once when the hub is stopped
    pub fn shutdown_signal(&self) -> broadcast::Receiver<()> {
        self.inner.shutdown.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.updates.receiver_count()
    }

    /// Broadcast a snapshot immediately. Returns the number of receivers
    /// reached (0 when nobody is listening).
    pub fn publish_now(&self) -> Result<usize, PredictionError> {
        let mut reached = 0;
        for message in self.snapshot()? {
            // Err only means there are no receivers right now
            reached = self.inner.updates.send(message).unwrap_or(0);
        }
        Ok(reached)
    }

    pub async fn is_running(&self) -> bool {
        self.inner
            .task
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Spawn the ticker. No-op if it is already running.
    pub async fn start(&self) {
        let mut task = self.inner.task.lock().await;
        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let hub = self.clone();
        let mut shutdown_rx = self.inner.shutdown.subscribe();
        let period = self.inner.interval;

        *task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // First tick is immediate; clients already get a snapshot on connect.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match hub.publish_now() {
                            Ok(reached) => tracing::debug!(reached, "Pushed dashboard update"),
                            Err(e) => tracing::error!("Failed to build dashboard update: {}", e),
                        }
                    }
                    _ = shutdown_rx.recv() => break,
                }
            }

            tracing::info!("Push hub ticker stopped");
        }));

        tracing::info!(interval_secs = period.as_secs_f64(), "Push hub started");
    }

    /// Signal the ticker and connected clients to stop, then wait for the
    /// ticker to exit. Safe to call more than once.
    pub async fn stop(&self) {
        let handle = self.inner.task.lock().await.take();
        let _ = self.inner.shutdown.send(());

        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!("Push hub ticker ended abnormally: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub(interval: Duration) -> PushHub {
        PushHub::new(interval, Weights::default())
    }

    #[test]
    fn test_message_wire_format() {
        let messages = hub(Duration::from_secs(30)).snapshot().unwrap();
        assert_eq!(messages.len(), 2);

        let prediction = serde_json::to_value(&messages[0]).unwrap();
        assert_eq!(prediction["event"], "prediction_update");
        assert!(prediction["data"]["score"].is_number());

        let parameters = serde_json::to_value(&messages[1]).unwrap();
        assert_eq!(parameters["event"], "parameter_update");
        assert_eq!(parameters["data"]["tec"]["labels"].as_array().unwrap().len(), 24);
    }

    #[tokio::test]
    async fn test_publish_reaches_subscribers() {
        let hub = hub(Duration::from_secs(30));
        assert_eq!(hub.publish_now().unwrap(), 0);

        let mut rx = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 1);
        assert_eq!(hub.publish_now().unwrap(), 1);

        assert!(matches!(rx.recv().await.unwrap(), PushMessage::PredictionUpdate(_)));
        assert!(matches!(rx.recv().await.unwrap(), PushMessage::ParameterUpdate(_)));
    }

    #[tokio::test]
    async fn test_start_stop_lifecycle() {
        let hub = hub(Duration::from_millis(20));
        assert!(!hub.is_running().await);

        hub.start().await;
        hub.start().await;
        assert!(hub.is_running().await);

        hub.stop().await;
        assert!(!hub.is_running().await);

        // Second stop is harmless
        hub.stop().await;
    }

    #[tokio::test]
    async fn test_ticker_broadcasts_periodically() {
        let hub = hub(Duration::from_millis(20));
        let mut rx = hub.subscribe();
        hub.start().await;

        let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("update within timeout")
            .unwrap();
        assert!(matches!(first, PushMessage::PredictionUpdate(_)));

        hub.stop().await;
    }

    #[tokio::test]
    async fn test_stop_notifies_clients() {
        let hub = hub(Duration::from_secs(30));
        let mut signal = hub.shutdown_signal();
        hub.start().await;
        hub.stop().await;

        assert!(signal.recv().await.is_ok());
    }
}
