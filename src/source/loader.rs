//! One-shot startup load.
//!
//! Issued exactly once when the view comes up. There is no retry and no
//! timeout; the outcome is delivered to the event loop as a single event.

use super::{parser, RecordSource};
use crate::events::AppEvent;
use tokio::sync::mpsc;

pub async fn load_once(source: &dyn RecordSource, tx: &mpsc::UnboundedSender<AppEvent>) {
    let event = match source.fetch_records().await {
        Ok(body) => match parser::parse_records(&body) {
            Ok(records) => {
                tracing::debug!(source = %source.describe(), count = records.len(), "records parsed");
                AppEvent::RecordsLoaded(records)
            }
            Err(e) => AppEvent::LoadFailed(format!("Parse error: {e}")),
        },
        Err(e) => AppEvent::LoadFailed(format!("{e}")),
    };

    if tx.send(event).is_err() {
        tracing::warn!("load: channel closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use color_eyre::eyre::{eyre, Result};

    struct StubSource(Result<String, String>);

    #[async_trait]
    impl RecordSource for StubSource {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        async fn fetch_records(&self) -> Result<String> {
            self.0.clone().map_err(|e| eyre!(e))
        }
    }

    #[tokio::test]
    async fn success_sends_records() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let source = StubSource(Ok(r#"[{"id":"1","name":"Al","email":"a@x","role":"Admin"}]"#.to_string()));
        load_once(&source, &tx).await;
        match rx.recv().await {
            Some(AppEvent::RecordsLoaded(records)) => assert_eq!(records[0].name, "Al"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_sends_load_failed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let source = StubSource(Err("HTTP 503 Service Unavailable".to_string()));
        load_once(&source, &tx).await;
        match rx.recv().await {
            Some(AppEvent::LoadFailed(msg)) => assert!(msg.contains("503")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_sends_load_failed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let source = StubSource(Ok("<html>".to_string()));
        load_once(&source, &tx).await;
        match rx.recv().await {
            Some(AppEvent::LoadFailed(msg)) => assert!(msg.starts_with("Parse error")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let source = StubSource(Ok("[]".to_string()));
        load_once(&source, &tx).await;
    }
}
