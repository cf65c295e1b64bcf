//! Where the record collection comes from.
//!
//! [`RecordSource`] hides the transport so the loader can be driven by the
//! HTTP endpoint in the binary and by an in-memory stub in tests.

pub mod http;
pub mod loader;
pub mod parser;

use async_trait::async_trait;
use color_eyre::eyre::Result;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
    /// Fetches the raw response body.
    async fn fetch_records(&self) -> Result<String>;
}
