//! TCP client for the extraction service
//!
//! One connection per ingestion: connect, send the raw text, await the
//! batch, disconnect. There is no retry policy and no cancellation; any
//! failure is terminal for the request and the caller's prior records stay
//! untouched.

use std::time::Duration;

use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::frame::{read_frame, write_frame};
use crate::protocol::{Message, RawBatch};

/// Default reply deadline for one extraction exchange
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client handle for the extraction service
#[derive(Debug, Clone)]
pub struct ExtractClient {
    addr: String,
    timeout: Duration,
}

impl ExtractClient {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Submit a raw text blob and await the structured batch.
    pub async fn extract(&self, raw_text: &str) -> Result<RawBatch> {
        let deadline = self.timeout;
        match tokio::time::timeout(deadline, self.exchange(raw_text)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(addr = %self.addr, "Extraction timed out");
                Err(Error::Timeout(deadline.as_secs()))
            }
        }
    }

    async fn exchange(&self, raw_text: &str) -> Result<RawBatch> {
        info!(addr = %self.addr, bytes = raw_text.len(), "Submitting text for extraction");
        let mut stream = TcpStream::connect(&self.addr).await?;

        write_frame(
            &mut stream,
            &Message::Extract {
                raw_text: raw_text.to_string(),
            },
        )
        .await?;

        match read_frame::<_, Message>(&mut stream).await? {
            Message::Batch(batch) => {
                info!(
                    participants = batch.participants.len(),
                    "Extraction batch received"
                );
                Ok(batch)
            }
            Message::Failed { reason } => {
                warn!(reason = %reason, "Extraction service reported failure");
                Err(Error::Failed(reason))
            }
            Message::Extract { .. } => {
                Err(Error::Protocol("Unexpected request frame from service".into()))
            }
        }
    }
}
