//! Avasa Extraction Boundary
//!
//! Client for the external text-extraction service that turns a pasted
//! course roster into structured participant records.
//!
//! # Architecture
//!
//! - **Client**: one request/response exchange per ingestion
//! - **Protocol**: length-prefixed JSON messages over TCP
//!
//! The service itself (translation, classification) is an external
//! collaborator; this crate only defines the wire contract and the caller
//! side of it.

pub mod client;
pub mod error;
mod frame;
pub mod protocol;

pub use client::{ExtractClient, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use protocol::{Message, RawBatch, RawCourses, RawParticipant};

/// Default port for the extraction service
pub const DEFAULT_PORT: u16 = 7461;
