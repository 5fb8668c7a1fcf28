//! Extraction protocol message types
//!
//! All messages are JSON-serialized and length-prefixed on the wire. The
//! service receives one raw text blob and replies with one structured batch;
//! there are no intermediate or partial results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Course counters as reported by the service. Anything missing defaults to
/// zero; the core never validates beyond that.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawCourses {
    #[serde(default)]
    pub sixty_day: u32,
    #[serde(default)]
    pub forty_five_day: u32,
    #[serde(default)]
    pub thirty_day: u32,
    #[serde(default)]
    pub twenty_day: u32,
    #[serde(default)]
    pub satipatthana: u32,
    #[serde(default)]
    pub special: u32,
    #[serde(default)]
    pub tsc: u32,
    #[serde(default)]
    pub ten_day: u32,
    #[serde(default)]
    pub teenager: u32,
    #[serde(default)]
    pub seva: u32,
}

/// One participant sub-record as extracted from the raw text. Enum-like
/// fields stay strings on the wire; the ingestion layer maps unrecognized
/// values to their None variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawParticipant {
    pub original_name: String,
    #[serde(default)]
    pub local_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub room_no: String,
    #[serde(default)]
    pub illness: String,
    #[serde(default)]
    pub special: String,
    #[serde(default)]
    pub hearing: String,
    #[serde(default)]
    pub is_server: bool,
    #[serde(default)]
    pub courses: RawCourses,
}

/// One extraction batch: the ordered participant list plus whatever course
/// metadata the service could recover from the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBatch {
    #[serde(default)]
    pub participants: Vec<RawParticipant>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub teacher_name: Option<String>,
}

/// Extraction protocol messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    /// Client submits a raw text blob for extraction
    Extract { raw_text: String },

    /// Service replies with the structured batch
    Batch(RawBatch),

    /// Service could not process the submission
    Failed { reason: String },
}
