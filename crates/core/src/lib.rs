//! Avasa Core Library
//!
//! Models, seniority scoring, the hall seating assigner, room reassignment,
//! and session-roster state for residential course management.

pub mod error;
pub mod invariants;
pub mod models;
pub mod reconcile;
pub mod rooms;
pub mod roster;
pub mod seating;
pub mod seniority;
pub mod storage;

pub use error::{Error, Result};
pub use models::*;
pub use reconcile::reconcile;
pub use rooms::{room_number, swap_rooms};
pub use roster::{ParticipantUpdate, Roster, RosterStats};
pub use seating::{
    assign, center_out_columns, FillDirection, HallLayout, SeatingPolicy, SpecialSide,
};
pub use seniority::score;
pub use storage::{apply_correction, Database, SurnameStore};
