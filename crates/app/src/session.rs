//! Session state
//!
//! One session = one course being organized: the roster for the current
//! batch, course metadata recovered by the extraction service, and the
//! database holding learned surname corrections. A fresh ingestion replaces
//! the roster wholesale; everything else persists.

use chrono::NaiveDate;
use tracing::info;

use avasa_core::{Database, HallLayout, Result, Roster, SeatingPolicy};
use avasa_extract::RawBatch;

use crate::ingest::{build_participants, placeable_count};

/// Course metadata extracted alongside the participant batch
#[derive(Debug, Clone, Default)]
pub struct CourseInfo {
    pub teacher_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Main session state
pub struct Session {
    db: Database,
    roster: Roster,
    course: CourseInfo,
    /// Operator-fixed grid; `None` auto-sizes per batch
    fixed_layout: Option<HallLayout>,
}

impl Session {
    /// Initial layout before any batch arrives, matching the editor default.
    const INITIAL_LAYOUT: HallLayout = HallLayout { rows: 8, cols: 8 };

    pub fn new(db: Database, policy: SeatingPolicy, fixed_layout: Option<HallLayout>) -> Self {
        let layout = fixed_layout.unwrap_or(Self::INITIAL_LAYOUT);
        Self {
            db,
            roster: Roster::new(layout, policy),
            course: CourseInfo::default(),
            fixed_layout,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn course(&self) -> &CourseInfo {
        &self.course
    }

    /// Ingest a fresh extraction batch, replacing all prior records and
    /// edits. The grid is auto-sized for the batch unless the operator fixed
    /// dimensions in config.
    pub fn ingest(&mut self, batch: RawBatch) -> Result<()> {
        let corrections = self.db.surnames().load_all()?;
        let participants = build_participants(&batch.participants, &corrections);

        let layout = self
            .fixed_layout
            .unwrap_or_else(|| HallLayout::auto_for_count(placeable_count(&participants)));

        info!(
            participants = participants.len(),
            rows = layout.rows,
            cols = layout.cols,
            "Ingesting extraction batch"
        );

        self.roster = Roster::new(layout, self.roster.policy());
        self.roster.replace_batch(participants);

        self.course = CourseInfo {
            teacher_name: batch.teacher_name,
            start_date: batch.start_date,
            end_date: batch.end_date,
        };
        Ok(())
    }

    /// Teach the correction dictionary a new surname mapping. Takes effect
    /// at the next ingestion merge.
    pub fn learn_surname(&self, original_surname: &str, corrected: &str) -> Result<()> {
        self.db.surnames().save(original_surname, corrected)
    }
}
