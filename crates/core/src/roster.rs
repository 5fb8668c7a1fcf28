//! In-memory session roster
//!
//! Central store of the participant batch for one course session, plus the
//! current hall layout and seating toggles. Every mutating operation
//! rescores the touched record and re-runs the assigner so seat state never
//! goes stale; the whole grid is recomputed each time (record counts are
//! small).

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::invariants::assert_record_invariants;
use crate::models::{Category, HearingSide, Participant, SeatToken, SpecialRequirement};
use crate::reconcile::reconcile;
use crate::rooms;
use crate::seating::{assign, HallLayout, SeatingPolicy};

/// Field edits applied from an editing surface. `None` leaves a field as-is.
#[derive(Debug, Clone, Default)]
pub struct ParticipantUpdate {
    pub local_name: Option<String>,
    pub age: Option<u32>,
    pub special: Option<SpecialRequirement>,
    pub hearing: Option<HearingSide>,
    pub room_no: Option<String>,
    pub illness: Option<String>,
}

/// Category counts for dashboard consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub new: usize,
    pub old: usize,
    pub servers: usize,
}

/// Session roster - central store of participant records
#[derive(Debug, Clone)]
pub struct Roster {
    participants: Vec<Participant>,
    layout: HallLayout,
    policy: SeatingPolicy,
}

impl Roster {
    pub fn new(layout: HallLayout, policy: SeatingPolicy) -> Self {
        Self {
            participants: Vec::new(),
            layout,
            policy,
        }
    }

    /// Replace the whole batch, discarding all prior in-memory edits, and
    /// place everyone.
    pub fn replace_batch(&mut self, mut participants: Vec<Participant>) {
        for p in participants.iter_mut() {
            p.rescore();
            assert_record_invariants(p);
        }
        self.participants = participants;
        self.reassign();
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn layout(&self) -> HallLayout {
        self.layout
    }

    pub fn policy(&self) -> SeatingPolicy {
        self.policy
    }

    pub fn get(&self, id: Uuid) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn stats(&self) -> RosterStats {
        let mut stats = RosterStats {
            total: self.participants.len(),
            new: 0,
            old: 0,
            servers: 0,
        };
        for p in &self.participants {
            match p.category {
                Category::New => stats.new += 1,
                Category::Old => stats.old += 1,
                Category::Server => stats.servers += 1,
            }
        }
        stats
    }

    /// Apply field edits, rescore, and re-place the full roster.
    pub fn apply_update(&mut self, id: Uuid, update: ParticipantUpdate) -> Result<()> {
        let p = self.get_mut(id)?;
        if let Some(local_name) = update.local_name {
            p.local_name = local_name;
        }
        if let Some(age) = update.age {
            p.age = age;
        }
        if let Some(special) = update.special {
            p.special = special;
        }
        if let Some(hearing) = update.hearing {
            p.hearing = hearing;
        }
        if let Some(room_no) = update.room_no {
            p.room_no = room_no;
        }
        if let Some(illness) = update.illness {
            p.illness = illness;
        }
        p.rescore();
        self.reassign();
        Ok(())
    }

    /// Toggle the teenager course flag, applying the NEW <-> OLD transition.
    pub fn toggle_teenager(&mut self, id: Uuid, is_teenager: bool) -> Result<()> {
        let p = self.get_mut(id)?;
        p.courses.teenager = if is_teenager { 1 } else { 0 };
        p.category = p
            .category
            .after_teenager_toggle(is_teenager, p.courses.non_teenager_zero());
        p.rescore();
        self.reassign();
        Ok(())
    }

    /// Flip the server flag. Reclassifying to SERVER explicitly clears any
    /// held seat; clearing the flag re-derives NEW/OLD from course history.
    pub fn set_server(&mut self, id: Uuid, is_server: bool) -> Result<()> {
        let p = self.get_mut(id)?;
        if is_server {
            p.category = Category::Server;
            p.seat = None;
            p.manual_seat = None;
        } else {
            p.category = Category::derive(false, &p.courses);
        }
        p.rescore();
        self.reassign();
        Ok(())
    }

    /// Drag-and-drop re-pin: pin the source record to the target seat; if the
    /// target was occupied, its occupant loses pin and seat and is re-placed
    /// by merit on the reassignment that follows.
    pub fn repin_seat(&mut self, source_id: Uuid, target: SeatToken) -> Result<()> {
        if self.get(source_id).is_none() {
            return Err(Error::NotFound(format!("participant {source_id}")));
        }
        if let Some(occupant) = self
            .participants
            .iter_mut()
            .find(|p| p.id != source_id && p.seat_token() == Some(target))
        {
            occupant.manual_seat = None;
            occupant.seat = None;
        }
        let source = self.get_mut(source_id)?;
        source.manual_seat = Some(target);
        self.reassign();
        Ok(())
    }

    /// Swap the room fields of the holders of two numeric room ids.
    pub fn swap_rooms(&mut self, room_a: u32, room_b: u32) {
        self.participants = rooms::swap_rooms(&self.participants, room_a, room_b);
    }

    /// Change grid dimensions; all manual pins are reset when the shape
    /// actually changes.
    pub fn resize(&mut self, layout: HallLayout) {
        let old = self.layout;
        self.layout = layout;
        self.participants = reconcile(&self.participants, old, layout, &self.policy);
    }

    /// Change seating toggles; pins survive but are bounds-checked.
    pub fn set_policy(&mut self, policy: SeatingPolicy) {
        self.policy = policy;
        self.participants = reconcile(&self.participants, self.layout, self.layout, &self.policy);
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut Participant> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("participant {id}")))
    }

    fn reassign(&mut self) {
        self.participants = assign(&self.participants, self.layout, &self.policy);
    }
}
