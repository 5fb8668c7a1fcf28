//! Dimension-change reconciliation
//!
//! Run whenever the grid shape or a seating toggle changes. A shape change
//! invalidates all manual spatial reasoning, so every pin is dropped; a
//! toggle change only drops pins that no longer fit the (unchanged) bounds.
//! Either way the assigner is re-run over the full record set.

use tracing::info;

use crate::models::Participant;
use crate::seating::{assign, HallLayout, SeatingPolicy};

/// Sanitize manual pins for a layout transition, then reassign.
pub fn reconcile(
    records: &[Participant],
    old_layout: HallLayout,
    new_layout: HallLayout,
    policy: &SeatingPolicy,
) -> Vec<Participant> {
    let mut sanitized = records.to_vec();

    if old_layout != new_layout {
        info!(
            rows = new_layout.rows,
            cols = new_layout.cols,
            "Grid dimensions changed; resetting all manual pins"
        );
        for p in sanitized.iter_mut() {
            p.manual_seat = None;
            p.seat = None;
        }
    } else {
        for p in sanitized.iter_mut() {
            if let Some(pin) = p.manual_seat {
                if !pin.in_bounds(new_layout.rows, new_layout.cols) {
                    p.manual_seat = None;
                    p.seat = None;
                }
            }
        }
    }

    assign(&sanitized, new_layout, policy)
}
