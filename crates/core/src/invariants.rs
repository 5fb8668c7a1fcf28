//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible seating states during
//! development. Compiled out in release builds.

use std::collections::HashSet;

use crate::models::{Category, Participant, SeatAssignment};
use crate::seating::HallLayout;

/// Validate the output of a seating run.
pub fn assert_seating_invariants(records: &[Participant], layout: HallLayout) {
    if cfg!(not(debug_assertions)) {
        return;
    }

    let mut occupied = HashSet::new();
    for p in records {
        match p.category {
            Category::Server => {
                debug_assert!(
                    p.seat.is_none(),
                    "server {} holds seat {:?}",
                    p.id,
                    p.seat
                );
            }
            _ => {
                if let Some(SeatAssignment::Seat(token)) = p.seat {
                    debug_assert!(
                        token.in_bounds(layout.rows, layout.cols),
                        "participant {} seated out of bounds at {}",
                        p.id,
                        token
                    );
                    debug_assert!(
                        occupied.insert(token),
                        "seat {} assigned to more than one participant",
                        token
                    );
                    if let Some(pin) = p.manual_seat {
                        debug_assert!(
                            pin == token,
                            "participant {} pinned to {} but seated at {}",
                            p.id,
                            pin,
                            token
                        );
                    }
                }
            }
        }
    }
}

/// Validate a roster record before it is used for placement.
pub fn assert_record_invariants(p: &Participant) {
    debug_assert!(
        !p.original_name.trim().is_empty(),
        "participant {} has empty name",
        p.id
    );
    if p.category == Category::New {
        debug_assert!(
            !p.courses.any_completed(),
            "NEW participant {} has completed courses",
            p.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseHistory, Gender, SeatToken};

    fn participant(name: &str) -> Participant {
        Participant::new(name.into(), name.into(), 30, Gender::Male)
    }

    #[test]
    fn test_valid_seating_passes() {
        let mut a = participant("a");
        a.seat = Some(SeatAssignment::Seat(SeatToken::new(0, 0)));
        let mut b = participant("b");
        b.seat = Some(SeatAssignment::Waiting);
        assert_seating_invariants(&[a, b], HallLayout::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "more than one participant")]
    fn test_duplicate_seat_panics() {
        let mut a = participant("a");
        a.seat = Some(SeatAssignment::Seat(SeatToken::new(0, 0)));
        let mut b = participant("b");
        b.seat = Some(SeatAssignment::Seat(SeatToken::new(0, 0)));
        assert_seating_invariants(&[a, b], HallLayout::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "holds seat")]
    fn test_seated_server_panics() {
        let mut s = participant("s").with_courses(CourseHistory::default(), true);
        s.seat = Some(SeatAssignment::Seat(SeatToken::new(0, 0)));
        assert_seating_invariants(&[s], HallLayout::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "has completed courses")]
    fn test_new_with_courses_panics() {
        let mut p = participant("p");
        p.courses.ten_day = 1;
        assert_record_invariants(&p);
    }
}
