//! Hall seating assignment
//!
//! The grid is transient working state: rebuilt on every run, discarded after
//! the output list is produced. Placement happens in four phases (manual
//! pins, hearing-side priority, special-requirement column, regular
//! placement); each phase only fills currently-empty slots. Output preserves
//! input record order with seat fields rewritten.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{
    Category, HearingSide, Participant, SeatAssignment, SeatToken, SpecialRequirement,
};

/// Hall grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallLayout {
    pub rows: usize,
    pub cols: usize,
}

impl HallLayout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Pick grid dimensions for a participant count (non-SERVER records).
    /// Wide-and-shallow up to 40 seats, then 8 columns and as many rows as
    /// needed.
    pub fn auto_for_count(count: usize) -> Self {
        let (cols, rows) = match count {
            0..=4 => (2, 2),
            5..=6 => (3, 2),
            7..=8 => (4, 2),
            9..=12 => (4, 3),
            13..=16 => (4, 4),
            17..=20 => (5, 4),
            21..=24 => (6, 4),
            25 => (5, 5),
            26..=30 => (6, 5),
            31..=35 => (7, 5),
            36..=40 => (8, 5),
            n => (8, n.div_ceil(8)),
        };
        Self { rows, cols }
    }
}

/// Which edge column receives Chair/Chauki participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecialSide {
    Left,
    #[default]
    Right,
}

/// Row fill order within the special column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillDirection {
    Front,
    #[default]
    Back,
}

/// Operator toggles for the special-requirement column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatingPolicy {
    #[serde(default)]
    pub special_side: SpecialSide,
    #[serde(default)]
    pub special_fill: FillDirection,
}

/// Column visitation order starting at the two columns straddling the
/// horizontal center, alternating outward. For 2 columns this is [0, 1].
pub fn center_out_columns(cols: usize) -> Vec<usize> {
    if cols == 0 {
        return Vec::new();
    }
    let mut order = Vec::with_capacity(cols);
    let mut left = (cols - 1) / 2;
    let mut right = left + 1;
    order.push(left);
    while left > 0 || right < cols {
        if right < cols {
            order.push(right);
            right += 1;
        }
        if left > 0 {
            left -= 1;
            order.push(left);
        }
    }
    order
}

/// Assign every non-SERVER record a seat token or the WAITING sentinel.
/// SERVER records pass through with their seat cleared. Deterministic for
/// identical inputs; the input list is not mutated.
pub fn assign(
    records: &[Participant],
    layout: HallLayout,
    policy: &SeatingPolicy,
) -> Vec<Participant> {
    let mut out: Vec<Participant> = records.to_vec();

    for p in out.iter_mut().filter(|p| p.category == Category::Server) {
        p.seat = None;
    }

    if layout.rows == 0 || layout.cols == 0 {
        for p in out.iter_mut().filter(|p| p.category != Category::Server) {
            p.manual_seat = None;
            p.seat = Some(SeatAssignment::Waiting);
        }
        return out;
    }

    let mut grid = Grid::new(layout);
    let mut auto_pool: Vec<usize> = Vec::new();

    // Phase 1: manual pins, in input order. An unparseable, out-of-bounds,
    // or colliding pin demotes the record to automatic placement.
    for i in 0..out.len() {
        if out[i].category == Category::Server {
            continue;
        }
        match out[i].manual_seat {
            Some(token)
                if token.in_bounds(layout.rows, layout.cols) && grid.is_free(token.row, token.col) =>
            {
                grid.occupy(token.row, token.col, i);
                out[i].seat = Some(SeatAssignment::Seat(token));
            }
            Some(token) => {
                debug!(seat = %token, "Manual pin invalid for current grid, demoting to automatic");
                out[i].manual_seat = None;
                out[i].seat = None;
                auto_pool.push(i);
            }
            None => auto_pool.push(i),
        }
    }

    let mut hearing: Vec<usize> = auto_pool
        .iter()
        .copied()
        .filter(|&i| out[i].hearing != HearingSide::None)
        .collect();
    hearing.sort_by(|&a, &b| priority_order(&out[a], &out[b]));

    let remainder: Vec<usize> = auto_pool
        .iter()
        .copied()
        .filter(|&i| out[i].hearing == HearingSide::None)
        .collect();

    let mut special_queue: Vec<usize> = remainder
        .iter()
        .copied()
        .filter(|&i| out[i].special.needs_special_column())
        .collect();
    special_queue.sort_by(|&a, &b| priority_order(&out[a], &out[b]));

    let mut regular: Vec<usize> = remainder
        .iter()
        .copied()
        .filter(|&i| !out[i].special.needs_special_column())
        .collect();
    regular.sort_by(|&a, &b| regular_order(&out[a], &out[b]));

    // Phase 2: hearing-flagged records take the rear row nearest their good
    // ear; when the rear row is full they rejoin the regular pool.
    let rear = layout.rows - 1;
    for &i in &hearing {
        let slot = match out[i].hearing {
            HearingSide::Left => (0..layout.cols).find(|&c| grid.is_free(rear, c)),
            HearingSide::Right => (0..layout.cols).rev().find(|&c| grid.is_free(rear, c)),
            HearingSide::None => unreachable!(),
        };
        match slot {
            Some(col) => {
                grid.occupy(rear, col, i);
                out[i].seat = Some(SeatAssignment::Seat(SeatToken::new(rear, col)));
            }
            None => regular.push(i),
        }
    }

    // Phase 3: Chair/Chauki down the designated edge column. Candidate rows
    // follow the fill direction, but the selected rows are handed to the
    // queue top-to-bottom so higher priority sits closer to the front.
    let special_col = match policy.special_side {
        SpecialSide::Left => 0,
        SpecialSide::Right => layout.cols - 1,
    };
    let mut target_rows: Vec<usize> = match policy.special_fill {
        FillDirection::Front => (0..layout.rows)
            .filter(|&r| grid.is_free(r, special_col))
            .collect(),
        FillDirection::Back => (0..layout.rows)
            .rev()
            .filter(|&r| grid.is_free(r, special_col))
            .collect(),
    };
    target_rows.truncate(special_queue.len());
    target_rows.sort_unstable();
    for (slot, &i) in special_queue.iter().enumerate() {
        match target_rows.get(slot) {
            Some(&row) => {
                grid.occupy(row, special_col, i);
                out[i].seat = Some(SeatAssignment::Seat(SeatToken::new(row, special_col)));
            }
            None => regular.push(i),
        }
    }

    // Phase 4: OLD records cluster toward the horizontal center of each row;
    // NEW records first-fit left to right, top to bottom.
    let center_cols = center_out_columns(layout.cols);
    let mut waiting = 0usize;
    for &i in &regular {
        let slot = if out[i].category == Category::Old {
            (0..layout.rows)
                .flat_map(|r| center_cols.iter().map(move |&c| (r, c)))
                .find(|&(r, c)| grid.is_free(r, c))
        } else {
            (0..layout.rows)
                .flat_map(|r| (0..layout.cols).map(move |c| (r, c)))
                .find(|&(r, c)| grid.is_free(r, c))
        };
        match slot {
            Some((row, col)) => {
                grid.occupy(row, col, i);
                out[i].seat = Some(SeatAssignment::Seat(SeatToken::new(row, col)));
            }
            None => {
                out[i].seat = Some(SeatAssignment::Waiting);
                waiting += 1;
            }
        }
    }

    if waiting > 0 {
        warn!(
            waiting,
            rows = layout.rows,
            cols = layout.cols,
            "Hall capacity exhausted; records left waiting"
        );
    }

    crate::invariants::assert_seating_invariants(&out, layout);
    out
}

/// Priority comparator for the hearing and special-column queues:
/// Chair before non-Chair, OLD before NEW, then descending score (OLD) or
/// descending age (NEW).
fn priority_order(a: &Participant, b: &Participant) -> Ordering {
    let a_chair = a.special == SpecialRequirement::Chair;
    let b_chair = b.special == SpecialRequirement::Chair;
    if a_chair != b_chair {
        return if a_chair { Ordering::Less } else { Ordering::Greater };
    }
    regular_order(a, b)
}

/// Ordering for the regular pool: OLD before NEW, OLD by descending
/// seniority score, NEW by descending age.
fn regular_order(a: &Participant, b: &Participant) -> Ordering {
    match (a.category, b.category) {
        (Category::Old, Category::New) => Ordering::Less,
        (Category::New, Category::Old) => Ordering::Greater,
        (Category::Old, Category::Old) => b.seniority_score.total_cmp(&a.seniority_score),
        _ => b.age.cmp(&a.age),
    }
}

/// Occupancy matrix; slots hold the index of the placed record.
struct Grid {
    cols: usize,
    slots: Vec<Option<usize>>,
}

impl Grid {
    fn new(layout: HallLayout) -> Self {
        Self {
            cols: layout.cols,
            slots: vec![None; layout.capacity()],
        }
    }

    fn is_free(&self, row: usize, col: usize) -> bool {
        self.slots[row * self.cols + col].is_none()
    }

    fn occupy(&mut self, row: usize, col: usize, record: usize) {
        debug_assert!(self.is_free(row, col), "slot {row},{col} already occupied");
        self.slots[row * self.cols + col] = Some(record);
    }
}
