//! Plain-text report rendering
//!
//! Read-only consumers of the assigned list for terminal output. Print
//! layout and localized display strings are out of scope; these renderings
//! exist so an operator can sanity-check a batch without the editor.

use std::collections::BTreeMap;

use avasa_core::{Category, Participant, Roster, SeatToken};

use crate::session::CourseInfo;

/// One line of course metadata, e.g. "S. Deshpande | 2026-01-14 to 2026-01-25".
pub fn course_header(course: &CourseInfo) -> String {
    let mut parts = Vec::new();
    if let Some(teacher) = &course.teacher_name {
        parts.push(teacher.clone());
    }
    if let (Some(start), Some(end)) = (course.start_date, course.end_date) {
        parts.push(format!("{start} to {end}"));
    }
    parts.join(" | ")
}

/// The hall grid with one cell per seat, row by row.
pub fn hall_grid(roster: &Roster) -> String {
    let layout = roster.layout();
    let mut seats: BTreeMap<(usize, usize), &Participant> = BTreeMap::new();
    for p in roster.participants() {
        if let Some(token) = p.seat_token() {
            seats.insert((token.row, token.col), p);
        }
    }

    let width = roster
        .participants()
        .iter()
        .map(|p| p.local_name.chars().count())
        .max()
        .unwrap_or(0)
        .max(8)
        + 2;

    let mut out = String::new();
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let token = SeatToken::new(row, col);
            let cell = match seats.get(&(row, col)) {
                Some(p) => format!("{token} {}", p.local_name),
                None => format!("{token} -"),
            };
            out.push_str(&format!("{cell:<width$}"));
        }
        out.push('\n');
    }
    out
}

/// Seat-ordered index of the hall, waiting records last.
pub fn seating_list(roster: &Roster) -> String {
    let mut seated: Vec<&Participant> = roster
        .participants()
        .iter()
        .filter(|p| p.seat_token().is_some())
        .collect();
    seated.sort_by_key(|p| {
        let t = p.seat_token().unwrap();
        (t.row, t.col)
    });

    let mut out = String::new();
    for p in &seated {
        out.push_str(&format!(
            "{:<5} {} ({})\n",
            p.seat_token().unwrap().to_string(),
            p.local_name,
            p.category.display_name()
        ));
    }
    for p in roster.participants().iter().filter(|p| p.is_waiting()) {
        out.push_str(&format!("WAIT  {}\n", p.local_name));
    }
    out
}

/// Numbered NEW-participant list with age and illness notes.
pub fn new_participant_list(roster: &Roster) -> String {
    let mut out = String::new();
    for (i, p) in roster
        .participants()
        .iter()
        .filter(|p| p.category == Category::New)
        .enumerate()
    {
        let illness = if p.illness.is_empty() { "-" } else { &p.illness };
        out.push_str(&format!(
            "{:>3}. {} age {} room {} illness: {}\n",
            i + 1,
            p.local_name,
            p.age,
            if p.room_no.is_empty() { "-" } else { &p.room_no },
            illness
        ));
    }
    out
}

/// Numbered OLD-participant list ordered by placement priority.
pub fn old_participant_list(roster: &Roster) -> String {
    let mut old: Vec<&Participant> = roster
        .participants()
        .iter()
        .filter(|p| p.category == Category::Old)
        .collect();
    old.sort_by(|a, b| b.seniority_score.total_cmp(&a.seniority_score));

    let mut out = String::new();
    for (i, p) in old.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} age {} seat {}\n",
            i + 1,
            p.local_name,
            p.age,
            p.seat.map(|s| s.to_string()).unwrap_or_else(|| "-".into())
        ));
    }
    out
}

/// Room chart ordered by numeric room id; unassigned records are omitted.
pub fn room_chart(roster: &Roster) -> String {
    let mut rooms: BTreeMap<u32, &Participant> = BTreeMap::new();
    for p in roster.participants() {
        let id = p.room_id();
        if id > 0 {
            rooms.entry(id).or_insert(p);
        }
    }

    let mut out = String::new();
    for (room, p) in rooms {
        out.push_str(&format!(
            "Room {:<4} {} ({})\n",
            room,
            p.local_name,
            p.category.display_name()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use avasa_core::Participant as P;
    use avasa_core::{CourseHistory, Gender, HallLayout, SeatingPolicy};

    fn sample_roster() -> Roster {
        let mut records = vec![
            P::new("Ram Pawar".into(), "Ram Pawar".into(), 45, Gender::Male),
            P::new("Asha Jadhav".into(), "Asha Jadhav".into(), 30, Gender::Female),
        ];
        records[0].courses = CourseHistory {
            ten_day: 2,
            ..Default::default()
        };
        records[0].category = Category::Old;
        records[0].room_no = "12".into();
        records[1].room_no = "7A".into();
        records[1].illness = "back pain".into();

        let mut roster = Roster::new(HallLayout::new(2, 2), SeatingPolicy::default());
        roster.replace_batch(records);
        roster
    }

    #[test]
    fn test_hall_grid_marks_seats_and_gaps() {
        let grid = hall_grid(&sample_roster());
        assert!(grid.contains("A1 Ram Pawar"));
        assert!(grid.contains("B2 -"));
    }

    #[test]
    fn test_seating_list_is_seat_ordered() {
        let list = seating_list(&sample_roster());
        let ram = list.find("Ram Pawar").unwrap();
        let asha = list.find("Asha Jadhav").unwrap();
        assert!(ram < asha);
    }

    #[test]
    fn test_category_lists() {
        let roster = sample_roster();
        let new_list = new_participant_list(&roster);
        assert!(new_list.contains("Asha Jadhav"));
        assert!(new_list.contains("back pain"));
        assert!(!new_list.contains("Ram Pawar"));

        let old_list = old_participant_list(&roster);
        assert!(old_list.contains("Ram Pawar"));
        assert!(!old_list.contains("Asha Jadhav"));
    }

    #[test]
    fn test_room_chart_ordered_by_room() {
        let chart = room_chart(&sample_roster());
        let asha = chart.find("Room 7").unwrap();
        let ram = chart.find("Room 12").unwrap();
        assert!(asha < ram);
    }

    #[test]
    fn test_course_header() {
        let course = CourseInfo {
            teacher_name: Some("S. Deshpande".into()),
            start_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 14),
            end_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 25),
        };
        let header = course_header(&course);
        assert!(header.contains("S. Deshpande"));
        assert!(header.contains("2026-01-14 to 2026-01-25"));
    }
}
