//! Room-number parsing and the pairwise room swap

use crate::models::Participant;

/// Extract the numeric room id from a free-text room field. Non-digit
/// characters are ignored; a field with no digits parses to 0 (unassigned).
pub fn room_number(field: &str) -> u32 {
    let digits: String = field.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

impl Participant {
    pub fn room_id(&self) -> u32 {
        room_number(&self.room_no)
    }
}

/// Swap the room fields of whichever records currently hold `room_a` and
/// `room_b`. Records matching neither id are unaffected; if only one id has
/// a holder the swap degenerates into a move. No merit ordering applies.
/// Swapped values are written as plain numeric strings.
pub fn swap_rooms(records: &[Participant], room_a: u32, room_b: u32) -> Vec<Participant> {
    let mut out = records.to_vec();
    // Room id 0 means unassigned and is never a swap endpoint.
    if room_a == room_b || room_a == 0 || room_b == 0 {
        return out;
    }

    let holder_a = out.iter().position(|p| p.room_id() == room_a);
    let holder_b = out.iter().position(|p| p.room_id() == room_b);

    if let Some(i) = holder_a {
        out[i].room_no = room_b.to_string();
    }
    if let Some(i) = holder_b {
        out[i].room_no = room_a.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn with_room(name: &str, room: &str) -> Participant {
        let mut p = Participant::new(name.into(), name.into(), 30, Gender::Male);
        p.room_no = room.into();
        p
    }

    #[test]
    fn test_room_number_strips_non_digits() {
        assert_eq!(room_number("12A"), 12);
        assert_eq!(room_number(" 7 "), 7);
        assert_eq!(room_number("room-4b"), 4);
        assert_eq!(room_number("TBD"), 0);
        assert_eq!(room_number(""), 0);
    }

    #[test]
    fn test_swap_both_holders() {
        let records = vec![with_room("x", "12A"), with_room("y", "7")];
        let out = swap_rooms(&records, 12, 7);
        assert_eq!(out[0].room_no, "7");
        assert_eq!(out[1].room_no, "12");
    }

    #[test]
    fn test_swap_into_empty_room_is_a_move() {
        let records = vec![with_room("x", "3"), with_room("y", "5")];
        let out = swap_rooms(&records, 3, 9);
        assert_eq!(out[0].room_no, "9");
        assert_eq!(out[1].room_no, "5");
    }

    #[test]
    fn test_swap_same_room_is_noop() {
        let records = vec![with_room("x", "3")];
        let out = swap_rooms(&records, 3, 3);
        assert_eq!(out[0].room_no, "3");
    }

    #[test]
    fn test_unassigned_records_never_match() {
        let records = vec![with_room("x", ""), with_room("y", "2")];
        let out = swap_rooms(&records, 0, 2);
        assert_eq!(out[0].room_no, "");
        assert_eq!(out[1].room_no, "2");
    }
}
