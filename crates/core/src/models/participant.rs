//! Participant record - the central entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, Gender, HearingSide, SeatAssignment, SeatToken, SpecialRequirement};

/// Completed-course counters for a single participant.
///
/// Tier counters are ordered most-advanced first when scoring; `seva` counts
/// volunteer service periods and is never a tier of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseHistory {
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

impl CourseHistory {
    /// Any completed course at all, teenager included.
    pub fn any_completed(&self) -> bool {
        self.teenager > 0 || !self.non_teenager_zero()
    }

    /// True when every counter other than the teenager one is zero.
    pub fn non_teenager_zero(&self) -> bool {
        self.sixty_day == 0
            && self.forty_five_day == 0
            && self.thirty_day == 0
            && self.twenty_day == 0
            && self.satipatthana == 0
            && self.special == 0
            && self.tsc == 0
            && self.ten_day == 0
    }
}

/// A course participant held in the session roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub original_name: String,
    /// Name localized by the extraction service
    pub local_name: String,
    pub age: u32,
    pub gender: Gender,
    pub courses: CourseHistory,
    pub category: Category,
    pub special: SpecialRequirement,
    pub hearing: HearingSide,
    /// Free-text room field; only digits are meaningful
    pub room_no: String,
    /// Relevant only for NEW-category display
    pub illness: String,
    /// Cached projection of `seniority::score`; recomputed at every edit
    pub seniority_score: f64,
    pub seat: Option<SeatAssignment>,
    /// User-forced seat that preempts automatic placement
    pub manual_seat: Option<SeatToken>,
}

impl Participant {
    /// Create a record with a fresh id and derived category. The seniority
    /// score starts at zero; callers rescore before placement.
    pub fn new(original_name: String, local_name: String, age: u32, gender: Gender) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_name,
            local_name,
            age,
            gender,
            courses: CourseHistory::default(),
            category: Category::New,
            special: SpecialRequirement::None,
            hearing: HearingSide::None,
            room_no: String::new(),
            illness: String::new(),
            seniority_score: 0.0,
            seat: None,
            manual_seat: None,
        }
    }

    pub fn with_courses(mut self, courses: CourseHistory, is_server: bool) -> Self {
        self.courses = courses;
        self.category = Category::derive(is_server, &courses);
        self
    }

    /// The seat token currently held, if placed on the grid.
    pub fn seat_token(&self) -> Option<SeatToken> {
        self.seat.and_then(|s| s.token())
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.seat, Some(SeatAssignment::Waiting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_courses_derives_category() {
        let mut courses = CourseHistory::default();
        courses.ten_day = 2;
        let p = Participant::new("A B".into(), "A B".into(), 40, Gender::Male)
            .with_courses(courses, false);
        assert_eq!(p.category, Category::Old);

        let server = Participant::new("C D".into(), "C D".into(), 35, Gender::Female)
            .with_courses(courses, true);
        assert_eq!(server.category, Category::Server);
    }

    #[test]
    fn test_course_history_predicates() {
        let mut courses = CourseHistory::default();
        assert!(!courses.any_completed());
        assert!(courses.non_teenager_zero());

        courses.teenager = 1;
        assert!(courses.any_completed());
        assert!(courses.non_teenager_zero());

        courses.twenty_day = 1;
        assert!(!courses.non_teenager_zero());
    }
}
