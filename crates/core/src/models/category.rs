//! Participant category and its transition rules

use serde::{Deserialize, Serialize};

use super::CourseHistory;

/// Placement category of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// First-time participant, ranked by age alone
    New,
    /// Returning participant, ranked by seniority score
    Old,
    /// Course server; never placed on the seating grid
    Server,
}

impl Category {
    /// Derive the category at ingestion time.
    ///
    /// SERVER wins when explicitly flagged; any completed course (teenager
    /// included) makes the participant OLD; otherwise NEW.
    pub fn derive(is_server: bool, courses: &CourseHistory) -> Self {
        if is_server {
            Category::Server
        } else if courses.any_completed() {
            Category::Old
        } else {
            Category::New
        }
    }

    /// Transition applied when the teenager flag is toggled from an edit
    /// surface.
    ///
    /// NEW -> OLD when the flag is set; OLD -> NEW when unset and every other
    /// counter is zero. SERVER is unaffected.
    pub fn after_teenager_toggle(self, teenager_set: bool, other_counters_zero: bool) -> Self {
        match (self, teenager_set) {
            (Category::New, true) => Category::Old,
            (Category::Old, false) if other_counters_zero => Category::New,
            _ => self,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::New => "NEW",
            Category::Old => "OLD",
            Category::Server => "SERVER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_server_wins() {
        let mut courses = CourseHistory::default();
        courses.ten_day = 3;
        assert_eq!(Category::derive(true, &courses), Category::Server);
    }

    #[test]
    fn test_derive_old_from_any_counter() {
        let mut courses = CourseHistory::default();
        courses.teenager = 1;
        assert_eq!(Category::derive(false, &courses), Category::Old);
    }

    #[test]
    fn test_derive_new_when_blank() {
        assert_eq!(
            Category::derive(false, &CourseHistory::default()),
            Category::New
        );
    }

    #[test]
    fn test_teenager_set_promotes_new() {
        assert_eq!(
            Category::New.after_teenager_toggle(true, true),
            Category::Old
        );
    }

    #[test]
    fn test_teenager_unset_demotes_only_without_other_courses() {
        assert_eq!(
            Category::Old.after_teenager_toggle(false, true),
            Category::New
        );
        assert_eq!(
            Category::Old.after_teenager_toggle(false, false),
            Category::Old
        );
    }

    #[test]
    fn test_server_unaffected() {
        assert_eq!(
            Category::Server.after_teenager_toggle(true, true),
            Category::Server
        );
    }
}
