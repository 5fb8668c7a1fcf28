//! Seniority scoring
//!
//! Produces the single comparable rank used to order OLD-category placement.
//! The scale is built so that course level always dominates: tier constants
//! are spaced far wider than any plausible repeat count, service count, or
//! age contribution can reach.

use crate::models::{Category, CourseHistory, Participant};

/// Assistant Teachers always rank first; strictly above any course score.
pub const ASSISTANT_TEACHER_SCORE: f64 = 1_000_000_000.0;

const TIER_SIXTY_DAY: f64 = 80_000_000.0;
const TIER_FORTY_FIVE_DAY: f64 = 70_000_000.0;
const TIER_THIRTY_DAY: f64 = 60_000_000.0;
const TIER_TWENTY_DAY: f64 = 50_000_000.0;
const TIER_SATIPATTHANA: f64 = 40_000_000.0;
const TIER_SPECIAL: f64 = 30_000_000.0;
const TIER_TSC: f64 = 20_000_000.0;
const TIER_TEN_DAY: f64 = 10_000_000.0;
const TIER_TEENAGER: f64 = 5_000_000.0;

const COUNT_WEIGHT: f64 = 100.0;
const SEVA_WEIGHT: f64 = 5_000.0;

/// Compute the rank value for a record. Pure; no side effects.
pub fn score(participant: &Participant) -> f64 {
    if has_assistant_teacher_marker(&participant.original_name)
        || has_assistant_teacher_marker(&participant.local_name)
    {
        return ASSISTANT_TEACHER_SCORE;
    }

    if participant.category == Category::New {
        return participant.age as f64;
    }

    let c = &participant.courses;
    let (tier, count) = highest_tier(c);
    tier + count as f64 * COUNT_WEIGHT
        + c.seva as f64 * SEVA_WEIGHT
        + participant.age as f64 / 100.0
}

/// First non-zero counter in precedence order, most advanced course first.
/// Falls back to the teenager tier when nothing else was completed.
fn highest_tier(c: &CourseHistory) -> (f64, u32) {
    let tiers = [
        (c.sixty_day, TIER_SIXTY_DAY),
        (c.forty_five_day, TIER_FORTY_FIVE_DAY),
        (c.thirty_day, TIER_THIRTY_DAY),
        (c.twenty_day, TIER_TWENTY_DAY),
        (c.satipatthana, TIER_SATIPATTHANA),
        (c.special, TIER_SPECIAL),
        (c.tsc, TIER_TSC),
        (c.ten_day, TIER_TEN_DAY),
    ];
    tiers
        .into_iter()
        .find(|(count, _)| *count > 0)
        .map(|(count, tier)| (tier, count))
        .unwrap_or((TIER_TEENAGER, c.teenager))
}

/// Whether a name carries the Assistant Teacher abbreviation: "AT" or "A.T."
/// as a whole word, or the parenthesized form "(AT)".
fn has_assistant_teacher_marker(name: &str) -> bool {
    if name
        .split_whitespace()
        .any(|token| token.eq_ignore_ascii_case("AT") || token.eq_ignore_ascii_case("A.T."))
    {
        return true;
    }
    name.to_ascii_uppercase().contains("(AT)")
}

impl Participant {
    /// Refresh the cached score. Call at every construction or edit boundary
    /// that touches course history, category, age, or names.
    pub fn rescore(&mut self) {
        self.seniority_score = score(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn old_participant(courses: CourseHistory, age: u32) -> Participant {
        Participant::new("Ram Pawar".into(), "Ram Pawar".into(), age, Gender::Male)
            .with_courses(courses, false)
    }

    #[test]
    fn test_new_participant_scores_age() {
        let p = Participant::new("Asha Jadhav".into(), "Asha Jadhav".into(), 27, Gender::Female);
        assert_eq!(score(&p), 27.0);
    }

    #[test]
    fn test_assistant_teacher_outranks_everything() {
        let mut courses = CourseHistory::default();
        courses.sixty_day = 9;
        courses.seva = 50;
        let senior = old_participant(courses, 80);

        let mut at = old_participant(CourseHistory::default(), 30);
        at.original_name = "AT Suresh Kulkarni".into();
        assert_eq!(score(&at), ASSISTANT_TEACHER_SCORE);
        assert!(score(&at) > score(&senior));
    }

    #[test]
    fn test_assistant_teacher_marker_forms() {
        let mut p = old_participant(CourseHistory::default(), 30);
        p.original_name = "Suresh A.T. Kulkarni".into();
        assert_eq!(score(&p), ASSISTANT_TEACHER_SCORE);

        p.original_name = "Suresh Kulkarni".into();
        p.local_name = "Suresh Kulkarni (AT)".into();
        assert_eq!(score(&p), ASSISTANT_TEACHER_SCORE);

        // "AT" buried inside a word is not a marker
        p.local_name = "Ratan Athavale".into();
        assert!(score(&p) < ASSISTANT_TEACHER_SCORE);
    }

    #[test]
    fn test_higher_tier_beats_any_repeat_count() {
        let mut twenty = CourseHistory::default();
        twenty.twenty_day = 1;
        let mut ten = CourseHistory::default();
        ten.ten_day = 50;
        assert!(score(&old_participant(twenty, 20)) > score(&old_participant(ten, 80)));
    }

    #[test]
    fn test_more_repeats_at_same_tier_score_higher() {
        let mut two = CourseHistory::default();
        two.ten_day = 2;
        let mut one = CourseHistory::default();
        one.ten_day = 1;
        assert!(score(&old_participant(two, 20)) > score(&old_participant(one, 80)));
    }

    #[test]
    fn test_seva_breaks_count_ties() {
        let mut a = CourseHistory::default();
        a.ten_day = 3;
        a.seva = 2;
        let mut b = CourseHistory::default();
        b.ten_day = 3;
        assert!(score(&old_participant(a, 20)) > score(&old_participant(b, 80)));
    }

    #[test]
    fn test_age_breaks_final_ties() {
        let mut courses = CourseHistory::default();
        courses.ten_day = 1;
        let older = old_participant(courses, 60);
        let younger = old_participant(courses, 25);
        assert!(score(&older) > score(&younger));
        // the age term never crosses into the count contribution
        assert!(score(&older) - score(&younger) < 1.0);
    }

    #[test]
    fn test_spec_precedence_satipatthana_over_tsc() {
        let mut stp = CourseHistory::default();
        stp.satipatthana = 1;
        let mut tsc = CourseHistory::default();
        tsc.tsc = 10;
        assert!(score(&old_participant(stp, 20)) > score(&old_participant(tsc, 80)));
    }

    #[test]
    fn test_teenager_tier_is_lowest() {
        let mut teen = CourseHistory::default();
        teen.teenager = 5;
        let mut ten = CourseHistory::default();
        ten.ten_day = 1;
        assert!(score(&old_participant(ten, 20)) > score(&old_participant(teen, 80)));
    }

    #[test]
    fn test_rescore_updates_cache() {
        let mut teen = CourseHistory::default();
        teen.teenager = 1;
        let mut p = old_participant(teen, 30);
        p.rescore();
        let teen_score = p.seniority_score;
        p.courses.ten_day = 1;
        p.rescore();
        assert!(p.seniority_score > teen_score);
    }
}
