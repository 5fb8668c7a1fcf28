//! Batch ingestion: raw extraction records into scored participants
//!
//! Unknown enum labels degrade to None, missing counters are zero, and the
//! surname dictionary is applied to the localized name before anything else
//! sees it.

use std::collections::HashMap;

use avasa_core::{
    apply_correction, Category, CourseHistory, Gender, HearingSide, Participant,
    SpecialRequirement,
};
use avasa_extract::{RawCourses, RawParticipant};

/// Convert one extraction batch into roster-ready participants.
pub fn build_participants(
    raw: &[RawParticipant],
    corrections: &HashMap<String, String>,
) -> Vec<Participant> {
    raw.iter()
        .map(|r| participant_from_raw(r, corrections))
        .collect()
}

fn participant_from_raw(
    raw: &RawParticipant,
    corrections: &HashMap<String, String>,
) -> Participant {
    let local_name = apply_correction(&raw.original_name, &raw.local_name, corrections);
    let courses = course_history(&raw.courses);

    let mut p = Participant::new(
        raw.original_name.clone(),
        local_name,
        raw.age,
        Gender::from_label(&raw.gender),
    )
    .with_courses(courses, raw.is_server);
    p.special = SpecialRequirement::from_label(&raw.special);
    p.hearing = HearingSide::from_label(&raw.hearing);
    p.room_no = raw.room_no.clone();
    p.illness = raw.illness.trim().to_string();
    p.rescore();
    p
}

fn course_history(raw: &RawCourses) -> CourseHistory {
    CourseHistory {
        sixty_day: raw.sixty_day,
        forty_five_day: raw.forty_five_day,
        thirty_day: raw.thirty_day,
        twenty_day: raw.twenty_day,
        satipatthana: raw.satipatthana,
        special: raw.special,
        tsc: raw.tsc,
        ten_day: raw.ten_day,
        teenager: raw.teenager,
        seva: raw.seva,
    }
}

/// Count the records that will actually occupy grid slots.
pub fn placeable_count(participants: &[Participant]) -> usize {
    participants
        .iter()
        .filter(|p| p.category != Category::Server)
        .count()
}
