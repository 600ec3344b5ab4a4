//! Mentor catalog: the static mentor profiles and the quiz question bank.
//!
//! Everything here is defined at compile time and never mutated. Mentors are
//! referenced by identifier everywhere else; catalog order doubles as the
//! wire `mentor_option` order of the response service.

pub mod data;
pub mod model;

pub use data::{MENTORS, QUESTIONS};
pub use model::{Mentor, QuickStarter, QuizOption, QuizQuestion, Tag};

/// All mentors, in catalog order.
pub fn mentors() -> &'static [Mentor] {
    &MENTORS
}

/// The quiz question bank, in asking order.
pub fn questions() -> &'static [QuizQuestion] {
    &QUESTIONS
}

/// Look up a mentor by identifier.
pub fn find_mentor(id: &str) -> Option<&'static Mentor> {
    MENTORS.iter().find(|m| m.id == id)
}

/// Suggested opening messages for a mentor. Unknown mentors have none.
pub fn quick_starters(mentor_id: &str) -> &'static [QuickStarter] {
    match mentor_id {
        "musashi" => &data::MUSASHI_STARTERS,
        "rumi" => &data::RUMI_STARTERS,
        "chanakya" => &data::CHANAKYA_STARTERS,
        _ => &[],
    }
}

/// Canned in-character sayings, used when the response service is not in play.
pub fn sayings(mentor_id: &str) -> &'static [&'static str] {
    match mentor_id {
        "musashi" => &data::MUSASHI_SAYINGS,
        "rumi" => &data::RUMI_SAYINGS,
        "chanakya" => &data::CHANAKYA_SAYINGS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        let ids: Vec<&str> = mentors().iter().map(|m| m.id).collect();
        assert_eq!(ids, ["musashi", "rumi", "chanakya"]);
    }

    #[test]
    fn find_mentor_by_id() {
        assert_eq!(find_mentor("rumi").unwrap().name, "Jalal ad-Din Rumi");
        assert!(find_mentor("socrates").is_none());
    }

    #[test]
    fn question_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn every_tag_appears_exactly_once_in_the_bank() {
        let mut seen = HashSet::new();
        for question in questions() {
            assert_eq!(question.options.len(), 4, "question {}", question.id);
            for option in question.options {
                assert!(seen.insert(option.value), "{} repeated", option.value);
            }
        }
        assert_eq!(seen.len(), Tag::ALL.len());
    }

    #[test]
    fn every_mentor_has_starters_and_sayings() {
        for mentor in mentors() {
            assert_eq!(quick_starters(mentor.id).len(), 2, "{}", mentor.id);
            assert_eq!(sayings(mentor.id).len(), 5, "{}", mentor.id);
        }
        assert!(quick_starters("socrates").is_empty());
        assert!(sayings("socrates").is_empty());
    }
}
