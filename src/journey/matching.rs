//! Matching engine: quiz tags to mentor.

use std::collections::HashSet;

use crate::catalog::{MENTORS, Mentor, Tag};

use super::quiz::QuizResponses;

/// A rule fires when any of its tags is present.
struct MatchRule {
    tags: &'static [Tag],
    mentor: usize,
}

/// Evaluated in order; the first firing rule wins.
const RULES: [MatchRule; 2] = [
    MatchRule {
        tags: &[Tag::Strategy, Tag::Discipline, Tag::Focus],
        mentor: 0,
    },
    MatchRule {
        tags: &[Tag::Emotional, Tag::Acceptance, Tag::Spiritual],
        mentor: 1,
    },
];

/// Mentor chosen when no rule fires.
const FALLBACK: usize = 2;

/// Pick a mentor from whatever tags are present. Order and duplicates do not
/// matter; partial answer sets are fine.
pub fn match_tags<I>(tags: I) -> &'static Mentor
where
    I: IntoIterator<Item = Tag>,
{
    let present: HashSet<Tag> = tags.into_iter().collect();
    let index = RULES
        .iter()
        .find(|rule| rule.tags.iter().any(|tag| present.contains(tag)))
        .map(|rule| rule.mentor)
        .unwrap_or(FALLBACK);
    &MENTORS[index]
}

/// Pick a mentor for a (possibly partial) set of quiz responses.
pub fn match_mentor(responses: &QuizResponses) -> &'static Mentor {
    match_tags(responses.tags())
}
