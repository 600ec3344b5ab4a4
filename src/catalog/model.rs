//! Mentor and quiz data models.

use serde::{Deserialize, Serialize};

/// A persona mentor. Drives both displayed content and the response style
/// of the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mentor {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub culture: &'static str,
    /// One-line philosophy tag, e.g. "The Way of Strategy".
    pub philosophy: &'static str,
    pub specialties: &'static [&'static str],
    pub quote: &'static str,
    /// Theme key used by the presentation layer.
    pub color: &'static str,
    pub description: &'static str,
    pub avatar: &'static str,
}

/// Classification tag attached to a quiz option. Only the matching engine
/// looks at these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Focus,
    Anxiety,
    Decisions,
    Acceptance,
    Strategy,
    Emotional,
    Practical,
    Spiritual,
    Discipline,
    Reflection,
    Planning,
    Stories,
}

impl Tag {
    pub const ALL: [Tag; 12] = [
        Tag::Focus,
        Tag::Anxiety,
        Tag::Decisions,
        Tag::Acceptance,
        Tag::Strategy,
        Tag::Emotional,
        Tag::Practical,
        Tag::Spiritual,
        Tag::Discipline,
        Tag::Reflection,
        Tag::Planning,
        Tag::Stories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Anxiety => "anxiety",
            Self::Decisions => "decisions",
            Self::Acceptance => "acceptance",
            Self::Strategy => "strategy",
            Self::Emotional => "emotional",
            Self::Practical => "practical",
            Self::Spiritual => "spiritual",
            Self::Discipline => "discipline",
            Self::Reflection => "reflection",
            Self::Planning => "planning",
            Self::Stories => "stories",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("Unknown tag: {}", s))
    }
}

/// One answer choice: the label shown to the visitor and its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub text: &'static str,
    pub value: Tag,
}

/// A quiz question with its ordered options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

/// A suggested opening message offered in the conversation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickStarter {
    /// Short button label.
    pub label: &'static str,
    pub message: &'static str,
}
