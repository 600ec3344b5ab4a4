//! The visitor's journey: quiz, mentor matching and the screen flow.
//!
//! The flow is a four-screen cycle: Entry → Quiz → Introduction →
//! Conversation → back to Entry. The matched mentor exists only inside the
//! Introduction and Conversation screens, so an unbound mentor can never be
//! observed.

pub mod matching;
pub mod quiz;
pub mod state;

pub use matching::{match_mentor, match_tags};
pub use quiz::{QuizAnswer, QuizProgress, QuizResponses, QuizStep};
pub use state::{AnswerOutcome, Screen, ScreenController, ScreenKind, TurnResolution};
