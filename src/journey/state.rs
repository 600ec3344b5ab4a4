//! Screen state machine: sequences the four screens and carries the
//! matched mentor forward.

use serde::{Deserialize, Serialize};

use crate::catalog::{Mentor, QuizQuestion};
use crate::chat::{ConversationSession, PendingTurn, TurnOutcome};
use crate::error::{GatewayError, TransitionError};

use super::matching::match_mentor;
use super::quiz::{QuizProgress, QuizStep};

/// The screens, without their data.
///
/// Cycles: Entry → Quiz → Introduction → Conversation → Entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Entry,
    Quiz,
    Introduction,
    Conversation,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 4] = [
        ScreenKind::Entry,
        ScreenKind::Quiz,
        ScreenKind::Introduction,
        ScreenKind::Conversation,
    ];

    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: ScreenKind) -> bool {
        use ScreenKind::*;
        matches!(
            (self, target),
            (Entry, Quiz) | (Quiz, Introduction) | (Introduction, Conversation) | (Conversation, Entry)
        )
    }
}

impl Default for ScreenKind {
    fn default() -> Self {
        Self::Entry
    }
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Entry => "entry",
            Self::Quiz => "quiz",
            Self::Introduction => "introduction",
            Self::Conversation => "conversation",
        };
        write!(f, "{s}")
    }
}

/// A screen together with the data valid on it.
#[derive(Debug, Clone)]
pub enum Screen {
    Entry,
    Quiz(QuizProgress),
    Introduction { mentor: Mentor },
    Conversation(ConversationSession),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Entry => ScreenKind::Entry,
            Self::Quiz(_) => ScreenKind::Quiz,
            Self::Introduction { .. } => ScreenKind::Introduction,
            Self::Conversation(_) => ScreenKind::Conversation,
        }
    }

    /// The bound mentor; present from Introduction onward.
    pub fn mentor(&self) -> Option<&Mentor> {
        match self {
            Self::Introduction { mentor } => Some(mentor),
            Self::Conversation(session) => Some(session.mentor()),
            Self::Entry | Self::Quiz(_) => None,
        }
    }
}

/// Result of answering a quiz question through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    NextQuestion(&'static QuizQuestion),
    /// Quiz finished; now on the Introduction screen with this mentor.
    Matched(Mentor),
}

/// What happened to a gateway result handed back to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnResolution {
    Applied(TurnOutcome),
    /// The owning session is gone; nothing was written.
    Discarded,
}

/// Drives the screen flow. Starts on Entry and never terminates.
#[derive(Debug, Clone)]
pub struct ScreenController {
    screen: Screen,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenController {
    pub fn new() -> Self {
        Self {
            screen: Screen::Entry,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn mentor(&self) -> Option<&Mentor> {
        self.screen.mentor()
    }

    pub fn session(&self) -> Option<&ConversationSession> {
        match &self.screen {
            Screen::Conversation(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut ConversationSession> {
        match &mut self.screen {
            Screen::Conversation(session) => Some(session),
            _ => None,
        }
    }

    /// Entry → Quiz.
    pub fn start(&mut self) -> Result<&QuizProgress, TransitionError> {
        if !matches!(self.screen, Screen::Entry) {
            return Err(self.invalid("start"));
        }
        self.enter(Screen::Quiz(QuizProgress::new()));
        match &self.screen {
            Screen::Quiz(progress) => Ok(progress),
            _ => Err(self.invalid("start")),
        }
    }

    /// Answer the current quiz question; the last answer binds the mentor
    /// and moves to Introduction.
    pub fn answer(&mut self, option_index: usize) -> Result<AnswerOutcome, TransitionError> {
        let Screen::Quiz(progress) = &mut self.screen else {
            return Err(self.invalid("answer"));
        };

        match progress.answer(option_index)? {
            QuizStep::Next(question) => Ok(AnswerOutcome::NextQuestion(question)),
            QuizStep::Complete(responses) => {
                let mentor = *match_mentor(&responses);
                tracing::info!(
                    mentor = mentor.id,
                    answers = responses.len(),
                    "Quiz complete, mentor matched"
                );
                self.enter(Screen::Introduction { mentor });
                Ok(AnswerOutcome::Matched(mentor))
            }
        }
    }

    /// Introduction → Conversation, opening a fresh session with the mentor.
    pub fn proceed(&mut self) -> Result<&ConversationSession, TransitionError> {
        let Screen::Introduction { mentor } = self.screen else {
            return Err(self.invalid("continue"));
        };
        self.enter(Screen::Conversation(ConversationSession::open(mentor)));
        self.session().ok_or_else(|| self.invalid("continue"))
    }

    /// Conversation → Entry. The session and the mentor are dropped.
    pub fn back(&mut self) -> Result<(), TransitionError> {
        if let Screen::Conversation(session) = &self.screen {
            if session.is_pending() {
                tracing::debug!(session = %session.id(), "Leaving with a turn in flight");
            }
            self.enter(Screen::Entry);
            Ok(())
        } else {
            Err(self.invalid("go back"))
        }
    }

    /// Hand a finished gateway call back to its session.
    ///
    /// If that session has been closed in the meantime the result is dropped.
    pub fn resolve_turn(
        &mut self,
        turn: PendingTurn,
        outcome: Result<String, GatewayError>,
    ) -> TurnResolution {
        match &mut self.screen {
            Screen::Conversation(session) if session.id() == turn.session_id() => {
                match session.complete_turn(turn, outcome) {
                    Ok(applied) => TurnResolution::Applied(applied),
                    Err(e) => {
                        tracing::warn!(error = %e, "Refused turn result");
                        TurnResolution::Discarded
                    }
                }
            }
            _ => {
                tracing::debug!(
                    session = %turn.session_id(),
                    "Discarding turn result for a closed session"
                );
                TurnResolution::Discarded
            }
        }
    }

    fn enter(&mut self, next: Screen) {
        let from = self.kind();
        let to = next.kind();
        debug_assert!(from.can_transition_to(to), "{from} -> {to}");
        tracing::debug!(%from, %to, "Screen transition");
        self.screen = next;
    }

    fn invalid(&self, event: &'static str) -> TransitionError {
        TransitionError::InvalidTransition {
            from: self.kind(),
            event,
        }
    }
}
