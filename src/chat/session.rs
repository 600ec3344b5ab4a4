//! ConversationSession: one transcript with one mentor, at most one turn
//! in flight.
//!
//! A turn is split in two around the single suspension point:
//! `begin_turn` appends the user's message and hands out a [`PendingTurn`]
//! ticket, the caller runs the gateway call, and `complete_turn` appends the
//! mentor's reply (or an apology entry) for that ticket. `submit` chains the
//! three for callers that can simply await.

use uuid::Uuid;

use crate::catalog::{self, Mentor, QuickStarter};
use crate::error::{GatewayError, SessionError};
use crate::gateway::{self, ResponseGateway};

use super::message::ChatMessage;

/// Opening line of every conversation.
pub fn greeting(mentor: &Mentor) -> String {
    format!(
        "Greetings, seeker. I am {}. I sense you carry burdens that many before you have faced. \
         Tell me, what weighs most heavily on your mind today?",
        mentor.name
    )
}

/// Transcript text standing in for a failed turn.
pub fn apology(reason: &str) -> String {
    format!(
        "I apologize, but I'm having trouble connecting to my wisdom right now. {reason}. Please try again."
    )
}

/// Ticket for the one outstanding gateway call of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    session_id: Uuid,
    turn_id: Uuid,
    question: String,
    mentor_option: u8,
}

impl PendingTurn {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn turn_id(&self) -> Uuid {
        self.turn_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn mentor_option(&self) -> u8 {
        self.mentor_option
    }

    /// Issue the gateway call for this turn. Exactly one request.
    pub async fn dispatch(&self, gateway: &dyn ResponseGateway) -> Result<String, GatewayError> {
        gateway.respond(&self.question, self.mentor_option).await
    }
}

/// How a completed turn landed in the transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The mentor's reply was appended.
    Replied(ChatMessage),
    /// The gateway failed; an apology entry was appended and the reason recorded.
    Failed { reason: String, message: ChatMessage },
}

impl TurnOutcome {
    /// The entry appended for this turn.
    pub fn message(&self) -> &ChatMessage {
        match self {
            Self::Replied(message) => message,
            Self::Failed { message, .. } => message,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Chat transcript with the active mentor.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: Uuid,
    mentor: Mentor,
    mentor_option: u8,
    messages: Vec<ChatMessage>,
    pending: Option<Uuid>,
    last_error: Option<String>,
}

impl ConversationSession {
    /// Start a conversation; the transcript opens with the mentor's greeting.
    pub fn open(mentor: Mentor) -> Self {
        let id = Uuid::new_v4();
        let mentor_option = gateway::mentor_option(mentor.id);
        tracing::info!(session = %id, mentor = mentor.id, mentor_option, "Conversation opened");
        Self {
            id,
            mentor,
            mentor_option,
            messages: vec![ChatMessage::mentor(greeting(&mentor))],
            pending: None,
            last_error: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mentor(&self) -> &Mentor {
        &self.mentor
    }

    /// Wire option code used for this mentor's requests.
    pub fn mentor_option(&self) -> u8 {
        self.mentor_option
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a gateway call is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reason of the latest failed turn, until dismissed or a turn succeeds.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    pub fn quick_starters(&self) -> &'static [QuickStarter] {
        catalog::quick_starters(self.mentor.id)
    }

    /// Append the user's message and reserve the pending slot.
    ///
    /// Blank text and a second turn while one is pending are refused without
    /// touching the transcript.
    pub fn begin_turn(&mut self, text: &str) -> Result<PendingTurn, SessionError> {
        if text.trim().is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        if self.pending.is_some() {
            tracing::warn!(session = %self.id, "Submit refused, a turn is already pending");
            return Err(SessionError::TurnPending);
        }

        self.messages.push(ChatMessage::user(text));
        let turn_id = Uuid::new_v4();
        self.pending = Some(turn_id);
        tracing::debug!(session = %self.id, turn = %turn_id, "Turn pending");

        Ok(PendingTurn {
            session_id: self.id,
            turn_id,
            question: text.to_string(),
            mentor_option: self.mentor_option,
        })
    }

    /// Land the gateway outcome of the pending turn in the transcript.
    pub fn complete_turn(
        &mut self,
        turn: PendingTurn,
        outcome: Result<String, GatewayError>,
    ) -> Result<TurnOutcome, SessionError> {
        if turn.session_id != self.id || self.pending != Some(turn.turn_id) {
            return Err(SessionError::StaleTurn {
                session_id: turn.session_id,
                turn_id: turn.turn_id,
            });
        }
        self.pending = None;

        let result = match outcome {
            Ok(reply) => {
                let message = ChatMessage::mentor(reply);
                self.last_error = None;
                tracing::debug!(session = %self.id, turn = %turn.turn_id, "Mentor replied");
                TurnOutcome::Replied(message)
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(session = %self.id, turn = %turn.turn_id, error = %reason, "Turn failed");
                let message = ChatMessage::mentor_error(apology(&reason));
                self.last_error = Some(reason.clone());
                TurnOutcome::Failed { reason, message }
            }
        };
        self.messages.push(result.message().clone());
        Ok(result)
    }

    /// Release the pending slot of a turn whose result will never arrive.
    ///
    /// The user's message stays in the transcript without a reply. Returns
    /// `false` if the ticket is not the pending one.
    pub fn abandon_turn(&mut self, turn: &PendingTurn) -> bool {
        if turn.session_id != self.id || self.pending != Some(turn.turn_id) {
            return false;
        }
        self.pending = None;
        tracing::warn!(session = %self.id, turn = %turn.turn_id, "Turn abandoned before completion");
        true
    }

    /// Run a whole turn: append, call the gateway once, append the answer.
    ///
    /// Gateway failures come back as [`TurnOutcome::Failed`], never as `Err`.
    /// Dropping the future mid-call abandons the turn, so the session stays
    /// usable.
    pub async fn submit(
        &mut self,
        gateway: &dyn ResponseGateway,
        text: &str,
    ) -> Result<TurnOutcome, SessionError> {
        let turn = self.begin_turn(text)?;
        let mut in_flight = InFlight {
            session: self,
            turn: Some(turn.clone()),
        };
        let outcome = turn.dispatch(gateway).await;
        in_flight.turn = None;
        in_flight.session.complete_turn(turn, outcome)
    }
}

/// Abandons its turn on drop unless the turn was completed.
struct InFlight<'a> {
    session: &'a mut ConversationSession,
    turn: Option<PendingTurn>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(turn) = self.turn.take() {
            self.session.abandon_turn(&turn);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::chat::Role;

    /// Mock gateway that returns a fixed result and counts calls.
    struct MockGateway {
        result: Result<String, GatewayError>,
        calls: AtomicUsize,
    }

    impl MockGateway {
        fn replying(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(err: GatewayError) -> Self {
            Self {
                result: Err(err),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResponseGateway for MockGateway {
        fn name(&self) -> &str {
            "mock"
        }

        async fn respond(&self, _question: &str, _mentor_option: u8) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    /// Gateway that never answers within a test's patience.
    struct StalledGateway;

    #[async_trait]
    impl ResponseGateway for StalledGateway {
        fn name(&self) -> &str {
            "stalled"
        }

        async fn respond(&self, _question: &str, _mentor_option: u8) -> Result<String, GatewayError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("too late".into())
        }
    }

    fn rumi() -> Mentor {
        *catalog::find_mentor("rumi").unwrap()
    }

    #[test]
    fn open_greets_by_name() {
        for mentor in catalog::mentors() {
            let session = ConversationSession::open(*mentor);
            assert_eq!(session.messages().len(), 1);
            let greeting = &session.messages()[0];
            assert_eq!(greeting.role, Role::Mentor);
            assert!(greeting.content.contains(mentor.name));
            assert!(!session.is_pending());
            assert!(session.last_error().is_none());
        }
    }

    #[tokio::test]
    async fn blank_submit_is_a_no_op() {
        let gw = MockGateway::replying("unused");
        let mut session = ConversationSession::open(rumi());

        for text in ["", "   ", "\n\t"] {
            let err = session.submit(&gw, text).await.unwrap_err();
            assert_eq!(err, SessionError::EmptyMessage);
        }
        assert_eq!(session.messages().len(), 1);
        assert_eq!(gw.calls(), 0);
    }

    #[tokio::test]
    async fn successful_turn_appends_user_then_mentor() {
        let gw = MockGateway::replying("Wise words");
        let mut session = ConversationSession::open(rumi());

        let outcome = session.submit(&gw, "help me").await.unwrap();
        assert!(!outcome.is_failure());

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "help me");
        assert_eq!(messages[2].role, Role::Mentor);
        assert_eq!(messages[2].content, "Wise words");
        assert!(!messages[2].is_error);
        assert!(!session.is_pending());
        assert!(session.last_error().is_none());
        assert_eq!(gw.calls(), 1);
    }

    #[tokio::test]
    async fn failed_turn_appends_apology_and_records_error() {
        let gw = MockGateway::failing(GatewayError::Remote("R".into()));
        let mut session = ConversationSession::open(rumi());

        let outcome = session.submit(&gw, "hello").await.unwrap();
        match &outcome {
            TurnOutcome::Failed { reason, .. } => assert_eq!(reason, "R"),
            other => panic!("expected failure, got {other:?}"),
        }

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[2].role, Role::Mentor);
        assert!(messages[2].is_error);
        assert!(messages[2].content.contains("R"));
        assert_eq!(messages[2].content, apology("R"));
        assert!(!session.is_pending());
        assert_eq!(session.last_error(), Some("R"));
    }

    #[tokio::test]
    async fn status_failure_reason_reaches_transcript() {
        let gw = MockGateway::failing(GatewayError::Status { status: 503 });
        let mut session = ConversationSession::open(rumi());

        session.submit(&gw, "hello").await.unwrap();
        let last = session.messages().last().unwrap();
        assert!(last.content.contains("HTTP error! status: 503"));
    }

    #[tokio::test]
    async fn success_clears_previous_error() {
        let mut session = ConversationSession::open(rumi());
        session
            .submit(&MockGateway::failing(GatewayError::Transport("down".into())), "one")
            .await
            .unwrap();
        assert_eq!(session.last_error(), Some("down"));

        session
            .submit(&MockGateway::replying("back again"), "two")
            .await
            .unwrap();
        assert!(session.last_error().is_none());
        assert_eq!(session.messages().len(), 5);
    }

    #[tokio::test]
    async fn dismiss_error_keeps_transcript() {
        let gw = MockGateway::failing(GatewayError::Transport("down".into()));
        let mut session = ConversationSession::open(rumi());
        session.submit(&gw, "hello").await.unwrap();

        let before = session.messages().to_vec();
        session.dismiss_error();
        assert!(session.last_error().is_none());
        assert_eq!(session.messages(), before.as_slice());
    }

    #[test]
    fn second_turn_while_pending_is_refused() {
        let mut session = ConversationSession::open(rumi());
        let turn = session.begin_turn("first").unwrap();
        assert!(session.is_pending());
        assert_eq!(session.messages().len(), 2);

        let err = session.begin_turn("second").unwrap_err();
        assert_eq!(err, SessionError::TurnPending);
        assert_eq!(session.messages().len(), 2);

        session.complete_turn(turn, Ok("reply".into())).unwrap();
        assert!(!session.is_pending());
        assert!(session.begin_turn("second").is_ok());
    }

    #[tokio::test]
    async fn submit_while_pending_makes_no_gateway_call() {
        let gw = MockGateway::replying("unused");
        let mut session = ConversationSession::open(rumi());
        let _turn = session.begin_turn("first").unwrap();

        let err = session.submit(&gw, "second").await.unwrap_err();
        assert_eq!(err, SessionError::TurnPending);
        assert_eq!(gw.calls(), 0);
        assert_eq!(session.messages().len(), 2);
    }

    #[tokio::test]
    async fn timed_out_submit_leaves_session_usable() {
        let mut session = ConversationSession::open(rumi());

        let timed_out =
            tokio::time::timeout(Duration::from_millis(50), session.submit(&StalledGateway, "hello"))
                .await;
        assert!(timed_out.is_err());
        assert!(!session.is_pending());
        assert_eq!(session.messages().len(), 2);

        let gw = MockGateway::replying("patience");
        let outcome = session.submit(&gw, "again").await.unwrap();
        assert!(!outcome.is_failure());
        assert_eq!(gw.calls(), 1);

        let contents: Vec<&str> = session.messages()[1..]
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["hello", "again", "patience"]);
    }

    #[test]
    fn abandon_only_releases_the_pending_ticket() {
        let mut session = ConversationSession::open(rumi());
        let mut other = ConversationSession::open(rumi());
        let turn = session.begin_turn("first").unwrap();
        let foreign = other.begin_turn("theirs").unwrap();

        assert!(!session.abandon_turn(&foreign));
        assert!(session.is_pending());

        assert!(session.abandon_turn(&turn));
        assert!(!session.is_pending());
        assert!(!session.abandon_turn(&turn));

        let err = session.complete_turn(turn, Ok("late".into())).unwrap_err();
        assert!(matches!(err, SessionError::StaleTurn { .. }));
        assert_eq!(session.messages().len(), 2);
        assert!(session.begin_turn("second").is_ok());
    }

    #[test]
    fn ticket_from_another_session_is_stale() {
        let mut session = ConversationSession::open(rumi());
        let mut other = ConversationSession::open(rumi());
        let _mine = session.begin_turn("mine").unwrap();
        let foreign = other.begin_turn("theirs").unwrap();

        let err = session.complete_turn(foreign, Ok("nope".into())).unwrap_err();
        assert!(matches!(err, SessionError::StaleTurn { .. }));
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_pending());
    }

    #[test]
    fn completed_ticket_cannot_land_twice() {
        let mut session = ConversationSession::open(rumi());
        let turn = session.begin_turn("once").unwrap();
        session.complete_turn(turn.clone(), Ok("reply".into())).unwrap();

        let err = session.complete_turn(turn, Ok("again".into())).unwrap_err();
        assert!(matches!(err, SessionError::StaleTurn { .. }));
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn ticket_carries_question_and_option() {
        let mut session = ConversationSession::open(rumi());
        let turn = session.begin_turn("  how do I heal?  ").unwrap();
        assert_eq!(turn.question(), "  how do I heal?  ");
        assert_eq!(turn.mentor_option(), 1);
        assert_eq!(turn.session_id(), session.id());
    }

    #[test]
    fn unknown_mentor_uses_first_option() {
        let stranger = Mentor {
            id: "socrates",
            name: "Socrates",
            ..*catalog::find_mentor("chanakya").unwrap()
        };
        let mut session = ConversationSession::open(stranger);
        assert_eq!(session.mentor_option(), 0);
        assert!(session.quick_starters().is_empty());
        assert_eq!(session.begin_turn("hi").unwrap().mentor_option(), 0);
    }

    #[test]
    fn transcript_order_is_causal() {
        let mut session = ConversationSession::open(rumi());
        for i in 0..3 {
            let turn = session.begin_turn(&format!("question {i}")).unwrap();
            session.complete_turn(turn, Ok(format!("answer {i}"))).unwrap();
        }
        let contents: Vec<&str> = session.messages()[1..]
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(
            contents,
            [
                "question 0",
                "answer 0",
                "question 1",
                "answer 1",
                "question 2",
                "answer 2"
            ]
        );
    }
}
