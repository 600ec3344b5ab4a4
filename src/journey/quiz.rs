//! Quiz progress: walks the question bank and collects answer tags.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, QuizQuestion, Tag};
use crate::error::QuizError;

/// One recorded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: u32,
    pub tag: Tag,
}

/// Answer tags keyed by question id, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponses {
    answers: Vec<QuizAnswer>,
}

impl QuizResponses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tag for a question, replacing an earlier answer to it.
    pub fn record(&mut self, question_id: u32, tag: Tag) {
        match self.answers.iter_mut().find(|a| a.question_id == question_id) {
            Some(existing) => existing.tag = tag,
            None => self.answers.push(QuizAnswer { question_id, tag }),
        }
    }

    pub fn get(&self, question_id: u32) -> Option<Tag> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.answers.iter().map(|a| a.tag)
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(u32, Tag)> for QuizResponses {
    fn from_iter<T: IntoIterator<Item = (u32, Tag)>>(iter: T) -> Self {
        let mut responses = Self::new();
        for (question_id, tag) in iter {
            responses.record(question_id, tag);
        }
        responses
    }
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    /// More questions remain; this is the next one.
    Next(&'static QuizQuestion),
    /// The last question was answered.
    Complete(QuizResponses),
}

/// State of the Quiz screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    questions: &'static [QuizQuestion],
    index: usize,
    responses: QuizResponses,
}

impl Default for QuizProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgress {
    /// Start at the first question of the catalog's bank.
    pub fn new() -> Self {
        Self::with_questions(catalog::questions())
    }

    pub fn with_questions(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            index: 0,
            responses: QuizResponses::new(),
        }
    }

    /// The question awaiting an answer, if any remain.
    pub fn current(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.index)
    }

    /// 1-based position of the current question.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.questions.len())
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Share of the quiz reached, counting the current question.
    pub fn fraction(&self) -> f32 {
        if self.questions.is_empty() {
            return 1.0;
        }
        self.position() as f32 / self.total() as f32
    }

    pub fn responses(&self) -> &QuizResponses {
        &self.responses
    }

    /// Answer the current question with the option at `option_index`.
    pub fn answer(&mut self, option_index: usize) -> Result<QuizStep, QuizError> {
        let question = self.current().ok_or(QuizError::AlreadyComplete)?;
        let option = question
            .options
            .get(option_index)
            .ok_or(QuizError::OptionOutOfRange {
                question_id: question.id,
                index: option_index,
                available: question.options.len(),
            })?;

        self.responses.record(question.id, option.value);
        self.index += 1;

        match self.current() {
            Some(next) => Ok(QuizStep::Next(next)),
            None => Ok(QuizStep::Complete(self.responses.clone())),
        }
    }
}
