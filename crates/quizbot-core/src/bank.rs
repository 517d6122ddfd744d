//! The question bank: an ordered, immutable list of prompt/answer pairs.
//!
//! Built from two index-aligned line sources. Reading the files is an infra
//! concern (`quizbot_infra::bank`); this module only validates and owns the
//! resulting pairs.

use quizbot_types::error::BankError;
use quizbot_types::quiz::Question;

/// Ordered, non-empty list of questions. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Pair up prompts and answers by index.
    ///
    /// Fails if the two lists differ in length or are empty.
    pub fn from_lines(prompts: Vec<String>, answers: Vec<String>) -> Result<Self, BankError> {
        if prompts.len() != answers.len() {
            return Err(BankError::LengthMismatch {
                questions: prompts.len(),
                answers: answers.len(),
            });
        }
        if prompts.is_empty() {
            return Err(BankError::Empty);
        }

        let questions = prompts
            .into_iter()
            .zip(answers)
            .map(|(prompt, answer)| Question::new(prompt, answer))
            .collect();

        Ok(Self { questions })
    }

    /// Build a bank from the full text of the question and answer sources.
    pub fn parse(questions_text: &str, answers_text: &str) -> Result<Self, BankError> {
        Self::from_lines(split_lines(questions_text), split_lines(answers_text))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

/// Split text into items, one per line.
///
/// `\r\n` endings are handled, a trailing newline does not produce an
/// empty final item, and blank lines in the middle are kept so the two
/// sources stay aligned.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
