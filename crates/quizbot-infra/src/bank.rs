//! Question bank loader.
//!
//! Reads the two index-aligned line files and hands them to
//! [`QuestionBank::parse`]. Any failure is a startup error.

use std::path::Path;

use quizbot_core::bank::QuestionBank;
use quizbot_types::error::BankError;

/// Load the question bank from `questions_path` and `answers_path`.
pub async fn load_question_bank(
    questions_path: &Path,
    answers_path: &Path,
) -> Result<QuestionBank, BankError> {
    let questions = read_source(questions_path).await?;
    let answers = read_source(answers_path).await?;

    let bank = QuestionBank::parse(&questions, &answers)?;
    tracing::info!(
        questions = bank.len(),
        source = %questions_path.display(),
        "loaded question bank"
    );
    Ok(bank)
}

async fn read_source(path: &Path) -> Result<String, BankError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BankError::Read {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write_sources(dir: &TempDir, questions: &str, answers: &str) {
        tokio::fs::write(dir.path().join("questions.txt"), questions)
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("answers.txt"), answers)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn loads_aligned_files() {
        let tmp = TempDir::new().unwrap();
        write_sources(&tmp, "Capital of France?\n2+2?\n", "Paris\n4\n").await;

        let bank = load_question_bank(
            &tmp.path().join("questions.txt"),
            &tmp.path().join("answers.txt"),
        )
        .await
        .unwrap();

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(0).unwrap().prompt, "Capital of France?");
        assert_eq!(bank.get(1).unwrap().expected_answer, "4");
    }

    #[tokio::test]
    async fn mismatched_files_are_rejected() {
        let tmp = TempDir::new().unwrap();
        write_sources(&tmp, "Q1\nQ2\nQ3\n", "a1\na2\n").await;

        let err = load_question_bank(
            &tmp.path().join("questions.txt"),
            &tmp.path().join("answers.txt"),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            BankError::LengthMismatch {
                questions: 3,
                answers: 2
            }
        ));
    }

    #[tokio::test]
    async fn missing_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("questions.txt"), "Q1\n")
            .await
            .unwrap();

        let err = load_question_bank(
            &tmp.path().join("questions.txt"),
            &tmp.path().join("answers.txt"),
        )
        .await
        .unwrap_err();

        match err {
            BankError::Read { path, .. } => assert!(path.ends_with("answers.txt")),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
