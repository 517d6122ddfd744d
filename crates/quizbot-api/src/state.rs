//! Application state shared by the CLI commands.
//!
//! `AppState` resolves the data directory, loads `quizbot.toml`, the
//! question bank, and the answer log directory. Every failure here is a
//! startup failure: the bot never runs with a broken bank.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use quizbot_core::bank::QuestionBank;
use quizbot_core::engine::{QuizEngine, QuizRules};
use quizbot_core::transport::ChatTransport;
use quizbot_infra::answer_log::FileAnswerLog;
use quizbot_infra::bank::load_question_bank;
use quizbot_infra::config::load_quiz_config;
use quizbot_infra::filesystem::resolve_data_dir;
use quizbot_types::config::QuizConfig;

/// Everything a quiz engine needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    /// Config with every path resolved against `data_dir`.
    pub config: QuizConfig,
    pub bank: Arc<QuestionBank>,
    pub answer_log: FileAnswerLog,
}

impl AppState {
    pub async fn init(data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(data_dir);
        tracing::debug!("using data directory {}", data_dir.display());

        let config = load_quiz_config(&data_dir).await.resolve_paths(&data_dir);

        let bank = load_question_bank(&config.questions_path, &config.answers_path)
            .await
            .context("failed to load question bank")?;

        let answer_log = FileAnswerLog::open(&config.logs_dir)
            .await
            .with_context(|| {
                format!(
                    "cannot write to answer log directory {}",
                    config.logs_dir.display()
                )
            })?;

        Ok(Self {
            data_dir,
            config,
            bank: Arc::new(bank),
            answer_log,
        })
    }

    pub fn rules(&self) -> QuizRules {
        QuizRules::from_config(&self.config)
    }

    /// Build an engine that replies through `transport`.
    pub fn engine<T: ChatTransport>(&self, transport: T) -> Arc<QuizEngine<T, FileAnswerLog>> {
        Arc::new(QuizEngine::new(
            Arc::clone(&self.bank),
            transport,
            self.answer_log.clone(),
            self.rules(),
        ))
    }
}
