//! Configuration loader for quizbot.
//!
//! Reads `quizbot.toml` from the data directory and deserializes it into
//! [`QuizConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use quizbot_types::config::QuizConfig;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "quizbot.toml";

/// Load configuration from `{data_dir}/quizbot.toml`.
///
/// - If the file does not exist, returns [`QuizConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
/// - Otherwise returns the parsed config.
///
/// Paths in the returned config are not yet resolved against `data_dir`;
/// see [`QuizConfig::resolve_paths`].
pub async fn load_quiz_config(data_dir: &Path) -> QuizConfig {
    let config_path = data_dir.join(CONFIG_FILE_NAME);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {CONFIG_FILE_NAME} found at {}, using defaults", config_path.display());
            return QuizConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return QuizConfig::default();
        }
    };

    match toml::from_str::<QuizConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            QuizConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_quiz_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_quiz_config(tmp.path()).await;
        assert_eq!(config, QuizConfig::default());
    }

    #[tokio::test]
    async fn load_quiz_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
questions_path = "q/questions.txt"
answers_path = "q/answ.txt"
answer_timeout_secs = 20
"#,
        )
        .await
        .unwrap();

        let config = load_quiz_config(tmp.path()).await;
        assert_eq!(config.questions_path, PathBuf::from("q/questions.txt"));
        assert_eq!(config.answers_path, PathBuf::from("q/answ.txt"));
        assert_eq!(config.answer_timeout_secs, 20);
        assert_eq!(config.pass_threshold, 8);
    }

    #[tokio::test]
    async fn load_quiz_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join(CONFIG_FILE_NAME), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_quiz_config(tmp.path()).await;
        assert_eq!(config, QuizConfig::default());
    }
}
