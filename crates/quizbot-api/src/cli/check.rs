//! `quizbot check`: report what the bot would serve.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Print the resolved configuration and question count.
///
/// Reaching this point means the bank loaded and the log directory exists;
/// a pass threshold the bank cannot reach is flagged.
pub fn check(state: &AppState, json: bool) -> Result<()> {
    let rules = state.rules();
    let questions = state.bank.len();
    let reachable = rules.pass_threshold <= questions;

    if json {
        let report = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "questions_path": state.config.questions_path.display().to_string(),
            "answers_path": state.config.answers_path.display().to_string(),
            "logs_dir": state.config.logs_dir.display().to_string(),
            "questions": questions,
            "answer_timeout_secs": rules.answer_timeout.as_secs(),
            "pass_threshold": rules.pass_threshold,
            "pass_threshold_reachable": reachable,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let check_mark = |ok: bool| {
        if ok {
            format!("{}", style("✓").green())
        } else {
            format!("{}", style("✗").red())
        }
    };

    println!();
    println!(
        "  {} quizbot v{}",
        style("🔍").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  {}", style("── Data ──").dim());
    println!("  Directory:  {}", state.data_dir.display());
    println!("  Questions:  {}", state.config.questions_path.display());
    println!("  Answers:    {}", state.config.answers_path.display());
    println!("  Logs:       {}", state.config.logs_dir.display());
    println!();
    println!("  {}", style("── Quiz ──").dim());
    println!("  {} {} questions loaded", check_mark(true), style(questions).bold());
    println!(
        "  {} {}s per question",
        check_mark(true),
        rules.answer_timeout.as_secs()
    );
    println!(
        "  {} pass at {} correct{}",
        check_mark(reachable),
        rules.pass_threshold,
        if reachable {
            String::new()
        } else {
            format!(" {}", style("(more than the bank holds)").yellow())
        }
    );
    println!();
    Ok(())
}
