// ABOUTME: CLI questions command - print the question bank
//
// Lists the five questionnaire steps in bank order, optionally filtered
// to a single trigger category, as text or JSON.

use super::{OutputFormat, QuestionsArgs};
use crate::models::{question_bank, Question, TriggerCategory};
use anyhow::Result;

/// Execute the questions command
#[allow(clippy::unused_async)] // Async for consistency with other CLI commands
pub async fn execute(args: QuestionsArgs, format: OutputFormat) -> Result<()> {
    let questions = list_questions(&args)?;

    match format {
        OutputFormat::Json => output_json(&questions)?,
        OutputFormat::Text => output_text(&questions),
    }

    Ok(())
}

/// List questions with the category filter applied, in bank order
pub fn list_questions(args: &QuestionsArgs) -> Result<Vec<&'static Question>> {
    let category_filter = match args.category {
        Some(ref raw) => Some(parse_category(raw)?),
        None => None,
    };

    let questions = question_bank()
        .iter()
        .filter(|question| category_filter.map_or(true, |category| question.category() == category))
        .collect();

    Ok(questions)
}

/// Parse a category key, case-insensitively
fn parse_category(raw: &str) -> Result<TriggerCategory> {
    TriggerCategory::from_key(&raw.trim().to_lowercase()).ok_or_else(|| {
        let valid: Vec<&str> = TriggerCategory::all().iter().map(|c| c.key()).collect();
        anyhow::anyhow!("Unknown category '{}'. Valid categories: {}", raw, valid.join(", "))
    })
}

/// Output questions as JSON
fn output_json(questions: &[&Question]) -> Result<()> {
    let json = serde_json::to_string_pretty(questions)?;
    println!("{json}");
    Ok(())
}

/// Output questions as a numbered text listing
fn output_text(questions: &[&Question]) {
    if questions.is_empty() {
        println!("No questions found.");
        return;
    }

    for (i, question) in questions.iter().enumerate() {
        println!("{}. {} [{}]", i + 1, question.title(), question.category().key());
        for option in question.options() {
            println!("   - {option}");
        }
    }
}
