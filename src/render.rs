use persona_quiz::error::AppError;
use persona_quiz::quiz::{ClassificationResult, Question};
use serde::Serialize;

const BAR_WIDTH: usize = 20;

pub(crate) fn render_progress(answered: usize, total: usize) -> String {
    let fraction = if total == 0 {
        1.0
    } else {
        (answered as f64 / total as f64).clamp(0.0, 1.0)
    };
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        answered,
        total
    )
}

pub(crate) fn render_question(question: &Question) -> String {
    let mut out = format!("{}\n", question.text);
    for (number, option) in question.options.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", number + 1, option.text));
    }
    out
}

pub(crate) fn render_result(result: &ClassificationResult) -> String {
    format!(
        "{}\n{}\n{}\n",
        result.emoji, result.title, result.description
    )
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
