//! Terminal rendering of questionnaire views
//!
//! Pure string rendering for the four views (block, loading, error,
//! result). The session loop decides which view applies from the
//! controller phase; nothing here mutates state.

use rumo_core::catalog::TOTAL_BLOCKS;
use rumo_core::{AnswerValue, ScoringResult};

const PROGRESS_BAR_WIDTH: usize = 24;

/// Header for a block view: progress bar plus "Bloco k de 6"
pub fn render_block_header(block: usize) -> String {
    let filled = PROGRESS_BAR_WIDTH * (block - 1) / TOTAL_BLOCKS;
    format!(
        "\n[{}{}] Bloco {} de {}\n\n",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled),
        block,
        TOTAL_BLOCKS
    )
}

/// One numbered prompt with the labeled answer options
pub fn render_prompt(index: usize, prompt: &str) -> String {
    let options = AnswerValue::options()
        .iter()
        .map(|value| format!("[{}] {}", value, value.label()))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}. {}\n    {}\n", index + 1, prompt, options)
}

/// Prompt line asking for one answer on the scale
pub fn render_answer_request() -> String {
    "    Resposta (1-5): ".to_string()
}

/// Rejection line for input outside the scale
pub fn render_invalid_answer() -> String {
    "    Por favor, responda com um número de 1 a 5.\n".to_string()
}

/// Loading view shown while the submission is outstanding
pub fn render_loading() -> String {
    "\nAnalisando seu perfil...\n".to_string()
}

/// Error view with the single recovery action
pub fn render_error(message: &str) -> String {
    format!(
        "\nErro ao Processar\n{}\n\n[r] Tentar novamente  [q] Sair\n> ",
        message
    )
}

/// Result view: profile headline, description and suggested careers
pub fn render_result(result: &ScoringResult) -> String {
    let mut view = format!("\n{}\n\n{}\n\nCarreiras Sugeridas:\n", result.profile, result.description);
    for career in &result.suggested_careers {
        view.push_str("  - ");
        view.push_str(career);
        view.push('\n');
    }
    view
}
