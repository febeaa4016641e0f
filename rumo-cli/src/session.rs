//! Interactive questionnaire session loop
//!
//! Drives the controller from a line-oriented input and writes views to
//! the output. The controller phase selects the view; while the phase is
//! Submitting the loop is awaiting the one scoring call, so no input is
//! read and no second submission can start.

use crate::presenter;
use crate::scoring::ScoringClient;
use anyhow::Result;
use rumo_core::collector::BlockCollector;
use rumo_core::controller::{Phase, QuestionnaireController};
use rumo_core::{AnswerValue, ScoringResult};
use std::io::{BufRead, Write};

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Questionnaire completed with a scoring result
    Completed(ScoringResult),
    /// User quit (or input ended) before completion
    Quit,
}

/// Run one questionnaire session to its end
pub async fn run_session<R: BufRead, W: Write>(
    client: &ScoringClient,
    input: &mut R,
    output: &mut W,
) -> Result<SessionEnd> {
    let mut controller = QuestionnaireController::new();

    loop {
        match controller.phase().clone() {
            Phase::Collecting(block) => {
                match collect_block(block, input, output)? {
                    Some(vector) => {
                        // Cannot be rejected: the collector just validated
                        // completeness and the phase was observed Collecting
                        controller.advance(vector)?;
                    }
                    None => return Ok(SessionEnd::Quit),
                }
            }
            Phase::Submitting => {
                output.write_all(presenter::render_loading().as_bytes())?;
                output.flush()?;
                match client.submit(controller.answers()).await {
                    Ok(result) => controller.resolve_success(result)?,
                    Err(err) => {
                        tracing::warn!(error = %err, "submission failed");
                        controller.resolve_failure(err.user_message())?;
                    }
                }
            }
            Phase::Failed(reason) => {
                output.write_all(presenter::render_error(&reason).as_bytes())?;
                output.flush()?;
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(SessionEnd::Quit);
                }
                match line.trim() {
                    choice if choice.eq_ignore_ascii_case("r") => controller.retry()?,
                    choice if choice.eq_ignore_ascii_case("q") => return Ok(SessionEnd::Quit),
                    _ => {} // re-render the error view
                }
            }
            Phase::Done(result) => {
                output.write_all(presenter::render_result(&result).as_bytes())?;
                output.flush()?;
                return Ok(SessionEnd::Completed(result));
            }
        }
    }
}

/// Collect one complete block, re-prompting on invalid input
///
/// Returns None when the user quits or the input ends.
fn collect_block<R: BufRead, W: Write>(
    block: usize,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Vec<AnswerValue>>> {
    let mut collector = BlockCollector::for_block(block)?;
    output.write_all(presenter::render_block_header(block).as_bytes())?;

    for (index, prompt) in collector.prompts().iter().enumerate() {
        output.write_all(presenter::render_prompt(index, prompt).as_bytes())?;

        let value = loop {
            output.write_all(presenter::render_answer_request().as_bytes())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match trimmed.parse::<u8>().ok().and_then(|raw| AnswerValue::new(raw).ok()) {
                Some(value) => break value,
                None => output.write_all(presenter::render_invalid_answer().as_bytes())?,
            }
        };

        collector.record_answer(index, value)?;
    }

    Ok(Some(collector.into_vector()?))
}
