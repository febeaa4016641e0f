//! Questionnaire state machine
//!
//! The controller progresses through four phases:
//! Collecting(1..=6) → Submitting → Done | Failed, with Failed → Collecting(1)
//! on retry. The phase is the single source of truth for which inputs are
//! valid: the presentation layer must suppress anything that would trigger
//! another advance or submission while the phase is Submitting.
//!
//! Invariant while Collecting(k): the accumulator holds exactly
//! (k - 1) * BLOCK_SIZE answers. The accumulator is append-only within a
//! session; only a retry clears it, and then completely.

use crate::catalog::{BLOCK_SIZE, TOTAL_BLOCKS, TOTAL_QUESTIONS};
use crate::profile::ScoringResult;
use crate::scale::AnswerValue;
use thiserror::Error;

/// Current questionnaire phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Collecting answers for the given 1-based block
    Collecting(usize),
    /// Answer vector handed to the scoring client; awaiting resolution
    Submitting,
    /// Submission failed with a human-readable reason
    Failed(String),
    /// Scoring result received; terminal
    Done(ScoringResult),
}

/// Accepted advance outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Move on to collecting the given block
    NextBlock(usize),
    /// All blocks collected; caller must perform exactly one submission
    ReadyToSubmit,
}

/// Rejected transitions
///
/// A rejection never changes state; the caller re-prompts the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// Advance attempted outside a Collecting phase
    #[error("advance rejected: questionnaire is not collecting answers")]
    NotCollecting,

    /// Block vector of the wrong length
    #[error("advance rejected: block vector has {got} answers, expected {BLOCK_SIZE}")]
    WrongBlockLength { got: usize },

    /// Resolution event without an outstanding submission
    #[error("no submission outstanding")]
    NotSubmitting,

    /// Retry attempted outside the Failed phase
    #[error("retry rejected: questionnaire has not failed")]
    NotFailed,
}

/// Owns overall questionnaire progress and the answer accumulator
#[derive(Debug)]
pub struct QuestionnaireController {
    phase: Phase,
    answers: Vec<AnswerValue>,
}

impl QuestionnaireController {
    /// Start a new session at block 1 with an empty accumulator
    pub fn new() -> Self {
        Self {
            phase: Phase::Collecting(1),
            answers: Vec::with_capacity(TOTAL_QUESTIONS),
        }
    }

    /// Current phase
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Block currently being collected, if any
    pub fn current_block(&self) -> Option<usize> {
        match self.phase {
            Phase::Collecting(block) => Some(block),
            _ => None,
        }
    }

    /// Accumulated answers in catalog traversal order
    pub fn answers(&self) -> &[AnswerValue] {
        &self.answers
    }

    /// Fold a completed block vector into the accumulator
    ///
    /// Rejected without state change when not collecting or when the
    /// vector is not exactly one block long. On the final block the phase
    /// moves to Submitting and the caller must perform one scoring call,
    /// then resolve it with [`resolve_success`](Self::resolve_success) or
    /// [`resolve_failure`](Self::resolve_failure).
    pub fn advance(
        &mut self,
        block_vector: Vec<AnswerValue>,
    ) -> Result<AdvanceOutcome, ControllerError> {
        let block = match self.phase {
            Phase::Collecting(block) => block,
            _ => return Err(ControllerError::NotCollecting),
        };
        if block_vector.len() != BLOCK_SIZE {
            return Err(ControllerError::WrongBlockLength {
                got: block_vector.len(),
            });
        }

        self.answers.extend(block_vector);

        if block < TOTAL_BLOCKS {
            self.phase = Phase::Collecting(block + 1);
            tracing::debug!(
                block,
                accumulated = self.answers.len(),
                "block folded into accumulator"
            );
            Ok(AdvanceOutcome::NextBlock(block + 1))
        } else {
            self.phase = Phase::Submitting;
            tracing::info!(
                answers = self.answers.len(),
                "all blocks complete, ready to submit"
            );
            Ok(AdvanceOutcome::ReadyToSubmit)
        }
    }

    /// Resolve the outstanding submission with the service result; terminal
    pub fn resolve_success(&mut self, result: ScoringResult) -> Result<(), ControllerError> {
        match self.phase {
            Phase::Submitting => {
                tracing::info!(profile = %result.profile, "scoring succeeded");
                self.phase = Phase::Done(result);
                Ok(())
            }
            _ => Err(ControllerError::NotSubmitting),
        }
    }

    /// Resolve the outstanding submission with a failure reason
    pub fn resolve_failure(&mut self, reason: impl Into<String>) -> Result<(), ControllerError> {
        match self.phase {
            Phase::Submitting => {
                let reason = reason.into();
                tracing::warn!(%reason, "scoring failed");
                self.phase = Phase::Failed(reason);
                Ok(())
            }
            _ => Err(ControllerError::NotSubmitting),
        }
    }

    /// Restart after a failure: back to block 1, accumulator discarded
    pub fn retry(&mut self) -> Result<(), ControllerError> {
        match self.phase {
            Phase::Failed(_) => {
                self.answers.clear();
                self.phase = Phase::Collecting(1);
                tracing::info!("session reset after failure");
                Ok(())
            }
            _ => Err(ControllerError::NotFailed),
        }
    }
}

impl Default for QuestionnaireController {
    fn default() -> Self {
        Self::new()
    }
}
