//! Per-block answer collection
//!
//! A `BlockCollector` is created for each rendered block, collects one
//! answer per prompt, and is consumed into an ordered answer vector once
//! complete. Answer order in the emitted vector equals prompt order; the
//! scoring service interprets positions semantically, so no reordering
//! ever happens here.

use crate::catalog::{self, CatalogError, BLOCK_SIZE};
use crate::scale::AnswerValue;
use thiserror::Error;

/// Block validation errors
///
/// These are programming-contract violations or incomplete input; they
/// block progression but are never surfaced as a terminal error state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Prompt index outside the block
    #[error("prompt index {index} out of range for block of {BLOCK_SIZE} prompts")]
    IndexOutOfRange { index: usize },

    /// Vector requested before every prompt was answered
    #[error("block incomplete: {answered} of {BLOCK_SIZE} prompts answered")]
    Incomplete { answered: usize },
}

/// Collects one answer per prompt in a single block
#[derive(Debug)]
pub struct BlockCollector {
    prompts: &'static [&'static str; BLOCK_SIZE],
    recorded: [Option<AnswerValue>; BLOCK_SIZE],
}

impl BlockCollector {
    /// Create a collector over a block's prompt list
    pub fn new(prompts: &'static [&'static str; BLOCK_SIZE]) -> Self {
        Self {
            prompts,
            recorded: [None; BLOCK_SIZE],
        }
    }

    /// Create a collector for a 1-based catalog block number
    pub fn for_block(block: usize) -> Result<Self, CatalogError> {
        Ok(Self::new(catalog::block_prompts(block)?))
    }

    /// Ordered prompt list for this block
    pub fn prompts(&self) -> &'static [&'static str; BLOCK_SIZE] {
        self.prompts
    }

    /// Record (or overwrite) the answer for one prompt
    pub fn record_answer(
        &mut self,
        prompt_index: usize,
        value: AnswerValue,
    ) -> Result<(), ValidationError> {
        let slot = self
            .recorded
            .get_mut(prompt_index)
            .ok_or(ValidationError::IndexOutOfRange {
                index: prompt_index,
            })?;
        if slot.is_some() {
            tracing::debug!(prompt_index, %value, "overwriting recorded answer");
        }
        *slot = Some(value);
        Ok(())
    }

    /// Number of prompts answered so far
    pub fn answered_count(&self) -> usize {
        self.recorded.iter().filter(|slot| slot.is_some()).count()
    }

    /// True iff every prompt in the block has a recorded answer
    pub fn is_complete(&self) -> bool {
        self.recorded.iter().all(|slot| slot.is_some())
    }

    /// Consume the collector into an ordered answer vector (prompt order)
    pub fn into_vector(self) -> Result<Vec<AnswerValue>, ValidationError> {
        let answered = self.answered_count();
        if answered < BLOCK_SIZE {
            return Err(ValidationError::Incomplete { answered });
        }
        Ok(self.recorded.into_iter().flatten().collect())
    }
}
