//! # Rumo Core Library
//!
//! Questionnaire state machine and answer collection for the Rumo
//! vocational-profile questionnaire:
//! - Discrete answer scale (1..5) with semantic labels
//! - Static question catalog (6 blocks of 8 prompts)
//! - Per-block answer collection and validation
//! - Overall progress state machine and submission phases
//! - Scoring result type shared with the scoring client

pub mod catalog;
pub mod collector;
pub mod controller;
pub mod error;
pub mod profile;
pub mod scale;

pub use error::{Error, Result};
pub use profile::ScoringResult;
pub use scale::AnswerValue;
