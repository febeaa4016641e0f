//! Scoring result type
//!
//! Wire shape returned by the scoring service. Field names on the wire
//! are the service's Portuguese names; suggestion order is the service
//! order and duplicate entries are permitted.

use serde::{Deserialize, Serialize};

/// Career profile returned by the scoring service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Profile headline (e.g. "O Analista Estratégico")
    #[serde(rename = "perfil")]
    pub profile: String,

    /// Profile description paragraph
    #[serde(rename = "descricao")]
    pub description: String,

    /// Suggested careers, in service order
    #[serde(rename = "carreiras_sugeridas")]
    pub suggested_careers: Vec<String>,
}
