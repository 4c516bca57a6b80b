//! Parsed double-check output

use revisor_domain::Correction;

/// Output of one double-check pass
#[derive(Debug, Clone)]
pub struct DoubleCheckResponse {
    /// The verified artifact, serialized the same way as the original
    /// (`None` when the pass only returned a correction list)
    pub verified: Option<String>,

    /// Corrections that passed construction, in upstream order
    pub corrections: Vec<Correction>,

    /// Free-text summary of the review, if the model gave one
    pub summary: Option<String>,

    /// Entries that could not be turned into corrections
    pub skipped: Vec<SkippedCorrection>,
}

/// A correction entry that was dropped during parsing
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedCorrection {
    /// Position in the upstream list
    pub index: usize,

    /// Why it was dropped
    pub reason: String,
}
