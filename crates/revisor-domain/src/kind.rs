//! Operation kind module - the category of artifact under review

use std::fmt;

/// Kind of drafting operation whose output is being double-checked
///
/// The kind decides how an artifact is serialized and which correction
/// family applies to it:
/// - TopicExtraction: JSON array of `{title, category}` topics
/// - FactsComparison: JSON object with a `tabela` and fact buckets
/// - Dispositivo, SentenceReview, ProofAnalysis, QuickPrompt: plain prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKind {
    /// Extraction of the topics a decision must address
    TopicExtraction,

    /// Drafting of the operative part of the decision
    Dispositivo,

    /// Review of a full draft sentence
    SentenceReview,

    /// Comparison of the facts alleged by each party
    FactsComparison,

    /// Analysis of the evidence on file
    ProofAnalysis,

    /// Free-form prompt over the case file
    QuickPrompt,
}

impl OperationKind {
    /// Every kind, in declaration order
    pub const ALL: [OperationKind; 6] = [
        OperationKind::TopicExtraction,
        OperationKind::Dispositivo,
        OperationKind::SentenceReview,
        OperationKind::FactsComparison,
        OperationKind::ProofAnalysis,
        OperationKind::QuickPrompt,
    ];

    /// Get the wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::TopicExtraction => "topicExtraction",
            OperationKind::Dispositivo => "dispositivo",
            OperationKind::SentenceReview => "sentenceReview",
            OperationKind::FactsComparison => "factsComparison",
            OperationKind::ProofAnalysis => "proofAnalysis",
            OperationKind::QuickPrompt => "quickPrompt",
        }
    }

    /// Parse a kind from its wire name (exact match)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Whether the artifact of this kind is a structured JSON document
    /// with a patch applier
    pub fn has_structural_applier(&self) -> bool {
        matches!(
            self,
            OperationKind::TopicExtraction | OperationKind::FactsComparison
        )
    }

    /// Whether the artifact of this kind is opaque prose
    pub fn is_text_free(&self) -> bool {
        !self.has_structural_applier()
    }

    /// Whether corrections for this kind use the
    /// `false_positive` / `missed` / `improve` family
    pub fn is_prose_review(&self) -> bool {
        matches!(
            self,
            OperationKind::SentenceReview
                | OperationKind::ProofAnalysis
                | OperationKind::QuickPrompt
        )
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid operation kind: {}", s))
    }
}
