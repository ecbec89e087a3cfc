use crate::dns_record::CanonicalRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answer set from one nameserver for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub domain: String,
    pub record_type: String,
    pub nameserver: String,
    pub results: Vec<CanonicalRecord>,
}

impl LookupResult {
    pub fn new(
        domain: impl Into<String>,
        record_type: impl Into<String>,
        nameserver: impl Into<String>,
        results: Vec<CanonicalRecord>,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type: record_type.into(),
            nameserver: nameserver.into(),
            results,
        }
    }

    /// Placeholder for a unit that failed; keeps its tags so the batch stays aligned.
    pub fn empty(
        domain: impl Into<String>,
        record_type: impl Into<String>,
        nameserver: impl Into<String>,
    ) -> Self {
        Self::new(domain, record_type, nameserver, Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Equal,
    Removed,
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSpan {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffSpan {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Word diff of one record type: rendered left/right markup plus the raw spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffBlock {
    pub left: String,
    pub right: String,
    pub spans: Vec<DiffSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainComparison {
    pub domain: String,
    pub results: Vec<LookupResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<BTreeMap<String, DiffBlock>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub completed: usize,
    pub results: Vec<DomainComparison>,
}
