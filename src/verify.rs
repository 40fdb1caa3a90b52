//! Comparison of extracted fields against expected values.

use std::collections::HashMap;

/// Outcome for one expected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Matched,
    Mismatched { actual: String },
    Missing,
}

/// One expected field with its verification outcome.
#[derive(Debug, Clone)]
pub struct FieldResult {
    pub name: String,
    pub expected: String,
    pub status: FieldStatus,
}

impl FieldResult {
    pub fn matched(&self) -> bool {
        self.status == FieldStatus::Matched
    }
}

/// Verify every expected field against the extracted mapping.
///
/// Comparison is exact: byte-equal, case sensitive, no normalization.
/// Every field is evaluated even after a failure, so one run surfaces all
/// problems at once.
pub fn verify_fields(
    extracted: &HashMap<String, String>,
    expected: &[(&'static str, &'static str)],
) -> Vec<FieldResult> {
    expected
        .iter()
        .map(|(name, want)| {
            let status = match extracted.get(*name) {
                Some(got) if got.as_str() == *want => FieldStatus::Matched,
                Some(got) => FieldStatus::Mismatched { actual: got.clone() },
                None => FieldStatus::Missing,
            };
            FieldResult {
                name: name.to_string(),
                expected: want.to_string(),
                status,
            }
        })
        .collect()
}

/// The group verdict: true only when every field matched exactly.
pub fn all_matched(results: &[FieldResult]) -> bool {
    results.iter().all(FieldResult::matched)
}
