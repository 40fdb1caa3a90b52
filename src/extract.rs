//! Labeled-literal field extraction from source text.

use regex::Regex;
use std::collections::HashMap;

/// A named field and the pattern that captures its quoted literal.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    pub name: &'static str,
    regex: Regex,
}

impl FieldPattern {
    /// Pattern for a `label: 'value'` field as written in Dart source.
    pub fn labeled_literal(name: &'static str) -> Self {
        let regex = Regex::new(&format!(r"{}:\s*'([^']+)'", regex::escape(name)))
            .expect("escaped field label always forms a valid pattern");
        Self { name, regex }
    }
}

/// Extract each field's first matched literal from `content`.
///
/// Fields with no match are simply absent from the result; absence means
/// "not configured", never an error. If a field appears more than once only
/// the first occurrence is reported.
pub fn extract_fields(content: &str, patterns: &[FieldPattern]) -> HashMap<String, String> {
    let mut found = HashMap::new();
    for pattern in patterns {
        if let Some(value) = pattern
            .regex
            .captures(content)
            .and_then(|cap| cap.get(1))
        {
            found.insert(pattern.name.to_string(), value.as_str().to_string());
        }
    }
    found
}
