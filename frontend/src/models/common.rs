use std::collections::HashSet;
use std::fmt;

use log::warn;
use serde::Deserialize;

/// Stable identity of a list entry, used to key regions and reveal state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryKey(String);

impl EntryKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A JSON scalar that different payload variants send either as a string or a number.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawScalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl RawScalar {
    /// Trimmed text form, `None` when blank.
    pub fn into_text(self) -> Option<String> {
        let text = match self {
            RawScalar::Text(s) => s.trim().to_string(),
            RawScalar::Integer(n) => n.to_string(),
            RawScalar::Float(n) => n.to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Keep the first entry for every key, dropping later duplicates.
pub(crate) fn dedup_by_key<T>(entries: Vec<T>, key: impl Fn(&T) -> &EntryKey) -> Vec<T> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| {
            let k = key(entry);
            if seen.insert(k.clone()) {
                true
            } else {
                warn!("Dropping entry with duplicate id {}", k);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RawScalar::Text(" 7 ".into()), Some("7"))]
    #[case(RawScalar::Text("   ".into()), None)]
    #[case(RawScalar::Integer(42), Some("42"))]
    #[case(RawScalar::Float(2.5), Some("2.5"))]
    fn scalar_text_form(#[case] raw: RawScalar, #[case] expected: Option<&str>) {
        assert_eq!(raw.into_text().as_deref(), expected);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let entries = vec![
            (EntryKey::new("a"), 1),
            (EntryKey::new("b"), 2),
            (EntryKey::new("a"), 3),
        ];
        let kept = dedup_by_key(entries, |e| &e.0);
        assert_eq!(kept, vec![(EntryKey::new("a"), 1), (EntryKey::new("b"), 2)]);
    }
}
