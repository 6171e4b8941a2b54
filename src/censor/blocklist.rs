// Blocked word set: the immutable term list the validator checks against.
//
// Terms are lowercased and empty ones dropped at construction. Storage is
// an Arc<[String]>, so clones share one copy across handler tasks.

use std::sync::Arc;

/// Terms rejected by the service. Fixed at startup; there is no
/// configuration surface for these.
pub const DEFAULT_BLOCKED_WORDS: &[&str] = &["spam", "offensive", "banned"];

/// An ordered, immutable sequence of lowercase blocked terms.
#[derive(Debug, Clone)]
pub struct BlockedWordSet {
    words: Arc<[String]>,
}

impl BlockedWordSet {
    /// Build a set from arbitrary terms. Each term is lowercased; empty
    /// terms are dropped since they would match every comment.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: words.into(),
        }
    }

    /// A set with no terms. Every comment validates against it.
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for BlockedWordSet {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_WORDS.iter().copied())
    }
}
