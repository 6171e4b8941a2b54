// Comment validator: case-insensitive substring matching against the blocklist.
//
// Lowercase both sides and look for the term anywhere in the comment.
// No trimming, no Unicode normalization, no word boundaries, so "spammer"
// is caught by "spam".

use super::blocklist::BlockedWordSet;

/// Return `true` if `comment` contains none of `blocked_words`, compared
/// case-insensitively as substrings.
pub fn validate<S: AsRef<str>>(comment: &str, blocked_words: &[S]) -> bool {
    find_blocked_term(comment, blocked_words).is_none()
}

/// Return the first term in `blocked_words` found in `comment`, if any.
///
/// Order only decides which term is reported; the verdict is the same
/// regardless of order.
pub fn find_blocked_term<'a, S: AsRef<str>>(
    comment: &str,
    blocked_words: &'a [S],
) -> Option<&'a str> {
    let lowered = comment.to_lowercase();
    blocked_words
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|word| lowered.contains(word.to_lowercase().as_str()))
}

/// Validator bound to one immutable blocklist.
#[derive(Debug, Clone, Default)]
pub struct CommentValidator {
    blocked: BlockedWordSet,
}

impl CommentValidator {
    pub fn new(blocked: BlockedWordSet) -> Self {
        Self { blocked }
    }

    pub fn blocked_words(&self) -> &BlockedWordSet {
        &self.blocked
    }

    pub fn validate(&self, comment: &str) -> bool {
        validate(comment, self.blocked.as_slice())
    }

    /// The term that caused a rejection. Used for logging only.
    pub fn find_blocked_term(&self, comment: &str) -> Option<&str> {
        find_blocked_term(comment, self.blocked.as_slice())
    }
}
