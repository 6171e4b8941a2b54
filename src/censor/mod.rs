// Comment censorship: blocklist and the pure validation function.
//
// Nothing in here touches I/O. The web layer wraps CommentValidator;
// the CLI `check` command calls it directly.

pub mod blocklist;
pub mod validator;

pub use blocklist::{BlockedWordSet, DEFAULT_BLOCKED_WORDS};
pub use validator::{validate, CommentValidator};
