// Censor: comment validation against a fixed blocklist
//
// This is the library root. `censor` holds the pure validation logic,
// `web` wraps it in the HTTP service, and `output` formats results for
// logs and the terminal.

pub mod censor;
pub mod config;
pub mod output;
pub mod web;
