//! Hooks, in Rust: a page of small panels, each showing one state or effect
//! primitive next to its own source.

pub mod app;
pub mod cli;
pub mod panels;
pub mod snippets;
pub mod ui;

pub use app::{app, page};
pub use snippets::{NamedText, Snippet};
