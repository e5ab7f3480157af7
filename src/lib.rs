//! slashpad - a terminal Markdown editor with a slash-command block menu.
//!
//! Typing the trigger character (`/` by default) at the start of a word
//! opens a filterable menu of block types; confirming one rewrites the
//! current line into that block.

pub mod app;
pub mod cli;
pub mod core;
pub mod document;
pub mod fs;
pub mod logging;
pub mod tui;
