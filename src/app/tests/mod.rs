//! Tests for the app module.
//!
//! - `helpers` - Shared test utilities
//! - `slash_flow` - Typing the trigger, filtering, confirming, dismissing
//! - `shortcuts` - Toolbar shortcuts, undo and quit
//! - `render` - Full-screen rendering against a `TestBackend`

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
