/// State management module
///
/// This module handles all application state, including:
/// - The in-memory image collection (library.rs)
/// - Shared data structures (data.rs)
/// - Adjustment parameters for the live preview (edit.rs)
/// - Selection and viewport for the current session (session.rs)

pub mod data;
pub mod edit;
pub mod library;
pub mod session;
