//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the app and engine state and turns them into pixels on
//! the terminal.  No engine mutation happens here.

pub mod document;
pub mod layout;
pub mod popup;
pub mod theme;
pub mod timeline;
