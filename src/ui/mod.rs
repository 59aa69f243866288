//! Rendering for the tenure statistics dashboard
//!
//! This module contains the ratatui rendering logic for the terminal
//! dashboard as well as the plain-text renderer used by `--text` mode and
//! the post-dashboard summary.

pub mod dashboard;
pub mod histogram;
pub mod text;

pub use dashboard::render as render_dashboard;
pub use text::summary_lines;
