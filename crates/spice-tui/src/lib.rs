//! spice-tui - Terminal UI for the SPICE client
//!
//! This crate provides the ratatui-based terminal interface: event
//! polling, the run loop, screen renderers and the theme. All state
//! lives in spice-app; everything here is a pure function of it.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
