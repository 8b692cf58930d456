//! Terminal User Interface module.
//!
//! - Main event loop (`run`)
//! - Input handling for browse, theater, search, and admin-form modes
//! - Rendering for the sidebar, card grid, theater, and overlays
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `render` - View rendering dispatch
//! - `sidebar` - Category sidebar widget
//! - `grid` - Game card grid widget
//! - `theater` - Full-screen theater view
//! - `admin` - Admin panel (entry form) overlay
//! - `help` - Keybinding help overlay
//! - `status` - Status bar widget

mod admin;
mod grid;
mod help;
mod input;
mod loop_runner;
mod render;
mod sidebar;
mod status;
mod theater;

pub use loop_runner::{run, Action};
