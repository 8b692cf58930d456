//! nebula — a terminal library browser for externally hosted web games.
//!
//! The catalog of game links lives in a single JSON document on disk; the
//! TUI lets you browse it by category, search it by title, add and delete
//! entries through a hidden admin panel, and launch a game in the system
//! browser from a full-screen theater view.

pub mod app;
pub mod catalog;
pub mod config;
pub mod form;
pub mod keybindings;
pub mod secret;
pub mod storage;
pub mod ui;
pub mod util;
