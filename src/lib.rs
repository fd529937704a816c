pub mod app;
pub mod buffer;
pub mod config;
pub mod decor;
pub mod event;
pub mod motion;
pub mod process;
pub mod tui;
