//! Application state: document, theme, routing, layout and configuration

pub mod config;
pub mod document;
pub mod error;
pub mod route;
pub mod shell;
pub mod theme;
