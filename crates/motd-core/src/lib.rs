//! Core infrastructure for the MOTD generator.
//!
//! This crate provides the widget composition and layout engine shared by
//! the application binary and the builtin widget set: the widget trait and
//! registry, ANSI-aware width measurement, the row compositor, the layout
//! engine, terminal width detection, and the logging subsystem.

pub mod ansi;
pub mod engine;
pub mod logging;
pub mod registry;
pub mod row;
pub mod term;
pub mod widget;
