//! Core library modules for the punch application.

pub mod bill;
pub mod config;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod punch;
pub mod resolver;
pub mod session;
pub mod view;
