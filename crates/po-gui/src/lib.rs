//! Purchase Order Studio - GUI Library
//!
//! This module exposes internal services and state for testing.

pub mod app;
pub mod services;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
