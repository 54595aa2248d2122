//! Utils module - Shared utilities and helpers

/// Logger initialisation
pub mod logging;

/// Input validation
pub mod validation;
