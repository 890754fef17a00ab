//! Shared helpers for validating catalog configuration.

pub mod validation;
