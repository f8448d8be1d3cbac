//! # Error Types
//!
//! This module defines error types used throughout the tirilla library.
//!
//! Note that [`synthesize`](crate::synth::synthesize) itself never returns an
//! error: the compiler converts every internal fault into a diagnostic string
//! and always returns a result triple. `TirillaError` is what the encoders
//! and the CLI propagate internally before that conversion happens.

use thiserror::Error;

/// Main error type for tirilla operations
#[derive(Debug, Error)]
pub enum TirillaError {
    /// Invalid command or parameter
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Raster image construction error
    #[error("Raster error: {0}")]
    Raster(String),

    /// Barcode encoding error
    #[error("Barcode error: {0}")]
    Barcode(String),

    /// Printer profile misconfiguration
    #[error("Profile error: {0}")]
    Profile(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
