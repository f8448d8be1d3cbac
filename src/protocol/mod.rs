//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS subset
//! the receipt compiler emits.
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (initialize, cut, line feed)
//! - [`text`]: Text styling (bold, character size, alignment)
//! - [`graphics`]: Raster bit image command
//! - [`barcode`]: 1D barcode command
//!
//! ## Usage Example
//!
//! ```
//! use tirilla::protocol::{commands, text};
//!
//! // Build a simple print sequence
//! let mut data = Vec::new();
//!
//! // Initialize printer
//! data.extend(commands::init());
//!
//! // Set text style
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT");
//! data.extend(text::bold(false));
//! data.extend(commands::line_feed());
//!
//! // Feed and cut
//! data.extend(commands::cut());
//! ```
//!
//! ## Protocol Reference
//!
//! The byte layouts follow the ESC/POS command set as modeled by this
//! compiler's wire contract; only the subset below is covered. Multi-byte
//! integers use **little-endian** encoding.

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
