//! # Tirilla - Receipt Template Compiler
//!
//! Tirilla compiles a receipt template (literal text mixed with `{{TAG}}`
//! control tags) plus a structured data record into an ordered stream of
//! ESC/POS printer instructions. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders (subset)
//! - **Tag dictionary**: the closed registry of recognized template tags
//! - **Synthesis**: the best-effort compiler pass with full diagnostics
//! - **Stream assembly**: typed chunks, byte totals, hex preview
//!
//! ## Quick Start
//!
//! ```
//! use tirilla::synth::{self, LineItem, ReceiptData, SynthesisOptions};
//! use tirilla::printer::PrinterProfile;
//!
//! let template = "\
//! {{CENTER}}{{B_ON}}EVIDENCE LOG{{B_OFF}}
//! {{ITEMS}}
//! {{RIGHT}}TOTAL: {{TOTAL}}";
//!
//! let data = ReceiptData {
//!     store_id: "STORE-7".into(),
//!     items: vec![LineItem::new("Espresso", 4.50)],
//!     total: "4.50".into(),
//! };
//!
//! let options = SynthesisOptions {
//!     profile: PrinterProfile::MM80,
//!     txn_id: Some("TXN-DEMO01".into()),
//! };
//!
//! let result = synth::synthesize_with_options(template, &data, &options);
//! assert!(result.is_valid());
//!
//! // The chunk sequence is the instruction stream
//! let summary = result.summary();
//! println!("{} bytes: {}", summary.total_bytes, summary);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`tags`] | Instruction dictionary |
//! | [`synth`] | Template compiler pass |
//! | [`stream`] | Chunks and stream summary |
//! | [`logo`] | Procedural logo raster |
//! | [`printer`] | Printer profiles |
//! | [`error`] | Error types |
//!
//! ## Diagnostics Contract
//!
//! Synthesis always returns the triple (chunks, errors, warnings); it never
//! panics past its boundary. Errors are blocking ("do not execute this
//! stream"), warnings are advisory. Both lists are rebuilt on every call;
//! nothing persists between calls, and concurrent calls share no state.

pub mod error;
pub mod logo;
pub mod printer;
pub mod protocol;
pub mod stream;
pub mod synth;
pub mod tags;

// Re-exports for convenience
pub use error::TirillaError;
pub use printer::PrinterProfile;
pub use stream::{Chunk, ChunkKind, StreamSummary};
pub use synth::{ReceiptData, SynthesisOptions, SynthesisResult, synthesize};
