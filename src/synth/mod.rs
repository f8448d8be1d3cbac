//! # Template Synthesizer
//!
//! The compiler pass: template string + data record in, ordered instruction
//! chunks + diagnostics out.
//!
//! ## Pass Structure
//!
//! ```text
//! ┌───────┐   ┌───────────┐   ┌──────────────────┐   ┌──────────────┐
//! │ Audit │ ─►│ Pre-flight│ ─►│ Per-line machine │ ─►│ Leak report  │
//! │ (tags)│   │ (identity)│   │ (block / inline) │   │ + final cut  │
//! └───────┘   └───────────┘   └──────────────────┘   └──────────────┘
//! ```
//!
//! The pass is best-effort and exhaustive: it never stops at the first
//! problem, never throws past the public boundary, and always returns the
//! full triple (chunks, errors, warnings). The caller's contract is that a
//! non-empty error list means "do not execute this stream"; warnings alone
//! leave the stream usable.
//!
//! ## Example
//!
//! ```
//! use tirilla::synth::{self, ReceiptData};
//!
//! let data = ReceiptData {
//!     store_id: "STORE-7".into(),
//!     items: vec![],
//!     total: "0.00".into(),
//! };
//! let result = synth::synthesize("{{CENTER}}{{B_ON}}HELLO{{B_OFF}}", &data);
//! assert!(result.is_valid());
//! assert_eq!(result.chunks.len(), 7); // reset, center, bold, text, unbold, LF, cut
//! ```

mod scan;
mod state;

pub use scan::{Segment, TagSpan, scan_tags, split_inline, strip_tags, visible_len};
pub use state::ProtocolState;

use crate::error::TirillaError;
use crate::logo::Shield;
use crate::printer::PrinterProfile;
use crate::protocol::{barcode, commands, graphics};
use crate::stream::{Chunk, StreamSummary};
use crate::tags::{self, BlockKind};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// DATA RECORD
// ============================================================================

/// One purchasable line in the item block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The caller-supplied data record a template is compiled against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Mandatory store/agent identifier. An empty value is a blocking error
    /// (synthesis still runs to completion so the caller sees everything).
    #[serde(default)]
    pub store_id: String,
    /// Items expanded by the `{{ITEMS}}` block.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Pre-computed total substituted for `{{TOTAL}}`.
    #[serde(default)]
    pub total: String,
}

// ============================================================================
// OPTIONS AND RESULT
// ============================================================================

/// Knobs for a synthesis pass.
#[derive(Debug, Clone, Default)]
pub struct SynthesisOptions {
    /// Output profile (line budgets, raster geometry, item columns).
    pub profile: PrinterProfile,
    /// Barcode transaction id. `None` draws a random `TXN-XXXXXX`; inject a
    /// fixed id for reproducible output.
    pub txn_id: Option<String>,
}

/// The triple every synthesis call returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisResult {
    /// Ordered instruction chunks. Populated even when errors are present;
    /// the caller decides whether to discard.
    pub chunks: Vec<Chunk>,
    /// Blocking diagnostics: the stream should not be executed.
    pub errors: Vec<String>,
    /// Advisory diagnostics: the stream is still usable.
    pub warnings: Vec<String>,
}

impl SynthesisResult {
    /// Whether the stream may be executed (no blocking diagnostics).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Reporting metrics for the chunk sequence.
    pub fn summary(&self) -> StreamSummary {
        StreamSummary::of(&self.chunks)
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Compile a template with the default profile and a random transaction id.
pub fn synthesize(template: &str, data: &ReceiptData) -> SynthesisResult {
    synthesize_with_options(template, data, &SynthesisOptions::default())
}

/// Compile a template with explicit options.
///
/// Never panics and never returns early with a bare error: internal faults
/// become diagnostic strings, and chunks emitted before a fault are kept.
pub fn synthesize_with_options(
    template: &str,
    data: &ReceiptData,
    options: &SynthesisOptions,
) -> SynthesisResult {
    let mut chunks = Vec::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if data.store_id.is_empty() {
        errors.push("store id is empty; a valid identity is required".to_string());
    }

    if let Err(fault) = run_pass(
        template,
        data,
        options,
        &mut chunks,
        &mut errors,
        &mut warnings,
    ) {
        errors.push(format!("protocol abort: {}", fault));
    }

    SynthesisResult {
        chunks,
        errors,
        warnings,
    }
}

// ============================================================================
// THE PASS
// ============================================================================

fn run_pass(
    template: &str,
    data: &ReceiptData,
    options: &SynthesisOptions,
    chunks: &mut Vec<Chunk>,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> Result<(), TirillaError> {
    options.profile.validate()?;

    // Document-level audit: every unrecognized tag occurrence, exhaustively.
    for span in scan::scan_tags(template) {
        if !tags::is_known(span.text) {
            errors.push(format!(
                "malformed tag: {} is not a recognized instruction",
                span.text
            ));
        }
    }

    // Unconditional hardware reset at the head of the stream.
    chunks.push(Chunk::text(commands::init()));

    let mut state = ProtocolState::new();

    for (index, line) in template.split('\n').enumerate() {
        let line_num = index + 1;

        // Block lines: a block tag alone on its line (after trimming). They
        // bypass substitution, state tracking, length checks, and the LF.
        let trimmed = line.trim();
        if let Some(kind) = tags::lookup(trimmed).and_then(|spec| spec.block) {
            emit_block(kind, line_num, data, options, chunks, errors, warnings);
            continue;
        }

        let processed = substitute_data(line, data);

        state.apply_line(&processed);

        let visible = scan::visible_len(&processed);
        let limit = state.line_limit(&options.profile);
        if visible > limit {
            warnings.push(format!(
                "L{}: line is {} chars but the current width allows {}; text may wrap",
                line_num, visible, limit
            ));
        }

        for segment in scan::split_inline(&processed) {
            match segment {
                Segment::Literal(text) => chunks.push(Chunk::text(text.as_bytes().to_vec())),
                Segment::Tag(spec) => chunks.push(Chunk::text(spec.bytes.to_vec())),
            }
        }
        chunks.push(Chunk::text(commands::line_feed()));
    }

    warnings.extend(state.leak_warnings());

    // Unconditional cut at the tail of the stream.
    chunks.push(Chunk::text(commands::cut()));

    Ok(())
}

/// Expand one block line. Encoder faults are line-scoped errors; the
/// document loop continues either way.
fn emit_block(
    kind: BlockKind,
    line_num: usize,
    data: &ReceiptData,
    options: &SynthesisOptions,
    chunks: &mut Vec<Chunk>,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    match kind {
        BlockKind::Logo => {
            let raster = Shield::raster(&options.profile);
            let width_bytes = raster.width.div_ceil(8);
            match graphics::raster(width_bytes, raster.height, &raster.data) {
                Ok(cmd) => chunks.push(Chunk::Image(cmd)),
                Err(fault) => {
                    errors.push(format!("L{}: logo rasterization fault: {}", line_num, fault));
                }
            }
        }
        BlockKind::Barcode => {
            let txn_id = options.txn_id.clone().unwrap_or_else(random_txn_id);
            match barcode::code128(txn_id.as_bytes()) {
                Ok(cmd) => chunks.push(Chunk::Barcode(cmd)),
                Err(fault) => {
                    errors.push(format!("L{}: barcode generation fault: {}", line_num, fault));
                }
            }
        }
        BlockKind::Items => {
            if data.items.is_empty() {
                warnings.push(format!("L{}: item list is empty; skipping block", line_num));
            } else {
                for item in &data.items {
                    chunks.push(Chunk::text(item_row(item, &options.profile)));
                }
            }
        }
    }
}

/// Render one item as a fixed-width row: name left-justified and truncated,
/// price as `$` + two decimals right-justified, trailing newline.
fn item_row(item: &LineItem, profile: &PrinterProfile) -> String {
    let name: String = item.name.chars().take(profile.name_width).collect();
    let price = format!("${:.2}", item.price);
    format!(
        "{:<name_w$}{:>price_w$}\n",
        name,
        price,
        name_w = profile.name_width,
        price_w = profile.price_width
    )
}

/// Replace data tags with caller values. Absent values fall back to literal
/// placeholders so the rendered text shows what was missing.
fn substitute_data(line: &str, data: &ReceiptData) -> String {
    let store_id = if data.store_id.is_empty() {
        "UNDEFINED"
    } else {
        data.store_id.as_str()
    };
    let total = if data.total.is_empty() {
        "0.00"
    } else {
        data.total.as_str()
    };
    line.replace("{{STORE_ID}}", store_id)
        .replace("{{TOTAL}}", total)
}

/// Draw a decorative transaction id: `TXN-` + 6 uppercase alphanumerics.
fn random_txn_id() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    format!("TXN-{}", suffix)
}

// ============================================================================
// TESTS
// ============================================================================
