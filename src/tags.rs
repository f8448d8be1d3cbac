//! # Instruction Dictionary
//!
//! The static registry mapping template tags to the printer instructions
//! they represent. Each tag is one [`TagSpec`] entry; the synthesizer never
//! matches on tag names directly, so extending the surface means adding one
//! entry here.
//!
//! ## Tag Categories
//!
//! | Category | Behavior |
//! |----------|----------|
//! | Toggle   | Paired on/off formatting instruction (bold, double height/width) |
//! | Align    | Overwrites the current alignment, no pairing |
//! | Block    | Must occupy a whole line; expands to non-text content |
//! | Data     | Replaced by a caller-supplied value before formatting |
//!
//! ## Usage
//!
//! ```
//! use tirilla::tags::{self, TagCategory};
//!
//! let bold_on = tags::lookup("{{B_ON}}").unwrap();
//! assert_eq!(bold_on.bytes, &[0x1B, 0x45, 0x01]);
//! assert_eq!(bold_on.pair, Some("{{B_OFF}}"));
//!
//! // Enumerate all block tags for the audit pass
//! for spec in tags::by_category(TagCategory::Block) {
//!     println!("{} - {}", spec.tag, spec.name);
//! }
//! ```

use crate::protocol::text::Alignment;

/// Tag classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    /// Paired on/off formatting instruction.
    Toggle,
    /// Alignment selector (overwrite, no pairing).
    Align,
    /// Whole-line expansion (image, barcode, item list).
    Block,
    /// Scalar substitution from caller data.
    Data,
}

/// The formatting state change a tag performs, if any.
///
/// Block and data tags carry no effect; they never reach the state tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Bold(bool),
    DoubleHeight(bool),
    DoubleWidth(bool),
    Align(Alignment),
}

/// The expansion a block tag performs when it occupies a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Procedurally generated raster logo.
    Logo,
    /// Code 128 barcode over the transaction id.
    Barcode,
    /// One formatted text line per item in the caller's item list.
    Items,
}

/// A dictionary entry: one recognized tag and its instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    /// The literal tag text, braces included (e.g. `{{B_ON}}`).
    pub tag: &'static str,
    /// Human-readable instruction name for diagnostics display.
    pub name: &'static str,
    /// Raw instruction bytes. Empty for block and data tags, which expand
    /// structurally instead of to a fixed sequence.
    pub bytes: &'static [u8],
    /// Hex rendering of `bytes` for diagnostics display.
    pub hex: &'static str,
    /// Category classification.
    pub category: TagCategory,
    /// State change applied when the tag is scanned.
    pub effect: Option<Effect>,
    /// For block tags: the expansion to perform.
    pub block: Option<BlockKind>,
    /// For toggles: the tag that reverses this one.
    pub pair: Option<&'static str>,
}

/// The closed tag registry.
///
/// Note the double-width "off" entry shares its bytes with double-height
/// "off": both clear the GS ! size mask (see [`crate::protocol::text`]).
static TAGS: &[TagSpec] = &[
    TagSpec {
        tag: "{{B_ON}}",
        name: "Bold On",
        bytes: &[0x1B, 0x45, 0x01],
        hex: "1B 45 01",
        category: TagCategory::Toggle,
        effect: Some(Effect::Bold(true)),
        block: None,
        pair: Some("{{B_OFF}}"),
    },
    TagSpec {
        tag: "{{B_OFF}}",
        name: "Bold Off",
        bytes: &[0x1B, 0x45, 0x00],
        hex: "1B 45 00",
        category: TagCategory::Toggle,
        effect: Some(Effect::Bold(false)),
        block: None,
        pair: Some("{{B_ON}}"),
    },
    TagSpec {
        tag: "{{DH_ON}}",
        name: "Double Height On",
        bytes: &[0x1D, 0x21, 0x01],
        hex: "1D 21 01",
        category: TagCategory::Toggle,
        effect: Some(Effect::DoubleHeight(true)),
        block: None,
        pair: Some("{{DH_OFF}}"),
    },
    TagSpec {
        tag: "{{DH_OFF}}",
        name: "Double Height Off",
        bytes: &[0x1D, 0x21, 0x00],
        hex: "1D 21 00",
        category: TagCategory::Toggle,
        effect: Some(Effect::DoubleHeight(false)),
        block: None,
        pair: Some("{{DH_ON}}"),
    },
    TagSpec {
        tag: "{{DW_ON}}",
        name: "Double Width On",
        bytes: &[0x1D, 0x21, 0x10],
        hex: "1D 21 10",
        category: TagCategory::Toggle,
        effect: Some(Effect::DoubleWidth(true)),
        block: None,
        pair: Some("{{DW_OFF}}"),
    },
    TagSpec {
        tag: "{{DW_OFF}}",
        name: "Double Width Off",
        bytes: &[0x1D, 0x21, 0x00],
        hex: "1D 21 00",
        category: TagCategory::Toggle,
        effect: Some(Effect::DoubleWidth(false)),
        block: None,
        pair: Some("{{DW_ON}}"),
    },
    TagSpec {
        tag: "{{LEFT}}",
        name: "Align Left",
        bytes: &[0x1B, 0x61, 0x00],
        hex: "1B 61 00",
        category: TagCategory::Align,
        effect: Some(Effect::Align(Alignment::Left)),
        block: None,
        pair: None,
    },
    TagSpec {
        tag: "{{CENTER}}",
        name: "Align Center",
        bytes: &[0x1B, 0x61, 0x01],
        hex: "1B 61 01",
        category: TagCategory::Align,
        effect: Some(Effect::Align(Alignment::Center)),
        block: None,
        pair: None,
    },
    TagSpec {
        tag: "{{RIGHT}}",
        name: "Align Right",
        bytes: &[0x1B, 0x61, 0x02],
        hex: "1B 61 02",
        category: TagCategory::Align,
        effect: Some(Effect::Align(Alignment::Right)),
        block: None,
        pair: None,
    },
    TagSpec {
        tag: "{{JUSTIFY}}",
        name: "Align Justify",
        bytes: &[0x1B, 0x61, 0x03],
        hex: "1B 61 03",
        category: TagCategory::Align,
        effect: Some(Effect::Align(Alignment::Justify)),
        block: None,
        pair: None,
    },
    TagSpec {
        tag: "{{LOGO}}",
        name: "Logo Block",
        bytes: &[],
        hex: "",
        category: TagCategory::Block,
        effect: None,
        block: Some(BlockKind::Logo),
        pair: None,
    },
    TagSpec {
        tag: "{{BARCODE}}",
        name: "Barcode Block",
        bytes: &[],
        hex: "",
        category: TagCategory::Block,
        effect: None,
        block: Some(BlockKind::Barcode),
        pair: None,
    },
    TagSpec {
        tag: "{{ITEMS}}",
        name: "Item List Block",
        bytes: &[],
        hex: "",
        category: TagCategory::Block,
        effect: None,
        block: Some(BlockKind::Items),
        pair: None,
    },
    TagSpec {
        tag: "{{STORE_ID}}",
        name: "Store Identifier",
        bytes: &[],
        hex: "",
        category: TagCategory::Data,
        effect: None,
        block: None,
        pair: None,
    },
    TagSpec {
        tag: "{{TOTAL}}",
        name: "Computed Total",
        bytes: &[],
        hex: "",
        category: TagCategory::Data,
        effect: None,
        block: None,
        pair: None,
    },
];

/// Get all registered tags.
pub fn all() -> &'static [TagSpec] {
    TAGS
}

/// Look up a tag by its literal text (braces included).
pub fn lookup(tag: &str) -> Option<&'static TagSpec> {
    TAGS.iter().find(|spec| spec.tag == tag)
}

/// Whether a tag is in the dictionary.
#[inline]
pub fn is_known(tag: &str) -> bool {
    lookup(tag).is_some()
}

/// Enumerate all tags of one category.
pub fn by_category(category: TagCategory) -> impl Iterator<Item = &'static TagSpec> {
    TAGS.iter().filter(move |spec| spec.category == category)
}

/// Enumerate the formatting tags (toggles and alignments): the entries
/// that carry instruction bytes and participate in inline splitting.
pub fn formatting() -> impl Iterator<Item = &'static TagSpec> {
    TAGS.iter()
        .filter(|spec| matches!(spec.category, TagCategory::Toggle | TagCategory::Align))
}
