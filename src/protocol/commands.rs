//! # ESC/POS Printer Control Commands
//!
//! This module implements the control commands that frame every instruction
//! stream: initialization at the start, paper cut at the end, and the line
//! feed that terminates each printed line.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `GS V m n`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for graphics, barcode, and cutter commands:
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Emitted unconditionally
/// at the start of every instruction stream.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Text formatting (bold, size) disabled
/// - Alignment reset to left
///
/// ## Example
///
/// ```
/// use tirilla::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Feed and Partial Cut (GS V 66 0)
///
/// Feeds paper to the cutter position and performs a partial cut. Emitted
/// unconditionally at the end of every instruction stream.
///
/// ## Protocol Details
///
/// | Format  | Bytes       |
/// |---------|-------------|
/// | ASCII   | GS V B 0    |
/// | Hex     | 1D 56 42 00 |
/// | Decimal | 29 86 66 0  |
///
/// ## Behavior
///
/// - Prints any pending data in the line buffer
/// - Feeds paper so the last printed line clears the cutter
/// - Partial cuts leave a small "hinge" so the receipt doesn't fall
#[inline]
pub fn cut() -> Vec<u8> {
    vec![GS, b'V', 66, 0]
}

// ============================================================================
// LINE FEED
// ============================================================================

/// # Line Feed (LF)
///
/// Terminates the current line: prints the line buffer and advances paper.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | LF    |
/// | Hex     | 0A    |
/// | Decimal | 10    |
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ESC/POS uses little-endian encoding for all multi-byte integers.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(384), [0x80, 0x01]); // 384 = 0x0180
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(), vec![0x1D, 0x56, 0x42, 0x00]);
    }

    #[test]
    fn test_line_feed() {
        assert_eq!(line_feed(), vec![0x0A]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(0x1234), [0x34, 0x12]);
        assert_eq!(u16_le(48), [0x30, 0x00]); // Raster width: 48 bytes
        assert_eq!(u16_le(128), [0x80, 0x00]); // Logo height: 128 dots
    }
}
