//! # ESC/POS Raster Graphics Command
//!
//! This module implements the raster bit image command used for the logo
//! block.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (horizontal, 384 dots default)
//!   │
//!   │   ████████  ← 1 bit per dot
//!   │   ████████
//!   ▼
//!   Y (vertical, paper feed direction)
//! ```
//!
//! ## Bit Packing
//!
//! Graphics data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use super::commands::{GS, u16_le};
use crate::error::TirillaError;

// ============================================================================
// RASTER MODE GRAPHICS (GS v 0)
// ============================================================================

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// Prints a packed monochrome bitmap of arbitrary height.
///
/// ## Protocol Details
///
/// | Format  | Bytes                        |
/// |---------|------------------------------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d...  |
/// | Decimal | 29 118 48 m xL xH yL yH d... |
///
/// ## Parameters
///
/// - `m`: Mode (0 = normal scale)
/// - `xL, xH`: Width in **bytes**, little-endian
/// - `yL, yH`: Height in **dots**, little-endian
/// - `d1...dk`: Image data, k = width_bytes × height bytes
///
/// ## Data Layout
///
/// Row-by-row, each byte is 8 horizontal dots:
///
/// ```text
/// Row 0:    d[0]      d[1]       ... d[width-1]
/// Row 1:    d[width]  d[width+1] ... d[2*width-1]
/// ...
/// Row h-1:  d[(h-1)*width]       ... d[h*width-1]
/// ```
///
/// ## Errors
///
/// Returns [`TirillaError::Raster`] when the data length does not equal
/// `width_bytes * height`; a malformed bitmap would desynchronize the
/// printer's command parser.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::graphics;
///
/// // A 48-byte wide (384 dot), 2-row black bitmap
/// let data = vec![0xFF; 48 * 2];
/// let cmd = graphics::raster(48, 2, &data).unwrap();
///
/// // Header: GS v 0 0, width 48 LE, height 2 LE
/// assert_eq!(&cmd[0..8], &[0x1D, 0x76, 0x30, 0x00, 48, 0, 2, 0]);
/// assert_eq!(cmd.len(), 8 + 48 * 2);
/// ```
pub fn raster(width_bytes: u16, height: u16, data: &[u8]) -> Result<Vec<u8>, TirillaError> {
    let expected = width_bytes as usize * height as usize;
    if data.len() != expected {
        return Err(TirillaError::Raster(format!(
            "bitmap is {} bytes, expected {} ({} bytes x {} rows)",
            data.len(),
            expected,
            width_bytes,
            height
        )));
    }

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.extend(raster_header(width_bytes, height));
    cmd.extend_from_slice(data);
    Ok(cmd)
}

/// Build the 8-byte raster header without payload.
///
/// Split out so tests can assert the header independently of bitmap content.
#[inline]
pub fn raster_header(width_bytes: u16, height: u16) -> [u8; 8] {
    let [x_l, x_h] = u16_le(width_bytes);
    let [y_l, y_h] = u16_le(height);
    [GS, b'v', b'0', 0, x_l, x_h, y_l, y_h]
}

// ============================================================================
// TESTS
// ============================================================================
