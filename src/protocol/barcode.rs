//! # ESC/POS Barcode Command
//!
//! This module implements the 1D barcode command used for the barcode block.
//!
//! The host sends only the payload; the printer renders the bars. That keeps
//! this encoder a thin, pure wrapper: opcode, sub-type, one-byte length,
//! then the raw ASCII payload.

use super::commands::GS;
use crate::error::TirillaError;

// ============================================================================
// 1D BARCODE (GS k 73)
// ============================================================================

/// Code 128 sub-type constant for GS k.
pub const CODE128: u8 = 73;

/// # Print Code 128 Barcode (GS k 73 n d1...dn)
///
/// Prints a Code 128 barcode from a raw ASCII payload.
///
/// ## Protocol Details
///
/// | Format  | Bytes              |
/// |---------|--------------------|
/// | ASCII   | GS k 73 n d1...dn  |
/// | Hex     | 1D 6B 49 n d1...dn |
/// | Decimal | 29 107 73 n d...   |
///
/// ## Parameters
///
/// - `n`: Payload length (one byte, 1-255)
/// - `d1...dn`: Payload bytes
///
/// ## Errors
///
/// The length field is a single byte, so payloads over 255 bytes cannot be
/// encoded. This returns [`TirillaError::Barcode`] rather than truncating:
/// a silently shortened payload would print a scannable code carrying the
/// wrong identifier. An empty payload is rejected for the same reason.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::barcode;
///
/// let cmd = barcode::code128(b"TXN-AB12CD").unwrap();
/// assert_eq!(&cmd[0..4], &[0x1D, 0x6B, 73, 10]);
/// assert_eq!(&cmd[4..], b"TXN-AB12CD");
/// ```
pub fn code128(payload: &[u8]) -> Result<Vec<u8>, TirillaError> {
    if payload.is_empty() {
        return Err(TirillaError::Barcode("payload is empty".into()));
    }
    if payload.len() > 255 {
        return Err(TirillaError::Barcode(format!(
            "payload is {} bytes; the length field is a single byte (max 255)",
            payload.len()
        )));
    }

    let mut cmd = Vec::with_capacity(4 + payload.len());
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(CODE128);
    cmd.push(payload.len() as u8);
    cmd.extend_from_slice(payload);
    Ok(cmd)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code128_header() {
        let cmd = code128(b"HELLO").unwrap();
        assert_eq!(&cmd[0..4], &[0x1D, 0x6B, 0x49, 0x05]);
        assert_eq!(&cmd[4..], b"HELLO");
    }

    #[test]
    fn test_code128_length_is_payload_length() {
        let payload = vec![b'A'; 200];
        let cmd = code128(&payload).unwrap();
        assert_eq!(cmd[3], 200);
        assert_eq!(cmd.len(), 4 + 200);
    }

    #[test]
    fn test_code128_max_payload() {
        let payload = vec![b'X'; 255];
        let cmd = code128(&payload).unwrap();
        assert_eq!(cmd[3], 255);
    }

    #[test]
    fn test_code128_rejects_oversized_payload() {
        let payload = vec![b'X'; 256];
        assert!(code128(&payload).is_err());
    }

    #[test]
    fn test_code128_rejects_empty_payload() {
        assert!(code128(b"").is_err());
    }

    #[test]
    fn test_code128_deterministic() {
        assert_eq!(code128(b"TXN-000001").unwrap(), code128(b"TXN-000001").unwrap());
    }
}
