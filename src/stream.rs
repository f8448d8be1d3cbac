//! # Instruction Stream
//!
//! The output side of the compiler: typed byte chunks, ordered exactly as a
//! printer would execute them, plus the summary metrics the caller displays
//! (total size and a hex preview of the stream head).
//!
//! Chunks never mutate after creation; the chunk sequence *is* the
//! instruction stream.

use serde::Serialize;
use std::fmt;

// ============================================================================
// CHUNKS
// ============================================================================

/// Chunk payload classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    /// Literal text bytes or a fixed formatting/control instruction.
    Text,
    /// A raster image command (header + packed bitmap).
    Image,
    /// A barcode command (header + payload).
    Barcode,
}

/// One atomic unit of the output instruction stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Chunk {
    Text(Vec<u8>),
    Image(Vec<u8>),
    Barcode(Vec<u8>),
}

impl Chunk {
    /// Create a text chunk from string or byte content.
    pub fn text(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Text(bytes.into())
    }

    /// The raw payload bytes.
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Text(data) | Self::Image(data) | Self::Barcode(data) => data,
        }
    }

    /// Payload length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.payload().len()
    }

    /// Whether the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload().is_empty()
    }

    /// The chunk's kind tag.
    pub fn kind(&self) -> ChunkKind {
        match self {
            Self::Text(_) => ChunkKind::Text,
            Self::Image(_) => ChunkKind::Image,
            Self::Barcode(_) => ChunkKind::Barcode,
        }
    }
}

/// Concatenate all chunk payloads into the final ordered byte sequence.
pub fn to_bytes(chunks: &[Chunk]) -> Vec<u8> {
    let mut out = Vec::with_capacity(chunks.iter().map(Chunk::len).sum());
    for chunk in chunks {
        out.extend_from_slice(chunk.payload());
    }
    out
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Default preview length in bytes.
pub const PREVIEW_BYTES: usize = 32;

/// Reporting metrics derived from a chunk sequence.
///
/// Carries no semantic weight in the stream itself; this is what the caller
/// renders next to the diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    /// Sum of all chunk payload lengths.
    pub total_bytes: usize,
    /// The first chunk's leading bytes as space-separated uppercase hex.
    pub preview: String,
    /// Whether the stream continues past the preview.
    pub truncated: bool,
}

impl StreamSummary {
    /// Summarize a chunk sequence with the default preview length.
    pub fn of(chunks: &[Chunk]) -> Self {
        Self::with_preview_len(chunks, PREVIEW_BYTES)
    }

    /// Summarize with an explicit preview length.
    pub fn with_preview_len(chunks: &[Chunk], preview_len: usize) -> Self {
        let total_bytes = chunks.iter().map(Chunk::len).sum();
        let head = chunks.first().map(Chunk::payload).unwrap_or(&[]);
        let shown = head.len().min(preview_len);
        Self {
            total_bytes,
            preview: hex_string(&head[..shown]),
            truncated: total_bytes > shown,
        }
    }
}

impl fmt::Display for StreamSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.preview)?;
        if self.truncated {
            write!(f, " ...")?;
        }
        Ok(())
    }
}

/// Render bytes as space-separated uppercase hex pairs.
///
/// ```
/// use tirilla::stream::hex_string;
///
/// assert_eq!(hex_string(&[0x1B, 0x40, 0x0A]), "1B 40 0A");
/// ```
pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_kinds() {
        assert_eq!(Chunk::text("hi").kind(), ChunkKind::Text);
        assert_eq!(Chunk::Image(vec![1]).kind(), ChunkKind::Image);
        assert_eq!(Chunk::Barcode(vec![2]).kind(), ChunkKind::Barcode);
    }

    #[test]
    fn test_chunk_payload() {
        let chunk = Chunk::text("HELLO");
        assert_eq!(chunk.payload(), b"HELLO");
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_to_bytes_preserves_order() {
        let chunks = vec![
            Chunk::Text(vec![0x1B, 0x40]),
            Chunk::Image(vec![0xFF, 0x00]),
            Chunk::Text(vec![0x0A]),
        ];
        assert_eq!(to_bytes(&chunks), vec![0x1B, 0x40, 0xFF, 0x00, 0x0A]);
    }

    #[test]
    fn test_total_bytes_matches_concatenation() {
        let chunks = vec![
            Chunk::Text(vec![0u8; 7]),
            Chunk::Barcode(vec![0u8; 13]),
            Chunk::Text(vec![]),
        ];
        let summary = StreamSummary::of(&chunks);
        assert_eq!(summary.total_bytes, to_bytes(&chunks).len());
        assert_eq!(summary.total_bytes, 20);
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string(&[]), "");
        assert_eq!(hex_string(&[0x00]), "00");
        assert_eq!(hex_string(&[0x1B, 0x40, 0xFF]), "1B 40 FF");
    }

    #[test]
    fn test_preview_is_first_chunk_head() {
        let chunks = vec![
            Chunk::Text(vec![0x1B, 0x40]),
            Chunk::Text(vec![0x0A; 100]),
        ];
        let summary = StreamSummary::of(&chunks);
        assert_eq!(summary.preview, "1B 40");
        assert!(summary.truncated);
        assert_eq!(summary.to_string(), "1B 40 ...");
    }

    #[test]
    fn test_preview_caps_at_limit() {
        let chunks = vec![Chunk::Text((0u8..64).collect())];
        let summary = StreamSummary::of(&chunks);
        // 32 hex pairs, space separated
        assert_eq!(summary.preview.len(), 32 * 3 - 1);
        assert!(summary.truncated);
    }

    #[test]
    fn test_preview_not_truncated_when_stream_fits() {
        let chunks = vec![Chunk::Text(vec![0x1B, 0x40])];
        let summary = StreamSummary::of(&chunks);
        assert!(!summary.truncated);
        assert_eq!(summary.to_string(), "1B 40");
    }

    #[test]
    fn test_empty_stream_summary() {
        let summary = StreamSummary::of(&[]);
        assert_eq!(summary.total_bytes, 0);
        assert_eq!(summary.preview, "");
        assert!(!summary.truncated);
    }
}
