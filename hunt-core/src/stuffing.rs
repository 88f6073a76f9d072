//! Byte stuffing and chunking: reserved-byte transparency over a framed
//! channel.
//!
//! Two byte values are reserved by the transport below the frame format and
//! must never appear unescaped in a frame payload. Every occurrence in the
//! raw payload is followed by a stuffing marker, and the stuffed stream is
//! partitioned into chunks so that an escape pair never straddles a chunk
//! boundary: a would-be-full chunk whose last byte is reserved is shortened
//! by one byte, pushing the pair whole into the next chunk.

use std::collections::TryReserveError;

/// Reserved transport byte values (the VLAN tag-protocol markers).
pub const FORBIDDEN_BYTE_1: u8 = 0x81;
pub const FORBIDDEN_BYTE_2: u8 = 0x88;

/// Marker inserted after each reserved byte; the receiver collapses the pair
/// back to the single original byte.
pub const STUFFING_BYTE: u8 = 0xFF;

fn is_reserved(byte: u8) -> bool {
    byte == FORBIDDEN_BYTE_1 || byte == FORBIDDEN_BYTE_2
}

/// Total stuffed length of `raw`: one extra byte per reserved occurrence.
pub fn stuffed_len(raw: &[u8]) -> u64 {
    raw.len() as u64 + raw.iter().filter(|&&b| is_reserved(b)).count() as u64
}

/// The stuffing buffer could not be allocated.
#[derive(Debug, thiserror::Error)]
pub enum StuffError {
    #[error("stuffing buffer allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

/// Build the fully stuffed byte buffer: reserved bytes become escape pairs,
/// everything else is copied as-is.
pub fn stuff(raw: &[u8]) -> Result<Vec<u8>, StuffError> {
    let mut out = Vec::new();
    out.try_reserve_exact(stuffed_len(raw) as usize)?;
    for &byte in raw {
        out.push(byte);
        if is_reserved(byte) {
            out.push(STUFFING_BYTE);
        }
    }
    Ok(out)
}

/// Partition a stuffed buffer into chunks of at most `capacity` bytes,
/// deferring a reserved byte at a full chunk's last position into the next
/// chunk so its marker stays beside it. The chunk count is whatever this
/// walk produces; there is no separate frame-count formula.
pub fn split_chunks(stuffed: &[u8], capacity: usize) -> Vec<&[u8]> {
    // A capacity below 2 cannot hold an escape pair.
    debug_assert!(capacity >= 2);
    let mut out = Vec::new();
    let mut start = 0;
    while start < stuffed.len() {
        let mut end = usize::min(start + capacity, stuffed.len());
        if end - start == capacity && is_reserved(stuffed[end - 1]) {
            end -= 1;
        }
        out.push(&stuffed[start..end]);
        start = end;
    }
    out
}

/// A stuffed stream that cannot be collapsed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnstuffError {
    #[error("reserved byte 0x{byte:02x} at offset {offset} not followed by the stuffing marker")]
    MissingMarker { byte: u8, offset: usize },
    #[error("reserved byte at end of stream with no room for its marker")]
    Truncated,
}

/// Receiver side: collapse each escape pair back to its reserved byte.
pub fn unstuff(stuffed: &[u8]) -> Result<Vec<u8>, UnstuffError> {
    let mut out = Vec::with_capacity(stuffed.len());
    let mut i = 0;
    while i < stuffed.len() {
        let byte = stuffed[i];
        out.push(byte);
        if is_reserved(byte) {
            match stuffed.get(i + 1) {
                Some(&STUFFING_BYTE) => i += 2,
                Some(_) => return Err(UnstuffError::MissingMarker { byte, offset: i }),
                None => return Err(UnstuffError::Truncated),
            }
        } else {
            i += 1;
        }
    }
    Ok(out)
}
