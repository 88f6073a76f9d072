//! Framing: length-prefix (4 bytes LE) + bincode payload.

use crate::protocol::{Frame, MAX_CHUNK};

const LEN_SIZE: usize = 4;
// Kind tag + sequence + length word + a full payload, with slack.
const MAX_FRAME_LEN: u32 = 256;

/// Encode a frame: 4 bytes LE length + bincode payload.
pub fn encode_frame(frame: &Frame) -> Result<Vec<u8>, FrameEncodeError> {
    if frame.payload.len() > MAX_CHUNK {
        return Err(FrameEncodeError::PayloadTooLarge(frame.payload.len()));
    }
    let payload = bincode::serialize(frame).map_err(FrameEncodeError::Encode)?;
    let len = payload.len() as u32;
    if len > MAX_FRAME_LEN {
        return Err(FrameEncodeError::TooLarge);
    }
    let mut out = Vec::with_capacity(LEN_SIZE + payload.len());
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Error encoding a frame (bincode, payload capacity, or size limit).
#[derive(Debug, thiserror::Error)]
pub enum FrameEncodeError {
    #[error("encode error: {0}")]
    Encode(#[from] bincode::Error),
    #[error("payload of {0} bytes exceeds chunk capacity")]
    PayloadTooLarge(usize),
    #[error("frame too large")]
    TooLarge,
}

/// Decode one frame from the front of `bytes`. Returns the frame and the
/// number of bytes consumed. Call with a partial buffer; `NeedMore` means
/// try again after more data.
pub fn decode_frame(bytes: &[u8]) -> Result<(Frame, usize), FrameDecodeError> {
    if bytes.len() < LEN_SIZE {
        return Err(FrameDecodeError::NeedMore);
    }
    let len = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    if len > MAX_FRAME_LEN as usize {
        return Err(FrameDecodeError::TooLarge);
    }
    if bytes.len() < LEN_SIZE + len {
        return Err(FrameDecodeError::NeedMore);
    }
    let frame: Frame =
        bincode::deserialize(&bytes[LEN_SIZE..LEN_SIZE + len]).map_err(FrameDecodeError::Decode)?;
    if frame.payload.len() > MAX_CHUNK {
        return Err(FrameDecodeError::PayloadTooLarge(frame.payload.len()));
    }
    Ok((frame, LEN_SIZE + len))
}

/// Error decoding a frame (need more bytes, size limits, or bincode failure).
#[derive(Debug, thiserror::Error)]
pub enum FrameDecodeError {
    #[error("need more bytes")]
    NeedMore,
    #[error("frame too large")]
    TooLarge,
    #[error("payload of {0} bytes exceeds chunk capacity")]
    PayloadTooLarge(usize),
    #[error("decode error: {0}")]
    Decode(#[from] bincode::Error),
}
