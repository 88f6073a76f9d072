//! Message channel contract: synchronous send-and-await-reply plus blocking
//! receive. The host supplies the transport.

use crate::protocol::Frame;
use crate::wire::{FrameDecodeError, FrameEncodeError};

/// Channel-level failure. Fatal for the session: there is no retry at this
/// layer.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("channel i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encode(#[from] FrameEncodeError),
    #[error(transparent)]
    Decode(#[from] FrameDecodeError),
}

/// Point-to-point message channel for one session. Delivery ordering within
/// the session is assumed; loss and duplication handling, if any, live below
/// this contract.
pub trait Channel {
    /// Transmit one frame. Blocks for and returns the correlated reply,
    /// unless the frame kind is fire-and-forget
    /// (`FrameKind::expects_reply()` is false), in which case `None` is
    /// returned immediately.
    fn send(&mut self, frame: &Frame) -> Result<Option<Frame>, ChannelError>;

    /// Next inbound frame addressed to this session. With `blocking` false
    /// the call may instead fail with a would-block i/o error.
    fn receive(&mut self, blocking: bool) -> Result<Frame, ChannelError>;
}
