//! Hunt wire protocol: frame kinds and frame layout.

use serde::{Deserialize, Serialize};

use crate::grid::Direction;

/// Current protocol version.
pub const PROTOCOL_VERSION: u8 = 1;

/// Payload capacity of one frame, in bytes. Always expressible as a single
/// byte in the frame header.
pub const MAX_CHUNK: usize = 127;

/// All frame kinds exchanged during a session. Encoding is bincode; framing
/// is length-prefix (see wire module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameKind {
    /// Movement requests from the peer.
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Move accepted, no treasure under the player.
    Ack,
    /// Unrecognized inbound frame.
    Nack,
    /// Treasure has no usable backing resource; transfer aborted.
    NotRegular,
    /// Transfer opening: null-terminated display name, kind by category.
    NameText,
    NameVideo,
    NameImage,
    /// Transfer size: 8-byte little-endian byte length.
    SizeAnnounce,
    /// Peer (or local allocation) cannot take the transfer.
    TooBig,
    /// One stuffed chunk of the payload.
    Data,
    /// End of transfer, empty payload.
    End,
}

impl FrameKind {
    /// Whether a send of this kind blocks for a correlated reply. ACK, NACK
    /// and NOT-REGULAR are fire-and-forget at the layer below.
    pub fn expects_reply(self) -> bool {
        !matches!(self, FrameKind::Ack | FrameKind::Nack | FrameKind::NotRegular)
    }

    /// The movement this kind requests, if it is a movement kind.
    pub fn direction(self) -> Option<Direction> {
        match self {
            FrameKind::MoveUp => Some(Direction::Up),
            FrameKind::MoveDown => Some(Direction::Down),
            FrameKind::MoveLeft => Some(Direction::Left),
            FrameKind::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One discrete unit exchanged over the channel. `sequence` is the session
/// correlation id; the payload never exceeds `MAX_CHUNK`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub kind: FrameKind,
    pub sequence: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(kind: FrameKind, sequence: u8, payload: Vec<u8>) -> Self {
        Self {
            kind,
            sequence,
            payload,
        }
    }

    /// A control frame with an empty payload.
    pub fn control(kind: FrameKind, sequence: u8) -> Self {
        Self::new(kind, sequence, Vec::new())
    }
}
