//! Treasure-hunt transfer protocol reference implementation.
//! Host-driven core: the message channel and the treasure loader are traits
//! the host provides; the session controller performs no I/O of its own.

pub mod channel;
pub mod grid;
pub mod loader;
pub mod protocol;
pub mod session;
pub mod stuffing;
pub mod wire;

pub use channel::{Channel, ChannelError};
pub use grid::{Cell, Coordinate, Direction, Grid, TreasureRecord, GRID_SIDE, NUM_TREASURES};
pub use loader::{Category, LoadError, Resource, TreasureLoader};
pub use protocol::{Frame, FrameKind, MAX_CHUNK, PROTOCOL_VERSION};
pub use session::{Session, SessionError};
pub use wire::{decode_frame, encode_frame, FrameDecodeError, FrameEncodeError};
