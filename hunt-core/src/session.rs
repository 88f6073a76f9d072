//! Session controller: movement handling and the treasure transfer protocol.
//!
//! One session, two parties, strictly synchronous: the controller blocks on
//! the channel for one inbound frame at a time, and a triggered transfer
//! runs to resolution before the next movement is read.

use rand::Rng;

use crate::channel::{Channel, ChannelError};
use crate::grid::Grid;
use crate::loader::TreasureLoader;
use crate::protocol::{Frame, FrameKind, MAX_CHUNK};
use crate::stuffing;

/// Emit a progress event every this many DATA frames.
const PROGRESS_EVERY: usize = 50;

/// The only fatal session failure; every other error path keeps the hunt
/// going.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("channel failure: {0}")]
    Channel(#[from] ChannelError),
}

/// Drives one hunt over a host-provided channel and loader. Owns the grid
/// and the session sequence identifier stamped on every outbound frame.
pub struct Session<C, L> {
    grid: Grid,
    channel: C,
    loader: L,
    sequence: u8,
}

impl<C: Channel, L: TreasureLoader> Session<C, L> {
    pub fn new(grid: Grid, channel: C, loader: L) -> Self {
        let sequence = rand::thread_rng().gen();
        Self {
            grid,
            channel,
            loader,
            sequence,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Block for one inbound frame and handle it fully: a movement either
    /// yields an ACK or drives a complete transfer; anything else is NACKed
    /// without touching the grid. Returns true while treasures remain.
    pub fn step(&mut self) -> Result<bool, SessionError> {
        let inbound = self.channel.receive(true)?;
        match inbound.kind.direction() {
            Some(direction) => {
                if !self.grid.move_player(direction) {
                    tracing::debug!(?direction, "move rejected at grid edge");
                }
                let position = self.grid.player_position();
                match self.grid.treasure_at(position) {
                    Some(index) => {
                        self.grid.mark_found(index);
                        tracing::info!(
                            index,
                            x = position.x,
                            y = position.y,
                            "player found a treasure"
                        );
                        self.transfer(index)?;
                    }
                    None => {
                        self.send_barrier(Frame::control(FrameKind::Ack, self.sequence))?;
                    }
                }
            }
            None => {
                tracing::warn!(kind = ?inbound.kind, "unexpected frame while awaiting a move");
                self.send_barrier(Frame::control(FrameKind::Nack, self.sequence))?;
            }
        }
        Ok(!self.grid.all_found())
    }

    /// Drive the session until every treasure has been discovered and its
    /// transfer resolved, successfully or not.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while self.step()? {}
        tracing::info!("all treasures found, ending session");
        Ok(())
    }

    /// The transfer protocol for one discovered treasure. Every path out of
    /// here drops the loaded resource and returns the session to movement
    /// handling.
    fn transfer(&mut self, index: usize) -> Result<(), SessionError> {
        let resource = match self.loader.resolve(index) {
            Ok(resource) => resource,
            Err(error) => {
                tracing::warn!(index, %error, "treasure has no usable backing resource");
                return self.send_barrier(Frame::control(FrameKind::NotRegular, self.sequence));
            }
        };

        // The display name travels null-terminated.
        let mut name = resource.display_name.clone().into_bytes();
        name.push(0);
        self.send_barrier(Frame::new(resource.category.name_kind(), self.sequence, name))?;

        let size = resource.byte_len();
        tracing::info!(index, name = %resource.display_name, size, "announcing treasure");
        let reply = self.exchange(Frame::new(
            FrameKind::SizeAnnounce,
            self.sequence,
            size.to_le_bytes().to_vec(),
        ))?;
        if matches!(&reply, Some(r) if r.kind == FrameKind::TooBig) {
            tracing::warn!(index, size, "peer has no room for this treasure");
            return self.send_barrier(Frame::control(FrameKind::Ack, self.sequence));
        }

        let stuffed = match stuffing::stuff(resource.bytes()) {
            Ok(stuffed) => stuffed,
            Err(error) => {
                tracing::error!(index, size, %error, "could not build the stuffing buffer");
                return self.send_barrier(Frame::control(FrameKind::TooBig, self.sequence));
            }
        };

        let chunks = stuffing::split_chunks(&stuffed, MAX_CHUNK);
        let total = chunks.len();
        for (i, chunk) in chunks.iter().enumerate() {
            if i % PROGRESS_EVERY == 0 {
                tracing::debug!(sent = i, total, "sending treasure data");
            }
            self.send_barrier(Frame::new(FrameKind::Data, self.sequence, chunk.to_vec()))?;
        }
        self.send_barrier(Frame::control(FrameKind::End, self.sequence))
    }

    /// Send and return the correlated reply for inspection.
    fn exchange(&mut self, frame: Frame) -> Result<Option<Frame>, SessionError> {
        Ok(self.channel.send(&frame)?)
    }

    /// Send and wait out the reply, discarding it: a synchronization
    /// barrier, nothing more.
    fn send_barrier(&mut self, frame: Frame) -> Result<(), SessionError> {
        self.channel.send(&frame)?;
        Ok(())
    }
}
