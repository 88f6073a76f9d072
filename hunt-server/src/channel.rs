//! UDP realization of the channel contract: one frame per datagram.

use std::net::{SocketAddr, UdpSocket};

use anyhow::Context;
use hunt_core::{decode_frame, encode_frame, Channel, ChannelError, Frame};

// Largest datagram we expect: a full frame plus codec overhead.
const RECV_BUF: usize = 512;

pub struct UdpChannel {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpChannel {
    /// Bind the local game port and fix the peer this session talks to.
    pub fn bind(port: u16, peer: &str) -> anyhow::Result<Self> {
        let peer: SocketAddr = peer
            .parse()
            .with_context(|| format!("invalid peer address `{peer}`"))?;
        let socket = UdpSocket::bind(("0.0.0.0", port))
            .with_context(|| format!("could not bind UDP port {port}"))?;
        Ok(Self { socket, peer })
    }

    fn transmit(&self, frame: &Frame) -> Result<(), ChannelError> {
        let bytes = encode_frame(frame)?;
        self.socket.send_to(&bytes, self.peer)?;
        Ok(())
    }

    /// Next datagram from the session peer; datagrams from anyone else are
    /// dropped.
    fn next_frame(&self) -> Result<Frame, ChannelError> {
        let mut buf = [0u8; RECV_BUF];
        loop {
            let (n, from) = self.socket.recv_from(&mut buf)?;
            if from != self.peer {
                tracing::debug!(%from, "dropping datagram from unknown sender");
                continue;
            }
            let (frame, _) = decode_frame(&buf[..n])?;
            return Ok(frame);
        }
    }
}

impl Channel for UdpChannel {
    fn send(&mut self, frame: &Frame) -> Result<Option<Frame>, ChannelError> {
        self.transmit(frame)?;
        if frame.kind.expects_reply() {
            Ok(Some(self.next_frame()?))
        } else {
            Ok(None)
        }
    }

    fn receive(&mut self, blocking: bool) -> Result<Frame, ChannelError> {
        self.socket.set_nonblocking(!blocking)?;
        let result = self.next_frame();
        if !blocking {
            self.socket.set_nonblocking(false)?;
        }
        result
    }
}
