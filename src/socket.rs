//! Datagram socket of the session.
//!
//! The module hosts the UDP stack; the driver keeps at most one socket open
//! and moves payloads hex encoded through `+NSOST`/`+NSOSTF` and `+NSORF`.

use core::cmp::min;

use no_std_net::{Ipv4Addr, SocketAddrV4};

use crate::command::ip_transport_layer::{
    responses::SocketData, types::SocketProtocol, CloseSocket, CreateSocket, ReadSocketData,
    SendTo, MAX_DATAGRAM_LEN,
};
use crate::error::{Error, Precondition, ProtocolError};
use crate::hex;
use crate::session::Session;
use crate::traits::{Clock, Transport};

pub use crate::command::ip_transport_layer::types::SocketHandle;

/// Result of one read of buffered socket data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Received {
    /// Bytes written to the caller's buffer
    pub length: usize,
    /// Bytes still buffered in the module, fetch them with another read
    pub remaining: usize,
    /// Origin of the datagram, only filled by [`Session::receive_from`]
    pub remote: Option<SocketAddrV4>,
}

impl<T, C> Session<T, C>
where
    T: Transport,
    C: Clock,
{
    /// Open the UDP socket, bound to the configured local port.
    pub fn create_socket(&mut self) -> Result<SocketHandle, Error> {
        if self.socket.is_some() {
            return Err(Precondition::SocketAlreadyOpen.into());
        }

        let res = self.engine.send(&CreateSocket {
            protocol: SocketProtocol::UDP,
            local_port: self.config.local_port,
        })?;
        self.socket = Some(res.socket);
        debug!("Created socket {}", res.socket.0);
        Ok(res.socket)
    }

    pub fn socket(&self) -> Option<SocketHandle> {
        self.socket
    }

    /// Send `data` as one datagram, returning the number of bytes sent.
    ///
    /// Payloads larger than [`MAX_DATAGRAM_LEN`] are refused before anything
    /// is written. In the sleep power save modes the datagram carries the
    /// matching release assistance flag.
    pub fn send_bytes(&mut self, ip: Ipv4Addr, port: u16, data: &[u8]) -> Result<usize, Error> {
        let socket = self.socket.ok_or(Precondition::NoSocket)?;
        if data.len() > MAX_DATAGRAM_LEN {
            return Err(Precondition::PayloadTooLarge.into());
        }

        let res = self.engine.send(&SendTo {
            socket,
            remote: SocketAddrV4::new(ip, port),
            release: self.power_save.release_assistance(),
            data,
        })?;

        if res.length < data.len() {
            warn!("Module sent {} of {} bytes", res.length, data.len());
            return Err(Error::PartialSend {
                requested: data.len(),
                sent: res.length,
            });
        }
        Ok(res.length)
    }

    pub fn send_string(&mut self, ip: Ipv4Addr, port: u16, data: &str) -> Result<usize, Error> {
        self.send_bytes(ip, port, data.as_bytes())
    }

    /// Read the next buffered datagram into `buf`.
    ///
    /// Nothing buffered is not an error and reads as zero bytes. A datagram
    /// larger than `buf` is delivered in parts, see [`Received::remaining`].
    pub fn receive(&mut self, buf: &mut [u8]) -> Result<Received, Error> {
        self.read_socket(buf, false)
    }

    /// Like [`Session::receive`], also reporting where the datagram came from.
    pub fn receive_from(&mut self, buf: &mut [u8]) -> Result<Received, Error> {
        self.read_socket(buf, true)
    }

    /// Close the socket.
    ///
    /// The handle is forgotten even when the module rejects the command, so a
    /// failed close never leaves the session stuck with a socket it cannot
    /// use. The failure itself is still returned.
    pub fn close_socket(&mut self) -> Result<(), Error> {
        let socket = self.socket.take().ok_or(Precondition::NoSocket)?;
        self.engine.send(&CloseSocket { socket })?;
        debug!("Closed socket {}", socket.0);
        Ok(())
    }

    fn read_socket(&mut self, buf: &mut [u8], with_remote: bool) -> Result<Received, Error> {
        let socket = self.socket.ok_or(Precondition::NoSocket)?;
        let cmd = ReadSocketData {
            socket,
            length: min(buf.len(), MAX_DATAGRAM_LEN),
        };

        self.engine.send_with(&cmd, |payload| {
            let line = match payload {
                Some(line) => line,
                None => return Ok(Received::default()),
            };

            let data = SocketData::parse(line)?;
            let length =
                hex::decode_into(data.data, buf).map_err(|_| ProtocolError::InvalidField)?;
            if length != data.length {
                return Err(ProtocolError::InvalidField.into());
            }

            let remote = if with_remote {
                Some(data.remote()?)
            } else {
                None
            };
            trace!("Received {} bytes, {} remaining", length, data.remaining);
            Ok(Received {
                length,
                remaining: data.remaining,
                remote,
            })
        })
    }
}
