//! ### 25 - Internet protocol transport layer Commands
//!
//! The SARA-N2 only offers UDP sockets. Datagram payloads travel hex encoded
//! inside the command line, so the command length bounds the datagram size.
pub mod responses;
pub mod types;

use core::fmt::{self, Write};

use embassy_time::Duration;
use no_std_net::SocketAddrV4;
use responses::{CreateSocketResponse, SocketSent};
use types::{ReleaseAssistance, SocketHandle, SocketProtocol};

use super::{AtCmd, CommandBuf, NoResponse, MAX_COMMAND_LEN};
use crate::engine::classify::Expect;
use crate::hex;
use crate::module_timing;

/// Largest datagram the module accepts in one `+NSOST`.
pub const MODULE_MAX_DATAGRAM: usize = 512;

/// Worst case command text around the hex payload of `+NSOSTF`.
const SEND_FRAMING: usize = "AT+NSOSTF=".len()
    + "255,".len()
    + "255.255.255.255,".len()
    + "65535,".len()
    + "0x400,".len()
    + "1100,".len();

/// Largest datagram that fits a command of `command_len` bytes.
pub const fn max_datagram_len(command_len: usize) -> usize {
    let room = command_len.saturating_sub(SEND_FRAMING) / 2;
    if room < MODULE_MAX_DATAGRAM {
        room
    } else {
        MODULE_MAX_DATAGRAM
    }
}

pub const MAX_DATAGRAM_LEN: usize = max_datagram_len(MAX_COMMAND_LEN);

/// 25.3 Create Socket +NSOCR
///
/// Creates a socket on the UE and binds it to `local_port`. With receive
/// control enabled, incoming datagrams are announced with `+NSONMI`.
#[derive(Debug, Clone)]
pub struct CreateSocket {
    pub protocol: SocketProtocol,
    pub local_port: u16,
}

impl AtCmd for CreateSocket {
    type Response = CreateSocketResponse;
    const EXPECT: Expect = Expect::Bare;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(
            buf,
            "+NSOCR=\"DGRAM\",{},{},1",
            self.protocol as u8, self.local_port
        )
    }
}

/// 25.4 SendTo command +NSOST, and +NSOSTF with release assistance
///
/// Sends a datagram to the remote host. The data is written as uppercase hex,
/// two characters per byte.
#[derive(Debug, Clone)]
pub struct SendTo<'a> {
    pub socket: SocketHandle,
    pub remote: SocketAddrV4,
    pub release: Option<ReleaseAssistance>,
    pub data: &'a [u8],
}

impl<'a> AtCmd for SendTo<'a> {
    type Response = SocketSent;
    const EXPECT: Expect = Expect::Bare;
    const TIMEOUT: Duration = module_timing::SOCKET_DATA;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        match self.release {
            None => write!(
                buf,
                "+NSOST={},{},{},{},",
                self.socket,
                self.remote.ip(),
                self.remote.port(),
                self.data.len()
            )?,
            Some(flag) => write!(
                buf,
                "+NSOSTF={},{},{},0x{:X},{},",
                self.socket,
                self.remote.ip(),
                self.remote.port(),
                flag as u16,
                self.data.len()
            )?,
        }
        hex::encode_upper(self.data, buf)
    }
}

/// 25.6 Receive command +NSORF
///
/// Reads up to `length` bytes of the first buffered datagram. The reply is
/// parsed with [`responses::SocketData::parse`]; a bare `OK` means nothing is
/// buffered.
#[derive(Debug, Clone)]
pub struct ReadSocketData {
    pub socket: SocketHandle,
    pub length: usize,
}

impl AtCmd for ReadSocketData {
    type Response = NoResponse;
    const EXPECT: Expect = Expect::Bare;
    const TIMEOUT: Duration = module_timing::SOCKET_DATA;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(buf, "+NSORF={},{}", self.socket, self.length)
    }
}

/// 25.7 Close Socket +NSOCL
#[derive(Debug, Clone)]
pub struct CloseSocket {
    pub socket: SocketHandle,
}

impl AtCmd for CloseSocket {
    type Response = NoResponse;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(buf, "+NSOCL={}", self.socket)
    }
}
