//! Responses for Internet protocol transport layer Commands
use core::str::FromStr;

use no_std_net::{Ipv4Addr, SocketAddrV4};

use super::types::SocketHandle;
use crate::command::{field, required, AtResp};
use crate::engine::classify::split_fields;
use crate::error::{Error, ProtocolError};

/// 25.3 Create Socket +NSOCR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CreateSocketResponse {
    pub socket: SocketHandle,
}

impl AtResp for CreateSocketResponse {
    fn parse(payload: Option<&str>) -> Result<Self, Error> {
        let socket = field(required(payload)?.trim())?;
        Ok(Self {
            socket: SocketHandle(socket),
        })
    }
}

/// 25.4 SendTo command +NSOST / +NSOSTF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketSent {
    pub socket: SocketHandle,
    /// Number of bytes accepted by the module
    pub length: usize,
}

impl AtResp for SocketSent {
    fn parse(payload: Option<&str>) -> Result<Self, Error> {
        let fields = split_fields::<2>(required(payload)?, None)?;
        match fields.as_slice() {
            [socket, length] => Ok(Self {
                socket: SocketHandle(field(socket)?),
                length: field(length)?,
            }),
            _ => Err(ProtocolError::FieldCount.into()),
        }
    }
}

/// 25.6 Receive command +NSORF
///
/// `<socket>,<ip_addr>,<port>,<length>,<data>,<remaining_length>`
///
/// The data field borrows the reply line and is still hex encoded. The remote
/// endpoint is only parsed on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketData<'a> {
    pub socket: SocketHandle,
    ip: &'a str,
    port: &'a str,
    pub length: usize,
    pub data: &'a str,
    pub remaining: usize,
}

impl<'a> SocketData<'a> {
    pub fn parse(line: &'a str) -> Result<Self, ProtocolError> {
        let fields = split_fields::<6>(line, None)?;
        match fields.as_slice() {
            [socket, ip, port, length, data, remaining] => Ok(Self {
                socket: SocketHandle(field(socket)?),
                ip: *ip,
                port: *port,
                length: field(length)?,
                data: *data,
                remaining: field(remaining)?,
            }),
            _ => Err(ProtocolError::FieldCount),
        }
    }

    pub fn remote(&self) -> Result<SocketAddrV4, ProtocolError> {
        let ip = Ipv4Addr::from_str(self.ip).map_err(|_| ProtocolError::InvalidField)?;
        Ok(SocketAddrV4::new(ip, field(self.port)?))
    }
}
