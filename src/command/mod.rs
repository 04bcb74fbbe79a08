//! AT Commands for the u-blox SARA-N2 module family
//!
//! Following the SARA-N2 AT commands manual (UBX-16014887). Each command is a
//! plain struct that formats everything after the leading `AT` and names the
//! response it parses.

pub mod general;
pub mod ip_transport_layer;
pub mod mobile_control;
pub mod network_service;
pub mod psn;
pub mod system_features;

use core::fmt;
use core::str::FromStr;

use embassy_time::Duration;
use heapless::String;

use crate::engine::classify::Expect;
use crate::error::{Error, ProtocolError};
use crate::module_timing;

/// Longest command line the module accepts, including the `AT` prefix.
pub const MAX_COMMAND_LEN: usize = 1100;

pub type CommandBuf = String<MAX_COMMAND_LEN>;

pub trait AtCmd {
    type Response: AtResp;

    /// Which reply line carries the information text.
    const EXPECT: Expect = Expect::Nothing;

    /// Time to wait for each line of the reply.
    const TIMEOUT: Duration = module_timing::COMMAND;

    /// Write the command, without the leading `AT` and without terminator.
    fn write(&self, buf: &mut CommandBuf) -> fmt::Result;
}

pub trait AtResp: Sized {
    /// `payload` is the line selected by [`AtCmd::EXPECT`], if present.
    fn parse(payload: Option<&str>) -> Result<Self, Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoResponse;

impl AtResp for NoResponse {
    fn parse(_: Option<&str>) -> Result<Self, Error> {
        Ok(NoResponse)
    }
}

/// Attention, used to check that the AT interface is alive.
#[derive(Debug, Clone, Copy)]
pub struct AT;

impl AtCmd for AT {
    type Response = NoResponse;

    fn write(&self, _: &mut CommandBuf) -> fmt::Result {
        Ok(())
    }
}

pub(crate) fn required(payload: Option<&str>) -> Result<&str, Error> {
    payload.ok_or(Error::Protocol(ProtocolError::MissingPayload))
}

pub(crate) fn field<T: FromStr>(value: &str) -> Result<T, ProtocolError> {
    value.parse().map_err(|_| ProtocolError::InvalidField)
}
