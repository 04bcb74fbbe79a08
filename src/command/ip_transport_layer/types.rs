//! Argument and parameter types used by Internet protocol transport layer Commands and Responses
use core::fmt;

/// Socket id as returned by `+NSOCR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketHandle(pub u8);

impl fmt::Display for SocketHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SocketProtocol {
    UDP = 17,
}

/// Release assistance indication of `+NSOSTF`, telling the network that the
/// radio connection can be released early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ReleaseAssistance {
    /// No further uplink or downlink data is expected after this message
    AfterSend = 0x200,
    /// A single downlink message is expected in reply to this message
    AfterResponse = 0x400,
}
