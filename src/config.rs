use heapless::String;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Precondition};

/// Longest APN kept by the session.
pub const MAX_APN_LEN: usize = 30;

pub const DEFAULT_APN: &str = "mda.ee";
pub const DEFAULT_LOCAL_PORT: u16 = 1234;

/// Construction time configuration of a [`Session`](crate::Session).
///
/// An MCC or MNC of 0 means unset; manual operator selection is only used when
/// both are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub(crate) apn: String<MAX_APN_LEN>,
    pub(crate) mcc: u16,
    pub(crate) mnc: u16,
    pub(crate) local_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        let mut apn = String::new();
        // Fits MAX_APN_LEN
        apn.push_str(DEFAULT_APN).ok();
        Self {
            apn,
            mcc: 0,
            mnc: 0,
            local_port: DEFAULT_LOCAL_PORT,
        }
    }
}

impl Config {
    /// An empty `apn` leaves the PDP context of the module untouched.
    pub fn with_apn(self, apn: &str) -> Result<Self, Error> {
        let mut s = String::new();
        s.push_str(apn)
            .map_err(|_| Error::Precondition(Precondition::ApnTooLong))?;
        Ok(Self { apn: s, ..self })
    }

    pub fn with_operator(self, mcc: u16, mnc: u16) -> Self {
        Self { mcc, mnc, ..self }
    }

    pub fn with_local_port(self, local_port: u16) -> Self {
        Self { local_port, ..self }
    }

    pub fn apn(&self) -> &str {
        &self.apn
    }

    /// `(mcc, mnc)` when both codes are set.
    pub fn operator(&self) -> Option<(u16, u16)> {
        if self.mcc != 0 && self.mnc != 0 {
            Some((self.mcc, self.mnc))
        } else {
            None
        }
    }

    pub fn local_port(&self) -> u16 {
        self.local_port
    }
}
