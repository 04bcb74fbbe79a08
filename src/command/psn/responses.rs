//! Responses for Packet Switched Data Services Commands
use super::types::GPRSAttachedState;
use crate::command::{field, required, AtResp};
use crate::engine::classify::split_fields;
use crate::error::{Error, ProtocolError};
use crate::registration::RegistrationStatus;

/// 18.25 EPS network registration status +CEREG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EPSNetworkRegistrationStatus {
    /// Unsolicited result code configuration
    pub n: u8,
    /// Raw 3GPP `<stat>`
    pub stat: u8,
}

impl EPSNetworkRegistrationStatus {
    pub fn status(&self) -> RegistrationStatus {
        RegistrationStatus::from(self.stat)
    }
}

impl AtResp for EPSNetworkRegistrationStatus {
    fn parse(payload: Option<&str>) -> Result<Self, Error> {
        // With <n> >= 2 location fields follow <stat>, <n> = 4 or 5 adds
        // reject cause and PSM timers for up to 10 fields
        let fields = split_fields::<10>(required(payload)?, Some("+CEREG"))?;
        match fields.as_slice() {
            [n, stat, ..] => Ok(Self {
                n: field(n)?,
                stat: field(stat)?,
            }),
            _ => Err(ProtocolError::FieldCount.into()),
        }
    }
}

/// 18.14 GPRS attach or detach +CGATT
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GPRSAttached {
    pub state: GPRSAttachedState,
}

impl AtResp for GPRSAttached {
    fn parse(payload: Option<&str>) -> Result<Self, Error> {
        let fields = split_fields::<1>(required(payload)?, Some("+CGATT"))?;
        let state = match field::<u8>(fields[0])? {
            0 => GPRSAttachedState::Detached,
            1 => GPRSAttachedState::Attached,
            _ => return Err(ProtocolError::InvalidField.into()),
        };
        Ok(Self { state })
    }
}
