//! Responses for Network service Commands
use crate::command::{field, required, AtResp};
use crate::engine::classify::split_fields;
use crate::error::{Error, ProtocolError};

/// `<rssi>` reported when the signal strength is not known or not
/// detectable.
pub const RSSI_UNKNOWN: u8 = 99;

/// 7.2 Signal quality +CSQ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalQuality {
    /// 0..=31, or 99 if unknown
    pub rssi: u8,
    /// Channel bit error rate, 99 if unknown
    pub ber: u8,
}

impl SignalQuality {
    /// Received signal strength in dBm.
    pub fn dbm(&self) -> Option<i16> {
        if self.rssi == RSSI_UNKNOWN {
            None
        } else {
            Some(-113 + 2 * i16::from(self.rssi))
        }
    }
}

impl AtResp for SignalQuality {
    fn parse(payload: Option<&str>) -> Result<Self, Error> {
        let fields = split_fields::<2>(required(payload)?, Some("+CSQ"))?;
        match fields.as_slice() {
            [rssi, ber] => Ok(Self {
                rssi: field(rssi)?,
                ber: field(ber)?,
            }),
            _ => Err(ProtocolError::FieldCount.into()),
        }
    }
}
