//! Responses for General Commands
use crate::command::{required, AtResp};
use crate::engine::classify::split_fields;
use crate::error::{Error, ProtocolError};
use crate::identity::Identity;

/// 4.7 Request product serial number identification +CGSN
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IMEI {
    pub imei: Identity,
}

impl AtResp for IMEI {
    fn parse(payload: Option<&str>) -> Result<Self, Error> {
        let fields = split_fields::<1>(required(payload)?, Some("+CGSN"))?;
        let imei = Identity::parse(fields[0]).map_err(|_| ProtocolError::InvalidField)?;
        Ok(Self { imei })
    }
}

/// 4.8 International mobile subscriber identification +CIMI
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IMSI {
    pub imsi: Identity,
}

impl AtResp for IMSI {
    fn parse(payload: Option<&str>) -> Result<Self, Error> {
        let imsi = Identity::parse(required(payload)?.trim())
            .map_err(|_| ProtocolError::InvalidField)?;
        Ok(Self { imsi })
    }
}
