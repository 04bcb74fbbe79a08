use serde::{Deserialize, Serialize};

use crate::command::ip_transport_layer::types::ReleaseAssistance;

/// Power Save Mode behaviour selected for the session.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerSaveMode {
    /// PSM disabled, the radio stays reachable
    #[default]
    AlwaysOn,
    /// PSM enabled, the connection is released right after each datagram
    SleepAfterSend,
    /// PSM enabled, the connection is released after one reply datagram
    SleepAfterResponse,
}

impl PowerSaveMode {
    pub fn psm(&self) -> PsmState {
        match self {
            Self::AlwaysOn => PsmState::Disabled,
            Self::SleepAfterSend | Self::SleepAfterResponse => PsmState::Enabled,
        }
    }

    /// Release assistance flag attached to outgoing datagrams.
    pub fn release_assistance(&self) -> Option<ReleaseAssistance> {
        match self {
            Self::AlwaysOn => None,
            Self::SleepAfterSend => Some(ReleaseAssistance::AfterSend),
            Self::SleepAfterResponse => Some(ReleaseAssistance::AfterResponse),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PsmState {
    Disabled = 0,
    Enabled = 1,
}

/// `<n>` of `+NPSMR`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PsmReport {
    Disabled = 0,
    /// `+NPSMR: <mode>` URCs are emitted on entering and leaving PSM
    Enabled = 1,
}

impl From<PsmState> for PsmReport {
    fn from(state: PsmState) -> Self {
        match state {
            PsmState::Disabled => Self::Disabled,
            PsmState::Enabled => Self::Enabled,
        }
    }
}
