//! ### 19 - System features Commands
pub mod types;

use core::fmt::{self, Write};

use types::{PsmReport, PsmState};

use super::{AtCmd, CommandBuf, NoResponse};

/// 19.9 Power Saving Mode Setting +CPSMS
///
/// Controls whether the UE uses PSM. Requested periodic TAU and active time
/// are left at the network defaults.
#[derive(Debug, Clone)]
pub struct SetPowerSavingMode {
    pub mode: PsmState,
}

impl AtCmd for SetPowerSavingMode {
    type Response = NoResponse;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(buf, "+CPSMS={}", self.mode as u8)
    }
}

/// 19.10 Power saving mode status report +NPSMR
#[derive(Debug, Clone)]
pub struct SetPowerSavingModeReport {
    pub n: PsmReport,
}

impl AtCmd for SetPowerSavingModeReport {
    type Response = NoResponse;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(buf, "+NPSMR={}", self.n as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::types::PowerSaveMode;
    use super::*;
    use crate::command::ip_transport_layer::types::ReleaseAssistance;
    use crate::command::tests::cmd_text;

    #[test]
    fn wire_format() {
        assert_eq!(
            cmd_text(&SetPowerSavingMode {
                mode: PsmState::Enabled
            })
            .as_str(),
            "AT+CPSMS=1"
        );
        assert_eq!(
            cmd_text(&SetPowerSavingModeReport {
                n: PsmReport::Disabled
            })
            .as_str(),
            "AT+NPSMR=0"
        );
    }

    #[test]
    fn mode_mapping() {
        assert_eq!(PowerSaveMode::AlwaysOn.psm(), PsmState::Disabled);
        assert_eq!(PowerSaveMode::SleepAfterSend.psm(), PsmState::Enabled);
        assert_eq!(PowerSaveMode::SleepAfterResponse.psm(), PsmState::Enabled);

        assert_eq!(PowerSaveMode::AlwaysOn.release_assistance(), None);
        assert_eq!(
            PowerSaveMode::SleepAfterSend.release_assistance(),
            Some(ReleaseAssistance::AfterSend)
        );
        assert_eq!(
            PowerSaveMode::SleepAfterResponse.release_assistance(),
            Some(ReleaseAssistance::AfterResponse)
        );
    }
}
