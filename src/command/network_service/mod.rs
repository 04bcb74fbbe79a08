//! ### 7 - Network service Commands
pub mod responses;
pub mod types;

use core::fmt::{self, Write};

use embassy_time::Duration;
use responses::SignalQuality;
use types::OperatorSelectionMode;

use super::{AtCmd, CommandBuf, NoResponse};
use crate::engine::classify::Expect;
use crate::module_timing;

/// 7.2 Signal quality +CSQ
///
/// Returns the received signal strength indication <rssi> and the channel bit
/// error rate <ber>.
#[derive(Debug, Clone)]
pub struct GetSignalQuality;

impl AtCmd for GetSignalQuality {
    type Response = SignalQuality;
    const EXPECT: Expect = Expect::Prefix("+CSQ:");

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        buf.write_str("+CSQ")
    }
}

/// 7.5 Operator selection +COPS
///
/// Forces an attempt to select and register with the GSM/LTE network
/// operator. Manual selection skips the network scan.
#[derive(Debug, Clone)]
pub struct SetOperatorSelection {
    pub mode: OperatorSelectionMode,
}

impl AtCmd for SetOperatorSelection {
    type Response = NoResponse;
    const TIMEOUT: Duration = module_timing::NETWORK;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        match self.mode {
            OperatorSelectionMode::Automatic => buf.write_str("+COPS=0"),
            OperatorSelectionMode::Manual { mcc, mnc } => {
                write!(buf, "+COPS=1,2,\"{:03}{:02}\"", mcc, mnc)
            }
        }
    }
}
