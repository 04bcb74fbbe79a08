//! ### 5 - Mobile equipment control and status Commands
pub mod types;

use core::fmt::{self, Write};

use embassy_time::Duration;
use types::{Functionality, TerminationErrorMode};

use super::{AtCmd, CommandBuf, NoResponse};
use crate::module_timing;

/// 5.3 Set module functionality +CFUN
///
/// Selects the level of functionality <fun> in the MT.
#[derive(Debug, Clone)]
pub struct SetModuleFunctionality {
    pub fun: Functionality,
}

impl AtCmd for SetModuleFunctionality {
    type Response = NoResponse;
    const TIMEOUT: Duration = module_timing::NETWORK;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(buf, "+CFUN={}", self.fun as u8)
    }
}

/// 5.10 Reboot +NRB
///
/// Reboots the module. The module prints its restart banner before the final
/// `OK`.
#[derive(Debug, Clone)]
pub struct Reboot;

impl AtCmd for Reboot {
    type Response = NoResponse;
    const TIMEOUT: Duration = module_timing::REBOOT;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        buf.write_str("+NRB")
    }
}

/// 5.19 Report mobile termination error +CMEE
///
/// Configures the formatting of the result code +CME ERROR: <err> as an
/// indication of an error relating to the functionality of the MT.
#[derive(Debug, Clone)]
pub struct SetReportMobileTerminationError {
    pub n: TerminationErrorMode,
}

impl AtCmd for SetReportMobileTerminationError {
    type Response = NoResponse;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(buf, "+CMEE={}", self.n as u8)
    }
}
