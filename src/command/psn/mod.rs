//! ### 18 - Packet Switched Data Services Commands
//!
//! On NB-IoT the PDP context is the default EPS bearer set up during attach;
//! defining it only selects the APN the network attaches to.
pub mod responses;
pub mod types;

use core::fmt::{self, Write};

use responses::{EPSNetworkRegistrationStatus, GPRSAttached};
use types::PDPType;

use super::{AtCmd, CommandBuf, NoResponse};
use crate::engine::classify::Expect;

/// 18.4 PDP context definition +CGDCONT
///
/// Defines the connection parameters for a PDP context, identified by the
/// local context identification parameter <cid>. Must be issued with the
/// radio off (`+CFUN=0`).
#[derive(Debug, Clone)]
pub struct SetPDPContextDefinition<'a> {
    pub cid: u8,
    pub pdp_type: PDPType,
    pub apn: &'a str,
}

impl<'a> AtCmd for SetPDPContextDefinition<'a> {
    type Response = NoResponse;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(
            buf,
            "+CGDCONT={},\"{}\",\"{}\"",
            self.cid,
            self.pdp_type.as_str(),
            self.apn
        )
    }
}

/// 18.14 GPRS attach or detach +CGATT
///
/// Read command returning whether the MT is attached to the packet domain.
#[derive(Debug, Clone)]
pub struct GetGPRSAttached;

impl AtCmd for GetGPRSAttached {
    type Response = GPRSAttached;
    const EXPECT: Expect = Expect::Prefix("+CGATT:");

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        buf.write_str("+CGATT?")
    }
}

/// 18.25 EPS network registration status +CEREG
///
/// Read command returning the current `<n>` and the registration `<stat>`.
#[derive(Debug, Clone)]
pub struct GetEPSNetworkRegistrationStatus;

impl AtCmd for GetEPSNetworkRegistrationStatus {
    type Response = EPSNetworkRegistrationStatus;
    const EXPECT: Expect = Expect::Prefix("+CEREG:");

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        buf.write_str("+CEREG?")
    }
}

#[cfg(test)]
mod tests {
    use super::types::GPRSAttachedState;
    use super::*;
    use crate::command::tests::cmd_text;
    use crate::command::AtResp;
    use crate::error::{Error, ProtocolError};
    use crate::registration::RegistrationStatus;

    #[test]
    fn wire_format() {
        let cmd = SetPDPContextDefinition {
            cid: 0,
            pdp_type: PDPType::IP,
            apn: "mda.ee",
        };
        assert_eq!(cmd_text(&cmd).as_str(), "AT+CGDCONT=0,\"IP\",\"mda.ee\"");
        assert_eq!(cmd_text(&GetGPRSAttached).as_str(), "AT+CGATT?");
        assert_eq!(
            cmd_text(&GetEPSNetworkRegistrationStatus).as_str(),
            "AT+CEREG?"
        );
    }

    #[test]
    fn parses_registration_status() {
        let res = EPSNetworkRegistrationStatus::parse(Some("+CEREG: 2,1")).unwrap();
        assert_eq!(res.n, 2);
        assert_eq!(res.status(), RegistrationStatus::Registered);

        let res = EPSNetworkRegistrationStatus::parse(Some(
            "+CEREG: 2,5,\"1A2B\",\"01A2B3C4\",9",
        ))
        .unwrap();
        assert_eq!(res.status(), RegistrationStatus::Registered);

        let res = EPSNetworkRegistrationStatus::parse(Some(
            "+CEREG: 4,1,\"1A2B\",\"01A2B3C4\",9,,,\"00100001\",\"01000011\"",
        ))
        .unwrap();
        assert_eq!(res.n, 4);
        assert_eq!(res.status(), RegistrationStatus::Registered);

        let res = EPSNetworkRegistrationStatus::parse(Some(
            "+CEREG: 5,3,\"1A2B\",\"01A2B3C4\",9,0,15,\"00100001\",\"01000011\"",
        ))
        .unwrap();
        assert_eq!(res.status(), RegistrationStatus::Denied);

        assert_eq!(
            EPSNetworkRegistrationStatus::parse(Some("+CEREG: 1")),
            Err(Error::Protocol(ProtocolError::FieldCount))
        );
    }

    #[test]
    fn parses_attach_state() {
        assert_eq!(
            GPRSAttached::parse(Some("+CGATT: 1")).map(|r| r.state),
            Ok(GPRSAttachedState::Attached)
        );
        assert_eq!(
            GPRSAttached::parse(Some("+CGATT: 0")).map(|r| r.state),
            Ok(GPRSAttachedState::Detached)
        );
        assert_eq!(
            GPRSAttached::parse(Some("+CGATT: 7")),
            Err(Error::Protocol(ProtocolError::InvalidField))
        );
    }
}
