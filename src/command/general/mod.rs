//! ### 4 - General Commands
pub mod responses;
pub mod types;

use core::fmt::{self, Write};

use responses::{IMEI, IMSI};
use types::Snt;

use super::{AtCmd, CommandBuf};
use crate::engine::classify::Expect;

/// 4.7 Request product serial number identification +CGSN
///
/// Returns the IMEI (International Mobile station Equipment Identity) or one
/// of the related serial numbers selected by `<snt>`. Only `Snt::IMEI` is
/// parsed into [`IMEI`].
#[derive(Debug, Clone)]
pub struct GetIMEI {
    pub snt: Snt,
}

impl Default for GetIMEI {
    fn default() -> Self {
        Self { snt: Snt::IMEI }
    }
}

impl AtCmd for GetIMEI {
    type Response = IMEI;
    const EXPECT: Expect = Expect::Prefix("+CGSN:");

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        write!(buf, "+CGSN={}", self.snt as u8)
    }
}

/// 4.8 International mobile subscriber identification +CIMI
///
/// Request the IMSI (International Mobile Subscriber Identity). The reply is
/// the bare digit string.
#[derive(Debug, Clone)]
pub struct GetIMSI;

impl AtCmd for GetIMSI {
    type Response = IMSI;
    const EXPECT: Expect = Expect::Bare;

    fn write(&self, buf: &mut CommandBuf) -> fmt::Result {
        buf.write_str("+CIMI")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::cmd_text;
    use crate::command::AtResp;
    use crate::error::{Error, ProtocolError};

    #[test]
    fn wire_format() {
        assert_eq!(cmd_text(&GetIMEI::default()).as_str(), "AT+CGSN=1");
        assert_eq!(cmd_text(&GetIMSI).as_str(), "AT+CIMI");
    }

    #[test]
    fn parses_imei() {
        let res = IMEI::parse(Some("+CGSN: 357517080049321")).unwrap();
        assert_eq!(res.imei.as_str(), "357517080049321");
        assert_eq!(res.imei.to_u64(), 357_517_080_049_321);
    }

    #[test]
    fn parses_imsi() {
        let res = IMSI::parse(Some("242016000012345")).unwrap();
        assert_eq!(res.imsi.as_str(), "242016000012345");

        assert_eq!(
            IMSI::parse(Some("ABC")),
            Err(Error::Protocol(ProtocolError::InvalidField))
        );
        assert_eq!(
            IMSI::parse(None),
            Err(Error::Protocol(ProtocolError::MissingPayload))
        );
    }
}
