use serde::{Deserialize, Serialize};

/// Network registration as last observed by the session.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationStatus {
    #[default]
    Unknown,
    Registering,
    Registered,
    Denied,
    NotRegistered,
}

impl RegistrationStatus {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered)
    }

    pub fn is_registering(&self) -> bool {
        matches!(self, Self::Registering)
    }
}

/// Map the 3GPP `<stat>` of a `+CEREG` reply.
///
/// Home network and roaming both count as registered; out of coverage (4)
/// says nothing about the registration itself.
impl From<u8> for RegistrationStatus {
    fn from(stat: u8) -> Self {
        match stat {
            0 => Self::NotRegistered,
            1 | 5 => Self::Registered,
            2 => Self::Registering,
            3 => Self::Denied,
            _ => Self::Unknown,
        }
    }
}
