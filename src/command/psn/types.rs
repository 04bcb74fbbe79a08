/// Packet Data Protocol type of a PDP context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PDPType {
    IP,
    NonIP,
}

impl PDPType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IP => "IP",
            Self::NonIP => "NONIP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GPRSAttachedState {
    Detached = 0,
    Attached = 1,
}
