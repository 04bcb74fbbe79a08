/// Requested serial number type of `+CGSN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Snt {
    /// Product serial number
    SerialNumber = 0,
    /// International Mobile station Equipment Identity (IMEI)
    IMEI = 1,
    /// International Mobile station Equipment Identity and Software Version
    /// number (IMEISV)
    IMEISV = 2,
    /// Software Version Number (SVN)
    SVN = 3,
}
