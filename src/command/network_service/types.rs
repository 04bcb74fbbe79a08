/// Network operator selection, `<mode>` of `+COPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorSelectionMode {
    /// Automatic PLMN selection (`+COPS=0`)
    Automatic,
    /// Manual selection of the PLMN given in numeric format
    /// (`+COPS=1,2,"<mcc><mnc>"`)
    Manual { mcc: u16, mnc: u16 },
}
