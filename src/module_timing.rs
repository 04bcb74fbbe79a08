use embassy_time::Duration;

/// Default time to wait for each line of a reply
pub const COMMAND: Duration = Duration::from_secs(2);

/// `+CFUN` and `+COPS` touch the radio and may stall the AT interface for
/// several seconds
pub const NETWORK: Duration = Duration::from_secs(10);

/// Socket data commands (`+NSOST`, `+NSOSTF`, `+NSORF`)
pub const SOCKET_DATA: Duration = Duration::from_secs(5);

/// Time for the module to restart after `AT+NRB` and report `OK`
pub const REBOOT: Duration = Duration::from_secs(10);
