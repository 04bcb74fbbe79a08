use embassy_time::Instant;
use embedded_io::{Read, ReadReady, Write};

/// Byte channel to the module.
///
/// Anything implementing the blocking `embedded-io` traits can be used, e.g. a
/// hardware UART or a software serial port. `read_ready` must not block.
pub trait Transport: Read + Write + ReadReady {}

impl<T> Transport for T where T: Read + Write + ReadReady {}

/// Monotonic time source used for reply deadlines.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by the `embassy-time` driver of the target.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
