#![cfg_attr(not(test), no_std)]

//! Driver for the u-blox SARA-N2 NB-IoT module.
//!
//! The module is driven over a serial link with its AT command set. A
//! [`Session`] owns the link, registers on the network and exposes a single
//! UDP socket:
//!
//! ```ignore
//! let mut session = Session::new(uart, Config::default().with_operator(242, 1));
//! session.begin()?;
//! session.online()?;
//! while !session.registration_status()?.is_registered() {}
//! session.create_socket()?;
//! session.send_string(Ipv4Addr::new(10, 0, 0, 1), 5683, "hello")?;
//! ```

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod hex;
pub mod identity;
pub mod module_timing;
pub mod registration;
pub mod session;
pub mod socket;
pub mod traits;

#[cfg(test)]
mod test_helpers;

pub use command::system_features::types::PowerSaveMode;
pub use config::Config;
pub use error::Error;
pub use identity::Identity;
pub use registration::RegistrationStatus;
pub use session::Session;
pub use socket::{Received, SocketHandle};
pub use traits::{Clock, SystemClock, Transport};
