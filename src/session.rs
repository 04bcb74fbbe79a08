use crate::command::general::{responses::IMEI, responses::IMSI, GetIMEI, GetIMSI};
use crate::command::ip_transport_layer::types::SocketHandle;
use crate::command::mobile_control::{
    types::{Functionality, TerminationErrorMode},
    Reboot, SetModuleFunctionality, SetReportMobileTerminationError,
};
use crate::command::network_service::{
    responses::SignalQuality, types::OperatorSelectionMode, GetSignalQuality,
    SetOperatorSelection,
};
use crate::command::psn::{
    responses::GPRSAttached, types::GPRSAttachedState, types::PDPType,
    GetEPSNetworkRegistrationStatus, GetGPRSAttached, SetPDPContextDefinition,
};
use crate::command::system_features::{
    types::PowerSaveMode, SetPowerSavingMode, SetPowerSavingModeReport,
};
use crate::command::AT;
use crate::config::Config;
use crate::engine::Engine;
use crate::error::Error;
use crate::identity::Identity;
use crate::registration::RegistrationStatus;
use crate::traits::{Clock, SystemClock, Transport};

/// Driver session for one SARA-N2 module.
///
/// Owns the transport for its whole lifetime. Every operation is a single
/// attempt: nothing is retried and the module is never polled in the
/// background, so [`Session::registration_status`] must be called to refresh
/// the registration state.
pub struct Session<T, C = SystemClock> {
    pub(crate) engine: Engine<T, C>,
    pub(crate) config: Config,
    pub(crate) status: RegistrationStatus,
    pub(crate) socket: Option<SocketHandle>,
    pub(crate) power_save: PowerSaveMode,
}

impl<T> Session<T, SystemClock>
where
    T: Transport,
{
    pub fn new(transport: T, config: Config) -> Self {
        Self::with_clock(transport, SystemClock, config)
    }
}

impl<T, C> Session<T, C>
where
    T: Transport,
    C: Clock,
{
    pub fn with_clock(transport: T, clock: C, config: Config) -> Self {
        Self {
            engine: Engine::new(transport, clock),
            config,
            status: RegistrationStatus::Unknown,
            socket: None,
            power_save: PowerSaveMode::AlwaysOn,
        }
    }

    /// Bring the AT interface into a known state.
    ///
    /// Enables numeric `+CME ERROR` codes and, if an APN is configured,
    /// defines the default PDP context with the radio switched off.
    pub fn begin(&mut self) -> Result<(), Error> {
        self.engine.drain()?;
        self.engine.send(&AT)?;
        self.engine.send(&SetReportMobileTerminationError {
            n: TerminationErrorMode::Enabled,
        })?;

        if !self.config.apn.is_empty() {
            self.engine.send(&SetModuleFunctionality {
                fun: Functionality::Minimum,
            })?;
            self.engine.send(&SetPDPContextDefinition {
                cid: 0,
                pdp_type: PDPType::IP,
                apn: &self.config.apn,
            })?;
            self.engine.send(&SetModuleFunctionality {
                fun: Functionality::Full,
            })?;
            debug!("APN set to {}", self.config.apn.as_str());
        }

        info!("Module initialized");
        Ok(())
    }

    /// Switch the radio on and start network registration.
    pub fn online(&mut self) -> Result<(), Error> {
        self.engine.send(&SetModuleFunctionality {
            fun: Functionality::Full,
        })?;

        if let Some((mcc, mnc)) = self.config.operator() {
            self.engine.send(&SetOperatorSelection {
                mode: OperatorSelectionMode::Manual { mcc, mnc },
            })?;
        }
        self.engine.send(&SetOperatorSelection {
            mode: OperatorSelectionMode::Automatic,
        })?;

        self.set_status(RegistrationStatus::Registering);
        Ok(())
    }

    /// Switch the radio off.
    pub fn offline(&mut self) -> Result<(), Error> {
        self.engine.send(&SetModuleFunctionality {
            fun: Functionality::Minimum,
        })?;
        self.set_status(RegistrationStatus::NotRegistered);
        Ok(())
    }

    /// Query `+CEREG` and store the result as the last observed status.
    pub fn registration_status(&mut self) -> Result<RegistrationStatus, Error> {
        let res = self.engine.send(&GetEPSNetworkRegistrationStatus)?;
        let status = res.status();
        self.set_status(status);
        Ok(status)
    }

    /// Last observed registration status.
    pub fn status(&self) -> RegistrationStatus {
        self.status
    }

    pub fn is_registered(&self) -> bool {
        self.status.is_registered()
    }

    pub fn is_registering(&self) -> bool {
        self.status.is_registering()
    }

    /// Whether the module is attached to the packet domain.
    pub fn is_connected(&mut self) -> Result<bool, Error> {
        let GPRSAttached { state } = self.engine.send(&GetGPRSAttached)?;
        Ok(state == GPRSAttachedState::Attached)
    }

    pub fn imei(&mut self) -> Result<Identity, Error> {
        let IMEI { imei } = self.engine.send(&GetIMEI::default())?;
        Ok(imei)
    }

    pub fn imsi(&mut self) -> Result<Identity, Error> {
        let IMSI { imsi } = self.engine.send(&GetIMSI)?;
        Ok(imsi)
    }

    pub fn signal_quality(&mut self) -> Result<SignalQuality, Error> {
        self.engine.send(&GetSignalQuality)
    }

    /// Raw `<rssi>` of `+CSQ`, 99 when unknown.
    pub fn rssi(&mut self) -> Result<u8, Error> {
        Ok(self.signal_quality()?.rssi)
    }

    /// Restart the module. Sockets do not survive the reboot and registration
    /// starts over.
    pub fn reboot(&mut self) -> Result<(), Error> {
        self.engine.send(&Reboot)?;
        self.socket = None;
        self.set_status(RegistrationStatus::Unknown);
        info!("Module rebooted");
        Ok(())
    }

    /// Configure PSM for `mode`. The stored mode only changes once both
    /// configuration commands succeeded.
    pub fn power_save_mode(&mut self, mode: PowerSaveMode) -> Result<(), Error> {
        let psm = mode.psm();
        self.engine.send(&SetPowerSavingMode { mode: psm })?;
        self.engine
            .send(&SetPowerSavingModeReport { n: psm.into() })?;
        self.power_save = mode;
        debug!("Power save mode: {:?}", mode);
        Ok(())
    }

    pub fn power_save(&self) -> PowerSaveMode {
        self.power_save
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hand back the transport and the clock.
    pub fn release(self) -> (T, C) {
        self.engine.release()
    }

    fn set_status(&mut self, status: RegistrationStatus) {
        if self.status != status {
            debug!("Registration status {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }
}
