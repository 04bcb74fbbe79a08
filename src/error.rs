use heapless::String;

/// Maximum length of a verbose `+CME ERROR: <text>` that is kept.
pub const MAX_ERROR_TEXT: usize = 48;

/// Error code carried by an `ERROR` / `+CME ERROR:` final result code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    /// `+CME ERROR: <n>` with `AT+CMEE=1`
    Numeric(u16),
    /// `+CME ERROR: <text>` with `AT+CMEE=2`
    Verbose(String<MAX_ERROR_TEXT>),
}

/// The module acknowledged the command, but the reply was not understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// `OK` was received, but the information text line was absent.
    MissingPayload,
    /// The information text had fewer or more fields than expected.
    FieldCount,
    /// A field could not be parsed into its expected type.
    InvalidField,
}

/// Caller misuse, detected before anything is written to the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Precondition {
    NoSocket,
    SocketAlreadyOpen,
    PayloadTooLarge,
    CommandTooLong,
    ApnTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// No final result code arrived before the deadline. The module may
    /// still be busy with the command.
    Timeout,
    /// Explicit `ERROR` or `+CME ERROR` reply.
    Module(Option<ErrorCode>),
    Protocol(ProtocolError),
    Precondition(Precondition),
    /// The module accepted fewer bytes than requested.
    PartialSend { requested: usize, sent: usize },
    Transport(embedded_io::ErrorKind),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::Timeout => defmt::write!(f, "Timeout"),
            Self::Module(code) => defmt::write!(f, "Module({:?})", code),
            Self::Protocol(e) => defmt::write!(f, "Protocol({:?})", e),
            Self::Precondition(e) => defmt::write!(f, "Precondition({:?})", e),
            Self::PartialSend { requested, sent } => {
                defmt::write!(f, "PartialSend({=usize}/{=usize})", sent, requested)
            }
            Self::Transport(kind) => defmt::write!(f, "Transport({:?})", kind),
        }
    }
}

impl From<ProtocolError> for Error {
    fn from(e: ProtocolError) -> Self {
        Self::Protocol(e)
    }
}

impl From<Precondition> for Error {
    fn from(e: Precondition) -> Self {
        Self::Precondition(e)
    }
}

impl Error {
    pub(crate) fn transport<E: embedded_io::Error>(e: E) -> Self {
        Self::Transport(e.kind())
    }
}
