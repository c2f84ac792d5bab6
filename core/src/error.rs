use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which entity a record holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    Customer,
    Hotel,
    Reservation,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Customer => "customer",
            RecordKind::Hotel => "hotel",
            RecordKind::Reservation => "reservation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid {kind} identifier: {id:?}")]
    InvalidKey { kind: RecordKind, id: String },
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("No {kind} record for {id:?}")]
    NotFound { kind: RecordKind, id: String },

    #[error("Room {0} is not available")]
    RoomUnavailable(u32),

    #[error("Room {0} does not exist in this hotel")]
    RoomNotFound(u32),

    #[error("Reservation {0:?} does not exist")]
    ReservationNotFound(String),

    #[error("Room {0} already exists in this hotel")]
    DuplicateRoom(u32),

    #[error("Reservation {0:?} already exists")]
    DuplicateReservation(String),

    #[error("A hotel named {0:?} already exists")]
    DuplicateHotel(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ModelError {
    /// Whether the caller can report this and carry on.
    ///
    /// Everything except a failing store is a plain "could not do that"
    /// outcome that leaves the records untouched.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ModelError::Store(_))
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
