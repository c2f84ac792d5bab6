use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult, RecordKind};
use crate::store::{RecordKey, RecordStore, RecordStoreExt};

/// A booking of one room of a hotel.
///
/// The dates are stored as given: an `end_date` before `start_date` is not
/// rejected, and overlapping reservations are not detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub customer_id: String,
    pub hotel_name: String,
    pub room_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Reservation {
    pub fn new(
        reservation_id: impl Into<String>,
        customer_id: impl Into<String>,
        hotel_name: impl Into<String>,
        room_number: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            reservation_id: reservation_id.into(),
            customer_id: customer_id.into(),
            hotel_name: hotel_name.into(),
            room_number,
            start_date,
            end_date,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::Reservation(self.reservation_id.clone())
    }

    /// Persists `reservation` and hands it back.
    pub fn create<S: RecordStore + ?Sized>(store: &S, reservation: Self) -> ModelResult<Self> {
        reservation.save(store)?;
        Ok(reservation)
    }

    pub fn save<S: RecordStore + ?Sized>(&self, store: &S) -> ModelResult<()> {
        store.save(&self.key(), self)?;
        Ok(())
    }

    pub fn load<S: RecordStore + ?Sized>(store: &S, reservation_id: &str) -> ModelResult<Self> {
        let key = RecordKey::Reservation(reservation_id.to_string());
        store.load(&key)?.ok_or_else(|| ModelError::NotFound {
            kind: RecordKind::Reservation,
            id: reservation_id.to_string(),
        })
    }

    /// Removes the reservation record. Room availability is the hotel's
    /// business, see [`crate::models::Hotel::cancel_reservation`].
    pub fn cancel<S: RecordStore + ?Sized>(store: &S, reservation_id: &str) -> ModelResult<()> {
        let key = RecordKey::Reservation(reservation_id.to_string());
        if store.delete(&key)? {
            Ok(())
        } else {
            Err(ModelError::NotFound {
                kind: RecordKind::Reservation,
                id: reservation_id.to_string(),
            })
        }
    }

    /// Number of nights between the two dates, negative when they are reversed.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
