use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ModelError, ModelResult, RecordKind};
use crate::models::reservation::Reservation;
use crate::models::room::Room;
use crate::store::{RecordKey, RecordStore, RecordStoreExt};

/// A hotel and its rooms, persisted as one record keyed by the hotel name.
///
/// Booking touches two records: the reservation and the hotel (for the room
/// flag). They are written one after the other. If the second write fails the
/// first one is undone on a best-effort basis, but a crash in between can
/// still leave them disagreeing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub rooms: Vec<Room>,
}

impl Hotel {
    /// A hotel with no rooms. Nothing is persisted.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rooms: Vec::new(),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::Hotel(self.name.clone())
    }

    pub fn create<S: RecordStore + ?Sized>(store: &S, name: &str, location: &str) -> ModelResult<Self> {
        let hotel = Self::new(name, location);
        hotel.save(store)?;
        Ok(hotel)
    }

    pub fn load<S: RecordStore + ?Sized>(store: &S, name: &str) -> ModelResult<Self> {
        let key = RecordKey::Hotel(name.to_string());
        store.load(&key)?.ok_or_else(|| ModelError::NotFound {
            kind: RecordKind::Hotel,
            id: name.to_string(),
        })
    }

    pub fn save<S: RecordStore + ?Sized>(&self, store: &S) -> ModelResult<()> {
        store.save(&self.key(), self)?;
        Ok(())
    }

    pub fn delete<S: RecordStore + ?Sized>(store: &S, name: &str) -> ModelResult<()> {
        if store.delete(&RecordKey::Hotel(name.to_string()))? {
            Ok(())
        } else {
            Err(ModelError::NotFound {
                kind: RecordKind::Hotel,
                id: name.to_string(),
            })
        }
    }

    pub fn room(&self, room_number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_number == room_number)
    }

    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.is_available)
    }

    /// Appends `room` and rewrites the hotel record.
    pub fn add_room<S: RecordStore + ?Sized>(&mut self, store: &S, room: Room) -> ModelResult<()> {
        if self.room(room.room_number).is_some() {
            return Err(ModelError::DuplicateRoom(room.room_number));
        }
        self.rooms.push(room);
        if let Err(e) = self.save(store) {
            self.rooms.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Partial update of the name and location. `None` or an empty string
    /// keeps the current value.
    ///
    /// A new name moves the record: it is written under the new name and the
    /// one under the old name is removed. Renaming onto the name of another
    /// stored hotel is refused. If the write fails the hotel keeps its old
    /// name and location.
    pub fn modify_information<S: RecordStore + ?Sized>(
        &mut self,
        store: &S,
        new_name: Option<&str>,
        new_location: Option<&str>,
    ) -> ModelResult<()> {
        let old_key: RecordKey = self.key();

        if let Some(name) = new_name.filter(|n| !n.is_empty() && *n != self.name) {
            if store.contains(&RecordKey::Hotel(name.to_string()))? {
                return Err(ModelError::DuplicateHotel(name.to_string()));
            }
        }

        let old_name: String = self.name.clone();
        let old_location: String = self.location.clone();
        if let Some(name) = new_name.filter(|n| !n.is_empty()) {
            self.name = name.to_string();
        }
        if let Some(location) = new_location.filter(|l| !l.is_empty()) {
            self.location = location.to_string();
        }

        if let Err(e) = self.save(store) {
            self.name = old_name;
            self.location = old_location;
            return Err(e);
        }
        if self.key() != old_key {
            store.delete(&old_key)?;
            debug!("hotel record moved from {:?} to {:?}", old_key.id(), self.name);
        }
        Ok(())
    }

    /// Books room `room_number` if it exists and is available.
    ///
    /// On success the room is flagged unavailable, the reservation record is
    /// written and the hotel record rewritten. A `reservation_id` that is
    /// already stored is refused. On failure the rooms are left as they were.
    pub fn reserve_room<S: RecordStore + ?Sized>(
        &mut self,
        store: &S,
        reservation_id: &str,
        customer_id: &str,
        room_number: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ModelResult<Reservation> {
        let Some(idx) = self
            .rooms
            .iter()
            .position(|room| room.room_number == room_number && room.is_available)
        else {
            return Err(match self.room(room_number) {
                Some(_) => ModelError::RoomUnavailable(room_number),
                None => ModelError::RoomNotFound(room_number),
            });
        };

        if store.contains(&RecordKey::Reservation(reservation_id.to_string()))? {
            return Err(ModelError::DuplicateReservation(reservation_id.to_string()));
        }

        self.rooms[idx].make_reservation();
        let reservation = Reservation::new(
            reservation_id,
            customer_id,
            self.name.as_str(),
            room_number,
            start_date,
            end_date,
        );

        if let Err(e) = reservation.save(store) {
            self.rooms[idx].cancel_reservation();
            return Err(e);
        }

        if let Err(e) = self.save(store) {
            self.rooms[idx].cancel_reservation();
            if let Err(undo) = Reservation::cancel(store, reservation_id) {
                warn!("could not remove reservation {reservation_id:?} after failed hotel write: {undo}");
            }
            return Err(e);
        }

        debug!("room {room_number} of {:?} reserved as {reservation_id:?}", self.name);
        Ok(reservation)
    }

    /// Cancels reservation `reservation_id`, freeing the room it holds.
    ///
    /// Fails without touching the rooms if the reservation record is missing
    /// or names a room this hotel does not have.
    pub fn cancel_reservation<S: RecordStore + ?Sized>(
        &mut self,
        store: &S,
        reservation_id: &str,
    ) -> ModelResult<Reservation> {
        let reservation: Reservation = match Reservation::load(store, reservation_id) {
            Ok(reservation) => reservation,
            Err(ModelError::NotFound { .. }) => {
                return Err(ModelError::ReservationNotFound(reservation_id.to_string()));
            }
            Err(e) => return Err(e),
        };

        let room_number: u32 = reservation.room_number;
        let Some(idx) = self.rooms.iter().position(|room| room.room_number == room_number) else {
            return Err(ModelError::RoomNotFound(room_number));
        };

        let was_available: bool = self.rooms[idx].is_available;
        self.rooms[idx].cancel_reservation();

        if let Err(e) = Reservation::cancel(store, reservation_id) {
            self.rooms[idx].is_available = was_available;
            return Err(e);
        }

        if let Err(e) = self.save(store) {
            self.rooms[idx].is_available = was_available;
            if let Err(undo) = reservation.save(store) {
                warn!("could not restore reservation {reservation_id:?} after failed hotel write: {undo}");
            }
            return Err(e);
        }

        debug!("reservation {reservation_id:?} cancelled, room {room_number} is free");
        Ok(reservation)
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hotel Name: {}, Location: {}", self.name, self.location)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
