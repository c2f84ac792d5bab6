//! # Reservation Model
//!
//! * [`room::Room`]: A value object owned by its hotel, carrying the availability flag.
//! * [`customer::Customer`]: Persisted under its customer id.
//! * [`reservation::Reservation`]: Links a customer to a room of a named hotel for a date range.
//! * [`hotel::Hotel`]: Owns its rooms and books/cancels reservations against them.
//!
//! Mutating operations write straight through the [`crate::store::RecordStore`]
//! handed to them. Nothing is cached between calls.

pub mod customer;
pub mod hotel;
pub mod reservation;
pub mod room;

pub use customer::Customer;
pub use hotel::Hotel;
pub use reservation::Reservation;
pub use room::Room;
