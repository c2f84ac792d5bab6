//! # BookInn Core
//!
//! The reservation model of `bookinn`: customers, hotels, rooms and
//! reservations, each persisted as one JSON record.
//!
//! ## Layout
//! * **[`models`]**: The entities. Every mutating operation takes the
//!   [`store::RecordStore`] it writes through.
//! * **[`store`]**: The record store port and its adapters
//!   ([`store::JsonFileStore`], [`store::InMemoryStore`]).
//! * **[`error`]**: Error types for the store and the model.

pub mod error;
pub mod models;
pub mod store;

pub use error::{ModelError, RecordKind, StoreError};
