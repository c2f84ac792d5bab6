use serde::{Deserialize, Serialize};

/// A room of a hotel. Serialized as part of the hotel record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_number: u32,
    pub room_type: String,
    /// Price per night.
    pub price: f64,
    #[serde(default = "available_by_default")]
    pub is_available: bool,
}

fn available_by_default() -> bool {
    true
}

impl Room {
    /// A new room, available for booking.
    pub fn new(room_number: u32, room_type: impl Into<String>, price: f64) -> Self {
        Self {
            room_number,
            room_type: room_type.into(),
            price,
            is_available: true,
        }
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn make_reservation(&mut self) {
        self.is_available = false;
    }

    pub fn cancel_reservation(&mut self) {
        self.is_available = true;
    }

    pub fn update_price(&mut self, new_price: f64) {
        self.price = new_price;
    }
}
