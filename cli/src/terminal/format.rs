use bookinn_core::models::{Reservation, Room};
use colored::*;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn availability(room: &Room) -> ColoredString {
    if room.is_available {
        "available".color(colors::AVAILABLE)
    } else {
        "reserved".color(colors::TAKEN)
    }
}

pub fn price(value: f64) -> ColoredString {
    format!("{value:.2}").color(colors::PRICE)
}

pub fn room_to_details(room: &Room) -> Vec<Detail> {
    vec![
        (String::from("Type"), room.room_type.normal()),
        (String::from("Price"), price(room.price)),
        (String::from("Status"), availability(room)),
    ]
}

pub fn reservation_to_details(reservation: &Reservation) -> Vec<Detail> {
    vec![
        (String::from("Hotel"), reservation.hotel_name.normal()),
        (String::from("Room"), reservation.room_number.to_string().normal()),
        (String::from("Guest"), reservation.customer_id.normal()),
        (
            String::from("Dates"),
            format!("{} → {} ({} nights)", reservation.start_date, reservation.end_date, reservation.nights()).normal(),
        ),
    ]
}
