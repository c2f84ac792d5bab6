use bookinn_common::config::Config;
use bookinn_common::success;
use bookinn_core::models::{Hotel, Room};
use bookinn_core::store::JsonFileStore;

use crate::commands::{HotelAction, recover};
use crate::terminal::{format, print};

pub fn hotel(action: HotelAction, cfg: &Config) -> anyhow::Result<()> {
    let store = JsonFileStore::open(&cfg.data_dir)?;

    match action {
        HotelAction::Create { name, location } => {
            if let Some(hotel) = recover(Hotel::create(&store, &name, &location))? {
                success!("Created {hotel}");
            }
        }
        HotelAction::Show { hotel } => {
            if let Some(hotel) = recover(Hotel::load(&store, &hotel))? {
                show(&hotel, cfg);
            }
        }
        HotelAction::Modify { hotel, name, location } => {
            let Some(mut hotel) = recover(Hotel::load(&store, &hotel))? else {
                return Ok(());
            };
            if recover(hotel.modify_information(&store, name.as_deref(), location.as_deref()))?.is_some() {
                success!("Updated {hotel}");
            }
        }
        HotelAction::Delete { hotel } => {
            if recover(Hotel::delete(&store, &hotel))?.is_some() {
                success!("Deleted hotel {hotel}");
            }
        }
        HotelAction::AddRoom { hotel, number, room_type, price } => {
            let Some(mut hotel) = recover(Hotel::load(&store, &hotel))? else {
                return Ok(());
            };
            if recover(hotel.add_room(&store, Room::new(number, room_type, price)))?.is_some() {
                success!("Room {number} added to {}", hotel.name);
            }
        }
        HotelAction::Reserve { hotel, reservation_id, customer_id, room, start, end } => {
            let Some(mut hotel) = recover(Hotel::load(&store, &hotel))? else {
                return Ok(());
            };
            let booked = hotel.reserve_room(&store, &reservation_id, &customer_id, room, start, end);
            if let Some(reservation) = recover(booked)? {
                success!("Reservation {} confirmed", reservation.reservation_id);
                print::as_tree_one_level(format::reservation_to_details(&reservation));
            }
        }
        HotelAction::Cancel { hotel, reservation_id } => {
            let Some(mut hotel) = recover(Hotel::load(&store, &hotel))? else {
                return Ok(());
            };
            if let Some(reservation) = recover(hotel.cancel_reservation(&store, &reservation_id))? {
                success!(
                    "Reservation {} cancelled, room {} is available again",
                    reservation.reservation_id,
                    reservation.room_number
                );
            }
        }
    }
    Ok(())
}

fn show(hotel: &Hotel, cfg: &Config) {
    print::header(&hotel.name, cfg.quiet);
    print::print_status(hotel.to_string());

    if hotel.rooms.is_empty() {
        print::no_results("rooms");
        return;
    }

    for (idx, room) in hotel.rooms.iter().enumerate() {
        print::tree_head(idx, &format!("Room {}", room.room_number));
        print::as_tree_one_level(format::room_to_details(room));
        if idx + 1 != hotel.rooms.len() {
            crate::bprint!();
        }
    }

    let available: usize = hotel.available_rooms().count();
    print::fat_separator();
    print::centerln(&format!("{available} of {} rooms available", hotel.rooms.len()));
}
