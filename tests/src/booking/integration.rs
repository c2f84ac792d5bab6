use bookinn_core::models::{Customer, Hotel, Reservation, Room};
use bookinn_core::store::{JsonFileStore, RecordKey, RecordStore};
use bookinn_core::{ModelError, RecordKind};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn store() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path()).unwrap();
    (dir, store)
}

fn read_json(dir: &TempDir, file_name: &str) -> Value {
    let bytes = std::fs::read(dir.path().join(file_name)).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// The reference scenario: book room 101 of the test hotel, then cancel.
#[test]
fn reserve_and_cancel_on_disk() {
    let (dir, store) = store();
    let mut hotel = Hotel::create(&store, "Test Hotel", "Test Location").unwrap();
    hotel.add_room(&store, Room::new(101, "single", 100.00)).unwrap();

    hotel
        .reserve_room(&store, "r1", "c1", 101, date("2023-01-01"), date("2023-01-05"))
        .unwrap();

    assert!(!hotel.room(101).unwrap().is_available);
    assert_eq!(
        read_json(&dir, "reservation_r1.json"),
        json!({
            "reservation_id": "r1",
            "customer_id": "c1",
            "hotel_name": "Test Hotel",
            "room_number": 101,
            "start_date": "2023-01-01",
            "end_date": "2023-01-05"
        })
    );
    assert_eq!(
        read_json(&dir, "Test Hotel_data.json")["rooms"][0]["is_available"],
        json!(false)
    );

    hotel.cancel_reservation(&store, "r1").unwrap();

    assert!(hotel.room(101).unwrap().is_available);
    assert!(!dir.path().join("reservation_r1.json").exists());
    assert_eq!(
        read_json(&dir, "Test Hotel_data.json")["rooms"][0]["is_available"],
        json!(true)
    );
}

#[test]
fn availability_survives_a_reload() {
    let (_dir, store) = store();
    let mut hotel = Hotel::create(&store, "Hotel for Reservation", "Reservation Location").unwrap();
    hotel.add_room(&store, Room::new(101, "double", 150.0)).unwrap();
    hotel.add_room(&store, Room::new(102, "double", 150.0)).unwrap();
    hotel
        .reserve_room(&store, "res101", "cust101", 101, date("2023-01-01"), date("2023-01-05"))
        .unwrap();

    let mut reloaded = Hotel::load(&store, "Hotel for Reservation").unwrap();
    assert_eq!(reloaded, hotel);
    assert_eq!(reloaded.available_rooms().count(), 1);

    // A second process sees the room as taken.
    let again = reloaded.reserve_room(&store, "res102", "cust102", 101, date("2023-01-02"), date("2023-01-03"));
    assert!(matches!(again, Err(ModelError::RoomUnavailable(101))));

    reloaded.cancel_reservation(&store, "res101").unwrap();
    assert_eq!(Hotel::load(&store, "Hotel for Reservation").unwrap().available_rooms().count(), 2);
}

#[test]
fn customer_lifecycle_on_disk() {
    let (dir, store) = store();

    let created = Customer::create(&store, "cust1003", "Bob Smith", "bob@example.com").unwrap();
    assert!(dir.path().join("customer_cust1003.json").exists());
    assert_eq!(Customer::load(&store, "cust1003").unwrap(), created);

    let mut customer = created.clone();
    customer.update_details(&store, None, Some("robert@example.com")).unwrap();
    assert_eq!(
        read_json(&dir, "customer_cust1003.json"),
        json!({ "customer_id": "cust1003", "name": "Bob Smith", "email": "robert@example.com" })
    );

    Customer::delete(&store, "cust1003").unwrap();
    assert!(matches!(
        Customer::load(&store, "cust1003"),
        Err(ModelError::NotFound { kind: RecordKind::Customer, .. })
    ));
}

#[test]
fn renaming_a_hotel_moves_its_file() {
    let (dir, store) = store();
    let mut hotel = Hotel::create(&store, "Old Inn", "Somewhere").unwrap();

    hotel.modify_information(&store, Some("New Inn"), None).unwrap();

    assert!(!dir.path().join("Old Inn_data.json").exists());
    assert_eq!(read_json(&dir, "New Inn_data.json")["location"], json!("Somewhere"));
}

#[test]
fn cancelling_twice_fails_the_second_time() {
    let (_dir, store) = store();
    let mut hotel = Hotel::create(&store, "Twice", "Here").unwrap();
    hotel.add_room(&store, Room::new(1, "single", 50.0)).unwrap();
    hotel
        .reserve_room(&store, "r1", "c1", 1, date("2024-02-08"), date("2024-02-09"))
        .unwrap();

    hotel.cancel_reservation(&store, "r1").unwrap();
    let rooms = hotel.rooms.clone();

    assert!(matches!(
        hotel.cancel_reservation(&store, "r1"),
        Err(ModelError::ReservationNotFound(_))
    ));
    assert_eq!(hotel.rooms, rooms);
}

#[test]
fn hand_written_records_load() {
    let (_dir, store) = store();
    store
        .put(
            &RecordKey::Hotel("Legacy".into()),
            &json!({
                "name": "Legacy",
                "location": "Old Town",
                "rooms": [{ "room_number": 5, "room_type": "suite", "price": 300 }]
            }),
        )
        .unwrap();
    store
        .put(
            &RecordKey::Reservation("old".into()),
            &json!({
                "reservation_id": "old",
                "customer_id": "c",
                "hotel_name": "Legacy",
                "room_number": 5,
                "start_date": "2023-05-01",
                "end_date": "2023-05-03"
            }),
        )
        .unwrap();

    let mut hotel = Hotel::load(&store, "Legacy").unwrap();
    assert!(hotel.room(5).unwrap().is_available);
    assert_eq!(Reservation::load(&store, "old").unwrap().nights(), 2);

    hotel.cancel_reservation(&store, "old").unwrap();
    assert!(!store.contains(&RecordKey::Reservation("old".into())).unwrap());
}
