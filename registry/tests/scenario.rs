//! Walks a register through inserting, transferring, deleting and
//! re-inserting the same handful of vehicles.

use pretty_assertions::assert_eq;
use vehikular_registry::{Person, Register, StatusCode, Vehicle};

fn john() -> Person {
    Person::new("John", "Doe", 20)
}

fn alice() -> Person {
    Person::new("Alice", "Doe", 22)
}

fn cars() -> [Vehicle; 4] {
    [
        Vehicle::new("abc0", "20221122", john()),
        Vehicle::new("abc1", "20221123", john()),
        Vehicle::new("abc0", "20221122", john()),
        Vehicle::new("xyz", "20221124", alice()),
    ]
}

fn owners_of(register: &Register) -> Vec<(String, String)> {
    register
        .list_vehicles()
        .into_iter()
        .map(|vehicle| (vehicle.registration_plate, vehicle.owner.name))
        .collect()
}

fn counts(register: &Register) -> Vec<u32> {
    register
        .list_owners()
        .into_iter()
        .map(Person::vehicle_count)
        .collect()
}

fn populated() -> Register {
    let mut register = Register::new();
    let statuses: Vec<u8> = cars()
        .into_iter()
        .map(|car| register.insert_vehicle(car).status_code())
        .collect();
    assert_eq!(statuses, vec![1, 1, 0, 1]);
    register
}

#[test]
fn insertion() {
    let register = populated();

    assert_eq!(
        register.list_vehicles(),
        vec![
            Vehicle::new("abc0", "20221122", john()),
            Vehicle::new("abc1", "20221123", john()),
            Vehicle::new("xyz", "20221124", alice()),
        ]
    );
    assert_eq!(register.list_owners(), vec![&john(), &alice()]);
    assert_eq!(counts(&register), vec![2, 1]);
}

#[test]
fn transfers_and_deletion() {
    let mut register = populated();

    assert_eq!(register.update_vehicle_owner("abc1", &john()).status_code(), 0);
    assert_eq!(
        register
            .update_vehicle_owner("not in register", &john())
            .status_code(),
        0
    );

    assert_eq!(register.update_vehicle_owner("abc1", &alice()).status_code(), 1);
    assert_eq!(
        owners_of(&register),
        vec![
            ("abc0".into(), "John".into()),
            ("abc1".into(), "Alice".into()),
            ("xyz".into(), "Alice".into()),
        ]
    );
    assert_eq!(register.list_owners(), vec![&john(), &alice()]);
    assert_eq!(counts(&register), vec![1, 2]);

    assert_eq!(register.update_vehicle_owner("abc0", &alice()).status_code(), 1);
    assert_eq!(
        owners_of(&register),
        vec![
            ("abc0".into(), "Alice".into()),
            ("abc1".into(), "Alice".into()),
            ("xyz".into(), "Alice".into()),
        ]
    );
    assert_eq!(register.list_owners(), vec![&alice()]);
    assert_eq!(counts(&register), vec![3]);

    assert_eq!(register.delete_vehicle("not in register").status_code(), 0);
    for plate in ["abc0", "abc1", "xyz"] {
        assert_eq!(register.delete_vehicle(plate).status_code(), 1);
    }
    assert!(register.list_vehicles().is_empty());
    assert!(register.list_owners().is_empty());
    assert!(register.is_empty());
}

#[test]
fn listing_after_a_full_clear() {
    let mut register = populated();
    for plate in ["abc0", "abc1", "xyz"] {
        register.delete_vehicle(plate).unwrap();
    }

    for car in cars() {
        let _ = register.insert_vehicle(car);
    }

    assert_eq!(
        register.list_vehicles(),
        vec![
            Vehicle::new("abc0", "20221122", john()),
            Vehicle::new("abc1", "20221123", john()),
            Vehicle::new("xyz", "20221124", alice()),
        ]
    );
    assert_eq!(register.list_owners(), vec![&john(), &alice()]);
    assert_eq!(
        register.list_vehicle_by_owner(&john()),
        vec![
            Vehicle::new("abc0", "20221122", john()),
            Vehicle::new("abc1", "20221123", john()),
        ]
    );
    assert_eq!(counts(&register), vec![2, 1]);
}

#[test]
fn owner_listing_is_a_subset_of_all_vehicles() {
    let register = populated();

    for owner in register.list_owners() {
        let expected: Vec<Vehicle> = register
            .list_vehicles()
            .into_iter()
            .filter(|vehicle| vehicle.owner == *owner)
            .collect();
        assert_eq!(register.list_vehicle_by_owner(owner), expected);
        assert_eq!(expected.len(), owner.vehicle_count() as usize);
    }
}
