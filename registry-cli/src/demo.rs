use vehikular_registry::{Person, Vehicle};

use crate::script::Operation;

/// Two owners trading three vehicles until the register is empty again.
#[must_use]
pub fn scenario() -> Vec<Operation> {
    let john = Person::new("John", "Doe", 20);
    let alice = Person::new("Alice", "Doe", 22);

    let insert = |plate: &str, date: &str, owner: &Person| Operation::Insert {
        vehicle: Vehicle::new(plate, date, owner.clone()),
    };
    let transfer = |plate: &str, owner: &Person| Operation::Transfer {
        registration_plate: plate.into(),
        new_owner: owner.clone(),
    };
    let delete = |plate: &str| Operation::Delete {
        registration_plate: plate.into(),
    };

    vec![
        insert("abc0", "20221122", &john),
        insert("abc1", "20221123", &john),
        insert("abc0", "20221122", &john),
        insert("xyz", "20221124", &alice),
        transfer("abc1", &john),
        transfer("not in register", &john),
        transfer("abc1", &alice),
        transfer("abc0", &alice),
        delete("not in register"),
        delete("abc0"),
        delete("abc1"),
        delete("xyz"),
        insert("abc0", "20221122", &john),
        insert("abc1", "20221123", &john),
        insert("xyz", "20221124", &alice),
    ]
}
