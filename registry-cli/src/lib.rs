use serde::Serialize;
use vehikular_registry::{Person, Register, Vehicle};

pub mod demo;
pub mod script;

/// What gets printed once a script has run.
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub vehicles: Vec<Vehicle>,
    pub owners: Vec<&'a Person>,
}

impl<'a> Listing<'a> {
    #[must_use]
    pub fn of(register: &'a Register) -> Self {
        Listing {
            vehicles: register.list_vehicles(),
            owners: register.list_owners(),
        }
    }
}
