use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Someone who can own vehicles.
///
/// Two people are the same person when their name, surname and age match.
/// The vehicle count is bookkeeping kept by the [`Register`](crate::Register)
/// and plays no part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub surname: String,
    pub age: u32,
    #[serde(default, skip_deserializing)]
    vehicle_count: u32,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age,
            vehicle_count: 0,
        }
    }

    #[must_use]
    pub fn vehicle_count(&self) -> u32 {
        self.vehicle_count
    }

    pub fn increment_vehicle_count(&mut self) {
        self.vehicle_count += 1;
    }

    /// Never goes below zero.
    pub fn decrement_vehicle_count(&mut self) {
        if self.vehicle_count > 0 {
            self.vehicle_count -= 1;
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.surname == other.surname && self.age == other.age
    }
}

impl Eq for Person {}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.surname, self.age)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub registration_plate: String,
    // Kept as given, e.g. "20221122"
    pub creation_date: String,
    pub owner: Person,
}

impl Vehicle {
    #[must_use]
    pub fn new(
        registration_plate: impl Into<String>,
        creation_date: impl Into<String>,
        owner: Person,
    ) -> Self {
        Self {
            registration_plate: registration_plate.into(),
            creation_date: creation_date.into(),
            owner,
        }
    }
}

/// Vehicles are identified by their plate alone.
impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.registration_plate == other.registration_plate
    }
}

impl Eq for Vehicle {}

impl Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) owned by {}",
            self.registration_plate,
            self.creation_date,
            self.owner.full_name()
        )
    }
}
