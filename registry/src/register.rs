use indexmap::IndexMap;
use log::debug;

use crate::{
    data::{Person, Vehicle},
    error::{RegisterError, Result},
};

/// Key of an owner record. Only meaningful to the register that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct OwnerId(u64);

#[derive(Debug, Clone)]
struct Registration {
    creation_date: String,
    owner: OwnerId,
}

/// Keeps track of which vehicles exist and who owns them.
///
/// Vehicles are kept in the order they were inserted and owners in the order
/// they first showed up. An owner is dropped as soon as they no longer own
/// anything, so [`Register::list_owners`] only ever lists people with at least
/// one vehicle.
///
/// The register keeps its own copy of every owner. The [`Person`] handed in by
/// the caller is only used to identify them, its vehicle count is left alone.
/// Use [`Register::owner`] to read the live count.
#[derive(Debug, Default)]
pub struct Register {
    vehicles: IndexMap<String, Registration>,
    owners: IndexMap<OwnerId, Person>,
    next_owner_id: u64,
}

impl Register {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`RegisterError::DuplicatePlate`] if the plate is already
    /// registered, in which case nothing changes.
    pub fn insert_vehicle(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.find_vehicle_by_plate(&vehicle.registration_plate).is_some() {
            return Err(RegisterError::DuplicatePlate(vehicle.registration_plate));
        }

        let owner = self.attach(&vehicle.owner);
        debug!(
            "Registered {} to {}",
            vehicle.registration_plate, vehicle.owner
        );
        self.vehicles.insert(
            vehicle.registration_plate,
            Registration {
                creation_date: vehicle.creation_date,
                owner,
            },
        );

        Ok(())
    }

    /// Hands a vehicle over to `new_owner`.
    ///
    /// Transferring a vehicle to the person who already owns it is rejected
    /// rather than treated as a success.
    pub fn update_vehicle_owner(
        &mut self,
        registration_plate: &str,
        new_owner: &Person,
    ) -> Result<()> {
        let Some(registration) = self.find_vehicle_by_plate(registration_plate) else {
            return Err(RegisterError::VehicleNotFound(registration_plate.into()));
        };
        let old_owner = registration.owner;

        if self.owners.get(&old_owner) == Some(new_owner) {
            return Err(RegisterError::OwnerUnchanged(registration_plate.into()));
        }

        self.detach(old_owner);
        let owner = self.attach(new_owner);
        if let Some(registration) = self.vehicles.get_mut(registration_plate) {
            registration.owner = owner;
        }
        debug!("Transferred {registration_plate} to {new_owner}");

        Ok(())
    }

    pub fn delete_vehicle(&mut self, registration_plate: &str) -> Result<()> {
        let Some(registration) = self.vehicles.shift_remove(registration_plate) else {
            return Err(RegisterError::VehicleNotFound(registration_plate.into()));
        };

        self.detach(registration.owner);
        debug!("Deleted {registration_plate}");

        Ok(())
    }

    #[must_use]
    pub fn list_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .filter_map(|(plate, registration)| self.to_vehicle(plate, registration))
            .collect()
    }

    #[must_use]
    pub fn list_owners(&self) -> Vec<&Person> {
        self.owners.values().collect()
    }

    /// Returns nothing for someone who is not a current owner.
    #[must_use]
    pub fn list_vehicle_by_owner(&self, owner: &Person) -> Vec<Vehicle> {
        let Some(owner) = self.owner_id(owner) else {
            return Vec::new();
        };

        self.vehicles
            .iter()
            .filter(|(_, registration)| registration.owner == owner)
            .filter_map(|(plate, registration)| self.to_vehicle(plate, registration))
            .collect()
    }

    /// The register's record of `person`, holding their current vehicle count.
    #[must_use]
    pub fn owner(&self, person: &Person) -> Option<&Person> {
        self.owners.values().find(|owner| *owner == person)
    }

    #[must_use]
    pub fn vehicle(&self, registration_plate: &str) -> Option<Vehicle> {
        let (plate, registration) = self.vehicles.get_key_value(registration_plate)?;
        self.to_vehicle(plate, registration)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    fn find_vehicle_by_plate(&self, registration_plate: &str) -> Option<&Registration> {
        self.vehicles.get(registration_plate)
    }

    fn owner_id(&self, person: &Person) -> Option<OwnerId> {
        self.owners
            .iter()
            .find(|(_, owner)| *owner == person)
            .map(|(id, _)| *id)
    }

    /// Counts one more vehicle against `person`, enrolling them as an owner
    /// if they are not one yet.
    fn attach(&mut self, person: &Person) -> OwnerId {
        let id = self.owner_id(person).unwrap_or_else(|| {
            let id = OwnerId(self.next_owner_id);
            self.next_owner_id += 1;
            self.owners.insert(
                id,
                Person::new(person.name.clone(), person.surname.clone(), person.age),
            );
            id
        });

        if let Some(owner) = self.owners.get_mut(&id) {
            owner.increment_vehicle_count();
        }
        id
    }

    /// Counts one vehicle less against an owner and forgets them once they
    /// have none left.
    fn detach(&mut self, id: OwnerId) {
        let Some(owner) = self.owners.get_mut(&id) else {
            return;
        };

        owner.decrement_vehicle_count();
        if owner.vehicle_count() == 0 {
            debug!("{owner} no longer owns any vehicles");
            self.owners.shift_remove(&id);
        }
    }

    fn to_vehicle(&self, plate: &str, registration: &Registration) -> Option<Vehicle> {
        let owner = self.owners.get(&registration.owner)?;
        Some(Vehicle::new(
            plate,
            registration.creation_date.clone(),
            owner.clone(),
        ))
    }
}
