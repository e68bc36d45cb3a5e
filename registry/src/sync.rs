use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    data::{Person, Vehicle},
    error::Result,
    register::Register,
};

/// A [`Register`] that can be handed to several threads.
///
/// Every call takes the one lock for its whole duration, so an insert,
/// transfer or delete is never observed half way through.
#[derive(Debug, Clone, Default)]
pub struct SharedRegister {
    inner: Arc<Mutex<Register>>,
}

impl SharedRegister {
    #[must_use]
    pub fn new(register: Register) -> Self {
        Self {
            inner: Arc::new(Mutex::new(register)),
        }
    }

    pub fn insert_vehicle(&self, vehicle: Vehicle) -> Result<()> {
        self.lock().insert_vehicle(vehicle)
    }

    pub fn update_vehicle_owner(
        &self,
        registration_plate: &str,
        new_owner: &Person,
    ) -> Result<()> {
        self.lock().update_vehicle_owner(registration_plate, new_owner)
    }

    pub fn delete_vehicle(&self, registration_plate: &str) -> Result<()> {
        self.lock().delete_vehicle(registration_plate)
    }

    #[must_use]
    pub fn list_vehicles(&self) -> Vec<Vehicle> {
        self.lock().list_vehicles()
    }

    #[must_use]
    pub fn list_owners(&self) -> Vec<Person> {
        self.lock().list_owners().into_iter().cloned().collect()
    }

    #[must_use]
    pub fn list_vehicle_by_owner(&self, owner: &Person) -> Vec<Vehicle> {
        self.lock().list_vehicle_by_owner(owner)
    }

    /// Runs `f` with the register locked.
    pub fn with<T>(&self, f: impl FnOnce(&mut Register) -> T) -> T {
        f(&mut self.lock())
    }

    // Register operations either finish or return before touching state, so
    // a poisoned lock still guards a consistent register.
    fn lock(&self) -> MutexGuard<'_, Register> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Register> for SharedRegister {
    fn from(register: Register) -> Self {
        Self::new(register)
    }
}
