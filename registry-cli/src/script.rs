use std::{fs, path::Path};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vehikular_registry::{Person, Register, StatusCode, Vehicle};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Could not read the script file: {0}")]
    Io(#[from] std::io::Error),
    #[error("The script is not a valid list of operations: {0}")]
    Json(#[from] serde_json::Error),
}

/// One step of a script, as written in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Insert {
        vehicle: Vehicle,
    },
    Transfer {
        registration_plate: String,
        new_owner: Person,
    },
    Delete {
        registration_plate: String,
    },
}

impl Operation {
    /// Applies the operation and returns its status code.
    pub fn apply(&self, register: &mut Register) -> u8 {
        let result = match self {
            Operation::Insert { vehicle } => register.insert_vehicle(vehicle.clone()),
            Operation::Transfer {
                registration_plate,
                new_owner,
            } => register.update_vehicle_owner(registration_plate, new_owner),
            Operation::Delete { registration_plate } => {
                register.delete_vehicle(registration_plate)
            }
        };

        match &result {
            Ok(()) => info!("{self} -> 1"),
            Err(err) => warn!("{self} -> 0: {err}"),
        }
        result.status_code()
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Insert { vehicle } => write!(f, "insert {vehicle}"),
            Operation::Transfer {
                registration_plate,
                new_owner,
            } => write!(f, "transfer {registration_plate} to {}", new_owner.full_name()),
            Operation::Delete { registration_plate } => write!(f, "delete {registration_plate}"),
        }
    }
}

/// Parses a JSON array of operations.
///
/// # Errors
///
/// This function will return an error if the input is not a valid script.
pub fn parse(input: &str) -> Result<Vec<Operation>, ScriptError> {
    Ok(serde_json::from_str(input)?)
}

/// Reads and parses a script file.
///
/// # Errors
///
/// This function will return an error if the file cannot be read or is not a valid script.
pub fn load(path: &Path) -> Result<Vec<Operation>, ScriptError> {
    parse(&fs::read_to_string(path)?)
}

/// Applies every operation in order and returns their status codes.
pub fn run(register: &mut Register, operations: &[Operation]) -> Vec<u8> {
    operations
        .iter()
        .map(|operation| operation.apply(register))
        .collect()
}
