use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("A vehicle with the registration plate {0} is already registered.")]
    DuplicatePlate(String),
    #[error("No vehicle with {0} as it's registration plate could be found.")]
    VehicleNotFound(String),
    #[error("The vehicle {0} already belongs to that owner.")]
    OwnerUnchanged(String),
}

pub type Result<T, E = RegisterError> = std::result::Result<T, E>;

/// Collapses an operation outcome into the numeric contract callers check:
/// `1` when the register changed, `0` when the call was rejected.
pub trait StatusCode {
    fn status_code(&self) -> u8;
}

impl StatusCode for RegisterError {
    fn status_code(&self) -> u8 {
        match self {
            RegisterError::DuplicatePlate(_)
            | RegisterError::VehicleNotFound(_)
            | RegisterError::OwnerUnchanged(_) => 0,
        }
    }
}

impl StatusCode for Result<()> {
    fn status_code(&self) -> u8 {
        match self {
            Ok(()) => 1,
            Err(err) => err.status_code(),
        }
    }
}
