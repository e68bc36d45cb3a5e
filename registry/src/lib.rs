pub mod data;
pub mod error;
pub mod register;
pub mod sync;

pub use data::{Person, Vehicle};
pub use error::{RegisterError, StatusCode};
pub use register::Register;
pub use sync::SharedRegister;
