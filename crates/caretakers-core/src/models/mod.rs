//! Domain models for the care-management core.

mod caretaker;
mod id;
mod patient;
mod sample;
mod status;
mod validation;

pub use caretaker::*;
pub use id::*;
pub use patient::*;
pub use sample::*;
pub use status::*;
pub use validation::*;
