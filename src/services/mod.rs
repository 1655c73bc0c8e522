pub mod validation;

pub use validation::{is_length, is_truthy, validate_create, ValidationError};
