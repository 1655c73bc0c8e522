pub mod environment;
pub mod lambda;

pub use environment::{create, create_environment};
pub use lambda::function_handler;
