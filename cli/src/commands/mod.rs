//! CLI command implementations

pub mod header;
pub mod interactive;
pub mod open;
pub mod resolve;
pub mod routes;

pub use header::header_command;
pub use interactive::interactive_command;
pub use open::open_command;
pub use resolve::{href_command, resolve_command};
pub use routes::routes_command;
