pub mod cli;
pub mod config;
pub mod deb;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod layout;
pub mod version;

pub use config::{Architecture, PackageSpec};
pub use error::GetZoteroError;
