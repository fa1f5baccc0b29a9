mod args;
mod build;
mod params;
mod resolved_command;

pub use args::{Args, parse_args};
pub use build::run_build;
pub use params::BuildParams;
pub use resolved_command::resolve_command;
