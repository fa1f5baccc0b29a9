mod model;

pub use model::{Architecture, PackageSpec};
