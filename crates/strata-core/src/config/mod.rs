//! Layer placement settings assembled from flags, environment, and manifest.

pub mod settings;

pub use settings::*;
