//! Saved route domain entities.

pub mod model;
pub mod patch;

pub use model::{CreateRoute, Route, ValidRoute};
pub use patch::RoutePatch;
