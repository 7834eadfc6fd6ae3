//! # routehub-storage
//!
//! Storage provider implementations for RouteHub. The route store talks to
//! its backend only through [`routehub_core::traits::StorageProvider`]; the
//! local filesystem provider is the one shipped today.

pub mod providers;

pub use providers::LocalStorageProvider;
