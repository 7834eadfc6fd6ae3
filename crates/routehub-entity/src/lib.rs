//! # routehub-entity
//!
//! Domain entity models for RouteHub. Every struct in this crate is either
//! a persisted record (a saved route), a listing projection (a folder with
//! its routes), or a transfer object (route drafts, patches, workspace
//! snapshots). All entities serialize with camelCase keys, which is the
//! on-disk and on-the-wire format.

pub mod folder;
pub mod route;
pub mod workspace;
