//! Folder domain entities.

pub mod model;

pub use model::{
    Folder, ROOT_FOLDER, display_name, folder_or_root, is_root, validate_folder_name,
};
