//! Storage module for uploaded attachments
//!
//! Provides a local-disk file store that names each file after its upload
//! time and original filename.

mod disk_storage;

pub use disk_storage::DiskStorage;
