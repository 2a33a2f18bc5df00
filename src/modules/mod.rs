//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for resources living outside the process, such as the
//! attachment file store.

pub mod storage;
