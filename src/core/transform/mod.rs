//! Data transformation
//!
//! Turns nested [`UserRecord`](crate::domain::UserRecord)s into flat
//! [`ExportRow`](crate::domain::ExportRow)s. Pure functions only; no store or
//! file system access happens here.

pub mod flatten;

pub use flatten::{flatten_user, flatten_users};
