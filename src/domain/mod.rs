//! Domain models and types for unit-export.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Stored records** ([`UserRecord`], [`UnitRecord`]) decoded from the document store
//! - **Output rows** ([`ExportRow`]) produced by flattening
//! - **Error types** ([`UnitExportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use unit_export::domain::{UnitRecord, UserRecord};
//!
//! let user = UserRecord::new("Alice")
//!     .with_unit(UnitRecord::new("Fire", "Volunteer", "F1"))
//!     .with_unit(UnitRecord::new("Rescue", "Career", "R2"));
//!
//! assert_eq!(user.units.len(), 2);
//! ```

pub mod errors;
pub mod result;
pub mod row;
pub mod user;

pub use errors::UnitExportError;
pub use result::Result;
pub use row::{ExportRow, EXPORT_HEADER};
pub use user::{UnitRecord, UserRecord};
