//! Flattening of nested user records
//!
//! A user with N units becomes N rows, one per unit, in the order the units
//! are stored. A user with no units produces nothing. Rows are neither
//! deduplicated, sorted nor filtered.

use crate::domain::{ExportRow, UnitRecord, UserRecord};

/// Flatten one user without consuming it
///
/// # Examples
///
/// ```
/// use unit_export::core::transform::flatten::flatten_user;
/// use unit_export::domain::{UnitRecord, UserRecord};
///
/// let user = UserRecord::new("Alice").with_unit(UnitRecord::new("Fire", "Volunteer", "F1"));
/// let rows: Vec<_> = flatten_user(&user).collect();
///
/// assert_eq!(rows[0].fields(), ["Alice", "Fire", "F1", "Volunteer"]);
/// ```
pub fn flatten_user(user: &UserRecord) -> impl Iterator<Item = ExportRow> + '_ {
    user.units.iter().map(move |unit| row_for(&user.name, unit))
}

/// Lazily flatten a sequence of users
///
/// Nothing is pulled from `users` until the returned iterator is advanced.
/// Pairs with [`CsvExporter::write_rows`](crate::core::export::CsvExporter::write_rows)
/// for in-memory input; the export run reads an async cursor and uses
/// [`flatten_user`] per record instead.
pub fn flatten_users<I>(users: I) -> impl Iterator<Item = ExportRow>
where
    I: IntoIterator<Item = UserRecord>,
{
    users.into_iter().flat_map(|user| {
        let UserRecord { name, units } = user;
        units.into_iter().map(move |unit| ExportRow {
            user_name: name.clone(),
            unit_name: unit.name,
            unit_code: unit.code,
            unit_type: unit.unit_type,
        })
    })
}

fn row_for(user_name: &str, unit: &UnitRecord) -> ExportRow {
    ExportRow {
        user_name: user_name.to_string(),
        unit_name: unit.name.clone(),
        unit_code: unit.code.clone(),
        unit_type: unit.unit_type.clone(),
    }
}
