//! Flat export row

use std::fmt;

/// Header written as the first line of every export file
pub const EXPORT_HEADER: [&str; 4] = ["User", "Name", "Code", "Type"];

/// One line of the export: a user paired with one of their units
///
/// Field order is `(user, unit name, unit code, unit type)`. Note that `code`
/// comes before `type` here while [`UnitRecord`](super::UnitRecord) stores
/// `type` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub user_name: String,
    pub unit_name: String,
    pub unit_code: String,
    pub unit_type: String,
}

impl ExportRow {
    /// Fields in output order
    pub fn fields(&self) -> [&str; 4] {
        [
            self.user_name.as_str(),
            self.unit_name.as_str(),
            self.unit_code.as_str(),
            self.unit_type.as_str(),
        ]
    }
}

impl fmt::Display for ExportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} ({}, {})",
            self.user_name, self.unit_name, self.unit_code, self.unit_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_order_code_before_type() {
        let row = ExportRow {
            user_name: "Alice".to_string(),
            unit_name: "Fire".to_string(),
            unit_code: "F1".to_string(),
            unit_type: "Volunteer".to_string(),
        };

        assert_eq!(row.fields(), ["Alice", "Fire", "F1", "Volunteer"]);
    }

    #[test]
    fn test_header() {
        assert_eq!(EXPORT_HEADER.join(";"), "User;Name;Code;Type");
    }
}
