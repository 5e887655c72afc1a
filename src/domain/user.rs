//! User and unit records as stored in the document database

use serde::{Deserialize, Deserializer, Serialize};

/// One person in the store together with the units they belong to
///
/// `name` is required but not unique. `units` keeps the order returned by the
/// store; a missing or `null` field decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name of the user
    pub name: String,

    /// Unit memberships in store order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub units: Vec<UnitRecord>,
}

impl UserRecord {
    /// Create a user with no units
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Append a unit membership
    pub fn with_unit(mut self, unit: UnitRecord) -> Self {
        self.units.push(unit);
        self
    }
}

/// A single unit membership, owned by exactly one [`UserRecord`]
///
/// Missing or `null` fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    /// Unit name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Free-form category, stored under `type`
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub unit_type: String,

    /// Free-form identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
}

impl UnitRecord {
    /// Create a unit from its name, type and code (store field order)
    pub fn new(
        name: impl Into<String>,
        unit_type: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_type: unit_type.into(),
            code: code.into(),
        }
    }
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<UnitRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<UnitRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document, Bson};

    #[test]
    fn test_decode_full_user() {
        let document = doc! {
            "_id": "abc",
            "name": "Alice",
            "units": [
                { "name": "Fire", "type": "Volunteer", "code": "F1" },
                { "name": "Rescue", "type": "Career", "code": "R2" },
            ],
        };

        let user: UserRecord = from_document(document).unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(
            user.units,
            vec![
                UnitRecord::new("Fire", "Volunteer", "F1"),
                UnitRecord::new("Rescue", "Career", "R2"),
            ]
        );
    }

    #[test]
    fn test_decode_missing_units() {
        let user: UserRecord = from_document(doc! { "name": "Bob" }).unwrap();
        assert!(user.units.is_empty());
    }

    #[test]
    fn test_decode_null_units() {
        let user: UserRecord = from_document(doc! { "name": "Bob", "units": Bson::Null }).unwrap();
        assert!(user.units.is_empty());
    }

    #[test]
    fn test_decode_null_unit_fields() {
        let user: UserRecord = from_document(doc! {
            "name": "Erin",
            "units": [
                { "name": Bson::Null, "type": "Volunteer", "code": "F1" },
                { "name": "Rescue", "type": Bson::Null, "code": Bson::Null },
            ]
        })
        .unwrap();

        assert_eq!(user.units[0], UnitRecord::new("", "Volunteer", "F1"));
        assert_eq!(user.units[1], UnitRecord::new("Rescue", "", ""));
    }

    #[test]
    fn test_decode_unit_missing_fields() {
        let user: UserRecord =
            from_document(doc! { "name": "Carol", "units": [{ "name": "Water" }] }).unwrap();
        assert_eq!(user.units[0], UnitRecord::new("Water", "", ""));
    }

    #[test]
    fn test_decode_missing_name_fails() {
        let result = from_document::<UserRecord>(doc! { "units": [] });
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_wrong_units_shape_fails() {
        let result = from_document::<UserRecord>(doc! { "name": "Dave", "units": "Fire" });
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_uses_type_field() {
        let user = UserRecord::new("Alice").with_unit(UnitRecord::new("Fire", "Volunteer", "F1"));
        let document = to_document(&user).unwrap();
        let units = document.get_array("units").unwrap();
        let unit = units[0].as_document().unwrap();
        assert_eq!(unit.get_str("type").unwrap(), "Volunteer");
        assert!(unit.get("unit_type").is_none());
    }
}
