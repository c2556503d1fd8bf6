//! Phone model and the phone type enumeration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of phone number.
///
/// The known kinds are `mobile`, `home`, `work` and `fax`. Any other value is
/// kept verbatim in [`PhoneType::Other`] so it is persisted and returned
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PhoneType {
    #[default]
    Mobile,
    Home,
    Work,
    Fax,
    Other(String),
}

impl PhoneType {
    /// The wire/storage representation of this type.
    pub fn as_str(&self) -> &str {
        match self {
            PhoneType::Mobile => "mobile",
            PhoneType::Home => "home",
            PhoneType::Work => "work",
            PhoneType::Fax => "fax",
            PhoneType::Other(value) => value,
        }
    }

    /// Whether this is one of the four documented phone types.
    pub fn is_known(&self) -> bool {
        !matches!(self, PhoneType::Other(_))
    }
}

impl From<&str> for PhoneType {
    fn from(value: &str) -> Self {
        match value {
            "mobile" => PhoneType::Mobile,
            "home" => PhoneType::Home,
            "work" => PhoneType::Work,
            "fax" => PhoneType::Fax,
            other => PhoneType::Other(other.to_string()),
        }
    }
}

impl From<String> for PhoneType {
    fn from(value: String) -> Self {
        match PhoneType::from(value.as_str()) {
            PhoneType::Other(_) => PhoneType::Other(value),
            known => known,
        }
    }
}

// Serde support - serialize as string
impl Serialize for PhoneType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// Serde support - deserialize from any string, unknown values included
impl<'de> Deserialize<'de> for PhoneType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PhoneType::from(s))
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phone number owned by a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Phone {
    /// Store-assigned identifier (0 until persisted)
    #[serde(default, skip_serializing_if = "super::is_unpersisted")]
    pub id: i64,

    /// Owning contact
    pub contact_id: i64,

    /// The phone number, free-form
    pub number: String,

    /// Kind of number
    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

/// A `(number, type)` pair to be inserted for a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NewPhone {
    pub number: String,

    #[serde(rename = "type")]
    pub phone_type: PhoneType,
}

impl NewPhone {
    pub fn new(number: impl Into<String>, phone_type: impl Into<PhoneType>) -> Self {
        Self {
            number: number.into(),
            phone_type: phone_type.into(),
        }
    }

    /// Attach this entry to a contact under a store-assigned id.
    pub fn into_phone(self, id: i64, contact_id: i64) -> Phone {
        Phone {
            id,
            contact_id,
            number: self.number,
            phone_type: self.phone_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_type_known_values() {
        assert_eq!(PhoneType::from("mobile"), PhoneType::Mobile);
        assert_eq!(PhoneType::from("home"), PhoneType::Home);
        assert_eq!(PhoneType::from("work"), PhoneType::Work);
        assert_eq!(PhoneType::from("fax"), PhoneType::Fax);
        assert!(PhoneType::Fax.is_known());
    }

    #[test]
    fn test_phone_type_unknown_value_is_kept() {
        let kind = PhoneType::from("pager".to_string());
        assert_eq!(kind, PhoneType::Other("pager".to_string()));
        assert_eq!(kind.as_str(), "pager");
        assert!(!kind.is_known());
    }

    #[test]
    fn test_phone_type_is_case_sensitive() {
        assert_eq!(
            PhoneType::from("Mobile"),
            PhoneType::Other("Mobile".to_string())
        );
    }

    #[test]
    fn test_phone_serialization() {
        let phone = NewPhone::new("551122223333", "home").into_phone(4, 2);
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(
            json,
            r#"{"id":4,"contact_id":2,"number":"551122223333","type":"home"}"#
        );
    }

    #[test]
    fn test_phone_serialization_omits_zero_id() {
        let phone = NewPhone::new("5511944445555", "mobile").into_phone(0, 2);
        let json = serde_json::to_string(&phone).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_new_phone_deserialization_unknown_type() {
        let phone: NewPhone =
            serde_json::from_str(r#"{"number":"123","type":"satellite"}"#).unwrap();
        assert_eq!(phone.phone_type, PhoneType::Other("satellite".to_string()));

        let json = serde_json::to_string(&phone).unwrap();
        assert!(json.contains(r#""type":"satellite""#));
    }
}
