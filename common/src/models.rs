use std::{collections::BTreeMap, fmt};

use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use uuid::Uuid;

use crate::utils::PhoneType;

/// Contact body as it arrives on the wire, before any validation.
///
/// Field names match case-insensitively and the last occurrence wins.
/// Absent or `null` values decode to their empty value so the validator,
/// not the parser, reports them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ContactPayload {
    pub contact_id: Uuid,
    pub name: String,
    pub email: String,
    pub numbers: BTreeMap<String, String>,
}

impl<'de> Deserialize<'de> for ContactPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ContactPayloadVisitor)
    }
}

struct ContactPayloadVisitor;

impl<'de> Visitor<'de> for ContactPayloadVisitor {
    type Value = ContactPayload;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a contact object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut payload = ContactPayload::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("contact_id") {
                payload.contact_id = map.next_value::<Option<Uuid>>()?.unwrap_or_default();
            } else if key.eq_ignore_ascii_case("name") {
                payload.name = map.next_value::<Option<String>>()?.unwrap_or_default();
            } else if key.eq_ignore_ascii_case("email") {
                payload.email = map.next_value::<Option<String>>()?.unwrap_or_default();
            } else if key.eq_ignore_ascii_case("numbers") {
                payload.numbers = map
                    .next_value::<Option<BTreeMap<String, Option<String>>>>()?
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(phone_type, number)| (phone_type, number.unwrap_or_default()))
                    .collect();
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(payload)
    }
}

/// Phone numbers keyed by type. Only built through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneMap(BTreeMap<PhoneType, String>);

impl PhoneMap {
    pub(crate) fn from_validated(numbers: BTreeMap<PhoneType, String>) -> Self {
        PhoneMap(numbers)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PhoneType, &String)> {
        self.0.iter()
    }

    pub fn get(&self, phone_type: PhoneType) -> Option<&str> {
        self.0.get(&phone_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A contact that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    #[serde(rename = "contact_id")]
    pub id: Uuid,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Numbers")]
    pub numbers: PhoneMap,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
