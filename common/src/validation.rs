//! Parsing and validation of inbound contact payloads. Nothing here touches
//! storage.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::{
    error::ValidationError,
    models::{Contact, ContactPayload, PhoneMap},
    utils::PhoneType,
};

const MIN_PHONE_DIGITS: usize = 9;
const MAX_PHONE_DIGITS: usize = 15;
const MIN_EMAIL_LEN: usize = 3;

/// A phone number is 9 to 15 ASCII digits with nothing else mixed in.
pub fn is_valid_phone_number(number: &str) -> bool {
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&number.len())
        && number.bytes().all(|b| b.is_ascii_digit())
}

/// Checks every entry of a raw phone map and converts the keys to
/// [`PhoneType`]. Reports the first violation in key order.
pub fn validate_phone_map(numbers: BTreeMap<String, String>) -> Result<PhoneMap, ValidationError> {
    if numbers.is_empty() {
        return Err(ValidationError::MissingPhoneNumbers);
    }

    let mut validated = BTreeMap::new();
    for (key, number) in numbers {
        let phone_type =
            PhoneType::from_str(&key).map_err(|_| ValidationError::InvalidPhoneType(key))?;
        if !is_valid_phone_number(&number) {
            return Err(ValidationError::InvalidPhoneNumber { phone_type, number });
        }
        validated.insert(phone_type, number);
    }

    Ok(PhoneMap::from_validated(validated))
}

/// Parses a raw request body into a [`Contact`], rejecting it on the first
/// field that fails validation.
pub fn parse_contact(body: &[u8]) -> Result<Contact, ValidationError> {
    let payload: ContactPayload =
        serde_json::from_slice::<Option<ContactPayload>>(body)?.unwrap_or_default();

    let name = payload.name;
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    let email = payload.email;
    if email.len() < MIN_EMAIL_LEN {
        return Err(ValidationError::MissingEmail);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    let numbers = validate_phone_map(payload.numbers)?;

    Ok(Contact {
        id: payload.contact_id,
        name,
        email,
        numbers,
    })
}
