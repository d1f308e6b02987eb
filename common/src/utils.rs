use serde::{Deserialize, Serialize};

use crate::{impl_display_for_enum, impl_from_str_for_enum};

/// Closed set of labels a contact phone number can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Home,
    Work,
    Mobile,
    Fax,
}

impl_from_str_for_enum!(PhoneType, Home => "home", Work => "work", Mobile => "mobile", Fax => "fax");
impl_display_for_enum!(PhoneType, Home => "home", Work => "work", Mobile => "mobile", Fax => "fax");
