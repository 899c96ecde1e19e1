use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User request payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub addresses: Vec<UserAddress>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archived: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub change_password_at_next_login: Option<bool>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub emails: Vec<UserEmail>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub external_ids: Vec<UserExternalId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gender: Option<UserGender>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hash_function: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub ims: Vec<UserIm>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub include_in_global_address_list: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ip_whitelisted: Option<bool>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub keywords: Vec<UserKeyword>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub languages: Vec<UserLanguage>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub locations: Vec<UserLocation>,
  #[serde(skip_serializing_if = "UserName::is_empty")]
  pub name: UserName,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notes: Option<UserAbout>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub org_unit_path: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub organizations: Vec<UserOrganization>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub phones: Vec<UserPhone>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub posix_accounts: Vec<UserPosixAccount>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary_email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub recovery_email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub recovery_phone: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub relations: Vec<UserRelation>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub ssh_public_keys: Vec<UserSshPublicKey>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub suspended: Option<bool>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub websites: Vec<UserWebsite>,
  /// Canonical names of fields the transport must send even when empty
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserName {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub family_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub full_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub given_name: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

impl UserName {
  /// Whether no part of the name is set
  pub fn is_empty(&self) -> bool {
    self.family_name.is_none() && self.full_name.is_none() && self.given_name.is_none()
  }

  /// Overwrites the parts of the name that are set in `other`
  pub fn merge(&mut self, other: UserName) {
    if other.family_name.is_some() {
      self.family_name = other.family_name;
    }
    if other.full_name.is_some() {
      self.full_name = other.full_name;
    }
    if other.given_name.is_some() {
      self.given_name = other.given_name;
    }
    self.force_send_fields.extend(other.force_send_fields);
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAddress {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub country_code: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub extended_address: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub formatted: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub locality: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub po_box: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub postal_code: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub region: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub source_is_structured: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub street_address: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserEmail {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserExternalId {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGender {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub address_me_as: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_gender: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserIm {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_protocol: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub im: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub protocol: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserKeyword {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserLanguage {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_language: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language_code: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preference: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserLocation {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub area: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub building_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub desk_code: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub floor_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub floor_section: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

/// Free text notes about a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAbout {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub content_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserOrganization {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cost_center: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub department: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub domain: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub full_time_equivalent: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub symbol: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPhone {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPosixAccount {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gecos: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gid: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub home_directory: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operating_system_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub shell: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub system_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub uid: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRelation {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSshPublicKey {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expiration_time_usec: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserWebsite {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub r#type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}
