//! Typed request payloads, one per object type. Field names serialize to the
//! remote API's canonical attribute names; unset fields are omitted.

#[allow(missing_docs)]
mod group;
#[allow(missing_docs)]
mod orgunit;
#[allow(missing_docs)]
mod user;

pub use group::{Alias, Group, GroupSettings, Member};
pub use orgunit::OrgUnit;
pub use user::*;

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Payload or sub-record carrying a list of force-sent fields
pub trait Record: Serialize + DeserializeOwned {
  /// Canonical names of fields the transport must send even when they hold a
  /// zero value
  fn force_send_fields(&self) -> &BTreeSet<String>;

  /// Mutable access to the force-sent field names
  fn force_send_fields_mut(&mut self) -> &mut BTreeSet<String>;

  /// Marks `field` as force-sent
  fn force_send(&mut self, field: &str) {
    self.force_send_fields_mut().insert(field.to_string());
  }
}

/// Deserializes a record from validated `fields` keyed by canonical name and
/// marks `forced` as force-sent
pub(crate) fn from_fields<T: Record>(fields: Map<String, Value>, forced: &[&str]) -> Result<T> {
  let mut record: T = serde_json::from_value(Value::Object(fields))?;
  for field in forced {
    record.force_send(field);
  }

  Ok(record)
}

macro_rules! impl_record {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Record for $ty {
        fn force_send_fields(&self) -> &BTreeSet<String> {
          &self.force_send_fields
        }

        fn force_send_fields_mut(&mut self) -> &mut BTreeSet<String> {
          &mut self.force_send_fields
        }
      }
    )*
  };
}

impl_record!(
  Alias,
  Group,
  GroupSettings,
  Member,
  OrgUnit,
  User,
  UserAbout,
  UserAddress,
  UserEmail,
  UserExternalId,
  UserGender,
  UserIm,
  UserKeyword,
  UserLanguage,
  UserLocation,
  UserName,
  UserOrganization,
  UserPhone,
  UserPosixAccount,
  UserRelation,
  UserSshPublicKey,
  UserWebsite,
);

/// Request payload for any supported object type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
  /// Alias payload
  Alias(Alias),
  /// Group payload
  Group(Group),
  /// Group settings payload
  GroupSettings(GroupSettings),
  /// Member payload
  Member(Member),
  /// Organizational unit payload
  OrgUnit(OrgUnit),
  /// User payload
  User(User),
}

impl Payload {
  /// Force-sent fields of the top level record
  pub fn force_send_fields(&self) -> &BTreeSet<String> {
    match self {
      Payload::Alias(p) => p.force_send_fields(),
      Payload::Group(p) => p.force_send_fields(),
      Payload::GroupSettings(p) => p.force_send_fields(),
      Payload::Member(p) => p.force_send_fields(),
      Payload::OrgUnit(p) => p.force_send_fields(),
      Payload::User(p) => p.force_send_fields(),
    }
  }
}
