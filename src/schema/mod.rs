//! Per-object-type attribute maps, query-attribute maps and enumerated value
//! tables.
//!
//! Every table is immutable and shared by all callers. Attribute maps are
//! built once on first use; enum tables are plain constants.

/// Alias attribute tables
#[allow(missing_docs)]
pub mod alias;
/// Group attribute tables
#[allow(missing_docs)]
pub mod group;
/// Group settings attribute and enum tables
#[allow(missing_docs)]
pub mod group_settings;
/// Group member attribute and enum tables
#[allow(missing_docs)]
pub mod member;
/// Organizational unit attribute tables
#[allow(missing_docs)]
pub mod orgunit;
/// User attribute, enum and composite tables
#[allow(missing_docs)]
pub mod user;

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::{collections::HashMap, fmt, str::FromStr};

/// Mapping from lowercased user-facing attribute name to the canonical name
/// used by the remote API. Several keys may share a canonical name.
#[derive(Debug)]
pub struct AttributeMap {
  entries: HashMap<&'static str, &'static str>,
}

impl AttributeMap {
  /// Builds a map from `(lowercase key, canonical name)` pairs
  pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
    let mut entries = HashMap::with_capacity(pairs.len());

    for (key, canonical) in pairs {
      debug_assert_eq!(key.to_lowercase(), *key, "attribute keys are lowercase");
      let previous = entries.insert(*key, *canonical);
      debug_assert!(previous.is_none(), "duplicate attribute key {}", key);
    }

    AttributeMap { entries }
  }

  /// Looks up `name` case-insensitively
  pub fn get(&self, name: &str) -> Option<&'static str> {
    self.entries.get(name.to_lowercase().as_str()).copied()
  }

  /// Looks up `name` case-insensitively, failing with an unknown attribute
  /// error naming `name` as given
  pub fn canonical(&self, name: &str) -> Result<&'static str> {
    self.get(name).ok_or_else(|| Error::unknown_attribute(name))
  }

  /// Whether `name` is recognized
  pub fn contains(&self, name: &str) -> bool {
    self.get(name).is_some()
  }

  /// Number of keys
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the map has no keys
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterates over `(key, canonical name)` pairs in no particular order
  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
    self.entries.iter().map(|(k, v)| (*k, *v))
  }
}

/// Allow-list of canonical values for one enumerated domain. Input is matched
/// case-insensitively and rewritten to the canonical spelling.
#[derive(Debug)]
pub struct EnumMap {
  kind: &'static str,
  values: &'static [&'static str],
}

impl EnumMap {
  /// Creates a table for the domain `kind`, used in error messages
  pub const fn new(kind: &'static str, values: &'static [&'static str]) -> Self {
    EnumMap { kind, values }
  }

  /// Name of the enumerated domain
  pub fn kind(&self) -> &'static str {
    self.kind
  }

  /// Canonical values
  pub fn values(&self) -> &'static [&'static str] {
    self.values
  }

  /// Returns the canonical spelling of `value`
  pub fn get(&self, value: &str) -> Option<&'static str> {
    self
      .values
      .iter()
      .find(|v| v.to_lowercase() == value.to_lowercase())
      .copied()
  }

  /// Returns the canonical spelling of `value` or an error naming it
  pub fn validate(&self, value: &str) -> Result<&'static str> {
    self.get(value).ok_or_else(|| Error::UnknownFlagValue {
      value: value.to_string(),
      kind: self.kind,
    })
  }
}

/// How a value cell or freeform token is interpreted
#[derive(Debug, Copy, Clone)]
pub enum FieldKind {
  /// Free text
  Text,
  /// `true` or `false`, any case
  Boolean,
  /// `true` or `false`, any case, carried as text
  BooleanText,
  /// Signed integer
  Integer,
  /// Value from an enumerated domain
  Enum(&'static EnumMap),
}

impl FieldKind {
  /// Converts the raw `value` of `field` into its JSON representation,
  /// validating it against the field's domain
  pub fn convert(self, field: &str, value: &str) -> Result<Value> {
    match self {
      FieldKind::Text => Ok(Value::String(value.to_string())),
      FieldKind::Boolean => parse_bool(field, value).map(Value::Bool),
      FieldKind::BooleanText => parse_bool(field, value).map(|b| Value::String(b.to_string())),
      FieldKind::Integer => value
        .trim()
        .parse::<i64>()
        .map(Value::from)
        .map_err(|_| Error::not_a_number(field)),
      FieldKind::Enum(values) => values.validate(value).map(|v| Value::String(v.to_string())),
    }
  }
}

/// Object types the tool manages
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
  /// Email alias of a user
  Alias,
  /// Group
  Group,
  /// Group settings
  GroupSettings,
  /// Group member
  Member,
  /// Organizational unit
  OrgUnit,
  /// User
  User,
}

impl ObjectType {
  /// Attributes legal in a projection
  pub fn attributes(self) -> &'static AttributeMap {
    match self {
      ObjectType::Alias => &alias::ATTRIBUTES,
      ObjectType::Group => &group::ATTRIBUTES,
      ObjectType::GroupSettings => &group_settings::ATTRIBUTES,
      ObjectType::Member => &member::ATTRIBUTES,
      ObjectType::OrgUnit => &orgunit::ATTRIBUTES,
      ObjectType::User => &user::ATTRIBUTES,
    }
  }

  /// Attributes legal in a query, for the object types that can be queried
  pub fn query_attributes(self) -> Option<&'static AttributeMap> {
    match self {
      ObjectType::Group => Some(&group::QUERY_ATTRIBUTES),
      ObjectType::User => Some(&user::QUERY_ATTRIBUTES),
      _ => None,
    }
  }

  /// Attributes legal as batch input columns
  pub fn batch_attributes(self) -> &'static AttributeMap {
    match self {
      ObjectType::Alias => &alias::BATCH_ATTRIBUTES,
      ObjectType::Group => &group::BATCH_ATTRIBUTES,
      ObjectType::GroupSettings => &group_settings::BATCH_ATTRIBUTES,
      ObjectType::Member => &member::BATCH_ATTRIBUTES,
      ObjectType::OrgUnit => &orgunit::BATCH_ATTRIBUTES,
      ObjectType::User => &user::BATCH_ATTRIBUTES,
    }
  }

  /// Writable scalar fields and their interpretation. User composites are
  /// described separately by `user::COMPOSITES`.
  pub fn fields(self) -> &'static [(&'static str, FieldKind)] {
    match self {
      ObjectType::Alias => alias::FIELDS,
      ObjectType::Group => group::FIELDS,
      ObjectType::GroupSettings => group_settings::SETTINGS,
      ObjectType::Member => member::FIELDS,
      ObjectType::OrgUnit => orgunit::FIELDS,
      ObjectType::User => user::SCALARS,
    }
  }

  /// Fields an empty value clears rather than leaves untouched
  pub fn clearable(self) -> &'static [&'static str] {
    match self {
      ObjectType::Alias | ObjectType::Member => &[],
      ObjectType::Group => group::CLEARABLE,
      ObjectType::GroupSettings => group_settings::CLEARABLE,
      ObjectType::OrgUnit => orgunit::CLEARABLE,
      ObjectType::User => user::CLEARABLE,
    }
  }

  /// Canonical name of the column that identifies an existing object
  pub fn key_attribute(self) -> &'static str {
    match self {
      ObjectType::Alias | ObjectType::User => user::KEY,
      ObjectType::Group | ObjectType::GroupSettings => group::KEY,
      ObjectType::Member => member::KEY,
      ObjectType::OrgUnit => orgunit::KEY,
    }
  }
}

impl fmt::Display for ObjectType {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      ObjectType::Alias => write!(f, "alias"),
      ObjectType::Group => write!(f, "group"),
      ObjectType::GroupSettings => write!(f, "group-settings"),
      ObjectType::Member => write!(f, "member"),
      ObjectType::OrgUnit => write!(f, "orgunit"),
      ObjectType::User => write!(f, "user"),
    }
  }
}

static OBJECT_TYPES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("alias", "alias"),
    ("aliases", "alias"),
    ("group", "group"),
    ("groups", "group"),
    ("group-settings", "group-settings"),
    ("groupsettings", "group-settings"),
    ("gs", "group-settings"),
    ("member", "member"),
    ("members", "member"),
    ("orgunit", "orgunit"),
    ("orgunits", "orgunit"),
    ("ou", "orgunit"),
    ("user", "user"),
    ("users", "user"),
  ])
});

impl FromStr for ObjectType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match OBJECT_TYPES.get(s) {
      Some("alias") => Ok(ObjectType::Alias),
      Some("group") => Ok(ObjectType::Group),
      Some("group-settings") => Ok(ObjectType::GroupSettings),
      Some("member") => Ok(ObjectType::Member),
      Some("orgunit") => Ok(ObjectType::OrgUnit),
      Some("user") => Ok(ObjectType::User),
      _ => Err(Error::UnknownFlagValue {
        value: s.to_string(),
        kind: "object type",
      }),
    }
  }
}

/// Interprets `value` as a boolean, accepting `true`/`false` in any case
pub fn parse_bool(field: &str, value: &str) -> Result<bool> {
  match value.to_lowercase().as_str() {
    "true" => Ok(true),
    "false" => Ok(false),
    _ => Err(Error::not_a_boolean(field)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn verify_attribute_lookup_is_case_insensitive() {
    assert_eq!(ObjectType::User.attributes().get("GivenName"), Some("givenName"));
    assert_eq!(ObjectType::User.attributes().get("firstname"), Some("givenName"));
    assert_eq!(
      ObjectType::User
        .attributes()
        .canonical("nonsense")
        .unwrap_err()
        .to_string(),
      "nonsense attribute is not recognized"
    );
  }

  #[test]
  fn verify_enum_validation() {
    assert_eq!(member::DELIVERY_SETTINGS.validate("All_Mail").unwrap(), "ALL_MAIL");
    assert_eq!(
      member::DELIVERY_SETTINGS.validate("Unknown").unwrap_err().to_string(),
      "Unknown is not a valid delivery setting"
    );
  }

  #[test]
  fn verify_object_types() {
    assert_eq!("Users".parse::<ObjectType>().unwrap(), ObjectType::User);
    assert_eq!("ou".parse::<ObjectType>().unwrap(), ObjectType::OrgUnit);
    assert!("printer".parse::<ObjectType>().is_err());
    assert!(ObjectType::Member.query_attributes().is_none());

    for ot in [
      ObjectType::Alias,
      ObjectType::Group,
      ObjectType::GroupSettings,
      ObjectType::Member,
      ObjectType::OrgUnit,
      ObjectType::User,
    ]
    .iter()
    {
      assert!(!ot.attributes().is_empty());
      assert!(ot.batch_attributes().contains(ot.key_attribute()));

      for (name, _) in ot.fields() {
        assert_eq!(ot.batch_attributes().get(name), Some(*name));
      }
      assert_eq!(ot.to_string().parse::<ObjectType>().unwrap(), *ot);
    }
  }

  #[test]
  fn verify_field_conversion() {
    assert_eq!(FieldKind::Boolean.convert("primary", "FALSE").unwrap(), Value::Bool(false));
    assert_eq!(
      FieldKind::BooleanText.convert("archiveOnly", "True").unwrap(),
      Value::String("true".into())
    );
    assert_eq!(FieldKind::Integer.convert("gid", " 42").unwrap(), Value::from(42));
    assert_eq!(
      FieldKind::Integer.convert("gid", "forty").unwrap_err().to_string(),
      "gid must be a number"
    );
    assert_eq!(
      FieldKind::Enum(&member::ROLES).convert("role", "owner").unwrap(),
      Value::String("OWNER".into())
    );
  }

  #[test]
  fn verify_parse_bool() {
    assert!(parse_bool("suspended", "TRUE").unwrap());
    assert!(!parse_bool("suspended", "False").unwrap());
    assert_eq!(
      parse_bool("suspended", "yes").unwrap_err().to_string(),
      "suspended must be true or false"
    );
  }
}
