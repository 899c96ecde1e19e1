use super::{AttributeMap, FieldKind};
use once_cell::sync::Lazy;

/// Column naming the organizational unit to update
pub const KEY: &str = "ouKey";

pub static ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("blockinheritance", "blockInheritance"),
    ("description", "description"),
    ("etag", "etag"),
    ("kind", "kind"),
    ("name", "name"),
    ("orgunitid", "orgUnitId"),
    ("orgunitpath", "orgUnitPath"),
    ("parentorgunitid", "parentOrgUnitId"),
    ("parentorgunitpath", "parentOrgUnitPath"),
  ])
});

pub static BATCH_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("blockinheritance", "blockInheritance"),
    ("description", "description"),
    ("name", "name"),
    ("oukey", KEY),
    ("parentorgunitid", "parentOrgUnitId"),
    ("parentorgunitpath", "parentOrgUnitPath"),
  ])
});

/// Writable fields and how their values are interpreted
pub static FIELDS: &[(&str, FieldKind)] = &[
  ("blockInheritance", FieldKind::Boolean),
  ("description", FieldKind::Text),
  ("name", FieldKind::Text),
  ("parentOrgUnitId", FieldKind::Text),
  ("parentOrgUnitPath", FieldKind::Text),
];

/// Fields an empty cell clears
pub static CLEARABLE: &[&str] = &["description"];
