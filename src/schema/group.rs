use super::{AttributeMap, FieldKind};
use once_cell::sync::Lazy;

/// Column naming the group to update
pub const KEY: &str = "groupKey";

pub static ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("admincreated", "adminCreated"),
    ("alias", "aliases"),
    ("aliases", "aliases"),
    ("description", "description"),
    ("directmemberscount", "directMembersCount"),
    ("email", "email"),
    ("etag", "etag"),
    ("id", "id"),
    ("kind", "kind"),
    ("name", "name"),
    ("noneditablealias", "nonEditableAliases"),
    ("noneditablealiases", "nonEditableAliases"),
  ])
});

pub static QUERY_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("email", "email"),
    ("memberkey", "memberKey"),
    ("name", "name"),
  ])
});

pub static BATCH_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("description", "description"),
    ("email", "email"),
    ("groupkey", KEY),
    ("name", "name"),
  ])
});

/// Writable fields and how their values are interpreted
pub static FIELDS: &[(&str, FieldKind)] = &[
  ("description", FieldKind::Text),
  ("email", FieldKind::Text),
  ("name", FieldKind::Text),
];

/// Fields an empty cell clears
pub static CLEARABLE: &[&str] = &["description"];
