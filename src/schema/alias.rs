use super::{AttributeMap, FieldKind};
use once_cell::sync::Lazy;

pub static ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("alias", "alias"),
    ("etag", "etag"),
    ("id", "id"),
    ("kind", "kind"),
    ("primaryemail", "primaryEmail"),
  ])
});

pub static BATCH_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[("alias", "alias"), ("userkey", super::user::KEY)])
});

/// Writable fields and how their values are interpreted
pub static FIELDS: &[(&str, FieldKind)] = &[("alias", FieldKind::Text)];
