use super::{AttributeMap, EnumMap, FieldKind};
use once_cell::sync::Lazy;

/// Column naming the member to update
pub const KEY: &str = "memberKey";

pub static ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("delivery_settings", "delivery_settings"),
    ("deliverysettings", "delivery_settings"),
    ("email", "email"),
    ("etag", "etag"),
    ("id", "id"),
    ("kind", "kind"),
    ("role", "role"),
    ("status", "status"),
    ("type", "type"),
  ])
});

pub static BATCH_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("delivery_settings", "delivery_settings"),
    ("deliverysettings", "delivery_settings"),
    ("email", "email"),
    ("memberkey", KEY),
    ("role", "role"),
  ])
});

pub static DELIVERY_SETTINGS: EnumMap = EnumMap::new(
  "delivery setting",
  &["ALL_MAIL", "DAILY", "DIGEST", "DISABLED", "NONE"],
);

pub static ROLES: EnumMap = EnumMap::new("role", &["MANAGER", "MEMBER", "OWNER"]);

/// Writable fields and how their values are interpreted
pub static FIELDS: &[(&str, FieldKind)] = &[
  ("delivery_settings", FieldKind::Enum(&DELIVERY_SETTINGS)),
  ("email", FieldKind::Text),
  ("role", FieldKind::Enum(&ROLES)),
];
