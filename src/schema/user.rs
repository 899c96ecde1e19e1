use super::{AttributeMap, EnumMap, FieldKind};
use once_cell::sync::Lazy;

/// Column naming the user to update
pub const KEY: &str = "userKey";

/// Canonical name of the custom schema root
pub const CUSTOM_SCHEMAS: &str = "customSchemas";

pub static ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    // top level
    ("address", "addresses"),
    ("addresses", "addresses"),
    ("agreedtoterms", "agreedToTerms"),
    ("alias", "aliases"),
    ("aliases", "aliases"),
    ("archived", "archived"),
    ("changepasswordatnextlogin", "changePasswordAtNextLogin"),
    ("creationtime", "creationTime"),
    ("customerid", "customerId"),
    ("customschemas", CUSTOM_SCHEMAS),
    ("deletiontime", "deletionTime"),
    ("email", "emails"),
    ("emails", "emails"),
    ("etag", "etag"),
    ("externalid", "externalIds"),
    ("externalids", "externalIds"),
    ("gender", "gender"),
    ("hashfunction", "hashFunction"),
    ("id", "id"),
    ("im", "ims"),
    ("ims", "ims"),
    ("includeinglobaladdresslist", "includeInGlobalAddressList"),
    ("ipwhitelisted", "ipWhitelisted"),
    ("isadmin", "isAdmin"),
    ("isdelegatedadmin", "isDelegatedAdmin"),
    ("isenforcedin2sv", "isEnforcedIn2Sv"),
    ("isenrolledin2sv", "isEnrolledIn2Sv"),
    ("ismailboxsetup", "isMailboxSetup"),
    ("keyword", "keywords"),
    ("keywords", "keywords"),
    ("kind", "kind"),
    ("language", "languages"),
    ("languages", "languages"),
    ("lastlogintime", "lastLoginTime"),
    ("location", "locations"),
    ("locations", "locations"),
    ("name", "name"),
    ("noneditablealiases", "nonEditableAliases"),
    ("notes", "notes"),
    ("organisation", "organizations"),
    ("organisations", "organizations"),
    ("organization", "organizations"),
    ("organizations", "organizations"),
    ("orgunitpath", "orgUnitPath"),
    ("password", "password"),
    ("phone", "phones"),
    ("phones", "phones"),
    ("posixaccount", "posixAccounts"),
    ("posixaccounts", "posixAccounts"),
    ("primaryemail", "primaryEmail"),
    ("recoveryemail", "recoveryEmail"),
    ("recoveryphone", "recoveryPhone"),
    ("relation", "relations"),
    ("relations", "relations"),
    ("sshpublickey", "sshPublicKeys"),
    ("sshpublickeys", "sshPublicKeys"),
    ("suspended", "suspended"),
    ("suspensionreason", "suspensionReason"),
    ("thumbnailphotoetag", "thumbnailPhotoEtag"),
    ("thumbnailphotourl", "thumbnailPhotoUrl"),
    ("website", "websites"),
    ("websites", "websites"),
    // name
    ("christianname", "givenName"),
    ("displayname", "displayName"),
    ("familyname", "familyName"),
    ("firstname", "givenName"),
    ("forename", "givenName"),
    ("fullname", "fullName"),
    ("givenname", "givenName"),
    ("lastname", "familyName"),
    ("surname", "familyName"),
    // composite sub-fields
    ("accountid", "accountId"),
    ("addressmeas", "addressMeAs"),
    ("area", "area"),
    ("buildingid", "buildingId"),
    ("contenttype", "contentType"),
    ("costcenter", "costCenter"),
    ("costcentre", "costCenter"),
    ("country", "country"),
    ("countrycode", "countryCode"),
    ("customgender", "customGender"),
    ("customlanguage", "customLanguage"),
    ("customprotocol", "customProtocol"),
    ("customtype", "customType"),
    ("department", "department"),
    ("description", "description"),
    ("deskcode", "deskCode"),
    ("domain", "domain"),
    ("expirationtimeusec", "expirationTimeUsec"),
    ("extendedaddress", "extendedAddress"),
    ("fingerprint", "fingerprint"),
    ("floorname", "floorName"),
    ("floorsection", "floorSection"),
    ("formatted", "formatted"),
    ("fulltimeequivalent", "fullTimeEquivalent"),
    ("gecos", "gecos"),
    ("gid", "gid"),
    ("homedirectory", "homeDirectory"),
    ("key", "key"),
    ("languagecode", "languageCode"),
    ("locality", "locality"),
    ("operatingsystemtype", "operatingSystemType"),
    ("pobox", "poBox"),
    ("postalcode", "postalCode"),
    ("postcode", "postalCode"),
    ("preference", "preference"),
    ("primary", "primary"),
    ("protocol", "protocol"),
    ("region", "region"),
    ("shell", "shell"),
    ("sourceisstructured", "sourceIsStructured"),
    ("streetaddress", "streetAddress"),
    ("symbol", "symbol"),
    ("systemid", "systemId"),
    ("title", "title"),
    ("type", "type"),
    ("uid", "uid"),
    ("username", "username"),
    ("value", "value"),
  ])
});

pub static QUERY_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("address", "address"),
    ("addresscountry", "addressCountry"),
    ("addressextended", "addressExtended"),
    ("addresslocality", "addressLocality"),
    ("addresspobox", "addressPoBox"),
    ("addresspostalcode", "addressPostalCode"),
    ("addresspostcode", "addressPostalCode"),
    ("addressregion", "addressRegion"),
    ("addressstreet", "addressStreet"),
    ("directmanager", "directManager"),
    ("directmanagerid", "directManagerId"),
    ("email", "email"),
    ("externalid", "externalId"),
    ("familyname", "familyName"),
    ("firstname", "givenName"),
    ("givenname", "givenName"),
    ("im", "im"),
    ("isadmin", "isAdmin"),
    ("isdelegatedadmin", "isDelegatedAdmin"),
    ("isenforcedin2sv", "isEnforcedIn2Sv"),
    ("isenrolledin2sv", "isEnrolledIn2Sv"),
    ("issuspended", "isSuspended"),
    ("lastname", "familyName"),
    ("manager", "manager"),
    ("managerid", "managerId"),
    ("name", "name"),
    ("orgcostcenter", "orgCostCenter"),
    ("orgcostcentre", "orgCostCenter"),
    ("orgdepartment", "orgDepartment"),
    ("orgdescription", "orgDescription"),
    ("orgname", "orgName"),
    ("orgtitle", "orgTitle"),
    ("orgunitpath", "orgUnitPath"),
    ("phone", "phone"),
  ])
});

pub static BATCH_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("address", "addresses"),
    ("addresses", "addresses"),
    ("archived", "archived"),
    ("changepasswordatnextlogin", "changePasswordAtNextLogin"),
    ("email", "emails"),
    ("emails", "emails"),
    ("externalid", "externalIds"),
    ("externalids", "externalIds"),
    ("familyname", "familyName"),
    ("firstname", "givenName"),
    ("gender", "gender"),
    ("givenname", "givenName"),
    ("im", "ims"),
    ("ims", "ims"),
    ("includeinglobaladdresslist", "includeInGlobalAddressList"),
    ("ipwhitelisted", "ipWhitelisted"),
    ("keyword", "keywords"),
    ("keywords", "keywords"),
    ("language", "languages"),
    ("languages", "languages"),
    ("lastname", "familyName"),
    ("location", "locations"),
    ("locations", "locations"),
    ("name", "name"),
    ("notes", "notes"),
    ("organisation", "organizations"),
    ("organisations", "organizations"),
    ("organization", "organizations"),
    ("organizations", "organizations"),
    ("orgunitpath", "orgUnitPath"),
    ("password", "password"),
    ("phone", "phones"),
    ("phones", "phones"),
    ("posixaccount", "posixAccounts"),
    ("posixaccounts", "posixAccounts"),
    ("primaryemail", "primaryEmail"),
    ("recoveryemail", "recoveryEmail"),
    ("recoveryphone", "recoveryPhone"),
    ("relation", "relations"),
    ("relations", "relations"),
    ("sshpublickey", "sshPublicKeys"),
    ("sshpublickeys", "sshPublicKeys"),
    ("suspended", "suspended"),
    ("userkey", KEY),
    ("website", "websites"),
    ("websites", "websites"),
  ])
});

/// Top level user fields holding a single scalar
pub static SCALARS: &[(&str, FieldKind)] = &[
  ("archived", FieldKind::Boolean),
  ("changePasswordAtNextLogin", FieldKind::Boolean),
  ("familyName", FieldKind::Text),
  ("givenName", FieldKind::Text),
  ("includeInGlobalAddressList", FieldKind::Boolean),
  ("ipWhitelisted", FieldKind::Boolean),
  ("orgUnitPath", FieldKind::Text),
  ("password", FieldKind::Text),
  ("primaryEmail", FieldKind::Text),
  ("recoveryEmail", FieldKind::Text),
  ("recoveryPhone", FieldKind::Text),
  ("suspended", FieldKind::Boolean),
];

/// Scalar fields an empty cell clears
pub static CLEARABLE: &[&str] = &["orgUnitPath", "recoveryEmail", "recoveryPhone"];

/// How occurrences of a composite attribute are stored on the user
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cardinality {
  /// Every occurrence is appended to a list
  List,
  /// The latest occurrence replaces the previous value
  Single,
  /// Occurrences are merged into the existing value
  Merge,
}

/// Sub-field of a composite attribute
#[derive(Debug)]
pub struct SubField {
  /// Canonical name
  pub name: &'static str,
  /// Value interpretation
  pub kind: FieldKind,
}

/// Structure of a composite (nested, possibly repeated) user attribute
#[derive(Debug)]
pub struct CompositeSpec {
  /// Lowercase names that introduce the attribute in freeform input
  pub keys: &'static [&'static str],
  /// Canonical user field
  pub field: &'static str,
  /// Storage behaviour
  pub cardinality: Cardinality,
  /// Allowed sub-fields
  pub sub_fields: &'static [SubField],
}

impl CompositeSpec {
  /// Finds the allowed sub-field called `name`, case-insensitively. Synonyms
  /// are resolved through the user attribute map.
  pub fn sub_field(&self, name: &str) -> Option<&'static SubField> {
    let lower = name.to_lowercase();

    self
      .sub_fields
      .iter()
      .find(|sf| sf.name.to_lowercase() == lower)
      .or_else(|| {
        let canonical = ATTRIBUTES.get(&lower)?;
        self.sub_fields.iter().find(|sf| sf.name == canonical)
      })
  }

  /// Primary freeform name
  pub fn key(&self) -> &'static str {
    self.keys[0]
  }
}

macro_rules! sub_fields {
  ($($name:literal => $kind:expr),* $(,)?) => {
    &[$(SubField { name: $name, kind: $kind }),*]
  };
}

use FieldKind::{Boolean, Enum, Integer, Text};

pub static COMPOSITES: &[CompositeSpec] = &[
  CompositeSpec {
    keys: &["address"],
    field: "addresses",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "country" => Text,
      "countryCode" => Text,
      "customType" => Text,
      "extendedAddress" => Text,
      "formatted" => Text,
      "locality" => Text,
      "poBox" => Text,
      "postalCode" => Text,
      "primary" => Boolean,
      "region" => Text,
      "sourceIsStructured" => Boolean,
      "streetAddress" => Text,
      "type" => Enum(&ADDRESS_TYPES),
    ],
  },
  CompositeSpec {
    keys: &["email"],
    field: "emails",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "address" => Text,
      "customType" => Text,
      "primary" => Boolean,
      "type" => Enum(&EMAIL_TYPES),
    ],
  },
  CompositeSpec {
    keys: &["externalid"],
    field: "externalIds",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "customType" => Text,
      "type" => Enum(&EXTERNAL_ID_TYPES),
      "value" => Text,
    ],
  },
  CompositeSpec {
    keys: &["gender"],
    field: "gender",
    cardinality: Cardinality::Single,
    sub_fields: sub_fields![
      "addressMeAs" => Text,
      "customGender" => Text,
      "type" => Enum(&GENDER_TYPES),
    ],
  },
  CompositeSpec {
    keys: &["im"],
    field: "ims",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "customProtocol" => Text,
      "customType" => Text,
      "im" => Text,
      "primary" => Boolean,
      "protocol" => Enum(&IM_PROTOCOLS),
      "type" => Enum(&IM_TYPES),
    ],
  },
  CompositeSpec {
    keys: &["keyword"],
    field: "keywords",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "customType" => Text,
      "type" => Enum(&KEYWORD_TYPES),
      "value" => Text,
    ],
  },
  CompositeSpec {
    keys: &["language"],
    field: "languages",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "customLanguage" => Text,
      "languageCode" => Text,
      "preference" => Enum(&LANGUAGE_PREFERENCES),
    ],
  },
  CompositeSpec {
    keys: &["location"],
    field: "locations",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "area" => Text,
      "buildingId" => Text,
      "customType" => Text,
      "deskCode" => Text,
      "floorName" => Text,
      "floorSection" => Text,
      "type" => Enum(&LOCATION_TYPES),
    ],
  },
  CompositeSpec {
    keys: &["name"],
    field: "name",
    cardinality: Cardinality::Merge,
    sub_fields: sub_fields![
      "familyName" => Text,
      "fullName" => Text,
      "givenName" => Text,
    ],
  },
  CompositeSpec {
    keys: &["notes"],
    field: "notes",
    cardinality: Cardinality::Single,
    sub_fields: sub_fields![
      "contentType" => Enum(&NOTES_CONTENT_TYPES),
      "value" => Text,
    ],
  },
  CompositeSpec {
    keys: &["organization", "organisation"],
    field: "organizations",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "costCenter" => Text,
      "customType" => Text,
      "department" => Text,
      "description" => Text,
      "domain" => Text,
      "fullTimeEquivalent" => Integer,
      "location" => Text,
      "name" => Text,
      "primary" => Boolean,
      "symbol" => Text,
      "title" => Text,
      "type" => Enum(&ORGANIZATION_TYPES),
    ],
  },
  CompositeSpec {
    keys: &["phone"],
    field: "phones",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "customType" => Text,
      "primary" => Boolean,
      "type" => Enum(&PHONE_TYPES),
      "value" => Text,
    ],
  },
  CompositeSpec {
    keys: &["posixaccount"],
    field: "posixAccounts",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "accountId" => Text,
      "gecos" => Text,
      "gid" => Integer,
      "homeDirectory" => Text,
      "operatingSystemType" => Enum(&OS_TYPES),
      "primary" => Boolean,
      "shell" => Text,
      "systemId" => Text,
      "uid" => Integer,
      "username" => Text,
    ],
  },
  CompositeSpec {
    keys: &["relation"],
    field: "relations",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "customType" => Text,
      "type" => Enum(&RELATION_TYPES),
      "value" => Text,
    ],
  },
  CompositeSpec {
    keys: &["sshpublickey"],
    field: "sshPublicKeys",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "expirationTimeUsec" => Integer,
      "key" => Text,
    ],
  },
  CompositeSpec {
    keys: &["website"],
    field: "websites",
    cardinality: Cardinality::List,
    sub_fields: sub_fields![
      "customType" => Text,
      "primary" => Boolean,
      "type" => Enum(&WEBSITE_TYPES),
      "value" => Text,
    ],
  },
];

/// Finds the composite introduced by the freeform name `name`
pub fn composite(name: &str) -> Option<&'static CompositeSpec> {
  let lower = name.to_lowercase();
  COMPOSITES.iter().find(|c| c.keys.iter().any(|k| *k == lower))
}

/// Finds the composite stored in the canonical user field `field`
pub fn composite_for_field(field: &str) -> Option<&'static CompositeSpec> {
  COMPOSITES.iter().find(|c| c.field == field)
}

pub static ADDRESS_TYPES: EnumMap = EnumMap::new("address type", &["custom", "home", "other", "work"]);

pub static EMAIL_TYPES: EnumMap = EnumMap::new("email type", &["custom", "home", "other", "work"]);

pub static EXTERNAL_ID_TYPES: EnumMap = EnumMap::new(
  "external id type",
  &[
    "account",
    "custom",
    "customer",
    "login_id",
    "network",
    "organization",
  ],
);

pub static GENDER_TYPES: EnumMap =
  EnumMap::new("gender type", &["female", "male", "other", "unknown"]);

pub static IM_PROTOCOLS: EnumMap = EnumMap::new(
  "im protocol",
  &[
    "aim",
    "custom_protocol",
    "gtalk",
    "icq",
    "jabber",
    "msn",
    "net_meeting",
    "qq",
    "skype",
    "yahoo",
  ],
);

pub static IM_TYPES: EnumMap = EnumMap::new("im type", &["custom", "home", "other", "work"]);

pub static KEYWORD_TYPES: EnumMap =
  EnumMap::new("keyword type", &["custom", "mission", "occupation", "outlook"]);

pub static LANGUAGE_PREFERENCES: EnumMap =
  EnumMap::new("language preference", &["not_preferred", "preferred"]);

pub static LOCATION_TYPES: EnumMap = EnumMap::new("location type", &["custom", "default", "desk"]);

pub static NOTES_CONTENT_TYPES: EnumMap =
  EnumMap::new("notes content type", &["text_html", "text_plain"]);

pub static ORGANIZATION_TYPES: EnumMap = EnumMap::new(
  "organization type",
  &["domain_only", "school", "unknown", "work"],
);

pub static OS_TYPES: EnumMap =
  EnumMap::new("operating system type", &["linux", "unspecified", "windows"]);

pub static PHONE_TYPES: EnumMap = EnumMap::new(
  "phone type",
  &[
    "assistant",
    "callback",
    "car",
    "company_main",
    "custom",
    "grand_central",
    "home",
    "home_fax",
    "isdn",
    "main",
    "mobile",
    "other",
    "other_fax",
    "pager",
    "radio",
    "telex",
    "tty_tdd",
    "work",
    "work_fax",
    "work_mobile",
    "work_pager",
  ],
);

pub static RELATION_TYPES: EnumMap = EnumMap::new(
  "relation type",
  &[
    "admin_assistant",
    "assistant",
    "brother",
    "child",
    "custom",
    "domestic_partner",
    "dotted_line_manager",
    "exec_assistant",
    "father",
    "friend",
    "manager",
    "mother",
    "parent",
    "partner",
    "referred_by",
    "relative",
    "sister",
    "spouse",
  ],
);

pub static WEBSITE_TYPES: EnumMap = EnumMap::new(
  "website type",
  &[
    "app_install_page",
    "blog",
    "custom",
    "ftp",
    "home",
    "home_page",
    "other",
    "profile",
    "reservations",
    "resume",
    "work",
  ],
);

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn verify_composites_resolve() {
    assert_eq!(composite("Organisation").map(|c| c.field), Some("organizations"));
    assert_eq!(composite("ADDRESS").map(|c| c.field), Some("addresses"));
    assert!(composite("password").is_none());

    for c in COMPOSITES {
      assert_eq!(ATTRIBUTES.get(c.field), Some(c.field));
      assert_eq!(BATCH_ATTRIBUTES.get(c.key()), Some(c.field));
      assert!(std::ptr::eq(composite_for_field(c.field).unwrap(), c));
    }
  }

  #[test]
  fn verify_sub_field_resolution() {
    let org = composite("organization").unwrap();
    // direct match wins over the top level "locations" mapping
    assert_eq!(org.sub_field("LOCATION").map(|sf| sf.name), Some("location"));
    assert_eq!(org.sub_field("costcentre").map(|sf| sf.name), Some("costCenter"));
    assert!(org.sub_field("streetaddress").is_none());

    let name = composite("name").unwrap();
    assert_eq!(name.sub_field("firstname").map(|sf| sf.name), Some("givenName"));
    assert!(name.sub_field("displayname").is_none());
  }

  #[test]
  fn verify_scalars_are_batch_columns() {
    for (name, _) in SCALARS {
      assert!(BATCH_ATTRIBUTES.contains(name), "{}", name);
    }
  }
}
