//! Turns one row of cells into a typed request payload.
//!
//! A [`HeaderMap`] is validated once from the header row; a [`RecordBuilder`]
//! then converts each following row against it.

use crate::{
  error::{Error, ErrorMsg, MsgType, Result},
  freeform::FreeformDecoder,
  password::PasswordHasher,
  payload::{from_fields, Payload, User},
  schema::{user, ObjectType},
};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// Column index to canonical attribute name, validated against an object
/// type's batch attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
  object: ObjectType,
  columns: Vec<(usize, &'static str)>,
}

impl HeaderMap {
  /// Validates every cell of `header` as a batch attribute of `object`
  pub fn from_header<S: AsRef<str>>(object: ObjectType, header: &[S]) -> Result<Self> {
    if header.is_empty() {
      return Err(Error::malformed(MsgType::EmptyHeader));
    }

    let attributes = object.batch_attributes();
    let mut columns = Vec::with_capacity(header.len());

    for (idx, cell) in header.iter().enumerate() {
      let name = cell.as_ref().trim();
      if name.is_empty() {
        return Err(Error::Syntax {
          msg: ErrorMsg::from(MsgType::MalformedHeader)
            .with_extended(format!("column {} has no name", idx + 1)),
          span: None,
        });
      }

      columns.push((idx, attributes.canonical(name)?));
    }

    Ok(HeaderMap { object, columns })
  }

  /// Object type the header was validated for
  pub fn object(&self) -> ObjectType {
    self.object
  }

  /// `(column index, canonical name)` pairs in column order
  pub fn columns(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
    self.columns.iter().copied()
  }

  /// Whether some column maps to `canonical`
  pub fn contains(&self, canonical: &str) -> bool {
    self.columns.iter().any(|(_, name)| *name == canonical)
  }
}

/// Whether rows describe new objects or changes to existing ones
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuildMode {
  /// Rows create objects
  Create,
  /// Rows update the object named by the key column
  Update,
}

impl fmt::Display for BuildMode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      BuildMode::Create => write!(f, "create"),
      BuildMode::Update => write!(f, "update"),
    }
  }
}

impl FromStr for BuildMode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "create" => Ok(BuildMode::Create),
      "update" => Ok(BuildMode::Update),
      _ => Err(Error::UnknownFlagValue {
        value: s.to_string(),
        kind: "build mode",
      }),
    }
  }
}

/// Payload built from one row
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRow {
  /// Value of the key column, naming the object to update
  pub key: Option<String>,
  /// Request payload
  pub payload: Payload,
}

/// Builds payloads of one object type from rows of cells
pub struct RecordBuilder<'h> {
  object: ObjectType,
  mode: BuildMode,
  decoder: FreeformDecoder<'h>,
}

impl<'h> RecordBuilder<'h> {
  /// Creates a builder for `object` rows. Password cells are hashed with
  /// `hasher`.
  pub fn new(object: ObjectType, mode: BuildMode, hasher: &'h dyn PasswordHasher) -> Self {
    RecordBuilder {
      object,
      mode,
      decoder: FreeformDecoder::new(hasher),
    }
  }

  /// Object type of the rows
  pub fn object(&self) -> ObjectType {
    self.object
  }

  /// Create or update
  pub fn mode(&self) -> BuildMode {
    self.mode
  }

  /// Builds the payload for `row`. Cells missing from the end of a short row
  /// are treated as empty.
  ///
  /// # Example
  ///
  /// ```
  /// use diradm::{
  ///   password::Sha512Hasher,
  ///   payload::Payload,
  ///   record::{BuildMode, HeaderMap, RecordBuilder},
  ///   schema::ObjectType,
  /// };
  ///
  /// let header = HeaderMap::from_header(ObjectType::Member, &["email", "role"]).unwrap();
  /// let row = vec!["a@example.com".to_string(), "owner".to_string()];
  /// let built = RecordBuilder::new(ObjectType::Member, BuildMode::Create, &Sha512Hasher)
  ///   .build(&header, &row)
  ///   .unwrap();
  ///
  /// match built.payload {
  ///   Payload::Member(m) => assert_eq!(m.role.as_deref(), Some("OWNER")),
  ///   _ => unreachable!(),
  /// }
  /// ```
  pub fn build<S: AsRef<str>>(&self, header: &HeaderMap, row: &[S]) -> Result<BuiltRow> {
    if header.object() != self.object {
      return Err(Error::Format(ErrorMsg::new(format!(
        "header was validated for {} rows, not {}",
        header.object(),
        self.object
      ))));
    }

    let cells = header
      .columns()
      .map(|(idx, canonical)| (canonical, row.get(idx).map_or("", |c| c.as_ref())));

    let (key, payload) = match self.object {
      ObjectType::User => self.build_user(cells)?,
      ObjectType::Alias => {
        let (key, fields, forced) = self.collect(cells)?;
        (key, Payload::Alias(from_fields(fields, &forced)?))
      }
      ObjectType::Group => {
        let (key, fields, forced) = self.collect(cells)?;
        (key, Payload::Group(from_fields(fields, &forced)?))
      }
      ObjectType::GroupSettings => {
        let (key, fields, forced) = self.collect(cells)?;
        (key, Payload::GroupSettings(from_fields(fields, &forced)?))
      }
      ObjectType::Member => {
        let (key, fields, forced) = self.collect(cells)?;
        (key, Payload::Member(from_fields(fields, &forced)?))
      }
      ObjectType::OrgUnit => {
        let (key, fields, forced) = self.collect(cells)?;
        (key, Payload::OrgUnit(from_fields(fields, &forced)?))
      }
    };

    self.check_mandatory(key.as_deref(), &payload)?;

    Ok(BuiltRow { key, payload })
  }

  /// Converts the cells of a non-user row into a JSON object keyed by
  /// canonical name
  fn collect<'a>(
    &self,
    cells: impl Iterator<Item = (&'static str, &'a str)>,
  ) -> Result<(Option<String>, Map<String, Value>, Vec<&'static str>)> {
    let key_attribute = self.object.key_attribute();
    let clearable = self.object.clearable();
    let mut key = None;
    let mut fields = Map::new();
    let mut forced = Vec::new();

    for (canonical, cell) in cells {
      if canonical == key_attribute {
        key = Some(cell.to_string()).filter(|k| !k.is_empty());
        continue;
      }

      let kind = self
        .object
        .fields()
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| Error::unknown_attribute(canonical))?;

      if cell.is_empty() {
        if clearable.contains(&canonical) {
          fields.insert(canonical.to_string(), Value::String(String::new()));
          forced.push(canonical);
        }
        continue;
      }

      let value = kind.convert(canonical, cell)?;
      if value == Value::Bool(false) {
        forced.push(canonical);
      }
      fields.insert(canonical.to_string(), value);
    }

    Ok((key, fields, forced))
  }

  fn build_user<'a>(
    &self,
    cells: impl Iterator<Item = (&'static str, &'a str)>,
  ) -> Result<(Option<String>, Payload)> {
    let mut key = None;
    let mut record = User::default();

    for (canonical, cell) in cells {
      if canonical == user::KEY {
        key = Some(cell.to_string()).filter(|k| !k.is_empty());
        continue;
      }

      if let Some(spec) = user::composite_for_field(canonical) {
        if !cell.is_empty() {
          self.decoder.apply_composite(spec, cell, &mut record)?;
        }
        continue;
      }

      if cell.is_empty() {
        if user::CLEARABLE.contains(&canonical) {
          self.decoder.clear_scalar(canonical, &mut record)?;
        }
        continue;
      }

      self.decoder.set_scalar(canonical, cell, &mut record)?;
    }

    Ok((key, Payload::User(record)))
  }

  fn check_mandatory(&self, key: Option<&str>, payload: &Payload) -> Result<()> {
    let key_required = self.mode == BuildMode::Update
      || matches!(self.object, ObjectType::Alias | ObjectType::GroupSettings);
    if key_required && key.is_none() {
      return Err(Error::MissingAttribute(self.object.key_attribute().to_string()));
    }

    let missing = match (self.mode, payload) {
      (BuildMode::Create, Payload::Group(g)) if g.email.is_none() => Some("email"),
      (BuildMode::Create, Payload::Group(g)) if g.name.is_none() => Some("name"),
      (BuildMode::Create, Payload::Member(m)) if m.email.is_none() => Some("email"),
      (_, Payload::Alias(a)) if a.alias.is_none() => Some("alias"),
      _ => None,
    };

    match missing {
      Some(field) => Err(Error::MissingAttribute(field.to_string())),
      None => Ok(()),
    }
  }
}
