//! Decoder and encoder for the freeform user attribute language.
//!
//! ```text
//! input  := group ( ':' group )*
//! group  := composite '~' body | name ':' value | name '~' value | name '~' '{' value '}'
//! body   := token ( '~' token )* | ( '{' token ( '~' token )* '}' )+
//! ```
//!
//! A group whose name is a composite attribute (address, phone, name, ...)
//! carries one or more occurrences of that composite; every other group sets
//! one scalar field.

use crate::{
  error::{Error, ErrorMsg, MsgType, Result},
  password::PasswordHasher,
  payload::{from_fields, Record, User, UserName},
  schema::{
    parse_bool,
    user::{self, CompositeSpec},
    FieldKind,
  },
};
use itertools::Itertools;
use serde_json::{Map, Value};

/// Decodes freeform attribute strings into a [`User`]
pub struct FreeformDecoder<'h> {
  hasher: &'h dyn PasswordHasher,
}

impl<'h> FreeformDecoder<'h> {
  /// Creates a decoder that hashes passwords with `hasher`
  pub fn new(hasher: &'h dyn PasswordHasher) -> Self {
    FreeformDecoder { hasher }
  }

  /// Applies every group of `input` to `user`. On error `user` is left
  /// untouched.
  ///
  /// # Example
  ///
  /// ```
  /// use diradm::{freeform::FreeformDecoder, password::Sha512Hasher, payload::User};
  ///
  /// let mut user = User::default();
  /// FreeformDecoder::new(&Sha512Hasher)
  ///   .decode("primaryemail:jane@example.com:name~givenname~Jane", &mut user)
  ///   .unwrap();
  ///
  /// assert_eq!(user.primary_email.as_deref(), Some("jane@example.com"));
  /// assert_eq!(user.name.given_name.as_deref(), Some("Jane"));
  /// ```
  pub fn decode(&self, input: &str, user: &mut User) -> Result<()> {
    if input.trim().is_empty() {
      return Err(Error::malformed(MsgType::MalformedAttributeString));
    }

    let mut staged = user.clone();

    for group in split_groups(input)? {
      match group {
        Group::Composite(name, body) => match user::composite(name) {
          Some(spec) => self.apply_composite(spec, body, &mut staged)?,
          None => return Err(Error::unknown_attribute(name)),
        },
        Group::Scalar(name, _) if user::composite(name).is_some() => {
          return Err(Error::malformed(MsgType::MissingAttributeValue));
        }
        Group::Scalar(name, value) => self.set_scalar(name, value, &mut staged)?,
      }
    }

    *user = staged;
    Ok(())
  }

  /// Applies every occurrence in `body` to the composite field described by
  /// `spec`
  pub fn apply_composite(&self, spec: &CompositeSpec, body: &str, user: &mut User) -> Result<()> {
    for occurrence in split_occurrences(body)? {
      let (fields, forced) = occurrence_fields(spec, occurrence)?;

      match spec.field {
        "addresses" => user.addresses.push(from_fields(fields, &forced)?),
        "emails" => user.emails.push(from_fields(fields, &forced)?),
        "externalIds" => user.external_ids.push(from_fields(fields, &forced)?),
        "gender" => user.gender = Some(from_fields(fields, &forced)?),
        "ims" => user.ims.push(from_fields(fields, &forced)?),
        "keywords" => user.keywords.push(from_fields(fields, &forced)?),
        "languages" => user.languages.push(from_fields(fields, &forced)?),
        "locations" => user.locations.push(from_fields(fields, &forced)?),
        "name" => user.name.merge(from_fields::<UserName>(fields, &forced)?),
        "notes" => user.notes = Some(from_fields(fields, &forced)?),
        "organizations" => user.organizations.push(from_fields(fields, &forced)?),
        "phones" => user.phones.push(from_fields(fields, &forced)?),
        "posixAccounts" => user.posix_accounts.push(from_fields(fields, &forced)?),
        "relations" => user.relations.push(from_fields(fields, &forced)?),
        "sshPublicKeys" => user.ssh_public_keys.push(from_fields(fields, &forced)?),
        "websites" => user.websites.push(from_fields(fields, &forced)?),
        other => return Err(Error::unknown_attribute(other)),
      }
    }

    Ok(())
  }

  /// Sets the top level field called `name` from its textual `value`
  pub fn set_scalar(&self, name: &str, value: &str, user: &mut User) -> Result<()> {
    let canonical = user::ATTRIBUTES.canonical(name)?;
    let kind = user::SCALARS
      .iter()
      .find(|(field, _)| *field == canonical)
      .map(|(_, kind)| *kind)
      .ok_or_else(|| Error::unknown_attribute(name))?;

    match (canonical, kind) {
      ("password", _) => {
        user.password = Some(self.hasher.hash(value));
        user.hash_function = Some(self.hasher.hash_function().to_string());
      }
      ("recoveryPhone", _) if !value.is_empty() && !value.starts_with('+') => {
        return Err(Error::Format(ErrorMsg::from(MsgType::RecoveryPhonePrefix)));
      }
      (_, FieldKind::Boolean) => {
        let flag = parse_bool(canonical, value)?;
        let slot = bool_field(user, canonical).ok_or_else(|| Error::unknown_attribute(name))?;
        *slot = Some(flag);
        if !flag {
          user.force_send(canonical);
        }
      }
      _ if value.is_empty() && user::CLEARABLE.contains(&canonical) => {
        return self.clear_scalar(canonical, user);
      }
      _ => {
        let slot = text_field(user, canonical).ok_or_else(|| Error::unknown_attribute(name))?;
        *slot = Some(value.to_string());
      }
    }

    Ok(())
  }

  /// Sets the text field `canonical` to the empty string and marks it
  /// force-sent so the remote API clears it
  pub fn clear_scalar(&self, canonical: &str, user: &mut User) -> Result<()> {
    let slot = text_field(user, canonical).ok_or_else(|| Error::unknown_attribute(canonical))?;
    *slot = Some(String::new());
    user.force_send(canonical);

    Ok(())
  }
}

fn bool_field<'u>(user: &'u mut User, canonical: &str) -> Option<&'u mut Option<bool>> {
  match canonical {
    "archived" => Some(&mut user.archived),
    "changePasswordAtNextLogin" => Some(&mut user.change_password_at_next_login),
    "includeInGlobalAddressList" => Some(&mut user.include_in_global_address_list),
    "ipWhitelisted" => Some(&mut user.ip_whitelisted),
    "suspended" => Some(&mut user.suspended),
    _ => None,
  }
}

fn text_field<'u>(user: &'u mut User, canonical: &str) -> Option<&'u mut Option<String>> {
  match canonical {
    "familyName" => Some(&mut user.name.family_name),
    "givenName" => Some(&mut user.name.given_name),
    "orgUnitPath" => Some(&mut user.org_unit_path),
    "primaryEmail" => Some(&mut user.primary_email),
    "recoveryEmail" => Some(&mut user.recovery_email),
    "recoveryPhone" => Some(&mut user.recovery_phone),
    _ => None,
  }
}

/// One `:` separated group of a freeform string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group<'a> {
  /// `name:value`, `name~value` or `name~{value}`
  Scalar(&'a str, &'a str),
  /// `composite~body`
  Composite(&'a str, &'a str),
}

/// Splits `input` into groups. Braces are structure only inside a composite
/// body or around a `name~{value}` scalar; other values are taken verbatim
/// up to the next colon.
fn split_groups(input: &str) -> Result<Vec<Group<'_>>> {
  let mut groups = Vec::new();
  let mut rest = input;

  loop {
    let idx = rest
      .find(|c: char| c == ':' || c == '~')
      .ok_or_else(|| Error::malformed(MsgType::MissingAttributeValue))?;
    let name = &rest[..idx];
    let after = &rest[idx + 1..];

    let (group, end) = if rest[idx..].starts_with(':') {
      let end = after.find(':').unwrap_or(after.len());
      (Group::Scalar(name, &after[..end]), end)
    } else if user::composite(name).is_some() {
      let end = composite_body_end(after)?;
      (Group::Composite(name, &after[..end]), end)
    } else if let Some(inner) = after.strip_prefix('{') {
      let end = braced_value_end(inner)?;
      (Group::Scalar(name, &inner[..end]), end + 2)
    } else {
      let end = after.find(':').unwrap_or(after.len());
      (Group::Scalar(name, &after[..end]), end)
    };
    groups.push(group);

    match after.get(end..) {
      Some(tail) if tail.starts_with(':') => rest = &tail[1..],
      _ => break,
    }
  }

  Ok(groups)
}

/// Byte offset of the first colon outside braces, or the end of `body`
fn composite_body_end(body: &str) -> Result<usize> {
  let mut depth = 0usize;

  for (idx, c) in body.char_indices() {
    match c {
      '{' => depth += 1,
      '}' => {
        depth = depth
          .checked_sub(1)
          .ok_or_else(|| Error::malformed(MsgType::MalformedAttributeString))?
      }
      ':' if depth == 0 => return Ok(idx),
      _ => (),
    }
  }

  if depth != 0 {
    return Err(Error::malformed(MsgType::MalformedAttributeString));
  }

  Ok(body.len())
}

/// Byte offset of the `}` closing a braced scalar: the first one followed by a
/// colon or the end of input
fn braced_value_end(inner: &str) -> Result<usize> {
  inner
    .match_indices('}')
    .map(|(idx, _)| idx)
    .find(|idx| matches!(inner[idx + 1..].chars().next(), None | Some(':')))
    .ok_or_else(|| Error::malformed(MsgType::MalformedAttributeString))
}

/// Splits a composite body into its occurrences. An unbraced body is a single
/// occurrence.
fn split_occurrences(body: &str) -> Result<Vec<&str>> {
  if !body.starts_with('{') {
    if body.contains(|c: char| c == '{' || c == '}') {
      return Err(Error::malformed(MsgType::MalformedAttributeString));
    }
    return Ok(vec![body]);
  }

  let mut occurrences = Vec::new();
  let mut rest = body;

  while !rest.is_empty() {
    let inner = rest
      .strip_prefix('{')
      .ok_or_else(|| Error::malformed(MsgType::MalformedAttributeString))?;
    let end = inner
      .find('}')
      .ok_or_else(|| Error::malformed(MsgType::MalformedAttributeString))?;

    if inner[..end].contains('{') {
      return Err(Error::malformed(MsgType::MalformedAttributeString));
    }
    occurrences.push(&inner[..end]);
    rest = &inner[end + 1..];
  }

  Ok(occurrences)
}

/// Validates the `name~value` pairs of one occurrence into a JSON object,
/// collecting the boolean sub-fields set to false
fn occurrence_fields(
  spec: &CompositeSpec,
  occurrence: &str,
) -> Result<(Map<String, Value>, Vec<&'static str>)> {
  let tokens = occurrence.split('~').collect::<Vec<_>>();
  if tokens.len() % 2 != 0 {
    return Err(Error::malformed(MsgType::MalformedAttributeString));
  }

  let mut fields = Map::new();
  let mut forced = Vec::new();

  for (name, value) in tokens.into_iter().tuples() {
    let sub = spec
      .sub_field(name)
      .ok_or_else(|| Error::unknown_attribute(name))?;
    let converted = sub.kind.convert(sub.name, value)?;

    if converted == Value::Bool(false) {
      forced.push(sub.name);
    }
    fields.insert(sub.name.to_string(), converted);
  }

  Ok((fields, forced))
}

/// Writes `user` back out in the freeform language. Scalars come first, then
/// composites with every occurrence braced. The password is never written.
///
/// Values that the decoder could not read back, such as a sub-field holding
/// `~`, are an error.
pub fn encode_user(user: &User) -> Result<String> {
  let value = serde_json::to_value(user)?;
  let mut groups = Vec::new();

  for (field, _) in user::SCALARS {
    if *field == "password" {
      continue;
    }
    if let Some(v) = value.get(*field) {
      groups.push(encode_scalar(field, &text(v))?);
    }
  }

  for spec in user::COMPOSITES {
    let occurrences = match value.get(spec.field) {
      Some(Value::Array(items)) => items.iter().collect::<Vec<_>>(),
      Some(item @ Value::Object(_)) => vec![item],
      _ => continue,
    };

    let mut body = String::new();
    for occurrence in occurrences {
      if let Some(encoded) = encode_occurrence(spec, occurrence)? {
        body.push_str(&encoded);
      }
    }

    if !body.is_empty() {
      groups.push(format!("{}~{}", spec.key(), body));
    }
  }

  Ok(groups.join(":"))
}

fn encode_scalar(field: &str, value: &str) -> Result<String> {
  if !value.contains(':') {
    return Ok(format!("{}:{}", field, value));
  }
  if value.contains("}:") {
    return Err(Error::unwritable(field, value));
  }

  Ok(format!("{}~{{{}}}", field, value))
}

fn encode_occurrence(spec: &CompositeSpec, occurrence: &Value) -> Result<Option<String>> {
  let mut tokens = Vec::new();

  for sf in spec.sub_fields {
    if let Some(v) = occurrence.get(sf.name) {
      let v = text(v);
      if v.contains(|c: char| c == '~' || c == '{' || c == '}') {
        return Err(Error::unwritable(sf.name, &v));
      }
      tokens.push(format!("{}~{}", sf.name, v));
    }
  }

  if tokens.is_empty() {
    return Ok(None);
  }

  Ok(Some(format!("{{{}}}", tokens.join("~"))))
}

fn text(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
