//! # diradm
//!
//! Input languages of a directory administration tool, and the builders that
//! turn them into typed request payloads.
//!
//! Administrators describe directory objects (users, groups, group members,
//! group settings, organizational units, aliases) with a few compact
//! languages. This crate parses and rewrites them; sending the resulting
//! requests is left to the caller.
//!
//! ## Languages
//!
//! - **Projections** select which fields of an object to return:
//!   `primaryEMail~emails~name(christianname)` becomes
//!   `primaryEmail,emails,name(givenName)`. `~` separates fields, parentheses
//!   select sub-fields and `customSchemas/Schema/field` paths pass through
//!   untouched.
//! - **Queries** filter objects: `isadmin=True~orgName=Engineering` becomes
//!   `isAdmin=true orgName=Engineering`. Dotted field names address custom
//!   schemas and are not rewritten.
//! - **Freeform attribute strings** describe a user in one line:
//!   `primaryemail:jane@example.com:address~{streetaddress~1 Main St~type~home}`.
//!
//! Every attribute name is matched case-insensitively against a fixed
//! per-object table and rewritten to the canonical name the remote API uses.
//! Enumerated values (address types, roles, delivery settings, ...) are
//! validated and canonicalized the same way.
//!
//! ## Batch input
//!
//! The [`record`] module validates a header row and builds one payload per
//! row. [`batch`] reads rows from CSV or newline-delimited JSON.
//!
//! ## Usage
//!
//! ```
//! use diradm::{projection_from_str, query_from_str, schema::ObjectType};
//!
//! let projection =
//!   projection_from_str("primaryEMail~emails~name(christianname)", ObjectType::User.attributes())
//!     .unwrap();
//! assert_eq!(projection, "primaryEmail,emails,name(givenName)");
//!
//! let query = query_from_str(
//!   "isadmin=True",
//!   ObjectType::User.query_attributes().unwrap(),
//! )
//! .unwrap();
//! assert_eq!(query, "isAdmin=true");
//! ```
//!
//! Errors render as plain messages, or with
//! [`Error::diagnostic`](error::Error::diagnostic) as an annotated snippet
//! of the offending input.

#![warn(missing_docs)]

/// Readers that turn CSV and JSON lines input into payloads
pub mod batch;
/// Error kinds and messages
pub mod error;
/// Freeform user attribute language
pub mod freeform;
/// Lexers for the projection and query languages
pub mod lexer;
/// Parsers rewriting projections and queries
pub mod parser;
/// Password hashing used by the user builders
pub mod password;
/// Typed request payloads
pub mod payload;
/// Character reader with one character of pushback
pub mod reader;
/// Header validation and per-row payload building
pub mod record;
/// Attribute and enum tables per object type
pub mod schema;
/// Token tags shared by the lexers
pub mod token;

#[doc(inline)]
pub use self::{
  error::{Error, Result},
  freeform::{encode_user, FreeformDecoder},
  lexer::{lexer_from_str, query_lexer_from_str},
  parser::{projection_from_str, query_from_str},
  password::{PasswordHasher, Sha512Hasher},
  record::{BuildMode, BuiltRow, HeaderMap, RecordBuilder},
  schema::ObjectType,
  token::Token,
};
