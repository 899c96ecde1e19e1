use codespan_reporting::{
  diagnostic::{Diagnostic, Label},
  files::SimpleFiles,
  term,
};
use displaydoc::Display;
use std::{fmt, io, ops::Range, result};

/// Alias for `Result` with an error of type `diradm::Error`
pub type Result<T> = result::Result<T, Error>;

/// Human-readable error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMsg {
  short: String,
  extended: Option<String>,
}

impl ErrorMsg {
  /// Creates a message from arbitrary text
  pub fn new(short: impl Into<String>) -> Self {
    ErrorMsg {
      short: short.into(),
      extended: None,
    }
  }

  /// Attaches detail that is printed after the short message
  pub fn with_extended(mut self, extended: impl Into<String>) -> Self {
    self.extended = Some(extended.into());
    self
  }

  /// Short form of the message
  pub fn short(&self) -> &str {
    &self.short
  }
}

impl fmt::Display for ErrorMsg {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match &self.extended {
      Some(extended) => write!(f, "{}: {}", self.short, extended),
      None => write!(f, "{}", self.short),
    }
  }
}

/// Fixed error messages
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MsgType {
  // Projection and query languages
  MalformedProjection,
  MalformedQuery,

  // Freeform attribute language
  MalformedAttributeString,
  MissingAttributeValue,
  RecoveryPhonePrefix,

  // Batch input
  MalformedHeader,
  EmptyHeader,
  MalformedJsonRow,
}

impl From<MsgType> for ErrorMsg {
  fn from(mt: MsgType) -> ErrorMsg {
    match mt {
      MsgType::MalformedProjection => ErrorMsg::new("malformed projection"),
      MsgType::MalformedQuery => ErrorMsg::new("malformed query"),
      MsgType::MalformedAttributeString => ErrorMsg::new("malformed attribute string"),
      MsgType::MissingAttributeValue => ErrorMsg::new("malformed attribute string")
        .with_extended("attribute name is not followed by a value"),
      MsgType::RecoveryPhonePrefix => {
        ErrorMsg::new("recovery phone number must start with '+'")
      }
      MsgType::MalformedHeader => ErrorMsg::new("malformed header row"),
      MsgType::EmptyHeader => ErrorMsg::new("malformed header row").with_extended("no columns"),
      MsgType::MalformedJsonRow => {
        ErrorMsg::new("malformed row").with_extended("expected a JSON object")
      }
    }
  }
}

/// Errors produced while rewriting or decoding user input
#[derive(Debug, Display)]
pub enum Error {
  /// {msg}
  Syntax {
    /// Error message
    msg: ErrorMsg,
    /// Byte range of the offending input, when known
    span: Option<Range<usize>>,
  },
  /// {0} attribute is not recognized
  UnknownAttribute(String),
  /// {value} is not a valid {kind}
  UnknownFlagValue {
    /// Offending input
    value: String,
    /// Name of the enumerated domain
    kind: &'static str,
  },
  /// {0}
  Format(ErrorMsg),
  /// {0} attribute must be provided
  MissingAttribute(String),
  /// row {row}: {source}
  Row {
    /// 1-based row number, header excluded
    row: usize,
    /// Underlying error
    source: Box<Error>,
  },
  /// error reading delimited input: {0}
  Csv(csv::Error),
  /// error reading JSON input: {0}
  Json(serde_json::Error),
  /// {0}
  Io(io::Error),
}

impl std::error::Error for Error {}

impl Error {
  pub(crate) fn syntax(mt: MsgType, detail: impl Into<String>, span: Range<usize>) -> Self {
    Error::Syntax {
      msg: ErrorMsg::from(mt).with_extended(detail),
      span: Some(span),
    }
  }

  pub(crate) fn malformed(mt: MsgType) -> Self {
    Error::Syntax {
      msg: mt.into(),
      span: None,
    }
  }

  pub(crate) fn unknown_attribute(name: &str) -> Self {
    Error::UnknownAttribute(name.to_string())
  }

  pub(crate) fn not_a_number(field: &str) -> Self {
    Error::Format(ErrorMsg::new(format!("{} must be a number", field)))
  }

  pub(crate) fn unwritable(field: &str, value: &str) -> Self {
    Error::Format(ErrorMsg::new(format!(
      "{:?} in {} cannot be written as a freeform string",
      value, field
    )))
  }

  pub(crate) fn not_a_boolean(field: &str) -> Self {
    Error::Format(ErrorMsg::new(format!("{} must be true or false", field)))
  }

  pub(crate) fn at_row(self, row: usize) -> Self {
    Error::Row {
      row,
      source: Box::new(self),
    }
  }

  /// Renders the error against the input it was produced from. Errors that
  /// carry a span are printed as an annotated diagnostic; all others fall back
  /// to their `Display` form.
  pub fn diagnostic(&self, input: &str) -> String {
    let (msg, span) = match self {
      Error::Syntax {
        msg,
        span: Some(span),
      } => (msg, span.clone()),
      _ => return self.to_string(),
    };

    let mut files = SimpleFiles::new();
    let file_id = files.add("input", input);
    let config = term::Config::default();
    let mut buffer = Vec::new();
    let mut writer = term::termcolor::NoColor::new(&mut buffer);

    let end = span.end.min(input.len());
    let start = span.start.min(end);

    let diagnostic = Diagnostic::error()
      .with_message(msg.short())
      .with_labels(vec![
        Label::primary(file_id, start..end).with_message(msg.to_string())
      ]);

    if term::emit(&mut writer, &config, &files, &diagnostic).is_err() {
      return self.to_string();
    }

    String::from_utf8(buffer).unwrap_or_else(|_| self.to_string())
  }
}

impl From<csv::Error> for Error {
  fn from(e: csv::Error) -> Self {
    Error::Csv(e)
  }
}

impl From<serde_json::Error> for Error {
  fn from(e: serde_json::Error) -> Self {
    Error::Json(e)
  }
}

impl From<io::Error> for Error {
  fn from(e: io::Error) -> Self {
    Error::Io(e)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn verify_messages() {
    assert_eq!(
      Error::unknown_attribute("wrongattr").to_string(),
      "wrongattr attribute is not recognized"
    );
    assert_eq!(
      Error::UnknownFlagValue {
        value: "wrong".into(),
        kind: "address type"
      }
      .to_string(),
      "wrong is not a valid address type"
    );
    assert_eq!(
      Error::malformed(MsgType::MalformedAttributeString).to_string(),
      "malformed attribute string"
    );
    assert_eq!(
      Error::not_a_number("fullTimeEquivalent").to_string(),
      "fullTimeEquivalent must be a number"
    );
    assert_eq!(
      Error::unknown_attribute("foo").at_row(3).to_string(),
      "row 3: foo attribute is not recognized"
    );
  }

  #[test]
  fn verify_diagnostic() {
    let e = Error::syntax(MsgType::MalformedProjection, "unexpected character %", 5..6);
    let rendered = e.diagnostic("name(%)");

    assert!(rendered.contains("error: malformed projection"));
    assert!(rendered.contains("unexpected character %"));
  }
}
