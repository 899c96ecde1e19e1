use super::{
  reader::RuneReader,
  token::{self, Token},
};
use std::ops::Range;

/// Source of `(Token, literal)` pairs consumed by the parsers
pub trait Scan {
  /// Returns the next token and its literal text
  fn scan(&mut self) -> (Token, String);

  /// Byte range of the token most recently returned by `scan`
  fn span(&self) -> Range<usize>;
}

/// Lexer for output-attribute (projection) strings such as
/// `primaryEmail~name(givenName)` or `customSchemas/EmploymentData/startDate`
#[derive(Debug)]
pub struct Lexer<'a> {
  reader: RuneReader<'a>,
  start: usize,
}

/// Creates a projection `Lexer` from a string slice
pub fn lexer_from_str(input: &str) -> Lexer {
  Lexer::new(input)
}

impl<'a> Lexer<'a> {
  /// Creates a new `Lexer` from a given `&str` input
  pub fn new(input: &'a str) -> Lexer<'a> {
    Lexer {
      reader: RuneReader::new(input),
      start: 0,
    }
  }
}

impl<'a> Scan for Lexer<'a> {
  fn scan(&mut self) -> (Token, String) {
    self.start = self.reader.offset();

    let ch = match self.reader.read() {
      Some(ch) => ch,
      None => return (Token::EOS, String::new()),
    };

    if ch.is_whitespace() {
      return (Token::WS, read_whitespace(&mut self.reader, ch));
    }

    if is_underscore_alone(&mut self.reader, ch) {
      return (Token::UNDERSCORE, ch.to_string());
    }

    if token::is_ident_start(ch) {
      return (Token::IDENT, read_identifier(&mut self.reader, ch, false));
    }

    let tok = match ch {
      '*' => Token::ASTERISK,
      ')' => Token::CLOSEBRACK,
      ',' => Token::COMMA,
      '/' => Token::FSLASH,
      '(' => Token::OPENBRACK,
      '~' => Token::TILDE,
      _ => Token::ILLEGAL,
    };

    (tok, ch.to_string())
  }

  fn span(&self) -> Range<usize> {
    self.start..self.reader.offset()
  }
}

/// Scanning mode of the query lexer
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
  /// Expecting an attribute name
  FieldName,
  /// Expecting a comparison operator
  Operator,
  /// Expecting a literal value
  Value,
}

/// Lexer for query strings such as `orgName=Engineering~isAdmin=true`.
/// Each `field op value` clause is scanned by stepping through field name,
/// operator and value modes.
#[derive(Debug)]
pub struct QueryLexer<'a> {
  reader: RuneReader<'a>,
  mode: Mode,
  start: usize,
}

/// Creates a `QueryLexer` from a string slice
pub fn query_lexer_from_str(input: &str) -> QueryLexer {
  QueryLexer::new(input)
}

impl<'a> QueryLexer<'a> {
  /// Creates a new `QueryLexer` from a given `&str` input
  pub fn new(input: &'a str) -> QueryLexer<'a> {
    QueryLexer {
      reader: RuneReader::new(input),
      mode: Mode::FieldName,
      start: 0,
    }
  }

  /// Current scanning mode
  pub fn mode(&self) -> Mode {
    self.mode
  }

  /// Returns to field name mode at the start of a new clause
  pub fn reset(&mut self) {
    self.mode = Mode::FieldName;
  }

  fn scan_field_name(&mut self, ch: char) -> (Token, String) {
    if ch.is_whitespace() {
      return (Token::WS, read_whitespace(&mut self.reader, ch));
    }

    if is_underscore_alone(&mut self.reader, ch) {
      return (Token::UNDERSCORE, ch.to_string());
    }

    if token::is_ident_start(ch) {
      let ident = read_identifier(&mut self.reader, ch, true);
      self.mode = Mode::Operator;
      return (Token::IDENT, ident);
    }

    match token::lookup_symbol(ch) {
      Some(tok) => (tok, ch.to_string()),
      None => (Token::ILLEGAL, ch.to_string()),
    }
  }

  fn scan_operator(&mut self, ch: char) -> (Token, String) {
    if ch.is_whitespace() {
      return (Token::WS, read_whitespace(&mut self.reader, ch));
    }

    let mut op = ch.to_string();

    while let Some(next) = self.reader.read() {
      if !token::is_operator(next) {
        self.reader.unread();
        break;
      }
      op.push(next);
    }

    self.mode = Mode::Value;
    (Token::OP, op)
  }

  fn scan_value(&mut self, ch: char) -> (Token, String) {
    if ch.is_whitespace() {
      return (Token::WS, read_whitespace(&mut self.reader, ch));
    }

    let mut value = ch.to_string();

    while let Some(next) = self.reader.read() {
      if next == '~' {
        self.reader.unread();
        break;
      }
      value.push(next);
    }

    (Token::VALUE, value)
  }
}

impl<'a> Scan for QueryLexer<'a> {
  fn scan(&mut self) -> (Token, String) {
    self.start = self.reader.offset();

    let ch = match self.reader.read() {
      Some(ch) => ch,
      None => return (Token::EOS, String::new()),
    };

    if ch == '~' {
      return (Token::TILDE, ch.to_string());
    }

    match self.mode {
      Mode::FieldName => self.scan_field_name(ch),
      Mode::Operator => self.scan_operator(ch),
      Mode::Value => self.scan_value(ch),
    }
  }

  fn span(&self) -> Range<usize> {
    self.start..self.reader.offset()
  }
}

fn read_whitespace(reader: &mut RuneReader, first: char) -> String {
  let mut ws = first.to_string();

  while let Some(ch) = reader.read() {
    if !ch.is_whitespace() {
      reader.unread();
      break;
    }
    ws.push(ch);
  }

  ws
}

fn read_identifier(reader: &mut RuneReader, first: char, allow_dot: bool) -> String {
  let mut ident = first.to_string();

  while let Some(ch) = reader.read() {
    if !(is_ident_continue(ch) || (allow_dot && ch == '.')) {
      reader.unread();
      break;
    }
    ident.push(ch);
  }

  ident
}

// An underscore only stands alone when it cannot continue into an identifier
fn is_underscore_alone(reader: &mut RuneReader, ch: char) -> bool {
  if ch != '_' {
    return false;
  }

  let next = reader.read();
  reader.unread();

  !matches!(next, Some(c) if is_ident_continue(c))
}

fn is_ident_continue(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}
