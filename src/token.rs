use std::fmt;

/// Token tag shared by the projection and query lexers. The literal text of a
/// token travels alongside the tag.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Token {
  /// Illegal character
  ILLEGAL,
  /// End of input
  EOS,
  /// Run of whitespace
  WS,

  /// Identifier
  IDENT,
  /// Query value
  VALUE,
  /// Query comparison operator
  OP,

  /// Asterisk '*'
  ASTERISK,
  /// Backslash '\'
  BSLASH,
  /// Closing parend ')'
  CLOSEBRACK,
  /// Closing square bracket ']'
  CLOSESQBRACK,
  /// Colon ':'
  COLON,
  /// Comma ','
  COMMA,
  /// Equals '='
  EQUALS,
  /// Forward slash '/'
  FSLASH,
  /// Greater than '>'
  GT,
  /// Less than '<'
  LT,
  /// Opening parend '('
  OPENBRACK,
  /// Opening square bracket '['
  OPENSQBRACK,
  /// Single quote '''
  SINGLEQUOTE,
  /// Expression separator '~'
  TILDE,
  /// Isolated underscore '_'
  UNDERSCORE,
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Token::ILLEGAL => write!(f, "ILLEGAL"),
      Token::EOS => write!(f, "EOS"),
      Token::WS => write!(f, "WS"),
      Token::IDENT => write!(f, "IDENT"),
      Token::VALUE => write!(f, "VALUE"),
      Token::OP => write!(f, "OP"),
      Token::ASTERISK => write!(f, "*"),
      Token::BSLASH => write!(f, "\\"),
      Token::CLOSEBRACK => write!(f, ")"),
      Token::CLOSESQBRACK => write!(f, "]"),
      Token::COLON => write!(f, ":"),
      Token::COMMA => write!(f, ","),
      Token::EQUALS => write!(f, "="),
      Token::FSLASH => write!(f, "/"),
      Token::GT => write!(f, ">"),
      Token::LT => write!(f, "<"),
      Token::OPENBRACK => write!(f, "("),
      Token::OPENSQBRACK => write!(f, "["),
      Token::SINGLEQUOTE => write!(f, "'"),
      Token::TILDE => write!(f, "~"),
      Token::UNDERSCORE => write!(f, "_"),
    }
  }
}

/// Returns the single character token for `ch`, if there is one
pub fn lookup_symbol(ch: char) -> Option<Token> {
  match ch {
    '*' => Some(Token::ASTERISK),
    '\\' => Some(Token::BSLASH),
    ')' => Some(Token::CLOSEBRACK),
    ']' => Some(Token::CLOSESQBRACK),
    ':' => Some(Token::COLON),
    ',' => Some(Token::COMMA),
    '=' => Some(Token::EQUALS),
    '/' => Some(Token::FSLASH),
    '>' => Some(Token::GT),
    '<' => Some(Token::LT),
    '(' => Some(Token::OPENBRACK),
    '[' => Some(Token::OPENSQBRACK),
    '\'' => Some(Token::SINGLEQUOTE),
    '~' => Some(Token::TILDE),
    '_' => Some(Token::UNDERSCORE),
    _ => None,
  }
}

/// Whether `ch` may start an identifier
pub fn is_ident_start(ch: char) -> bool {
  ch.is_alphabetic() || ch == '_'
}

/// Whether `ch` belongs to the query operator set
pub fn is_operator(ch: char) -> bool {
  matches!(ch, '=' | ':' | '>' | '<')
}
