use super::{
  error::{Error, MsgType, Result},
  lexer::{Lexer, QueryLexer, Scan},
  schema::{user::CUSTOM_SCHEMAS, AttributeMap},
  token::Token,
};

// Drives `lexer` to EOS, skipping whitespace and rejecting any tag outside
// `accepted`. Every accepted token is handed to `rewrite`, whose result is
// emitted as the next fragment.
fn translate<S, F>(
  lexer: &mut S,
  accepted: &[Token],
  malformed: MsgType,
  mut rewrite: F,
) -> Result<Vec<String>>
where
  S: Scan,
  F: FnMut(&mut S, Token, String) -> Result<String>,
{
  let mut fragments = Vec::new();

  loop {
    let (tok, literal) = lexer.scan();

    match tok {
      Token::EOS => break,
      Token::WS => continue,
      _ if accepted.contains(&tok) => fragments.push(rewrite(lexer, tok, literal)?),
      _ => {
        return Err(Error::syntax(
          malformed,
          format!("unexpected character {}", literal),
          lexer.span(),
        ))
      }
    }
  }

  Ok(fragments)
}

const PROJECTION_TOKENS: &[Token] = &[
  Token::IDENT,
  Token::ASTERISK,
  Token::OPENBRACK,
  Token::CLOSEBRACK,
  Token::COMMA,
  Token::FSLASH,
  Token::TILDE,
];

const QUERY_TOKENS: &[Token] = &[
  Token::ASTERISK,
  Token::BSLASH,
  Token::COLON,
  Token::COMMA,
  Token::CLOSEBRACK,
  Token::CLOSESQBRACK,
  Token::FSLASH,
  Token::GT,
  Token::EQUALS,
  Token::IDENT,
  Token::LT,
  Token::OP,
  Token::OPENBRACK,
  Token::OPENSQBRACK,
  Token::TILDE,
  Token::VALUE,
];

/// Rewrites an output-attribute string into the remote API's projection
/// syntax, validating identifiers against an attribute map
pub struct ProjectionParser<'a> {
  lexer: Lexer<'a>,
  attributes: &'a AttributeMap,
  in_custom_schema: bool,
}

impl<'a> ProjectionParser<'a> {
  /// Creates a new `ProjectionParser` over `input`
  pub fn new(input: &'a str, attributes: &'a AttributeMap) -> ProjectionParser<'a> {
    ProjectionParser {
      lexer: Lexer::new(input),
      attributes,
      in_custom_schema: false,
    }
  }

  /// Returns the output fragments in source order. Their concatenation is the
  /// rewritten projection.
  pub fn parse(&mut self) -> Result<Vec<String>> {
    let attributes = self.attributes;
    let in_custom_schema = &mut self.in_custom_schema;

    translate(
      &mut self.lexer,
      PROJECTION_TOKENS,
      MsgType::MalformedProjection,
      |_, tok, literal| match tok {
        Token::IDENT if *in_custom_schema => Ok(literal),
        Token::IDENT => {
          let canonical = attributes.canonical(&literal)?;
          if canonical == CUSTOM_SCHEMAS {
            *in_custom_schema = true;
          }
          Ok(canonical.to_string())
        }
        Token::TILDE => {
          *in_custom_schema = false;
          Ok(",".to_string())
        }
        _ => Ok(literal),
      },
    )
  }
}

/// Rewrites a query string into the remote API's query syntax, validating
/// attribute names against a query-attribute map
pub struct QueryParser<'a> {
  lexer: QueryLexer<'a>,
  attributes: &'a AttributeMap,
}

impl<'a> QueryParser<'a> {
  /// Creates a new `QueryParser` over `input`
  pub fn new(input: &'a str, attributes: &'a AttributeMap) -> QueryParser<'a> {
    QueryParser {
      lexer: QueryLexer::new(input),
      attributes,
    }
  }

  /// Returns the output fragments in source order. Their concatenation is the
  /// rewritten query.
  pub fn parse(&mut self) -> Result<Vec<String>> {
    let attributes = self.attributes;

    translate(
      &mut self.lexer,
      QUERY_TOKENS,
      MsgType::MalformedQuery,
      |lexer, tok, literal| match tok {
        // dotted names address custom schema fields
        Token::IDENT if literal.contains('.') => Ok(literal),
        Token::IDENT => Ok(attributes.canonical(&literal)?.to_string()),
        Token::VALUE => {
          let lower = literal.to_lowercase();
          if lower == "true" || lower == "false" {
            Ok(lower)
          } else {
            Ok(literal)
          }
        }
        Token::TILDE => {
          lexer.reset();
          Ok(" ".to_string())
        }
        _ => Ok(literal),
      },
    )
  }
}

/// Rewrites a projection string using the given attribute map
///
/// # Example
///
/// ```
/// use diradm::{projection_from_str, schema::ObjectType};
///
/// let projection =
///   projection_from_str("primaryEMail~name(christianname)", ObjectType::User.attributes());
///
/// assert_eq!(projection.unwrap(), "primaryEmail,name(givenName)");
/// ```
pub fn projection_from_str(input: &str, attributes: &AttributeMap) -> Result<String> {
  ProjectionParser::new(input, attributes)
    .parse()
    .map(|fragments| fragments.concat())
}

/// Rewrites a query string using the given query-attribute map
///
/// # Example
///
/// ```
/// use diradm::{query_from_str, schema::ObjectType};
///
/// let attributes = ObjectType::User.query_attributes().unwrap();
///
/// assert_eq!(query_from_str("isadmin=True", attributes).unwrap(), "isAdmin=true");
/// ```
pub fn query_from_str(input: &str, attributes: &AttributeMap) -> Result<String> {
  QueryParser::new(input, attributes)
    .parse()
    .map(|fragments| fragments.concat())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::ObjectType;
  use pretty_assertions::assert_eq;

  fn user_projection(input: &str) -> Result<String> {
    projection_from_str(input, ObjectType::User.attributes())
  }

  fn user_query(input: &str) -> Result<String> {
    query_from_str(input, ObjectType::User.query_attributes().unwrap())
  }

  #[test]
  fn verify_projection_rewrites() -> Result<()> {
    assert_eq!(user_projection("givenname")?, "givenName");
    assert_eq!(
      user_projection("primaryEMail~emails~name(christianname)")?,
      "primaryEmail,emails,name(givenName)"
    );
    assert_eq!(
      user_projection("customschemas/EmploymentData/startDate")?,
      "customSchemas/EmploymentData/startDate"
    );
    assert_eq!(
      user_projection("name(givenname, familyname)~addresses(*)")?,
      "name(givenName,familyName),addresses(*)"
    );

    Ok(())
  }

  #[test]
  fn verify_projection_fragments() -> Result<()> {
    let fragments =
      ProjectionParser::new("name(firstname)~id", ObjectType::User.attributes()).parse()?;

    assert_eq!(fragments, vec!["name", "(", "givenName", ")", ",", "id"]);

    Ok(())
  }

  #[test]
  fn verify_custom_schema_state_resets_at_tilde() -> Result<()> {
    assert_eq!(
      user_projection("customSchemas/Anything/Here~ORGUNITPATH")?,
      "customSchemas/Anything/Here,orgUnitPath"
    );

    match user_projection("customSchemas/Anything~Here") {
      Err(Error::UnknownAttribute(name)) => assert_eq!(name, "Here"),
      other => panic!("expected unknown attribute error, got {:?}", other),
    }

    Ok(())
  }

  #[test]
  fn verify_projection_rejects() {
    assert_eq!(
      user_projection("wrongattr").unwrap_err().to_string(),
      "wrongattr attribute is not recognized"
    );
    assert_eq!(
      user_projection("name:givenname").unwrap_err().to_string(),
      "malformed projection: unexpected character :"
    );
    assert!(matches!(
      user_projection("name~_"),
      Err(Error::Syntax { span: Some(_), .. })
    ));
  }

  #[test]
  fn verify_projection_is_idempotent() -> Result<()> {
    for input in [
      "givenname",
      "primaryEMail~emails~name(christianname)",
      "customschemas/EmploymentData/startDate",
      "organisations(title, department)~suspended",
    ]
    .iter()
    {
      let once = user_projection(input)?;
      assert_eq!(user_projection(&once)?, once);
    }

    Ok(())
  }

  #[test]
  fn verify_tilde_maps_to_comma() -> Result<()> {
    let input = "id~name(fullname)~emails~customschemas/A/b";
    let output = user_projection(input)?;

    let pieces = input.split('~').map(user_projection).collect::<Result<Vec<_>>>()?;

    assert_eq!(output.matches(',').count(), input.matches('~').count());
    assert_eq!(output, pieces.join(","));

    Ok(())
  }

  #[test]
  fn verify_query_rewrites() -> Result<()> {
    assert_eq!(user_query("isadmin=True")?, "isAdmin=true");
    assert_eq!(
      user_query("orgName=Engineering~orgTitle:Manager")?,
      "orgName=Engineering orgTitle:Manager"
    );
    assert_eq!(
      user_query("EmploymentData.jobLevel>=5~givenname:'Mary Jo'")?,
      "EmploymentData.jobLevel>=5 givenName:'Mary Jo'"
    );
    assert_eq!(user_query("isSuspended=FALSE")?, "isSuspended=false");
    assert_eq!(user_query("orgName=Trueblood")?, "orgName=Trueblood");

    Ok(())
  }

  #[test]
  fn verify_query_fragments() -> Result<()> {
    let attributes = ObjectType::Group.query_attributes().unwrap();
    let fragments = QueryParser::new("Email:sales*~name='Sales Team'", attributes).parse()?;

    assert_eq!(
      fragments,
      vec!["email", ":", "sales*", " ", "name", "=", "'Sales Team'"]
    );

    Ok(())
  }

  #[test]
  fn verify_query_rejects() {
    assert_eq!(
      user_query("wrongattr:Value").unwrap_err().to_string(),
      "wrongattr attribute is not recognized"
    );
    assert_eq!(
      user_query("9lives=true").unwrap_err().to_string(),
      "malformed query: unexpected character 9"
    );
  }
}
