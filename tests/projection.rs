use diradm::{projection_from_str, schema::ObjectType, Error};
use pretty_assertions::assert_eq;

fn user_projection(input: &str) -> diradm::Result<String> {
  projection_from_str(input, ObjectType::User.attributes())
}

#[test]
fn rewrite_single_attribute() {
  assert_eq!(user_projection("givenname").unwrap(), "givenName");
}

#[test]
fn rewrite_attribute_list_with_sub_fields() {
  assert_eq!(
    user_projection("primaryEMail~emails~name(christianname)").unwrap(),
    "primaryEmail,emails,name(givenName)"
  );
  assert_eq!(
    user_projection("name(firstname,surname)~ORGANISATIONS").unwrap(),
    "name(givenName,familyName),organizations"
  );
  assert_eq!(user_projection("*").unwrap(), "*");
}

#[test]
fn pass_through_custom_schema_paths() {
  for (input, expected) in [
    (
      "customschemas/EmploymentData/startDate",
      "customSchemas/EmploymentData/startDate",
    ),
    ("customSchemas/Unheard/Of", "customSchemas/Unheard/Of"),
    (
      "customschemas/EmploymentData/startDate~firstname",
      "customSchemas/EmploymentData/startDate,givenName",
    ),
  ]
  .iter()
  {
    assert_eq!(user_projection(input).unwrap(), *expected);
  }
}

#[test]
fn rewriting_is_idempotent() {
  for input in [
    "givenname",
    "primaryEMail~emails~name(christianname)",
    "customschemas/EmploymentData/startDate",
    "addresses(type,streetaddress)~phones",
  ]
  .iter()
  {
    let once = user_projection(input).unwrap();
    assert_eq!(user_projection(&once).unwrap(), once);
  }
}

#[test]
fn each_tilde_becomes_one_comma() {
  let pieces = ["primaryemail", "name(givenname)", "suspended", "orgunitpath"];
  let joined = user_projection(&pieces.join("~")).unwrap();

  let separately = pieces
    .iter()
    .map(|p| user_projection(p).unwrap())
    .collect::<Vec<_>>();

  assert_eq!(joined, separately.join(","));
}

#[test]
fn reject_unknown_identifiers() {
  match user_projection("primaryemail~shoesize") {
    Err(Error::UnknownAttribute(name)) => assert_eq!(name, "shoesize"),
    other => panic!("expected unknown attribute error, got {:?}", other),
  }

  assert_eq!(
    projection_from_str("email~members", ObjectType::Group.attributes())
      .unwrap_err()
      .to_string(),
    "members attribute is not recognized"
  );
}

#[test]
fn reject_illegal_characters() {
  let input = "name:givenname";
  let err = user_projection(input).unwrap_err();

  assert_eq!(
    err.to_string(),
    "malformed projection: unexpected character :"
  );

  let rendered = err.diagnostic(input);
  assert!(rendered.contains("error: malformed projection"));
  assert!(rendered.contains("name:givenname"));
}
