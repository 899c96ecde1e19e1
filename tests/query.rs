use diradm::{query_from_str, schema::ObjectType, Error};
use pretty_assertions::assert_eq;

fn user_query(input: &str) -> diradm::Result<String> {
  let attributes = ObjectType::User
    .query_attributes()
    .expect("users can be queried");
  query_from_str(input, attributes)
}

#[test]
fn lowercase_boolean_values() {
  assert_eq!(user_query("isadmin=True").unwrap(), "isAdmin=true");
  assert_eq!(user_query("IsSuspended=FALSE").unwrap(), "isSuspended=false");
}

#[test]
fn leave_other_values_untouched() {
  for (input, expected) in [
    ("orgName=True Story", "orgName=True Story"),
    ("orgTitle:'Manager'", "orgTitle:'Manager'"),
    ("givenname:Jo*", "givenName:Jo*"),
    ("orgunitpath=/Sales/EMEA", "orgUnitPath=/Sales/EMEA"),
  ]
  .iter()
  {
    assert_eq!(user_query(input).unwrap(), *expected);
  }
}

#[test]
fn tilde_separates_clauses() {
  assert_eq!(
    user_query("orgName=Engineering~orgTitle:Manager").unwrap(),
    "orgName=Engineering orgTitle:Manager"
  );
  assert_eq!(
    user_query("firstname:Jane~lastname:Smith~isadmin=TRUE").unwrap(),
    "givenName:Jane familyName:Smith isAdmin=true"
  );
}

#[test]
fn pass_through_dotted_custom_schema_fields() {
  assert_eq!(
    user_query("EmploymentData.projects:'GeneGnomes'~isadmin=true").unwrap(),
    "EmploymentData.projects:'GeneGnomes' isAdmin=true"
  );
}

#[test]
fn reject_unknown_attributes() {
  assert_eq!(
    user_query("wrongattr:Value").unwrap_err().to_string(),
    "wrongattr attribute is not recognized"
  );

  match user_query("isadmin=true~shoesize>9") {
    Err(Error::UnknownAttribute(name)) => assert_eq!(name, "shoesize"),
    other => panic!("expected unknown attribute error, got {:?}", other),
  }
}

#[test]
fn group_queries() {
  let attributes = ObjectType::Group.query_attributes().unwrap();

  assert_eq!(
    query_from_str("Email:admin*~memberkey=jane@example.com", attributes).unwrap(),
    "email:admin* memberKey=jane@example.com"
  );
  assert!(ObjectType::OrgUnit.query_attributes().is_none());
}

#[test]
fn reject_illegal_field_characters() {
  let err = user_query("#isadmin=true").unwrap_err();

  assert_eq!(err.to_string(), "malformed query: unexpected character #");
  assert!(err.diagnostic("#isadmin=true").contains("malformed query"));
}

#[test]
fn whitespace_around_operators_is_dropped() {
  assert_eq!(user_query("isadmin = True").unwrap(), "isAdmin=true");
  assert_eq!(
    user_query("orgName =  True Story~givenname:Jo").unwrap(),
    "orgName=True Story givenName:Jo"
  );
}
