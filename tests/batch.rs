use diradm::{
  batch::{self, InputFormat},
  payload::Payload,
  BuildMode, ObjectType, RecordBuilder, Sha512Hasher,
};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs::File;

#[test]
fn build_users_from_csv() {
  let file = File::open("tests/fixtures/users.csv").unwrap();
  let builder = RecordBuilder::new(ObjectType::User, BuildMode::Update, &Sha512Hasher);
  let rows = batch::read(InputFormat::Csv, file, &builder).unwrap();

  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].key.as_deref(), Some("jane@example.com"));

  match &rows[0].payload {
    Payload::User(u) => {
      assert_eq!(u.name.given_name.as_deref(), Some("Jane"));
      assert_eq!(u.name.family_name.as_deref(), Some("Smith"));
      assert_eq!(u.suspended, Some(false));
      assert!(u.force_send_fields.contains("suspended"));
      assert_eq!(u.addresses[0].postal_code.as_deref(), Some("LS2 1ND"));
      assert_eq!(u.phones[0].primary, Some(true));
    }
    other => panic!("unexpected payload {:?}", other),
  }

  match &rows[1].payload {
    Payload::User(u) => {
      assert_eq!(u.suspended, Some(true));
      assert_eq!(u.recovery_phone.as_deref(), Some(""));
      assert_eq!(
        u.force_send_fields.iter().collect::<Vec<_>>(),
        vec!["recoveryPhone"]
      );
      assert!(u.addresses.is_empty());
    }
    other => panic!("unexpected payload {:?}", other),
  }
}

#[test]
fn canonicalize_member_settings() {
  let file = File::open("tests/fixtures/members.csv").unwrap();
  let builder = RecordBuilder::new(ObjectType::Member, BuildMode::Create, &Sha512Hasher);
  let rows = batch::read(InputFormat::Csv, file, &builder).unwrap();

  let settings = rows
    .iter()
    .map(|row| match &row.payload {
      Payload::Member(m) => (m.role.clone(), m.delivery_settings.clone()),
      other => panic!("unexpected payload {:?}", other),
    })
    .collect::<Vec<_>>();

  assert_eq!(
    settings,
    vec![
      (Some("OWNER".to_string()), Some("ALL_MAIL".to_string())),
      (Some("MEMBER".to_string()), Some("DIGEST".to_string())),
    ]
  );
}

#[test]
fn reject_unknown_delivery_setting() {
  let input = indoc!(
    "
    email,delivery_settings
    carol@example.com,Unknown
  "
  );
  let builder = RecordBuilder::new(ObjectType::Member, BuildMode::Create, &Sha512Hasher);

  assert_eq!(
    batch::read(InputFormat::Csv, input.as_bytes(), &builder)
      .unwrap_err()
      .to_string(),
    "row 1: Unknown is not a valid delivery setting"
  );
}

#[test]
fn build_groups_from_json_lines() {
  let file = File::open("tests/fixtures/groups.jsonl").unwrap();
  let builder = RecordBuilder::new(ObjectType::Group, BuildMode::Create, &Sha512Hasher);
  let rows = batch::read(InputFormat::JsonLines, file, &builder).unwrap();

  let payloads = rows
    .iter()
    .map(|row| serde_json::to_value(&row.payload).unwrap())
    .collect::<Vec<_>>();

  assert_eq!(
    payloads,
    vec![
      serde_json::json!({
        "description": "Builds things",
        "email": "eng@example.com",
        "name": "Engineering",
      }),
      serde_json::json!({
        "description": "",
        "email": "ops@example.com",
        "name": "Operations",
      }),
    ]
  );
  assert!(rows[1].payload.force_send_fields().contains("description"));
}

#[test]
fn update_requires_the_key_column() {
  let input = indoc!(
    "
    name,description
    Engineering,Builds things
  "
  );
  let builder = RecordBuilder::new(ObjectType::Group, BuildMode::Update, &Sha512Hasher);

  assert_eq!(
    batch::read(InputFormat::Csv, input.as_bytes(), &builder)
      .unwrap_err()
      .to_string(),
    "row 1: groupKey attribute must be provided"
  );
}
