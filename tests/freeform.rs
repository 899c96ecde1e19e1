use diradm::{
  encode_user,
  payload::{User, UserAddress},
  Error, FreeformDecoder, PasswordHasher, Sha512Hasher,
};
use pretty_assertions::assert_eq;

fn decode(input: &str) -> diradm::Result<User> {
  let mut user = User::default();
  FreeformDecoder::new(&Sha512Hasher).decode(input, &mut user)?;
  Ok(user)
}

#[test]
fn decode_full_user() {
  let user = decode(
    "primaryemail:jane@example.com:name~givenname~Jane~familyname~Smith:\
     address~{streetaddress~1 Main St~locality~Oxford~type~home}{streetaddress~2 High St~type~work}:\
     organisation~{name~Acme~title~Engineer~fulltimeequivalent~100000~primary~true}:\
     password:hunter2:changepasswordatnextlogin:true",
  )
  .unwrap();

  assert_eq!(user.primary_email.as_deref(), Some("jane@example.com"));
  assert_eq!(user.name.given_name.as_deref(), Some("Jane"));
  assert_eq!(user.name.family_name.as_deref(), Some("Smith"));
  assert_eq!(
    user
      .addresses
      .iter()
      .map(|a| a.street_address.as_deref().unwrap_or_default())
      .collect::<Vec<_>>(),
    vec!["1 Main St", "2 High St"]
  );
  assert_eq!(user.organizations[0].full_time_equivalent, Some(100000));
  assert_eq!(user.change_password_at_next_login, Some(true));
  assert_eq!(user.password, Some(Sha512Hasher.hash("hunter2")));
  assert_eq!(user.hash_function.as_deref(), Some(Sha512Hasher.hash_function()));
}

#[test]
fn decode_address_with_mixed_case_sub_fields() {
  let user = decode(
    "address~{StreetAddress~201 Arbour Avenue~LOCALITY~Leeds~postalcode~LS2 1ND~type~HOME}",
  )
  .unwrap();

  assert_eq!(
    user.addresses,
    vec![UserAddress {
      street_address: Some("201 Arbour Avenue".into()),
      locality: Some("Leeds".into()),
      postal_code: Some("LS2 1ND".into()),
      r#type: Some("home".into()),
      ..Default::default()
    }]
  );
}

#[test]
fn reject_enum_values_outside_their_domain() {
  assert_eq!(
    decode("address~{streetaddress~201 Arbour Avenue~locality~Leeds~postalcode~LS2 1ND~type~wrong}")
      .unwrap_err()
      .to_string(),
    "wrong is not a valid address type"
  );

  match decode("phone~{value~+441134960000~type~pigeon}") {
    Err(Error::UnknownFlagValue { value, kind }) => {
      assert_eq!(value, "pigeon");
      assert_eq!(kind, "phone type");
    }
    other => panic!("expected unknown flag value error, got {:?}", other),
  }
}

#[test]
fn unbalanced_braces_do_not_mutate_the_user() {
  let decoder = FreeformDecoder::new(&Sha512Hasher);
  let mut user = decode("primaryemail:jane@example.com").unwrap();
  let before = user.clone();

  let err = decoder
    .decode(
      "suspended:true:address~{streetaddress~1 Main St}{locality~Leeds",
      &mut user,
    )
    .unwrap_err();

  assert_eq!(err.to_string(), "malformed attribute string");
  assert_eq!(user, before);
}

#[test]
fn failures_late_in_the_input_do_not_mutate_the_user() {
  let decoder = FreeformDecoder::new(&Sha512Hasher);
  let mut user = User::default();

  assert!(decoder
    .decode("suspended:true:recoveryphone:441134960000", &mut user)
    .is_err());
  assert_eq!(user, User::default());
}

#[test]
fn decode_then_encode_round_trips() {
  let user = decode(
    "orgunitpath:/Sales:ipwhitelisted:false:\
     phone~{value~+441134960000~type~work~primary~true}:\
     sshpublickey~{key~ssh-ed25519 AAAA~expirationtimeusec~1700000000000000}:\
     gender~type~female:name~fullname~Jane Smith",
  )
  .unwrap();

  let encoded = encode_user(&user).unwrap();
  assert_eq!(decode(&encoded).unwrap(), user);
}

#[test]
fn colon_bearing_values_survive_a_round_trip() {
  let user = decode(
    "orgunitpath~{/Sales:EMEA}:\
     notes~{contentType~text_plain~value~see https://wiki.example.com}:\
     name~{fullname~Dr: Jane Smith}:\
     gender~{type~other~customgender~he:him}",
  )
  .unwrap();

  assert_eq!(user.org_unit_path.as_deref(), Some("/Sales:EMEA"));
  let encoded = encode_user(&user).unwrap();
  assert_eq!(decode(&encoded).unwrap(), user);
}

#[test]
fn scalar_values_may_hold_braces() {
  let user = decode("password:pa{ss}:primaryemail:jane@example.com").unwrap();

  assert_eq!(user.password, Some(Sha512Hasher.hash("pa{ss}")));
  assert_eq!(user.primary_email.as_deref(), Some("jane@example.com"));
}

#[test]
fn empty_values_clear_clearable_fields() {
  let user = decode("recoveryphone:").unwrap();

  assert_eq!(user.recovery_phone.as_deref(), Some(""));
  assert_eq!(
    user.force_send_fields.iter().collect::<Vec<_>>(),
    vec!["recoveryPhone"]
  );
}
