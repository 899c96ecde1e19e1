//! Row readers feeding the record builder: delimited text with a header row,
//! and newline-delimited JSON objects.

use crate::{
  error::{Error, MsgType, Result},
  record::{BuiltRow, HeaderMap, RecordBuilder},
};
use log::{debug, info};
use serde_json::Value;
use std::{fmt, io, str::FromStr};

/// Layout of batch input
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputFormat {
  /// Comma separated values, first record is the header
  Csv,
  /// One JSON object per line, keys are column names
  JsonLines,
}

impl fmt::Display for InputFormat {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      InputFormat::Csv => write!(f, "csv"),
      InputFormat::JsonLines => write!(f, "jsonl"),
    }
  }
}

impl FromStr for InputFormat {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "csv" => Ok(InputFormat::Csv),
      "jsonl" | "json" | "ndjson" => Ok(InputFormat::JsonLines),
      _ => Err(Error::UnknownFlagValue {
        value: s.to_string(),
        kind: "input format",
      }),
    }
  }
}

/// Reads every row of `reader` in the given `format`
pub fn read<R: io::Read>(
  format: InputFormat,
  reader: R,
  builder: &RecordBuilder,
) -> Result<Vec<BuiltRow>> {
  match format {
    InputFormat::Csv => read_csv(reader, builder),
    InputFormat::JsonLines => read_json_lines(io::BufReader::new(reader), builder),
  }
}

/// Reads delimited text. The first record names the columns; rows may be
/// shorter than the header.
pub fn read_csv<R: io::Read>(reader: R, builder: &RecordBuilder) -> Result<Vec<BuiltRow>> {
  let mut rdr = csv::ReaderBuilder::new()
    .flexible(true)
    .trim(csv::Trim::Headers)
    .from_reader(reader);

  let names = rdr.headers()?.iter().map(String::from).collect::<Vec<_>>();
  let header = HeaderMap::from_header(builder.object(), &names)?;
  debug!("columns: {:?}", header.columns().collect::<Vec<_>>());

  let mut rows = Vec::new();
  for (idx, record) in rdr.records().enumerate() {
    let row = idx + 1;
    let record = record.map_err(|e| Error::from(e).at_row(row))?;
    let cells = record.iter().collect::<Vec<_>>();

    let built = builder.build(&header, &cells).map_err(|e| e.at_row(row))?;
    debug!("row {}: built {} payload", row, builder.object());
    rows.push(built);
  }

  info!("read {} {} row(s)", rows.len(), builder.object());
  Ok(rows)
}

/// Reads one JSON object per line. Blank lines are skipped but still
/// counted.
pub fn read_json_lines<R: io::BufRead>(reader: R, builder: &RecordBuilder) -> Result<Vec<BuiltRow>> {
  let mut rows = Vec::new();

  for (idx, line) in reader.lines().enumerate() {
    let row = idx + 1;
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }

    let built = json_row(&line, builder).map_err(|e| e.at_row(row))?;
    debug!("row {}: built {} payload", row, builder.object());
    rows.push(built);
  }

  info!("read {} {} row(s)", rows.len(), builder.object());
  Ok(rows)
}

fn json_row(line: &str, builder: &RecordBuilder) -> Result<BuiltRow> {
  let object = match serde_json::from_str::<Value>(line)? {
    Value::Object(object) => object,
    _ => return Err(Error::malformed(MsgType::MalformedJsonRow)),
  };

  let (names, cells): (Vec<String>, Vec<String>) =
    object.into_iter().map(|(k, v)| (k, cell_text(v))).unzip();
  let header = HeaderMap::from_header(builder.object(), &names)?;

  builder.build(&header, &cells)
}

fn cell_text(value: Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(s) => s,
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    password::Sha512Hasher,
    payload::Payload,
    record::BuildMode,
    schema::ObjectType,
  };
  use indoc::indoc;
  use pretty_assertions::assert_eq;

  #[test]
  fn verify_csv_rows() {
    let input = indoc!(
      r#"
      email,name,description
      eng@example.com,Engineering,"Builds, ships"
      ops@example.com,Operations
    "#
    );
    let builder = RecordBuilder::new(ObjectType::Group, BuildMode::Create, &Sha512Hasher);
    let rows = read_csv(input.as_bytes(), &builder).unwrap();

    assert_eq!(rows.len(), 2);
    match &rows[0].payload {
      Payload::Group(g) => assert_eq!(g.description.as_deref(), Some("Builds, ships")),
      other => panic!("unexpected payload {:?}", other),
    }
  }

  #[test]
  fn verify_csv_row_errors_carry_row_number() {
    let input = indoc!(
      "
      email,role
      a@example.com,member
      b@example.com,boss
    "
    );
    let builder = RecordBuilder::new(ObjectType::Member, BuildMode::Create, &Sha512Hasher);

    assert_eq!(
      read_csv(input.as_bytes(), &builder).unwrap_err().to_string(),
      "row 2: boss is not a valid role"
    );
  }

  #[test]
  fn verify_csv_header_errors() {
    let builder = RecordBuilder::new(ObjectType::OrgUnit, BuildMode::Create, &Sha512Hasher);

    assert_eq!(
      read_csv("name,floor\nSales,3\n".as_bytes(), &builder)
        .unwrap_err()
        .to_string(),
      "floor attribute is not recognized"
    );
    assert_eq!(
      read_csv("".as_bytes(), &builder).unwrap_err().to_string(),
      "malformed header row: no columns"
    );
  }

  #[test]
  fn verify_json_lines() {
    let input = indoc!(
      r#"
      {"userKey": "jane@example.com", "suspended": false, "phone": "{value~+441234~type~work}"}

      {"userKey": "joe@example.com", "orgUnitPath": null}
      [1, 2]
    "#
    );
    let builder = RecordBuilder::new(ObjectType::User, BuildMode::Update, &Sha512Hasher);
    let err = read_json_lines(input.as_bytes(), &builder).unwrap_err();

    assert_eq!(err.to_string(), "row 4: malformed row: expected a JSON object");

    let valid = input.lines().take(3).collect::<Vec<_>>().join("\n");
    let rows = read_json_lines(valid.as_bytes(), &builder).unwrap();
    assert_eq!(rows.len(), 2);

    match &rows[0].payload {
      Payload::User(u) => {
        assert_eq!(u.suspended, Some(false));
        assert!(u.force_send_fields.contains("suspended"));
        assert_eq!(u.phones[0].value.as_deref(), Some("+441234"));
      }
      other => panic!("unexpected payload {:?}", other),
    }
    match &rows[1].payload {
      Payload::User(u) => {
        assert_eq!(rows[1].key.as_deref(), Some("joe@example.com"));
        assert_eq!(u.org_unit_path.as_deref(), Some(""));
      }
      other => panic!("unexpected payload {:?}", other),
    }
  }

  #[test]
  fn verify_input_format() {
    assert_eq!("CSV".parse::<InputFormat>().unwrap(), InputFormat::Csv);
    assert_eq!("ndjson".parse::<InputFormat>().unwrap(), InputFormat::JsonLines);
    assert!("xlsx".parse::<InputFormat>().is_err());
  }
}
