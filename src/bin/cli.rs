#[macro_use]
extern crate clap;

use clap::{Arg, ArgMatches, Command};
use codespan_reporting::term::termcolor::{
  Color, ColorChoice, ColorSpec, StandardStream, WriteColor,
};
use diradm::{
  batch::{self, InputFormat},
  encode_user, payload::User, projection_from_str, query_from_str, BuildMode, FreeformDecoder,
  ObjectType, RecordBuilder, Sha512Hasher,
};
use log::{debug, info, LevelFilter};
use serde_json::json;
use simplelog::{Config, TermLogger, TerminalMode};
use std::{
  error::Error,
  fs::File,
  io::{self, Read, Write},
  path::Path,
  process,
};

fn main() -> Result<(), Box<dyn Error>> {
  let object_arg = Arg::new("object")
    .short('o')
    .long("object")
    .takes_value(true)
    .required(true)
    .help("Object type: user, group, member, orgunit, group-settings or alias");

  let app = Command::new("diradm")
    .version(crate_version!())
    .author(crate_authors!())
    .about("Rewrites projections, queries and freeform attribute strings for directory objects, and builds request payloads from batch input")
    .subcommand_required(true)
    .arg_required_else_help(true)
    .arg(
      Arg::new("verbose")
        .short('v')
        .long("verbose")
        .multiple_occurrences(true)
        .help("Raise the log level, repeat for more detail"),
    )
    .arg(
      Arg::new("quiet")
        .short('q')
        .long("quiet")
        .conflicts_with("verbose")
        .help("Silence all logging"),
    )
    .subcommand(
      Command::new("attrs")
        .about("Rewrites a projection to canonical field names")
        .arg(object_arg.clone())
        .arg(Arg::new("PROJECTION").required(true)),
    )
    .subcommand(
      Command::new("query")
        .about("Rewrites a query to canonical field names")
        .arg(object_arg.clone())
        .arg(Arg::new("QUERY").required(true)),
    )
    .subcommand(
      Command::new("freeform")
        .about("Decodes a freeform user attribute string and prints the user payload")
        .arg(
          Arg::new("encode")
            .long("encode")
            .help("Print the decoded user in the freeform language instead of JSON"),
        )
        .arg(Arg::new("INPUT").required(true)),
    )
    .subcommand(
      Command::new("batch")
        .about("Builds one payload per row of a CSV or JSON lines file")
        .arg(object_arg)
        .arg(
          Arg::new("mode")
            .short('m')
            .long("mode")
            .takes_value(true)
            .possible_values(["create", "update"])
            .default_value("create")
            .help("Whether rows create objects or update the object in the key column"),
        )
        .arg(
          Arg::new("format")
            .short('f')
            .long("format")
            .takes_value(true)
            .possible_values(["csv", "jsonl"])
            .help("Input format, guessed from the file extension when omitted"),
        )
        .arg(
          Arg::new("FILE")
            .required(true)
            .help("Input file, - for stdin"),
        ),
    );

  let matches = app.get_matches();
  init_logging(&matches);

  let result = match matches.subcommand() {
    Some(("attrs", m)) => attrs(m),
    Some(("query", m)) => query(m),
    Some(("freeform", m)) => freeform(m),
    Some(("batch", m)) => build_batch(m),
    _ => Ok(()),
  };

  if let Err(e) = result {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    writeln!(&mut stderr, "{}", e)?;
    stderr.reset()?;

    process::exit(1);
  }

  Ok(())
}

fn init_logging(matches: &ArgMatches) {
  let level = if matches.is_present("quiet") {
    LevelFilter::Off
  } else {
    match matches.occurrences_of("verbose") {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    }
  };

  let _ = TermLogger::init(
    level,
    Config::default(),
    TerminalMode::Stderr,
    simplelog::ColorChoice::Auto,
  );
}

fn object_type(matches: &ArgMatches) -> Result<ObjectType, Box<dyn Error>> {
  let object = matches.value_of("object").ok_or("missing --object")?;
  Ok(object.parse::<ObjectType>()?)
}

fn attrs(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
  let object = object_type(matches)?;
  let input = matches.value_of("PROJECTION").ok_or("missing projection")?;

  match projection_from_str(input, object.attributes()) {
    Ok(projection) => {
      println!("{}", projection);
      Ok(())
    }
    Err(e) => Err(e.diagnostic(input).into()),
  }
}

fn query(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
  let object = object_type(matches)?;
  let input = matches.value_of("QUERY").ok_or("missing query")?;
  let attributes = object
    .query_attributes()
    .ok_or_else(|| format!("{} objects cannot be queried", object))?;

  match query_from_str(input, attributes) {
    Ok(query) => {
      println!("{}", query);
      Ok(())
    }
    Err(e) => Err(e.diagnostic(input).into()),
  }
}

fn freeform(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
  let input = matches.value_of("INPUT").ok_or("missing attribute string")?;
  let mut user = User::default();

  FreeformDecoder::new(&Sha512Hasher).decode(input, &mut user)?;
  debug!("force-sent fields: {:?}", user.force_send_fields);

  if matches.is_present("encode") {
    println!("{}", encode_user(&user)?);
  } else {
    println!("{}", serde_json::to_string_pretty(&user)?);
  }

  Ok(())
}

fn build_batch(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
  let object = object_type(matches)?;
  let mode = matches
    .value_of("mode")
    .unwrap_or("create")
    .parse::<BuildMode>()?;
  let path = matches.value_of("FILE").ok_or("missing input file")?;

  let format = match matches.value_of("format") {
    Some(format) => format.parse::<InputFormat>()?,
    None => guess_format(path),
  };
  info!("reading {} rows from {} as {} ({})", object, path, format, mode);

  let reader: Box<dyn Read> = if path == "-" {
    Box::new(io::stdin())
  } else {
    Box::new(File::open(path)?)
  };

  let builder = RecordBuilder::new(object, mode, &Sha512Hasher);
  let stdout = io::stdout();
  let mut out = stdout.lock();

  for row in batch::read(format, reader, &builder)? {
    let line = json!({
      "key": row.key,
      "payload": row.payload,
      "forceSendFields": row.payload.force_send_fields(),
    });
    writeln!(out, "{}", line)?;
  }

  Ok(())
}

fn guess_format(path: &str) -> InputFormat {
  match Path::new(path).extension().and_then(|e| e.to_str()) {
    Some(ext) => ext.parse().unwrap_or(InputFormat::Csv),
    None => InputFormat::Csv,
  }
}
