use failure::{Error, Fail};
use std::fs::File;
use std::path::PathBuf;
use structopt::StructOpt;

use tw223_core::*;

#[derive(Debug, StructOpt)]
struct Opts {
  /// Seed to use, the current Unix time in seconds if missing
  #[structopt(long = "seed", raw(allow_hyphen_values = "true"))]
  seed: Option<f64>,
  /// How many values to draw
  #[structopt(long = "count", default_value = "1")]
  count: usize,
  #[structopt(long = "lower", raw(allow_hyphen_values = "true"))]
  lower: Option<f64>,
  #[structopt(long = "upper", raw(allow_hyphen_values = "true"))]
  upper: Option<f64>,
  /// Do not reject ranges with upper < lower
  #[structopt(long = "passthrough")]
  passthrough: bool,
  #[structopt(long = "dump-state")]
  dump_state: bool,
  #[structopt(long = "save-to", parse(from_os_str))]
  save_to: Option<PathBuf>,
  #[structopt(long = "restore-from", parse(from_os_str))]
  restore_from: Option<PathBuf>,
  #[structopt(long = "verbose")]
  verbose: bool,
  #[structopt(long = "debug")]
  debug: bool,
}

#[derive(Debug, Fail)]
#[fail(display = "Usage error: {}", msg)]
struct UsageError {
  msg: String,
}

fn usage_error<T>(msg: &str) -> Result<T, UsageError> {
  Err(UsageError {
    msg: msg.to_string(),
  })
}

fn save_state<W>(state: &GeneratorState, writer: W) -> serde_json::Result<()>
where
  W: std::io::Write,
{
  serde_json::to_writer(writer, &state.save())
}

fn restore_state<R>(reader: R) -> Result<GeneratorState, Error>
where
  R: std::io::Read,
{
  let serialized_state: SerializableState = serde_json::from_reader(reader)?;
  Ok(GeneratorState::restore(serialized_state)?)
}

fn print_state(state: &GeneratorState) {
  for line in state.dump().iter() {
    println!("{}", line);
  }
}

fn run(opts: Opts) -> Result<(), Error> {
  set_log_level(if opts.debug {
    LogLevel::Debug
  } else if opts.verbose {
    LogLevel::Verbose
  } else {
    LogLevel::Quiet
  });

  let bounds = match (opts.lower, opts.upper) {
    (None, None) => Bounds::NoBounds,
    (None, Some(upper)) => Bounds::UpperOnly(upper),
    (Some(lower), Some(upper)) => Bounds::Range(lower, upper),
    (Some(_), None) => usage_error("lower given without upper")?,
  };
  let check = if opts.passthrough {
    RangeCheck::Passthrough
  } else {
    RangeCheck::Strict
  };

  let mut slot = match (opts.seed, &opts.restore_from) {
    (Some(_), Some(_)) => usage_error("Conflicting options: seed and restore-from")?,
    (Some(value), None) => Some(seed(value)?),
    (None, Some(restore_from)) => {
      let restore_from_file = File::open(restore_from)?;
      let state = restore_state(restore_from_file)?;
      verbose_log!("Restored generator state from {:?}", restore_from);
      Some(state)
    }
    (None, None) => None,
  };
  let state = seed_if_unseeded(&mut slot, || {
    verbose_log!("No seed given, using the current time");
    clock_seed()
  })?;

  if opts.dump_state {
    print_state(state);
  }

  debug_log!("Drawing {} values, {:?}, {:?}", opts.count, bounds, check);

  for _ in 0..opts.count {
    println!("{}", state.random_with(bounds, check)?);
  }

  if opts.dump_state {
    print_state(state);
  }

  if let Some(ref save_to) = opts.save_to {
    let save_to_file = File::create(save_to)?;
    save_state(state, save_to_file)?;
    eprintln!("State saved to {:?}", save_to);
  }

  Ok(())
}

fn main() {
  if let Err(err) = run(Opts::from_args()) {
    eprintln!("{}", err);
    std::process::exit(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::env;
  use std::fs;

  fn run_args(args: &[&str]) -> Result<(), Error> {
    run(Opts::from_iter(
      std::iter::once("tw223").chain(args.iter().cloned()),
    ))
  }

  fn usage_message(result: Result<(), Error>) -> String {
    match result {
      Err(err) => match err.downcast_ref::<UsageError>() {
        Some(usage) => usage.msg.clone(),
        None => panic!("Expecting UsageError, got {}", err),
      },
      Ok(()) => panic!("Expecting UsageError, got Ok"),
    }
  }

  #[test]
  fn lower_without_upper() {
    assert_eq!(
      usage_message(run_args(&["--seed", "1", "--lower", "3"])),
      "lower given without upper"
    );
  }

  #[test]
  fn seed_conflicts_with_restore_from() {
    assert_eq!(
      usage_message(run_args(&["--seed", "1", "--restore-from", "missing.json"])),
      "Conflicting options: seed and restore-from"
    );
  }

  #[test]
  fn inverted_range_needs_passthrough() {
    let args = ["--seed", "1", "--lower", "5", "--upper", "2"];
    match run_args(&args) {
      Err(err) => match err.downcast_ref::<RandomError>() {
        Some(RandomError::InvalidRange { .. }) => (),
        _ => panic!("Expecting InvalidRange, got {}", err),
      },
      Ok(()) => panic!("Expecting InvalidRange, got Ok"),
    }
    let mut passthrough = args.to_vec();
    passthrough.push("--passthrough");
    run_args(&passthrough).unwrap();
  }

  #[test]
  fn negative_bounds_and_dump_state() {
    run_args(&[
      "--seed", "-3.5", "--lower", "-10", "--upper", "-2", "--count", "5", "--dump-state",
    ])
    .unwrap();
  }

  #[test]
  fn clock_seeded_run() {
    run_args(&["--upper", "6", "--count", "3"]).unwrap();
  }

  #[test]
  fn save_to_then_restore_from() {
    let path = env::temp_dir().join(format!("tw223-cli-test-{}.json", std::process::id()));
    let path_str = path.to_str().unwrap();
    run_args(&["--seed", "1722039290", "--count", "2", "--save-to", path_str]).unwrap();

    let saved = restore_state(File::open(&path).unwrap()).unwrap();
    let mut expected = seed(1_722_039_290.0).unwrap();
    expected.next_u64();
    expected.next_u64();
    assert_eq!(saved, expected);

    run_args(&["--restore-from", path_str, "--count", "1"]).unwrap();
    fs::remove_file(&path).unwrap();
  }

  #[test]
  fn save_then_restore() {
    let mut state = seed(1_722_039_290.0).unwrap();
    let mut saved = Vec::new();
    save_state(&state, &mut saved).unwrap();
    let mut restored = restore_state(&saved[..]).unwrap();
    for _ in 0..100 {
      assert_eq!(state.next_u64(), restored.next_u64());
    }
  }

  #[test]
  fn restore_rejects_degenerate_state() {
    let json = r#"{"registers":[0,0,0,0]}"#;
    assert!(restore_state(json.as_bytes()).is_err());
  }

  #[test]
  fn restore_rejects_garbage() {
    assert!(restore_state(&b"{\"registers\":[1,2]}"[..]).is_err());
  }
}
