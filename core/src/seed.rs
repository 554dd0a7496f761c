use crate::error::RandomError;
use crate::logging::log_state;
use crate::state::{check_registers, format_double, GeneratorState, REGISTERS};
use crate::tausworthe;
use failure::Error;
use std::f64::consts::{E, PI};
use std::time::{SystemTime, UNIX_EPOCH};

/// `64 - k` for each component, one byte each, slot 0 in the low byte.
const SEED_SHIFTS: u32 = 0x1109_0601;

/// Steps thrown away after seeding to mix the initial registers.
pub const WARM_UP_STEPS: usize = 10;

/// Fills the registers from `d` without warming up.
pub(crate) fn seed_registers(mut d: f64) -> [u64; REGISTERS] {
  let mut shifts = SEED_SHIFTS;
  let mut registers = [0; REGISTERS];
  for register in registers.iter_mut() {
    let m = 1u64 << (shifts & 255);
    shifts >>= 8;
    d = d * PI + E;
    let mut u = d.to_bits();
    // makes sure the top `k` bits are not all zero
    if u < m {
      u += m;
    }
    *register = u;
  }
  registers
}

pub fn seed(value: f64) -> Result<GeneratorState, RandomError> {
  if !value.is_finite() {
    return Err(RandomError::InvalidSeed { value });
  }
  verbose_log!("Seeding generator with {} ({})", value, format_double(value));
  let registers = seed_registers(value);
  debug_assert!(check_registers(&registers).is_ok());
  let mut state = GeneratorState::from_registers(registers);
  for _ in 0..WARM_UP_STEPS {
    tausworthe::step(&mut state);
  }
  log_state("Generator state after warm up", &state);
  Ok(state)
}

/// Current Unix time in whole seconds, for when no seed is given.
pub fn clock_seed() -> Result<f64, Error> {
  let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH)?;
  Ok(since_epoch.as_secs() as f64)
}

/// Seeds `slot` with `get_seed()` if it has not been seeded yet, and returns
/// the generator either way. `get_seed` only runs for an empty slot.
pub fn seed_if_unseeded<F, E>(
  slot: &mut Option<GeneratorState>,
  get_seed: F,
) -> Result<&mut GeneratorState, E>
where
  F: FnOnce() -> Result<f64, E>,
  E: From<RandomError>,
{
  let state = match slot.take() {
    Some(state) => state,
    None => seed(get_seed()?)?,
  };
  Ok(slot.get_or_insert(state))
}
