use crate::error::RandomError;
use crate::tausworthe::LFSRS;
use serde_derive::{Deserialize, Serialize};

pub const REGISTERS: usize = 4;

/// The four registers of the combined generator, one per LFSR in
/// `tausworthe::LFSRS`.
///
/// There is no default or zero state: a `GeneratorState` only comes out of
/// `seed::seed` or `GeneratorState::restore`, both of which guarantee that
/// every register has at least one bit set among its top `k` bits. Two
/// streams sharing a state are not independent, so clone it only if you
/// want to replay a sequence.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GeneratorState {
  registers: [u64; REGISTERS],
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SerializableState {
  pub registers: [u64; REGISTERS],
}

/// Checks that every register keeps its LFSR out of the all-zero cycle.
pub fn check_registers(registers: &[u64; REGISTERS]) -> Result<(), RandomError> {
  for (slot, (register, lfsr)) in registers.iter().zip(LFSRS.iter()).enumerate() {
    if register & lfsr.mask() == 0 {
      return Err(RandomError::CorruptState { slot });
    }
  }
  Ok(())
}

/// Renders a word as 64 binary digits, most significant first, in groups of
/// eight separated by spaces.
pub fn format_word(word: u64) -> String {
  let digits = format!("{:064b}", word);
  let mut out = String::with_capacity(64 + 7);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && i % 8 == 0 {
      out.push(' ');
    }
    out.push(ch);
  }
  out
}

/// Like `format_word`, on the IEEE-754 bit pattern of `d`.
pub fn format_double(d: f64) -> String {
  format_word(d.to_bits())
}

impl GeneratorState {
  pub(crate) fn from_registers(registers: [u64; REGISTERS]) -> GeneratorState {
    GeneratorState { registers }
  }

  pub(crate) fn registers_mut(&mut self) -> &mut [u64; REGISTERS] {
    &mut self.registers
  }

  pub fn registers(&self) -> [u64; REGISTERS] {
    self.registers
  }

  pub fn dump(&self) -> [String; REGISTERS] {
    [
      format_word(self.registers[0]),
      format_word(self.registers[1]),
      format_word(self.registers[2]),
      format_word(self.registers[3]),
    ]
  }

  pub fn save(&self) -> SerializableState {
    SerializableState {
      registers: self.registers,
    }
  }

  pub fn restore(serialized: SerializableState) -> Result<GeneratorState, RandomError> {
    check_registers(&serialized.registers)?;
    Ok(GeneratorState::from_registers(serialized.registers))
  }
}
