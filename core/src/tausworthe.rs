// combined Tausworthe generator with four components, see
// <https://www.ams.org/journals/mcom/1996-65-213/S0025-5718-96-00696-5/S0025-5718-96-00696-5.pdf>
// the parameters are the ones LuaJIT uses for its `math.random`.

use crate::state::GeneratorState;

/// One LFSR component. Its `k`-bit state lives in the top `k` bits of the
/// register.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Lfsr {
  pub k: u32,
  pub q: u32,
  pub s: u32,
}

pub const LFSRS: [Lfsr; 4] = [
  Lfsr { k: 63, q: 31, s: 18 },
  Lfsr { k: 58, q: 19, s: 28 },
  Lfsr { k: 55, q: 24, s: 7 },
  Lfsr { k: 47, q: 21, s: 8 },
];

impl Lfsr {
  /// The top `k` bits.
  pub fn mask(self) -> u64 {
    u64::max_value() << (64 - self.k)
  }

  pub fn step(self, z: u64) -> u64 {
    (((z << self.q) ^ z) >> (self.k - self.s)) ^ ((z & self.mask()) << self.s)
  }
}

/// Advances every register by one step, in slot order, and returns the xor
/// of the new register values.
pub fn step(state: &mut GeneratorState) -> u64 {
  let mut combined = 0;
  for (register, lfsr) in state.registers_mut().iter_mut().zip(LFSRS.iter()) {
    *register = lfsr.step(*register);
    combined ^= *register;
  }
  combined
}
