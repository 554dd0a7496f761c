// `math.random` on top of the combined Tausworthe generator. Values match
// LuaJIT bit for bit, including the floating point range mapping.

use crate::error::RandomError;
use crate::state::GeneratorState;
use crate::tausworthe;

/// Sign and exponent of the doubles in `[1.0, 2.0)`.
const ONE_EXPONENT: u64 = 0x3FF0_0000_0000_0000;
const MANTISSA: u64 = 0x000F_FFFF_FFFF_FFFF;

/// The three call shapes of `math.random`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Bounds {
  /// fraction in `[0, 1)`
  NoBounds,
  /// integer in `[1, m]`
  UpperOnly(f64),
  /// integer in `[m, n]`
  Range(f64, f64),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeCheck {
  /// `Bounds::Range(m, n)` with `n < m` is an error.
  Strict,
  /// Map whatever we get, like LuaJIT does.
  Passthrough,
}

impl Default for RangeCheck {
  fn default() -> RangeCheck {
    RangeCheck::Strict
  }
}

/// Turns a generator word into a fraction in `[0, 1)` using its low 52
/// bits as the mantissa.
pub fn fraction_from_word(word: u64) -> f64 {
  f64::from_bits((word & MANTISSA) | ONE_EXPONENT) - 1.0
}

impl GeneratorState {
  pub fn next_u64(&mut self) -> u64 {
    tausworthe::step(self)
  }

  pub fn next_fraction(&mut self) -> f64 {
    fraction_from_word(self.next_u64())
  }

  /// Integer in `[1, m]`, as a double.
  pub fn next_upper(&mut self, m: f64) -> f64 {
    (self.next_fraction() * m).floor() + 1.0
  }

  /// Integer in `[m, n]`, as a double. No checks: with `n < m` you get
  /// whatever the arithmetic gives you.
  pub fn next_range_unchecked(&mut self, m: f64, n: f64) -> f64 {
    (self.next_fraction() * (n - m + 1.0)).floor() + m
  }

  pub fn next_range(&mut self, m: f64, n: f64) -> Result<f64, RandomError> {
    // also catches NaN bounds
    if !(m <= n) {
      return Err(RandomError::InvalidRange { lower: m, upper: n });
    }
    Ok(self.next_range_unchecked(m, n))
  }

  /// Draws one value according to `bounds`. The check happens before the
  /// draw, so a rejected range does not advance the generator.
  pub fn random_with(&mut self, bounds: Bounds, check: RangeCheck) -> Result<f64, RandomError> {
    match (bounds, check) {
      (Bounds::NoBounds, _) => Ok(self.next_fraction()),
      (Bounds::UpperOnly(m), _) => Ok(self.next_upper(m)),
      (Bounds::Range(m, n), RangeCheck::Strict) => self.next_range(m, n),
      (Bounds::Range(m, n), RangeCheck::Passthrough) => Ok(self.next_range_unchecked(m, n)),
    }
  }

  pub fn random(&mut self, bounds: Bounds) -> Result<f64, RandomError> {
    self.random_with(bounds, RangeCheck::default())
  }
}
