use failure::Fail;

#[derive(Debug, Fail)]
pub enum RandomError {
  #[fail(display = "Invalid seed {}: seeds must be finite", value)]
  InvalidSeed { value: f64 },
  #[fail(display = "Invalid range: upper bound {} is less than lower bound {}", upper, lower)]
  InvalidRange { lower: f64, upper: f64 },
  /// A register whose top `k` bits are all zero would get stuck on the
  /// all-zero cycle.
  #[fail(display = "Corrupt generator state: register {} is degenerate", slot)]
  CorruptState { slot: usize },
}
