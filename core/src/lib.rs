extern crate serde_derive;

#[macro_use]
pub mod logging;

pub mod error;
pub mod rand;
pub mod seed;
pub mod state;
pub mod tausworthe;

pub use crate::error::*;
pub use crate::logging::*;
pub use crate::rand::{Bounds, RangeCheck};
pub use crate::seed::{clock_seed, seed, seed_if_unseeded};
pub use crate::state::{GeneratorState, SerializableState};
