#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod deck;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use deck::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
