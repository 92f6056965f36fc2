//! Selection aggregate: which coin the board shows and how taps change it.

pub mod controller;
pub mod state;

pub use controller::*;
pub use state::*;
