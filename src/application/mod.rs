pub mod board_service;
pub mod trade;

pub use board_service::*;
pub use trade::*;
