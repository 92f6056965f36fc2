pub mod rendering;
pub mod services;
pub mod snapshot;

pub use services::{ConsoleLogger, SystemTimeProvider};
