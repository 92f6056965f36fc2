use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod config;
pub mod domain;
pub mod formatting;
pub mod infrastructure;
pub mod presentation;
pub mod view_state;

pub use application::{BoardApplicationService, CoinView};
pub use domain::chart::{ChartGeometry, ChartPoint, ChartTransform, PriceTrend};
pub use domain::selection::{Selection, SelectionController, SelectionOutcome};
pub use domain::state::BoardState;
pub use formatting::CurrencyFormatter;

/// Install the console logger, wall clock and panic hook for the browser host
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);
    domain::logging::init_time_provider(Box::new(infrastructure::SystemTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "coin board initialized");
}

/// Currency string with the default `en_US` / `USD` format
#[wasm_bindgen(js_name = convertToCurrency)]
pub fn convert_to_currency(amount: f64) -> String {
    formatting::convert_to_currency(amount)
}
