use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::state::BoardState;

/// Buy/Sell buttons under the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum TradeAction {
    Sell,
    Buy,
}

/// Trade buttons are placeholders: the press is recorded and nothing else happens.
pub fn handle_trade(action: TradeAction, state: &BoardState) {
    get_logger().debug(
        LogComponent::Application("Trade"),
        &format!(
            "{} pressed for {:?}; trading is not available",
            action,
            state.selection().coin_id().map(|id| id.value())
        ),
    );
}
