use serde::Serialize;

use crate::domain::chart::Color;
use crate::domain::market_data::CoinId;
use crate::domain::state::BoardState;

/// One entry of the horizontal coin selector
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectorTab {
    pub coin_id: CoinId,
    /// Upper-cased ticker
    pub label: String,
    pub is_active: bool,
}

impl SelectorTab {
    /// Highlight behind the active tab
    pub fn background(&self) -> Option<Color> {
        self.is_active.then_some(Color::TAB)
    }
}

/// Tabs in snapshot order with the selected coin marked active.
pub fn selector_tabs(state: &BoardState) -> Vec<SelectorTab> {
    state
        .coins()
        .iter()
        .map(|coin| SelectorTab {
            coin_id: coin.id.clone(),
            label: coin.symbol.value().to_string(),
            is_active: state.selection().is(&coin.id),
        })
        .collect()
}

/// Index of the active tab, used to slide the highlight
pub fn active_tab_index(state: &BoardState) -> Option<usize> {
    let id = state.selection().coin_id()?;
    state.coins().iter().position(|coin| &coin.id == id)
}
