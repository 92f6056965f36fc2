use std::sync::Arc;

use crate::domain::market_data::{Coin, CoinCollection};
use crate::domain::selection::Selection;

/// Coin snapshot and the active selection, owned by whoever drives the board.
///
/// The snapshot is shared immutably and swapped whole on refresh; only
/// [`SelectionController`](crate::domain::selection::SelectionController)
/// mutates either half.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    coins: Arc<CoinCollection>,
    selection: Selection,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coins(&self) -> &CoinCollection {
        &self.coins
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<CoinCollection> {
        Arc::clone(&self.coins)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_coin(&self) -> Option<&Coin> {
        self.selection.coin_id().and_then(|id| self.coins.get(id))
    }

    pub(crate) fn swap_coins(&mut self, coins: CoinCollection) -> Arc<CoinCollection> {
        std::mem::replace(&mut self.coins, Arc::new(coins))
    }

    pub(crate) fn set_selection(&mut self, selection: Selection) -> Selection {
        std::mem::replace(&mut self.selection, selection)
    }
}
