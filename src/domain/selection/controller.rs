use super::state::{Selection, SelectionOutcome};
use crate::domain::events::{EventDispatcher, MarketDataEvent, SelectionEvent};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Coin, CoinCollection, CoinId, Symbol};
use crate::domain::state::BoardState;
use crate::{log_debug, log_warn};

/// Drives `Unselected -> Selected(c)` on load and `Selected(a) -> Selected(b)` on tap.
///
/// Every effective change publishes exactly one
/// [`SelectionEvent::SelectionChanged`]; redundant taps and unknown coins publish
/// nothing.
pub struct SelectionController<D: EventDispatcher> {
    default_symbol: Symbol,
    dispatcher: D,
}

impl<D: EventDispatcher> SelectionController<D> {
    pub fn new(default_symbol: Symbol, dispatcher: D) -> Self {
        Self { default_symbol, dispatcher }
    }

    pub fn default_symbol(&self) -> &Symbol {
        &self.default_symbol
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    /// Swap in a fresh snapshot and settle the selection against it.
    ///
    /// A selection that survives the refresh is kept. Otherwise the default
    /// symbol is chosen, falling back to the first coin; an empty snapshot
    /// returns the board to `Unselected`.
    pub fn load(&self, state: &mut BoardState, coins: Vec<Coin>) -> SelectionOutcome {
        let collection = CoinCollection::new(coins);
        let coin_count = collection.len();
        state.swap_coins(collection);
        self.dispatcher.publish_market_data_event(MarketDataEvent::CoinsReplaced { coin_count });
        log_debug!(LogComponent::Domain("Selection"), "snapshot replaced with {} coins", coin_count);

        if let Some(id) = state.selection().coin_id() {
            if state.coins().contains(id) {
                return SelectionOutcome::Unchanged;
            }
        }

        let next = match self.initial_coin(state.coins()) {
            Some(id) => Selection::Selected(id),
            None => Selection::Unselected,
        };
        self.apply(state, next)
    }

    /// User tapped the coin with `id`.
    pub fn select(&self, state: &mut BoardState, id: &CoinId) -> SelectionOutcome {
        if !state.coins().contains(id) {
            log_warn!(LogComponent::Domain("Selection"), "ignoring unknown coin '{}'", id);
            return SelectionOutcome::UnknownCoin;
        }
        self.apply(state, Selection::Selected(id.clone()))
    }

    /// User tapped the tab labelled `symbol`; matching ignores case.
    pub fn select_symbol(&self, state: &mut BoardState, symbol: &str) -> SelectionOutcome {
        let id = match state.coins().find_by_symbol(symbol) {
            Some(coin) => coin.id.clone(),
            None => {
                log_warn!(LogComponent::Domain("Selection"), "ignoring unknown symbol '{}'", symbol);
                return SelectionOutcome::UnknownCoin;
            }
        };
        self.select(state, &id)
    }

    fn initial_coin(&self, coins: &CoinCollection) -> Option<CoinId> {
        coins
            .find_by_symbol(self.default_symbol.value())
            .or_else(|| coins.first())
            .map(|coin| coin.id.clone())
    }

    fn apply(&self, state: &mut BoardState, next: Selection) -> SelectionOutcome {
        if state.selection() == &next {
            return SelectionOutcome::Unchanged;
        }

        let current = next.coin_id().cloned();
        let previous = state.set_selection(next).coin_id().cloned();
        log_debug!(
            LogComponent::Domain("Selection"),
            "selection {:?} -> {:?}",
            previous.as_ref().map(CoinId::value),
            current.as_ref().map(CoinId::value)
        );

        self.dispatcher.publish_selection_event(SelectionEvent::SelectionChanged {
            previous: previous.clone(),
            current: current.clone(),
        });
        SelectionOutcome::Changed { previous, current }
    }
}
