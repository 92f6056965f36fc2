use std::cell::RefCell;
use std::rc::Rc;

use coin_board_wasm::domain::events::{InMemoryEventDispatcher, MarketDataEvent, SelectionEvent};
use coin_board_wasm::domain::market_data::{Coin, CoinId, Price, Symbol};
use coin_board_wasm::domain::selection::{Selection, SelectionController, SelectionOutcome};
use coin_board_wasm::domain::state::BoardState;

fn coin(id: &str, symbol: &str) -> Coin {
    Coin::new(CoinId::from(id), Symbol::from(symbol), id, Price::from(1.0))
}

fn sample_coins() -> Vec<Coin> {
    vec![coin("ethereum", "eth"), coin("bitcoin", "btc"), coin("solana", "sol")]
}

/// Controller wired to a dispatcher that records every selection event
fn recording_controller() -> (SelectionController<InMemoryEventDispatcher>, Rc<RefCell<Vec<SelectionEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let mut dispatcher = InMemoryEventDispatcher::new();
    dispatcher.subscribe_to_selection_events(move |event| sink.borrow_mut().push(event.clone()));
    (SelectionController::new(Symbol::from("BTC"), dispatcher), events)
}

#[test]
fn starts_unselected() {
    let state = BoardState::new();
    assert_eq!(state.selection(), &Selection::Unselected);
    assert!(state.selected_coin().is_none());
}

#[test]
fn first_load_selects_default_symbol() {
    let (controller, events) = recording_controller();
    let mut state = BoardState::new();

    let outcome = controller.load(&mut state, sample_coins());

    assert_eq!(
        outcome,
        SelectionOutcome::Changed { previous: None, current: Some(CoinId::from("bitcoin")) }
    );
    assert_eq!(state.selected_coin().unwrap().symbol.value(), "BTC");
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn tapping_another_coin_switches_and_notifies_once() {
    let (controller, events) = recording_controller();
    let mut state = BoardState::new();
    controller.load(&mut state, sample_coins());
    events.borrow_mut().clear();

    let outcome = controller.select(&mut state, &CoinId::from("ethereum"));

    assert!(outcome.is_changed());
    assert_eq!(state.selection(), &Selection::Selected(CoinId::from("ethereum")));
    assert_eq!(
        events.borrow().as_slice(),
        &[SelectionEvent::SelectionChanged {
            previous: Some(CoinId::from("bitcoin")),
            current: Some(CoinId::from("ethereum")),
        }]
    );
}

#[test]
fn redundant_tap_is_silent() {
    let (controller, events) = recording_controller();
    let mut state = BoardState::new();
    controller.load(&mut state, sample_coins());
    events.borrow_mut().clear();

    assert_eq!(controller.select(&mut state, &CoinId::from("bitcoin")), SelectionOutcome::Unchanged);
    assert_eq!(controller.select_symbol(&mut state, "btc"), SelectionOutcome::Unchanged);
    assert!(events.borrow().is_empty());
}

#[test]
fn unknown_coin_leaves_selection_alone() {
    let (controller, events) = recording_controller();
    let mut state = BoardState::new();
    controller.load(&mut state, sample_coins());
    events.borrow_mut().clear();

    assert_eq!(controller.select(&mut state, &CoinId::from("dogecoin")), SelectionOutcome::UnknownCoin);
    assert_eq!(controller.select_symbol(&mut state, "DOGE"), SelectionOutcome::UnknownCoin);
    assert_eq!(state.selection(), &Selection::Selected(CoinId::from("bitcoin")));
    assert!(events.borrow().is_empty());
}

#[test]
fn tap_before_load_is_unknown() {
    let (controller, events) = recording_controller();
    let mut state = BoardState::new();
    assert_eq!(controller.select(&mut state, &CoinId::from("bitcoin")), SelectionOutcome::UnknownCoin);
    assert_eq!(state.selection(), &Selection::Unselected);
    assert!(events.borrow().is_empty());
}

#[test]
fn symbol_taps_ignore_case() {
    let (controller, _events) = recording_controller();
    let mut state = BoardState::new();
    controller.load(&mut state, sample_coins());

    assert!(controller.select_symbol(&mut state, "Sol").is_changed());
    assert_eq!(state.selection(), &Selection::Selected(CoinId::from("solana")));
}

#[test]
fn lowercase_tap_finds_non_ascii_ticker() {
    let (controller, events) = recording_controller();
    let mut state = BoardState::new();
    controller.load(&mut state, vec![coin("bitcoin", "btc"), coin("omega", "ω")]);
    events.borrow_mut().clear();

    assert!(controller.select_symbol(&mut state, "ω").is_changed());
    assert_eq!(state.selection(), &Selection::Selected(CoinId::from("omega")));
    assert_eq!(state.coins().find_by_symbol("Ω").map(|c| c.id.value()), Some("omega"));
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn refresh_keeps_surviving_selection() {
    let (controller, events) = recording_controller();
    let mut state = BoardState::new();
    controller.load(&mut state, sample_coins());
    controller.select(&mut state, &CoinId::from("solana"));
    events.borrow_mut().clear();

    let refreshed = vec![coin("solana", "sol"), coin("bitcoin", "btc")];
    assert_eq!(controller.load(&mut state, refreshed), SelectionOutcome::Unchanged);
    assert_eq!(state.selection(), &Selection::Selected(CoinId::from("solana")));
    assert_eq!(state.coins().len(), 2);
    assert!(events.borrow().is_empty());
}

#[test]
fn refresh_without_selected_coin_reselects_default() {
    let (controller, events) = recording_controller();
    let mut state = BoardState::new();
    controller.load(&mut state, sample_coins());
    controller.select(&mut state, &CoinId::from("solana"));
    events.borrow_mut().clear();

    controller.load(&mut state, vec![coin("ethereum", "eth"), coin("bitcoin", "btc")]);

    assert_eq!(state.selection(), &Selection::Selected(CoinId::from("bitcoin")));
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn snapshot_swap_is_announced() {
    let counts = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&counts);
    let mut dispatcher = InMemoryEventDispatcher::new();
    dispatcher.subscribe_to_market_data_events(move |event| {
        let MarketDataEvent::CoinsReplaced { coin_count } = event;
        sink.borrow_mut().push(*coin_count);
    });
    let controller = SelectionController::new(Symbol::from("BTC"), dispatcher);
    let mut state = BoardState::new();

    let before = state.snapshot();
    controller.load(&mut state, sample_coins());

    assert!(before.is_empty());
    assert_eq!(counts.borrow().as_slice(), &[3]);
}
