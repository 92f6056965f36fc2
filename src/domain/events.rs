use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::CoinId;
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

fn trace_publish<E: DomainEvent>(event: &E, handlers: usize) {
    get_logger().trace(
        LogComponent::Domain("Events"),
        &format!("{} -> {} handler(s): {:?}", event.event_type(), handlers, event),
    );
}

/// Events related to the coin snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum MarketDataEvent {
    CoinsReplaced { coin_count: usize },
}

impl DomainEvent for MarketDataEvent {
    fn event_type(&self) -> &'static str {
        match self {
            MarketDataEvent::CoinsReplaced { .. } => "CoinsReplaced",
        }
    }
}

/// Events related to the active coin
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    SelectionChanged { previous: Option<CoinId>, current: Option<CoinId> },
}

impl DomainEvent for SelectionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SelectionEvent::SelectionChanged { .. } => "SelectionChanged",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_market_data_event(&self, event: MarketDataEvent);
    fn publish_selection_event(&self, event: SelectionEvent);
}

/// Synchronous in-memory dispatcher; handlers run in subscription order
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    market_data_handlers: Vec<Box<dyn Fn(&MarketDataEvent)>>,
    selection_handlers: Vec<Box<dyn Fn(&SelectionEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_market_data_events<F>(&mut self, handler: F)
    where
        F: Fn(&MarketDataEvent) + 'static,
    {
        self.market_data_handlers.push(Box::new(handler));
    }

    pub fn subscribe_to_selection_events<F>(&mut self, handler: F)
    where
        F: Fn(&SelectionEvent) + 'static,
    {
        self.selection_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_market_data_event(&self, event: MarketDataEvent) {
        trace_publish(&event, self.market_data_handlers.len());
        for handler in &self.market_data_handlers {
            handler(&event);
        }
    }

    fn publish_selection_event(&self, event: SelectionEvent) {
        trace_publish(&event, self.selection_handlers.len());
        for handler in &self.selection_handlers {
            handler(&event);
        }
    }
}

/// Dispatcher that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventDispatcher;

impl EventDispatcher for NullEventDispatcher {
    fn publish_market_data_event(&self, _event: MarketDataEvent) {}
    fn publish_selection_event(&self, _event: SelectionEvent) {}
}
