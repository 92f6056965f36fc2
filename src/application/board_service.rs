use serde::Serialize;

use crate::config::BoardConfig;
use crate::domain::{
    chart::{ChartGeometry, ChartTransform, Color},
    errors::BoardResult,
    events::EventDispatcher,
    logging::{LogComponent, get_logger},
    market_data::{Coin, CoinId},
    selection::{SelectionController, SelectionOutcome},
    state::BoardState,
};
use crate::formatting::CurrencyFormatter;
use crate::infrastructure::rendering::{LineGeometry, LineVertex};
use crate::infrastructure::snapshot::decode_market_snapshot;
use crate::view_state::{SelectorTab, selector_tabs};

/// Coloured change label shown under the price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeBadge {
    pub label: String,
    pub foreground: Color,
    pub background: Color,
}

/// Everything the render surface needs for the selected coin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinView {
    pub coin_id: CoinId,
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub price_label: String,
    pub change: ChangeBadge,
    pub chart: ChartGeometry,
    pub chart_color: Color,
    pub tabs: Vec<SelectorTab>,
}

/// Application service composing selection, chart geometry and formatting.
///
/// Holds no board data itself; callers own the [`BoardState`] and pass it in.
pub struct BoardApplicationService<D: EventDispatcher> {
    config: BoardConfig,
    controller: SelectionController<D>,
    transform: ChartTransform,
    formatter: Option<CurrencyFormatter>,
}

impl<D: EventDispatcher> BoardApplicationService<D> {
    pub fn new(config: BoardConfig, dispatcher: D) -> Self {
        let formatter = config.currency_formatter();
        if formatter.is_none() {
            get_logger().warn(
                LogComponent::Application("BoardService"),
                &format!(
                    "unsupported currency format {}/{}, price labels will be empty",
                    config.locale, config.currency
                ),
            );
        }

        Self {
            controller: SelectionController::new(config.default_symbol.clone(), dispatcher),
            transform: ChartTransform::new(),
            formatter,
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn controller(&self) -> &SelectionController<D> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController<D> {
        &mut self.controller
    }

    pub fn load_coins(&self, state: &mut BoardState, coins: Vec<Coin>) -> SelectionOutcome {
        let outcome = self.controller.load(state, coins);
        get_logger().info(
            LogComponent::Application("BoardService"),
            &format!("board loaded with {} coins", state.coins().len()),
        );
        outcome
    }

    /// Decode an upstream JSON snapshot and swap it in.
    pub fn load_snapshot_json(&self, state: &mut BoardState, json: &str) -> BoardResult<SelectionOutcome> {
        let coins = decode_market_snapshot(json)?;
        Ok(self.load_coins(state, coins))
    }

    pub fn select_coin(&self, state: &mut BoardState, id: &CoinId) -> SelectionOutcome {
        self.controller.select(state, id)
    }

    pub fn select_symbol(&self, state: &mut BoardState, symbol: &str) -> SelectionOutcome {
        self.controller.select_symbol(state, symbol)
    }

    pub fn format_price(&self, amount: f64) -> String {
        self.formatter.map(|f| f.format(amount)).unwrap_or_default()
    }

    pub fn change_badge(&self, coin: &Coin) -> ChangeBadge {
        let percent = coin.price_change_percent;
        let label = self
            .formatter
            .unwrap_or_default()
            .format_change(percent.value());
        let (foreground, background) = if percent.is_negative() {
            (Color::WHITE, Color::RED)
        } else {
            (Color::BLACK, Color::LIGHT_GREEN)
        };
        ChangeBadge { label, foreground, background }
    }

    pub fn chart_for(&self, coin: &Coin) -> ChartGeometry {
        self.transform.transform_coin(coin)
    }

    /// Display model for the selected coin; `None` until a snapshot is loaded.
    pub fn current_view(&self, state: &BoardState) -> Option<CoinView> {
        let coin = state.selected_coin()?;
        let chart = self.chart_for(coin);

        Some(CoinView {
            coin_id: coin.id.clone(),
            name: coin.name.clone(),
            symbol: coin.symbol.value().to_string(),
            image_url: coin.image_url.clone(),
            price_label: self.format_price(coin.current_price.value()),
            change: self.change_badge(coin),
            chart_color: chart.color(),
            chart,
            tabs: selector_tabs(state),
        })
    }

    /// Line and fill vertices for the selected coin in the configured viewport
    pub fn chart_vertices(&self, state: &BoardState) -> (Vec<LineVertex>, Vec<LineVertex>) {
        match state.selected_coin() {
            Some(coin) => {
                let geometry = self.chart_for(coin);
                let viewport = &self.config.viewport;
                (
                    LineGeometry::create_line_vertices(&geometry, viewport),
                    LineGeometry::create_fill_vertices(&geometry, viewport),
                )
            }
            None => (Vec::new(), Vec::new()),
        }
    }
}
