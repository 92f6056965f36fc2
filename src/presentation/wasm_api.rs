use wasm_bindgen::prelude::*;

use crate::application::{BoardApplicationService, TradeAction, handle_trade};
use crate::config::BoardConfig;
use crate::domain::errors::BoardError;
use crate::domain::events::{InMemoryEventDispatcher, SelectionEvent};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::CoinId;
use crate::domain::state::BoardState;
use crate::infrastructure::rendering::LineGeometry;

impl From<BoardError> for JsValue {
    fn from(err: BoardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Coin board API for a JavaScript host.
/// Thin bridge: every call goes straight to the application layer.
#[wasm_bindgen]
pub struct CoinBoardApi {
    service: BoardApplicationService<InMemoryEventDispatcher>,
    state: BoardState,
}

#[wasm_bindgen]
impl CoinBoardApi {
    /// `config_json` may be omitted or partial; missing fields use defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<CoinBoardApi, JsValue> {
        let config = match config_json {
            Some(json) => BoardConfig::from_json(&json)?,
            None => BoardConfig::default(),
        };
        get_logger().info(
            LogComponent::Presentation("WASM"),
            &format!("coin board created (default {})", config.default_symbol),
        );

        Ok(Self {
            service: BoardApplicationService::new(config, InMemoryEventDispatcher::new()),
            state: BoardState::new(),
        })
    }

    /// Replace the coin snapshot. Returns true when the selection moved.
    #[wasm_bindgen(js_name = loadSnapshot)]
    pub fn load_snapshot(&mut self, json: &str) -> Result<bool, JsValue> {
        let outcome = self.service.load_snapshot_json(&mut self.state, json)?;
        Ok(outcome.is_changed())
    }

    #[wasm_bindgen(js_name = selectCoin)]
    pub fn select_coin(&mut self, coin_id: &str) -> bool {
        self.service.select_coin(&mut self.state, &CoinId::from(coin_id)).is_changed()
    }

    #[wasm_bindgen(js_name = selectSymbol)]
    pub fn select_symbol(&mut self, symbol: &str) -> bool {
        self.service.select_symbol(&mut self.state, symbol).is_changed()
    }

    #[wasm_bindgen(js_name = selectedCoinId)]
    pub fn selected_coin_id(&self) -> Option<String> {
        self.state.selection().coin_id().map(|id| id.value().to_string())
    }

    /// Call `callback(previousId, currentId)` after every effective selection change.
    #[wasm_bindgen(js_name = onSelectionChanged)]
    pub fn on_selection_changed(&mut self, callback: js_sys::Function) {
        let to_js = |id: &Option<CoinId>| match id {
            Some(id) => JsValue::from_str(id.value()),
            None => JsValue::NULL,
        };
        self.service.controller_mut().dispatcher_mut().subscribe_to_selection_events(
            move |event: &SelectionEvent| {
                let SelectionEvent::SelectionChanged { previous, current } = event;
                if callback.call2(&JsValue::NULL, &to_js(previous), &to_js(current)).is_err() {
                    get_logger().warn(
                        LogComponent::Presentation("WASM"),
                        "selection callback threw",
                    );
                }
            },
        );
    }

    /// Flat `[x0, y0, x1, y1, ...]` unit-square points of the selected coin
    #[wasm_bindgen(js_name = chartPoints)]
    pub fn chart_points(&self) -> Vec<f64> {
        self.state
            .selected_coin()
            .map(|coin| self.service.chart_for(coin).flatten())
            .unwrap_or_default()
    }

    /// Line-strip vertex buffer for the configured viewport
    #[wasm_bindgen(js_name = lineVertexBytes)]
    pub fn line_vertex_bytes(&self) -> Vec<u8> {
        let (line, _) = self.service.chart_vertices(&self.state);
        LineGeometry::as_bytes(&line).to_vec()
    }

    /// Area-fill triangle-strip vertex buffer for the configured viewport
    #[wasm_bindgen(js_name = fillVertexBytes)]
    pub fn fill_vertex_bytes(&self) -> Vec<u8> {
        let (_, fill) = self.service.chart_vertices(&self.state);
        LineGeometry::as_bytes(&fill).to_vec()
    }

    /// Display model of the selected coin as JSON, `undefined` before load
    #[wasm_bindgen(js_name = currentViewJson)]
    pub fn current_view_json(&self) -> Result<Option<String>, JsValue> {
        match self.service.current_view(&self.state) {
            Some(view) => serde_json::to_string(&view)
                .map(Some)
                .map_err(|e| JsValue::from(BoardError::from(e))),
            None => Ok(None),
        }
    }

    #[wasm_bindgen(js_name = formatPrice)]
    pub fn format_price(&self, amount: f64) -> String {
        self.service.format_price(amount)
    }

    /// "buy" or "sell"; accepted and ignored
    pub fn trade(&self, action: &str) -> Result<(), JsValue> {
        let action = action
            .parse::<TradeAction>()
            .map_err(|_| JsValue::from_str(&format!("unknown trade action '{}'", action)))?;
        handle_trade(action, &self.state);
        Ok(())
    }
}
