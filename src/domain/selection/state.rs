use crate::domain::market_data::CoinId;
use serde::{Deserialize, Serialize};

/// Which coin the board is showing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "coin_id", rename_all = "snake_case")]
pub enum Selection {
    /// Before the first snapshot arrives
    #[default]
    Unselected,
    Selected(CoinId),
}

impl Selection {
    pub fn coin_id(&self) -> Option<&CoinId> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    pub fn is(&self, id: &CoinId) -> bool {
        self.coin_id() == Some(id)
    }
}

/// Result of feeding one event to the selection controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Changed { previous: Option<CoinId>, current: Option<CoinId> },
    Unchanged,
    UnknownCoin,
}

impl SelectionOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, SelectionOutcome::Changed { .. })
    }
}
