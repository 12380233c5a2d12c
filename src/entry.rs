//! Form state for adding a new planta to the inventory.
//!
//! Field values are kept as raw strings so the form can hold in-progress,
//! possibly-invalid input; conversion to [`Planta`] happens only on save.

use tokio::sync::watch;

use crate::core::db::{Planta, PlantaRepository};

/// In-progress contents of the entry form. `id` is 0 for a new item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantaDetails {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub quantity: String,
}

/// Snapshot of the entry form plus its derived validity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryUiState {
    pub details: PlantaDetails,
    pub is_valid: bool,
}

/// Controller for the planta entry screen.
///
/// Holds the current [`EntryUiState`], recomputes validity on every edit and
/// forwards a converted [`Planta`] to the repository on save. State is
/// replaced wholesale, never mutated, so every value an observer sees is a
/// complete snapshot with `is_valid` matching its `details`.
#[derive(Debug, Clone)]
pub struct PlantaEntryForm<R> {
    repository: R,
    state: watch::Sender<EntryUiState>,
}

impl<R: PlantaRepository> PlantaEntryForm<R> {
    pub fn new(repository: R) -> Self {
        let (state, _) = watch::channel(EntryUiState::default());
        Self { repository, state }
    }

    /// Current form state.
    pub fn ui_state(&self) -> EntryUiState {
        self.state.borrow().clone()
    }

    /// Subscribe to state replacements.
    pub fn subscribe(&self) -> watch::Receiver<EntryUiState> {
        self.state.subscribe()
    }

    /// Replace the form state with `details` and its freshly computed
    /// validity.
    pub fn update_ui_state(&self, details: PlantaDetails) {
        let is_valid = validate_input(&details);
        self.state.send_replace(EntryUiState { details, is_valid });
    }

    /// Persist the current entry if it is valid.
    ///
    /// Saving invalid state is a silent no-op; the UI is expected to keep the
    /// save action disabled while `is_valid` is false. Repository errors
    /// propagate unchanged.
    pub async fn save_item(&self) -> anyhow::Result<()> {
        let details = self.state.borrow().details.clone();
        if !validate_input(&details) {
            tracing::warn!("save requested with invalid entry, ignoring");
            return Ok(());
        }
        self.repository.insert_planta(&details.to_planta()).await?;
        Ok(())
    }
}

/// True iff every field of the form is non-blank after trimming. Numeric
/// parseability is deliberately not checked here.
pub fn validate_input(details: &PlantaDetails) -> bool {
    !details.name.trim().is_empty()
        && !details.price.trim().is_empty()
        && !details.quantity.trim().is_empty()
}

impl PlantaDetails {
    /// Convert to the persisted record. Unparsable numeric input degrades to
    /// zero instead of failing; [`validate_input`] only guards against blank
    /// fields, so "abc" as a price is stored as 0.0.
    pub fn to_planta(&self) -> Planta {
        let price = self.price.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(price = %self.price, "unparsable price, storing 0.0");
            0.0
        });
        let quantity = self.quantity.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(quantity = %self.quantity, "unparsable quantity, storing 0");
            0
        });
        Planta {
            id: self.id,
            name: self.name.clone(),
            price,
            quantity,
        }
    }
}

impl Planta {
    pub fn to_details(&self) -> PlantaDetails {
        PlantaDetails {
            id: self.id,
            name: self.name.clone(),
            price: self.price.to_string(),
            quantity: self.quantity.to_string(),
        }
    }

    pub fn to_ui_state(&self, is_valid: bool) -> EntryUiState {
        EntryUiState {
            details: self.to_details(),
            is_valid,
        }
    }

    /// Price rendered as en-US currency, e.g. "$1,234.50".
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
