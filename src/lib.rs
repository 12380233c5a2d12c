pub mod core;
pub mod entry;

pub use entry::{EntryUiState, PlantaDetails, PlantaEntryForm, format_price, validate_input};

#[cfg(feature = "gui")]
pub mod gui;
