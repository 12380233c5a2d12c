mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from plantstock for tests
pub use plantstock::core::db::{InventoryDb, Planta, PlantaRepository};
pub use plantstock::entry::{
    EntryUiState, PlantaDetails, PlantaEntryForm, format_price, validate_input,
};
