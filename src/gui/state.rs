use crate::core::db::InventoryDb;

#[derive(Debug, Default)]
pub struct AppState {
    pub db: Option<InventoryDb>,
}
