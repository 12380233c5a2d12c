use crate::core::db::InventoryDb;
use crate::gui::screens::{
    ScreenData, ScreenMessage, entry_page::EntryPageScreen, inventory_page::InventoryPageScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    DbOpened(InventoryDb, InventoryPageScreen),
    OpenFailed(String),
    ChangeScreen(ScreenData),
    InventoryPage(ScreenMessage<InventoryPageScreen>),
    EntryPage(ScreenMessage<EntryPageScreen>),
}
