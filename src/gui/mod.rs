mod message;
mod screens;
mod state;

use std::path::PathBuf;

use iced::{Element, Task, Theme};

pub use message::Message;
pub use state::AppState;

use crate::core::db::InventoryDb;
use screens::{Screen, ScreenData, ScreenMessage, inventory_page::InventoryPageScreen};

pub fn run(db_file: PathBuf) -> iced::Result {
    iced::application(
        move || PlantstockApp::new(db_file.clone()),
        PlantstockApp::update,
        PlantstockApp::view,
    )
    .title("Plantstock - Plant Inventory")
    .theme(|_: &PlantstockApp| Theme::Dark)
    .run()
}

pub struct PlantstockApp {
    state: AppState,
    screen: ScreenData,
}

impl PlantstockApp {
    fn new(db_file: PathBuf) -> (Self, Task<Message>) {
        let open = Task::perform(open_inventory(db_file), |result| match result {
            Ok((db, inventory)) => Message::DbOpened(db, inventory),
            Err(error) => Message::OpenFailed(error.to_string()),
        });
        (
            Self {
                state: AppState::default(),
                screen: ScreenData::Loading,
            },
            open,
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_screen_message)
    }
}

async fn open_inventory(db_file: PathBuf) -> anyhow::Result<(InventoryDb, InventoryPageScreen)> {
    let db = InventoryDb::new(&db_file).await?;
    let inventory = InventoryPageScreen::new(&db).await;
    Ok((db, inventory))
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
