pub mod entry_page;
pub mod inventory_page;

use iced::{
    Element, Task,
    widget::{container, text},
};

use crate::gui::{AppState, Message};
use entry_page::EntryPageScreen;
use inventory_page::InventoryPageScreen;

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Loading,
    Failed(String),
    InventoryPage(InventoryPageScreen),
    EntryPage(EntryPageScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Loading => container(text("Opening inventory..."))
                .center_x(iced::Length::Fill)
                .center_y(iced::Length::Fill)
                .into(),
            ScreenData::Failed(error) => {
                container(text(format!("Failed to open inventory: {error}")))
                    .center_x(iced::Length::Fill)
                    .center_y(iced::Length::Fill)
                    .into()
            }
            ScreenData::InventoryPage(screen) => screen
                .view()
                .map(Message::InventoryPage)
                .map(ScreenMessage::ScreenMessage),
            ScreenData::EntryPage(screen) => screen
                .view()
                .map(Message::EntryPage)
                .map(ScreenMessage::ScreenMessage),
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (x, Message::DbOpened(db, inventory)) => {
                state.db = Some(db);
                *x = ScreenData::InventoryPage(inventory);
                Task::none()
            }
            (x, Message::OpenFailed(error)) => {
                *x = ScreenData::Failed(error);
                Task::none()
            }
            (ScreenData::InventoryPage(page), Message::InventoryPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::InventoryPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    inventory_page::ParentMessage::AddRequested => {
                        let Some(db) = state.db.clone() else {
                            return Task::none();
                        };
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::EntryPage(EntryPageScreen::new(db)),
                        )))
                    }
                },
            },
            (ScreenData::EntryPage(page), Message::EntryPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::EntryPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    entry_page::ParentMessage::Saved | entry_page::ParentMessage::Cancelled => {
                        let Some(db) = state.db.clone() else {
                            return Task::none();
                        };
                        // Reload the list so the new entry shows up.
                        Task::perform(
                            async move { InventoryPageScreen::new(&db).await },
                            |inventory| {
                                ScreenMessage::ScreenMessage(Message::ChangeScreen(
                                    ScreenData::InventoryPage(inventory),
                                ))
                            },
                        )
                    }
                },
            },
            _ => Task::none(),
        }
    }
}
