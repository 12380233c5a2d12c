use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};

use crate::core::db::InventoryDb;
use crate::entry::PlantaEntryForm;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone)]
pub struct EntryPageScreen {
    form: PlantaEntryForm<InventoryDb>,
}

#[derive(Debug, Clone)]
pub enum EntryPageMessage {
    NameChanged(String),
    PriceChanged(String),
    QuantityChanged(String),
    SavePressed,
    SaveFinished(Result<(), String>),
    CancelPressed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Saved,
    Cancelled,
}

impl Screen for EntryPageScreen {
    type Message = EntryPageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let ui_state = self.form.ui_state();

        // Save stays disabled until every field is non-blank.
        let save = if ui_state.is_valid {
            button("Save").on_press(ScreenMessage::ScreenMessage(EntryPageMessage::SavePressed))
        } else {
            button("Save")
        };

        let content = column![
            text("Add Planta").size(32),
            text_input("Name", &ui_state.details.name).on_input(|value| {
                ScreenMessage::ScreenMessage(EntryPageMessage::NameChanged(value))
            }),
            text_input("Price", &ui_state.details.price).on_input(|value| {
                ScreenMessage::ScreenMessage(EntryPageMessage::PriceChanged(value))
            }),
            text_input("Quantity", &ui_state.details.quantity).on_input(|value| {
                ScreenMessage::ScreenMessage(EntryPageMessage::QuantityChanged(value))
            }),
            row![
                save,
                button("Cancel").on_press(ScreenMessage::ScreenMessage(
                    EntryPageMessage::CancelPressed
                )),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(20)
        .width(Length::Fixed(400.0));

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            EntryPageMessage::NameChanged(name) => {
                let mut details = self.form.ui_state().details;
                details.name = name;
                self.form.update_ui_state(details);
                Task::none()
            }
            EntryPageMessage::PriceChanged(price) => {
                let mut details = self.form.ui_state().details;
                details.price = price;
                self.form.update_ui_state(details);
                Task::none()
            }
            EntryPageMessage::QuantityChanged(quantity) => {
                let mut details = self.form.ui_state().details;
                details.quantity = quantity;
                self.form.update_ui_state(details);
                Task::none()
            }
            EntryPageMessage::SavePressed => {
                let form = self.form.clone();
                Task::perform(
                    async move { form.save_item().await.map_err(|e| e.to_string()) },
                    |result| ScreenMessage::ScreenMessage(EntryPageMessage::SaveFinished(result)),
                )
            }
            EntryPageMessage::SaveFinished(Ok(())) => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Saved))
            }
            EntryPageMessage::SaveFinished(Err(error)) => {
                tracing::error!(%error, "failed to save planta");
                Task::none()
            }
            EntryPageMessage::CancelPressed => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Cancelled))
            }
        }
    }
}

impl EntryPageScreen {
    pub fn new(db: InventoryDb) -> Self {
        Self {
            form: PlantaEntryForm::new(db),
        }
    }
}
