use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, scrollable, text},
};

use crate::core::db::{InventoryDb, Planta, PlantaRepository};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

#[derive(Debug, Clone)]
pub struct InventoryPageScreen {
    plantas: Vec<Planta>,
}

#[derive(Debug, Clone)]
pub enum InventoryPageMessage {
    AddPressed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    AddRequested,
}

impl Screen for InventoryPageScreen {
    type Message = InventoryPageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut rows = column![
            row![
                text("Planta").width(Length::FillPortion(3)),
                text("Price").width(Length::FillPortion(1)),
                text("Qty").width(Length::FillPortion(1)),
            ]
            .spacing(10),
        ]
        .spacing(5);
        for planta in &self.plantas {
            rows = rows.push(
                row![
                    text(planta.name.as_str()).width(Length::FillPortion(3)),
                    text(planta.formatted_price()).width(Length::FillPortion(1)),
                    text(planta.quantity.to_string()).width(Length::FillPortion(1)),
                ]
                .spacing(10),
            );
        }

        let content = column![
            text("Plantstock Inventory").size(32),
            scrollable(rows).height(Length::Fill),
            button("Add Planta").on_press(ScreenMessage::ScreenMessage(
                InventoryPageMessage::AddPressed
            )),
        ]
        .spacing(20)
        .padding(20);

        container(content).center_x(Length::Fill).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            InventoryPageMessage::AddPressed => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::AddRequested))
            }
        }
    }
}

impl InventoryPageScreen {
    pub async fn new(db: &InventoryDb) -> Self {
        let plantas = db.get_plantas().await.unwrap_or_else(|error| {
            tracing::error!(%error, "failed to load inventory");
            Vec::new()
        });
        Self { plantas }
    }
}
