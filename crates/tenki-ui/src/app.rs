use std::sync::Arc;

use iced::{Element, Task, Theme};
use tenki_core::UiConfig;
use tenki_jma::JmaClient;

use crate::models::{ForecastModel, RegionListModel};
use crate::services::{
    request_forecast_fetch, request_region_fetch, ForecastServiceMessage, RegionServiceMessage,
};
use crate::view;

#[derive(Debug, Clone)]
pub enum Message {
    Region(RegionServiceMessage),
    Forecast(ForecastServiceMessage),
    RegionSelected(String),
    FilterChanged(String),
}

pub struct App {
    client: Arc<JmaClient>,
    pub(crate) regions: RegionListModel,
    pub(crate) forecast: ForecastModel,
    pub(crate) ui: UiConfig,
}

impl App {
    /// Build the initial state and start loading the region catalog.
    pub fn new(ui: UiConfig, client: Arc<JmaClient>) -> (Self, Task<Message>) {
        let mut regions = RegionListModel::default();
        regions.begin_load();

        let task = Task::perform(request_region_fetch(client.clone()), Message::Region);
        let app = Self {
            client,
            regions,
            forecast: ForecastModel::default(),
            ui,
        };
        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Region(msg) => {
                self.regions.apply(msg);
                Task::none()
            }
            Message::Forecast(msg) => {
                self.forecast.apply(msg);
                Task::none()
            }
            Message::RegionSelected(code) => {
                if !self.regions.select(&code) {
                    return Task::none();
                }
                let generation = self.forecast.begin(&code);
                tracing::debug!("Requesting forecast for {} (generation {})", code, generation);
                Task::perform(
                    request_forecast_fetch(self.client.clone(), generation, code),
                    Message::Forecast,
                )
            }
            Message::FilterChanged(filter) => {
                self.regions.set_filter(filter);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::main(self)
    }

    pub fn theme(&self) -> Theme {
        if self.ui.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
