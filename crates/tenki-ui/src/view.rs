//! Widget tree for the main window.

use iced::widget::{
    button, column, container, horizontal_rule, row, scrollable, text, text_input, Column, Row,
};
use iced::{Color, Element, Length, Theme};
use tenki_jma::{ForecastCard, ReportHeader, NOT_AVAILABLE};

use crate::app::{App, Message};
use crate::models::{ForecastStatus, LoadStatus};

const MAX_TEMP_COLOR: Color = Color::from_rgb(0.85, 0.2, 0.2);
const MIN_TEMP_COLOR: Color = Color::from_rgb(0.2, 0.4, 0.85);

pub fn main(app: &App) -> Element<'_, Message> {
    row![
        container(region_pane(app))
            .width(Length::FillPortion(1))
            .height(Length::Fill),
        container(forecast_pane(app))
            .width(Length::FillPortion(3))
            .height(Length::Fill),
    ]
    .spacing(16)
    .padding(16)
    .into()
}

fn region_pane(app: &App) -> Element<'_, Message> {
    let filter = text_input("Filter regions", app.regions.filter())
        .on_input(Message::FilterChanged)
        .padding(6);

    let list = app
        .regions
        .visible()
        .fold(Column::new().spacing(2), |list, region| {
            let style: fn(&Theme, button::Status) -> button::Style =
                if app.regions.is_selected(&region.code) {
                    button::primary
                } else {
                    button::text
                };
            list.push(
                button(text(region.name.as_str()))
                    .width(Length::Fill)
                    .style(style)
                    .on_press(Message::RegionSelected(region.code.clone())),
            )
        });

    let mut pane = column![text("Regions").size(22), filter].spacing(10);
    if let Some(line) = region_status_line(app.regions.status(), app.regions.len()) {
        pane = pane.push(text(line).size(13));
    }
    pane.push(scrollable(list).height(Length::Fill)).into()
}

fn forecast_pane(app: &App) -> Element<'_, Message> {
    let title = match app.regions.selected() {
        Some(region) => format!("Forecast: {}", region.name),
        None => "Forecast".to_string(),
    };
    let mut pane = column![text(title).size(22)].spacing(10);

    if let Some(line) = app.forecast.header().and_then(header_line) {
        pane = pane.push(text(line).size(13));
    }
    pane = pane.push(horizontal_rule(1));

    let body: Element<'_, Message> = match app.forecast.status() {
        ForecastStatus::Ready => card_grid(app.forecast.cards(), app.ui.cards_per_row),
        status => text(forecast_status_line(status)).into(),
    };
    pane.push(scrollable(body).height(Length::Fill)).into()
}

fn card_grid(cards: &[ForecastCard], per_row: u32) -> Element<'_, Message> {
    let per_row = per_row.max(1) as usize;
    cards
        .chunks(per_row)
        .fold(Column::new().spacing(12), |grid, chunk| {
            let line = chunk
                .iter()
                .fold(Row::new().spacing(12), |line, c| line.push(card(c)));
            grid.push(line)
        })
        .into()
}

fn card(card: &ForecastCard) -> Element<'_, Message> {
    container(
        column![
            text(card.area_name.as_str()).size(16),
            text(date_label(card)).size(13),
            text(card.condition.as_str()),
            row![
                text(temperature_label("Max", &card.max_temp)).color(MAX_TEMP_COLOR),
                text(temperature_label("Min", &card.min_temp)).color(MIN_TEMP_COLOR),
            ]
            .spacing(12),
        ]
        .spacing(6),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn date_label(card: &ForecastCard) -> String {
    match card.weekday() {
        Some(day) => format!("{} ({})", card.date, day),
        None => card.date.clone(),
    }
}

fn temperature_label(label: &str, value: &str) -> String {
    if value == NOT_AVAILABLE {
        format!("{} {}", label, value)
    } else {
        format!("{} {}°C", label, value)
    }
}

fn header_line(header: &ReportHeader) -> Option<String> {
    let time = header
        .report_datetime
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string());
    match (header.publishing_office.as_deref(), time) {
        (Some(office), Some(time)) => Some(format!("{}, issued {}", office, time)),
        (Some(office), None) => Some(office.to_string()),
        (None, Some(time)) => Some(format!("Issued {}", time)),
        (None, None) => None,
    }
}

fn region_status_line(status: &LoadStatus, count: usize) -> Option<String> {
    match status {
        LoadStatus::Idle => None,
        LoadStatus::Loading => Some("Loading regions...".to_string()),
        LoadStatus::Ready if count == 0 => Some("No regions available".to_string()),
        LoadStatus::Ready => None,
        LoadStatus::Error(msg) => Some(msg.clone()),
    }
}

fn forecast_status_line(status: &ForecastStatus) -> String {
    match status {
        ForecastStatus::Idle => "Select a region to see its forecast".to_string(),
        ForecastStatus::Loading => "Loading forecast...".to_string(),
        ForecastStatus::Ready => String::new(),
        ForecastStatus::NoData => "No forecast data for this region".to_string(),
        ForecastStatus::Error(msg) => msg.clone(),
    }
}
