//! Right pane state: cards for the most recent selection.
//!
//! Every selection starts a new generation. Results from older generations
//! are dropped on arrival, so the pane only ever shows the latest selection,
//! and a result replaces the cards in one step.

use tenki_jma::{Alignment, ForecastCard, ReportHeader};

use crate::error_mapping::describe;
use crate::services::ForecastServiceMessage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ForecastStatus {
    /// Nothing selected yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// The report had no dated series
    NoData,
    Error(String),
}

#[derive(Debug, Default)]
pub struct ForecastModel {
    generation: u64,
    region_code: Option<String>,
    status: ForecastStatus,
    cards: Vec<ForecastCard>,
    header: Option<ReportHeader>,
}

impl ForecastModel {
    /// Start showing `region_code`: clears the pane and returns the
    /// generation the request must carry.
    pub fn begin(&mut self, region_code: &str) -> u64 {
        self.generation += 1;
        self.region_code = Some(region_code.to_string());
        self.status = ForecastStatus::Loading;
        self.cards.clear();
        self.header = None;
        self.generation
    }

    /// Apply a service result. Returns false when it was stale and ignored.
    pub fn apply(&mut self, msg: ForecastServiceMessage) -> bool {
        let ForecastServiceMessage::FetchDone {
            generation,
            region_code,
            result,
        } = msg;

        if generation != self.generation {
            tracing::debug!(
                "Discarding stale forecast for {} (generation {}, current {})",
                region_code,
                generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(loaded) => {
                self.header = Some(loaded.header);
                match loaded.alignment {
                    Alignment::Cards(cards) => {
                        self.cards = cards;
                        self.status = ForecastStatus::Ready;
                    }
                    Alignment::NoData => {
                        self.cards.clear();
                        self.status = ForecastStatus::NoData;
                    }
                }
            }
            Err(e) => {
                self.cards.clear();
                self.header = None;
                self.status = ForecastStatus::Error(describe(e));
            }
        }
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn region_code(&self) -> Option<&str> {
        self.region_code.as_deref()
    }

    pub fn status(&self) -> &ForecastStatus {
        &self.status
    }

    pub fn cards(&self) -> &[ForecastCard] {
        &self.cards
    }

    pub fn header(&self) -> Option<&ReportHeader> {
        self.header.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == ForecastStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ForecastError, LoadedForecast};

    fn card(area: &str, date: &str) -> ForecastCard {
        ForecastCard {
            area_name: area.into(),
            date: date.into(),
            condition: "晴れ".into(),
            max_temp: "12".into(),
            min_temp: "5".into(),
        }
    }

    fn done(
        generation: u64,
        code: &str,
        result: Result<LoadedForecast, ForecastError>,
    ) -> ForecastServiceMessage {
        ForecastServiceMessage::FetchDone {
            generation,
            region_code: code.into(),
            result,
        }
    }

    fn loaded(cards: Vec<ForecastCard>) -> Result<LoadedForecast, ForecastError> {
        Ok(LoadedForecast {
            header: ReportHeader {
                publishing_office: Some("気象庁".into()),
                report_datetime: None,
            },
            alignment: Alignment::Cards(cards),
        })
    }

    #[test]
    fn begin_clears_and_bumps_generation() {
        let mut model = ForecastModel::default();
        let first = model.begin("130000");
        assert!(model.apply(done(first, "130000", loaded(vec![card("東京地方", "2024-01-01")]))));
        assert_eq!(model.cards().len(), 1);

        let second = model.begin("270000");
        assert!(second > first);
        assert!(model.is_loading());
        assert!(model.cards().is_empty());
        assert!(model.header().is_none());
        assert_eq!(model.region_code(), Some("270000"));
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut model = ForecastModel::default();
        let tokyo = model.begin("130000");
        let osaka = model.begin("270000");

        // Osaka answers first, then the superseded Tokyo request lands.
        assert!(model.apply(done(osaka, "270000", loaded(vec![card("大阪府", "2024-01-01")]))));
        assert!(!model.apply(done(tokyo, "130000", loaded(vec![card("東京地方", "2024-01-01")]))));

        assert_eq!(model.status(), &ForecastStatus::Ready);
        assert_eq!(model.cards()[0].area_name, "大阪府");
    }

    #[test]
    fn stale_error_does_not_clobber_loading() {
        let mut model = ForecastModel::default();
        let old = model.begin("130000");
        model.begin("270000");

        assert!(!model.apply(done(old, "130000", Err(ForecastError::Network("reset".into())))));
        assert!(model.is_loading());
    }

    #[test]
    fn no_data_is_distinct_from_error() {
        let mut model = ForecastModel::default();
        let generation = model.begin("016000");
        model.apply(done(
            generation,
            "016000",
            Ok(LoadedForecast {
                header: ReportHeader::default(),
                alignment: Alignment::NoData,
            }),
        ));

        assert_eq!(model.status(), &ForecastStatus::NoData);
        assert!(model.cards().is_empty());
    }

    #[test]
    fn error_leaves_no_partial_cards() {
        let mut model = ForecastModel::default();
        let generation = model.begin("130000");
        model.apply(done(
            generation,
            "130000",
            Err(ForecastError::Misaligned("3 temperature areas for 1".into())),
        ));

        assert!(model.cards().is_empty());
        match model.status() {
            ForecastStatus::Error(msg) => assert!(msg.contains("inconsistent"), "{}", msg),
            other => panic!("expected error status, got {:?}", other),
        }
    }
}
