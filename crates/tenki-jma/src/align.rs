//! Forecast alignment: pair the first time series' weather texts with the
//! last time series' temperature pairs, date by date.
//!
//! The JMA report keeps these in separate blocks whose areas line up by
//! position (weather areas use forecast-district codes, temperature areas use
//! observation-point codes). When both blocks share one code namespace the
//! areas are paired by code instead.

use std::collections::HashMap;

use crate::document::{AreaSeries, ForecastDocument};
use crate::types::ForecastCard;

/// Substituted for a missing temperature
pub const NOT_AVAILABLE: &str = "N/A";

/// Substituted for a missing weather text
pub const NO_CONDITION: &str = "No data";

/// Outcome of a successful alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// The report carries no dated series
    NoData,
    /// Cards in area-major, date-minor order
    Cards(Vec<ForecastCard>),
}

impl Alignment {
    pub fn cards(&self) -> &[ForecastCard] {
        match self {
            Self::NoData => &[],
            Self::Cards(cards) => cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("temperature series lists {temperature_areas} areas but the weather series only {weather_areas}")]
    AreaCountMismatch {
        weather_areas: usize,
        temperature_areas: usize,
    },
    #[error("area code {0} appears more than once in the temperature series")]
    DuplicateAreaCode(String),
}

/// Reduce a forecast report to display cards.
///
/// All-or-nothing: an error means no cards for this report.
pub fn align_forecast(doc: &ForecastDocument) -> Result<Alignment, AlignError> {
    let (Some(first), Some(last)) = (doc.time_series.first(), doc.time_series.last()) else {
        return Ok(Alignment::NoData);
    };
    if first.time_defines.is_empty() {
        return Ok(Alignment::NoData);
    }

    let dates: Vec<&str> = first.time_defines.iter().map(|t| date_part(t)).collect();
    let temperatures = pair_temperatures(&first.areas, &last.areas)?;

    let mut cards = Vec::with_capacity(first.areas.len() * dates.len());
    for (area, temps) in first.areas.iter().zip(temperatures) {
        // Areas without a name or any weather text are not forecast districts.
        if area.area.name.is_empty() || area.weathers.is_empty() {
            continue;
        }
        for (j, date) in dates.iter().enumerate() {
            cards.push(ForecastCard {
                area_name: area.area.name.clone(),
                date: (*date).to_string(),
                condition: area
                    .weathers
                    .get(j)
                    .cloned()
                    .unwrap_or_else(|| NO_CONDITION.to_string()),
                max_temp: temperature_at(temps, 2 * j + 1),
                min_temp: temperature_at(temps, 2 * j),
            });
        }
    }

    if cards.is_empty() {
        return Ok(Alignment::NoData);
    }
    tracing::debug!(
        areas = first.areas.len(),
        dates = dates.len(),
        "Aligned {} forecast cards",
        cards.len()
    );
    Ok(Alignment::Cards(cards))
}

fn date_part(time_define: &str) -> &str {
    time_define.split('T').next().unwrap_or(time_define)
}

fn temperature_at(temps: &[String], index: usize) -> String {
    temps
        .get(index)
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// One temperature list per weather area, empty where nothing pairs.
fn pair_temperatures<'a>(
    weather: &[AreaSeries],
    temperature: &'a [AreaSeries],
) -> Result<Vec<&'a [String]>, AlignError> {
    if let Some(by_code) = temperatures_by_code(weather, temperature)? {
        return Ok(weather
            .iter()
            .map(|area| {
                area.area
                    .code
                    .as_deref()
                    .and_then(|code| by_code.get(code).copied())
                    .unwrap_or(&[])
            })
            .collect());
    }

    if temperature.len() > weather.len() {
        return Err(AlignError::AreaCountMismatch {
            weather_areas: weather.len(),
            temperature_areas: temperature.len(),
        });
    }

    Ok((0..weather.len())
        .map(|i| temperature.get(i).map_or(&[][..], |a| a.temps.as_slice()))
        .collect())
}

/// `Some` when every area on both sides has a code and every temperature
/// code is also a weather code; `None` means fall back to positions.
fn temperatures_by_code<'a>(
    weather: &[AreaSeries],
    temperature: &'a [AreaSeries],
) -> Result<Option<HashMap<&'a str, &'a [String]>>, AlignError> {
    if temperature.is_empty() {
        return Ok(None);
    }

    let Some(weather_codes) = weather
        .iter()
        .map(|a| a.area.code.as_deref())
        .collect::<Option<Vec<&str>>>()
    else {
        return Ok(None);
    };

    let mut by_code = HashMap::with_capacity(temperature.len());
    for area in temperature {
        let Some(code) = area.area.code.as_deref() else {
            return Ok(None);
        };
        if !weather_codes.contains(&code) {
            return Ok(None);
        }
        if by_code.insert(code, area.temps.as_slice()).is_some() {
            return Err(AlignError::DuplicateAreaCode(code.to_string()));
        }
    }

    Ok(Some(by_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AreaRef, TimeSeries};

    fn weather_area(name: &str, code: Option<&str>, weathers: &[&str]) -> AreaSeries {
        AreaSeries {
            area: AreaRef {
                name: name.to_string(),
                code: code.map(str::to_string),
            },
            weathers: weathers.iter().map(|s| s.to_string()).collect(),
            temps: Vec::new(),
        }
    }

    fn temp_area(code: Option<&str>, temps: &[&str]) -> AreaSeries {
        AreaSeries {
            area: AreaRef {
                name: String::new(),
                code: code.map(str::to_string),
            },
            weathers: Vec::new(),
            temps: temps.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn doc(dates: &[&str], weather: Vec<AreaSeries>, temps: Vec<AreaSeries>) -> ForecastDocument {
        ForecastDocument {
            time_series: vec![
                TimeSeries {
                    time_defines: dates.iter().map(|s| s.to_string()).collect(),
                    areas: weather,
                },
                TimeSeries {
                    time_defines: Vec::new(),
                    areas: temps,
                },
            ],
            ..Default::default()
        }
    }

    fn temps_of(cards: &[ForecastCard]) -> Vec<(&str, &str)> {
        cards
            .iter()
            .map(|c| (c.min_temp.as_str(), c.max_temp.as_str()))
            .collect()
    }

    #[test]
    fn test_no_time_series_is_no_data() {
        assert_eq!(
            align_forecast(&ForecastDocument::default()),
            Ok(Alignment::NoData)
        );
    }

    #[test]
    fn test_empty_time_defines_is_no_data() {
        let doc = doc(&[], vec![weather_area("東京地方", None, &["晴れ"])], vec![]);
        assert_eq!(align_forecast(&doc), Ok(Alignment::NoData));
    }

    #[test]
    fn test_no_areas_is_no_data() {
        let doc = doc(&["2024-01-01T00:00:00Z"], vec![], vec![]);
        assert_eq!(align_forecast(&doc), Ok(Alignment::NoData));
    }

    #[test]
    fn test_unnamed_and_weatherless_areas_are_skipped() {
        let doc = doc(
            &["2024-01-01T00:00:00Z"],
            vec![
                weather_area("Tokyo", None, &["Sunny"]),
                weather_area("Izu", None, &[]),
                weather_area("", None, &["Rain"]),
            ],
            vec![temp_area(None, &["5", "12"])],
        );

        let aligned = align_forecast(&doc).unwrap();
        let cards = aligned.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].area_name, "Tokyo");
        assert_eq!(temps_of(cards), vec![("5", "12")]);
    }

    #[test]
    fn test_skipped_area_keeps_later_pairing() {
        let doc = doc(
            &["2024-01-01T00:00:00Z"],
            vec![
                weather_area("Izu", None, &[]),
                weather_area("Tokyo", None, &["Sunny"]),
            ],
            vec![temp_area(None, &["1", "2"]), temp_area(None, &["5", "12"])],
        );

        let aligned = align_forecast(&doc).unwrap();
        assert_eq!(aligned.cards()[0].area_name, "Tokyo");
        assert_eq!(temps_of(aligned.cards()), vec![("5", "12")]);
    }

    #[test]
    fn test_only_skipped_areas_is_no_data() {
        let doc = doc(
            &["2024-01-01T00:00:00Z"],
            vec![weather_area("Izu", None, &[])],
            vec![],
        );
        assert_eq!(align_forecast(&doc), Ok(Alignment::NoData));
    }

    #[test]
    fn test_tokyo_example() {
        let doc = ForecastDocument::from_json(
            r#"{"timeSeries":[
                {"timeDefines":["2024-01-01T00:00:00Z","2024-01-02T00:00:00Z"],
                 "areas":[{"area":{"name":"Tokyo"},"weathers":["Sunny","Cloudy"]}]},
                {"areas":[{"temps":["5","12","3","10"]}]}
            ]}"#,
        )
        .unwrap();

        let aligned = align_forecast(&doc).unwrap();
        assert_eq!(
            aligned.cards(),
            &[
                ForecastCard {
                    area_name: "Tokyo".into(),
                    date: "2024-01-01".into(),
                    condition: "Sunny".into(),
                    max_temp: "12".into(),
                    min_temp: "5".into(),
                },
                ForecastCard {
                    area_name: "Tokyo".into(),
                    date: "2024-01-02".into(),
                    condition: "Cloudy".into(),
                    max_temp: "10".into(),
                    min_temp: "3".into(),
                },
            ]
        );
    }

    #[test]
    fn test_three_days_pair_in_date_order() {
        let doc = doc(
            &["2024-01-01T11:00:00+09:00", "2024-01-02T00:00:00+09:00", "2024-01-03T00:00:00+09:00"],
            vec![weather_area("東京地方", None, &["晴れ", "くもり", "雨"])],
            vec![temp_area(None, &["1", "9", "2", "10", "3", "11"])],
        );

        let aligned = align_forecast(&doc).unwrap();
        let cards = aligned.cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(temps_of(cards), vec![("1", "9"), ("2", "10"), ("3", "11")]);
        let dates: Vec<&str> = cards.iter().map(|c| c.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(cards[2].condition, "雨");
    }

    #[test]
    fn test_short_temperature_list_yields_not_available() {
        let doc = doc(
            &["2024-01-01", "2024-01-02", "2024-01-03"],
            vec![weather_area("東京地方", None, &["晴れ", "くもり", "雨"])],
            vec![temp_area(None, &["1", "9", "2"])],
        );

        let aligned = align_forecast(&doc).unwrap();
        assert_eq!(
            temps_of(aligned.cards()),
            vec![("1", "9"), ("2", NOT_AVAILABLE), (NOT_AVAILABLE, NOT_AVAILABLE)]
        );
    }

    #[test]
    fn test_missing_weather_text_uses_placeholder() {
        let doc = doc(
            &["2024-01-01", "2024-01-02"],
            vec![weather_area("東京地方", None, &["晴れ"])],
            vec![],
        );

        let aligned = align_forecast(&doc).unwrap();
        assert_eq!(aligned.cards()[1].condition, NO_CONDITION);
    }

    #[test]
    fn test_fewer_temperature_areas_than_weather_areas() {
        let doc = doc(
            &["2024-01-01"],
            vec![
                weather_area("東京地方", None, &["晴れ"]),
                weather_area("伊豆諸島北部", None, &["くもり"]),
                weather_area("小笠原諸島", None, &["雨"]),
            ],
            vec![temp_area(None, &["5", "12"])],
        );

        let aligned = align_forecast(&doc).unwrap();
        assert_eq!(
            temps_of(aligned.cards()),
            vec![
                ("5", "12"),
                (NOT_AVAILABLE, NOT_AVAILABLE),
                (NOT_AVAILABLE, NOT_AVAILABLE)
            ]
        );
    }

    #[test]
    fn test_jma_codes_pair_by_position() {
        // Forecast-district codes vs observation-point codes never overlap.
        let doc = doc(
            &["2024-01-01"],
            vec![
                weather_area("東京地方", Some("130010"), &["晴れ"]),
                weather_area("伊豆諸島北部", Some("130020"), &["くもり"]),
            ],
            vec![
                temp_area(Some("44132"), &["5", "12"]),
                temp_area(Some("44172"), &["8", "13"]),
            ],
        );

        let aligned = align_forecast(&doc).unwrap();
        assert_eq!(temps_of(aligned.cards()), vec![("5", "12"), ("8", "13")]);
    }

    #[test]
    fn test_shared_codes_pair_by_key() {
        let doc = doc(
            &["2024-01-01"],
            vec![
                weather_area("北部", Some("200010"), &["雪"]),
                weather_area("中部", Some("200020"), &["くもり"]),
                weather_area("南部", Some("200030"), &["晴れ"]),
            ],
            vec![
                temp_area(Some("200030"), &["0", "9"]),
                temp_area(Some("200010"), &["-4", "2"]),
            ],
        );

        let aligned = align_forecast(&doc).unwrap();
        assert_eq!(
            temps_of(aligned.cards()),
            vec![("-4", "2"), (NOT_AVAILABLE, NOT_AVAILABLE), ("0", "9")]
        );
    }

    #[test]
    fn test_duplicate_code_is_an_error() {
        let doc = doc(
            &["2024-01-01"],
            vec![weather_area("北部", Some("200010"), &["雪"])],
            vec![
                temp_area(Some("200010"), &["-4", "2"]),
                temp_area(Some("200010"), &["-3", "1"]),
            ],
        );

        assert_eq!(
            align_forecast(&doc),
            Err(AlignError::DuplicateAreaCode("200010".into()))
        );
    }

    #[test]
    fn test_unattributable_temperature_areas_are_an_error() {
        let doc = doc(
            &["2024-01-01"],
            vec![weather_area("東京地方", None, &["晴れ"])],
            vec![temp_area(None, &["5", "12"]), temp_area(None, &["8", "13"])],
        );

        assert_eq!(
            align_forecast(&doc),
            Err(AlignError::AreaCountMismatch {
                weather_areas: 1,
                temperature_areas: 2,
            })
        );
    }

    #[test]
    fn test_single_block_has_no_temperatures() {
        let doc = ForecastDocument {
            time_series: vec![TimeSeries {
                time_defines: vec!["2024-01-01T00:00:00Z".into()],
                areas: vec![weather_area("東京地方", Some("130010"), &["晴れ"])],
            }],
            ..Default::default()
        };

        let aligned = align_forecast(&doc).unwrap();
        assert_eq!(temps_of(aligned.cards()), vec![(NOT_AVAILABLE, NOT_AVAILABLE)]);
    }

    #[test]
    fn test_cards_are_area_major() {
        let doc = doc(
            &["2024-01-01", "2024-01-02"],
            vec![
                weather_area("A", None, &["a1", "a2"]),
                weather_area("B", None, &["b1", "b2"]),
            ],
            vec![],
        );

        let aligned = align_forecast(&doc).unwrap();
        let order: Vec<&str> = aligned
            .cards()
            .iter()
            .map(|c| c.condition.as_str())
            .collect();
        assert_eq!(order, vec!["a1", "a2", "b1", "b2"]);
    }
}
