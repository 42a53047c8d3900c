//! Area catalog parsing (`area.json`).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{JmaError, Region};

#[derive(Debug, Deserialize)]
struct AreaCatalog {
    #[serde(default)]
    offices: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OfficeEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    en_name: Option<String>,
    #[serde(default)]
    office_name: Option<String>,
}

/// Extract one region per named office, in document order.
///
/// Entries without a usable `name` are skipped; a missing `offices` key
/// yields an empty list.
pub fn parse_regions(body: &str) -> Result<Vec<Region>, JmaError> {
    let catalog: AreaCatalog = serde_json::from_str(body)
        .map_err(|e| JmaError::Parse(format!("area catalog: {}", e)))?;

    let mut regions = Vec::with_capacity(catalog.offices.len());
    for (code, info) in catalog.offices {
        let entry: OfficeEntry = match serde_json::from_value(info) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping office {}: {}", code, e);
                continue;
            }
        };

        match entry.name {
            Some(name) if !name.is_empty() => regions.push(Region {
                name,
                code,
                en_name: entry.en_name,
                office_name: entry.office_name,
            }),
            _ => tracing::debug!("Skipping office {} without a name", code),
        }
    }

    Ok(regions)
}
