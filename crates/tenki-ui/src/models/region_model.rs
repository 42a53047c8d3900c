//! Left pane state: the selectable region list.

use tenki_jma::Region;

use crate::error_mapping::describe;
use crate::services::RegionServiceMessage;

/// Progress of the one-off catalog load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Default)]
pub struct RegionListModel {
    regions: Vec<Region>,
    filter: String,
    selected: Option<String>,
    status: LoadStatus,
}

impl RegionListModel {
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Apply the catalog result. A failure leaves an empty list with a visible error.
    pub fn apply(&mut self, msg: RegionServiceMessage) {
        match msg {
            RegionServiceMessage::FetchDone(Ok(regions)) => {
                tracing::info!("Region list populated with {} entries", regions.len());
                self.regions = regions;
                self.status = LoadStatus::Ready;
            }
            RegionServiceMessage::FetchDone(Err(e)) => {
                self.regions.clear();
                self.selected = None;
                self.status = LoadStatus::Error(describe(e));
            }
        }
    }

    pub fn set_filter(&mut self, filter: String) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Regions matching the current filter, in catalog order
    pub fn visible(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(|r| r.matches(&self.filter))
    }

    /// Mark `code` selected. Returns false for codes not in the catalog.
    pub fn select(&mut self, code: &str) -> bool {
        if self.regions.iter().any(|r| r.code == code) {
            self.selected = Some(code.to_string());
            true
        } else {
            tracing::warn!("Ignoring selection of unknown region {}", code);
            false
        }
    }

    pub fn selected(&self) -> Option<&Region> {
        let code = self.selected.as_deref()?;
        self.regions.iter().find(|r| r.code == code)
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.selected.as_deref() == Some(code)
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
