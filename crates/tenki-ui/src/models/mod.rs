pub mod forecast_model;
pub mod region_model;

pub use forecast_model::{ForecastModel, ForecastStatus};
pub use region_model::{LoadStatus, RegionListModel};
