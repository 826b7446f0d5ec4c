pub mod record;
pub mod season;

pub use record::{summarize, PowerRecord, SeasonSummary, CSV_HEADER};
pub use season::{Season, WindRange};
