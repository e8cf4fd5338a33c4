pub mod approach;
pub mod error;
pub mod ids;
pub mod neo;
pub mod time;

pub use approach::{ApproachRecord, CloseApproach, LinkedApproach};
pub use error::{ModelError, Result};
pub use ids::{ApproachId, NeoId};
pub use neo::{NearEarthObject, NeoRecord};
pub use time::{format_calendar_date, parse_calendar_date};
