mod zone_error;
mod zone_id;
pub mod zone_ops;
mod zone_resolver;

pub use zone_error::ZoneError;
pub use zone_id::ZoneId;
pub use zone_resolver::{ChronoTzResolver, ZoneResolver};
