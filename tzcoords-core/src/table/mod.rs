mod builder_state;
mod table_error;
pub mod table_ops;
mod zone_entry;
mod zone_table;
mod zone_table_builder;

pub use builder_state::BuilderState;
pub use table_error::ZoneTableError;
pub use zone_entry::ZoneEntry;
pub use zone_table::ZoneTable;
pub use zone_table_builder::ZoneTableBuilder;
