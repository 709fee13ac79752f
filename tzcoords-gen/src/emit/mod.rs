pub mod emit_ops;
mod output_format;
mod render_context;
mod rust_source;
mod zone_record;

pub use output_format::OutputFormat;
pub use render_context::RenderContext;
pub use zone_record::ZoneRecord;
