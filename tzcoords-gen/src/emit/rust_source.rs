use super::RenderContext;
use crate::app::GenConfig;
use std::fmt::Write;
use tzcoords_core::ZoneTable;

/// renders a zone table as Rust source declaring a static slice of
/// `(zone, coordinates)` pairs in sorted zone order, so that consumers may
/// binary search by zone name.
pub fn render(
    table: &ZoneTable,
    config: &GenConfig,
    context: &RenderContext,
) -> Result<String, std::fmt::Error> {
    let type_name = config.type_name();
    let invocation = context.invocation.replace(['\r', '\n'], " ");
    let mut out = String::new();

    writeln!(
        out,
        "// Code generated by \"tzcoords-gen {}\"; DO NOT EDIT.",
        invocation.trim()
    )?;
    match &context.tzdb_version {
        Some(version) => writeln!(out, "// zone1970.tab validated against tzdb {version}, {} zones.", table.len())?,
        None => writeln!(out, "// zone1970.tab, {} zones.", table.len())?,
    }
    writeln!(out)?;
    if config.type_path.contains("::") {
        writeln!(out, "use {};", config.type_path)?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "pub static {}: &[(&str, {type_name})] = &[",
        config.table_name
    )?;
    for (zone, ll) in table.iter() {
        writeln!(
            out,
            "    (\"{zone}\", {type_name} {{ lat: {}, lon: {} }}),",
            float_literal(ll.lat(), config.precision),
            float_literal(ll.lon(), config.precision)
        )?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

/// formats a value as a Rust `f64` literal with a fixed number of decimals.
pub fn float_literal(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}
