/// provenance written into the header of generated Rust source.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// command line arguments the generator was run with
    pub invocation: String,
    /// version of the timezone database the zone names were validated against
    pub tzdb_version: Option<String>,
}
