mod gen_app;
mod gen_config;
mod gen_error;

pub use gen_app::GenAppArguments;
pub use gen_config::GenConfig;
pub use gen_error::GenError;
