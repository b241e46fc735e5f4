mod defaults;
mod io;
mod schema;
mod validate;

pub use io::load_config;
#[allow(unused_imports)]
pub use schema::{Config, Report, ReportFormat};
#[allow(unused_imports)]
pub use validate::ConfigError;
