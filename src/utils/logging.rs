use std::io::Write;
use env_logger::Builder;
use log::{Level, LevelFilter};
use crate::models::Config;

/// Level filter for a run; debug output only when requested
pub fn level_for(config: &Config) -> LevelFilter {
    if config.debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Console logger for a run. Progress lines are printed bare, everything
/// else carries its level.
pub fn builder(config: &Config) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(config))
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        });
    builder
}

/// Install the console logger. `RUST_LOG` overrides the level; a second
/// call is ignored.
pub fn init(config: &Config) {
    let _ = builder(config).parse_default_env().try_init();
}
