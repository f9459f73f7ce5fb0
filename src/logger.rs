use env_logger::{Builder, Env, Logger};
use log::{Level, LevelFilter, Log, Metadata};

const TARGET: &str = env!("CARGO_CRATE_NAME");

/// Install the global stderr logger.
///
/// `RUST_LOG` is honoured, except that this crate's own records are
/// never filtered below `warn`: the git failure warnings are part of the
/// program's output.
pub fn init() {
    let env = || Env::default().default_filter_or("warn");
    let level = own_level(&Builder::from_env(env()).build());

    Builder::from_env(env())
        .filter_module(TARGET, level)
        .format_timestamp(None)
        .init();
}

/// Most verbose level `logger` enables for this crate, but at least `warn`.
fn own_level(logger: &Logger) -> LevelFilter {
    [Level::Trace, Level::Debug, Level::Info]
        .into_iter()
        .find(|level| logger.enabled(&Metadata::builder().level(*level).target(TARGET).build()))
        .map_or(LevelFilter::Warn, |level| level.to_level_filter())
}
