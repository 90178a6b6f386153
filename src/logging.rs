use crate::errors::{CatalogError, CatalogResult};

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/**
 * Installs a console logger at the given level. Only the
 * first call in a process succeeds.
 **/
pub fn init_console(level: LevelFilter) -> CatalogResult<log4rs::Handle> {
    let config = console_config(level)?;
    log4rs::init_config(config).map_err(|e| CatalogError::Logging(e.to_string()))
}

fn console_config(level: LevelFilter) -> CatalogResult<Config> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| CatalogError::Logging(e.to_string()))
}
