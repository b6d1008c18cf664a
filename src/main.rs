use colored::Colorize;
use ip_cidr_aggregate::output::print_blocks;
use ip_cidr_aggregate::{aggregate_file, CommandLine, Config};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("Error initializing log4rs: {e}");
    }
    let config = Config::from(CommandLine::parse_args());
    log::info!("#Start main()");

    if let Err(e) = run(&config) {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let summary = aggregate_file(config)?;
    print_blocks(&summary.blocks, config.format)?;
    Ok(())
}

/// Use log4rs.yml when present, otherwise warnings and errors to stderr.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:5})} {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
