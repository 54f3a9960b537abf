use clap::Parser;
use pathtools::utils::logger;
use pathtools::{AbspathConfig, PathEngine, ProcessWorkingDirectory};

fn main() {
    let config = AbspathConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let engine = PathEngine::new(ProcessWorkingDirectory);
    let stdout = std::io::stdout();

    if let Err(e) = engine.run_to(&config.operation(), &mut stdout.lock()) {
        tracing::error!("abspath failed for {}: {}", config.dir1.display(), e);
        eprintln!("abspath: {}", e);
        std::process::exit(e.exit_code());
    }
}
