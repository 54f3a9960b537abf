use clap::Parser;
use pathtools::utils::logger;
use pathtools::{PathEngine, ProcessWorkingDirectory, RelpathConfig};

fn main() {
    let config = RelpathConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let engine = PathEngine::new(ProcessWorkingDirectory);
    let stdout = std::io::stdout();

    if let Err(e) = engine.run_to(&config.operation(), &mut stdout.lock()) {
        tracing::error!("relpath failed for {}: {}", config.dir1.display(), e);
        eprintln!("relpath: {}", e);
        std::process::exit(e.exit_code());
    }
}
