use clap::Parser;
use greeter::utils::logger;
use greeter::{CliConfig, Greeter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let greeter = Greeter::new(config.message);

    for name in &config.names {
        if let Err(e) = greeter.greet(name) {
            tracing::debug!("Stopping after failed greeting for {:?}", name);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
