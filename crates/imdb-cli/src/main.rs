use clap::Parser;
use imdb_cli::{logger, App, CliConfig, Prompter};

const QUIT_MESSAGE: &str = "This script will now quit";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("imdb-search error: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    match app.run(&mut prompter).await {
        Ok(outcome) => {
            if let Some(path) = outcome.exported {
                tracing::info!(path = %path.display(), "run finished with export");
            }
        }
        Err(e) if e.is_not_an_actor() => {
            tracing::info!("{}", e);
            eprintln!("{}", QUIT_MESSAGE);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("imdb-search error: {}", e);
            std::process::exit(1);
        }
    }
}
