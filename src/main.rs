use clap::Parser;
use tinycrypt::cli::{commands, output, Cli, Commands, EXIT_ABSENT};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries nothing but pulled messages.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Push {
            ref key,
            ref message,
            raw,
        } => commands::push::execute(&cli, key.as_deref(), message, raw).map(|()| true),
        Commands::Pull { ref key, raw } => commands::pull::execute(&cli, key.as_deref(), raw),
        Commands::Exchange {
            ref key,
            ref message,
        } => commands::exchange::execute(&cli, key.as_deref(), message),
        Commands::Alias { ref key } => commands::alias::execute(key.as_deref()).map(|()| true),
        Commands::Completions { shell } => commands::completions::execute(shell).map(|()| true),
        Commands::License => commands::license::execute().map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_ABSENT),
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    }
}
