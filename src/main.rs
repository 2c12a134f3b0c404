use std::process::ExitCode;
use std::sync::Arc;

use mail2chat::NotificationAdapter;
use mail2chat::cli::{self, CliArgs};
use mail2chat::config::SlackConfig;
use mail2chat::logger::TracingLogger;
use mail2chat::notifier::SlackNotifier;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> mail2chat::Result<()> {
    let message = cli::load_message(args)?;

    if args.dry_run {
        let notification = NotificationAdapter::compose(message.as_email_like())?;
        println!("{notification}");
        return Ok(());
    }

    let config = SlackConfig::from_env()?;
    let notifier = SlackNotifier::new(config)?;
    let adapter = NotificationAdapter::new(Arc::new(notifier), Arc::new(TracingLogger));

    adapter.send_mail(message.as_email_like())?;
    tracing::info!("Done");
    Ok(())
}
