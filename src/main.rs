use clap::Parser;
use duinocli::cli::args::Cli;
use duinocli::cli::commands::execute_command;
use duinocli::cli::output;
use duinocli::exitcode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        match e.application().and_then(|app| app.invocation()) {
            Some(result) => output::failed_invocation(result),
            None => output::error(&e),
        }
        std::process::exit(e.exit_code());
    }
    std::process::exit(exitcode::OK);
}

/// Level from the `-d` count; anything above three stays at TRACE.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Log to stderr so stdout stays clean for arduino-cli's JSON.
fn setup_logging(verbosity: u8) {
    let level = level_for(verbosity);

    // HTTP stack of the Windows installer
    let noisy_modules = ["reqwest", "hyper", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(level)
        .with_filter(module_filter);

    tracing_subscriber::registry().with(layer).init();
    tracing::debug!("logging at {level}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use duinocli::util::testing;
    use tracing::info;

    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        use clap::CommandFactory;
        Cli::command().debug_assert();
        info!("cli definition verified");
    }

    #[test]
    fn given_debug_count_when_level_for_then_capped_at_trace() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(1), LevelFilter::INFO);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(3), LevelFilter::TRACE);
        assert_eq!(level_for(7), LevelFilter::TRACE);
    }
}
