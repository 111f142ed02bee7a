use clap::Parser;
use portfolio_fmt::app::commands;
use portfolio_fmt::utils::{logger, validation::Validate};
use portfolio_fmt::{
    CliConfig, Clock, FixedClock, FormatError, Formatter, FormatterConfig, SystemClock,
};

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(cli: &CliConfig) -> Result<(), FormatError> {
    cli.validate()?;

    let config = cli.formatter_config()?;
    config.validate()?;

    match cli.fixed_today()? {
        Some(today) => {
            tracing::debug!("clock fixed at {}", today);
            print_result(FixedClock::at_date(today), &config, cli)
        }
        None => print_result(SystemClock::new(), &config, cli),
    }
}

fn print_result<C: Clock>(
    clock: C,
    config: &FormatterConfig,
    cli: &CliConfig,
) -> Result<(), FormatError> {
    let formatter = Formatter::from_config(clock, config);
    let output = commands::execute(&formatter, &cli.command)?;
    println!("{}", output);
    Ok(())
}
