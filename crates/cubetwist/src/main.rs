//! Command-line front end for the cubetwist puzzle engine.

mod cli;
mod settings;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;

    let args = cli::Args::parse();
    let mut settings = settings::Settings::load(args.config.as_deref())?;
    if let Some(format) = args.format {
        settings.output_format = format;
    }

    // Initialize logging. `RUST_LOG` takes precedence over the settings.
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        settings.log_filter()?
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    log::info!("Loaded settings: {settings:?}");

    cli::exec(args.subcommand, &settings)
}
