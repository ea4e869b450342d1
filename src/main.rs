use clap::Parser;
use page_patterns::cli::commands::{
    OutputFormat, cmd_extract, cmd_patterns, cmd_stats, emit, load_analyzer,
};
use page_patterns::cli::config::{Cli, Commands, build_signature_config, load_config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    // Trace path: CLI > config
    let trace = cli.trace.as_deref().or(config.trace.path.as_deref());

    match cli.command {
        Commands::Extract {
            file,
            format,
            limit,
            output,
        } => {
            let format = OutputFormat::parse(format.as_deref().unwrap_or(&config.output.format))?;
            let mut analyzer = load_analyzer(&file, trace)?;
            let report = cmd_extract(&mut analyzer, format, limit)?;
            emit(&report, output.as_deref())?;
        }
        Commands::Stats {
            file,
            format,
            output,
        } => {
            let format = OutputFormat::parse(format.as_deref().unwrap_or(&config.output.format))?;
            let mut analyzer = load_analyzer(&file, trace)?;
            let report = cmd_stats(&mut analyzer, format)?;
            emit(&report, output.as_deref())?;
        }
        Commands::Patterns {
            file,
            min_threshold,
            similarity,
            no_parent,
            depth_override,
            format,
            output,
        } => {
            let format = OutputFormat::parse(format.as_deref().unwrap_or(&config.output.format))?;
            let signature_config = build_signature_config(no_parent, depth_override, &config.patterns);
            let min_threshold = min_threshold.unwrap_or(config.patterns.min_threshold);
            let similarity = similarity.unwrap_or(config.patterns.similarity_threshold);

            let mut analyzer = load_analyzer(&file, trace)?;
            let report = cmd_patterns(
                &mut analyzer,
                min_threshold,
                similarity,
                signature_config,
                format,
            )?;
            emit(&report, output.as_deref())?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise -v raises the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
