use clap::Parser;
use reportng::cli::commands::{cmd_generate, cmd_summary};
use reportng::cli::config::{Cli, Commands, build_report_config, load_config};
use reportng::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            title,
            frames,
            format,
            stylesheet,
            output_log,
        } => {
            // CLI > config > defaults
            let report_config = build_report_config(
                title.as_deref(),
                frames,
                output_log,
                stylesheet.as_deref(),
                &config.report,
            );
            let output_dir = output_dir.as_deref().unwrap_or(&config.report.output_dir);
            let format = format.as_deref().unwrap_or(&config.report.format);
            cmd_generate(&input, output_dir, format, report_config)?;
        }
        Commands::Summary { input } => {
            let all_passed = cmd_summary(&input)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
