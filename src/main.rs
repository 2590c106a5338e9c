use clap::Parser;
use color_eyre::eyre::{Report, Result};
use tblin::{cli, cli::Cli, export, report};

fn main() -> Result<(), Report> {
    // ------------------------------------------------------------------------
    // CLI Setup

    // Parse CLI parameters
    let args = Cli::parse();

    // initialize color_eyre crate for colorized logs
    color_eyre::install()?;

    // Set logging/verbosity level via RUST_LOG
    std::env::set_var("RUST_LOG", args.verbosity.to_string());

    // initialize env_logger crate for logging/verbosity level
    env_logger::init();

    // check which CLI command we're running (classify, report, summary)
    match args.command {
        cli::Command::Classify(args) => {
            let (classification, _outputs) = tblin::run(&args)?;
            if args.json {
                println!("{}", classification.verdict.to_json()?);
            } else {
                println!("{}", export::verdict_display(&classification.verdict));
            }
        }
        cli::Command::Report(args) => _ = report::report(&args)?,
        cli::Command::Summary(args) => println!("{}", report::summary(&args)?),
    }

    Ok(())
}
