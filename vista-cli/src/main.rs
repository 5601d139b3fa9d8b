mod cli;
mod run;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use run::{ClickOutcome, RenderOptions, Rendered};

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = execute(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = run::load_config(cli.config.as_deref())?;

    let rendered = match cli.command {
        Commands::Render {
            file,
            page,
            active,
            query,
        } => {
            let recipes = run::load_recipes(&file)?;
            run::render(recipes, &config, RenderOptions { query, page, active })?
        }
        Commands::Browse {
            file,
            clicks,
            query,
        } => {
            let recipes = run::load_recipes(&file)?;
            run::browse(recipes, &config, &query, &clicks)?
        }
    };

    report(&rendered);
    println!("{}", rendered.html);
    Ok(())
}

fn report(rendered: &Rendered) {
    for outcome in &rendered.clicks {
        match outcome {
            ClickOutcome::Moved { click, page } => {
                eprintln!("{} {} -> page {}", "✓".green(), click, page)
            }
            ClickOutcome::Missing { click, page } => {
                eprintln!("{} no {} button on page {}", "!".yellow().bold(), click, page)
            }
        }
    }
    eprintln!(
        "{} page {} of {}",
        "Vista:".bold().cyan(),
        rendered.page,
        rendered.total_pages
    );
}
