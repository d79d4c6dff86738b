use std::{fs, io::Write, path::PathBuf, process::exit};

use clap::Parser;
use common::serializable::Serializable;
use eyre::{Result, WrapErr};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

use fib_core::CalculatorKind;
use fibonacci_page::{Page, PageFormat};

/// Render the 10th Fibonacci number as a page.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = PageFormat::Text)]
    format: PageFormat,

    /// Calculator used for the displayed value
    #[arg(short, long, value_enum, default_value_t = CalculatorKind::Recursive)]
    calculator: CalculatorKind,

    /// Write the page to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "fibonacci-page starting");

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}

fn init_tracing() {
    let log_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .with_filter(log_filter);

    tracing_subscriber::registry().with(log_layer).init();
}

fn run(cli: Cli) -> Result<()> {
    let calculator = cli.calculator.calculator();
    let page = Page::fibonacci(calculator.as_ref())
        .wrap_err_with(|| format!("{} calculator failed", calculator.name()))?;
    let rendered = page
        .render(cli.format)
        .wrap_err_with(|| format!("failed to render page as {}", cli.format))?;

    match (cli.output, page.report()) {
        (Some(path), Some(report)) if cli.format == PageFormat::Json => {
            report
                .serialize_to_file(&path)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!("Report written to: {}.", path.display());
        }
        (Some(path), _) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&path, rendered)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!("Page written to: {}.", path.display());
        }
        (None, _) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .wrap_err("failed to write page to stdout")?;
        }
    }
    Ok(())
}
