//! Catalogue generator CLI
//!
//! Renders one category's course catalogue into a printable HTML document:
//! category metadata fills the template placeholders, the course table becomes
//! paginated summary pages plus one detail page per course. The result is
//! opened in a browser and printed to PDF.

mod cli_config;
mod error;
mod output;
mod pipeline;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli_config::{load_cli_config, PathOverrides};
use crate::pipeline::{CataloguePaths, GenerationReport};

const DEFAULT_LOG_FILTER: &str = "catalogue_ctl=info,catalogue_tooling=info";

#[derive(Debug, Parser)]
#[command(
    name = "catalogue-ctl",
    version,
    about = "Generate a printable course catalogue for one category",
    styles = output::clap_styles()
)]
struct Cli {
    /// Category to generate the catalogue for (e.g. AHS, GEDD, CP, FP)
    category_id: String,

    /// HTML template with placeholders and insertion markers
    #[arg(long, env = "CATALOGUE_TEMPLATE")]
    template: Option<PathBuf>,

    /// Category metadata CSV
    #[arg(long, env = "CATALOGUE_CATEGORY_DATA")]
    category_data: Option<PathBuf>,

    /// Directory containing `<category>/data.csv` course tables
    #[arg(long, env = "CATALOGUE_CATEGORIES_ROOT")]
    categories_root: Option<PathBuf>,

    /// Output HTML file
    #[arg(short, long, env = "CATALOGUE_OUTPUT")]
    output: Option<PathBuf>,

    /// Course rows per summary page
    #[arg(long)]
    page_size: Option<NonZeroUsize>,

    /// Config file (default: ./.catalogue.toml, then ~/.config/catalogue.toml)
    #[arg(long, env = "CATALOGUE_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    fn path_overrides(&self) -> PathOverrides {
        PathOverrides {
            template: self.template.clone(),
            category_data: self.category_data.clone(),
            categories_root: self.categories_root.clone(),
            output: self.output.clone(),
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let cli_config = load_cli_config(cli.config.as_deref());
    let paths = CataloguePaths::resolve(&cli.path_overrides(), &cli_config.paths);
    let mut layout = cli_config.layout;
    if let Some(page_size) = cli.page_size {
        layout.page_size = page_size;
    }

    output::header(format!(
        "Generating catalogue for category {}",
        cli.category_id
    ));
    output::label("Template", paths.template.display());
    output::label("Category data", paths.category_data.display());
    output::label(
        "Course data",
        paths.course_data(&cli.category_id).display(),
    );
    output::blank();

    match pipeline::generate(&cli.category_id, &paths, &layout) {
        Ok(report) => {
            print_report(&cli.category_id, &report);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_fatal() => {
            output::error(e);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Catalogue was not written");
            output::error(e);
            ExitCode::SUCCESS
        }
    }
}

fn print_report(category_id: &str, report: &GenerationReport) {
    if !report.category_found {
        output::warning(format!(
            "Category '{category_id}' has no metadata row; default texts were used."
        ));
    }
    if report.courses == 0 {
        output::warning(format!(
            "No course data loaded for category {category_id}; summary and detail pages were skipped."
        ));
    }

    output::success(format!(
        "Generated populated HTML: {}",
        report.output.display()
    ));
    output::label("Courses", report.courses);
    output::label("Summary pages", report.summary_pages);
    output::label("Detail pages", report.detail_pages);
    output::blank();

    output::hint(format!(
        "Open {} in a browser and print to PDF.",
        report.output.display()
    ));
    output::hint(
        "For long tables, 'page-break-inside: avoid' on rows and \
'thead { display: table-header-group; }' in the template keep printed pages tidy.",
    );
}
