use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use noticewriter_core::render::DEFAULT_WIDTH;
use noticewriter_core::{CaseSource, Controller, Language, PrintLayout};
use noticewriter_gateway::{ApiClient, DEFAULT_BASE_URL, FixtureSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod display;
mod input;
mod print;
mod session;

use print::Printer;
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "noticewriter",
    version,
    about = "Draft bilingual court notices from department and case records"
)]
struct Cli {
    /// Base URL of the case-records service
    #[arg(long, env = "NOTICEWRITER_API_BASE", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    api_base: String,

    /// Read records from a JSON fixture instead of the service
    #[arg(long, env = "NOTICEWRITER_FIXTURE", value_name = "PATH")]
    fixture: Option<PathBuf>,

    /// Interface and template language (hi or en)
    #[arg(long, env = "NOTICEWRITER_LANGUAGE", default_value = "hi")]
    language: Language,

    /// Append printed notices to this file instead of stdout. Menus and
    /// prompts always go to stderr, so stdout alone is also a clean print target
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Pipe printed notices to this shell command (e.g. `lp`)
    #[arg(long, env = "NOTICEWRITER_PRINT_COMMAND", value_name = "CMD")]
    print_command: Option<String>,

    /// Print layout width in characters
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WIDTH)]
    width: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("noticewriter v{}", env!("CARGO_PKG_VERSION"));

    let layout = PrintLayout::new(cli.width);
    let printer = Printer::from_args(cli.out, cli.print_command);

    match cli.fixture {
        Some(path) => {
            let source = FixtureSource::from_path(&path)
                .with_context(|| format!("loading fixture {}", path.display()))?;
            run(source, cli.language, layout, printer).await
        }
        None => {
            info!(base_url = %cli.api_base, "using records service");
            run(ApiClient::new(cli.api_base), cli.language, layout, printer).await
        }
    }
}

async fn run<S: CaseSource>(
    source: S,
    language: Language,
    layout: PrintLayout,
    printer: Printer,
) -> anyhow::Result<()> {
    let mut session = Session::new(
        Controller::new(source, language),
        layout,
        printer,
        std::io::stderr(),
    );
    session
        .run(tokio::io::BufReader::new(tokio::io::stdin()))
        .await
}
