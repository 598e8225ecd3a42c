use std::fs;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use markdown_area::{ElementId, SourceElement, WidgetConfig, WidgetRegistry};

const DEFAULT_WIDTH: u32 = 1200;

fn usage() -> ExitCode {
    eprintln!("usage: markdownarea <file.md> [options-json]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        return usage();
    };
    let options = args.next().unwrap_or_default();

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let config = match WidgetConfig::from_options(&options) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid options: {}", e);
            return ExitCode::from(2);
        }
    };

    let width = std::env::var("MARKDOWNAREA_WIDTH")
        .ok()
        .and_then(|w| w.parse().ok())
        .unwrap_or(DEFAULT_WIDTH);

    let mut registry: WidgetRegistry = WidgetRegistry::new(width);
    let widget = registry.bind(SourceElement::new(ElementId(1), content), config);
    print!("{}", widget.to_html());
    ExitCode::SUCCESS
}
