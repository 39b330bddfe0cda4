use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use gantt_viz_core::options::GanttOptions;
use gantt_viz_core::parsers::{parse_query_result, parse_rows};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut options = GanttOptions::default();
    let mut path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--project-column" => {
                options.project_name = args
                    .next()
                    .context("--project-column requires a column name")?;
            }
            _ => path = Some(PathBuf::from(arg)),
        }
    }

    let Some(path) = path else {
        eprintln!("Usage: gantt-viz [--project-column <name>] <query-result.json>");
        std::process::exit(1);
    };

    let data = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let result = parse_query_result(&data)?;
    let records = parse_rows(&result, &options)?;
    let config = gantt_viz_core::build_chart(&records, &options)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &config)?;
    writeln!(out)?;
    Ok(())
}
