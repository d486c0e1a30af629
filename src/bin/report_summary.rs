use anyhow::{Context, Result};
use simdash::{
    config::{Config, OutputFormat},
    fetch::load_and_parse,
    report::ReportDocument,
};
use tracing_subscriber::{fmt, EnvFilter};

fn print_table(doc: &ReportDocument) {
    match (&doc.timestamp, doc.generated_at()) {
        (Some(ts), Some(_)) => println!("Generated on: {}\n", ts),
        (Some(ts), None) => println!("Generated on: {} (unrecognised format)\n", ts),
        (None, _) => println!("No timestamp in report\n"),
    }

    println!("{: <30} {:>8} {:>8}", "Section", "Columns", "Rows");
    println!("{:-<48}", "");
    for (name, section) in &doc.sections {
        println!(
            "{: <30} {:>8} {:>8}",
            name,
            section.headers.len(),
            section.rows.len()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env_and_args();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr) // keep stdout for the summary
        .init();

    let doc = load_and_parse(&cfg.source, cfg.fetch_timeout)
        .await
        .with_context(|| format!("loading report from {}", cfg.source))?;

    match cfg.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&doc).context("serialising report")?;
            println!("{}", json);
        }
        OutputFormat::Table => print_table(&doc),
    }
    Ok(())
}
