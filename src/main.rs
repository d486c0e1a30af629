use anyhow::{Context, Result};
use simdash::{
    config::Config,
    fetch::load_and_parse,
    render::{render_dashboard, render_error_page, RenderOptions},
};
use std::{fs, path::Path, time::Instant};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env_and_args();

    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!(source = %cfg.source, output = %cfg.output.display(), "startup");

    let opts = RenderOptions {
        title: cfg.title.clone(),
        ..Default::default()
    };

    // ─── 2) load + parse ─────────────────────────────────────────────
    let start = Instant::now();
    let doc = match load_and_parse(&cfg.source, cfg.fetch_timeout).await {
        Ok(doc) => doc,
        Err(e) => {
            error!("loading {} failed: {:#}", cfg.source, e);
            let page = render_error_page(&cfg.source.to_string(), &e, &opts);
            write_page(&cfg.output, &page)?;
            info!("wrote error page to {}", cfg.output.display());
            return Err(e);
        }
    };

    // ─── 3) render ───────────────────────────────────────────────────
    let page = render_dashboard(&doc, &opts);
    write_page(&cfg.output, &page)?;

    info!(
        sections = doc.sections.len(),
        bytes = page.len(),
        elapsed = ?start.elapsed(),
        "wrote dashboard to {}",
        cfg.output.display()
    );
    Ok(())
}
