use std::path::PathBuf;

use anyhow::Context as _;
use banner_maker::{BatchOpts, DEFAULT_SAMPLE_DENSITY, TracingDiagnostics};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "banner-maker",
    version,
    about = "Draw configured text overlays onto images"
)]
struct Cli {
    /// Config table: a JSON array of rows (Group, File, Text, Fonttype, Fontsize, Color, ...).
    #[arg(long, default_value = "config/config.json")]
    config: PathBuf,

    /// Output directory for the rendered images.
    #[arg(long, default_value = "public")]
    output: PathBuf,

    /// Log file; new runs are appended.
    #[arg(long, default_value = "process.logs.txt")]
    logs: PathBuf,

    /// Border ring samples per pixel of border width.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_DENSITY)]
    density: u32,

    /// Validate the config and exit without rendering.
    #[arg(long)]
    dry_run: bool,

    /// Log to stderr instead of the log file.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_file = (!cli.verbose).then_some(cli.logs.as_path());
    banner_maker::logging::init(log_file)?;

    let result = run(&cli);
    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    tracing::info!("Process Execution End");
    tracing::info!("-----------------------");
    result
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut diagnostics = TracingDiagnostics;

    tracing::info!("Loading Config from {}", cli.config.display());
    let loaded = banner_maker::load_config(&cli.config, &mut diagnostics)
        .with_context(|| format!("load config '{}'", cli.config.display()))?;
    tracing::info!(
        groups = loaded.groups.len(),
        items = loaded.item_count(),
        rejected = loaded.rejected.len(),
        "config loaded"
    );
    tracing::info!("-----------------------");

    if cli.dry_run {
        eprintln!(
            "config ok: {} groups, {} items, {} rejected rows",
            loaded.groups.len(),
            loaded.item_count(),
            loaded.rejected.len()
        );
        return Ok(());
    }

    let opts = BatchOpts {
        output_dir: cli.output.clone(),
        sample_density: cli.density,
    };
    let summary = banner_maker::render_batch(&loaded.groups, &opts, &mut diagnostics)?;

    for group in &summary.groups {
        if let Some(out) = &group.output {
            eprintln!("wrote {}", out.display());
        }
    }
    eprintln!(
        "{} of {} images written, {} text items failed, {} rows rejected",
        summary.written(),
        summary.groups.len(),
        summary.failed_items(),
        loaded.rejected.len()
    );
    Ok(())
}
