use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use hashhopper::cli;
use hashhopper::config::{self, SearchConfig};
use hashhopper::constants::CHECKPOINT_FILE_NAME;
use hashhopper::digest::Algorithm;
use hashhopper::logging;
use hashhopper::pipeline::{self, stop::StopSignal};
use hashhopper::sink;

fn main() -> Result<()> {
    let cli_opts = cli::parse();
    logging::init_logging(cli_opts.log_format);

    let target_hex = match (&cli_opts.target_hex, &cli_opts.target_file) {
        (Some(_), Some(_)) => bail!("set either --target-hex or --target-file, not both"),
        (None, None) => bail!("set either --target-hex or --target-file"),
        (Some(hex), None) => hex.trim().to_string(),
        (None, Some(path)) => config::read_target_file(path)
            .with_context(|| format!("reading target digest from {}", path.display()))?,
    };

    let algorithms = if cli_opts.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        config::dedup_algorithms(&cli_opts.algorithms)
    };

    let mut cfg = SearchConfig::new(cli_opts.length, target_hex, algorithms);
    cfg.workers = cli_opts.workers;
    cfg.relay_capacity = cli_opts.relay_capacity;
    cfg.progress_interval_secs = cli_opts.progress_interval_secs;
    cfg.max_candidates = cli_opts.max_candidates;
    cfg.validate()?;

    std::fs::create_dir_all(&cli_opts.output)
        .with_context(|| format!("creating output directory {}", cli_opts.output.display()))?;
    if !cli_opts.no_checkpoint {
        cfg.checkpoint_path = Some(cli_opts.output.join(CHECKPOINT_FILE_NAME));
    }

    info!(
        "starting search length={} algorithms={} workers={} relay_capacity={}",
        cfg.length,
        cfg.algorithms
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(","),
        cfg.workers,
        cfg.relay_capacity
    );

    let match_sink = Arc::new(sink::build_jsonl_sink(&cli_opts.output)?);

    let stop = Arc::new(StopSignal::new());
    let stop_sig = stop.clone();
    ctrlc::set_handler(move || {
        info!("stop requested, draining workers");
        stop_sig.trigger();
    })
    .ok();

    let stats = pipeline::run_search(&cfg, match_sink, stop)?;

    if stats.matches_found > 0 {
        info!("search finished with {} match(es)", stats.matches_found);
    } else if stats.exhausted {
        info!("keyspace exhausted with no match");
    } else {
        info!("search stopped before exhaustion");
    }
    Ok(())
}
