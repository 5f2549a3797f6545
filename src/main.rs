use anyhow::Result;
use std::path::Path;
use vecfmt::cli::{parse_args, Cli};
use vecfmt::config::{load_config, load_config_from, VecfmtConfig};
use vecfmt::errors::Error;
use vecfmt::formatting::format_values;
use vecfmt::observability::init_tracing;

fn main() -> Result<()> {
    let cli = parse_args();
    init_tracing(cli.verbosity);

    let values = resolve_values(&cli)?;
    tracing::debug!(count = values.len(), "Formatting values");

    println!("{}", format_values(&values));
    Ok(())
}

// Command line values win, then the config file, then the built-in sample
fn resolve_values(cli: &Cli) -> Result<Vec<f64>> {
    if !cli.values.is_empty() {
        return Ok(cli.values.clone());
    }

    let config = load_effective_config(cli)?;
    Ok(config.sample())
}

fn load_effective_config(cli: &Cli) -> Result<VecfmtConfig> {
    match &cli.config {
        Some(path) => load_config_from(path).map_err(|err| {
            let message = config_failure_message(path, &err);
            anyhow::Error::new(err).context(message)
        }),
        None => Ok(load_config()),
    }
}

fn config_failure_message(path: &Path, err: &Error) -> String {
    if err.is_user_fixable() {
        format!(
            "Could not load config {} (check the path, or that it holds `values = [...]`)",
            path.display()
        )
    } else {
        format!("Could not load config {}", path.display())
    }
}
