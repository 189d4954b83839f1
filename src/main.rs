use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use cartbind::binding::{input_channel, ViewModel};
use cartbind::config::Config;
use cartbind::console::{Console, OutputFormat};
use cartbind::logging::init_tracing;

/// Drive the cart view model from stdin.
///
/// Commands: init, qty <id> <n>, inc <id>, dec <id>, heart <id>, reset, quit.
#[derive(Debug, Parser)]
#[command(name = "cartbind", version, about)]
struct Args {
    /// Config file (default: ~/.config/cartbind/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the deferred load delay in milliseconds.
    #[arg(long)]
    load_delay_ms: Option<u64>,

    /// Output rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log at debug level (cart and likes changes).
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if let Some(delay) = args.load_delay_ms {
        config.reducer.load_delay_ms = delay;
    }
    tracing::info!(
        products = config.products.len(),
        load_delay_ms = config.reducer.load_delay_ms,
        emit_on_reset = config.reducer.emit_on_reset,
        "starting"
    );

    let catalog = Arc::new(config.catalog());
    let (sender, inputs) = input_channel();
    let outputs = ViewModel::new(catalog, config.reducer.clone()).transform(inputs);
    let console = Console::new(sender, config.view.clone(), args.format)
        .reset_emits_update(config.reducer.emit_on_reset);

    let session = console.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), outputs);
    tokio::select! {
        result = session => result.context("console session failed")?,
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use cartbind::console::OutputFormat;
    use clap::Parser;

    #[test]
    fn args_default_to_text() {
        let args = Args::try_parse_from(["cartbind"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.config.is_none());
        assert!(args.load_delay_ms.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn args_accept_overrides() {
        let args = Args::try_parse_from([
            "cartbind",
            "--format",
            "json",
            "--load-delay-ms",
            "0",
            "--config",
            "/tmp/cart.toml",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.load_delay_ms, Some(0));
        assert_eq!(args.config.unwrap().to_str(), Some("/tmp/cart.toml"));
        assert!(args.verbose);
    }
}
