use anyhow::{Context, Result};
use postgen_config::Config;
use std::{env, process};

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        eprintln!("Usage: {}", args[0]);
        eprintln!("Run from the site root; settings are read from an optional postgen.toml");
        process::exit(1);
    }

    let site_root = env::current_dir().context("Failed to determine the current directory")?;
    log::debug!("Site root: {}", site_root.display());

    let config = Config::load(&site_root).with_context(|| {
        format!(
            "Failed to load config file '{}'",
            Config::config_path(&site_root).display()
        )
    })?;

    let summary = postgen_engine::generate(&config).context("Site generation failed")?;

    println!(
        "Compiled {} markdown file(s). Wrote {} with {} entr(ies)",
        summary.compiled.len(),
        summary.index_path.display(),
        summary.listed.len()
    );

    Ok(())
}
