use std::path::PathBuf;

use jellydev_bootstrap::paths::ContentPaths;
use jellydev_bootstrap::{catalog, config, fetch};

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return Ok(());
    }

    init_tracing();

    let mut base_dir: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--base-dir" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| "--base-dir requires a value".to_string())?;
                base_dir = Some(PathBuf::from(v));
            }
            other => return Err(format!("unknown arg: {other} (try --help)")),
        }
        i += 1;
    }

    let base_dir = base_dir.unwrap_or_else(config::content_base_dir_from_env);
    let paths = ContentPaths::new(base_dir);
    paths
        .ensure_dirs()
        .map_err(|e| format!("failed to create content directories under {}: {e}", paths.base_dir.display()))?;

    // Downloads themselves are best effort; only an unusable base dir is
    // fatal.
    let summary = fetch::fetch_all(&paths, &catalog::builtin_catalog()).map_err(|e| e.to_string())?;
    println!(
        "Content fetch finished: {} downloaded, {} already present, {} failed",
        summary.downloaded, summary.skipped, summary.failed
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn print_help() {
    println!(
        r#"jellydev_fetch_content

Seeds the dev media tree (movies / tv-shows / music) with public-domain and
Creative Commons sample content. Files that already exist are skipped.

Usage:
  jellydev_fetch_content [--base-dir <path>]

Options:
  --base-dir <path>  Content base directory (default: $CONTENT_DIR or /downloads)
"#
    );
}
