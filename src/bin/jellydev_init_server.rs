use std::time::Duration;

use tracing::info;

use jellydev_bootstrap::api::{ClientInfo, MediaServerClient};
use jellydev_bootstrap::config::InitConfig;
use jellydev_bootstrap::{poll, provision, setup};

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return Ok(());
    }

    init_tracing();

    let mut config = InitConfig::from_env();
    let mut skip_provision = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--server-url" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| "--server-url requires a value".to_string())?;
                config.server_url = v.to_string();
            }
            "--max-attempts" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| "--max-attempts requires a value".to_string())?;
                config.max_attempts = v
                    .parse()
                    .map_err(|_| format!("--max-attempts: not a number: {v}"))?;
            }
            "--retry-delay-secs" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| "--retry-delay-secs requires a value".to_string())?;
                let secs: u64 = v
                    .parse()
                    .map_err(|_| format!("--retry-delay-secs: not a number: {v}"))?;
                config.retry_delay = Duration::from_secs(secs);
            }
            "--skip-provision" => skip_provision = true,
            other => return Err(format!("unknown arg: {other} (try --help)")),
        }
        i += 1;
    }

    run(&config, skip_provision).map_err(|e| e.to_string())
}

fn run(config: &InitConfig, skip_provision: bool) -> jellydev_bootstrap::Result<()> {
    let mut client = MediaServerClient::new(&config.server_url, ClientInfo::default())?;

    info!(server = %config.server_url, "waiting for media server");
    let system_info = poll::wait_until_ready(config.max_attempts, config.retry_delay, || {
        client.get_public_system_info()
    })?;
    info!(
        version = system_info.version.as_deref().unwrap_or("unknown"),
        "media server is reachable"
    );

    setup::run_first_run_setup(&client, &config.admin_username, &config.admin_password)?;

    let user = client.authenticate_by_name(&config.admin_username, &config.admin_password)?;
    info!(user = %user.name, "authenticated");

    if skip_provision {
        info!("provisioning skipped");
        return Ok(());
    }

    let report = provision::provision(&client, &config.username, &config.password, &config.library);
    info!(
        user = ?report.user,
        library = ?report.library,
        rescan_triggered = report.rescan_triggered,
        "provisioning finished"
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
        r#"jellydev_init_server

Initializes a dev media server: waits until it answers, drives the first-run
setup wizard (admin account, locale, remote access), then provisions a
regular user and a media library and triggers a rescan. Safe to re-run.

Usage:
  jellydev_init_server [options]

Options:
  --server-url <url>        Server base URL (default: $URL or http://localhost:8096)
  --max-attempts <n>        Readiness poll attempts (default: 10)
  --retry-delay-secs <n>    Delay between poll attempts (default: 5)
  --skip-provision          Stop after setup wizard and login

Environment:
  URL, ADMIN_USERNAME, ADMIN_PASSWORD, USERNAME, PASSWORD,
  COLLECTION_NAME, COLLECTION_TYPE, COLLECTION_PATH
"#
    );
}
