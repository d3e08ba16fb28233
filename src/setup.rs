use tracing::info;

use crate::api::MediaServerClient;
use crate::models::{StartupConfiguration, StartupRemoteAccess};
use crate::Result;

/// Drive the server's first-run setup wizard.
///
/// Fail-fast: the wizard is a one-shot sequence, and re-running it
/// mid-sequence is not supported, so any error aborts the run. Returns
/// `false` when the wizard was already completed and nothing was done.
pub fn run_first_run_setup(
    client: &MediaServerClient,
    admin_username: &str,
    admin_password: &str,
) -> Result<bool> {
    let info = client.get_public_system_info()?;
    if let Some(version) = &info.version {
        info!(version = %version, "media server version");
    }
    if info.startup_wizard_completed.unwrap_or(false) {
        info!("setup wizard already completed, skipping initialization");
        return Ok(false);
    }

    let default_user = client.get_startup_user()?;
    info!(
        name = default_user.name.as_deref().unwrap_or_default(),
        "retrieved default startup user"
    );

    client.post_startup_user(admin_username, admin_password)?;
    info!(user = admin_username, "created admin account");

    client.post_startup_configuration(&StartupConfiguration::default())?;
    info!("configured locale and metadata preferences");

    client.post_startup_remote_access(&StartupRemoteAccess {
        enable_remote_access: true,
        enable_automatic_port_mapping: true,
    })?;
    info!("enabled remote access and automatic port mapping");

    client.post_startup_complete()?;
    info!("completed setup wizard");
    Ok(true)
}
