use tracing::{info, warn};

use crate::api::MediaServerClient;
use crate::config::LibraryConfig;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Created,
    AlreadyExists,
    Failed,
}

/// What happened to each provisioning step. Purely informational; callers
/// decide whether a failed step matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionReport {
    pub user: StepOutcome,
    pub library: StepOutcome,
    pub rescan_triggered: bool,
}

/// Provision a non-admin user and a media library, then request a rescan.
///
/// Best effort by design: each step is independently guarded so a failure
/// never blocks the following steps. Existence is checked by name before
/// either create call, which keeps reruns safe.
pub fn provision(
    client: &MediaServerClient,
    username: &str,
    password: &str,
    library: &LibraryConfig,
) -> ProvisionReport {
    let user = match ensure_user(client, username, password) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(user = username, error = %e, "user provisioning failed");
            StepOutcome::Failed
        }
    };

    let library = match ensure_library(client, library) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(library = %library.name, error = %e, "library provisioning failed");
            StepOutcome::Failed
        }
    };

    let rescan_triggered = match client.refresh_library() {
        Ok(()) => {
            info!("library rescan triggered");
            true
        }
        Err(e) => {
            warn!(error = %e, "library rescan trigger failed");
            false
        }
    };

    ProvisionReport {
        user,
        library,
        rescan_triggered,
    }
}

fn ensure_user(client: &MediaServerClient, username: &str, password: &str) -> Result<StepOutcome> {
    let users = client.get_users()?;
    if users.iter().any(|u| u.name == username) {
        info!(user = username, "user already exists, skipping creation");
        return Ok(StepOutcome::AlreadyExists);
    }

    client.create_user(username, password)?;
    info!(user = username, "created user");
    Ok(StepOutcome::Created)
}

fn ensure_library(client: &MediaServerClient, library: &LibraryConfig) -> Result<StepOutcome> {
    let folders = client.get_media_folders()?;
    if folders.iter().any(|f| f.name == library.name) {
        info!(library = %library.name, "library already exists, skipping creation");
        return Ok(StepOutcome::AlreadyExists);
    }

    client.add_media_library(&library.name, &library.collection_type, &[&library.path])?;
    info!(
        library = %library.name,
        collection_type = %library.collection_type,
        path = %library.path,
        "created library"
    );
    Ok(StepOutcome::Created)
}
