//! Wire payloads for the media server's REST API. Field names follow the
//! server's PascalCase JSON contract.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSystemInfo {
    #[serde(rename = "LocalAddress")]
    pub local_address: Option<String>,
    #[serde(rename = "ServerName")]
    pub server_name: Option<String>,
    #[serde(rename = "Version")]
    pub version: Option<String>,
    #[serde(rename = "ProductName")]
    pub product_name: Option<String>,
    #[serde(rename = "Id")]
    pub id: Option<String>,
    #[serde(rename = "StartupWizardCompleted")]
    pub startup_wizard_completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPolicy {
    #[serde(rename = "IsAdministrator")]
    pub is_administrator: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ServerId")]
    pub server_id: Option<String>,
    #[serde(rename = "Policy")]
    pub policy: Option<UserPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "AccessToken")]
    pub access_token: String,
    #[serde(rename = "User")]
    pub user: User,
}

/// Default user reported by the setup wizard before any account exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupUser {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Password")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfiguration {
    #[serde(rename = "UICulture")]
    pub ui_culture: String,
    #[serde(rename = "MetadataCountryCode")]
    pub metadata_country_code: String,
    #[serde(rename = "PreferredMetadataLanguage")]
    pub preferred_metadata_language: String,
}

impl Default for StartupConfiguration {
    fn default() -> Self {
        Self {
            ui_culture: "en-US".to_string(),
            metadata_country_code: "US".to_string(),
            preferred_metadata_language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupRemoteAccess {
    #[serde(rename = "EnableRemoteAccess")]
    pub enable_remote_access: bool,
    #[serde(rename = "EnableAutomaticPortMapping")]
    pub enable_automatic_port_mapping: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFolder {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CollectionType")]
    pub collection_type: Option<String>,
    #[serde(rename = "Id")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFoldersResponse {
    #[serde(rename = "Items")]
    pub items: Vec<MediaFolder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathInfo {
    #[serde(rename = "Path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryOptions {
    #[serde(rename = "PathInfos")]
    pub path_infos: Vec<PathInfo>,
}

/// Body of the virtual-folder creation call; name and collection type
/// travel as query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLibraryRequest {
    #[serde(rename = "LibraryOptions")]
    pub library_options: LibraryOptions,
}
