//! Blocking client for the media server's REST API.
//!
//! Covers only the slice of the API the bootstrap flows need: the public
//! system info query, the setup wizard, authentication, user and library
//! management, and the library rescan trigger.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use ureq::http::StatusCode;
use ureq::{Agent, Body};
use url::Url;

use crate::models::{
    AddLibraryRequest, AuthResponse, LibraryOptions, MediaFolder, MediaFoldersResponse, PathInfo,
    PublicSystemInfo, StartupConfiguration, StartupRemoteAccess, StartupUser, User,
};
use crate::{BootstrapError, Result};

/// Identity reported in the `MediaBrowser` authorization scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub client: String,
    pub device: String,
    pub device_id: String,
    pub version: String,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            client: "jellydev-bootstrap".to_string(),
            device: "jellydev".to_string(),
            device_id: "jellydev-bootstrap".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

pub struct MediaServerClient {
    base_url: Url,
    client_info: ClientInfo,
    agent: Agent,
    token: Option<String>,
}

impl MediaServerClient {
    pub fn new(base_url: &str, client_info: ClientInfo) -> Result<Self> {
        let mut url = Url::parse(base_url)?;
        // Trailing slash so join() keeps the full base path.
        if !url.path().ends_with('/') {
            url.path_segments_mut()
                .map_err(|_| BootstrapError::UrlParse(url::ParseError::EmptyHost))?
                .push("");
        }

        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        Ok(Self {
            base_url: url,
            client_info,
            agent: Agent::new_with_config(config),
            token: None,
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn auth_header(&self) -> String {
        let mut header = format!(
            "MediaBrowser Client=\"{}\", Device=\"{}\", DeviceId=\"{}\", Version=\"{}\"",
            self.client_info.client,
            self.client_info.device,
            self.client_info.device_id,
            self.client_info.version
        );
        if let Some(token) = &self.token {
            header.push_str(&format!(", Token=\"{token}\""));
        }
        header
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        let mut resp = self
            .agent
            .get(url.as_str())
            .header("Authorization", self.auth_header())
            .call()?;
        check_status(&mut resp)?;
        Ok(resp.body_mut().read_json()?)
    }

    fn post_json<T: DeserializeOwned, B: Serialize>(&self, url: Url, body: &B) -> Result<T> {
        let mut resp = self
            .agent
            .post(url.as_str())
            .header("Authorization", self.auth_header())
            .send_json(body)?;
        check_status(&mut resp)?;
        Ok(resp.body_mut().read_json()?)
    }

    fn post_no_content<B: Serialize>(&self, url: Url, body: Option<&B>) -> Result<()> {
        let request = self
            .agent
            .post(url.as_str())
            .header("Authorization", self.auth_header());
        let mut resp = match body {
            Some(b) => request.send_json(b)?,
            None => request.send_empty()?,
        };
        check_status(&mut resp)
    }

    pub fn get_public_system_info(&self) -> Result<PublicSystemInfo> {
        self.get_json("System/Info/Public")
    }

    pub fn get_startup_user(&self) -> Result<StartupUser> {
        self.get_json("Startup/User")
    }

    pub fn post_startup_user(&self, name: &str, password: &str) -> Result<()> {
        let body = json!({ "Name": name, "Password": password });
        self.post_no_content(self.url("Startup/User")?, Some(&body))
    }

    pub fn post_startup_configuration(&self, configuration: &StartupConfiguration) -> Result<()> {
        self.post_no_content(self.url("Startup/Configuration")?, Some(configuration))
    }

    pub fn post_startup_remote_access(&self, remote_access: &StartupRemoteAccess) -> Result<()> {
        self.post_no_content(self.url("Startup/RemoteAccess")?, Some(remote_access))
    }

    pub fn post_startup_complete(&self) -> Result<()> {
        self.post_no_content::<serde_json::Value>(self.url("Startup/Complete")?, None)
    }

    /// Log in and keep the returned access token for subsequent requests.
    pub fn authenticate_by_name(&mut self, username: &str, password: &str) -> Result<User> {
        let body = json!({ "Username": username, "Pw": password });
        let response: AuthResponse = self
            .post_json(self.url("Users/AuthenticateByName")?, &body)
            .map_err(|e| match e {
                BootstrapError::Unauthorized => {
                    BootstrapError::AuthenticationFailed("invalid credentials".to_string())
                }
                other => other,
            })?;
        self.token = Some(response.access_token);
        Ok(response.user)
    }

    pub fn get_users(&self) -> Result<Vec<User>> {
        self.get_json("Users")
    }

    pub fn create_user(&self, username: &str, password: &str) -> Result<User> {
        let body = json!({ "Name": username, "Password": password });
        self.post_json(self.url("Users/New")?, &body)
    }

    pub fn get_media_folders(&self) -> Result<Vec<MediaFolder>> {
        let response: MediaFoldersResponse = self.get_json("Library/MediaFolders")?;
        Ok(response.items)
    }

    pub fn add_media_library(
        &self,
        name: &str,
        collection_type: &str,
        paths: &[&str],
    ) -> Result<()> {
        let mut url = self.url("Library/VirtualFolders")?;
        url.query_pairs_mut()
            .append_pair("name", name)
            .append_pair("collectionType", collection_type)
            .append_pair("refreshLibrary", "true");

        let body = AddLibraryRequest {
            library_options: LibraryOptions {
                path_infos: paths
                    .iter()
                    .map(|p| PathInfo {
                        path: (*p).to_string(),
                    })
                    .collect(),
            },
        };
        self.post_no_content(url, Some(&body))
    }

    pub fn refresh_library(&self) -> Result<()> {
        self.post_no_content::<serde_json::Value>(self.url("Library/Refresh")?, None)
    }
}

fn check_status(resp: &mut ureq::http::Response<Body>) -> Result<()> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    Err(match status {
        StatusCode::UNAUTHORIZED => BootstrapError::Unauthorized,
        StatusCode::FORBIDDEN => BootstrapError::Forbidden,
        StatusCode::NOT_FOUND => BootstrapError::NotFound,
        _ => {
            let text = resp.body_mut().read_to_string().unwrap_or_default();
            BootstrapError::Server(format!("{status} - {text}"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_info() -> ClientInfo {
        ClientInfo {
            client: "test-client".to_string(),
            device: "test-device".to_string(),
            device_id: "test-device-id".to_string(),
            version: "0.0.1".to_string(),
        }
    }

    const BASE_HEADER: &str = "MediaBrowser Client=\"test-client\", Device=\"test-device\", \
         DeviceId=\"test-device-id\", Version=\"0.0.1\"";

    #[test]
    fn authenticate_stores_the_access_token() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST)
                .path("/Users/AuthenticateByName")
                .header("Authorization", BASE_HEADER)
                .json_body(serde_json::json!({ "Username": "admin", "Pw": "password" }));
            then.status(200).json_body(serde_json::json!({
                "AccessToken": "test_token",
                "User": { "Id": "user_id", "Name": "admin", "ServerId": "server_id" }
            }));
        });

        let mut client = MediaServerClient::new(&server.base_url(), client_info()).unwrap();
        let user = client.authenticate_by_name("admin", "password").unwrap();
        assert_eq!(user.name, "admin");
        assert_eq!(client.token(), Some("test_token"));
    }

    #[test]
    fn token_is_appended_to_later_requests() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/Users/AuthenticateByName");
            then.status(200).json_body(serde_json::json!({
                "AccessToken": "test_token",
                "User": { "Id": "user_id", "Name": "admin" }
            }));
        });
        let users = server.mock(|when, then| {
            when.method(GET)
                .path("/Users")
                .header("Authorization", format!("{BASE_HEADER}, Token=\"test_token\""));
            then.status(200).json_body(serde_json::json!([
                { "Id": "user_id", "Name": "admin" }
            ]));
        });

        let mut client = MediaServerClient::new(&server.base_url(), client_info()).unwrap();
        client.authenticate_by_name("admin", "password").unwrap();
        let listed = client.get_users().unwrap();
        assert_eq!(listed.len(), 1);
        users.assert();
    }

    #[test]
    fn login_rejection_maps_to_authentication_failed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/Users/AuthenticateByName");
            then.status(401);
        });

        let mut client = MediaServerClient::new(&server.base_url(), client_info()).unwrap();
        let err = client.authenticate_by_name("admin", "wrong").unwrap_err();
        assert!(matches!(err, BootstrapError::AuthenticationFailed(_)));
        assert_eq!(client.token(), None);
    }

    #[test]
    fn missing_endpoint_maps_to_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/System/Info/Public");
            then.status(404);
        });

        let client = MediaServerClient::new(&server.base_url(), client_info()).unwrap();
        let err = client.get_public_system_info().unwrap_err();
        assert!(matches!(err, BootstrapError::NotFound));
    }

    #[test]
    fn add_media_library_sends_query_params_and_path_infos() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/Library/VirtualFolders")
                .query_param("name", "TV Shows")
                .query_param("collectionType", "tvshows")
                .query_param("refreshLibrary", "true")
                .json_body(serde_json::json!({
                    "LibraryOptions": { "PathInfos": [ { "Path": "/media/tv-shows" } ] }
                }));
            then.status(204);
        });

        let client = MediaServerClient::new(&server.base_url(), client_info()).unwrap();
        client
            .add_media_library("TV Shows", "tvshows", &["/media/tv-shows"])
            .unwrap();
        mock.assert();
    }

    #[test]
    fn base_url_with_path_prefix_is_preserved() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/jellyfin/System/Info/Public");
            then.status(200)
                .json_body(serde_json::json!({ "Version": "10.10.7" }));
        });

        let base = format!("{}/jellyfin", server.base_url());
        let client = MediaServerClient::new(&base, client_info()).unwrap();
        let info = client.get_public_system_info().unwrap();
        assert_eq!(info.version.as_deref(), Some("10.10.7"));
        mock.assert();
    }
}
