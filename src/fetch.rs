use std::path::Path;

use tracing::{info, warn};

use crate::catalog::DownloadItem;
use crate::paths::ContentPaths;
use crate::{BootstrapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Downloaded,
    AlreadyPresent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Fetch one catalog item if its destination file does not exist yet.
///
/// Presence of the destination file is the only idempotency signal; an
/// existing file is trusted as complete and never re-downloaded.
pub fn fetch_item(paths: &ContentPaths, item: &DownloadItem) -> Result<FetchOutcome> {
    let dest = paths.resolve(&item.dest);
    if dest.exists() {
        info!(item = %item.label, path = %dest.display(), "already exists, skipping download");
        return Ok(FetchOutcome::AlreadyPresent);
    }

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let bytes = download_atomic(&item.url, &dest)?;
    info!(item = %item.label, bytes, path = %dest.display(), "downloaded");
    Ok(FetchOutcome::Downloaded)
}

/// Fetch every catalog item, best effort: a failed item is logged and
/// counted but never stops the remaining items.
pub fn fetch_all(paths: &ContentPaths, items: &[DownloadItem]) -> Result<FetchSummary> {
    paths.ensure_dirs()?;

    let mut summary = FetchSummary::default();
    for item in items {
        match fetch_item(paths, item) {
            Ok(FetchOutcome::Downloaded) => summary.downloaded += 1,
            Ok(FetchOutcome::AlreadyPresent) => summary.skipped += 1,
            Err(e) => {
                warn!(item = %item.label, error = %e, "download failed, continuing with remaining items");
                summary.failed += 1;
            }
        }
    }

    info!(
        downloaded = summary.downloaded,
        skipped = summary.skipped,
        failed = summary.failed,
        "content fetch finished"
    );
    Ok(summary)
}

/// Stream the body to a `.download` sibling, then rename into place, so an
/// interrupted run never leaves a partial file at the final destination.
fn download_atomic(url: &str, dest: &Path) -> Result<u64> {
    let tmp_path = dest.with_extension("download");

    let resp = ureq::get(url).call().map_err(|e| BootstrapError::DownloadFailed {
        path: dest.to_path_buf(),
        reason: format!("{url} ({e})"),
    })?;

    let mut reader = resp.into_body().into_reader();
    let mut file = std::fs::File::create(&tmp_path)?;
    let copied = match std::io::copy(&mut reader, &mut file) {
        Ok(n) => n,
        Err(e) => {
            drop(file);
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
    };
    drop(file);

    std::fs::rename(&tmp_path, dest)?;
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::path::PathBuf;

    fn item(label: &str, url: &str, dest: &str) -> DownloadItem {
        DownloadItem {
            label: label.to_string(),
            url: url.to_string(),
            dest: PathBuf::from(dest),
        }
    }

    // Nothing listens on port 9 (discard); contacting this URL fails fast.
    const UNREACHABLE_URL: &str = "http://127.0.0.1:9/nope.mp4";

    #[test]
    fn existing_file_is_skipped_without_any_request() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ContentPaths::new(dir.path().to_path_buf());

        let dest = "movies/Some Movie (2001)/Some Movie (2001).mp4";
        let full = paths.resolve(Path::new(dest));
        std::fs::create_dir_all(full.parent().unwrap()).unwrap();
        std::fs::write(&full, b"partial or complete, either way kept").unwrap();

        // The URL is unreachable; fetching it would error, so AlreadyPresent
        // proves no request was made.
        let outcome = fetch_item(&paths, &item("Some Movie", UNREACHABLE_URL, dest)).unwrap();
        assert_eq!(outcome, FetchOutcome::AlreadyPresent);
    }

    #[test]
    fn missing_file_is_downloaded_and_rerun_skips() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/track.ogg");
            then.status(200).body("ogg bytes");
        });

        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ContentPaths::new(dir.path().to_path_buf());
        let it = item(
            "Track 01",
            &server.url("/track.ogg"),
            "music/Artist/Album/01.ogg",
        );

        let outcome = fetch_item(&paths, &it).unwrap();
        assert_eq!(outcome, FetchOutcome::Downloaded);
        let written = paths.resolve(Path::new("music/Artist/Album/01.ogg"));
        assert_eq!(std::fs::read(&written).unwrap(), b"ogg bytes");

        // Second run must not issue another request.
        let outcome = fetch_item(&paths, &it).unwrap();
        assert_eq!(outcome, FetchOutcome::AlreadyPresent);
        mock.assert_hits(1);
    }

    #[test]
    fn failed_download_leaves_no_partial_file() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gone.mp4");
            then.status(404);
        });

        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ContentPaths::new(dir.path().to_path_buf());
        let it = item("Gone", &server.url("/gone.mp4"), "movies/Gone/Gone.mp4");

        let err = fetch_item(&paths, &it).unwrap_err();
        assert!(matches!(err, BootstrapError::DownloadFailed { .. }));
        assert!(!paths.resolve(Path::new("movies/Gone/Gone.mp4")).exists());
    }

    #[test]
    fn one_failure_does_not_stop_the_remaining_items() {
        let server = MockServer::start();
        let good = server.mock(|when, then| {
            when.method(GET).path("/good.mp4");
            then.status(200).body("movie bytes");
        });

        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ContentPaths::new(dir.path().to_path_buf());

        let items = vec![
            item("Bad", UNREACHABLE_URL, "movies/Bad/Bad.mp4"),
            item("Good", &server.url("/good.mp4"), "movies/Good/Good.mp4"),
        ];

        let summary = fetch_all(&paths, &items).unwrap();
        assert_eq!(
            summary,
            FetchSummary {
                downloaded: 1,
                skipped: 0,
                failed: 1
            }
        );
        good.assert_hits(1);
        assert!(paths.resolve(Path::new("movies/Good/Good.mp4")).exists());
    }

    #[test]
    fn mixed_existing_and_missing_destinations() {
        let server = MockServer::start();
        let missing = server.mock(|when, then| {
            when.method(GET).path("/b.mp4");
            then.status(200).body("b");
        });

        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ContentPaths::new(dir.path().to_path_buf());

        let a_dest = paths.resolve(Path::new("movies/A/A.mp4"));
        std::fs::create_dir_all(a_dest.parent().unwrap()).unwrap();
        std::fs::write(&a_dest, b"a").unwrap();

        let items = vec![
            item("A", UNREACHABLE_URL, "movies/A/A.mp4"),
            item("B", &server.url("/b.mp4"), "movies/B/B.mp4"),
        ];

        let summary = fetch_all(&paths, &items).unwrap();
        assert_eq!(
            summary,
            FetchSummary {
                downloaded: 1,
                skipped: 1,
                failed: 0
            }
        );
        missing.assert_hits(1);
    }
}
