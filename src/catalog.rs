use std::path::PathBuf;

/// One piece of public-domain / Creative Commons sample content.
///
/// `dest` is relative to the content base dir so the same catalog works for
/// any `--base-dir`.
#[derive(Debug, Clone)]
pub struct DownloadItem {
    pub label: String,
    pub url: String,
    pub dest: PathBuf,
}

impl DownloadItem {
    fn new(label: &str, url: &str, dest: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            dest: PathBuf::from(dest),
        }
    }
}

/// The fixed set of sample media the dev servers are seeded with.
///
/// Movies and episodes are public domain (Internet Archive) or CC
/// (Big Buck Bunny); the music albums are CC0, CC-BY and Jamendo CC.
pub fn builtin_catalog() -> Vec<DownloadItem> {
    let mut items = vec![
        DownloadItem::new(
            "Night of the Living Dead (1968)",
            "https://archive.org/download/night_of_the_living_dead_dvd/Night.mp4",
            "movies/Night of the Living Dead (1968)/Night of the Living Dead (1968).mp4",
        ),
        DownloadItem::new(
            "Plan 9 from Outer Space (1959)",
            "https://archive.org/download/plan-9-from-outer-space-1959_ed-wood/PLAN%209%20FROM%20OUTER%20SPACE%201959.ia.mp4",
            "movies/Plan 9 from Outer Space (1959)/Plan 9 from Outer Space (1959).mp4",
        ),
        DownloadItem::new(
            "Big Buck Bunny (2008)",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
            "movies/Big Buck Bunny (2008)/Big Buck Bunny (2008).mp4",
        ),
        DownloadItem::new(
            "The Cisco Kid S01E01",
            "https://archive.org/download/TheCiscoKidpublicdomain/The_Cisco_Kid_s01e01.mp4",
            "tv-shows/The Cisco Kid (1950)/Season 01/The Cisco Kid - S01E01 - The Gay Caballero.mp4",
        ),
        DownloadItem::new(
            "The Cisco Kid S01E02",
            "https://archive.org/download/TheCiscoKidpublicdomain/The_Cisco_Kid_s01e02.mp4",
            "tv-shows/The Cisco Kid (1950)/Season 01/The Cisco Kid - S01E02 - Boomerang.mp4",
        ),
    ];

    // The Open Goldberg Variations (2012), Kimiko Ishizaka (CC0).
    let goldberg_tracks = [
        ("01 - Aria.ogg", "Kimiko_Ishizaka_-_01_-_Aria.ogg"),
        (
            "02 - Variatio 1 a 1 Clav.ogg",
            "Kimiko_Ishizaka_-_02_-_Variatio_1_a_1_Clav.ogg",
        ),
        (
            "03 - Variatio 2 a 1 Clav.ogg",
            "Kimiko_Ishizaka_-_03_-_Variatio_2_a_1_Clav.ogg",
        ),
        (
            "04 - Variatio 3 a 1 Clav. Canone all'Unisuono.ogg",
            "Kimiko_Ishizaka_-_04_-_Variatio_3_a_1_Clav_Canone_allUnisuono.ogg",
        ),
    ];
    for (display_name, source_name) in goldberg_tracks {
        items.push(DownloadItem::new(
            display_name,
            &format!("https://archive.org/download/The_Open_Goldberg_Variations-11823/{source_name}"),
            &format!("music/Kimiko Ishizaka/The Open Goldberg Variations (2012)/{display_name}"),
        ));
    }

    // Kevin MacLeod, Royalty Free (2017) (CC-BY 3.0, attribution required).
    let macleod_tracks = [
        ("01 - Achaidh Cheide.mp3", "Achaidh%20Cheide.mp3"),
        ("02 - Achilles.mp3", "Achilles.mp3"),
    ];
    for (display_name, source_name) in macleod_tracks {
        items.push(DownloadItem::new(
            display_name,
            &format!(
                "https://archive.org/download/Kevin-MacLeod_Royalty-Free_2017_FullAlbum/{source_name}"
            ),
            &format!("music/Kevin MacLeod/Royalty Free (2017)/{display_name}"),
        ));
    }

    // Josh Woodward, Breadcrumbs (Instrumental Version) (CC, Jamendo
    // archive). First three tracks to keep the seed small.
    for index in 1..=3 {
        items.push(DownloadItem::new(
            &format!("Breadcrumbs track {index:02}"),
            &format!("https://archive.org/download/jamendo-089689/{index:02}.ogg"),
            &format!("music/Josh Woodward/Breadcrumbs (Instrumental Version)/{index:02}.ogg"),
        ));
    }

    items
}
