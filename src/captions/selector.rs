use log::debug;

use crate::captions::manifest::CaptionTrack;

/// The track chosen for a request and the language its entries are attributed to
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSelection {
    pub track: CaptionTrack,
    pub base_url: String,
    pub lang: String,
}

/// Pick a caption track by language preference.
///
/// The first track whose code equals the preference exactly wins. Without a
/// preference, or when nothing matches, the first listed track is used and
/// attributed with its own language code. Returns `None` only for an empty list.
pub fn select_track(tracks: &[CaptionTrack], preference: Option<&str>) -> Option<TrackSelection> {
    if let Some(lang) = preference {
        if let Some(track) = tracks.iter().find(|t| t.language_code == lang) {
            debug!("Selected '{}' track matching preference", track.language_code);
            return Some(TrackSelection {
                track: track.clone(),
                base_url: track.base_url.clone(),
                lang: lang.to_string(),
            });
        }
        debug!("No track for '{}', falling back to default track", lang);
    }

    tracks.first().map(|track| TrackSelection {
        track: track.clone(),
        base_url: track.base_url.clone(),
        lang: track.language_code.clone(),
    })
}
