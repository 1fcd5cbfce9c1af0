//! Playback widget boundary and display formatting
//!
//! The core never plays anything itself: it hands the embedded player a
//! video id and receives state callbacks. On a player error the caller
//! can fall back to the platform's own watch page.

/// Playback states reported by the embedded player widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Playing,
    Paused,
    Ended,
    Error,
}

impl PlayerState {
    /// Parse the widget's string callback value; unknown values (e.g.
    /// buffering notifications) yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "unstarted" => Some(PlayerState::Unstarted),
            "playing" => Some(PlayerState::Playing),
            "paused" => Some(PlayerState::Paused),
            "ended" => Some(PlayerState::Ended),
            "error" => Some(PlayerState::Error),
            _ => None,
        }
    }

    /// True when the caller should offer the watch-page fallback
    pub fn needs_fallback(self) -> bool {
        matches!(self, PlayerState::Error)
    }
}

/// The platform's own page for a video, used as fallback navigation when
/// the embedded player errors
pub fn watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

/// Embed URL handed to the playback widget
pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}?autoplay=1")
}

/// Render an ISO-8601 duration (`PT4M13S`) as `4:13`, or `H:MM:SS` when
/// an hour component is present. Anything unparseable renders as `0:00`.
pub fn format_duration(duration: &str) -> String {
    const FALLBACK: &str = "0:00";

    let Some(rest) = duration.strip_prefix("PT") else {
        return FALLBACK.to_string();
    };

    let mut hours = 0u64;
    let mut minutes = 0u64;
    let mut seconds = 0u64;
    let mut value = 0u64;
    let mut has_digits = false;

    for c in rest.chars() {
        if let Some(digit) = c.to_digit(10) {
            value = value * 10 + u64::from(digit);
            has_digits = true;
        } else {
            if !has_digits {
                return FALLBACK.to_string();
            }
            match c {
                'H' => hours = value,
                'M' => minutes = value,
                'S' => seconds = value,
                _ => return FALLBACK.to_string(),
            }
            value = 0;
            has_digits = false;
        }
    }

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Render a view count the way the now-playing screen shows it:
/// `532 views`, `1.5K views`, `1.2M views`
pub fn format_view_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M views", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K views", count as f64 / 1_000.0)
    } else {
        format!("{count} views")
    }
}
