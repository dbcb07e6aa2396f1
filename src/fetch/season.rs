// src/fetch/season.rs
use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static SEASON_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"season=\d+").expect("static regex")
});

/// Replace the first `season=<digits>` with `season=<season>`.
///
/// Without such a parameter the URL is returned unchanged and the requested
/// season has no effect.
pub fn substitute_season(url: &str, season: u16) -> Cow<'_, str> {
    let replaced = SEASON_PARAM.replace(url, format!("season={}", season).as_str());
    if matches!(replaced, Cow::Borrowed(_)) {
        logd!("Fetch: no season parameter in {}, using as-is", url);
    }
    replaced
}

pub fn has_season_param(url: &str) -> bool {
    SEASON_PARAM.is_match(url)
}
