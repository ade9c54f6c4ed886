//! Askama filters used by the admin layout and list pages.

use std::fmt::Display;

/// Year shown in the page footer.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// CSS class for a free-text order status, e.g. `In Transit` becomes
/// `status-in-transit`.
///
/// Usage in templates: `{{ order.order_status|status_class }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn status_class(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(status_slug(&value.to_string()))
}

fn status_slug(status: &str) -> String {
    let words: Vec<String> = status
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    if words.is_empty() {
        "status-unknown".to_string()
    } else {
        format!("status-{}", words.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_slug() {
        assert_eq!(status_slug("Shipped"), "status-shipped");
        assert_eq!(status_slug("  In Transit "), "status-in-transit");
        assert_eq!(status_slug("on-hold/review"), "status-on-hold-review");
        assert_eq!(status_slug("\"><script>"), "status-script");
        assert_eq!(status_slug(""), "status-unknown");
    }
}
