use thiserror::Error;
use url::Url;

/// Local validation failures. Never sent to the network; surfaced as inline
/// field text next to the URL input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("URL is required")]
    MissingUrl,
    #[error("Please enter a valid URL")]
    InvalidUrl,
}

/// The URL input field: the raw value plus its derived validity error.
///
/// The error is recomputed on every edit. An empty field carries no error so
/// an untouched form doesn't open with a complaint; the pre-submit check in
/// [`UrlField::validate_for_submit`] is what catches the empty case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlField {
    value: String,
    validity_error: Option<SubmitError>,
}

impl UrlField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke handler. Synchronous, no debouncing.
    pub fn edit(&mut self, raw: impl Into<String>) {
        self.value = raw.into();
        self.validity_error = if self.value.is_empty() || is_absolute_url(&self.value) {
            None
        } else {
            Some(SubmitError::InvalidUrl)
        };
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn validity_error(&self) -> Option<SubmitError> {
        self.validity_error
    }

    /// Full check at submit time. Duplicates the edit-time check on purpose:
    /// the cached error is empty for an untouched field, so the controller
    /// must not rely on it alone.
    pub fn validate_for_submit(&self) -> Result<(), SubmitError> {
        if self.value.is_empty() {
            Err(SubmitError::MissingUrl)
        } else if !is_absolute_url(&self.value) {
            Err(SubmitError::InvalidUrl)
        } else {
            Ok(())
        }
    }

    /// Pin a pre-submit failure onto the field so the UI shows it inline.
    pub(crate) fn surface(&mut self, error: SubmitError) {
        self.validity_error = Some(error);
    }
}

/// A well-formed absolute URL: scheme plus authority. Scheme-only forms like
/// `mailto:` parse but have no authority and are rejected.
fn is_absolute_url(raw: &str) -> bool {
    Url::parse(raw).map(|u| u.has_authority()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://example.com/video.mp4")]
    #[case("http://localhost:8000")]
    #[case("https://www.youtube.com/watch?v=abc123")]
    fn test_edit_valid_url_clears_error(#[case] input: &str) {
        let mut field = UrlField::new();
        field.edit(input);
        assert_eq!(field.value(), input);
        assert_eq!(field.validity_error(), None);
    }

    #[rstest]
    #[case("not a url")]
    #[case("example.com/video.mp4")]
    #[case("/relative/path")]
    #[case("mailto:someone@example.com")]
    #[case("http://")]
    fn test_edit_invalid_url_sets_error(#[case] input: &str) {
        let mut field = UrlField::new();
        field.edit(input);
        assert_eq!(field.validity_error(), Some(SubmitError::InvalidUrl));
        assert_eq!(
            field.validity_error().map(|e| e.to_string()).as_deref(),
            Some("Please enter a valid URL")
        );
    }

    #[test]
    fn test_edit_empty_clears_error() {
        let mut field = UrlField::new();
        field.edit("not a url");
        field.edit("");
        assert_eq!(field.validity_error(), None);
    }

    #[test]
    fn test_untouched_field_has_no_error() {
        let field = UrlField::new();
        assert_eq!(field.value(), "");
        assert_eq!(field.validity_error(), None);
    }

    #[test]
    fn test_validate_for_submit_empty_is_missing() {
        let field = UrlField::new();
        assert_eq!(field.validate_for_submit(), Err(SubmitError::MissingUrl));
        assert_eq!(SubmitError::MissingUrl.to_string(), "URL is required");
    }

    #[test]
    fn test_validate_for_submit_invalid() {
        let mut field = UrlField::new();
        field.edit("not a url");
        assert_eq!(field.validate_for_submit(), Err(SubmitError::InvalidUrl));
    }

    #[test]
    fn test_validate_for_submit_passes() {
        let mut field = UrlField::new();
        field.edit("https://example.com/video.mp4");
        assert_eq!(field.validate_for_submit(), Ok(()));
    }
}
