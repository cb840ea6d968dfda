/// Source of an `<img>` that swaps to a placeholder the first time it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    primary: String,
    placeholder: String,
    substituted: bool,
}

impl ImageFallback {
    pub fn new(primary: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            placeholder: placeholder.into(),
            substituted: false,
        }
    }

    pub fn current(&self) -> &str {
        if self.substituted {
            &self.placeholder
        } else {
            &self.primary
        }
    }

    pub fn is_substituted(&self) -> bool {
        self.substituted
    }

    /// Handle a load error. Yields the placeholder once; a failing
    /// placeholder is left alone.
    pub fn on_error(&mut self) -> Option<&str> {
        if self.substituted {
            return None;
        }
        log::error!("Error loading image: {}", self.primary);
        self.substituted = true;
        Some(&self.placeholder)
    }

    /// Check an image that may have finished loading before anyone listened
    /// for its error event. A complete image with no intrinsic width failed.
    pub fn on_settled(&mut self, complete: bool, natural_width: u32) -> Option<&str> {
        if complete && natural_width == 0 {
            self.on_error()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECT_PLACEHOLDER;

    #[test]
    fn test_substitutes_once() {
        let mut img = ImageFallback::new("/projects/missing.png", PROJECT_PLACEHOLDER);
        assert_eq!(img.current(), "/projects/missing.png");

        assert_eq!(img.on_error(), Some(PROJECT_PLACEHOLDER));
        assert_eq!(img.current(), PROJECT_PLACEHOLDER);

        // placeholder itself failing must not loop
        assert_eq!(img.on_error(), None);
        assert_eq!(img.on_error(), None);
        assert_eq!(img.current(), PROJECT_PLACEHOLDER);
        assert!(img.is_substituted());
    }

    #[test]
    fn test_failure_before_hydration_is_caught_up() {
        let mut img = ImageFallback::new("/projects/missing.png", PROJECT_PLACEHOLDER);

        // still loading: leave it to the error listener
        assert_eq!(img.on_settled(false, 0), None);
        assert!(!img.is_substituted());

        assert_eq!(img.on_settled(true, 0), Some(PROJECT_PLACEHOLDER));
        assert_eq!(img.current(), PROJECT_PLACEHOLDER);

        // a later error event for the same failure is a no-op
        assert_eq!(img.on_error(), None);
        assert_eq!(img.on_settled(true, 0), None);
    }

    #[test]
    fn test_loaded_image_is_kept() {
        let mut img = ImageFallback::new("/a.png", "/b.png");
        assert_eq!(img.on_settled(true, 400), None);
        assert_eq!(img.current(), "/a.png");
    }

    #[test]
    fn test_untouched_without_error() {
        let img = ImageFallback::new("/a.png", "/b.png");
        assert!(!img.is_substituted());
        assert_eq!(img.current(), "/a.png");
    }
}
