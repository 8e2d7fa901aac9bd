//! Browser engine detection

/// Coarse engine classification used to gate web notifications
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrowserEngine {
    Safari,
    #[default]
    Other,
}

impl BrowserEngine {
    /// Classify from whether the page exposes a `window.safari` global
    pub fn from_safari_probe(has_safari_global: bool) -> Self {
        if has_safari_global {
            BrowserEngine::Safari
        } else {
            BrowserEngine::Other
        }
    }

    /// Web push is only wired up outside Safari
    pub fn notifications_supported(self) -> bool {
        !matches!(self, BrowserEngine::Safari)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe() {
        assert_eq!(BrowserEngine::from_safari_probe(true), BrowserEngine::Safari);
        assert_eq!(BrowserEngine::from_safari_probe(false), BrowserEngine::Other);
        assert!(!BrowserEngine::Safari.notifications_supported());
        assert!(BrowserEngine::Other.notifications_supported());
    }
}
