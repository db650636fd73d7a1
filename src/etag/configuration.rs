use {duration_str::*, std::time::*};

/// Default `max-age` in seconds.
pub const DEFAULT_MAX_AGE: u64 = 0;

/// Default for weak entity tags.
pub const DEFAULT_WEAK: bool = true;

/// Default `Cache-Control` header value for a `max-age`.
pub fn default_cache_control(max_age: u64) -> String {
    format!("private, no-cache, max-age={}, must-revalidate", max_age)
}

//
// EtagOptions
//

/// ETag options.
///
/// Every field is optional. Unset fields get their defaults when [resolved](Self::resolve).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtagOptions {
    /// `Cache-Control` header value.
    ///
    /// * [None]: derived from `max_age` (see [default_cache_control]).
    /// * `Some(None)`: do not add a `Cache-Control` header.
    /// * `Some(Some(value))`: used verbatim, `max_age` is ignored.
    ///
    /// An existing `Cache-Control` header on the response is never overwritten.
    pub cache_control: Option<Option<String>>,

    /// `max-age` in seconds for the default `Cache-Control` header.
    pub max_age: Option<u64>,

    /// Whether to generate weak entity tags and use weak comparison.
    pub weak: Option<bool>,
}

impl EtagOptions {
    /// Set an explicit `Cache-Control` header value.
    pub fn cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(Some(cache_control.into()));
        self
    }

    /// Do not add a `Cache-Control` header.
    pub fn without_cache_control(mut self) -> Self {
        self.cache_control = Some(None);
        self
    }

    /// Set `max-age` in seconds.
    pub fn max_age(mut self, max_age: u64) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Set `max-age` as a [Duration].
    ///
    /// Sub-second precision is truncated.
    pub fn max_age_duration(self, max_age: Duration) -> Self {
        tracing::debug!("max-age: {}", max_age.human_format());
        self.max_age(max_age.as_secs())
    }

    /// Set whether to use weak entity tags.
    pub fn weak(mut self, weak: bool) -> Self {
        self.weak = Some(weak);
        self
    }

    /// Resolve with defaults.
    pub fn resolve(&self) -> EtagConfiguration {
        let max_age = self.max_age.unwrap_or(DEFAULT_MAX_AGE);

        let cache_control = match &self.cache_control {
            Some(cache_control) => cache_control.clone(),
            None => Some(default_cache_control(max_age)),
        };

        EtagConfiguration {
            cache_control,
            max_age,
            weak: self.weak.unwrap_or(DEFAULT_WEAK),
        }
    }
}

//
// EtagConfiguration
//

/// Resolved ETag configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtagConfiguration {
    /// `Cache-Control` header value. [None] means we don't add the header.
    pub cache_control: Option<String>,

    /// `max-age` in seconds.
    ///
    /// Kept for introspection. It has already been applied to `cache_control` if relevant.
    pub max_age: u64,

    /// Weak.
    pub weak: bool,
}

impl Default for EtagConfiguration {
    fn default() -> Self {
        EtagOptions::default().resolve()
    }
}

impl From<&EtagOptions> for EtagConfiguration {
    fn from(options: &EtagOptions) -> Self {
        options.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_CACHE_CONTROL: &str = "private, no-cache, max-age=0, must-revalidate";

    #[test]
    fn defaults() {
        let configuration = EtagOptions::default().resolve();
        assert!(configuration.weak);
        assert_eq!(configuration.max_age, 0);
        assert_eq!(configuration.cache_control.as_deref(), Some(DEFAULT_CACHE_CONTROL));
        assert_eq!(configuration, EtagConfiguration::default());
    }

    #[test]
    fn max_age_controls_cache_control() {
        let configuration = EtagOptions::default().max_age(123).resolve();
        assert_eq!(
            configuration.cache_control.as_deref(),
            Some("private, no-cache, max-age=123, must-revalidate")
        );
    }

    #[test]
    fn explicit_cache_control_ignores_max_age() {
        let configuration = EtagOptions::default()
            .cache_control("public, max-age=0")
            .max_age(123)
            .resolve();
        assert_eq!(configuration.cache_control.as_deref(), Some("public, max-age=0"));
        assert_eq!(configuration.max_age, 123);
    }

    #[test]
    fn suppressed_cache_control() {
        let configuration = EtagOptions::default()
            .without_cache_control()
            .max_age(60)
            .resolve();
        assert_eq!(configuration.cache_control, None);
        assert_eq!(configuration.max_age, 60);
    }

    #[test]
    fn max_age_duration_truncates() {
        let configuration = EtagOptions::default()
            .max_age_duration(Duration::from_millis(90_500))
            .resolve();
        assert_eq!(configuration.max_age, 90);
        assert_eq!(
            configuration.cache_control.as_deref(),
            Some("private, no-cache, max-age=90, must-revalidate")
        );
    }

    #[test]
    fn strong() {
        let configuration = EtagOptions::default().weak(false).resolve();
        assert!(!configuration.weak);
        assert_eq!(configuration.cache_control.as_deref(), Some(DEFAULT_CACHE_CONTROL));
    }
}
