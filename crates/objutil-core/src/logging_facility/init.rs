//! One-shot subscriber installation

use std::sync::Once;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Output flavour of the installed subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, `objutil_core=debug`
    Development,
    /// JSON lines, `objutil_core=info`
    Production,
    /// Bare registry; pair with `init_test_capture()` for assertions
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset; `None` for the test profile
    pub fn default_directive(self) -> Option<&'static str> {
        match self {
            Profile::Development => Some("objutil_core=debug"),
            Profile::Production => Some("objutil_core=info"),
            Profile::Test => None,
        }
    }

    fn env_filter(self) -> EnvFilter {
        let fallback = self.default_directive().unwrap_or("off");
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

static INSTALLED: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call in a process has an effect. `RUST_LOG`, when set,
/// replaces the profile's default filter.
///
/// # Example
///
/// ```
/// use objutil_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// init(Profile::Development); // no-op, already installed
/// ```
pub fn init(profile: Profile) {
    INSTALLED.call_once(|| match profile {
        Profile::Development => tracing_subscriber::fmt()
            .with_env_filter(profile.env_filter())
            .init(),
        Profile::Production => tracing_subscriber::fmt()
            .json()
            .with_env_filter(profile.env_filter())
            .init(),
        Profile::Test => tracing_subscriber::registry().init(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Production);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(
            Profile::Development.default_directive(),
            Some("objutil_core=debug")
        );
        assert_eq!(
            Profile::Production.default_directive(),
            Some("objutil_core=info")
        );
        assert_eq!(Profile::Test.default_directive(), None);
    }
}
