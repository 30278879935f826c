//! Reduced-motion preference
//!
//! Queried once at startup. When reduced motion is requested, the particle
//! overlay is built inert and entrances apply their final state immediately,
//! so the page is fully readable with nothing moving.

/// The host's motion preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    /// Animate everything
    Full,
    /// Skip animation, show final visual state immediately
    Reduced,
}

/// Environment variable honored when the config carries no override
pub const REDUCED_MOTION_ENV: &str = "GLIMMER_REDUCED_MOTION";

/// Resolve the preference: config override wins, then the environment.
pub fn detect(config_override: Option<bool>) -> MotionPreference {
    let env = std::env::var(REDUCED_MOTION_ENV).ok();
    resolve(config_override, env.as_deref())
}

fn resolve(config_override: Option<bool>, env: Option<&str>) -> MotionPreference {
    let reduced = match config_override {
        Some(flag) => flag,
        None => env.map(is_truthy).unwrap_or(false),
    };
    if reduced {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_motion() {
        assert_eq!(resolve(None, None), MotionPreference::Full);
    }

    #[test]
    fn test_env_values() {
        assert_eq!(resolve(None, Some("1")), MotionPreference::Reduced);
        assert_eq!(resolve(None, Some("TRUE")), MotionPreference::Reduced);
        assert_eq!(resolve(None, Some("yes")), MotionPreference::Reduced);
        assert_eq!(resolve(None, Some("0")), MotionPreference::Full);
        assert_eq!(resolve(None, Some("")), MotionPreference::Full);
        assert_eq!(resolve(None, Some("nonsense")), MotionPreference::Full);
    }

    #[test]
    fn test_config_override_beats_env() {
        assert_eq!(resolve(Some(true), Some("0")), MotionPreference::Reduced);
        assert_eq!(resolve(Some(false), Some("1")), MotionPreference::Full);
    }
}
