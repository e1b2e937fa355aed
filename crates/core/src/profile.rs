//! User profile rules.

/// Display name used when no better one can be derived from the email.
pub const DEFAULT_DISPLAY_NAME: &str = "Space Explorer";

/// Derive the initial display name for a new profile.
///
/// Uses the email local-part (everything before the first `@`), falling back
/// to [`DEFAULT_DISPLAY_NAME`] when there is no email or the local-part is
/// empty.
///
/// ```
/// use spacetour_core::profile::default_display_name;
///
/// assert_eq!(default_display_name(Some("yuri@vostok.space")), "yuri");
/// assert_eq!(default_display_name(None), "Space Explorer");
/// ```
pub fn default_display_name(email: Option<&str>) -> String {
    email
        .and_then(|e| e.split('@').next())
        .filter(|local| !local.is_empty())
        .unwrap_or(DEFAULT_DISPLAY_NAME)
        .to_string()
}
