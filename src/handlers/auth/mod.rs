// Public credential endpoints: token acquisition only, no authentication
// required to call them.
pub mod login;
pub mod signup;

pub use login::login_post;
pub use signup::signup_post;

/// Treat missing, empty and whitespace-only strings identically when
/// validating required request fields.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_filters_blank_values() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some(" a@x.com ".to_string())), Some("a@x.com".to_string()));
    }
}
