use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "john_doe", "user123", "_admin", "JohnDoe"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();

    /// Shape of every slug handed out for news articles
    /// - Valid: "berita-terbaru", "rapat-desa-2024-17", "a"
    /// - Invalid: "-berita", "berita-", "berita--baru", "Berita", "berita_baru"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Trim a required text field, rejecting blank input
pub fn require_trimmed(value: &str, field: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(trimmed.to_string())
}

/// Treat a blank optional string as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_regex() {
        assert!(USERNAME_REGEX.is_match("john_doe"));
        assert!(USERNAME_REGEX.is_match("_admin"));
        assert!(USERNAME_REGEX.is_match("Operator2"));
        assert!(!USERNAME_REGEX.is_match("123user"));
        assert!(!USERNAME_REGEX.is_match("user-name"));
        assert!(!USERNAME_REGEX.is_match("user name"));
        assert!(!USERNAME_REGEX.is_match(""));
    }

    #[test]
    fn test_slug_regex() {
        assert!(SLUG_REGEX.is_match("berita-terbaru"));
        assert!(SLUG_REGEX.is_match("rapat-desa-2024-17"));
        assert!(!SLUG_REGEX.is_match("-berita"));
        assert!(!SLUG_REGEX.is_match("berita-"));
        assert!(!SLUG_REGEX.is_match("berita--baru"));
        assert!(!SLUG_REGEX.is_match("Berita"));
        assert!(!SLUG_REGEX.is_match(""));
    }

    #[test]
    fn test_require_trimmed() {
        assert_eq!(require_trimmed("  Budi ", "name").unwrap(), "Budi");
        assert_eq!(require_trimmed("   ", "name").unwrap_err(), "name is required");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" x ".into())), Some("x".into()));
    }
}
