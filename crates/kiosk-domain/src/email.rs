//! Email normalization and syntactic validation.

/// Normalize an email address for storage and lookup: trim surrounding
/// whitespace and lowercase. All uniqueness checks run on the normalized form.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Syntactic email check: exactly one `@`, non-empty local part, and a domain
/// with at least one dot-separated label on each side. Deliberately stricter
/// than RFC 5321 on whitespace and laxer on quoting; registration only needs
/// to reject obvious garbage, the mailbox proves itself at delivery time.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !domain.contains('.') {
        return false;
    }
    domain
        .split('.')
        .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}
