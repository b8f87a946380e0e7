//! Client-side form validation
//!
//! The backend validates everything again; these checks exist only so a
//! request that is guaranteed to fail is never sent. Messages are the
//! user-facing Croatian strings shown in the error banners.

/// Minimum title length in characters
pub const TITLE_MIN: usize = 2;
/// Maximum title length in characters
pub const TITLE_MAX: usize = 70;
/// Minimum content length in characters
pub const CONTENT_MIN: usize = 10;
/// Minimum password length in characters
pub const PASSWORD_MIN: usize = 8;

/// Validate the create/edit post form. Returns the banner message on failure.
pub fn validate_post(title: &str, content: &str) -> Result<(), String> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err("Naslov i sadržaj su obavezni".to_string());
    }
    let title_len = title.chars().count();
    if title_len < TITLE_MIN || title_len > TITLE_MAX {
        return Err(format!(
            "Naslov mora imati između {} i {} znakova",
            TITLE_MIN, TITLE_MAX
        ));
    }
    if content.chars().count() < CONTENT_MIN {
        return Err(format!(
            "Sadržaj mora imati najmanje {} znakova",
            CONTENT_MIN
        ));
    }
    Ok(())
}

/// Validate the sign-in form.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Molimo unesite email i lozinku".to_string());
    }
    Ok(())
}

/// Validate the sign-up form.
pub fn validate_sign_up(
    name: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<(), String> {
    if name.trim().is_empty()
        || email.trim().is_empty()
        || password.is_empty()
        || password_confirm.is_empty()
    {
        return Err("Molimo popunite sva polja".to_string());
    }
    if password != password_confirm {
        return Err("Lozinke se ne podudaraju".to_string());
    }
    if password.chars().count() < PASSWORD_MIN {
        return Err(format!(
            "Lozinka mora imati najmanje {} znakova",
            PASSWORD_MIN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_requires_title_and_content() {
        assert!(validate_post("", "some long content here").is_err());
        assert!(validate_post("Title", "").is_err());
        assert!(validate_post("   ", "some long content here").is_err());
    }

    #[test]
    fn test_post_title_length_bounds() {
        assert!(validate_post("a", "some long content here").is_err());
        assert!(validate_post(&"a".repeat(71), "some long content here").is_err());
        assert!(validate_post("ab", "some long content here").is_ok());
        assert!(validate_post(&"a".repeat(70), "some long content here").is_ok());
    }

    #[test]
    fn test_post_content_minimum() {
        assert!(validate_post("Title", "too short").is_err());
        assert!(validate_post("Title", "exactly 10").is_ok());
    }

    #[test]
    fn test_post_title_counts_chars_not_bytes() {
        // "čć" is 2 characters, 4 bytes
        assert!(validate_post("čć", "some long content here").is_ok());
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        assert!(validate_sign_in("", "password1").is_err());
        assert!(validate_sign_in("ana@example.com", "").is_err());
        assert!(validate_sign_in("ana@example.com", "password1").is_ok());
    }

    #[test]
    fn test_sign_up_password_mismatch() {
        let result = validate_sign_up("Ana", "ana@example.com", "password1", "password2");
        assert_eq!(result.unwrap_err(), "Lozinke se ne podudaraju");
    }

    #[test]
    fn test_sign_up_password_minimum() {
        let result = validate_sign_up("Ana", "ana@example.com", "short", "short");
        assert!(result.is_err());
    }

    #[test]
    fn test_sign_up_all_fields_required() {
        assert!(validate_sign_up("", "ana@example.com", "password1", "password1").is_err());
        assert!(validate_sign_up("Ana", "", "password1", "password1").is_err());
    }

    #[test]
    fn test_sign_up_valid() {
        assert!(validate_sign_up("Ana", "ana@example.com", "password1", "password1").is_ok());
    }
}
