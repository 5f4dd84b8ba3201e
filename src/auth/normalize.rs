//! Username normalization
//!
//! Turns a raw username into its canonical form: surrounding whitespace
//! trimmed, lower-cased, then title-cased word by word. Both sign-up and
//! log-in compare against this exact string.

use crate::error::AccountError;

/// Normalizes a raw username.
///
/// Empty input fails before any transformation. Input that is empty once
/// trimmed (only whitespace) fails as well.
pub fn normalize_username(raw: &str) -> Result<String, AccountError> {
    if raw.is_empty() {
        return Err(AccountError::EmptyUsername);
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AccountError::EmptyUsername);
    }

    Ok(title_case(&trimmed.to_lowercase()))
}

/// Rejects normalized usernames longer than `max_length` characters.
pub fn check_username_length(username: &str, max_length: usize) -> Result<(), AccountError> {
    if username.chars().count() > max_length {
        return Err(AccountError::UsernameTooLong { max: max_length });
    }
    Ok(())
}

/// Upper-cases the first character of every whitespace-separated word.
/// Whitespace inside the string is kept as is.
fn title_case(lowered: &str) -> String {
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;

    for c in lowered.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            push_upper(&mut out, c);
            at_word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}

// Characters whose upper-case form expands (e.g. 'ß' -> "SS") stay lower-case,
// otherwise a second pass would not reproduce the same string.
fn push_upper(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => out.push(u),
        _ => out.push(c),
    }
}
