//! Avatar initials for participant rows.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Up to two uppercase characters from the first name-ish part of an email.
///
/// Takes the local part (before `@`), then the segment before the first `.`,
/// then its first two characters, uppercased. Shorter segments yield shorter
/// labels; there is no padding.
pub fn avatar_label(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let first = local.split('.').next().unwrap_or_default();
    first.chars().take(2).collect::<String>().to_uppercase()
}
