//! Public link slugs.
//!
//! A slug is lowercase ASCII alphanumerics separated by single dashes and is
//! generated before an invitation is first saved, so a local-only record
//! already has the key its public link will use.

use uuid::Uuid;

const SUFFIX_LEN: usize = 6;

/// `jahongir-sarvinoz-3f9a1c`
pub fn invitation_slug(groom_name: &str, bride_name: &str) -> String {
    let mut base = slugify(&format!("{groom_name} {bride_name}"));
    if base.is_empty() {
        base = "taklifnoma".to_string();
    }
    format!("{base}-{}", random_suffix())
}

/// Lowercase, keep ASCII alphanumerics, collapse everything else into one dash.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..SUFFIX_LEN].to_string()
}
