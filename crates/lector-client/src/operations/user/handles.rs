//! Username and social handle rules, as the platform validates them.
//!
//! These are not applied by any operation; callers check input with them
//! before sending it, if they want to.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HANDLE: Regex = Regex::new(r"(?i)^@?[a-z0-9](\w){2,38}$").unwrap();
    static ref SOCIAL_HANDLE: Regex = Regex::new(r"(?i)^@?([\w-]){1,39}$").unwrap();
}

/// Whether `handle` is an acceptable platform username, with or without a leading `@`
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE.is_match(handle)
}

/// Whether `handle` is an acceptable twitter/github/hashnode handle
pub fn is_valid_social_handle(handle: &str) -> bool {
    SOCIAL_HANDLE.is_match(handle)
}

/// Drops a single leading `@`, if present
pub fn strip_at(handle: &str) -> &str {
    handle.strip_prefix('@').unwrap_or(handle)
}
