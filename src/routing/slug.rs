//! Slug compilation.
//!
//! # Responsibilities
//! - Turn the verb-stripped operation name into a URL token
//! - Append one placeholder segment per URL-bound parameter
//!
//! # Placeholder Rules
//! ```text
//! User $user            → {user}      (class type → type basename)
//! int $id               → {id}        (builtin type → parameter name)
//! $force = null         → {force?}    (default value → optional)
//! Request $request      → (skipped, injected by the dispatcher)
//! ```

use crate::descriptor::{Operation, Parameter};

/// Slug produced for operations that map onto the base path itself.
const INDEX_SLUG: &str = "index";

/// Compile the slug fragment for an operation.
///
/// `remainder` is the operation name with its verb prefix already removed.
/// Parameters typed exactly as `request_type`, nullable or not, do not
/// contribute a segment.
pub fn compile_slug(remainder: &str, operation: &Operation, request_type: &str) -> String {
    let mut slug = slugify(remainder);
    if slug == INDEX_SLUG {
        slug.clear();
    }

    for parameter in &operation.parameters {
        if parameter.type_name() == Some(request_type) {
            continue;
        }
        slug.push_str("/{");
        slug.push_str(&placeholder_name(parameter));
        if parameter.has_default {
            slug.push('?');
        }
        slug.push('}');
    }

    slug
}

/// Placeholder name for a URL-bound parameter.
pub fn placeholder_name(parameter: &Parameter) -> String {
    match &parameter.ty {
        Some(ty) if !ty.is_builtin() => ty.basename().to_lowercase(),
        _ => parameter.name.to_lowercase(),
    }
}

/// Lowercase, hyphen-separated URL token (`UserProfile` → `user-profile`).
pub fn slugify(value: &str) -> String {
    normalize(&kebab_case(value))
}

/// Insert a hyphen before every word start that has a preceding character.
///
/// All-lowercase ASCII input is returned untouched. Whitespace is dropped
/// and the letter following it counts as a word start. Only ASCII uppercase
/// letters start a word; other uppercase letters are lowercased in place.
fn kebab_case(value: &str) -> String {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_lowercase()) {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 4);
    let mut after_space = false;
    for c in value.chars() {
        if c.is_whitespace() {
            after_space = true;
            continue;
        }
        let word_start = c.is_ascii_uppercase() || (after_space && c.is_alphabetic());
        if word_start && !out.is_empty() {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        after_space = false;
    }
    out
}

/// URL-safe normalization of a kebab-cased token.
///
/// `_`, `-` and whitespace runs collapse into a single `-`, `@` reads as
/// `at`, anything else that is not alphanumeric is dropped. Separators never
/// lead or trail.
fn normalize(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut separator = false;

    for c in value.replace('@', "-at-").chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            separator = true;
        } else if c.is_alphanumeric() {
            if separator && !out.is_empty() {
                out.push('-');
            }
            separator = false;
            out.extend(c.to_lowercase());
        }
    }

    out
}
