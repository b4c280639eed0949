// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsing and validation of the textual forms of a callable reference:
//! a bare function name (`trim`), a type path (`crate::Handler`) and a
//! scope-resolution string (`crate::Handler::on_body`).

use crate::{unresolvable_error, MyError};
use std::borrow::Cow;

/// Separator between a type (or module) path and the name that follows.
pub(crate) const SEPARATOR: &str = "::";

/// Split `s` at its last top-level [SEPARATOR] into `(owner, name)`.
///
/// Separators nested inside angle brackets (generic arguments, qualified
/// paths such as `<T as Trait>`) are not considered, nor is the one of a
/// turbofish (`parse::<u8>`) which stays w/ the name. Return `None` when
/// there's no such separator; i.e. `s` is a bare name.
pub(crate) fn split_last(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let mut depth = 0_i32;
    let mut found = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // the arrow of a fn signature is not a closing bracket
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth -= 1,
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                if bytes.get(i + 2) != Some(&b'<') {
                    found = Some(i);
                }
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    found.map(|x| (&s[..x], &s[x + SEPARATOR.len()..]))
}

/// Trim whitespace and a leading [SEPARATOR] marking an absolute path.
pub(crate) fn normalize(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix(SEPARATOR).unwrap_or(s).trim_start()
}

/// Return TRUE if `s` is a Rust identifier, raw identifiers included.
pub(crate) fn is_identifier(s: &str) -> bool {
    let s = s.strip_prefix("r#").unwrap_or(s);
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            s != "_" && chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Return TRUE if every `<` in `s` has a matching `>`.
pub(crate) fn is_balanced(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut depth = 0_i32;
    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'<' => depth += 1,
            b'>' if i == 0 || bytes[i - 1] != b'-' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Validate and return the name of a function or method: an identifier
/// optionally followed by generic arguments, w/ or w/o a turbofish. The
/// turbofish is dropped so that `parse::<u8>` and `parse<u8>` are one name.
pub(crate) fn check_name(s: &str) -> Result<Cow<'_, str>, MyError> {
    let s = s.trim();
    let (ident, generics) = match s.find('<') {
        Some(x) if s.ends_with('>') && is_balanced(&s[x..]) => (&s[..x], &s[x..]),
        Some(_) => unresolvable_error!("Malformed generic arguments in '{}'", s),
        None => (s, ""),
    };
    let (ident, turbofish) = match ident.strip_suffix(SEPARATOR) {
        Some(x) if !generics.is_empty() => (x.trim_end(), true),
        _ => (ident, false),
    };
    if !is_identifier(ident) {
        unresolvable_error!("'{}' is not a function or method name", s)
    }
    if turbofish {
        Ok(Cow::Owned(format!("{}{}", ident, generics)))
    } else {
        Ok(Cow::Borrowed(s))
    }
}

/// Validate and return a type path such as `Handler`, `crate::Handler`,
/// `Vec<u8>` or `<T as Trait>`.
pub(crate) fn check_type_path(s: &str) -> Result<&str, MyError> {
    let s = normalize(s);
    if s.is_empty() {
        unresolvable_error!("Empty type path")
    }
    if !is_balanced(s) {
        unresolvable_error!("Unbalanced angle brackets in type path '{}'", s)
    }
    // every top-level segment must be non-empty...
    let mut rest = s;
    while let Some((head, tail)) = split_last(rest) {
        if tail.trim().is_empty() {
            unresolvable_error!("Empty segment in type path '{}'", s)
        }
        rest = head;
    }
    if rest.trim().is_empty() {
        unresolvable_error!("Empty segment in type path '{}'", s)
    }
    Ok(s)
}
