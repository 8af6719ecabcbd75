/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::decode::XmlDecodeError;
use std::borrow::Cow;

/// Unescape XML entities.
///
/// Handles the five predefined entities and decimal or hexadecimal character references.
/// Anything else is an [`XmlDecodeError::InvalidEscape`].
pub(crate) fn unescape(s: &str) -> Result<Cow<'_, str>, XmlDecodeError> {
    if !s.contains('&') {
        return Ok(Cow::Borrowed(s));
    }
    let mut res = String::with_capacity(s.len());
    let mut sections = s.split('&');
    // the first section precedes any `&`
    if let Some(prefix) = sections.next() {
        res.push_str(prefix);
    }
    for section in sections {
        let idx = section.find(';').ok_or_else(|| XmlDecodeError::InvalidEscape {
            esc: format!("unterminated pattern: &{}", section),
        })?;
        let (entity, rest) = (&section[..idx], &section[idx + 1..]);
        match entity {
            "lt" => res.push('<'),
            "gt" => res.push('>'),
            "amp" => res.push('&'),
            "quot" => res.push('"'),
            "apos" => res.push('\''),
            other => res.push(char_reference(other)?),
        }
        res.push_str(rest);
    }
    Ok(Cow::Owned(res))
}

fn char_reference(entity: &str) -> Result<char, XmlDecodeError> {
    let invalid = || XmlDecodeError::InvalidEscape {
        esc: format!("&{};", entity),
    };
    let (digits, radix) = if let Some(hex) = entity.strip_prefix("#x") {
        (hex, 16)
    } else if let Some(decimal) = entity.strip_prefix('#') {
        (decimal, 10)
    } else {
        return Err(invalid());
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    let code = u32::from_str_radix(digits, radix).map_err(|_| invalid())?;
    std::char::from_u32(code).ok_or_else(invalid)
}

#[cfg(test)]
mod test {
    use crate::unescape::unescape;
    use proptest::prelude::*;
    use std::borrow::Cow;

    #[test]
    fn basic_unescape() {
        assert_eq!(
            unescape("&lt; &gt; &apos; &quot; &amp;").unwrap(),
            "< > ' \" &"
        );
        assert_eq!(
            unescape("Since a &gt; b, b is less than a").unwrap(),
            "Since a > b, b is less than a"
        );
    }

    #[test]
    fn no_escapes_borrows() {
        assert!(matches!(unescape("db-cluster-1").unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn character_references() {
        assert_eq!(unescape("&#x20;").unwrap(), " ");
        assert_eq!(unescape("&#32;").unwrap(), " ");
        assert_eq!(unescape("a&#x1F600;b").unwrap(), "a\u{1F600}b");
    }

    #[test]
    fn invalid_escapes() {
        for input in [
            "&lte;",
            "&#;",
            "&#x;",
            "&#xZZ;",
            "&#+12;",
            "&#xD800;",
            "unterminated &amp",
            "&",
        ] {
            assert!(unescape(input).is_err(), "{} should not unescape", input);
        }
    }

    fn escape(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }

    proptest! {
        #[test]
        fn no_panics(s: String) {
            let _ = unescape(&s);
        }

        #[test]
        fn unescape_reverses_escape(s: String) {
            let escaped = escape(&s);
            prop_assert_eq!(unescape(&escaped).unwrap(), s);
        }
    }
}
