//! Folder-name sanitization.

/// Characters rejected by at least one common filesystem in a path component.
const ILLEGAL: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitizes text for use as a single folder name.
///
/// - Deletes `< > : " / \ | ? *` and ASCII control characters (no replacement)
/// - Collapses whitespace runs into one space
/// - Trims leading/trailing whitespace
///
/// May return an empty string; substituting a fallback is up to the caller.
pub fn sanitize_folder_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for c in name.chars() {
        if ILLEGAL.contains(&c) || ('\0'..='\x1f').contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletes_colon_and_slash() {
        assert_eq!(sanitize_folder_name("My: Mix/2024"), "My Mix2024");
    }

    #[test]
    fn deletes_every_illegal_char() {
        assert_eq!(sanitize_folder_name(r#"a<b>c:d"e/f\g|h?i*j"#), "abcdefghij");
    }

    #[test]
    fn control_chars() {
        assert_eq!(sanitize_folder_name("mix\x00tape\x1f"), "mixtape");
    }

    #[test]
    fn tab_and_newline_are_removed_not_collapsed() {
        // \t and \n are control characters and vanish before whitespace folding.
        assert_eq!(sanitize_folder_name("a\tb\nc"), "abc");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(sanitize_folder_name("   Late   Night  Mix  "), "Late Night Mix");
        assert_eq!(sanitize_folder_name("a \u{3000} b"), "a b");
    }

    #[test]
    fn may_return_empty() {
        assert_eq!(sanitize_folder_name(""), "");
        assert_eq!(sanitize_folder_name(" ?* / "), "");
    }

    #[test]
    fn keeps_unicode() {
        assert_eq!(sanitize_folder_name("Café – 夜"), "Café – 夜");
    }
}
