/// Derive a URL-safe code from a display name: lowercase ASCII alphanumerics,
/// every other run of characters collapsed into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_joins_words() {
        assert_eq!(slugify("Apple Computer, Inc."), "apple-computer-inc");
        assert_eq!(slugify("IBM"), "ibm");
    }

    #[test]
    fn slugify_trims_separators() {
        assert_eq!(slugify("  --Netflix--  "), "netflix");
        assert_eq!(slugify("AT&T   Mobility"), "at-t-mobility");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("Café Zürich"), "caf-z-rich");
        assert_eq!(slugify("¡¿!"), "");
    }
}
