//! Slugs

/// Derives a URL slug from a title: lowercase ASCII alphanumerics with every
/// other run of characters collapsed into a single `-`.
pub(crate) fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for word in title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        if !slug.is_empty() {
            slug.push('-');
        }

        slug.push_str(&word.to_ascii_lowercase());
    }

    slug
}
