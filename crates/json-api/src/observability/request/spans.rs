//! HTTP span helpers.

/// Route template for a concrete request path, keeping metric and span labels
/// bounded. Numeric segments become `{id}` and search terms become `{query}`.
pub(super) fn route_template(path: &str) -> String {
    let mut template = String::new();
    let mut previous = None;

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        template.push('/');

        if previous == Some("search") {
            template.push_str("{query}");
            break;
        }

        if segment.bytes().all(|byte| byte.is_ascii_digit()) {
            template.push_str("{id}");
        } else {
            template.push_str(segment);
        }

        previous = Some(segment);
    }

    if template.is_empty() {
        template.push('/');
    }

    template
}
