//! String sanitization for directory names

/// Longest component kept from user-controlled names
const MAX_COMPONENT_LEN: usize = 40;

/// Make a repository name safe to embed in a directory name
///
/// Keeps ASCII alphanumerics, hyphens, underscores and dots, replaces
/// everything else with `_`, and truncates to a bounded length.
pub fn sanitize_path_component(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_COMPONENT_LEN)
        .collect()
}
