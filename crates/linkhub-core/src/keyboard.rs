#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Enter or Space on a link-like element: behave like a click.
    Activate,
    /// Tab anywhere: the user is navigating by keyboard.
    KeyboardNavigation,
    None,
}

impl KeyIntent {
    /// `key` is a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" | " " => Self::Activate,
            "Tab" => Self::KeyboardNavigation,
            _ => Self::None,
        }
    }
}

/// Selector for the element a skip link jumps to. Only in-page fragments
/// (`#main`) resolve.
pub fn skip_link_target(href: Option<&str>) -> Option<&str> {
    let href = href?.trim();
    let fragment = href.strip_prefix('#')?;
    let valid = !fragment.is_empty()
        && fragment
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_');
    valid.then_some(href)
}
