/// Returns the in-page fragment of a link (`"#id"`) when it names a target,
/// or `None` for an empty hash or a bare `"#"`.
#[inline]
pub fn fragment_target(hash: &str) -> Option<&str> {
    if hash.len() > 1 && hash.starts_with('#') {
        Some(hash)
    } else {
        None
    }
}

/// Outcome of a click on a navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorClick<T> {
    /// Cancel navigation and smooth-scroll `T` to the top of the viewport.
    Scroll(T),
    /// Leave the browser's default navigation alone.
    FollowLink,
}

/// Decide a click from the link's current `hash`. `lookup` resolves a
/// fragment to its element and returns `None` when nothing matches.
pub fn resolve_anchor_click<T>(hash: &str, lookup: impl FnOnce(&str) -> Option<T>) -> AnchorClick<T> {
    match fragment_target(hash).and_then(lookup) {
        Some(target) => AnchorClick::Scroll(target),
        None => AnchorClick::FollowLink,
    }
}
