//! Read-only view of DOM elements.

/// The slice of an element the analytics layer needs.
///
/// The browser implementation wraps `web_sys::Element`; every accessor is
/// infallible so a detached or odd node simply reads as empty.
pub trait DomNode: Sized {
    /// Tag name in any case (`"BUTTON"`, `"a"`).
    fn tag_name(&self) -> String;
    /// Attribute value, if present.
    fn attribute(&self, name: &str) -> Option<String>;
    /// `textContent` of the element.
    fn text_content(&self) -> Option<String>;
    /// `value` of form controls; `None` for everything else.
    fn form_value(&self) -> Option<String>;
    /// Parent element.
    fn parent(&self) -> Option<Self>;
}

/// Whether a click on `node` counts as an interaction.
///
/// Matches `button`, `[role="button"]`, `input[type="button"]`,
/// `input[type="submit"]` and `a[href]`.
pub fn is_actionable<N: DomNode>(node: &N) -> bool {
    let tag = node.tag_name().to_ascii_lowercase();
    match tag.as_str() {
        "button" => true,
        "a" if node.attribute("href").is_some() => true,
        "input" => matches!(
            node.attribute("type").map(|t| t.to_ascii_lowercase()).as_deref(),
            Some("button") | Some("submit")
        ),
        _ => node.attribute("role").as_deref() == Some("button"),
    }
}

/// Nearest inclusive ancestor of `node` that [`is_actionable`].
pub fn closest_actionable<N: DomNode>(node: N) -> Option<N> {
    let mut current = Some(node);
    while let Some(candidate) = current {
        if is_actionable(&candidate) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

/// Whether the decorative cursor should enlarge over `node`: buttons, links,
/// `.cursor-pointer` / `.box` elements, or anything inside a button, link or
/// `.box`.
pub fn is_interactive_hover<N: DomNode>(node: N) -> bool {
    if has_class(&node, "cursor-pointer") {
        return true;
    }
    let mut current = Some(node);
    while let Some(candidate) = current {
        let tag = candidate.tag_name().to_ascii_lowercase();
        if tag == "button" || tag == "a" || has_class(&candidate, "box") {
            return true;
        }
        current = candidate.parent();
    }
    false
}

fn has_class<N: DomNode>(node: &N, class: &str) -> bool {
    node.attribute("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}
