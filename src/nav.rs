/// Element id for a logical section name, e.g. `projects` -> `projects-section`.
pub fn section_id(anchor: &str) -> String {
    format!("{anchor}-section")
}

/// Something that can find page sections by id and scroll them into view.
pub trait SectionLocator {
    type Element;

    fn find(&self, id: &str) -> Option<Self::Element>;

    /// Smooth scroll aligned to the element's top edge.
    fn scroll_into_view(&self, element: &Self::Element);
}

/// Scroll to `<anchor>-section` if it exists. A missing section is a silent
/// no-op and returns `false`.
pub fn navigate_to_anchor<L: SectionLocator>(locator: &L, anchor: &str) -> bool {
    let id = section_id(anchor);
    match locator.find(&id) {
        Some(el) => {
            locator.scroll_into_view(&el);
            true
        }
        None => {
            log::debug!("no section with id {id}, skipping scroll");
            false
        }
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use dom::DocumentLocator;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod dom {
    use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use super::SectionLocator;

    /// Locator backed by the live browser document.
    pub struct DocumentLocator;

    impl SectionLocator for DocumentLocator {
        type Element = Element;

        fn find(&self, id: &str) -> Option<Element> {
            web_sys::window()?.document()?.get_element_by_id(id)
        }

        fn scroll_into_view(&self, element: &Element) {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }
}
