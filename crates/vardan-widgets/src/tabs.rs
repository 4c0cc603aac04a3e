//! Product category tabs.

use vardan_observability::StructuredLogger;

/// Fragment used while every category is shown.
pub const SHOW_ALL_FRAGMENT: &str = "products";

/// A category section discovered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    /// Element id, used as the URL fragment.
    pub id: String,
    /// Heading text, used as the tab label.
    pub title: String,
}

impl CategorySection {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Which categories are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSelection {
    Single(usize),
    ShowAll,
}

/// Tab navigator over category sections.
#[derive(Debug, Clone)]
pub struct ProductTabs {
    categories: Vec<CategorySection>,
    selection: TabSelection,
    logger: StructuredLogger,
}

impl ProductTabs {
    /// Create tabs showing the first category. Returns `None` without categories.
    pub fn new(categories: Vec<CategorySection>) -> Option<Self> {
        if categories.is_empty() {
            return None;
        }
        Some(Self {
            categories,
            selection: TabSelection::Single(0),
            logger: StructuredLogger::new("tabs"),
        })
    }

    pub fn categories(&self) -> &[CategorySection] {
        &self.categories
    }

    pub fn selection(&self) -> TabSelection {
        self.selection
    }

    /// Whether category `index` is visible.
    pub fn is_visible(&self, index: usize) -> bool {
        match self.selection {
            TabSelection::ShowAll => index < self.categories.len(),
            TabSelection::Single(i) => i == index,
        }
    }

    /// Show one category. Out-of-range indices are ignored.
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            return false;
        }
        self.selection = TabSelection::Single(index);
        true
    }

    /// Show every category.
    pub fn show_all(&mut self) {
        self.selection = TabSelection::ShowAll;
    }

    /// URL fragment for the current selection, including `#`.
    pub fn fragment(&self) -> String {
        match self.selection {
            TabSelection::ShowAll => format!("#{SHOW_ALL_FRAGMENT}"),
            TabSelection::Single(i) => format!("#{}", self.categories[i].id),
        }
    }

    /// Restore the selection from a URL fragment (with or without `#`).
    ///
    /// Empty and show-all fragments select the first category; unknown
    /// fragments leave the selection unchanged.
    pub fn restore_from_fragment(&mut self, fragment: &str) -> bool {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if id.is_empty() || id == SHOW_ALL_FRAGMENT {
            return self.switch_to(0);
        }
        match self.categories.iter().position(|c| c.id == id) {
            Some(index) => self.switch_to(index),
            None => {
                self.logger
                    .debug_builder("Unknown category fragment")
                    .field("fragment", id)
                    .emit();
                false
            }
        }
    }

    /// Markup of the tab strip: a show-all button, then one tab per category.
    pub fn tab_strip(&self) -> String {
        let show_all_active = matches!(self.selection, TabSelection::ShowAll);
        let tabs: String = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    r#"<button class="tab-btn{}" data-index="{}" data-category-id="{}">{}</button>"#,
                    active_class(self.selection == TabSelection::Single(i)),
                    i,
                    html_escape(&c.id),
                    html_escape(&c.title)
                )
            })
            .collect();

        format!(
            r#"<div class="product-tabs-container"><div class="product-tabs"><button class="tab-btn show-all-btn{}">{} Show All</button>{}</div></div>"#,
            active_class(show_all_active),
            "\u{1f4cb}",
            tabs
        )
    }
}

fn active_class(active: bool) -> &'static str {
    if active {
        " active"
    } else {
        ""
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> ProductTabs {
        ProductTabs::new(vec![
            CategorySection::new("soaps", "Handmade Soaps"),
            CategorySection::new("oils", "Oils & Serums"),
            CategorySection::new("tea", "Herbal Tea"),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_categories_no_tabs() {
        assert!(ProductTabs::new(Vec::new()).is_none());
    }

    #[test]
    fn test_exactly_one_visible() {
        let mut t = tabs();
        assert!(t.switch_to(1));
        let visible: Vec<_> = (0..3).filter(|&i| t.is_visible(i)).collect();
        assert_eq!(visible, vec![1]);
        assert_eq!(t.fragment(), "#oils");
    }

    #[test]
    fn test_show_all() {
        let mut t = tabs();
        t.show_all();
        assert!((0..3).all(|i| t.is_visible(i)));
        assert_eq!(t.fragment(), "#products");
    }

    #[test]
    fn test_switch_out_of_range_is_noop() {
        let mut t = tabs();
        t.switch_to(2);
        assert!(!t.switch_to(3));
        assert_eq!(t.selection(), TabSelection::Single(2));
    }

    #[test]
    fn test_restore_from_fragment() {
        let mut t = tabs();
        assert!(t.restore_from_fragment("#tea"));
        assert_eq!(t.selection(), TabSelection::Single(2));

        assert!(!t.restore_from_fragment("#nope"));
        assert_eq!(t.selection(), TabSelection::Single(2));

        assert!(t.restore_from_fragment("#products"));
        assert_eq!(t.selection(), TabSelection::Single(0));

        t.switch_to(1);
        assert!(t.restore_from_fragment(""));
        assert_eq!(t.selection(), TabSelection::Single(0));
    }

    #[test]
    fn test_tab_strip_markup() {
        let mut t = tabs();
        t.switch_to(1);
        let html = t.tab_strip();
        assert!(html.contains(r#"<button class="tab-btn active" data-index="1" data-category-id="oils">Oils &amp; Serums</button>"#));
        assert!(html.contains(r#"<button class="tab-btn show-all-btn">"#));
        assert_eq!(html.matches("tab-btn").count(), 4);
    }
}
