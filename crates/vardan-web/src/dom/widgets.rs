//! Page widgets: carousels, dropdown, category tabs, scroll effects, links and forms.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window,
};

use vardan_widgets::{
    anchor_target, is_external, scroll_target, CarouselRegistry, CategorySection, ClickTarget,
    Debouncer, Dropdown, FeaturedCarousel, ProductTabs, RequiredCheck, ScrollEffects, TabSelection,
    WidgetConfig, EXTERNAL_REL, EXTERNAL_TARGET, MSG_REQUIRED_FIELDS, OPEN_CLASS,
};

use super::timers::{set_timeout, Interval};
use super::{event_element, listen, query_all, query_all_in, toggle_class};
use crate::action::{CarouselAction, ATTR_CAROUSEL_MOVE, ATTR_CAROUSEL_SLIDE, ATTR_INDEX};
use crate::selectors;

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = WidgetConfig::default();
    init_image_carousels(document)?;
    init_featured(window, document, &config)?;
    init_dropdowns(document)?;
    init_tabs(window, document, &config)?;
    init_scroll_effects(window, document, &config)?;
    init_anchor_scrolling(window, document, &config)?;
    init_external_links(window, document)?;
    init_form_validation(window, document)?;
    Ok(())
}

fn inner_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

// Image carousels

fn init_image_carousels(document: &Document) -> Result<(), JsValue> {
    let registry = Rc::new(RefCell::new(CarouselRegistry::new()));
    for carousel in query_all(document, selectors::IMAGE_CAROUSEL) {
        let id = carousel.id();
        if id.is_empty() {
            continue;
        }
        let slides = query_all_in(&carousel, selectors::CAROUSEL_SLIDE).len();
        registry.borrow_mut().register(id.clone(), slides);

        let registry = Rc::clone(&registry);
        let root = carousel.clone();
        listen(&carousel, "click", move |event| {
            let Some(control) = event_element(&event).and_then(|el| {
                el.closest(&format!("[{}], [{}]", ATTR_CAROUSEL_MOVE, ATTR_CAROUSEL_SLIDE))
                    .ok()
                    .flatten()
            }) else {
                return;
            };
            let action = CarouselAction::parse(
                control.get_attribute(ATTR_CAROUSEL_MOVE).as_deref(),
                control.get_attribute(ATTR_CAROUSEL_SLIDE).as_deref(),
            );
            let mut registry = registry.borrow_mut();
            let state = match action {
                Some(CarouselAction::Move(step)) => registry.move_by(&id, step),
                Some(CarouselAction::GoTo(index)) => registry.go_to(&id, index),
                None => None,
            };
            let Some(state) = state else {
                return;
            };
            event.stop_propagation();
            if let Ok(Some(track)) = root.query_selector(selectors::CAROUSEL_TRACK) {
                if let Some(track) = track.dyn_ref::<HtmlElement>() {
                    let _ = track.style().set_property("transform", &state.transform());
                }
            }
            for (i, dot) in query_all_in(&root, selectors::CAROUSEL_INDICATOR).iter().enumerate() {
                toggle_class(dot, selectors::ACTIVE_CLASS, state.indicator_active(i));
            }
        })?;
    }
    Ok(())
}

// Featured carousel

struct Featured {
    window: Window,
    document: Document,
    state: RefCell<FeaturedCarousel>,
    track: HtmlElement,
    cards: Vec<HtmlElement>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    dots: Option<Element>,
    interval_ms: u32,
    autoplay: RefCell<Option<Interval>>,
}

impl Featured {
    fn render(&self) {
        let state = self.state.borrow();
        let card_width = self
            .cards
            .first()
            .map(|card| f64::from(card.offset_width()))
            .unwrap_or(0.0);
        let _ = self
            .track
            .style()
            .set_property("transform", &state.transform(card_width));
        if let Some(prev) = &self.prev {
            prev.set_disabled(state.prev_disabled());
        }
        if let Some(next) = &self.next {
            next.set_disabled(state.next_disabled());
        }
        if let Some(dots) = &self.dots {
            let class = format!(".{}", selectors::FEATURED_DOT_CLASS);
            for (i, dot) in query_all_in(dots, &class).iter().enumerate() {
                toggle_class(dot, selectors::ACTIVE_CLASS, i == state.current());
            }
        }
    }

    fn rebuild_dots(&self) -> Result<(), JsValue> {
        let Some(dots) = &self.dots else {
            return Ok(());
        };
        dots.set_inner_html("");
        let count = self.state.borrow().dot_count();
        for index in 0..count {
            let dot = self.document.create_element("button")?;
            dot.set_class_name(selectors::FEATURED_DOT_CLASS);
            dot.set_attribute(ATTR_INDEX, &index.to_string())?;
            dot.set_attribute("aria-label", &format!("Go to slide {}", index + 1))?;
            dots.append_child(&dot)?;
        }
        Ok(())
    }

    fn after_manual_move(self: &Rc<Self>) {
        self.render();
        self.restart_autoplay();
    }

    fn restart_autoplay(self: &Rc<Self>) {
        // Dropping the old interval clears it.
        self.autoplay.borrow_mut().take();
        let weak: Weak<Self> = Rc::downgrade(self);
        let interval = Interval::start(&self.window, self.interval_ms, move || {
            if let Some(featured) = weak.upgrade() {
                featured.state.borrow_mut().auto_advance();
                featured.render();
            }
        });
        *self.autoplay.borrow_mut() = interval.ok();
    }
}

fn init_featured(window: &Window, document: &Document, config: &WidgetConfig) -> Result<(), JsValue> {
    let Some(track) = document.get_element_by_id(selectors::FEATURED_TRACK) else {
        return Ok(());
    };
    let track = track.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    let cards: Vec<HtmlElement> = query_all_in(&track, selectors::FEATURED_CARD)
        .into_iter()
        .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
        .collect();
    if cards.is_empty() {
        return Ok(());
    }
    let button = |id: &str| {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    };

    let featured = Rc::new(Featured {
        window: window.clone(),
        document: document.clone(),
        state: RefCell::new(FeaturedCarousel::new(cards.len(), inner_width(window), config.clone())),
        track,
        cards,
        prev: button(selectors::FEATURED_PREV),
        next: button(selectors::FEATURED_NEXT),
        dots: document.get_element_by_id(selectors::FEATURED_DOTS),
        interval_ms: config.autoplay_interval_ms,
        autoplay: RefCell::new(None),
    });

    if let Some(prev) = &featured.prev {
        let weak = Rc::downgrade(&featured);
        listen(prev, "click", move |_| {
            if let Some(featured) = weak.upgrade() {
                let moved = featured.state.borrow_mut().prev();
                if moved {
                    featured.after_manual_move();
                }
            }
        })?;
    }
    if let Some(next) = &featured.next {
        let weak = Rc::downgrade(&featured);
        listen(next, "click", move |_| {
            if let Some(featured) = weak.upgrade() {
                let moved = featured.state.borrow_mut().next();
                if moved {
                    featured.after_manual_move();
                }
            }
        })?;
    }

    if let Some(dots) = &featured.dots {
        let weak = Rc::downgrade(&featured);
        listen(dots, "click", move |event| {
            let index = event_element(&event)
                .and_then(|el| el.closest(&format!("[{}]", ATTR_INDEX)).ok().flatten())
                .and_then(|dot| dot.get_attribute(ATTR_INDEX))
                .and_then(|index| index.parse::<usize>().ok());
            if let (Some(index), Some(featured)) = (index, weak.upgrade()) {
                featured.state.borrow_mut().go_to(index);
                featured.after_manual_move();
            }
        })?;
    }

    {
        let strong = Rc::clone(&featured);
        listen(window, "resize", move |_| {
            let width = inner_width(&strong.window);
            let dots_changed = strong.state.borrow_mut().resize(width);
            if dots_changed && strong.rebuild_dots().is_err() {
                return;
            }
            strong.render();
        })?;
    }

    featured.rebuild_dots()?;
    featured.render();
    featured.restart_autoplay();
    Ok(())
}

// Navigation dropdown

fn init_dropdowns(document: &Document) -> Result<(), JsValue> {
    for root in query_all(document, selectors::DROPDOWN) {
        let state = Rc::new(RefCell::new(Dropdown::new()));
        let apply = {
            let root = root.clone();
            move |open: bool| toggle_class(&root, OPEN_CLASS, open)
        };

        if let Ok(Some(toggle)) = root.query_selector(selectors::DROPDOWN_TOGGLE) {
            let state = Rc::clone(&state);
            let apply = apply.clone();
            listen(&toggle, "click", move |event| {
                event.prevent_default();
                event.stop_propagation();
                let open = state.borrow_mut().click(ClickTarget::Toggle);
                apply(open);
            })?;
        }

        for link in query_all_in(&root, selectors::DROPDOWN_LINKS) {
            let state = Rc::clone(&state);
            let apply = apply.clone();
            listen(&link, "click", move |_| {
                let open = state.borrow_mut().click(ClickTarget::ContainedLink);
                apply(open);
            })?;
        }

        let inside = root.clone();
        listen(document, "click", move |event| {
            let node = event_element(&event);
            let target = if inside.contains(node.as_deref()) {
                ClickTarget::Inside
            } else {
                ClickTarget::Outside
            };
            let open = state.borrow_mut().click(target);
            apply(open);
        })?;
    }
    Ok(())
}

// Category tabs

struct Tabs {
    window: Window,
    document: Document,
    config: WidgetConfig,
    state: RefCell<ProductTabs>,
    sections: Vec<Element>,
}

impl Tabs {
    fn apply(&self, update_url: bool, scroll: bool) {
        let state = self.state.borrow();
        for (i, section) in self.sections.iter().enumerate() {
            toggle_class(section, selectors::ACTIVE_CLASS, state.is_visible(i));
        }
        for button in query_all(&self.document, selectors::TAB_BUTTON) {
            let show_all = button.class_list().contains(selectors::SHOW_ALL_CLASS);
            let active = match state.selection() {
                TabSelection::ShowAll => show_all,
                TabSelection::Single(index) => {
                    !show_all
                        && button
                            .get_attribute("data-index")
                            .and_then(|i| i.parse::<usize>().ok())
                            == Some(index)
                }
            };
            toggle_class(&button, selectors::ACTIVE_CLASS, active);
        }

        if update_url {
            if let Ok(history) = self.window.history() {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&state.fragment()));
            }
        }
        if scroll {
            if let Ok(Some(strip)) = self.document.query_selector(selectors::TABS_CONTAINER) {
                let top = strip.get_bounding_client_rect().top();
                let offset = self.window.page_y_offset().unwrap_or(0.0);
                smooth_scroll_to(&self.window, scroll_target(top, offset, &self.config));
            }
        }
    }

    fn restore(&self) {
        let hash = self.window.location().hash().unwrap_or_default();
        let fragment = hash.trim_start_matches('#');
        let restored = self.state.borrow_mut().restore_from_fragment(fragment);
        if restored {
            self.apply(false, false);
        }
    }
}

fn init_tabs(window: &Window, document: &Document, config: &WidgetConfig) -> Result<(), JsValue> {
    let Ok(Some(categories)) = document.query_selector(selectors::CATEGORIES) else {
        return Ok(());
    };
    let sections = query_all_in(&categories, selectors::CATEGORY);
    let listed: Vec<CategorySection> = sections
        .iter()
        .map(|section| {
            let title = section
                .query_selector("h3")
                .ok()
                .flatten()
                .and_then(|h| h.text_content())
                .unwrap_or_default();
            CategorySection::new(section.id(), title.trim())
        })
        .collect();
    let Some(state) = ProductTabs::new(listed) else {
        return Ok(());
    };

    let strip = state.tab_strip();
    match document.query_selector(selectors::SECTION_SUBTITLE).ok().flatten() {
        Some(subtitle) => subtitle.insert_adjacent_html("afterend", &strip)?,
        None => categories.insert_adjacent_html("beforebegin", &strip)?,
    }

    let tabs = Rc::new(Tabs {
        window: window.clone(),
        document: document.clone(),
        config: config.clone(),
        state: RefCell::new(state),
        sections,
    });

    if let Ok(Some(container)) = document.query_selector(selectors::TABS_CONTAINER) {
        let tabs = Rc::clone(&tabs);
        listen(&container, "click", move |event| {
            let Some(button) = event_element(&event)
                .and_then(|el| el.closest(selectors::TAB_BUTTON).ok().flatten())
            else {
                return;
            };
            let changed = if button.class_list().contains(selectors::SHOW_ALL_CLASS) {
                tabs.state.borrow_mut().show_all();
                true
            } else {
                button
                    .get_attribute("data-index")
                    .and_then(|i| i.parse::<usize>().ok())
                    .map(|index| tabs.state.borrow_mut().switch_to(index))
                    .unwrap_or(false)
            };
            if changed {
                tabs.apply(true, true);
            }
        })?;
    }

    tabs.apply(false, false);
    tabs.restore();

    let on_hash = Rc::clone(&tabs);
    listen(window, "hashchange", move |_| on_hash.restore())?;
    Ok(())
}

// Scroll effects

fn init_scroll_effects(window: &Window, document: &Document, config: &WidgetConfig) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let button = match document.get_element_by_id(selectors::SCROLL_TOP_ID) {
        Some(existing) => existing,
        None => {
            let created = document.create_element("button")?;
            created.set_id(selectors::SCROLL_TOP_ID);
            created.set_text_content(Some("\u{2191}"));
            created.set_attribute("aria-label", "Scroll to top")?;
            body.append_child(&created)?;
            created
        }
    };
    {
        let win = window.clone();
        listen(&button, "click", move |_| smooth_scroll_to(&win, 0.0))?;
    }

    let header = document
        .query_selector(selectors::HEADER)
        .ok()
        .flatten()
        .and_then(|h| h.dyn_into::<HtmlElement>().ok());
    let button = button.dyn_into::<HtmlElement>().map_err(JsValue::from)?;

    let button_debounce = Rc::new(RefCell::new(Debouncer::new(config.scroll_button_debounce_ms)));
    let header_debounce = Rc::new(RefCell::new(Debouncer::new(config.header_debounce_ms)));
    let config = config.clone();
    let win = window.clone();

    listen(window, "scroll", move |_| {
        let ticket = button_debounce.borrow_mut().trigger();
        let debounce = Rc::clone(&button_debounce);
        let wait = debounce.borrow().wait_ms();
        let (w, b, c) = (win.clone(), button.clone(), config.clone());
        set_timeout(&win, wait, move || {
            if !debounce.borrow_mut().elapse(ticket) {
                return;
            }
            let effects = ScrollEffects::at(w.page_y_offset().unwrap_or(0.0), &c);
            let (opacity, visibility) = if effects.show_scroll_top {
                ("1", "visible")
            } else {
                ("0", "hidden")
            };
            let style = b.style();
            let _ = style.set_property("opacity", opacity);
            let _ = style.set_property("visibility", visibility);
        });

        let Some(header) = header.clone() else {
            return;
        };
        let ticket = header_debounce.borrow_mut().trigger();
        let debounce = Rc::clone(&header_debounce);
        let wait = debounce.borrow().wait_ms();
        let (w, c) = (win.clone(), config.clone());
        set_timeout(&win, wait, move || {
            if !debounce.borrow_mut().elapse(ticket) {
                return;
            }
            let effects = ScrollEffects::at(w.page_y_offset().unwrap_or(0.0), &c);
            let shadow = if effects.header_elevated {
                "0 2px 20px rgba(0, 0, 0, 0.1)"
            } else {
                "0 2px 10px rgba(0, 0, 0, 0.05)"
            };
            let _ = header.style().set_property("box-shadow", shadow);
        });
    })?;
    Ok(())
}

// In-page anchors

fn init_anchor_scrolling(window: &Window, document: &Document, config: &WidgetConfig) -> Result<(), JsValue> {
    for anchor in query_all(document, selectors::IN_PAGE_ANCHORS) {
        let win = window.clone();
        let doc = document.clone();
        let config = config.clone();
        let el = anchor.clone();
        listen(&anchor, "click", move |event| {
            let href = el.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            let Some(target) = doc.get_element_by_id(id) else {
                return;
            };
            let top = target.get_bounding_client_rect().top();
            let offset = win.page_y_offset().unwrap_or(0.0);
            smooth_scroll_to(&win, scroll_target(top, offset, &config));
        })?;
    }
    Ok(())
}

// Off-site links

fn init_external_links(window: &Window, document: &Document) -> Result<(), JsValue> {
    let page_host = window.location().hostname().unwrap_or_default();
    for link in query_all(document, selectors::EXTERNAL_LINKS) {
        let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>() else {
            continue;
        };
        if is_external(&anchor.href(), &anchor.hostname(), &page_host) {
            link.set_attribute("target", EXTERNAL_TARGET)?;
            link.set_attribute("rel", EXTERNAL_REL)?;
        }
    }
    Ok(())
}

// Required form fields

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn init_form_validation(window: &Window, document: &Document) -> Result<(), JsValue> {
    for form in query_all(document, selectors::FORM) {
        let win = window.clone();
        let root = form.clone();
        listen(&form, "submit", move |event| {
            let fields = query_all_in(&root, selectors::REQUIRED_FIELDS);
            let values: Vec<String> = fields.iter().map(field_value).collect();
            let check = RequiredCheck::of(values.iter().map(String::as_str));
            for (i, field) in fields.iter().enumerate() {
                if let Some(field) = field.dyn_ref::<HtmlElement>() {
                    let _ = field.style().set_property("border-color", check.border(i));
                }
            }
            if !check.is_valid() {
                event.prevent_default();
                let _ = win.alert_with_message(MSG_REQUIRED_FIELDS);
            }
        })?;
    }
    Ok(())
}
