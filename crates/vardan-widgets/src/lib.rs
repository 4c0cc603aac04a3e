//! Page widgets for the Vardan storefront.
//!
//! Each widget is a plain state machine; the browser layer feeds it events
//! (clicks, resizes, timer ticks, scroll offsets) and applies the resulting
//! state to the DOM.
//!
//! - [`Carousel`] / [`CarouselRegistry`]: wrapping image carousels
//! - [`FeaturedCarousel`]: responsive featured products carousel with autoplay
//! - [`Dropdown`]: navigation dropdown
//! - [`ProductTabs`]: category tabs synced with the URL fragment
//! - [`Debouncer`], [`ScrollEffects`]: scroll handling helpers
//! - [`RequiredCheck`], [`is_external`]: form and link hygiene

mod carousel;
mod config;
mod debounce;
mod dropdown;
mod featured;
mod forms;
mod links;
mod scroll;
mod tabs;

pub use carousel::{Carousel, CarouselRegistry};
pub use config::WidgetConfig;
pub use debounce::Debouncer;
pub use dropdown::{ClickTarget, Dropdown, OPEN_CLASS};
pub use featured::FeaturedCarousel;
pub use forms::{RequiredCheck, INVALID_BORDER, MSG_REQUIRED_FIELDS, VALID_BORDER};
pub use links::{is_external, EXTERNAL_REL, EXTERNAL_TARGET};
pub use scroll::{anchor_target, scroll_target, ScrollEffects};
pub use tabs::{CategorySection, ProductTabs, TabSelection, SHOW_ALL_FRAGMENT};
