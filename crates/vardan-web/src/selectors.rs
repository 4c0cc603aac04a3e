//! Element ids and selectors the storefront markup provides.

/// Cart rows container, under either id used by the site's pages.
pub const CART_CONTAINERS: &[&str] = &["#cartItemsContainer", "#cartItems"];
/// Subtotal text elements.
pub const SUBTOTAL_TARGETS: &[&str] = &["#subtotal", "#cartSubtotal", "#subtotalAmount"];
/// Total text elements.
pub const TOTAL_TARGETS: &[&str] = &["#totalAmount", "#cartTotal", "#cartTotalAmount"];
/// Cart badges.
pub const CART_COUNT: &str = "#navCartCount, .cart-count, #cartCount";
pub const CHECKOUT_BUTTON: &str = "#checkoutBtn";
pub const CLEAR_CART_BUTTON: &str = "#clearCartBtn";
/// Single-product order buttons.
pub const QUICK_ORDER: &str = "[data-quick-order]";
/// Elements that may still carry inline handlers.
pub const INLINE_HANDLERS: &str = "[onclick]";
pub const NOTIFICATION_CLASS: &str = "cart-notification";

pub const IMAGE_CAROUSEL: &str = ".image-carousel";
pub const CAROUSEL_SLIDE: &str = ".carousel-slide";
pub const CAROUSEL_TRACK: &str = ".carousel-images";
pub const CAROUSEL_INDICATOR: &str = ".carousel-indicator";

pub const FEATURED_TRACK: &str = "featuredCarouselTrack";
pub const FEATURED_PREV: &str = "featuredPrevBtn";
pub const FEATURED_NEXT: &str = "featuredNextBtn";
pub const FEATURED_DOTS: &str = "featuredCarouselDots";
pub const FEATURED_CARD: &str = ".featured-product-card";
pub const FEATURED_DOT_CLASS: &str = "featured-dot";

pub const DROPDOWN: &str = ".dropdown";
pub const DROPDOWN_TOGGLE: &str = ".dropdown-toggle";
pub const DROPDOWN_LINKS: &str = ".dropdown-content a";

pub const CATEGORIES: &str = ".categories";
pub const CATEGORY: &str = ".category";
pub const SECTION_SUBTITLE: &str = ".section-subtitle";
pub const TABS_CONTAINER: &str = ".product-tabs-container";
pub const TAB_BUTTON: &str = ".tab-btn";
pub const SHOW_ALL_CLASS: &str = "show-all-btn";

pub const HEADER: &str = "header";
pub const SCROLL_TOP_ID: &str = "scrollToTop";
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const EXTERNAL_LINKS: &str = "a[href^=\"http\"]";

pub const FORM: &str = "form";
pub const REQUIRED_FIELDS: &str = "input[required], textarea[required]";

pub const ACTIVE_CLASS: &str = "active";
