//! Storefront configuration.

use serde::{Deserialize, Serialize};

/// Settings shared by the cart, renderer and checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Local storage key holding the serialized cart.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Phone number orders are sent to, digits only with country code.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Base URL of the messaging deep link.
    #[serde(default = "default_messaging_base_url")]
    pub messaging_base_url: String,

    /// Image used for line items without one.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Business name used in order messages.
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Link shown in the empty-cart panel.
    #[serde(default = "default_empty_cart_link")]
    pub empty_cart_link: String,

    /// Delay before offering to clear the cart after checkout.
    #[serde(default = "default_clear_prompt_delay_ms")]
    pub clear_prompt_delay_ms: u32,

    /// Featured carousel auto-advance interval.
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u32,
}

fn default_storage_key() -> String {
    "vardanCart".to_string()
}

fn default_whatsapp_number() -> String {
    "918077775729".to_string()
}

fn default_messaging_base_url() -> String {
    "https://wa.me".to_string()
}

fn default_placeholder_image() -> String {
    "images/placeholder.jpg".to_string()
}

fn default_company_name() -> String {
    "Vardan Naturals".to_string()
}

fn default_empty_cart_link() -> String {
    "index.html#products".to_string()
}

fn default_clear_prompt_delay_ms() -> u32 {
    1500
}

fn default_autoplay_interval_ms() -> u32 {
    5000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            whatsapp_number: default_whatsapp_number(),
            messaging_base_url: default_messaging_base_url(),
            placeholder_image: default_placeholder_image(),
            company_name: default_company_name(),
            empty_cart_link: default_empty_cart_link(),
            clear_prompt_delay_ms: default_clear_prompt_delay_ms(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
        }
    }
}
