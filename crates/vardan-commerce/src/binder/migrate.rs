//! One-time migration of inline `addToCart(...)` handlers to data attributes.
//!
//! Directives that do not match the expected call shape are left untouched.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use vardan_observability::StructuredLogger;

use crate::binder::{AttributeTarget, ATTR_IMAGE, ATTR_NAME, ATTR_ONCLICK, ATTR_PRICE, ATTR_VARIANT};
use crate::cart::escape_html;

/// Arguments of an inline `addToCart(name, price[, variant[, image]])` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineDirective {
    pub name: String,
    pub price_text: String,
    pub variant: String,
    pub image: String,
}

/// Outcome of rewriting a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupMigration {
    /// Rewritten document.
    pub html: String,
    /// Handlers converted to data attributes.
    pub migrated: usize,
    /// `addToCart` handlers that could not be parsed.
    pub skipped: usize,
}

fn directive_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        // Each argument is single- or double-quoted with matching quotes.
        let arg = r#"(?:'([^']*)'|"([^"]*)")"#;
        let pattern = format!(
            r"addToCart\s*\(\s*{arg}\s*,\s*{arg}\s*(?:,\s*{arg}\s*(?:,\s*{arg}\s*)?)?\)"
        );
        Regex::new(&pattern).ok()
    })
    .as_ref()
}

fn onclick_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\s+onclick\s*=\s*(?:"([^"]*)"|'([^']*)')"#).ok())
        .as_ref()
}

fn arg(caps: &Captures<'_>, position: usize) -> String {
    let single = 2 * position + 1;
    caps.get(single)
        .or_else(|| caps.get(single + 1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Parse the first `addToCart(...)` call in a handler string.
pub fn parse_inline_directive(handler: &str) -> Option<InlineDirective> {
    let caps = directive_regex()?.captures(handler)?;
    Some(InlineDirective {
        name: arg(&caps, 0),
        price_text: arg(&caps, 1),
        variant: arg(&caps, 2),
        image: arg(&caps, 3),
    })
}

impl InlineDirective {
    /// `(attribute, value)` pairs to set; empty optional values are omitted.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        let mut attrs = vec![(ATTR_NAME, self.name.as_str())];
        for (attr, value) in [
            (ATTR_PRICE, &self.price_text),
            (ATTR_VARIANT, &self.variant),
            (ATTR_IMAGE, &self.image),
        ] {
            if !value.is_empty() {
                attrs.push((attr, value.as_str()));
            }
        }
        attrs
    }
}

/// Migrate one element. Returns whether it was rewritten.
pub fn migrate_element(target: &mut impl AttributeTarget) -> bool {
    let Some(handler) = target.get_attribute(ATTR_ONCLICK) else {
        return false;
    };
    let Some(directive) = parse_inline_directive(&handler) else {
        if handler.contains("addToCart") {
            StructuredLogger::new("binder")
                .debug_builder("Inline add-to-cart handler left as is")
                .field("onclick", handler)
                .emit();
        }
        return false;
    };

    for (attr, value) in directive.attributes() {
        target.set_attribute(attr, value);
    }
    target.remove_attribute(ATTR_ONCLICK);
    true
}

/// Rewrite every parseable inline handler in an HTML document.
pub fn migrate_markup(html: &str) -> MarkupMigration {
    let Some(onclick) = onclick_regex() else {
        return MarkupMigration {
            html: html.to_string(),
            migrated: 0,
            skipped: 0,
        };
    };

    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    let mut migrated = 0;
    let mut skipped = 0;

    for caps in onclick.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        let raw = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        let handler = decode_entities(raw);

        let Some(directive) = parse_inline_directive(&handler) else {
            if handler.contains("addToCart") {
                skipped += 1;
            }
            continue;
        };

        out.push_str(&html[last..whole.start()]);
        for (attr, value) in directive.attributes() {
            out.push(' ');
            out.push_str(attr);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        last = whole.end();
        migrated += 1;
    }
    out.push_str(&html[last..]);

    MarkupMigration {
        html: out,
        migrated,
        skipped,
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
