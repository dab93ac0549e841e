//! Presentational glyphs. No state, no props.

use yew::prelude::*;

fn glyph(name: &'static str, symbol: &'static str) -> Html {
    html! {
        <span class={classes!("icon", name)} aria-hidden="true">{symbol}</span>
    }
}

#[function_component(BookIcon)]
pub fn book_icon() -> Html {
    glyph("icon-book", "📚")
}

#[function_component(ClockIcon)]
pub fn clock_icon() -> Html {
    glyph("icon-clock", "⏱")
}

#[function_component(AlertIcon)]
pub fn alert_icon() -> Html {
    glyph("icon-alert", "⚠")
}

#[function_component(CheckIcon)]
pub fn check_icon() -> Html {
    glyph("icon-check", "✔")
}

/// Stand-in for a missing course thumbnail
#[function_component(ThumbnailFallbackIcon)]
pub fn thumbnail_fallback_icon() -> Html {
    glyph("icon-thumbnail-fallback", "🎓")
}
