//! Indeterminate loading spinner.

use dioxus::prelude::*;

/// A spinning ring. `large` is for whole-page loading states; the default
/// size fits inside a button.
#[component]
pub fn Spinner(#[props(default)] large: bool) -> Element {
    let class = if large { "spinner spinner--large" } else { "spinner" };

    rsx! {
        span { class: "{class}", aria_label: "Loading" }
    }
}
