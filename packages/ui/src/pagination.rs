//! Numbered page switcher under the table.

use dioxus::prelude::*;

/// Previous/next controls around one button per page.
///
/// Renders nothing at all when everything fits on a single page.
#[component]
pub fn Pagination(page: usize, total_pages: usize, on_change: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "pagination__control",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "‹"
            }
            for number in 1..=total_pages {
                button {
                    key: "{number}",
                    class: if number == page {
                        "pagination__page pagination__page--active"
                    } else {
                        "pagination__page"
                    },
                    onclick: move |_| on_change.call(number),
                    "{number}"
                }
            }
            button {
                class: "pagination__control",
                disabled: page >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "›"
            }
        }
    }
}
