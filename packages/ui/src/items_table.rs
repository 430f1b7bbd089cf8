//! The sortable three-column items table.

use dioxus::prelude::*;

use api::Item;

use crate::sort::{SortField, SortState};

/// Renders one page of items with clickable column headers.
///
/// The component is stateless: the caller passes the rows already sorted
/// and sliced to the current page, and hears about header clicks through
/// `on_sort`.
#[component]
pub fn ItemsTable(items: Vec<Item>, sort: SortState, on_sort: EventHandler<SortField>) -> Element {
    let columns = [
        (SortField::Id, "ID"),
        (SortField::Name, "Name"),
        (SortField::Description, "Description"),
    ];

    rsx! {
        table {
            class: "items-table",
            thead {
                tr {
                    for (field, label) in columns {
                        th {
                            key: "{label}",
                            class: "items-table__header",
                            onclick: move |_| on_sort.call(field),
                            "{label}{sort.indicator(field)}"
                        }
                    }
                }
            }
            tbody {
                if items.is_empty() {
                    tr {
                        td {
                            class: "items-table__empty",
                            colspan: "3",
                            "No items found"
                        }
                    }
                } else {
                    for item in &items {
                        tr {
                            key: "{item.id}",
                            td { "{item.id}" }
                            td { "{item.name}" }
                            td { "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
