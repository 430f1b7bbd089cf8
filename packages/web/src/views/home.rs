use dioxus::prelude::*;

use api::{ClientError, ConnectionTestResult, Item};
use ui::{
    page_count, page_slice, sort_items, ConnectionBanner, ItemsTable, Pagination, SortField,
    SortState, Spinner,
};

/// The items page: a sortable, paginated table over everything the server
/// returns, plus manual refresh and connection-test actions.
#[component]
pub fn Home() -> Element {
    let mut items = use_signal(Vec::<Item>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sort = use_signal(SortState::default);
    let mut page = use_signal(|| 1usize);

    // Connection test state
    let mut testing_connection = use_signal(|| false);
    let mut connection_result = use_signal(|| Option::<ConnectionTestResult>::None);

    // Load items on mount; Refresh Data restarts this resource. A failed
    // fetch leaves the previous rows in place behind the error banner.
    let mut items_loader = use_resource(move || async move {
        loading.set(true);
        error.set(None);
        match api::fetch_items().await {
            Ok(rows) => items.set(rows),
            Err(err) => error.set(Some(fetch_error_message(&err))),
        }
        loading.set(false);
    });

    let handle_sort = move |field: SortField| {
        sort.set(sort().toggle(field));
    };

    let handle_page_change = move |number: usize| {
        page.set(number);
    };

    let handle_test_connection = move |_| {
        spawn(async move {
            testing_connection.set(true);
            connection_result.set(None);

            let result = match api::test_connection().await {
                Ok(result) => result,
                Err(err) => ConnectionTestResult::failure(
                    err.to_string(),
                    serde_json::json!(format!("{err:?}")),
                ),
            };

            connection_result.set(Some(result));
            testing_connection.set(false);
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "page page--loading",
                Spinner { large: true }
            }
        };
    }

    let mut sorted_items = items();
    sort_items(&mut sorted_items, sort());
    let total_pages = page_count(sorted_items.len());
    let visible_items = page_slice(&sorted_items, page()).to_vec();

    rsx! {
        div {
            class: "page",
            header {
                class: "page__header",
                h1 { "Items List" }
                div {
                    class: "page__actions",
                    button {
                        class: "button button--primary",
                        disabled: testing_connection(),
                        onclick: handle_test_connection,
                        if testing_connection() {
                            Spinner {}
                        }
                        "Test Connection"
                    }
                    button {
                        class: "button button--secondary",
                        onclick: move |_| items_loader.restart(),
                        "Refresh Data"
                    }
                }
            }

            if let Some(result) = connection_result() {
                ConnectionBanner { result }
            }

            if let Some(message) = error() {
                div {
                    class: "banner banner--failure",
                    h3 { class: "banner__heading", "Error" }
                    p { "{message}" }
                }
            }

            div {
                class: "page__card",
                ItemsTable {
                    items: visible_items,
                    sort: sort(),
                    on_sort: handle_sort,
                }
                Pagination {
                    page: page(),
                    total_pages,
                    on_change: handle_page_change,
                }
            }
        }
    }
}

/// The message shown in the error banner. A non-OK status reads the same as
/// a failed request body would; transport errors keep their own message.
fn fetch_error_message(error: &ClientError) -> String {
    match error {
        ClientError::Status(_) => "Failed to fetch items".to_string(),
        other => other.to_string(),
    }
}
