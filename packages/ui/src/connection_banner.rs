//! Result banner for the manual connection test.

use dioxus::prelude::*;

use api::ConnectionTestResult;

/// Green-or-red summary of the last connection test.
///
/// Failures additionally dump the raw error detail the server sent back,
/// pretty-printed, so a broken database setup can be diagnosed straight
/// from the page.
#[component]
pub fn ConnectionBanner(result: ConnectionTestResult) -> Element {
    let (modifier, heading) = if result.success {
        ("banner--success", "Connection Successful")
    } else {
        ("banner--failure", "Connection Failed")
    };

    rsx! {
        div {
            class: "banner {modifier}",
            h3 { class: "banner__heading", "{heading}" }
            p { "{result.message}" }
            if !result.success {
                if let Some(error) = result.error.as_ref() {
                    pre { class: "banner__detail", "{format_error_detail(error)}" }
                }
            }
        }
    }
}

fn format_error_detail(error: &serde_json::Value) -> String {
    serde_json::to_string_pretty(error).unwrap_or_else(|_| error.to_string())
}
