use maud::{html, Markup};

/// Inline red alert used when the lookup itself failed.
pub fn error_notice(title: &str, message: &str) -> Markup {
    html! {
        div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded" role="alert" {
            p class="font-medium" { (title) }
            p { (message) }
        }
    }
}

pub fn info_notice(message: &str) -> Markup {
    html! {
        div class="bg-gray-50 border border-gray-200 text-gray-700 px-4 py-3 rounded" {
            p { (message) }
        }
    }
}

/// Spinner shown by htmx while `/search` is in flight.
pub fn loading_indicator(id: &str) -> Markup {
    html! {
        div id=(id) class="htmx-indicator justify-center items-center py-6" {
            div class="h-8 w-8 rounded-full border-4 border-blue-200 border-t-blue-500 animate-spin" {}
            span class="ml-3 text-gray-600" { "Loading..." }
        }
    }
}
