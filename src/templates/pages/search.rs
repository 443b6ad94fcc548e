// templates/pages/search.rs

use crate::domain::ProviderResult;
use crate::templates::components::{error_notice, loading_indicator, results_table};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const ADDRESS_PLACEHOLDER: &str = "Enter full address, including street, city, state, and zip";

/// What a search produced, ready to render.
pub enum SearchOutcome<'a> {
    Results(&'a [ProviderResult]),
    Failed(&'a str),
    Invalid(&'a str),
}

pub fn search_page(address: &str, outcome: Option<SearchOutcome<'_>>) -> Markup {
    desktop_layout(
        "Property Detail Search",
        html! {
            main class="flex flex-col items-center min-h-screen p-4" {
                h1 class="text-4xl font-bold text-center text-gray-800 mt-8 mb-6 sm:text-3xl" {
                    "Property Detail Search"
                }

                div class="w-full max-w-3xl px-4" {
                    form
                        action="/search"
                        method="get"
                        hx-get="/search"
                        hx-target="#results"
                        hx-swap="innerHTML"
                        hx-indicator="#loading"
                        hx-disabled-elt="input, button"
                        hx-push-url="true"
                        class="flex flex-col sm:flex-row items-center space-y-4 sm:space-y-0 sm:space-x-4 mb-4"
                    {
                        label class="sr-only" for="address" { "Property address" }
                        input
                            type="text"
                            id="address"
                            name="address"
                            value=(address)
                            placeholder=(ADDRESS_PLACEHOLDER)
                            class="p-3 border border-gray-300 rounded-md w-full";
                        button
                            type="submit"
                            class="bg-blue-500 text-white px-6 py-3 rounded-md hover:bg-blue-600 cursor-pointer w-full sm:w-auto whitespace-nowrap"
                        { "Search" }
                    }
                }

                (loading_indicator("loading"))

                div id="results" class="w-full max-w-6xl" {
                    @if let Some(outcome) = outcome {
                        (search_results(address, outcome))
                    }
                }
            }
        },
    )
}

/// The `#results` fragment. Returned alone for htmx requests.
pub fn search_results(address: &str, outcome: SearchOutcome<'_>) -> Markup {
    match outcome {
        SearchOutcome::Results(results) => results_table(results, address),
        SearchOutcome::Failed(message) => error_notice("Error fetching property details", message),
        SearchOutcome::Invalid(message) => error_notice("Please check the address", message),
    }
}
