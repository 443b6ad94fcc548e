use crate::domain::{PropertyDetails, ProviderFailure, ProviderResult};
use crate::templates::components::{cache_badge, info_notice, FIELD_GROUPS};
use maud::{html, Markup};

pub const NO_DATA_MESSAGE: &str = "No property data available for this address.";

/// One card per provider: details grouped by category, or the provider's error.
pub fn results_table(results: &[ProviderResult], address: &str) -> Markup {
    if results.is_empty() {
        return info_notice(NO_DATA_MESSAGE);
    }

    html! {
        div class="bg-white rounded-lg shadow-md overflow-hidden w-full" {
            div class="px-4 py-5 sm:px-6 bg-gray-50 border-b border-gray-200" {
                h3 class="text-lg font-medium leading-6 text-gray-900" {
                    "Property Details for " (address)
                }
                p class="mt-1 max-w-2xl text-sm text-gray-500" { "Data from multiple providers" }
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-6 p-6" {
                @for result in results {
                    @match result {
                        ProviderResult::Failed(failure) => { (failure_card(failure)) }
                        ProviderResult::Details(details) => { (details_card(details)) }
                    }
                }
            }
        }
    }
}

fn failure_card(failure: &ProviderFailure) -> Markup {
    html! {
        div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded" {
            p class="font-medium" { "Error from " (failure.provider) }
            p { (failure.error) }
        }
    }
}

fn details_card(details: &PropertyDetails) -> Markup {
    html! {
        div class="border rounded-lg overflow-hidden" {
            div class="px-4 py-3 bg-gray-50 border-b flex justify-between items-center" {
                h4 class="font-medium text-gray-900" { (details.provider) }
                (cache_badge(details.cached))
            }

            div class="divide-y" {
                @for group in FIELD_GROUPS {
                    div class="px-4 py-3" {
                        h5 class="text-sm font-medium text-black mb-2" { (group.title) }
                        dl class="grid grid-cols-1 md:grid-cols-2 gap-x-6 gap-y-4" {
                            @for field in group.fields {
                                div class="flex flex-col" {
                                    dt class="text-sm font-medium text-gray-500 mb-1" { (field.label) }
                                    dd class="text-sm text-gray-900" { ((field.render)(details)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
