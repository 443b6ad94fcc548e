use maud::{html, Markup};

pub fn cache_badge(is_cached: bool) -> Markup {
    let (label, colors) = if is_cached {
        ("Cached", "bg-blue-100 text-blue-800")
    } else {
        ("Live", "bg-gray-100 text-gray-800")
    };

    html! {
        span class=(format!("ml-2 px-2 py-1 text-xs font-medium rounded-full {colors}")) { (label) }
    }
}
