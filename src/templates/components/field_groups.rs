// Which normalized fields the results table shows, and under which heading.

use crate::domain::conversion::format_usd;
use crate::domain::PropertyDetails;

pub const NOT_AVAILABLE: &str = "N/A";

pub struct Field {
    pub label: &'static str,
    pub render: fn(&PropertyDetails) -> String,
}

pub struct FieldGroup {
    pub title: &'static str,
    pub fields: &'static [Field],
}

pub const FIELD_GROUPS: &[FieldGroup] = &[
    FieldGroup {
        title: "Basic Information",
        fields: &[
            Field {
                label: "Property Type",
                render: |d| text_or_na(d.property_type.as_deref()),
            },
            Field {
                label: "Year Built",
                render: |d| int_or_na(d.year_built),
            },
            Field {
                label: "Square Footage",
                render: |d| int_or_na(d.square_footage),
            },
            Field {
                label: "Lot Size (acres)",
                render: |d| float_or_na(d.lot_size_acres),
            },
        ],
    },
    FieldGroup {
        title: "Rooms",
        fields: &[
            Field {
                label: "Bedrooms",
                render: |d| int_or_na(d.bedrooms),
            },
            Field {
                label: "Bathrooms",
                render: |d| float_or_na(d.bathrooms),
            },
            Field {
                label: "Total Rooms",
                render: |d| int_or_na(d.room_count),
            },
        ],
    },
    FieldGroup {
        title: "Additional Information",
        fields: &[
            Field {
                label: "Septic System",
                render: |d| text_or_na(d.septic_system.as_deref()),
            },
            Field {
                label: "Sale Price",
                render: |d| match d.sale_price {
                    Some(price) if price != 0 => format_usd(price),
                    _ => NOT_AVAILABLE.to_string(),
                },
            },
        ],
    },
];

// Zero, empty and missing all read as "N/A".

fn text_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn int_or_na(value: Option<i64>) -> String {
    match value {
        Some(v) if v != 0 => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn float_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
