// Upstream payload schemas. Every field is optional and read leniently, so
// one odd value never costs a provider its whole record.

use crate::providers::lenient;
use serde::Deserialize;
use std::collections::BTreeMap;

// Provider 1 (camelCase)
//  data
//   ├── id, formattedAddress, addressLine1/2, city, state, zipCode, county
//   ├── latitude, longitude
//   ├── propertyType, bedrooms, bathrooms, squareFootage, lotSizeSqFt, yearBuilt
//   ├── assessorID, legalDescription, subdivision, zoning
//   ├── lastSaleDate, lastSalePrice
//   ├── hoa { fee }
//   ├── features { ..., roomCount, septicSystem }
//   ├── taxAssessments { "<year>": { year, value, land, improvements } }
//   ├── propertyTaxes  { "<year>": { year, total } }
//   └── history        { "<date>": { event, date, price } }
//  cached

#[derive(Debug, Deserialize)]
pub struct Provider1Response {
    pub data: Option<Provider1Data>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub cached: Option<bool>,
}

/// The fields `normalize` maps; everything else lands in `record`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider1Data {
    #[serde(default, deserialize_with = "lenient::string")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub bedrooms: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub bathrooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub square_footage: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub lot_size_sq_ft: Option<f64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub year_built: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub last_sale_price: Option<i64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub features: Option<Features>,
    #[allow(dead_code)]
    #[serde(flatten)]
    pub record: Provider1Record,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default, deserialize_with = "lenient::int")]
    pub room_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub septic_system: Option<bool>,
    #[allow(dead_code)]
    #[serde(flatten)]
    pub other: FeatureDetails,
}

// Unmapped below: parsed for completeness, never read by `normalize`.

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider1Record {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub formatted_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_line1: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address_line2: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub county: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub longitude: Option<f64>,
    #[serde(default, rename = "assessorID", deserialize_with = "lenient::string")]
    pub assessor_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub legal_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub subdivision: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub zoning: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_sale_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub hoa: Option<Hoa>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub tax_assessments: BTreeMap<String, TaxAssessment>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub property_taxes: BTreeMap<String, PropertyTax>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub history: BTreeMap<String, HistoryEvent>,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
pub struct Hoa {
    #[serde(default, deserialize_with = "lenient::float")]
    pub fee: Option<f64>,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDetails {
    #[serde(default, deserialize_with = "lenient::string")]
    pub architecture_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub cooling: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cooling_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub exterior_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub fireplace: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub fireplace_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub floor_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub foundation_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub garage: Option<bool>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub garage_spaces: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub garage_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub heating: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub heating_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub pool: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pool_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub roof_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub unit_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub view_type: Option<String>,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
pub struct TaxAssessment {
    #[serde(default, deserialize_with = "lenient::int")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub land: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub improvements: Option<f64>,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
pub struct PropertyTax {
    #[serde(default, deserialize_with = "lenient::int")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub total: Option<f64>,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
pub struct HistoryEvent {
    #[serde(default, deserialize_with = "lenient::string")]
    pub event: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub price: Option<f64>,
}

// Provider 2 is flat and PascalCase.

#[derive(Debug, Deserialize)]
pub struct Provider2Response {
    pub data: Option<Provider2Data>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub cached: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Provider2Data {
    #[serde(default, deserialize_with = "lenient::string")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub bedrooms: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub bathrooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub square_footage: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub lot_size_acres: Option<f64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub year_constructed: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub room_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub septic_system: Option<bool>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub sale_price: Option<i64>,
    #[allow(dead_code)]
    #[serde(flatten)]
    pub record: Provider2Record,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Provider2Record {
    #[serde(default, rename = "ID", deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub normalized_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address1: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address2: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub architectural_style: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub homeowner_association_fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_sale_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub last_sale_price: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub unit_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub garage_spaces: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub garage_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cooling: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub heating: Option<String>,
}
