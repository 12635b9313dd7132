//! Listing rows as the listings server returns them.
//!
//! `/api/properties` sends raw `properties` table rows: snake_case columns,
//! DECIMAL columns that may arrive as strings, TINYINT flags as `0`/`1`, and
//! JSON columns that may arrive still encoded. [`PropertyRow`] accepts all of
//! that and converts into the camelCase [`Property`] used everywhere else.

use crate::models::{
    BrokerageType, ConstructionStatus, Facing, FurnishedStatus, ListedBy, ListingType,
    OwnershipType, ParkingType, Property, PropertyStatus, PropertyType, ViewType,
};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyRow {
    #[serde(deserialize_with = "id_text")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "number")]
    pub price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    #[serde(default, deserialize_with = "opt_list")]
    pub images: Option<Vec<String>>,

    #[serde(default, deserialize_with = "opt_count")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "opt_count")]
    pub bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "opt_count")]
    pub balconies: Option<u32>,
    #[serde(default, deserialize_with = "opt_list")]
    pub additional_rooms: Option<Vec<String>>,

    #[serde(default, deserialize_with = "opt_number")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "opt_number")]
    pub carpet_area: Option<f64>,
    #[serde(default, deserialize_with = "opt_number")]
    pub built_up_area: Option<f64>,
    #[serde(default, deserialize_with = "opt_number")]
    pub super_built_up_area: Option<f64>,

    #[serde(default, deserialize_with = "opt_list")]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub owner_contact: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "opt_flag")]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub status: Option<PropertyStatus>,
    #[serde(default, deserialize_with = "opt_id_text")]
    pub owner_id: Option<String>,

    #[serde(default)]
    pub furnished_status: Option<FurnishedStatus>,
    #[serde(default)]
    pub construction_status: Option<ConstructionStatus>,
    #[serde(default)]
    pub listed_by: Option<ListedBy>,
    #[serde(default)]
    pub ownership_type: Option<OwnershipType>,
    #[serde(default)]
    pub facing_entry: Option<Facing>,
    #[serde(default)]
    pub facing_exit: Option<Facing>,
    #[serde(default)]
    pub parking_type: Option<ParkingType>,
    #[serde(default, deserialize_with = "opt_int")]
    pub floor_no: Option<i32>,
    #[serde(default, deserialize_with = "opt_int")]
    pub total_floors: Option<i32>,
    #[serde(default, deserialize_with = "opt_count")]
    pub parking_spaces: Option<u32>,
    #[serde(default, deserialize_with = "opt_int")]
    pub year_built: Option<i32>,
    #[serde(default, deserialize_with = "opt_list")]
    pub views: Option<Vec<ViewType>>,
    #[serde(default, deserialize_with = "opt_list")]
    pub available_documents: Option<Vec<String>>,

    #[serde(default, deserialize_with = "opt_flag")]
    pub rera_approved: Option<bool>,
    #[serde(default, deserialize_with = "opt_flag")]
    pub is_all_inclusive_price: Option<bool>,
    #[serde(default, deserialize_with = "opt_flag")]
    pub price_negotiable: Option<bool>,
    #[serde(default, deserialize_with = "opt_flag")]
    pub is_tax_excluded: Option<bool>,
    #[serde(default, deserialize_with = "opt_number")]
    pub price_per_sqft: Option<f64>,

    #[serde(default)]
    pub brokerage_type: Option<BrokerageType>,
    #[serde(default, deserialize_with = "opt_number")]
    pub brokerage_amount: Option<f64>,

    #[serde(default, deserialize_with = "opt_flag")]
    pub is_virtual_showcase: Option<bool>,
    #[serde(default, deserialize_with = "opt_flag")]
    pub is_3d_video: Option<bool>,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        let mut property = Property::new(
            row.id,
            row.title,
            row.listing_type,
            row.property_type,
            row.price,
        );
        property.description = row.description.unwrap_or_default();
        property.location = row.location.unwrap_or_default();
        property.city = row.city.unwrap_or_default();
        property.images = row.images.unwrap_or_default();

        property.bedrooms = row.bedrooms.unwrap_or(0);
        property.bathrooms = row.bathrooms.unwrap_or(0);
        property.balconies = row.balconies;
        property.additional_rooms = Some(row.additional_rooms.unwrap_or_default());

        property.area = row.area;
        property.carpet_area = row.carpet_area;
        property.built_up_area = row.built_up_area;
        property.super_built_up_area = row.super_built_up_area;

        property.amenities = row.amenities.unwrap_or_default();
        property.owner_contact = row.owner_contact;
        property.date_posted = row.created_at;
        property.is_featured = row.is_featured;
        property.status = row.status;
        property.owner_id = row.owner_id;

        property.furnished_status = row.furnished_status;
        property.construction_status = row.construction_status;
        property.listed_by = row.listed_by;
        property.ownership_type = row.ownership_type;
        property.facing = row.facing_entry;
        property.exit_facing = row.facing_exit;
        property.parking_type = row.parking_type;
        property.floor = row.floor_no;
        property.total_floors = row.total_floors;
        property.parking_spaces = row.parking_spaces;
        property.year_built = row.year_built;
        property.views = Some(row.views.unwrap_or_default());
        property.documents = Some(row.available_documents.unwrap_or_default());

        property.rera_approved = row.rera_approved;
        property.all_inclusive_price = row.is_all_inclusive_price;
        property.price_negotiable = row.price_negotiable;
        property.tax_excluded = row.is_tax_excluded;
        property.price_per_sqft = row.price_per_sqft;
        property.brokerage_type = row.brokerage_type;
        property.brokerage_amount = row.brokerage_amount;

        property.has_showcase = row.is_virtual_showcase;
        property.has_3d_video = row.is_3d_video;
        property
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Id {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Value(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum List<T> {
    Items(Vec<T>),
    Encoded(String),
}

fn id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    opt_id_text(deserializer)?.ok_or_else(|| D::Error::custom("missing id"))
}

fn opt_id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Number(n) => n.to_string(),
        Id::Text(text) => text,
    }))
}

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    opt_number(deserializer)?.ok_or_else(|| D::Error::custom("missing number"))
}

fn opt_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<Number>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Number::Value(value)) => Ok(Some(value)),
        Some(Number::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Number::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number {text:?}"))),
    }
}

fn opt_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(opt_number(deserializer)?.map(|n| n.max(0.0) as u32))
}

fn opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(opt_number(deserializer)?.map(|n| n as i32))
}

fn opt_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Int(value)) => Ok(Some(value != 0)),
        Some(Flag::Text(text)) => match text.trim() {
            "" => Ok(None),
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid flag {other:?}"))),
        },
    }
}

fn opt_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<List<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(List::Items(items)) => Ok(Some(items)),
        Some(List::Encoded(text)) if text.trim().is_empty() => Ok(None),
        Some(List::Encoded(text)) => serde_json::from_str(&text).map(Some).map_err(D::Error::custom),
    }
}
