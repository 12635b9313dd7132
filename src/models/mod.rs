mod catalog;
mod enums;

use serde::{Deserialize, Serialize};

pub use catalog::{ADDITIONAL_ROOM_OPTIONS, AMENITY_OPTIONS, DOCUMENT_OPTIONS};
pub use enums::{
    BrokerageType, BuildingHeight, ConstructionStatus, Facing, FloorBand, FurnishedStatus,
    ListedBy, ListingType, OwnershipType, ParkingType, PropertyStatus, PropertyType, ViewType,
};

/// Core property data model
///
/// Field names follow the listing API's camelCase JSON. Optional details are
/// `None` when the poster left them blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub location: String,
    pub city: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    #[serde(default)]
    pub images: Vec<String>,

    // Rooms
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balconies: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_rooms: Option<Vec<String>>,

    // Areas (sq.ft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carpet_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_up_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_built_up_area: Option<f64>,

    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,

    // Features
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_status: Option<ConstructionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnished_status: Option<FurnishedStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_by: Option<ListedBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_type: Option<OwnershipType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<Facing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_facing: Option<Facing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rera_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_spaces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,

    // Price details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_negotiable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_inclusive_price: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_excluded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_sqft: Option<f64>,

    // Brokerage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokerage_type: Option<BrokerageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokerage_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokerage_negotiable: Option<bool>,

    // Media
    #[serde(default, rename = "hasShowcase", skip_serializing_if = "Option::is_none")]
    pub has_showcase: Option<bool>,
    #[serde(default, rename = "has3DVideo", skip_serializing_if = "Option::is_none")]
    pub has_3d_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_type: Option<ParkingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<Vec<ViewType>>,

    // Legal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,

    // Moderation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leads: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

impl Property {
    /// Create a listing with the required fields set and every optional detail blank.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        listing_type: ListingType,
        property_type: PropertyType,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            location: String::new(),
            city: String::new(),
            property_type,
            listing_type,
            images: Vec::new(),
            bedrooms: 0,
            bathrooms: 0,
            balconies: None,
            additional_rooms: None,
            area: None,
            carpet_area: None,
            built_up_area: None,
            super_built_up_area: None,
            amenities: Vec::new(),
            owner_contact: None,
            is_featured: None,
            date_posted: None,
            construction_status: None,
            furnished_status: None,
            listed_by: None,
            ownership_type: None,
            facing: None,
            exit_facing: None,
            floor: None,
            total_floors: None,
            rera_approved: None,
            parking_spaces: None,
            year_built: None,
            price_negotiable: None,
            all_inclusive_price: None,
            tax_excluded: None,
            price_per_sqft: None,
            brokerage_type: None,
            brokerage_amount: None,
            brokerage_negotiable: None,
            has_showcase: None,
            has_3d_video: None,
            parking_type: None,
            views: None,
            documents: None,
            is_verified: None,
            status: None,
            page_views: None,
            leads: None,
            owner_id: None,
        }
    }

    /// Whether buyers may see this listing. Records that predate moderation
    /// carry no status and count as approved.
    pub fn is_published(&self) -> bool {
        matches!(self.status, None | Some(PropertyStatus::Approved))
    }
}
