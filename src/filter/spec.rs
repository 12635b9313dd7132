//! Filter settings: one value holding every listing filter control.
//!
//! Each field is either inactive (empty list, `false`, empty text) or active.
//! Field names serialize to the keys of the saved-search blob, so a blob
//! written by the listing site loads here unchanged and vice versa.

use crate::models::{
    BuildingHeight, ConstructionStatus, Facing, FloorBand, FurnishedStatus, ListedBy, ListingType,
    OwnershipType, ParkingType, PropertyType, ViewType,
};
use serde::{Deserialize, Serialize};

/// Upper end of the default monthly payment range (10 lakh per month).
pub const DEFAULT_MONTHLY_MAX: f64 = 1_000_000.0;

/// How the price range is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    /// Compare the listed price against `price_range`.
    #[default]
    List,
    /// Compare the estimated loan instalment against `monthly_range`.
    Monthly,
}

/// "House tour" media toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseTour {
    pub showcase: bool,
    pub video3d: bool,
}

/// Year-built bounds as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearRange {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub listing_type: ListingType,
    pub search_term: String,

    /// `[min, max]` list price as typed; blank or non-numeric means unbounded.
    pub price_range: (String, String),
    pub price_filter_mode: PriceMode,
    /// Inclusive monthly instalment bounds, used in [`PriceMode::Monthly`].
    #[serde(with = "monthly_bounds")]
    pub monthly_range: (f64, f64),

    #[serde(rename = "selectedPropertyTypes")]
    pub property_types: Vec<PropertyType>,
    #[serde(rename = "selectedConstructionStatus")]
    pub construction_status: Vec<ConstructionStatus>,
    #[serde(rename = "selectedListedBy")]
    pub listed_by: Vec<ListedBy>,
    #[serde(rename = "selectedFurnished")]
    pub furnished: Vec<FurnishedStatus>,
    #[serde(rename = "selectedOwnership")]
    pub ownership: Vec<OwnershipType>,
    #[serde(rename = "selectedAmenities")]
    pub amenities: Vec<String>,
    #[serde(rename = "selectedEntryFacing")]
    pub entry_facing: Vec<Facing>,
    #[serde(rename = "selectedExitFacing")]
    pub exit_facing: Vec<Facing>,
    pub rera_only: bool,

    #[serde(rename = "selectedFloorRanges")]
    pub floor_ranges: Vec<FloorBand>,
    #[serde(rename = "selectedBuildingHeights")]
    pub building_heights: Vec<BuildingHeight>,

    pub house_tour: HouseTour,
    /// Minimum parking spaces; 0 means any.
    pub min_parking: u32,

    pub min_carpet_area: String,
    pub min_built_up_area: String,
    pub min_super_area: String,
    pub year_built_range: YearRange,

    #[serde(rename = "selectedParkingTypes")]
    pub parking_types: Vec<ParkingType>,
    #[serde(rename = "selectedViews")]
    pub views: Vec<ViewType>,

    /// Bedroom counts; 5 stands for "4 or more".
    #[serde(rename = "selectedBedrooms")]
    pub bedrooms: Vec<u32>,
    /// Bathroom counts; 4 stands for "4 or more".
    #[serde(rename = "selectedBathrooms")]
    pub bathrooms: Vec<u32>,
    /// Balcony counts; 4 stands for "3 or more".
    #[serde(rename = "selectedBalconies")]
    pub balconies: Vec<u32>,
    #[serde(rename = "selectedAdditionalRooms")]
    pub additional_rooms: Vec<String>,

    #[serde(rename = "showAllInclusiveOnly")]
    pub all_inclusive_only: bool,
    #[serde(rename = "showNegotiableOnly")]
    pub negotiable_only: bool,
    #[serde(rename = "showTaxExcludedOnly")]
    pub tax_excluded_only: bool,

    #[serde(rename = "selectedDocuments")]
    pub documents: Vec<String>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::for_listing(ListingType::Sale)
    }
}

/// Price per sq.ft preview for the two ends of the price range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricePerArea {
    pub area: u64,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl FilterSpec {
    /// A spec with every filter inactive, scoped to `listing_type`.
    pub fn for_listing(listing_type: ListingType) -> Self {
        Self {
            listing_type,
            search_term: String::new(),
            price_range: (String::new(), String::new()),
            price_filter_mode: PriceMode::List,
            monthly_range: (0.0, DEFAULT_MONTHLY_MAX),
            property_types: Vec::new(),
            construction_status: Vec::new(),
            listed_by: Vec::new(),
            furnished: Vec::new(),
            ownership: Vec::new(),
            amenities: Vec::new(),
            entry_facing: Vec::new(),
            exit_facing: Vec::new(),
            rera_only: false,
            floor_ranges: Vec::new(),
            building_heights: Vec::new(),
            house_tour: HouseTour::default(),
            min_parking: 0,
            min_carpet_area: String::new(),
            min_built_up_area: String::new(),
            min_super_area: String::new(),
            year_built_range: YearRange::default(),
            parking_types: Vec::new(),
            views: Vec::new(),
            bedrooms: Vec::new(),
            bathrooms: Vec::new(),
            balconies: Vec::new(),
            additional_rooms: Vec::new(),
            all_inclusive_only: false,
            negotiable_only: false,
            tax_excluded_only: false,
            documents: Vec::new(),
        }
    }

    /// Clear every filter, keeping the listing type.
    pub fn reset(&mut self) {
        *self = Self::for_listing(self.listing_type);
    }

    /// The price mode actually applied. Rentals always compare list prices.
    pub fn effective_price_mode(&self) -> PriceMode {
        match self.listing_type {
            ListingType::Sale => self.price_filter_mode,
            ListingType::Rent => PriceMode::List,
        }
    }

    /// The area used for the price-per-area preview: the first non-zero of the
    /// super built-up, built-up and carpet minimums the user entered.
    pub fn active_area(&self) -> u64 {
        [
            &self.min_super_area,
            &self.min_built_up_area,
            &self.min_carpet_area,
        ]
        .into_iter()
        .filter_map(|text| parse_leading_int(text))
        .find(|area| *area > 0)
        .map_or(0, |area| area as u64)
    }

    /// Price per sq.ft for each entered price bound, or `None` for a bound
    /// that is blank or when no area minimum was entered.
    pub fn price_per_area(&self) -> PricePerArea {
        let area = self.active_area();
        let per_area = |bound: &str| {
            if area == 0 {
                return None;
            }
            parse_leading_int(bound).map(|price| (price as f64 / area as f64).round() as i64)
        };
        PricePerArea {
            area,
            min: per_area(&self.price_range.0),
            max: per_area(&self.price_range.1),
        }
    }
}

/// Read an integer the way a lenient number box does: optional sign, then
/// leading digits, ignoring anything after them. Returns `None` when there are
/// no digits at all, which callers treat as "no bound". Digit runs too long for
/// an `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    // A non-empty run of ASCII digits only fails to parse on overflow.
    let magnitude: i64 = digits.parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Saved form of the monthly range.
///
/// JSON has no infinity, so a bound that is not finite is written as its text
/// form (`"inf"`) and parsed back. A `null` or blank bound reads as open: 0 for
/// the minimum, unbounded for the maximum.
mod monthly_bounds {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Bound {
        Number(f64),
        Text(String),
    }

    fn write(value: f64) -> Bound {
        if value.is_finite() {
            Bound::Number(value)
        } else {
            Bound::Text(value.to_string())
        }
    }

    fn read(bound: Option<Bound>, open: f64) -> Result<f64, String> {
        match bound {
            None => Ok(open),
            Some(Bound::Number(value)) => Ok(value),
            Some(Bound::Text(text)) if text.trim().is_empty() => Ok(open),
            Some(Bound::Text(text)) => text
                .trim()
                .parse()
                .map_err(|_| format!("invalid monthly bound {text:?}")),
        }
    }

    pub fn serialize<S: Serializer>(range: &(f64, f64), serializer: S) -> Result<S::Ok, S::Error> {
        (write(range.0), write(range.1)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<(f64, f64), D::Error> {
        let (min, max) = <(Option<Bound>, Option<Bound>)>::deserialize(deserializer)?;
        Ok((
            read(min, 0.0).map_err(D::Error::custom)?,
            read(max, f64::INFINITY).map_err(D::Error::custom)?,
        ))
    }
}
