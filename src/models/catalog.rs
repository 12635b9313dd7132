//! Free-text option lists offered by the listing filters. Listings may carry
//! values outside these lists; they only seed the selectable controls.

pub const AMENITY_OPTIONS: &[&str] = &[
    "Club House",
    "Swimming Pool",
    "Kids Play Area",
    "Lift",
    "Parking",
    "Power Backup",
    "Gym",
    "Vaastu Compliant",
    "Security Personnel",
    "Gas Pipeline",
];

pub const ADDITIONAL_ROOM_OPTIONS: &[&str] =
    &["Pooja Room", "Study Room", "Servant Room", "Store Room"];

pub const DOCUMENT_OPTIONS: &[&str] = &[
    "Sale Deed / Ownership Title",
    "Society/Authority Transfer Letter",
    "Occupancy Certificate (OC)",
    "Completion Certificate (CC)",
    "Encumbrance Certificate (EC)",
    "Property Tax Receipts",
    "NOC from Society/Builder",
    "RERA Registration",
    "Allotment Letter",
    "Possession Letter",
];
