//! Closed label sets used by listings and filters.
//!
//! Every enum here serializes to the exact label shown on the listing site
//! (`"1 RK/Studio"`, `"North-East"`, ...) and parses back from it
//! case-insensitively, so saved searches and API payloads stay readable.

use crate::error::ListingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ListingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ListingError::UnknownLabel {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

labeled_enum! {
    /// Which marketplace a listing belongs to. Every listings view is scoped to one.
    ListingType, "listing type" {
        Sale => "sale",
        Rent => "rent",
    }
}

impl ListingType {
    /// Ceiling of the list-price slider for this marketplace.
    pub fn max_price(self) -> u64 {
        match self {
            ListingType::Sale => 100_000_000,
            ListingType::Rent => 500_000,
        }
    }
}

labeled_enum! {
    PropertyType, "property type" {
        Apartment => "Apartment",
        Villa => "Villa",
        Studio => "1 RK/Studio",
        House => "House",
        ResidentialLand => "Residential Land",
        Penthouse => "Penthouse",
        Kothi => "Kothi",
        BuilderFloor => "Builder Floor",
        FarmHouse => "Farm House",
        Others => "Others",
    }
}

labeled_enum! {
    ConstructionStatus, "construction status" {
        NewLaunch => "New Launch",
        ReadyToMove => "Ready to Move",
        UnderConstruction => "Under Construction",
    }
}

labeled_enum! {
    FurnishedStatus, "furnished status" {
        Unfurnished => "Unfurnished",
        SemiFurnished => "Semi-Furnished",
        FullyFurnished => "Fully Furnished",
    }
}

labeled_enum! {
    ListedBy, "lister" {
        Agent => "Agent",
        Owner => "Owner",
        Builder => "Builder",
    }
}

labeled_enum! {
    /// Compass direction of the main entry (or exit) door.
    Facing, "facing" {
        East => "East",
        West => "West",
        North => "North",
        South => "South",
        NorthEast => "North-East",
        NorthWest => "North-West",
        SouthEast => "South-East",
        SouthWest => "South-West",
    }
}

labeled_enum! {
    ViewType, "view" {
        Road => "Road",
        Park => "Park",
        Corner => "Corner",
        City => "City",
    }
}

labeled_enum! {
    ParkingType, "parking type" {
        Open => "Open",
        Covered => "Covered",
    }
}

labeled_enum! {
    OwnershipType, "ownership type" {
        Freehold => "Freehold",
        Leasehold => "Leasehold",
        CoOperativeSociety => "Co-operative society",
        PowerOfAttorney => "Power of Attorney",
    }
}

labeled_enum! {
    BrokerageType, "brokerage type" {
        Fixed => "Fixed",
        PercentageOfPrice => "Percentage of Price",
        None => "None",
    }
}

labeled_enum! {
    /// Moderation state of a listing. Only approved listings are shown to buyers.
    PropertyStatus, "property status" {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
        Sold => "Sold",
        Draft => "Draft",
    }
}

labeled_enum! {
    /// Named floor ranges offered by the floor preference filter.
    FloorBand, "floor range" {
        GroundToFifth => "Ground - 5th Floor",
        FifthToTenth => "5th - 10th Floor",
        TenthToFifteenth => "10th - 15th Floor",
        FifteenthToTwentieth => "15th - 20th Floor",
        TwentiethToTwentyFifth => "20th - 25th Floor",
        AboveTwentyFifth => "Above 25th Floor",
    }
}

impl FloorBand {
    /// Whether `floor` falls inside this band. Bands are closed on the upper
    /// end and open on the lower end, except the ground band which starts at 0.
    pub fn contains(self, floor: i32) -> bool {
        match self {
            FloorBand::GroundToFifth => (0..=5).contains(&floor),
            FloorBand::FifthToTenth => floor > 5 && floor <= 10,
            FloorBand::TenthToFifteenth => floor > 10 && floor <= 15,
            FloorBand::FifteenthToTwentieth => floor > 15 && floor <= 20,
            FloorBand::TwentiethToTwentyFifth => floor > 20 && floor <= 25,
            FloorBand::AboveTwentyFifth => floor > 25,
        }
    }
}

labeled_enum! {
    /// Building height classes by total floor count. `All` is a UI sentinel
    /// that disables the filter when selected.
    BuildingHeight, "building height" {
        All => "All",
        HighRise => "High Rise",
        MidRise => "Mid Rise",
        LowRise => "Low Rise",
    }
}

impl BuildingHeight {
    pub fn contains(self, total_floors: i32) -> bool {
        match self {
            BuildingHeight::All => true,
            BuildingHeight::LowRise => total_floors <= 4,
            BuildingHeight::MidRise => total_floors > 4 && total_floors <= 12,
            BuildingHeight::HighRise => total_floors > 12,
        }
    }
}
