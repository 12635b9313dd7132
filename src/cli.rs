use clap::{Args, Parser, Subcommand};
use housing_filter::filter::{FilterSpec, PriceMode};
use housing_filter::models::{
    BuildingHeight, ConstructionStatus, Facing, FloorBand, FurnishedStatus, ListedBy,
    OwnershipType, ParkingType, PropertyType, ViewType,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "housing-filter", version, about = "Search property listings with saved filters")]
pub struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter listings and print the matches
    Search(SearchArgs),
    /// Show the saved search
    Saved,
    /// List the values accepted by each filter
    Options,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search rentals instead of listings for sale
    #[arg(long)]
    pub rent: bool,

    /// Start from the saved search
    #[arg(long)]
    pub load: bool,

    /// Save the resulting filters
    #[arg(long)]
    pub save: bool,

    /// Read listings from a JSON file instead of the API
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,

    /// Substring of location, city or title
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,
    #[arg(long)]
    pub max_price: Option<String>,

    /// Minimum monthly instalment (switches to monthly payment mode)
    #[arg(long, value_parser = parse_monthly_bound)]
    pub min_monthly: Option<f64>,
    /// Maximum monthly instalment, or "inf" for no cap (switches to monthly payment mode)
    #[arg(long, value_parser = parse_monthly_bound)]
    pub max_monthly: Option<f64>,

    #[arg(long = "type", value_delimiter = ',')]
    pub property_types: Vec<PropertyType>,

    /// Bedroom counts; 5 means 4 or more
    #[arg(long, value_delimiter = ',')]
    pub bedrooms: Vec<u32>,
    /// Bathroom counts; 4 means 4 or more
    #[arg(long, value_delimiter = ',')]
    pub bathrooms: Vec<u32>,
    /// Balcony counts; 4 means 3 or more
    #[arg(long, value_delimiter = ',')]
    pub balconies: Vec<u32>,
    #[arg(long = "room", value_delimiter = ',')]
    pub additional_rooms: Vec<String>,

    #[arg(long = "status", value_delimiter = ',')]
    pub construction_status: Vec<ConstructionStatus>,
    #[arg(long, value_delimiter = ',')]
    pub listed_by: Vec<ListedBy>,
    #[arg(long, value_delimiter = ',')]
    pub furnished: Vec<FurnishedStatus>,
    #[arg(long, value_delimiter = ',')]
    pub ownership: Vec<OwnershipType>,

    #[arg(long = "amenity", value_delimiter = ',')]
    pub amenities: Vec<String>,

    #[arg(long = "floor", value_delimiter = ',')]
    pub floor_ranges: Vec<FloorBand>,
    #[arg(long = "height", value_delimiter = ',')]
    pub building_heights: Vec<BuildingHeight>,

    #[arg(long, value_delimiter = ',')]
    pub facing: Vec<Facing>,
    #[arg(long, value_delimiter = ',')]
    pub exit_facing: Vec<Facing>,

    #[arg(long)]
    pub min_parking: Option<u32>,
    #[arg(long = "parking-type", value_delimiter = ',')]
    pub parking_types: Vec<ParkingType>,

    #[arg(long)]
    pub min_carpet: Option<String>,
    #[arg(long)]
    pub min_built_up: Option<String>,
    #[arg(long)]
    pub min_super: Option<String>,

    #[arg(long)]
    pub year_min: Option<String>,
    #[arg(long)]
    pub year_max: Option<String>,

    #[arg(long = "view", value_delimiter = ',')]
    pub views: Vec<ViewType>,
    #[arg(long = "document", value_delimiter = ',')]
    pub documents: Vec<String>,

    /// Only RERA approved listings (--no-rera clears a loaded setting)
    #[arg(long, overrides_with = "no_rera")]
    pub rera: bool,
    #[arg(long, overrides_with = "rera")]
    pub no_rera: bool,
    #[arg(long, overrides_with = "no_all_inclusive")]
    pub all_inclusive: bool,
    #[arg(long, overrides_with = "all_inclusive")]
    pub no_all_inclusive: bool,
    #[arg(long, overrides_with = "no_negotiable")]
    pub negotiable: bool,
    #[arg(long, overrides_with = "negotiable")]
    pub no_negotiable: bool,
    #[arg(long, overrides_with = "no_tax_excluded")]
    pub tax_excluded: bool,
    #[arg(long, overrides_with = "tax_excluded")]
    pub no_tax_excluded: bool,
    #[arg(long, overrides_with = "no_showcase")]
    pub showcase: bool,
    #[arg(long, overrides_with = "showcase")]
    pub no_showcase: bool,
    #[arg(long, overrides_with = "no_video3d")]
    pub video3d: bool,
    #[arg(long, overrides_with = "video3d")]
    pub no_video3d: bool,
}

/// Monthly bounds must be numbers; `inf` is accepted as "no cap".
fn parse_monthly_bound(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {text}"))?;
    if value.is_nan() || value < 0.0 {
        return Err(format!("monthly bound must be zero or more, got {text}"));
    }
    Ok(value)
}

/// `--flag` turns a toggle on, `--no-flag` turns it off, neither keeps it.
fn toggle(target: &mut bool, on: bool, off: bool) {
    if on {
        *target = true;
    } else if off {
        *target = false;
    }
}

fn replace_if_given<T: Clone>(target: &mut Vec<T>, given: &[T]) {
    if !given.is_empty() {
        *target = given.to_vec();
    }
}

impl SearchArgs {
    /// Overlay the flags that were given onto `spec`; anything not given keeps
    /// its current (possibly loaded) value.
    pub fn apply_to(&self, spec: &mut FilterSpec) {
        if let Some(term) = &self.search {
            spec.search_term = term.clone();
        }
        if let Some(min) = &self.min_price {
            spec.price_range.0 = min.clone();
        }
        if let Some(max) = &self.max_price {
            spec.price_range.1 = max.clone();
        }
        if self.min_monthly.is_some() || self.max_monthly.is_some() {
            spec.price_filter_mode = PriceMode::Monthly;
            if let Some(min) = self.min_monthly {
                spec.monthly_range.0 = min;
            }
            if let Some(max) = self.max_monthly {
                spec.monthly_range.1 = max;
            }
        }

        replace_if_given(&mut spec.property_types, &self.property_types);
        replace_if_given(&mut spec.bedrooms, &self.bedrooms);
        replace_if_given(&mut spec.bathrooms, &self.bathrooms);
        replace_if_given(&mut spec.balconies, &self.balconies);
        replace_if_given(&mut spec.additional_rooms, &self.additional_rooms);
        replace_if_given(&mut spec.construction_status, &self.construction_status);
        replace_if_given(&mut spec.listed_by, &self.listed_by);
        replace_if_given(&mut spec.furnished, &self.furnished);
        replace_if_given(&mut spec.ownership, &self.ownership);
        replace_if_given(&mut spec.amenities, &self.amenities);
        replace_if_given(&mut spec.floor_ranges, &self.floor_ranges);
        replace_if_given(&mut spec.building_heights, &self.building_heights);
        replace_if_given(&mut spec.entry_facing, &self.facing);
        replace_if_given(&mut spec.exit_facing, &self.exit_facing);
        replace_if_given(&mut spec.parking_types, &self.parking_types);
        replace_if_given(&mut spec.views, &self.views);
        replace_if_given(&mut spec.documents, &self.documents);

        if let Some(min) = self.min_parking {
            spec.min_parking = min;
        }
        if let Some(area) = &self.min_carpet {
            spec.min_carpet_area = area.clone();
        }
        if let Some(area) = &self.min_built_up {
            spec.min_built_up_area = area.clone();
        }
        if let Some(area) = &self.min_super {
            spec.min_super_area = area.clone();
        }
        if let Some(year) = &self.year_min {
            spec.year_built_range.min = year.clone();
        }
        if let Some(year) = &self.year_max {
            spec.year_built_range.max = year.clone();
        }

        toggle(&mut spec.rera_only, self.rera, self.no_rera);
        toggle(&mut spec.all_inclusive_only, self.all_inclusive, self.no_all_inclusive);
        toggle(&mut spec.negotiable_only, self.negotiable, self.no_negotiable);
        toggle(&mut spec.tax_excluded_only, self.tax_excluded, self.no_tax_excluded);
        toggle(&mut spec.house_tour.showcase, self.showcase, self.no_showcase);
        toggle(&mut spec.house_tour.video3d, self.video3d, self.no_video3d);
    }
}
