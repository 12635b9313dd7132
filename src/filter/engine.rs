//! Listing filter evaluation.
//!
//! A listing is kept when it passes every predicate in [`PREDICATES`]. The
//! checks run in order and stop at the first failure; each one passes when its
//! part of the [`FilterSpec`] is inactive. Output keeps the input order.

use super::combinators::{all_of, any_of, intersects, BALCONY_BAND, BATHROOM_BAND, BEDROOM_BAND};
use super::pricing::monthly_payment;
use super::spec::{parse_leading_int, FilterSpec, PriceMode};
use crate::models::{BuildingHeight, Property};
use tracing::debug;

const YEAR_FLOOR: i64 = 0;
const YEAR_CEILING: i64 = 9999;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PriceWindow {
    List { min: f64, max: f64 },
    Monthly { min: f64, max: f64 },
}

/// A [`FilterSpec`] with its free-text inputs parsed once, ready to test many
/// listings.
#[derive(Debug, Clone)]
pub struct Criteria<'a> {
    spec: &'a FilterSpec,
    search: Option<String>,
    price: PriceWindow,
    amenities: Vec<String>,
    min_carpet: Option<f64>,
    min_built_up: Option<f64>,
    min_super: Option<f64>,
    years: Option<(i64, i64)>,
    heights_active: bool,
}

type Predicate = fn(&Property, &Criteria<'_>) -> bool;

/// Predicates in evaluation order, named for diagnostics.
pub const PREDICATES: &[(&str, Predicate)] = &[
    ("listing type", listing_type),
    ("search", search),
    ("price", price),
    ("price details", price_details),
    ("property type", property_type),
    ("rooms", rooms),
    ("additional rooms", additional_rooms),
    ("construction status", construction_status),
    ("listed by", listed_by),
    ("furnishing", furnishing),
    ("ownership", ownership),
    ("rera", rera),
    ("amenities", amenities),
    ("floor", floor),
    ("building height", building_height),
    ("facing", facing),
    ("house tour", house_tour),
    ("parking spaces", parking_spaces),
    ("area", area),
    ("year built", year_built),
    ("parking type", parking_type),
    ("views", views),
    ("documents", documents),
];

impl<'a> Criteria<'a> {
    pub fn new(spec: &'a FilterSpec) -> Self {
        let search = (!spec.search_term.is_empty()).then(|| spec.search_term.to_lowercase());

        let price = match spec.effective_price_mode() {
            PriceMode::Monthly => PriceWindow::Monthly {
                min: spec.monthly_range.0,
                max: spec.monthly_range.1,
            },
            PriceMode::List => PriceWindow::List {
                min: parse_leading_int(&spec.price_range.0).map_or(0.0, |v| v as f64),
                max: parse_leading_int(&spec.price_range.1).map_or(f64::INFINITY, |v| v as f64),
            },
        };

        let min_year = parse_leading_int(&spec.year_built_range.min);
        let max_year = parse_leading_int(&spec.year_built_range.max);
        let years = (min_year.is_some() || max_year.is_some()).then(|| {
            (
                min_year.unwrap_or(YEAR_FLOOR),
                max_year.unwrap_or(YEAR_CEILING),
            )
        });

        Self {
            spec,
            search,
            price,
            amenities: spec.amenities.iter().map(|a| a.to_lowercase()).collect(),
            min_carpet: parse_area(&spec.min_carpet_area),
            min_built_up: parse_area(&spec.min_built_up_area),
            min_super: parse_area(&spec.min_super_area),
            years,
            heights_active: !spec.building_heights.is_empty()
                && !spec.building_heights.contains(&BuildingHeight::All),
        }
    }

    pub fn matches(&self, property: &Property) -> bool {
        PREDICATES.iter().all(|(_, check)| check(property, self))
    }

    /// Name of the first predicate that rejects `property`, if any.
    pub fn rejected_by(&self, property: &Property) -> Option<&'static str> {
        PREDICATES
            .iter()
            .find(|(_, check)| !check(property, self))
            .map(|(name, _)| *name)
    }
}

fn parse_area(text: &str) -> Option<f64> {
    parse_leading_int(text).map(|v| v as f64)
}

/// Filter `properties` by `spec`, keeping input order.
pub fn apply(properties: &[Property], spec: &FilterSpec) -> Vec<Property> {
    apply_refs(properties, spec).into_iter().cloned().collect()
}

/// Like [`apply`], borrowing the surviving listings instead of cloning them.
pub fn apply_refs<'p>(properties: &'p [Property], spec: &FilterSpec) -> Vec<&'p Property> {
    let criteria = Criteria::new(spec);
    let kept: Vec<&Property> = properties.iter().filter(|p| criteria.matches(p)).collect();
    debug!(kept = kept.len(), total = properties.len(), "applied listing filters");
    kept
}

/// Whether a single listing passes `spec`.
pub fn matches(property: &Property, spec: &FilterSpec) -> bool {
    Criteria::new(spec).matches(property)
}

fn listing_type(p: &Property, c: &Criteria<'_>) -> bool {
    p.listing_type == c.spec.listing_type
}

fn search(p: &Property, c: &Criteria<'_>) -> bool {
    let Some(term) = &c.search else {
        return true;
    };
    [&p.location, &p.city, &p.title]
        .iter()
        .any(|field| field.to_lowercase().contains(term.as_str()))
}

fn price(p: &Property, c: &Criteria<'_>) -> bool {
    match c.price {
        PriceWindow::Monthly { min, max } => {
            let emi = monthly_payment(p.price);
            emi >= min && emi <= max
        }
        PriceWindow::List { min, max } => p.price >= min && p.price <= max,
    }
}

fn price_details(p: &Property, c: &Criteria<'_>) -> bool {
    flag_ok(c.spec.all_inclusive_only, p.all_inclusive_price)
        && flag_ok(c.spec.negotiable_only, p.price_negotiable)
        && flag_ok(c.spec.tax_excluded_only, p.tax_excluded)
}

/// A required flag passes only when the listing sets it; a missing flag is false.
fn flag_ok(required: bool, value: Option<bool>) -> bool {
    !required || value.unwrap_or(false)
}

fn property_type(p: &Property, c: &Criteria<'_>) -> bool {
    any_of(&c.spec.property_types, Some(&p.property_type))
}

fn rooms(p: &Property, c: &Criteria<'_>) -> bool {
    BEDROOM_BAND.matches(&c.spec.bedrooms, p.bedrooms)
        && BATHROOM_BAND.matches(&c.spec.bathrooms, p.bathrooms)
        && BALCONY_BAND.matches(&c.spec.balconies, p.balconies.unwrap_or(0))
}

fn additional_rooms(p: &Property, c: &Criteria<'_>) -> bool {
    all_of(&c.spec.additional_rooms, p.additional_rooms.as_deref())
}

fn construction_status(p: &Property, c: &Criteria<'_>) -> bool {
    any_of(&c.spec.construction_status, p.construction_status.as_ref())
}

fn listed_by(p: &Property, c: &Criteria<'_>) -> bool {
    any_of(&c.spec.listed_by, p.listed_by.as_ref())
}

fn furnishing(p: &Property, c: &Criteria<'_>) -> bool {
    any_of(&c.spec.furnished, p.furnished_status.as_ref())
}

fn ownership(p: &Property, c: &Criteria<'_>) -> bool {
    any_of(&c.spec.ownership, p.ownership_type.as_ref())
}

fn rera(p: &Property, c: &Criteria<'_>) -> bool {
    flag_ok(c.spec.rera_only, p.rera_approved)
}

/// Every selected amenity must appear, case-insensitively, inside at least
/// one of the listing's amenity strings.
fn amenities(p: &Property, c: &Criteria<'_>) -> bool {
    if c.amenities.is_empty() {
        return true;
    }
    let offered: Vec<String> = p.amenities.iter().map(|a| a.to_lowercase()).collect();
    c.amenities
        .iter()
        .all(|wanted| offered.iter().any(|have| have.contains(wanted.as_str())))
}

// Only evaluated for listings that state their floor.
fn floor(p: &Property, c: &Criteria<'_>) -> bool {
    match p.floor {
        Some(floor) if !c.spec.floor_ranges.is_empty() => {
            c.spec.floor_ranges.iter().any(|band| band.contains(floor))
        }
        _ => true,
    }
}

fn building_height(p: &Property, c: &Criteria<'_>) -> bool {
    match p.total_floors {
        Some(total) if c.heights_active => c
            .spec
            .building_heights
            .iter()
            .any(|height| height.contains(total)),
        _ => true,
    }
}

// Entry and exit directions are only checked when the listing states them.
fn facing(p: &Property, c: &Criteria<'_>) -> bool {
    let entry_ok = p
        .facing
        .map_or(true, |dir| any_of(&c.spec.entry_facing, Some(&dir)));
    let exit_ok = p
        .exit_facing
        .map_or(true, |dir| any_of(&c.spec.exit_facing, Some(&dir)));
    entry_ok && exit_ok
}

fn house_tour(p: &Property, c: &Criteria<'_>) -> bool {
    flag_ok(c.spec.house_tour.showcase, p.has_showcase)
        && flag_ok(c.spec.house_tour.video3d, p.has_3d_video)
}

fn parking_spaces(p: &Property, c: &Criteria<'_>) -> bool {
    let wanted = c.spec.min_parking;
    wanted == 0 || p.parking_spaces.unwrap_or(0) >= wanted
}

/// Each area minimum is independent; all active ones must hold at once.
fn area(p: &Property, c: &Criteria<'_>) -> bool {
    meets_minimum(c.min_carpet, p.carpet_area)
        && meets_minimum(c.min_built_up, p.built_up_area)
        && meets_minimum(c.min_super, p.super_built_up_area)
}

fn meets_minimum(minimum: Option<f64>, value: Option<f64>) -> bool {
    match minimum {
        None => true,
        Some(min) => value.is_some_and(|v| v >= min),
    }
}

fn year_built(p: &Property, c: &Criteria<'_>) -> bool {
    match c.years {
        None => true,
        Some((min, max)) => p
            .year_built
            .is_some_and(|year| (min..=max).contains(&i64::from(year))),
    }
}

fn parking_type(p: &Property, c: &Criteria<'_>) -> bool {
    any_of(&c.spec.parking_types, p.parking_type.as_ref())
}

fn views(p: &Property, c: &Criteria<'_>) -> bool {
    intersects(&c.spec.views, p.views.as_deref())
}

fn documents(p: &Property, c: &Criteria<'_>) -> bool {
    all_of(&c.spec.documents, p.documents.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::spec::{HouseTour, YearRange};
    use crate::models::{
        BuildingHeight, ConstructionStatus, Facing, FloorBand, FurnishedStatus, ListedBy,
        ListingType, OwnershipType, ParkingType, PropertyType, ViewType,
    };

    fn sale(id: &str, price: f64) -> Property {
        let mut p = Property::new(
            id,
            format!("Listing {id}"),
            ListingType::Sale,
            PropertyType::Apartment,
            price,
        );
        p.location = "Baner".into();
        p.city = "Pune".into();
        p.bedrooms = 2;
        p.bathrooms = 2;
        p
    }

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    fn catalogue() -> Vec<Property> {
        let mut a = sale("a", 4_500_000.0);
        a.amenities = vec!["24x7 Power Backup".into(), "Gym".into()];
        a.carpet_area = Some(900.0);
        a.floor = Some(3);
        a.total_floors = Some(10);
        a.year_built = Some(2015);
        a.rera_approved = Some(true);

        let mut b = sale("b", 12_000_000.0);
        b.bedrooms = 7;
        b.bathrooms = 5;
        b.balconies = Some(3);
        b.property_type = PropertyType::Villa;
        b.city = "Mumbai".into();
        b.location = "Juhu".into();
        b.super_built_up_area = Some(3000.0);
        b.views = Some(vec![ViewType::Park]);

        let mut c = Property::new(
            "c",
            "Studio near IT park",
            ListingType::Rent,
            PropertyType::Studio,
            18_000.0,
        );
        c.city = "Pune".into();
        c.location = "Hinjewadi".into();
        c.bedrooms = 1;
        c.bathrooms = 1;

        let mut d = sale("d", 7_500_000.0);
        d.bedrooms = 3;
        d.additional_rooms = Some(vec!["Pooja Room".into(), "Study Room".into()]);
        d.documents = Some(vec!["RERA Registration".into(), "Possession Letter".into()]);
        d.construction_status = Some(ConstructionStatus::ReadyToMove);
        d.parking_spaces = Some(2);
        d.parking_type = Some(ParkingType::Covered);
        d.floor = Some(18);
        d.facing = Some(Facing::East);

        vec![a, b, c, d]
    }

    /// Specs touching every predicate family, used by the property checks.
    fn spec_variants() -> Vec<FilterSpec> {
        let base = FilterSpec::default();
        vec![
            base.clone(),
            FilterSpec { search_term: "pune".into(), ..base.clone() },
            FilterSpec { price_range: ("5000000".into(), String::new()), ..base.clone() },
            FilterSpec { price_filter_mode: PriceMode::Monthly, monthly_range: (0.0, 60_000.0), ..base.clone() },
            FilterSpec { bedrooms: vec![5], ..base.clone() },
            FilterSpec { amenities: vec!["power backup".into()], ..base.clone() },
            FilterSpec { floor_ranges: vec![FloorBand::GroundToFifth], ..base.clone() },
            FilterSpec { min_carpet_area: "500".into(), ..base.clone() },
            FilterSpec { documents: vec!["RERA Registration".into()], ..base.clone() },
            FilterSpec { views: vec![ViewType::Park, ViewType::City], ..base.clone() },
            FilterSpec { year_built_range: YearRange { min: "2010".into(), max: String::new() }, ..base },
        ]
    }

    #[test]
    fn default_spec_keeps_every_listing_of_the_type() {
        let all = catalogue();
        let kept = apply(&all, &FilterSpec::default());
        assert_eq!(ids(&kept), vec!["a", "b", "d"]);

        let rentals = apply(&all, &FilterSpec::for_listing(ListingType::Rent));
        assert_eq!(ids(&rentals), vec!["c"]);
    }

    #[test]
    fn apply_is_idempotent() {
        let all = catalogue();
        for spec in spec_variants() {
            let once = apply(&all, &spec);
            let twice = apply(&once, &spec);
            assert_eq!(once, twice, "spec {spec:?}");
        }
    }

    #[test]
    fn apply_preserves_input_order() {
        let mut all = catalogue();
        all.reverse();
        let kept = apply(&all, &FilterSpec::default());
        assert_eq!(ids(&kept), vec!["d", "b", "a"]);
    }

    #[test]
    fn apply_is_deterministic() {
        let all = catalogue();
        for spec in spec_variants() {
            assert_eq!(apply(&all, &spec), apply(&all, &spec));
        }
    }

    /// Each step activates one more filter (or adds an item to an all-of list).
    const NARROWINGS: &[(&str, fn(&mut FilterSpec))] = &[
        ("rera", |s| s.rera_only = true),
        ("all inclusive", |s| s.all_inclusive_only = true),
        ("negotiable", |s| s.negotiable_only = true),
        ("tax excluded", |s| s.tax_excluded_only = true),
        ("property type", |s| s.property_types = vec![PropertyType::Apartment]),
        ("bathrooms", |s| s.bathrooms = vec![2]),
        ("balconies", |s| s.balconies = vec![0]),
        ("additional room", |s| s.additional_rooms.push("Study Room".into())),
        ("construction status", |s| s.construction_status = vec![ConstructionStatus::ReadyToMove]),
        ("listed by", |s| s.listed_by = vec![ListedBy::Owner]),
        ("furnishing", |s| s.furnished = vec![FurnishedStatus::SemiFurnished]),
        ("ownership", |s| s.ownership = vec![OwnershipType::Freehold]),
        ("amenity", |s| s.amenities.push("gym".into())),
        ("building height", |s| s.building_heights = vec![BuildingHeight::HighRise]),
        ("entry facing", |s| s.entry_facing = vec![Facing::East]),
        ("exit facing", |s| s.exit_facing = vec![Facing::West]),
        ("showcase", |s| s.house_tour.showcase = true),
        ("parking spaces", |s| s.min_parking = 1),
        ("super area", |s| s.min_super_area = "1000".into()),
        ("built-up area", |s| s.min_built_up_area = "500".into()),
        ("parking type", |s| s.parking_types = vec![ParkingType::Covered]),
        ("document", |s| s.documents.push("Possession Letter".into())),
    ];

    #[test]
    fn adding_a_constraint_never_grows_the_result() {
        let all = catalogue();
        let base_len = apply(&all, &FilterSpec::default()).len();
        for spec in spec_variants() {
            let before = apply(&all, &spec);
            assert!(before.len() <= base_len);
            for (name, narrow) in NARROWINGS {
                let mut narrowed = spec.clone();
                narrow(&mut narrowed);
                let after = apply(&all, &narrowed);
                assert!(
                    after.iter().all(|p| before.contains(p)),
                    "{name} grew the result for {spec:?}"
                );
            }
        }
    }

    #[test]
    fn search_matches_location_city_or_title_case_insensitively() {
        let all = catalogue();
        let spec = FilterSpec { search_term: "JUHU".into(), ..Default::default() };
        assert_eq!(ids(&apply(&all, &spec)), vec!["b"]);

        let spec = FilterSpec { search_term: "listing d".into(), ..Default::default() };
        assert_eq!(ids(&apply(&all, &spec)), vec!["d"]);

        let spec = FilterSpec { search_term: "pune".into(), ..Default::default() };
        assert_eq!(ids(&apply(&all, &spec)), vec!["a", "d"]);
    }

    #[test]
    fn list_price_bounds_are_inclusive() {
        let all = catalogue();
        let spec = FilterSpec {
            price_range: ("4500000".into(), "7500000".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["a", "d"]);
    }

    #[test]
    fn malformed_price_bound_is_inactive() {
        let all = catalogue();
        let spec = FilterSpec {
            price_range: ("lots".into(), "n/a".into()),
            ..Default::default()
        };
        assert_eq!(apply(&all, &spec), apply(&all, &FilterSpec::default()));
    }

    #[test]
    fn monthly_mode_compares_emi() {
        let crore = sale("crore", 10_000_000.0);
        let mut spec = FilterSpec {
            price_filter_mode: PriceMode::Monthly,
            monthly_range: (0.0, 50_000.0),
            ..Default::default()
        };
        assert!(!matches(&crore, &spec));

        spec.monthly_range = (0.0, 100_000.0);
        assert!(matches(&crore, &spec));
    }

    #[test]
    fn rent_ignores_monthly_mode() {
        let all = catalogue();
        let spec = FilterSpec {
            listing_type: ListingType::Rent,
            price_filter_mode: PriceMode::Monthly,
            monthly_range: (0.0, 1.0),
            price_range: (String::new(), "20000".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["c"]);
    }

    #[test]
    fn boolean_gates_treat_missing_flag_as_false() {
        let mut p = sale("p", 5_000_000.0);
        let spec = FilterSpec { negotiable_only: true, ..Default::default() };
        assert!(!matches(&p, &spec));
        p.price_negotiable = Some(false);
        assert!(!matches(&p, &spec));
        p.price_negotiable = Some(true);
        assert!(matches(&p, &spec));

        let spec = FilterSpec {
            house_tour: HouseTour { showcase: true, video3d: true },
            ..Default::default()
        };
        p.has_showcase = Some(true);
        assert!(!matches(&p, &spec));
        p.has_3d_video = Some(true);
        assert!(matches(&p, &spec));
    }

    #[test]
    fn price_detail_gates_read_their_own_flag() {
        let all_inclusive = FilterSpec { all_inclusive_only: true, ..Default::default() };
        let tax_excluded = FilterSpec { tax_excluded_only: true, ..Default::default() };

        let mut p = sale("p", 5_000_000.0);
        assert!(!matches(&p, &all_inclusive));
        assert!(!matches(&p, &tax_excluded));

        p.all_inclusive_price = Some(true);
        assert!(matches(&p, &all_inclusive));
        assert!(!matches(&p, &tax_excluded));

        p.all_inclusive_price = None;
        p.tax_excluded = Some(true);
        assert!(!matches(&p, &all_inclusive));
        assert!(matches(&p, &tax_excluded));

        p.price_negotiable = Some(true);
        assert_eq!(Criteria::new(&all_inclusive).rejected_by(&p), Some("price details"));
    }

    #[test]
    fn property_type_is_any_of() {
        let all = catalogue();
        let spec = FilterSpec {
            property_types: vec![PropertyType::Villa, PropertyType::Penthouse],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["b"]);
    }

    #[test]
    fn five_plus_bedrooms_includes_seven() {
        let all = catalogue();
        let spec = FilterSpec { bedrooms: vec![5], ..Default::default() };
        assert_eq!(ids(&apply(&all, &spec)), vec!["b"]);

        let spec = FilterSpec { bedrooms: vec![3], ..Default::default() };
        assert_eq!(ids(&apply(&all, &spec)), vec!["d"]);
    }

    #[test]
    fn balcony_top_band_starts_at_three_unlike_bathrooms() {
        let mut p = sale("p", 5_000_000.0);
        p.balconies = Some(3);
        p.bathrooms = 3;

        let balconies = FilterSpec { balconies: vec![4], ..Default::default() };
        let bathrooms = FilterSpec { bathrooms: vec![4], ..Default::default() };
        assert!(matches(&p, &balconies));
        assert!(!matches(&p, &bathrooms));
    }

    #[test]
    fn missing_balconies_count_as_zero() {
        let p = sale("p", 5_000_000.0);
        let spec = FilterSpec { balconies: vec![0], ..Default::default() };
        assert!(matches(&p, &spec));
    }

    #[test]
    fn additional_rooms_require_all_selected() {
        let mut p = sale("p", 5_000_000.0);
        let spec = FilterSpec {
            additional_rooms: vec!["Pooja Room".into(), "Study Room".into()],
            ..Default::default()
        };
        assert!(!matches(&p, &spec));

        p.additional_rooms = Some(vec!["Pooja Room".into()]);
        assert!(!matches(&p, &spec));

        p.additional_rooms = Some(vec!["Study Room".into(), "Pooja Room".into()]);
        assert!(matches(&p, &spec));
    }

    #[test]
    fn documents_require_all_selected() {
        let all = catalogue();
        let spec = FilterSpec {
            documents: vec!["RERA Registration".into(), "Possession Letter".into()],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["d"]);

        let spec = FilterSpec {
            documents: vec!["RERA Registration".into(), "Allotment Letter".into()],
            ..Default::default()
        };
        assert!(apply(&all, &spec).is_empty());
    }

    #[test]
    fn enum_selections_fail_when_field_missing() {
        let all = catalogue();
        let spec = FilterSpec {
            construction_status: vec![ConstructionStatus::ReadyToMove],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["d"]);

        let spec = FilterSpec {
            parking_types: vec![ParkingType::Covered, ParkingType::Open],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["d"]);
    }

    #[test]
    fn lister_furnishing_and_ownership_are_any_of() {
        let by_owner = FilterSpec {
            listed_by: vec![ListedBy::Owner, ListedBy::Builder],
            ..Default::default()
        };
        let furnished = FilterSpec {
            furnished: vec![FurnishedStatus::FullyFurnished, FurnishedStatus::SemiFurnished],
            ..Default::default()
        };
        let freehold = FilterSpec {
            ownership: vec![OwnershipType::Freehold],
            ..Default::default()
        };

        let mut p = sale("p", 5_000_000.0);
        for spec in [&by_owner, &furnished, &freehold] {
            assert!(!matches(&p, spec), "missing field passed {spec:?}");
        }

        p.listed_by = Some(ListedBy::Agent);
        assert!(!matches(&p, &by_owner));
        p.listed_by = Some(ListedBy::Builder);
        assert!(matches(&p, &by_owner));
        assert!(!matches(&p, &furnished));
        assert!(!matches(&p, &freehold));

        p.furnished_status = Some(FurnishedStatus::Unfurnished);
        assert_eq!(Criteria::new(&furnished).rejected_by(&p), Some("furnishing"));
        p.furnished_status = Some(FurnishedStatus::SemiFurnished);
        assert!(matches(&p, &furnished));
        assert_eq!(Criteria::new(&freehold).rejected_by(&p), Some("ownership"));

        p.ownership_type = Some(OwnershipType::Freehold);
        assert!(matches(&p, &freehold));
        assert!(matches(&p, &by_owner));
    }

    #[test]
    fn huge_minimums_exclude_everything() {
        let all = catalogue();
        let price = FilterSpec {
            price_range: ("99999999999999999999".into(), String::new()),
            ..Default::default()
        };
        assert!(apply(&all, &price).is_empty());

        let carpet = FilterSpec {
            min_carpet_area: "99999999999999999999".into(),
            ..Default::default()
        };
        assert!(apply(&all, &carpet).is_empty());
    }

    #[test]
    fn amenity_matches_case_insensitive_substring() {
        let mut p = sale("p", 5_000_000.0);
        p.amenities = vec!["24x7 Power Backup".into()];

        let backup = FilterSpec { amenities: vec!["Power Backup".into()], ..Default::default() };
        let gym = FilterSpec { amenities: vec!["Gym".into()], ..Default::default() };
        let both = FilterSpec {
            amenities: vec!["power backup".into(), "Gym".into()],
            ..Default::default()
        };
        assert!(matches(&p, &backup));
        assert!(!matches(&p, &gym));
        assert!(!matches(&p, &both));
    }

    #[test]
    fn floor_bands_only_apply_when_floor_known() {
        let all = catalogue();
        let spec = FilterSpec {
            floor_ranges: vec![FloorBand::FifteenthToTwentieth],
            ..Default::default()
        };
        // b has no floor, so it passes; a is on the 3rd floor.
        assert_eq!(ids(&apply(&all, &spec)), vec!["b", "d"]);
    }

    #[test]
    fn building_height_ignores_all_sentinel() {
        let all = catalogue();
        let low = FilterSpec {
            building_heights: vec![BuildingHeight::LowRise],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &low)), vec!["b", "d"]);

        let with_all = FilterSpec {
            building_heights: vec![BuildingHeight::LowRise, BuildingHeight::All],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &with_all)), vec!["a", "b", "d"]);

        let mid = FilterSpec {
            building_heights: vec![BuildingHeight::MidRise],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &mid)), vec!["a", "b", "d"]);
    }

    #[test]
    fn facing_only_checked_when_listing_states_it() {
        let all = catalogue();
        let spec = FilterSpec {
            entry_facing: vec![Facing::North],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["a", "b"]);

        let spec = FilterSpec {
            entry_facing: vec![Facing::East],
            exit_facing: vec![Facing::West],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["a", "b", "d"]);
    }

    #[test]
    fn minimum_parking_spaces() {
        let all = catalogue();
        let spec = FilterSpec { min_parking: 2, ..Default::default() };
        assert_eq!(ids(&apply(&all, &spec)), vec!["d"]);
    }

    #[test]
    fn area_minimums_are_conjunctive() {
        let mut p = sale("p", 5_000_000.0);
        p.carpet_area = Some(500.0);

        let carpet = FilterSpec { min_carpet_area: "400".into(), ..Default::default() };
        assert!(matches(&p, &carpet));

        let both = FilterSpec {
            min_carpet_area: "400".into(),
            min_super_area: "100".into(),
            ..Default::default()
        };
        assert!(!matches(&p, &both));

        let too_big = FilterSpec { min_carpet_area: "501".into(), ..Default::default() };
        assert!(!matches(&p, &too_big));
    }

    #[test]
    fn year_built_range_defaults_open_side() {
        let all = catalogue();
        let spec = FilterSpec {
            year_built_range: YearRange {
                min: String::new(),
                max: "2020".into(),
            },
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["a"]);

        let spec = FilterSpec {
            year_built_range: YearRange {
                min: "2016".into(),
                max: String::new(),
            },
            ..Default::default()
        };
        assert!(apply(&all, &spec).is_empty());
    }

    #[test]
    fn views_match_any_selected() {
        let all = catalogue();
        let spec = FilterSpec {
            views: vec![ViewType::City, ViewType::Park],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &spec)), vec!["b"]);
    }

    #[test]
    fn rejected_by_names_first_failing_predicate() {
        let p = sale("p", 5_000_000.0);
        let spec = FilterSpec {
            rera_only: true,
            min_parking: 1,
            ..Default::default()
        };
        let criteria = Criteria::new(&spec);
        assert_eq!(criteria.rejected_by(&p), Some("rera"));

        let open = FilterSpec::default();
        assert_eq!(Criteria::new(&open).rejected_by(&p), None);
    }

    #[test]
    fn apply_refs_borrows_survivors() {
        let all = catalogue();
        let spec = FilterSpec { bedrooms: vec![5], ..Default::default() };
        let kept = apply_refs(&all, &spec);
        assert_eq!(kept.len(), 1);
        assert!(std::ptr::eq(kept[0], &all[1]));
    }
}
