//! Group matchers shared by the predicates.
//!
//! Most filters follow one shape: an empty selection is no constraint,
//! selections inside a group combine with OR (or AND for checklists), and
//! groups combine with AND in the engine.

/// The property's value must be one of the selected values. A missing value
/// never matches an active selection.
pub fn any_of<T: PartialEq>(selected: &[T], value: Option<&T>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(v))
}

/// The property's set must contain every selected value. A missing set never
/// matches an active selection.
pub fn all_of<T: PartialEq>(selected: &[T], present: Option<&[T]>) -> bool {
    if selected.is_empty() {
        return true;
    }
    present.is_some_and(|set| selected.iter().all(|wanted| set.contains(wanted)))
}

/// The property's set must share at least one value with the selection.
pub fn intersects<T: PartialEq>(selected: &[T], present: Option<&[T]>) -> bool {
    if selected.is_empty() {
        return true;
    }
    present.is_some_and(|set| set.iter().any(|value| selected.contains(value)))
}

/// A room-count selector whose top button means "this many or more".
///
/// `or_more_key` is the selection value of that button and `or_more_floor`
/// the smallest count it accepts. Every other selection is an exact count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomBand {
    pub or_more_key: u32,
    pub or_more_floor: u32,
}

/// "5+" bedrooms accepts 4 and up.
pub const BEDROOM_BAND: RoomBand = RoomBand::new(5, 4);
/// "4+" bathrooms accepts 4 and up.
pub const BATHROOM_BAND: RoomBand = RoomBand::new(4, 4);
/// "4+" balconies accepts 3 and up.
pub const BALCONY_BAND: RoomBand = RoomBand::new(4, 3);

impl RoomBand {
    pub const fn new(or_more_key: u32, or_more_floor: u32) -> Self {
        Self {
            or_more_key,
            or_more_floor,
        }
    }

    fn accepts(&self, selection: u32, count: u32) -> bool {
        if selection == self.or_more_key {
            count >= self.or_more_floor
        } else {
            count == selection
        }
    }

    /// Whether `count` satisfies any of the selected buttons.
    pub fn matches(&self, selected: &[u32], count: u32) -> bool {
        selected.is_empty() || selected.iter().any(|&n| self.accepts(n, count))
    }
}
