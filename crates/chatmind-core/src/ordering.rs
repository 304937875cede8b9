//! Result Ordering
//!
//! `OrderBy` pairs a sortable field with a direction. Sorting is always
//! stable: records that compare equal keep their insertion order, in both
//! directions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Sortable testimonial fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestimonialField {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
}

/// Sortable pricing plan fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingPlanField {
    #[default]
    #[serde(rename = "price")]
    Price,
}

/// Field + direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Default> OrderBy<F> {
    pub fn asc() -> Self {
        Self {
            field: F::default(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc() -> Self {
        Self {
            field: F::default(),
            direction: SortDirection::Desc,
        }
    }
}

/// Stable in-place sort by a key in the given direction
pub fn sort_stable_by_key<T, K, F>(items: &mut [T], direction: SortDirection, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    // `sort_by` is stable; reversing the comparator keeps equal elements in place.
    items.sort_by(|a, b| direction.apply(key(a).cmp(&key(b))));
}
