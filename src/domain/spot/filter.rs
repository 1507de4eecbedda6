//! Price filtering and pagination over a loaded spot collection.
//!
//! Both are plain data transformations: the caller loads the collection
//! in a stable order and passes the slice here. No implicit sort is
//! applied, so the same input always yields the same page.

use super::Spot;

/// Default page number when the query omits one.
pub const DEFAULT_PAGE: u32 = 1;

/// Default and maximum page size.
pub const DEFAULT_SIZE: u32 = 20;
pub const MAX_SIZE: u32 = 20;

/// Normalized pagination parameters.
///
/// Out-of-range raw query values are rejected with a 400 before this type
/// is built; the constructor still clamps so the invariants hold for every
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: u32,
    size: u32,
}

impl PageParams {
    /// Builds page parameters, applying defaults and clamping to bounds.
    pub fn new(page: Option<u32>, size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            size: size.unwrap_or(DEFAULT_SIZE).clamp(1, MAX_SIZE),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of items to skip before this page starts.
    pub fn offset(&self) -> usize {
        ((self.page - 1) * self.size) as usize
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Inclusive price bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Returns true when the price satisfies both bounds that are present.
    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Applies the price filter, then slices out the requested page.
///
/// Filtering runs before pagination so a page is always full when enough
/// matching spots exist. A page past the end yields an empty vec, not an
/// error.
pub fn filter_and_paginate(spots: &[Spot], range: &PriceRange, params: &PageParams) -> Vec<Spot> {
    spots
        .iter()
        .filter(|spot| range.contains(spot.price().value()))
        .skip(params.offset())
        .take(params.size() as usize)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SpotId, UserId};
    use crate::domain::spot::SpotDetails;
    use proptest::prelude::*;

    fn spot_priced(price: f64) -> Spot {
        Spot::new(
            SpotId::new(),
            UserId::new("host-1").unwrap(),
            SpotDetails {
                address: "123 Main St".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                country: "USA".to_string(),
                name: format!("Spot at {}", price),
                description: "A cozy stay".to_string(),
                price,
            },
        )
        .unwrap()
    }

    fn spots(n: usize) -> Vec<Spot> {
        (0..n).map(|i| spot_priced(50.0 + i as f64)).collect()
    }

    #[test]
    fn page_params_apply_defaults() {
        let params = PageParams::new(None, None);
        assert_eq!(params.page(), 1);
        assert_eq!(params.size(), 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn page_params_clamp_to_bounds() {
        let params = PageParams::new(Some(0), Some(0));
        assert_eq!(params.page(), 1);
        assert_eq!(params.size(), 1);

        let params = PageParams::new(Some(3), Some(100));
        assert_eq!(params.size(), 20);
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn twenty_five_spots_paginate_as_twenty_five_zero() {
        let all = spots(25);
        let range = PriceRange::default();

        let page1 = filter_and_paginate(&all, &range, &PageParams::new(Some(1), Some(20)));
        assert_eq!(page1.len(), 20);

        let page2 = filter_and_paginate(&all, &range, &PageParams::new(Some(2), Some(20)));
        assert_eq!(page2.len(), 5);

        let page3 = filter_and_paginate(&all, &range, &PageParams::new(Some(3), Some(20)));
        assert!(page3.is_empty());
    }

    #[test]
    fn pages_are_contiguous_and_stable() {
        let all = spots(25);
        let range = PriceRange::default();
        let page2 = filter_and_paginate(&all, &range, &PageParams::new(Some(2), Some(20)));

        assert_eq!(page2[0].id(), all[20].id());
        assert_eq!(page2[4].id(), all[24].id());
    }

    #[test]
    fn two_sided_price_filter_is_inclusive() {
        let all = vec![spot_priced(50.0), spot_priced(100.0), spot_priced(150.0)];
        let range = PriceRange::new(Some(50.0), Some(100.0));

        let result = filter_and_paginate(&all, &range, &PageParams::default());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|s| s.price().value() <= 100.0));
    }

    #[test]
    fn one_sided_filters_leave_other_bound_open() {
        let all = vec![spot_priced(50.0), spot_priced(100.0), spot_priced(150.0)];

        let min_only = filter_and_paginate(
            &all,
            &PriceRange::new(Some(100.0), None),
            &PageParams::default(),
        );
        assert_eq!(min_only.len(), 2);

        let max_only = filter_and_paginate(
            &all,
            &PriceRange::new(None, Some(100.0)),
            &PageParams::default(),
        );
        assert_eq!(max_only.len(), 2);
    }

    #[test]
    fn no_bounds_means_no_filtering() {
        let all = spots(5);
        let result = filter_and_paginate(&all, &PriceRange::default(), &PageParams::default());
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn filter_applies_before_pagination() {
        // 30 spots priced 50..80; filter to >= 60 leaves 20, exactly one page.
        let all = spots(30);
        let range = PriceRange::new(Some(60.0), None);

        let page1 = filter_and_paginate(&all, &range, &PageParams::new(Some(1), Some(20)));
        assert_eq!(page1.len(), 20);
        assert_eq!(page1[0].price().value(), 60.0);

        let page2 = filter_and_paginate(&all, &range, &PageParams::new(Some(2), Some(20)));
        assert!(page2.is_empty());
    }

    proptest! {
        #[test]
        fn page_never_exceeds_size(
            total in 0usize..60,
            page in 1u32..6,
            size in 1u32..=20,
        ) {
            let all = spots(total);
            let params = PageParams::new(Some(page), Some(size));
            let result = filter_and_paginate(&all, &PriceRange::default(), &params);
            prop_assert!(result.len() <= size as usize);
        }

        #[test]
        fn pages_partition_the_filtered_set(total in 0usize..60, size in 1u32..=20) {
            let all = spots(total);
            let range = PriceRange::default();
            let mut seen = 0usize;
            for page in 1.. {
                let chunk = filter_and_paginate(&all, &range, &PageParams::new(Some(page), Some(size)));
                if chunk.is_empty() {
                    break;
                }
                seen += chunk.len();
            }
            prop_assert_eq!(seen, total);
        }
    }
}
