//! Cascading location selector
//!
//! A strict three-level descent: County, then Constituency, then Ward.
//! Selecting a level clears everything below it; clearing a level clears and
//! disables its descendants. There is no backward inference - choosing a
//! ward never re-derives its ancestors.

use serde::{Deserialize, Serialize};
use tumikia_core_types::{ConstituencyId, CountyId, WardId};

use crate::model::{Constituency, Ward};
use crate::ops::Store;

/// Selection state of the county/constituency/ward controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationSelector {
    county: Option<CountyId>,
    constituency: Option<ConstituencyId>,
    ward: Option<WardId>,
}

impl LocationSelector {
    /// Create a selector with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn county(&self) -> Option<CountyId> {
        self.county
    }

    pub fn constituency(&self) -> Option<ConstituencyId> {
        self.constituency
    }

    pub fn ward(&self) -> Option<WardId> {
        self.ward
    }

    /// Set or clear the county selection
    ///
    /// Either way the constituency and ward selections are cleared; the
    /// downstream option lists must be recomputed by the caller.
    pub fn select_county(&mut self, county: Option<CountyId>) {
        self.county = county;
        self.constituency = None;
        self.ward = None;
    }

    /// Set or clear the constituency selection
    ///
    /// Clears the ward selection. Ignored while no county is selected (the
    /// control is disabled in that state).
    pub fn select_constituency(&mut self, constituency: Option<ConstituencyId>) {
        if self.county.is_none() {
            return;
        }
        self.constituency = constituency;
        self.ward = None;
    }

    /// Set or clear the ward selection
    ///
    /// Ignored while no constituency is selected.
    pub fn select_ward(&mut self, ward: Option<WardId>) {
        if self.constituency.is_none() {
            return;
        }
        self.ward = ward;
    }

    /// Clear all three levels
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the constituency control accepts input
    pub fn constituency_enabled(&self) -> bool {
        self.county.is_some()
    }

    /// Whether the ward control accepts input
    pub fn ward_enabled(&self) -> bool {
        self.constituency.is_some()
    }

    /// Constituency options for the current county selection
    ///
    /// Empty when no county is selected or the county has no constituencies
    /// seeded - the "nothing selected yet" state, not an error.
    pub fn constituency_options<'a>(&self, store: &'a Store) -> Vec<&'a Constituency> {
        match self.county {
            Some(county_id) => store.constituencies_of(county_id),
            None => Vec::new(),
        }
    }

    /// Ward options for the current constituency selection
    pub fn ward_options<'a>(&self, store: &'a Store) -> Vec<&'a Ward> {
        match self.constituency {
            Some(constituency_id) => store.wards_of(constituency_id),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_county_clears_descendants() {
        let mut selector = LocationSelector::new();
        selector.select_county(Some(CountyId(1)));
        selector.select_constituency(Some(ConstituencyId(1)));
        selector.select_ward(Some(WardId(2)));

        selector.select_county(Some(CountyId(2)));

        assert_eq!(selector.county(), Some(CountyId(2)));
        assert_eq!(selector.constituency(), None);
        assert_eq!(selector.ward(), None);
        assert!(!selector.ward_enabled());
    }

    #[test]
    fn test_clearing_county_disables_everything_below() {
        let mut selector = LocationSelector::new();
        selector.select_county(Some(CountyId(1)));
        selector.select_constituency(Some(ConstituencyId(1)));

        selector.select_county(None);

        assert_eq!(selector.county(), None);
        assert_eq!(selector.constituency(), None);
        assert_eq!(selector.ward(), None);
        assert!(!selector.constituency_enabled());
        assert!(!selector.ward_enabled());
    }

    #[test]
    fn test_constituency_ignored_while_disabled() {
        let mut selector = LocationSelector::new();
        selector.select_constituency(Some(ConstituencyId(1)));
        assert_eq!(selector.constituency(), None);
    }

    #[test]
    fn test_clearing_constituency_clears_ward() {
        let mut selector = LocationSelector::new();
        selector.select_county(Some(CountyId(1)));
        selector.select_constituency(Some(ConstituencyId(1)));
        selector.select_ward(Some(WardId(3)));

        selector.select_constituency(None);

        assert_eq!(selector.constituency(), None);
        assert_eq!(selector.ward(), None);
    }
}
