//! Gear predicates used by the equipment-bonus and anti-air cut-in tables.

use serde::{Deserialize, Serialize};

use crate::data::gear::{GearAttr, GearCategory, MasterGear};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GearFilter {
    Id { gear_id: u16 },
    Ids { gear_ids: Vec<u16> },
    Category { category: GearCategory },
    Attr { attr: GearAttr },
    MinStars { stars: u8, filter: Box<GearFilter> },
    AllOf { filters: Vec<GearFilter> },
    AnyOf { filters: Vec<GearFilter> },
}

impl GearFilter {
    pub fn matches(&self, gear: &MasterGear, stars: u8) -> bool {
        match self {
            Self::Id { gear_id } => gear.gear_id == *gear_id,
            Self::Ids { gear_ids } => gear_ids.contains(&gear.gear_id),
            Self::Category { category } => gear.category() == *category,
            Self::Attr { attr } => gear.has_attr(*attr),
            Self::MinStars { stars: min, filter } => stars >= *min && filter.matches(gear, stars),
            Self::AllOf { filters } => filters.iter().all(|f| f.matches(gear, stars)),
            Self::AnyOf { filters } => filters.iter().any(|f| f.matches(gear, stars)),
        }
    }

    /// Count matching entries in `(gear, stars)` pairs.
    pub fn count<'a, I>(&self, gears: I) -> usize
    where
        I: IntoIterator<Item = (&'a MasterGear, u8)>,
    {
        gears
            .into_iter()
            .filter(|(gear, stars)| self.matches(gear, *stars))
            .count()
    }

    /// Gear ids this filter refers to directly. Used by dataset validation.
    pub fn referenced_gear_ids(&self) -> Vec<u16> {
        match self {
            Self::Id { gear_id } => vec![*gear_id],
            Self::Ids { gear_ids } => gear_ids.clone(),
            Self::Category { .. } | Self::Attr { .. } => Vec::new(),
            Self::MinStars { filter, .. } => filter.referenced_gear_ids(),
            Self::AllOf { filters } | Self::AnyOf { filters } => filters
                .iter()
                .flat_map(GearFilter::referenced_gear_ids)
                .collect(),
        }
    }
}

/// "At least `count` gears matching `filter`".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearRequirement {
    pub filter: GearFilter,
    pub count: usize,
}

impl GearRequirement {
    pub fn attr(attr: GearAttr, count: usize) -> Self {
        Self {
            filter: GearFilter::Attr { attr },
            count,
        }
    }

    pub fn category(category: GearCategory, count: usize) -> Self {
        Self {
            filter: GearFilter::Category { category },
            count,
        }
    }

    pub fn is_met_by<'a, I>(&self, gears: I) -> bool
    where
        I: IntoIterator<Item = (&'a MasterGear, u8)>,
    {
        self.filter.count(gears) >= self.count
    }
}
