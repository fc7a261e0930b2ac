use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Condition, IssueRecord, VoyagePriority};

/// Filter values chosen by the user. An empty set leaves that field unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    #[serde(default)]
    pub ship_names: BTreeSet<String>,
    #[serde(default)]
    pub voyage_priorities: BTreeSet<String>,
    #[serde(default)]
    pub conditions: BTreeSet<String>,
}

impl Selections {
    pub fn is_empty(&self) -> bool {
        self.ship_names.is_empty() && self.voyage_priorities.is_empty() && self.conditions.is_empty()
    }

    pub fn admits(&self, record: &IssueRecord) -> bool {
        admits(&self.ship_names, &record.ship_name)
            && admits(&self.voyage_priorities, &record.voyage_priority)
            && admits(&self.conditions, &record.condition)
    }
}

fn admits(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Keeps the records matching every non-empty selection, in their original order.
pub fn filter_records(records: &[IssueRecord], selections: &Selections) -> Vec<IssueRecord> {
    records
        .iter()
        .filter(|record| selections.admits(record))
        .cloned()
        .collect()
}

/// Values offered by the filter multi-selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub ship_names: Vec<String>,
    pub voyage_priorities: Vec<&'static str>,
    pub conditions: Vec<&'static str>,
}

/// Ship names come from the log in first-seen order; the other two lists are fixed.
pub fn filter_options(records: &[IssueRecord]) -> FilterOptions {
    let mut seen = BTreeSet::new();
    let ship_names = records
        .iter()
        .map(|record| record.ship_name.as_str())
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .map(str::to_string)
        .collect();

    FilterOptions {
        ship_names,
        voyage_priorities: VoyagePriority::ALL.iter().map(|p| p.as_str()).collect(),
        conditions: Condition::ALL.iter().map(|c| c.as_str()).collect(),
    }
}
