//! Shopping list and wish-list figures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{FutureItem, Priority, ShoppingItem},
    metrics::dashboard::NO_CATEGORY,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingOverview {
    pub pending: usize,
    pub top_category: String,
    pub top_category_pending: usize,
    /// Price times quantity over pending items that carry a price.
    pub pending_estimate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FutureItemsSummary {
    pub count: usize,
    pub total_estimated: f64,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
    pub high_priority_estimated: f64,
}

pub fn pending_shopping_count(items: &[ShoppingItem]) -> usize {
    items.iter().filter(|item| !item.checked).count()
}

/// Category with the most pending items; ties keep the category seen first.
pub fn top_shopping_category(items: &[ShoppingItem]) -> (String, usize) {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for item in items.iter().filter(|item| !item.checked) {
        match positions.get(item.category.as_str()) {
            Some(&idx) => order[idx].1 += 1,
            None => {
                positions.insert(item.category.as_str(), order.len());
                order.push((item.category.as_str(), 1));
            }
        }
    }
    let mut leader: Option<(&str, usize)> = None;
    for (category, count) in order {
        if leader.map_or(true, |(_, best)| count > best) {
            leader = Some((category, count));
        }
    }
    leader
        .map(|(category, count)| (category.to_string(), count))
        .unwrap_or_else(|| (NO_CATEGORY.to_string(), 0))
}

pub fn pending_shopping_estimate(items: &[ShoppingItem]) -> f64 {
    items
        .iter()
        .filter(|item| !item.checked)
        .filter_map(ShoppingItem::line_total)
        .fold(0.0, |total, line| total + line)
}

pub fn shopping_overview(items: &[ShoppingItem]) -> ShoppingOverview {
    let (top_category, top_category_pending) = top_shopping_category(items);
    ShoppingOverview {
        pending: pending_shopping_count(items),
        top_category,
        top_category_pending,
        pending_estimate: pending_shopping_estimate(items),
    }
}

pub fn future_items_summary(items: &[FutureItem]) -> FutureItemsSummary {
    items
        .iter()
        .fold(FutureItemsSummary::default(), |mut summary, item| {
            summary.count += 1;
            summary.total_estimated += item.estimated_value;
            match item.priority {
                Priority::High => {
                    summary.high_priority += 1;
                    summary.high_priority_estimated += item.estimated_value;
                }
                Priority::Medium => summary.medium_priority += 1,
                Priority::Low => summary.low_priority += 1,
            }
            summary
        })
}
