//! Display order for committee lists.
//!
//! By chamber, committees are listed in id order. By legislator, chamber
//! committees come first in id order with each subcommittee pulled up to sit
//! directly under its parent, followed by joint committees in id order.
//!
//! Committee ids put a parent's subcommittees after the parent (`HSAG`,
//! `HSAG01`, ...) but interleave them with other committees that share the
//! prefix, so id order alone does not keep them together.

use congress_client::Committee;
use std::collections::{HashMap, HashSet};

use super::models::OrderingMode;

/// Put fetched committees in display order. Records are moved, never modified.
pub fn order_committees(committees: Vec<Committee>, mode: OrderingMode) -> Vec<Committee> {
    match mode {
        OrderingMode::ByChamber => sorted_by_id(committees),
        OrderingMode::ByLegislator => {
            let (joint, chamber): (Vec<_>, Vec<_>) = committees
                .into_iter()
                .partition(|c| c.chamber.is_joint());

            let mut ordered = with_subcommittees_under_parents(chamber);
            ordered.extend(sorted_by_id(joint));
            ordered
        }
    }
}

fn sorted_by_id(mut committees: Vec<Committee>) -> Vec<Committee> {
    committees.sort_by(|a, b| a.id.cmp(&b.id));
    committees
}

/// Id order, except a subcommittee whose top-level parent is present follows
/// that parent immediately. Siblings keep id order among themselves.
fn with_subcommittees_under_parents(committees: Vec<Committee>) -> Vec<Committee> {
    let total = committees.len();
    let parents: HashSet<String> = committees
        .iter()
        .filter(|c| !c.subcommittee)
        .map(|c| c.id.clone())
        .collect();

    let (children, roots): (Vec<_>, Vec<_>) = sorted_by_id(committees)
        .into_iter()
        .partition(|c| c.parent_id().is_some_and(|parent| parents.contains(parent)));

    let mut children_by_parent: HashMap<String, Vec<Committee>> = HashMap::new();
    for child in children {
        let parent = child.parent_id().unwrap_or_default().to_string();
        children_by_parent.entry(parent).or_default().push(child);
    }

    let mut ordered = Vec::with_capacity(total);
    for root in roots {
        let children = children_by_parent.remove(&root.id);
        ordered.push(root);
        ordered.extend(children.into_iter().flatten());
    }
    ordered
}
