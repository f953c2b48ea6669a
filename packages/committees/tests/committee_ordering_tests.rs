//! Ordering properties checked over seeded random committee sets.

use committees_core::domains::committees::{order_committees, OrderingMode};
use committees_core::kernel::test_dependencies::{committee, ids, subcommittee};
use congress_client::{Chamber, Committee};

const SEEDS: u64 = 200;

/// Random chamber/joint committees with some subcommittees, some orphaned,
/// some with ids that sort before their parent.
fn random_committees(rng: &mut fastrand::Rng) -> Vec<Committee> {
    let mut committees = Vec::new();
    let parents = rng.usize(0..8);

    for p in 0..parents {
        let chamber = match rng.usize(0..3) {
            0 => Chamber::House,
            1 => Chamber::Senate,
            _ => Chamber::Joint,
        };
        let parent_id = format!("{}{:02}", prefix(chamber), rng.usize(10..90) + p * 100);
        if rng.usize(0..5) > 0 {
            committees.push(committee(&parent_id, chamber));
        }

        for s in 0..rng.usize(0..4) {
            let child_prefix = if rng.bool() { "A" } else { "Z" };
            let child_id = format!("{}{}{:03}", prefix(chamber), child_prefix, p * 10 + s);
            committees.push(subcommittee(&child_id, chamber, &parent_id));
        }
    }

    rng.shuffle(&mut committees);
    committees
}

fn prefix(chamber: Chamber) -> &'static str {
    match chamber {
        Chamber::House => "HS",
        Chamber::Senate => "SS",
        Chamber::Joint => "JS",
    }
}

fn position(ordered: &[Committee], id: &str) -> Option<usize> {
    ordered.iter().position(|c| c.id == id)
}

#[test]
fn by_chamber_is_total_order_by_id() {
    for seed in 0..SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let input = random_committees(&mut rng);
        let count = input.len();

        let ordered = order_committees(input, OrderingMode::ByChamber);

        assert_eq!(ordered.len(), count, "seed {seed}");
        assert!(
            ordered.windows(2).all(|w| w[0].id <= w[1].id),
            "seed {seed}: {:?}",
            ids(&ordered)
        );
    }
}

#[test]
fn by_legislator_keeps_every_record() {
    for seed in 0..SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let input = random_committees(&mut rng);
        let mut expected: Vec<String> = input.iter().map(|c| c.id.clone()).collect();
        expected.sort();

        let ordered = order_committees(input, OrderingMode::ByLegislator);
        let mut actual: Vec<String> = ordered.iter().map(|c| c.id.clone()).collect();
        actual.sort();

        assert_eq!(actual, expected, "seed {seed}");
    }
}

#[test]
fn by_legislator_puts_children_directly_under_parents() {
    for seed in 0..SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let input = random_committees(&mut rng);

        let ordered = order_committees(input, OrderingMode::ByLegislator);

        for (i, child) in ordered.iter().enumerate() {
            let Some(parent_id) = child.parent_id() else {
                continue;
            };
            if child.chamber.is_joint() {
                continue;
            }
            let Some(parent_pos) = position(&ordered, parent_id) else {
                continue;
            };

            // Everything between the parent and this child is a sibling.
            assert!(parent_pos < i, "seed {seed}: {:?}", ids(&ordered));
            assert!(
                ordered[parent_pos + 1..i]
                    .iter()
                    .all(|c| c.parent_id() == Some(parent_id)),
                "seed {seed}: {:?}",
                ids(&ordered)
            );
        }
    }
}

#[test]
fn by_legislator_puts_joint_committees_last() {
    for seed in 0..SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let input = random_committees(&mut rng);

        let ordered = order_committees(input, OrderingMode::ByLegislator);

        let first_joint = ordered
            .iter()
            .position(|c| c.chamber.is_joint())
            .unwrap_or(ordered.len());
        assert!(
            ordered[first_joint..].iter().all(|c| c.chamber.is_joint()),
            "seed {seed}: {:?}",
            ids(&ordered)
        );
        assert!(
            ordered[first_joint..].windows(2).all(|w| w[0].id <= w[1].id),
            "seed {seed}: {:?}",
            ids(&ordered)
        );
    }
}

#[test]
fn by_legislator_is_deterministic() {
    for seed in 0..SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let input = random_committees(&mut rng);
        let mut shuffled = input.clone();
        rng.shuffle(&mut shuffled);

        let a = order_committees(input, OrderingMode::ByLegislator);
        let b = order_committees(shuffled, OrderingMode::ByLegislator);

        assert_eq!(ids(&a), ids(&b), "seed {seed}");
    }
}

#[test]
fn mixed_legislator_example() {
    let input = vec![
        committee("JSEC", Chamber::Joint),
        subcommittee("SSFI12", Chamber::Senate, "SSFI"),
        committee("HSAG", Chamber::House),
        subcommittee("HSAG03", Chamber::House, "HSAG"),
        committee("SSFI", Chamber::Senate),
        subcommittee("SSAA01", Chamber::Senate, "SSFI"),
        committee("JSLC", Chamber::Joint),
    ];

    let ordered = order_committees(input, OrderingMode::ByLegislator);

    assert_eq!(
        ids(&ordered),
        vec!["HSAG", "HSAG03", "SSFI", "SSAA01", "SSFI12", "JSEC", "JSLC"]
    );
}
