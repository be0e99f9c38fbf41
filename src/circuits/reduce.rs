//! Iterative contraction of path-labelled impedances.
//!
//! Entries are bucketed by label length and contracted deepest bucket
//! first. Within a bucket, equal labels sit directly in series and merge by
//! addition, staying at the same depth; quasi-equal labels are parallel
//! siblings and merge by the reciprocal of their reciprocal sum, landing
//! one bucket shallower under a collapsed label. The series check runs
//! strictly before the sibling check: swapping them miscombines disjoint
//! parallel groups at the same depth.
//!
//! Every merge removes an entry or lowers a depth, so contraction
//! terminates. Buckets are kept sorted so the result is reproducible for a
//! fixed entry multiset regardless of insertion order.

use std::collections::BTreeMap;

use crate::errors::CircuitError;
use crate::math::CScalar;

use super::path::PathLabel;

/// A path-labelled impedance awaiting contraction.
pub type Entry = (PathLabel, CScalar);

/// Reduces a set of path-labelled impedances to a single equivalent
/// impedance.
///
/// One entry is returned as-is. Two entries combine in series when either
/// carries the lone series marker, in parallel otherwise. Three or more
/// entries go through bucketed contraction.
pub fn reduce(entries: &[Entry]) -> Result<CScalar, CircuitError> {
    match entries {
        [] => Err(CircuitError::EmptyNetwork),
        [(_, z)] => Ok(*z),
        [(pa, za), (pb, zb)] => {
            if pa.is_series() || pb.is_series() {
                Ok(*za + *zb)
            } else {
                let sum = reciprocal(*za)? + reciprocal(*zb)?;
                reciprocal(sum)
            }
        }
        _ => contract(entries.to_vec()),
    }
}

/// `1 / z`, failing on a short-circuit branch or an exactly cancelled
/// reciprocal sum.
fn reciprocal(z: CScalar) -> Result<CScalar, CircuitError> {
    if z.norm() == 0.0 {
        return Err(CircuitError::DegenerateNetwork);
    }
    Ok(CScalar::new(1.0, 0.0) / z)
}

fn contract(entries: Vec<Entry>) -> Result<CScalar, CircuitError> {
    let mut buckets: BTreeMap<usize, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        buckets.entry(entry.0.len()).or_default().push(entry);
    }

    loop {
        let Some((&depth, _)) = buckets.iter().next_back() else {
            return Err(CircuitError::EmptyNetwork);
        };
        let mut bucket = buckets.remove(&depth).unwrap_or_default();
        sort_bucket(&mut bucket);

        contract_bucket(&mut bucket, &mut buckets)?;

        match (bucket.len(), buckets.is_empty()) {
            (0, false) => {}
            (1, true) => return Ok(bucket[0].1),
            // Leftovers can never pair up: nothing deeper remains to feed
            // this bucket, and entries of different lengths never merge.
            _ => return Err(CircuitError::IrreducibleTopology),
        }
    }
}

/// Orders a bucket by label, then by impedance bits, so scanning order is
/// independent of how entries were appended.
fn sort_bucket(bucket: &mut [Entry]) {
    bucket.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.re.total_cmp(&b.1.re))
            .then_with(|| a.1.im.total_cmp(&b.1.im))
    });
}

/// Merges entries within one bucket until no series pair or sibling group
/// remains. Parallel merges are pushed into `buckets` at the collapsed
/// label's length; unmatched entries stay behind in `bucket`.
fn contract_bucket(
    bucket: &mut Vec<Entry>,
    buckets: &mut BTreeMap<usize, Vec<Entry>>,
) -> Result<(), CircuitError> {
    loop {
        // Direct series neighbours first.
        if let Some((i, j)) = find_series_pair(bucket) {
            let (_, zb) = bucket.remove(j);
            bucket[i].1 += zb;
            continue;
        }

        // Then one full sibling group of the same split.
        let Some(head) = find_sibling_head(bucket) else {
            return Ok(());
        };
        let head_path = bucket[head].0.clone();
        let mut sum = reciprocal(bucket[head].1)?;
        let mut j = head + 1;
        while j < bucket.len() {
            if bucket[j].0.is_quasi_equal(&head_path) {
                let (_, z) = bucket.remove(j);
                sum += reciprocal(z)?;
            } else {
                j += 1;
            }
        }
        bucket.remove(head);

        let merged = reciprocal(sum)?;
        let collapsed = head_path.collapse();
        buckets.entry(collapsed.len()).or_default().push((collapsed, merged));
    }
}

fn find_series_pair(bucket: &[Entry]) -> Option<(usize, usize)> {
    for i in 0..bucket.len() {
        for j in (i + 1)..bucket.len() {
            if bucket[i].0 == bucket[j].0 {
                return Some((i, j));
            }
        }
    }
    None
}

fn find_sibling_head(bucket: &[Entry]) -> Option<usize> {
    (0..bucket.len()).find(|&i| {
        bucket[i + 1..]
            .iter()
            .any(|(path, _)| path.is_quasi_equal(&bucket[i].0))
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn z(re: f64, im: f64) -> CScalar {
        CScalar::new(re, im)
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(reduce(&[]).unwrap_err(), CircuitError::EmptyNetwork);
    }

    #[test]
    fn single_entry_passes_through() {
        let entries = vec![(PathLabel::series(), z(100.0, 0.0))];
        assert_eq!(reduce(&entries).unwrap(), z(100.0, 0.0));
    }

    #[test]
    fn two_series_entries_add() {
        let entries = vec![
            (PathLabel::series(), z(100.0, 0.0)),
            (PathLabel::series(), z(200.0, 0.0)),
        ];
        let total = reduce(&entries).unwrap();
        assert_relative_eq!(total.re, 300.0);
        assert_relative_eq!(total.im, 0.0);
    }

    #[test]
    fn two_parallel_entries_combine_reciprocally() {
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(100.0, 0.0)),
            (PathLabel::nested(1, &[2]), z(100.0, 0.0)),
        ];
        let total = reduce(&entries).unwrap();
        assert_relative_eq!(total.re, 50.0, max_relative = 1.0e-12);
    }

    #[test]
    fn series_sum_is_order_independent() {
        let a = (PathLabel::series(), z(100.0, 0.0));
        let b = (PathLabel::series(), z(200.0, 0.0));
        let c = (PathLabel::series(), z(400.0, 0.0));
        let forward = reduce(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let backward = reduce(&[c, b, a]).unwrap();
        assert_eq!(forward, z(700.0, 0.0));
        assert_eq!(forward, backward);
    }

    #[test]
    fn parallel_then_series_contracts_inside_out() {
        // Two 100-ohm branches in parallel, in series with a third 100 ohms.
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(100.0, 0.0)),
            (PathLabel::nested(1, &[2]), z(100.0, 0.0)),
            (PathLabel::series(), z(100.0, 0.0)),
        ];
        let total = reduce(&entries).unwrap();
        assert_relative_eq!(total.re, 150.0, max_relative = 1.0e-12);
        assert_relative_eq!(total.im, 0.0);
    }

    #[test]
    fn nested_split_collapses_into_its_parent_branch() {
        // Branch 1 of the main split holds a nested pair, branch 2 a single
        // element: ((100 || 100) || 50) in series with 25.
        let entries = vec![
            (PathLabel::nested(1, &[1, 1]), z(100.0, 0.0)),
            (PathLabel::nested(1, &[1, 2]), z(100.0, 0.0)),
            (PathLabel::nested(1, &[2]), z(50.0, 0.0)),
            (PathLabel::series(), z(25.0, 0.0)),
        ];
        let total = reduce(&entries).unwrap();
        assert_relative_eq!(total.re, 50.0, max_relative = 1.0e-12);
    }

    #[test]
    fn series_run_inside_a_branch_merges_before_the_split() {
        // Branch 1 carries 100 + 100 in series; branch 2 carries 200.
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(100.0, 0.0)),
            (PathLabel::nested(1, &[1]), z(100.0, 0.0)),
            (PathLabel::nested(1, &[2]), z(200.0, 0.0)),
        ];
        let total = reduce(&entries).unwrap();
        assert_relative_eq!(total.re, 100.0, max_relative = 1.0e-12);
    }

    #[test]
    fn disjoint_main_wire_splits_reduce_independently() {
        // (100 || 100) in series with (300 || 300): group ids keep the two
        // splits apart even though all four labels share a length.
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(100.0, 0.0)),
            (PathLabel::nested(1, &[2]), z(100.0, 0.0)),
            (PathLabel::nested(2, &[1]), z(300.0, 0.0)),
            (PathLabel::nested(2, &[2]), z(300.0, 0.0)),
        ];
        let total = reduce(&entries).unwrap();
        assert_relative_eq!(total.re, 200.0, max_relative = 1.0e-12);
    }

    #[test]
    fn three_way_sibling_group_merges_at_once() {
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(300.0, 0.0)),
            (PathLabel::nested(1, &[2]), z(300.0, 0.0)),
            (PathLabel::nested(1, &[3]), z(300.0, 0.0)),
        ];
        let total = reduce(&entries).unwrap();
        assert_relative_eq!(total.re, 100.0, max_relative = 1.0e-12);
    }

    #[test]
    fn reactive_parallel_pair_keeps_complex_arithmetic() {
        // 100-ohm resistor in parallel with a -100j capacitor branch:
        // Z = (100 * -100j) / (100 - 100j) = 50 - 50j.
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(100.0, 0.0)),
            (PathLabel::nested(1, &[2]), z(0.0, -100.0)),
            (PathLabel::series(), z(10.0, 0.0)),
        ];
        let total = reduce(&entries).unwrap();
        assert_relative_eq!(total.re, 60.0, max_relative = 1.0e-12);
        assert_relative_eq!(total.im, -50.0, max_relative = 1.0e-12);
    }

    #[test]
    fn zero_impedance_branch_is_degenerate() {
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(0.0, 0.0)),
            (PathLabel::nested(1, &[2]), z(0.0, 0.0)),
        ];
        assert_eq!(reduce(&entries).unwrap_err(), CircuitError::DegenerateNetwork);
    }

    #[test]
    fn cancelling_reciprocals_are_degenerate() {
        // Ideal L in parallel with ideal C at resonance: 1/jX + 1/(-jX) = 0.
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(0.0, 50.0)),
            (PathLabel::nested(1, &[2]), z(0.0, -50.0)),
            (PathLabel::series(), z(10.0, 0.0)),
        ];
        assert_eq!(reduce(&entries).unwrap_err(), CircuitError::DegenerateNetwork);
    }

    #[test]
    fn unpairable_labels_stall_instead_of_looping() {
        // A lone nested entry can never meet the two series entries.
        let entries = vec![
            (PathLabel::nested(1, &[1]), z(100.0, 0.0)),
            (PathLabel::series(), z(100.0, 0.0)),
            (PathLabel::series(), z(100.0, 0.0)),
        ];
        assert_eq!(
            reduce(&entries).unwrap_err(),
            CircuitError::IrreducibleTopology
        );
    }
}
