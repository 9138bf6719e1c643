//! Impact resolution
//!
//! Matches a consumed projectile impact against the live targets in world
//! space. Positional tolerances gate candidacy; the survivor with the
//! smallest weighted Manhattan distance wins. Exact ties go to the target
//! found first in enumeration order.

use glam::Vec3;

use super::entity::{Impact, Target};

/// Candidacy tolerances per axis (lateral, vertical, depth)
const TOLERANCE: Vec3 = Vec3::new(0.22, 0.20, 0.55);

/// Distance weights: lateral and vertical precision matter more than depth
const WEIGHT: Vec3 = Vec3::new(1.8, 1.2, 1.0);

/// Find the best-matching live target for an impact point.
///
/// Returns the index into `targets` of the winner, or `None` for a miss.
/// An empty or all-ineligible target list is a deterministic miss, never a
/// fault. The strict `<` comparison makes the first-enumerated target win
/// exact ties.
pub fn resolve(impact: &Impact, targets: &[Target]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_score = f32::INFINITY;

    for (index, target) in targets.iter().enumerate() {
        if !target.targetable() {
            continue;
        }

        let delta = (target.pos - impact.point).abs();
        if delta.cmpgt(TOLERANCE).any() {
            continue;
        }

        let score = delta.dot(WEIGHT);
        if score < best_score {
            best = Some(index);
            best_score = score;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::TargetKind;

    fn impact_at(x: f32, y: f32, z: f32) -> Impact {
        Impact {
            point: Vec3::new(x, y, z),
            score_multiplier: 1.0,
        }
    }

    fn target_at(id: u32, x: f32, y: f32, z: f32) -> Target {
        Target::new(id, TargetKind::Human, false, Vec3::new(x, y, z), 0.8)
    }

    #[test]
    fn test_empty_target_list_is_miss() {
        assert_eq!(resolve(&impact_at(0.0, 0.0, 2.5), &[]), None);
    }

    #[test]
    fn test_within_tolerance_hits() {
        let targets = vec![target_at(1, 0.1, 0.05, 2.6)];
        assert_eq!(resolve(&impact_at(0.0, 0.0, 2.5), &targets), Some(0));
    }

    #[test]
    fn test_each_axis_tolerance_excludes() {
        let impact = impact_at(0.0, 0.0, 2.5);
        let too_wide = vec![target_at(1, 0.23, 0.0, 2.5)];
        let too_high = vec![target_at(1, 0.0, 0.21, 2.5)];
        let too_deep = vec![target_at(1, 0.0, 0.0, 3.1)];
        assert_eq!(resolve(&impact, &too_wide), None);
        assert_eq!(resolve(&impact, &too_high), None);
        assert_eq!(resolve(&impact, &too_deep), None);
    }

    #[test]
    fn test_nearest_by_weighted_distance_wins() {
        let impact = impact_at(0.0, 0.0, 2.5);
        // Second target is laterally closer; lateral error is weighted 1.8x
        // so it beats the first despite a slightly larger depth error.
        let targets = vec![
            target_at(1, 0.15, 0.0, 2.5), // score 0.27
            target_at(2, 0.05, 0.0, 2.6), // score 0.19
        ];
        assert_eq!(resolve(&impact, &targets), Some(1));
    }

    #[test]
    fn test_exact_tie_breaks_by_enumeration_order() {
        let impact = impact_at(0.0, 0.0, 2.5);
        // Mirror images of each other: identical weighted distance
        let targets = vec![target_at(1, 0.1, 0.0, 2.5), target_at(2, -0.1, 0.0, 2.5)];
        for _ in 0..100 {
            assert_eq!(resolve(&impact, &targets), Some(0));
        }
    }

    #[test]
    fn test_hit_targets_are_ineligible() {
        let mut near = target_at(1, 0.0, 0.0, 2.5);
        near.mark_hit();
        let targets = vec![near, target_at(2, 0.1, 0.0, 2.5)];
        assert_eq!(resolve(&impact_at(0.0, 0.0, 2.5), &targets), Some(1));
    }

    #[test]
    fn test_all_ineligible_is_miss() {
        let mut a = target_at(1, 0.0, 0.0, 2.5);
        let mut b = target_at(2, 0.1, 0.0, 2.5);
        a.mark_hit();
        b.mark_hit();
        assert_eq!(resolve(&impact_at(0.0, 0.0, 2.5), &[a, b]), None);
    }
}
