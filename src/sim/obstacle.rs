//! Obstacle groups: composition, layout and off-screen recycling

use glam::DVec2;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::consts::{OBSTACLE_BASE_HEIGHT, OBSTACLE_BASE_WIDTH, OBSTACLE_START_INSET};

/// Obstacle size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Small,
    Medium,
    Big,
}

impl ObstacleKind {
    /// One of each, in spawn-pool order
    pub const ALL: [ObstacleKind; 3] =
        [ObstacleKind::Small, ObstacleKind::Medium, ObstacleKind::Big];

    /// Size multiplier over the small obstacle
    pub fn scale(self) -> f64 {
        match self {
            ObstacleKind::Small => 1.0,
            ObstacleKind::Medium => 1.5,
            ObstacleKind::Big => 1.8,
        }
    }

    pub fn width(self) -> f64 {
        OBSTACLE_BASE_WIDTH * self.scale()
    }

    pub fn height(self) -> f64 {
        OBSTACLE_BASE_HEIGHT * self.scale()
    }
}

/// A single obstacle inside a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSegment {
    pub kind: ObstacleKind,
    /// Top-left corner, assigned by [`ObstacleGroup::layout`]
    pub pos: DVec2,
}

impl ObstacleSegment {
    pub fn new(kind: ObstacleKind) -> Self {
        Self {
            kind,
            pos: DVec2::ZERO,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.kind.width()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.kind.height()
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width(), self.height())
    }
}

/// Pick `count` kinds from `pool` without replacement.
///
/// The order of the result is not meaningful; callers that care shuffle it
/// with [`shuffle_kinds`].
pub fn sample_kinds<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[ObstacleKind],
    count: usize,
) -> Vec<ObstacleKind> {
    pool.choose_multiple(rng, count).copied().collect()
}

/// Uniform in-place permutation (Fisher-Yates)
pub fn shuffle_kinds<R: Rng + ?Sized>(rng: &mut R, kinds: &mut [ObstacleKind]) {
    kinds.shuffle(rng);
}

/// A row of abutting obstacles that scrolls left and respawns off the right edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleGroup {
    /// Left edge of the first segment
    pub x: f64,
    /// Pushed in by the game on every draw
    pub speed: f64,
    pub ground_y: f64,
    pub canvas_width: f64,
    /// Respawn offset past the right edge is drawn from [0, spawn_jitter)
    pub spawn_jitter: f64,
    pub segments: Vec<ObstacleSegment>,
}

impl ObstacleGroup {
    /// Initial group: one of each kind, just inside the right edge
    pub fn new(canvas_width: f64, ground_y: f64, spawn_jitter: f64) -> Self {
        let mut group = Self {
            x: canvas_width - OBSTACLE_START_INSET,
            speed: 0.0,
            ground_y,
            canvas_width,
            spawn_jitter,
            segments: ObstacleKind::ALL.into_iter().map(ObstacleSegment::new).collect(),
        };
        group.layout();
        group
    }

    /// Sum of segment widths
    pub fn total_width(&self) -> f64 {
        self.segments.iter().map(ObstacleSegment::width).sum()
    }

    pub fn kinds(&self) -> Vec<ObstacleKind> {
        self.segments.iter().map(|s| s.kind).collect()
    }

    /// Place segments left to right from `x`, bottoms on the ground line
    pub fn layout(&mut self) {
        let mut next_x = self.x;
        for segment in &mut self.segments {
            segment.pos = DVec2::new(next_x, self.ground_y - segment.height());
            next_x += segment.width();
        }
    }

    /// Scroll one tick. Returns true when the group was recycled.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.x -= self.speed;
        if self.x < -self.total_width() {
            self.respawn(rng);
            return true;
        }
        false
    }

    /// Replace the group with a fresh random composition past the right edge
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.x = self.canvas_width + rng.random::<f64>() * self.spawn_jitter;

        let count = rng.random_range(1..=ObstacleKind::ALL.len());
        let mut kinds = sample_kinds(rng, &ObstacleKind::ALL, count);
        shuffle_kinds(rng, &mut kinds);

        self.segments = kinds.into_iter().map(ObstacleSegment::new).collect();

        log::debug!(
            "Obstacles respawned at x={:.1}: {:?}",
            self.x,
            self.kinds()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    const GROUND: f64 = 268.0;

    fn single_small_group() -> ObstacleGroup {
        let mut group = ObstacleGroup::new(600.0, GROUND, 400.0);
        group.segments = vec![ObstacleSegment::new(ObstacleKind::Small)];
        group.speed = 1.4;
        group
    }

    #[test]
    fn test_kind_sizes() {
        assert_eq!((ObstacleKind::Small.width(), ObstacleKind::Small.height()), (16.0, 32.0));
        assert_eq!((ObstacleKind::Medium.width(), ObstacleKind::Medium.height()), (24.0, 48.0));
        assert!((ObstacleKind::Big.width() - 28.8).abs() < 1e-9);
        assert!((ObstacleKind::Big.height() - 57.6).abs() < 1e-9);
    }

    #[test]
    fn test_initial_group() {
        let group = ObstacleGroup::new(600.0, GROUND, 400.0);
        assert_eq!(group.x, 500.0);
        assert_eq!(group.kinds(), ObstacleKind::ALL.to_vec());
        assert!((group.total_width() - 68.8).abs() < 1e-9);
    }

    #[test]
    fn test_layout_abuts_segments_on_ground() {
        let mut group = ObstacleGroup::new(600.0, GROUND, 400.0);
        group.x = 123.5;
        group.layout();

        assert_eq!(group.segments[0].pos.x, 123.5);
        for pair in group.segments.windows(2) {
            assert_eq!(pair[1].pos.x, pair[0].pos.x + pair[0].width());
        }
        for segment in &group.segments {
            assert!((segment.pos.y + segment.height() - GROUND).abs() < 1e-9);
        }
    }

    #[test]
    fn test_respawn_after_369_ticks() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut group = single_small_group();

        for tick in 1..369 {
            assert!(!group.update(&mut rng), "respawned early on tick {tick}");
        }
        assert!(group.update(&mut rng));
        assert!(group.x >= 600.0 && group.x < 1000.0);
        assert!((1..=3).contains(&group.segments.len()));
    }

    #[test]
    fn test_zero_speed_never_respawns() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut group = ObstacleGroup::new(600.0, GROUND, 400.0);
        for _ in 0..1000 {
            assert!(!group.update(&mut rng));
        }
        assert_eq!(group.x, 500.0);
    }

    #[test]
    fn test_zero_jitter_spawns_at_edge() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut group = ObstacleGroup::new(600.0, GROUND, 0.0);
        group.respawn(&mut rng);
        assert_eq!(group.x, 600.0);
    }

    #[test]
    fn test_every_count_eventually_drawn() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut group = ObstacleGroup::new(600.0, GROUND, 400.0);
        let mut counts = HashSet::new();
        for _ in 0..200 {
            group.respawn(&mut rng);
            counts.insert(group.segments.len());
        }
        assert_eq!(counts, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_sample_and_shuffle_are_reproducible() {
        let mut a = Pcg32::seed_from_u64(2024);
        let mut b = Pcg32::seed_from_u64(2024);

        let mut left = sample_kinds(&mut a, &ObstacleKind::ALL, 2);
        let mut right = sample_kinds(&mut b, &ObstacleKind::ALL, 2);
        assert_eq!(left, right);

        shuffle_kinds(&mut a, &mut left);
        shuffle_kinds(&mut b, &mut right);
        assert_eq!(left, right);
    }

    proptest! {
        #[test]
        fn prop_sample_is_distinct_subset(seed in any::<u64>(), count in 0usize..=3) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let picked = sample_kinds(&mut rng, &ObstacleKind::ALL, count);
            prop_assert_eq!(picked.len(), count);
            let unique: HashSet<_> = picked.iter().copied().collect();
            prop_assert_eq!(unique.len(), count);
        }

        #[test]
        fn prop_shuffle_is_permutation(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut kinds = ObstacleKind::ALL.to_vec();
            shuffle_kinds(&mut rng, &mut kinds);
            let unique: HashSet<_> = kinds.iter().copied().collect();
            prop_assert_eq!(unique.len(), 3);
        }

        #[test]
        fn prop_respawn_composition(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut group = ObstacleGroup::new(600.0, GROUND, 400.0);
            group.respawn(&mut rng);

            prop_assert!((1..=3).contains(&group.segments.len()));
            prop_assert!(group.x >= 600.0 && group.x < 1000.0);

            let kinds = group.kinds();
            let unique: HashSet<_> = kinds.iter().copied().collect();
            prop_assert_eq!(unique.len(), kinds.len());

            let expected: f64 = kinds.iter().map(|k| k.width()).sum();
            prop_assert!((group.total_width() - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_respawn_exactly_past_total_width(seed in any::<u64>(), speed in 0.5f64..20.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut group = ObstacleGroup::new(600.0, GROUND, 400.0);
            group.speed = speed;
            for _ in 0..2000 {
                let width_before = group.total_width();
                let x_after_scroll = group.x - speed;
                let respawned = group.update(&mut rng);
                prop_assert_eq!(respawned, x_after_scroll < -width_before);
                if respawned {
                    prop_assert!(group.x >= 600.0);
                }
            }
        }
    }
}
