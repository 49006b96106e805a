//! Obstacle field, moving barrier, and spatial proximity queries.
//!
//! A track is an ordered sequence of circular obstacles, read-only during a
//! generation except for at most one designated barrier slot whose position
//! is a pure function of ticks since generation start. Proximity queries go
//! through a k-d tree prefilter followed by an exact distance check; this is
//! a pure optimization and must always agree with the exhaustive scan in
//! [`Track::any_within`].

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};
use serde::{Deserialize, Serialize};

/// A static circular obstacle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center x coordinate.
    pub x: f32,
    /// Center y coordinate.
    pub y: f32,
    /// Obstacle radius.
    pub radius: f32,
}

/// A moving obstacle whose position is a pure function of the generation
/// clock: `pos(t) = origin + amplitude * sin(2πt / period_ticks)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barrier {
    /// Index of the obstacle slot this barrier writes into.
    pub slot: usize,
    /// Center of the oscillation.
    pub origin: [f32; 2],
    /// Oscillation half-extent along each axis.
    pub amplitude: [f32; 2],
    /// Oscillation period in ticks.
    pub period_ticks: u64,
}

impl Barrier {
    /// Barrier position at `ticks` ticks since generation start.
    pub fn position(&self, ticks: u64) -> [f32; 2] {
        let phase = ticks as f32 / self.period_ticks as f32 * std::f32::consts::TAU;
        [
            self.origin[0] + self.amplitude[0] * phase.sin(),
            self.origin[1] + self.amplitude[1] * phase.sin(),
        ]
    }
}

/// The obstacle field cars drive through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    /// All obstacles, barrier slot included. Order carries no meaning.
    pub obstacles: Vec<Obstacle>,
    /// At most one moving obstacle.
    pub barrier: Option<Barrier>,
}

type Tree2D = KdTree<f32, usize, [f32; 2]>;

/// Spatial index over a track's current obstacle positions.
///
/// Built fresh each tick so the barrier's current position is always
/// reflected. Queries agree exactly with [`Track::any_within`].
pub struct TrackIndex {
    tree: Tree2D,
    max_radius: f32,
    empty: bool,
}

impl Track {
    /// Creates an empty track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a ring of `count` evenly spaced obstacles of radius
    /// `obstacle_radius` around `(cx, cy)`.
    pub fn push_ring(&mut self, cx: f32, cy: f32, ring_radius: f32, count: usize, obstacle_radius: f32) {
        for i in 0..count {
            let a = i as f32 / count as f32 * std::f32::consts::TAU;
            self.obstacles.push(Obstacle {
                x: cx + ring_radius * a.cos(),
                y: cy + ring_radius * a.sin(),
                radius: obstacle_radius,
            });
        }
    }

    /// Writes the barrier's position for the given generation clock into its
    /// obstacle slot. No-op without a barrier or with an out-of-range slot.
    pub fn advance_barrier(&mut self, ticks_in_generation: u64) {
        if let Some(barrier) = &self.barrier {
            let [x, y] = barrier.position(ticks_in_generation);
            if let Some(slot) = self.obstacles.get_mut(barrier.slot) {
                slot.x = x;
                slot.y = y;
            }
        }
    }

    /// Exhaustive proximity scan: true if any obstacle center lies within
    /// `range + obstacle.radius` of `(x, y)`.
    ///
    /// This is the behavioral reference for [`TrackIndex::any_within`];
    /// short-circuits on the first hit, which obstacle hit is irrelevant.
    pub fn any_within(&self, x: f32, y: f32, range: f32) -> bool {
        self.obstacles.iter().any(|o| {
            let dx = x - o.x;
            let dy = y - o.y;
            let reach = range + o.radius;
            dx * dx + dy * dy < reach * reach
        })
    }

    /// Builds a spatial index over the current obstacle positions.
    pub fn index(&self) -> Result<TrackIndex, KdTreeError> {
        let mut tree = KdTree::with_capacity(2, self.obstacles.len().max(1));
        let mut max_radius = 0.0f32;
        for (i, o) in self.obstacles.iter().enumerate() {
            tree.add([o.x, o.y], i)?;
            max_radius = max_radius.max(o.radius);
        }
        Ok(TrackIndex {
            tree,
            max_radius,
            empty: self.obstacles.is_empty(),
        })
    }
}

impl TrackIndex {
    /// Indexed version of [`Track::any_within`]: coarse k-d tree query with
    /// radius `range + max_radius`, then an exact per-candidate check.
    pub fn any_within(&self, track: &Track, x: f32, y: f32, range: f32) -> bool {
        if self.empty {
            return false;
        }

        let coarse = range + self.max_radius;
        let candidates = self
            .tree
            .within(&[x, y], coarse * coarse, &squared_euclidean)
            .unwrap_or_else(|e| panic!("obstacle proximity query failed: {e:?}"));

        candidates.iter().any(|&(dist_sq, &i)| {
            let reach = range + track.obstacles[i].radius;
            dist_sq < reach * reach
        })
    }
}
