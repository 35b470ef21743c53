//! Random placement inside the playfield margins.

use tracing::debug;

use cc_core::{Point, SimRng};

use crate::{WorldError, WorldResult};

/// Which population is being placed.  Each kind draws from its own RNG
/// stream, so changing the agent count does not move the targets for a
/// given seed (and vice versa).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnKind {
    Agent,
    Target,
}

impl SpawnKind {
    fn stream(self) -> u64 {
        match self {
            SpawnKind::Agent  => 0,
            SpawnKind::Target => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpawnKind::Agent  => "agent",
            SpawnKind::Target => "target",
        }
    }
}

/// Rectangle in which entities may spawn.
///
/// Coordinates are drawn uniformly from `[margin, extent - 2 * margin)` on
/// each axis: one margin of clearance at the near edge, two at the far edge
/// so that a sprite drawn to the right/below its anchor stays on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnArea {
    pub width:  i32,
    pub height: i32,
    pub margin: i32,
}

impl SpawnArea {
    /// Validate and construct.  Each extent must exceed `3 * margin`.
    pub fn new(width: i32, height: i32, margin: i32) -> WorldResult<Self> {
        for extent in [width, height] {
            if margin < 0 || i64::from(extent) <= 3 * i64::from(margin) {
                return Err(WorldError::SpawnArea { extent, margin });
            }
        }
        Ok(Self { width, height, margin })
    }

    /// Draw one position.
    pub fn sample(&self, rng: &mut SimRng) -> Point {
        let x = rng.gen_range(self.margin..self.width - 2 * self.margin);
        let y = rng.gen_range(self.margin..self.height - 2 * self.margin);
        Point::new(x, y)
    }

    /// Draw `count` positions.
    pub fn sample_n(&self, count: usize, rng: &mut SimRng) -> Vec<Point> {
        (0..count).map(|_| self.sample(rng)).collect()
    }

    /// Place `count` entities of `kind` deterministically from `seed`.
    pub fn spawn(&self, kind: SpawnKind, count: usize, seed: u64) -> Vec<Point> {
        let mut rng = SimRng::stream(seed, kind.stream());
        let points = self.sample_n(count, &mut rng);
        for (index, p) in points.iter().enumerate() {
            debug!(kind = kind.as_str(), index, position = %p, "spawned");
        }
        points
    }

    /// `true` if `p` could have been produced by [`sample`](Self::sample).
    pub fn contains(&self, p: Point) -> bool {
        (self.margin..self.width - 2 * self.margin).contains(&p.x)
            && (self.margin..self.height - 2 * self.margin).contains(&p.y)
    }
}
