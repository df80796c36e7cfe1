//! Append-only position history per body
//!
//! Entry `k` of a track is the body's position after step `k + 1`. The
//! buffer is filled by [`Simulation`](super::engine::Simulation) and read by
//! renderers; nothing outside this crate can append to it.

use super::states::NVec3;

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryBuffer {
    tracks: Vec<Vec<NVec3>>, // one track per body
    dt: f64,                 // time between entries
}

/// Axis-aligned box around recorded positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: NVec3,
    pub max: NVec3,
}

impl Bounds {
    pub fn center(&self) -> NVec3 {
        0.5 * (self.min + self.max)
    }

    pub fn half_range(&self) -> NVec3 {
        0.5 * (self.max - self.min)
    }

    /// Grow to include `p`
    fn include(&mut self, p: &NVec3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }
}

impl TrajectoryBuffer {
    pub(crate) fn new(body_count: usize, dt: f64) -> Self {
        Self {
            tracks: vec![Vec::new(); body_count],
            dt,
        }
    }

    pub(crate) fn reserve(&mut self, steps: usize) {
        for track in &mut self.tracks {
            track.reserve(steps);
        }
    }

    /// Append one position per body, in body order
    pub(crate) fn push_snapshot<'a>(&mut self, positions: impl IntoIterator<Item = &'a NVec3>) {
        for (track, p) in self.tracks.iter_mut().zip(positions) {
            track.push(*p);
        }
    }

    pub fn body_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of completed steps recorded
    pub fn len(&self) -> usize {
        self.tracks.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Simulation time of entry `step`
    pub fn time_at(&self, step: usize) -> f64 {
        (step as f64 + 1.0) * self.dt
    }

    /// Full history of one body
    pub fn positions(&self, body: usize) -> Option<&[NVec3]> {
        self.tracks.get(body).map(Vec::as_slice)
    }

    /// Positions of all bodies at one step
    pub fn snapshot(&self, step: usize) -> Option<Vec<NVec3>> {
        self.tracks.iter().map(|t| t.get(step).copied()).collect()
    }

    pub fn tracks(&self) -> impl Iterator<Item = &[NVec3]> {
        self.tracks.iter().map(Vec::as_slice)
    }

    /// Bounds of every finite position recorded so far
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds_until(self.len())
    }

    /// Bounds of the first `len` entries of every track, skipping NaN/Inf
    pub fn bounds_until(&self, len: usize) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;

        for track in &self.tracks {
            for p in track.iter().take(len).filter(|p| p.iter().all(|c| c.is_finite())) {
                bounds = Some(match bounds {
                    Some(mut b) => {
                        b.include(p);
                        b
                    }
                    None => Bounds { min: *p, max: *p },
                });
            }
        }
        bounds
    }

    /// First `(step, body)` whose recorded position is NaN/Inf
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        (0..self.len()).find_map(|step| {
            self.tracks
                .iter()
                .position(|t| !t[step].iter().all(|c| c.is_finite()))
                .map(|body| (step, body))
        })
    }
}
