//! Piecewise-curve trajectories and cyclic playback
//!
//! Hazard paths are precomputed once at level setup: each curve segment is
//! sampled at a fixed parametric step into a dense point list, which is then
//! replayed forever by index. Sampling is half-open; the point at `t_end` is
//! never emitted.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::bezier::sample_curve;

/// One piece of a hazard path: a control quadruple and the parameter range
/// to sample it over. Ranges past t = 1 extrapolate the same polynomial.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurveSegment {
    pub control: [Vec2; 4],
    pub t_start: f32,
    pub t_end: f32,
    pub t_step: f32,
}

/// Sample `segments` in order into a world-space point sequence.
///
/// Each segment contributes samples at `t_start + i * t_step` for
/// `i in 0..(t_end - t_start)/t_step`, excluding `t_end` itself. Curve space
/// is 2D: x runs along the world z axis, y is height. `origin` places the
/// whole path in the world.
pub fn build_trajectory(segments: &[CurveSegment], origin: Vec3) -> Vec<Vec3> {
    let mut points = Vec::new();
    for segment in segments {
        let samples = ((segment.t_end - segment.t_start) / segment.t_step).round() as usize;
        for i in 0..samples {
            let t = segment.t_start + i as f32 * segment.t_step;
            let p = sample_curve(&segment.control, t);
            points.push(Vec3::new(origin.x, p.y + origin.y, p.x + origin.z));
        }
    }
    points
}

/// Cyclic playback over a precomputed trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryPlayer {
    points: Vec<Vec3>,
    index: usize,
}

impl TrajectoryPlayer {
    /// Panics if `points` is empty; an empty trajectory is a level
    /// configuration error, not a runtime condition.
    pub fn new(points: Vec<Vec3>) -> Self {
        assert!(
            !points.is_empty(),
            "trajectory must contain at least one point"
        );
        Self { points, index: 0 }
    }

    /// Report the current point, then advance the cyclic index.
    pub fn tick(&mut self) -> Vec3 {
        let point = self.points[self.index];
        self.index = (self.index + 1) % self.points.len();
        point
    }

    /// The point `tick` will report next, without advancing.
    pub fn current(&self) -> Vec3 {
        self.points[self.index]
    }

    /// Rewind playback to the first point.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn segment(control: [Vec2; 4], t_end: f32) -> CurveSegment {
        CurveSegment {
            control,
            t_start: 0.0,
            t_end,
            t_step: 0.01,
        }
    }

    fn arch() -> [Vec2; 4] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(8.0, 4.0),
            Vec2::new(17.0, 2.0),
            Vec2::new(30.0, -18.0),
        ]
    }

    #[test]
    fn sampling_is_half_open() {
        let points = build_trajectory(&[segment(arch(), 1.0)], Vec3::ZERO);
        assert_eq!(points.len(), 100);
        // First sample is the curve start (curve x lands on world z).
        assert_eq!(points[0], Vec3::new(0.0, 0.0, 0.0));
        // The closing point B(1) = (30, -18) is excluded.
        let closing = Vec3::new(0.0, -18.0, 30.0);
        assert!(points.iter().all(|&p| p != closing));
    }

    #[test]
    fn segments_concatenate_in_order() {
        let second = [
            Vec2::new(30.0, -18.0),
            Vec2::new(36.0, -10.0),
            Vec2::new(47.0, -5.0),
            Vec2::new(65.0, -24.0),
        ];
        let points = build_trajectory(&[segment(arch(), 1.0), segment(second, 2.0)], Vec3::ZERO);
        assert_eq!(points.len(), 100 + 200);
        // The second segment opens exactly at its own P0.
        assert_eq!(points[100], Vec3::new(0.0, -18.0, 30.0));
    }

    #[test]
    fn origin_lifts_curve_into_world_space() {
        // A degenerate point curve shows the axis mapping directly.
        let dot = [Vec2::new(2.0, 3.0); 4];
        let points = build_trajectory(&[segment(dot, 1.0)], Vec3::new(1.0, 65.0, 83.0));
        let lifted = Vec3::new(1.0, 68.0, 85.0);
        assert!(points.iter().all(|&p| (p - lifted).length() < 1e-4));
    }

    #[test]
    fn playback_cycles_with_the_trajectory_period() {
        let points = build_trajectory(&[segment(arch(), 1.0)], Vec3::ZERO);
        let period = points.len();
        let mut player = TrajectoryPlayer::new(points);

        let first = player.tick();
        for _ in 1..period {
            player.tick();
        }
        assert_eq!(player.tick(), first);
    }

    #[test]
    fn reset_rewinds_playback() {
        let mut player = TrajectoryPlayer::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ]);
        let first = player.tick();
        player.tick();
        player.reset();
        assert_eq!(player.index(), 0);
        assert_eq!(player.tick(), first);
    }

    #[test]
    #[should_panic(expected = "at least one point")]
    fn empty_trajectory_is_a_fatal_configuration_error() {
        TrajectoryPlayer::new(Vec::new());
    }

    proptest! {
        #[test]
        fn index_stays_in_range(ticks in 0usize..2000) {
            let points = build_trajectory(&[segment(arch(), 1.0)], Vec3::ZERO);
            let mut player = TrajectoryPlayer::new(points);
            for _ in 0..ticks {
                player.tick();
            }
            prop_assert!(player.index() < player.len());
        }
    }
}
