//! Ray-sphere collision predicates
//!
//! Everything that can touch something else goes through one primitive: a
//! closest-approach ray/sphere test taking an unnormalized (possibly zero)
//! direction and a squared radius. Platform edge checks cast short rays
//! along the movement axis; hazard hits use a zero direction, which
//! degenerates the test to point-in-sphere containment.

use glam::Vec3;

use super::level::Platform;

/// Ray/sphere intersection, inclusive at the sphere surface.
///
/// `dir` need not be normalized. A sphere strictly behind the ray origin
/// does not count.
pub fn ray_intersects_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius_sq: f32) -> bool {
    let to_center = center - origin;
    let tca = to_center.dot(dir);
    let d_sq = to_center.length_squared() - tca * tca;
    if d_sq > radius_sq {
        return false;
    }
    tca + (radius_sq - d_sq).sqrt() >= 0.0
}

/// Does the player horizontally overlap `platform` within the edge
/// tolerance? One ray forward and one backward along the movement axis,
/// against the platform's shrunken bounding sphere; either hit counts.
/// Vertical snapping is the landing code's job, not this predicate's.
pub fn standing_on(
    player_pos: Vec3,
    platform: &Platform,
    edge_tolerance: f32,
    shrink: f32,
) -> bool {
    let radius_sq = (platform.scale * platform.mesh_radius * shrink).powi(2);
    let forward = Vec3::new(0.0, 0.0, edge_tolerance);
    ray_intersects_sphere(player_pos, forward, platform.position, radius_sq)
        || ray_intersects_sphere(player_pos, -forward, platform.position, radius_sq)
}

/// Has a hazard reached the player? `tolerance` scales the squared player
/// radius; values above 1 enlarge the hit box.
pub fn hazard_hit(hazard_pos: Vec3, player_pos: Vec3, player_radius: f32, tolerance: f32) -> bool {
    let radius_sq = player_radius * player_radius * tolerance;
    ray_intersects_sphere(hazard_pos, Vec3::ZERO, player_pos, radius_sq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn platform_at(position: Vec3) -> Platform {
        Platform::new(position)
    }

    // Platform::new gives scale 0.125, mesh radius 80; with the 0.95 shrink
    // the effective sphere radius is 9.5.
    const EFFECTIVE_RADIUS: f32 = 9.5;

    #[test]
    fn surface_contact_counts_along_either_direction() {
        let platform = platform_at(Vec3::new(0.0, 60.0, 80.0));
        let ahead = platform.position + Vec3::new(0.0, 0.0, EFFECTIVE_RADIUS);
        let behind = platform.position - Vec3::new(0.0, 0.0, EFFECTIVE_RADIUS);
        assert!(standing_on(ahead, &platform, 0.45, 0.95));
        assert!(standing_on(behind, &platform, 0.45, 0.95));
    }

    #[test]
    fn far_off_axis_position_misses() {
        let platform = platform_at(Vec3::new(0.0, 60.0, 80.0));
        let sideways = platform.position + Vec3::new(100.0, 0.0, 0.0);
        assert!(!standing_on(sideways, &platform, 0.45, 0.95));
    }

    #[test]
    fn sphere_behind_the_ray_does_not_count() {
        let hit = ray_intersects_sphere(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -10.0),
            4.0,
        );
        assert!(!hit);
    }

    #[test]
    fn hazard_boundary_is_inclusive() {
        // radius 2, tolerance 1: hit sphere radius is exactly 2.
        let player = Vec3::new(0.0, 10.0, 0.0);
        let on_boundary = player + Vec3::new(2.0, 0.0, 0.0);
        assert!(hazard_hit(on_boundary, player, 2.0, 1.0));
        let outside = player + Vec3::new(2.1, 0.0, 0.0);
        assert!(!hazard_hit(outside, player, 2.0, 1.0));
    }

    #[test]
    fn tolerance_above_one_enlarges_the_hit_box() {
        let player = Vec3::ZERO;
        let hazard = Vec3::new(2.5, 0.0, 0.0);
        assert!(!hazard_hit(hazard, player, 2.0, 1.0));
        assert!(hazard_hit(hazard, player, 2.0, 2.0));
    }

    proptest! {
        #[test]
        fn larger_tolerance_never_loses_hits(
            dist in 0.0f32..10.0,
            tolerance in 0.1f32..4.0,
            extra in 0.0f32..2.0,
        ) {
            let player = Vec3::ZERO;
            let hazard = Vec3::new(dist, 0.0, 0.0);
            if hazard_hit(hazard, player, 2.0, tolerance) {
                prop_assert!(hazard_hit(hazard, player, 2.0, tolerance + extra));
            }
        }
    }
}
