//! shade lookups for wildlife – built on the window's vegetation query

use bevy::prelude::*;

use crate::chunk_stream::ShadowAnchor;
use crate::constants::{BUSH_SHADOW_RADIUS, SHADOW_EDGE_FACTOR, TREE_SHADOW_RADIUS};
use crate::vegetation::VegetationKind;

#[inline]
pub fn shadow_radius(kind: VegetationKind) -> f32 {
    match kind {
        VegetationKind::Tree => TREE_SHADOW_RADIUS,
        VegetationKind::Bush => BUSH_SHADOW_RADIUS,
    }
}

/// true if `pos` lies inside the shade circle of any anchor
pub fn is_in_shadow(pos: Vec3, anchors: &[ShadowAnchor]) -> bool {
    anchors
        .iter()
        .any(|a| pos.distance(a.position) <= shadow_radius(a.kind))
}

/// Closest point just inside the nearest anchor's shade, on the side facing
/// `pos`.  With no anchors `pos` itself is returned.
pub fn find_nearest_shadow(pos: Vec3, anchors: &[ShadowAnchor]) -> Vec3 {
    let Some(nearest) = anchors.iter().min_by(|a, b| {
        pos.distance_squared(a.position)
            .total_cmp(&pos.distance_squared(b.position))
    }) else {
        return pos;
    };

    // standing right on the anchor: any direction will do
    let dir = (pos - nearest.position).try_normalize().unwrap_or(Vec3::X);
    nearest.position + dir * shadow_radius(nearest.kind) * SHADOW_EDGE_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(x: f32, z: f32) -> ShadowAnchor {
        ShadowAnchor {
            position: Vec3::new(x, 0.0, z),
            kind: VegetationKind::Tree,
        }
    }

    fn bush(x: f32, z: f32) -> ShadowAnchor {
        ShadowAnchor {
            position: Vec3::new(x, 0.0, z),
            kind: VegetationKind::Bush,
        }
    }

    #[test]
    fn shade_depends_on_kind() {
        let anchors = [tree(0.0, 0.0), bush(20.0, 0.0)];
        assert!(is_in_shadow(Vec3::new(2.5, 0.0, 0.0), &anchors));
        assert!(is_in_shadow(Vec3::new(21.5, 0.0, 0.0), &anchors));
        assert!(!is_in_shadow(Vec3::new(22.0, 0.0, 0.0), &anchors));
        assert!(!is_in_shadow(Vec3::new(10.0, 0.0, 0.0), &anchors));
        assert!(!is_in_shadow(Vec3::ZERO, &[]));
    }

    #[test]
    fn nearest_shadow_sits_inside_the_edge() {
        let anchors = [tree(0.0, 0.0), bush(30.0, 0.0)];
        let spot = find_nearest_shadow(Vec3::new(10.0, 0.0, 0.0), &anchors);
        assert!((spot - Vec3::new(2.7, 0.0, 0.0)).length() < 1e-5);
        assert!(is_in_shadow(spot, &anchors));

        let spot = find_nearest_shadow(Vec3::new(27.0, 0.0, 0.0), &anchors);
        assert!((spot - Vec3::new(28.65, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn no_anchors_means_stay_put() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(find_nearest_shadow(p, &[]), p);
    }

    #[test]
    fn standing_on_an_anchor_still_yields_a_shaded_spot() {
        let anchors = [bush(4.0, 4.0)];
        let spot = find_nearest_shadow(Vec3::new(4.0, 0.0, 4.0), &anchors);
        assert!(is_in_shadow(spot, &anchors));
    }
}
