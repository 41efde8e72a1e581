//! Pairwise AABB collision tests for box sprites.
//!
//! Platforms here are individual entities rather than a tile grid, so
//! collision is an entity-vs-entity overlap test followed by a push-out along
//! the **minimum-penetration axis**: compute the overlap depth on each axis,
//! move the box out along the shallower one, and zero that velocity component.
//! A falling character that clips a tile corner is ejected up by the sliver of
//! vertical overlap instead of being flung sideways by the much deeper
//! horizontal one.

#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center_x: f32,
    pub center_y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Aabb {
    pub fn from_center_size(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            center_x,
            center_y,
            half_w: width * 0.5,
            half_h: height * 0.5,
        }
    }

    /// Per-axis overlap depths against `other`, or `None` when the boxes are
    /// apart. Touching edges do not count as overlap.
    pub fn overlap(&self, other: &Aabb) -> Option<Penetration> {
        let dx = self.center_x - other.center_x;
        let dy = self.center_y - other.center_y;
        let x = self.half_w + other.half_w - dx.abs();
        let y = self.half_h + other.half_h - dy.abs();
        if x <= 0.0 || y <= 0.0 {
            return None;
        }
        Some(Penetration { x, y })
    }
}

/// Overlap depths of two intersecting boxes. Both components are positive.
#[derive(Debug, Clone, Copy)]
pub struct Penetration {
    pub x: f32,
    pub y: f32,
}

/// Signed positional correction that moves the first box out of the second
/// along a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Separation {
    PushX(f32),
    PushY(f32),
}

/// Smallest single-axis correction separating `a` from `b`, if they overlap.
/// The push sign follows the center delta; equal penetrations resolve
/// vertically, so an exact corner contact still counts as a landing.
pub fn min_separation(a: &Aabb, b: &Aabb) -> Option<Separation> {
    let pen = a.overlap(b)?;
    if pen.y <= pen.x {
        let push = if a.center_y >= b.center_y { pen.y } else { -pen.y };
        Some(Separation::PushY(push))
    } else {
        let push = if a.center_x >= b.center_x { pen.x } else { -pen.x };
        Some(Separation::PushX(push))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn boxes_apart_do_not_overlap() {
        let a = Aabb::from_center_size(0.0, 0.0, 1.0, 1.0);
        let b = Aabb::from_center_size(3.0, 0.0, 1.0, 1.0);
        assert!(a.overlap(&b).is_none());
        assert!(min_separation(&a, &b).is_none());
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::from_center_size(0.0, 0.0, 1.0, 1.0);
        let b = Aabb::from_center_size(1.0, 0.0, 1.0, 1.0);
        assert!(a.overlap(&b).is_none());
    }

    #[test]
    fn overlap_reports_per_axis_depths() {
        // 0.9 box resting 0.1 into a 1.0 box, offset 0.45 horizontally.
        let player = Aabb::from_center_size(0.45, 0.85, 0.9, 0.9);
        let platform = Aabb::from_center_size(0.0, 0.0, 1.0, 1.0);

        let pen = player.overlap(&platform).expect("boxes overlap");
        assert!((pen.y - 0.1).abs() < EPS);
        assert!((pen.x - 0.5).abs() < EPS);
    }

    #[test]
    fn shallow_vertical_overlap_resolves_upward_only() {
        let player = Aabb::from_center_size(0.45, 0.85, 0.9, 0.9);
        let platform = Aabb::from_center_size(0.0, 0.0, 1.0, 1.0);

        match min_separation(&player, &platform) {
            Some(Separation::PushY(push)) => assert!((push - 0.1).abs() < EPS),
            other => panic!("expected vertical push, got {:?}", other),
        }
    }

    #[test]
    fn shallow_horizontal_overlap_resolves_sideways() {
        // Deep vertical overlap, sliver of horizontal overlap from the left.
        let player = Aabb::from_center_size(-0.9, 0.1, 0.9, 0.9);
        let platform = Aabb::from_center_size(0.0, 0.0, 1.0, 1.0);

        match min_separation(&player, &platform) {
            Some(Separation::PushX(push)) => {
                assert!(push < 0.0, "push should move the box further left");
                assert!((push.abs() - 0.05).abs() < EPS);
            }
            other => panic!("expected horizontal push, got {:?}", other),
        }
    }

    #[test]
    fn push_sign_follows_center_delta() {
        let platform = Aabb::from_center_size(0.0, 0.0, 1.0, 1.0);

        let above = Aabb::from_center_size(0.0, 0.9, 1.0, 1.0);
        match min_separation(&above, &platform) {
            Some(Separation::PushY(push)) => assert!(push > 0.0),
            other => panic!("expected vertical push, got {:?}", other),
        }

        let below = Aabb::from_center_size(0.0, -0.9, 1.0, 1.0);
        match min_separation(&below, &platform) {
            Some(Separation::PushY(push)) => assert!(push < 0.0),
            other => panic!("expected vertical push, got {:?}", other),
        }
    }

    #[test]
    fn equal_penetration_prefers_vertical() {
        // Identical boxes offset equally on both axes.
        let a = Aabb::from_center_size(0.5, 0.5, 1.0, 1.0);
        let b = Aabb::from_center_size(0.0, 0.0, 1.0, 1.0);

        match min_separation(&a, &b) {
            Some(Separation::PushY(push)) => assert!((push - 0.5).abs() < EPS),
            other => panic!("expected vertical push, got {:?}", other),
        }
    }
}
