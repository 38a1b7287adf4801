//! Stone-to-stone collision detection and response
//!
//! Stones are equal-radius discs. A contact resolves as a 1-D elastic
//! collision along the line of centers; tangential velocity is untouched.
//! Overlap is then split evenly between the two stones so they never stick.

use glam::Vec2;

use super::state::Stone;
use crate::consts::STONE_RADIUS;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the discs overlap
    pub hit: bool,
    /// Unit vector from the second stone toward the first (zero when centers coincide)
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check two discs of `radius` for overlap.
///
/// Coincident centers still count as a hit but carry a zero normal, which
/// makes the response a no-op.
pub fn stone_contact(pos_a: Vec2, pos_b: Vec2, radius: f32) -> CollisionResult {
    let delta = pos_a - pos_b;
    let distance = delta.length();

    if distance >= 2.0 * radius {
        return CollisionResult::miss();
    }

    let normal = if distance != 0.0 {
        delta / distance
    } else {
        Vec2::ZERO
    };

    CollisionResult {
        hit: true,
        normal,
        penetration: 2.0 * radius - distance,
    }
}

/// 1-D elastic collision: new normal speeds for bodies 1 and 2
#[inline]
pub fn elastic_normal_speeds(v1n: f32, v2n: f32, m1: f32, m2: f32) -> (f32, f32) {
    let total = m1 + m2;
    let v1 = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / total;
    let v2 = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / total;
    (v1, v2)
}

/// Resolve one pair in place. Returns whether the stones were touching.
pub fn resolve_pair(a: &mut Stone, b: &mut Stone) -> bool {
    let contact = stone_contact(a.pos, b.pos, STONE_RADIUS);
    if !contact.hit {
        return false;
    }

    let n = contact.normal;
    if n == Vec2::ZERO {
        return true;
    }
    let t = Vec2::new(-n.y, n.x);

    let a_tan = a.vel.dot(t);
    let b_tan = b.vel.dot(t);
    let a_norm = a.vel.dot(n);
    let b_norm = b.vel.dot(n);

    let (a_norm, b_norm) = elastic_normal_speeds(a_norm, b_norm, a.mass, b.mass);

    a.vel = t * a_tan + n * a_norm;
    b.vel = t * b_tan + n * b_norm;

    let push = n * (contact.penetration / 2.0);
    a.pos += push;
    b.pos -= push;

    true
}

/// Resolve every unordered pair `(i, j)`, `i < j`, in placement order.
///
/// Each resolution mutates immediately, so later pairs see earlier results.
/// Returns the number of contacts.
pub fn resolve_collisions(stones: &mut [Stone]) -> usize {
    let mut contacts = 0;
    for i in 0..stones.len() {
        let (head, tail) = stones.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                contacts += 1;
            }
        }
    }
    contacts
}
