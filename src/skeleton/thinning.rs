//! Zhang-Suen thinning of a binary mask down to a one-pixel-wide skeleton.
//!
//! Each iteration runs two subpasses over the mask; a pixel is deleted when
//! it is a simple boundary point (2..=6 set neighbors, exactly one 0→1
//! transition around the ring) and its directional conditions hold. Deletions
//! within a subpass are applied simultaneously, so the result does not depend
//! on scan order. Iterates to a fixpoint. Out-of-bounds neighbors read as
//! background.
use crate::image::BinaryMask;

/// Neighbor offsets in Zhang-Suen order P2..P9, clockwise from north.
const RING: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

fn ring_values(mask: &BinaryMask, x: usize, y: usize) -> [u8; 8] {
    let mut p = [0u8; 8];
    for (i, &(dx, dy)) in RING.iter().enumerate() {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx >= 0 && ny >= 0 && (nx as usize) < mask.w && (ny as usize) < mask.h {
            p[i] = u8::from(mask.is_set(nx as usize, ny as usize));
        }
    }
    p
}

fn marked_for_deletion(p: &[u8; 8], first_subpass: bool) -> bool {
    let set_neighbors: u8 = p.iter().sum();
    if !(2..=6).contains(&set_neighbors) {
        return false;
    }
    let mut transitions = 0;
    for i in 0..8 {
        if p[i] == 0 && p[(i + 1) % 8] == 1 {
            transitions += 1;
        }
    }
    if transitions != 1 {
        return false;
    }
    let (p2, p4, p6, p8) = (p[0], p[2], p[4], p[6]);
    if first_subpass {
        p2 * p4 * p6 == 0 && p4 * p6 * p8 == 0
    } else {
        p2 * p4 * p8 == 0 && p2 * p6 * p8 == 0
    }
}

/// Thin `mask` to its one-pixel-wide skeleton.
pub fn zhang_suen_thin(mask: &BinaryMask) -> BinaryMask {
    let mut current = mask.clone();
    if current.w == 0 || current.h == 0 {
        return current;
    }
    let mut to_clear: Vec<(usize, usize)> = Vec::new();
    loop {
        let mut changed = false;
        for subpass in 0..2 {
            to_clear.clear();
            for y in 0..current.h {
                for x in 0..current.w {
                    if current.is_set(x, y)
                        && marked_for_deletion(&ring_values(&current, x, y), subpass == 0)
                    {
                        to_clear.push((x, y));
                    }
                }
            }
            if !to_clear.is_empty() {
                changed = true;
                for &(x, y) in &to_clear {
                    current.set(x, y, false);
                }
            }
        }
        if !changed {
            return current;
        }
    }
}
