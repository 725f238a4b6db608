// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-14"
// driver = "Isaac Clayton"

//! Probabilistic leveling.

use rand::Rng;

/// Maximum skip list height. 32 levels at branch 2 covers 2^32 elements.
pub const MAX_LEVEL: usize = 32;

/// Inverse promotion probability: a node reaches level `i + 1` with
/// probability `1 / BRANCH` given it reached level `i`.
pub const BRANCH: u32 = 2;

/// Draw a node height in `1..=MAX_LEVEL` from a geometric distribution.
pub fn draw_height<R: Rng + ?Sized>(rng: &mut R) -> usize {
    let mut height = 1;
    while height < MAX_LEVEL && rng.gen_ratio(1, BRANCH) {
        height += 1;
    }
    height
}
