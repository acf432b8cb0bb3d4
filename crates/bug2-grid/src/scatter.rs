//! Seeded random obstacle fields.
//!
//! Each cell is blocked independently with probability `density`, drawn from
//! a [`SeedRng`] in row-major order, so a `(rows, cols, density, seed)`
//! tuple always produces the same map.

use bug2_core::{Cell, SeedRng};

use crate::{Workspace, WorkspaceBuilder};

/// Generate a `rows × cols` workspace with roughly `density` of its cells
/// occupied.  Cells in `keep_free` (typically start and goal) are always
/// left free.
pub fn scatter(rows: u32, cols: u32, density: f64, seed: u64, keep_free: &[Cell]) -> Workspace {
    let mut rng = SeedRng::new(seed);
    let mut b = WorkspaceBuilder::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            if rng.gen_bool(density) {
                b.block(Cell::new(r, c));
            }
        }
    }
    for &cell in keep_free {
        b.clear(cell);
    }
    b.build()
}
