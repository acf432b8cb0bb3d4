//! Built-in demo maps.

use bug2_core::Cell;
use bug2_grid::{MapParts, WorkspaceBuilder};

/// Names accepted by `--builtin`.
pub const BUILTIN: [&str; 4] = ["clear", "wall-gap", "walled-in", "nested-rings"];

pub fn builtin(name: &str) -> Option<MapParts> {
    let parts = match name {
        "clear" => MapParts {
            name:      Some("clear".into()),
            workspace: WorkspaceBuilder::new(5, 5).build(),
            start:     Cell::new(0, 0),
            goal:      Cell::new(4, 4),
        },
        "wall-gap" => {
            let mut b = WorkspaceBuilder::new(7, 7);
            b.block_row(3, 0..7);
            b.clear(Cell::new(3, 5));
            MapParts {
                name:      Some("wall-gap".into()),
                workspace: b.build(),
                start:     Cell::new(1, 2),
                goal:      Cell::new(5, 2),
            }
        }
        "walled-in" => {
            let mut b = WorkspaceBuilder::new(9, 9);
            b.block_ring(Cell::new(2, 2), Cell::new(6, 6));
            MapParts {
                name:      Some("walled-in".into()),
                workspace: b.build(),
                start:     Cell::new(4, 0),
                goal:      Cell::new(4, 4),
            }
        }
        "nested-rings" => {
            let mut parts = MapParts::parse(
                "
                ...............
                .#############.
                .#...........#.
                .#.#########.#.
                .#.#.......#.#.
                .#.#.#####.#.#.
                .#.#.#.G.#.#.#.
                .#.#.#.#.#.#.#.
                .#.#.#...#.#.#.
                .#.#.#####.#.#.
                .#.#.......#.#.
                .#.#########.#.
                .#...........#.
                .#############.
                S..............
                ",
            )
            .ok()?;
            parts.name = Some("nested-rings".into());
            parts
        }
        _ => return None,
    };
    Some(parts)
}
