//! Console grid renderer, one character per cell.

use hunt_core::{Cell, Grid, GRID_SIDE};

pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(GRID_SIDE * (GRID_SIDE * 2 + 1));
    for row in grid.cells() {
        for (x, cell) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            out.push(match cell {
                Cell::Empty => '.',
                Cell::Player => 'P',
                Cell::Visited => 'o',
                Cell::Treasure => 'T',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_core::{Coordinate, Direction, NUM_TREASURES};

    #[test]
    fn renders_player_trail_and_treasures() {
        let layout = [
            Coordinate::new(7, 7),
            Coordinate::new(6, 7),
            Coordinate::new(5, 7),
            Coordinate::new(4, 7),
            Coordinate::new(3, 7),
            Coordinate::new(2, 7),
            Coordinate::new(1, 7),
            Coordinate::new(0, 7),
        ];
        let mut grid = Grid::with_layout(layout);
        grid.move_player(Direction::Right);

        let out = render(&grid);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), GRID_SIDE);
        assert_eq!(rows[0], "o P . . . . . .");
        assert_eq!(rows[7], "T T T T T T T T");
        assert_eq!(
            out.matches('T').count(),
            NUM_TREASURES,
            "every unfound treasure renders"
        );
    }
}
