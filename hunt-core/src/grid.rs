//! Grid state: 8x8 cells, player position, treasure records.

use rand::Rng;

/// Cells per grid side.
pub const GRID_SIDE: usize = 8;

/// Treasures hidden on the grid. Index `i` maps to resource prefix `i + 1`.
pub const NUM_TREASURES: usize = 8;

/// A grid position. Equality is component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// What a cell renders as. Derived from player/treasure positions, not
/// independent source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Player,
    Visited,
    Treasure,
}

/// One step of player movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One hidden treasure: where it sits and whether the player has been there.
/// `found` flips false -> true once and never reverts.
#[derive(Debug, Clone, Copy)]
pub struct TreasureRecord {
    pub position: Coordinate,
    pub found: bool,
}

/// The whole board. At most one cell is `Player`; cells marked `Treasure`
/// correspond exactly to unfound treasure records.
pub struct Grid {
    cells: [[Cell; GRID_SIDE]; GRID_SIDE],
    treasures: [TreasureRecord; NUM_TREASURES],
    player: Coordinate,
}

impl Grid {
    /// Fresh grid with the player at the origin and treasures scattered over
    /// distinct cells, never the starting cell.
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let start = Coordinate::new(0, 0);
        let mut positions = [start; NUM_TREASURES];
        let mut picked = 0;
        while picked < NUM_TREASURES {
            let candidate = Coordinate::new(
                rng.gen_range(0..GRID_SIDE as u8),
                rng.gen_range(0..GRID_SIDE as u8),
            );
            if candidate == start || positions[..picked].contains(&candidate) {
                continue;
            }
            positions[picked] = candidate;
            picked += 1;
        }
        Self::with_layout(positions)
    }

    /// Grid with a fixed treasure layout. Positions must be distinct and off
    /// the player's starting cell.
    pub fn with_layout(positions: [Coordinate; NUM_TREASURES]) -> Self {
        let mut cells = [[Cell::Empty; GRID_SIDE]; GRID_SIDE];
        let player = Coordinate::new(0, 0);
        cells[player.y as usize][player.x as usize] = Cell::Player;
        let treasures = positions.map(|position| {
            cells[position.y as usize][position.x as usize] = Cell::Treasure;
            TreasureRecord {
                position,
                found: false,
            }
        });
        Self {
            cells,
            treasures,
            player,
        }
    }

    /// Attempt one step. An out-of-bounds destination rejects the move and
    /// leaves the grid unchanged; a valid move leaves a visited trail.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let Coordinate { x, y } = self.player;
        let side = GRID_SIDE as u8;
        let destination = match direction {
            Direction::Up if y > 0 => Coordinate::new(x, y - 1),
            Direction::Down if y + 1 < side => Coordinate::new(x, y + 1),
            Direction::Left if x > 0 => Coordinate::new(x - 1, y),
            Direction::Right if x + 1 < side => Coordinate::new(x + 1, y),
            _ => return false,
        };
        self.cells[y as usize][x as usize] = Cell::Visited;
        self.cells[destination.y as usize][destination.x as usize] = Cell::Player;
        self.player = destination;
        true
    }

    /// Index of the unfound treasure at `position`, if any. Never returns an
    /// already-found index.
    pub fn treasure_at(&self, position: Coordinate) -> Option<usize> {
        self.treasures
            .iter()
            .position(|t| t.position == position && !t.found)
    }

    /// Mark one record found. The caller only calls this once per index
    /// (`treasure_at` already filters found records).
    pub fn mark_found(&mut self, index: usize) {
        self.treasures[index].found = true;
    }

    pub fn all_found(&self) -> bool {
        self.treasures.iter().all(|t| t.found)
    }

    pub fn player_position(&self) -> Coordinate {
        self.player
    }

    pub fn cells(&self) -> &[[Cell; GRID_SIDE]; GRID_SIDE] {
        &self.cells
    }

    pub fn treasures(&self) -> &[TreasureRecord] {
        &self.treasures
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_layout() -> [Coordinate; NUM_TREASURES] {
        // Distinct positions along the bottom rows, away from the origin.
        [
            Coordinate::new(0, 7),
            Coordinate::new(1, 7),
            Coordinate::new(2, 7),
            Coordinate::new(3, 7),
            Coordinate::new(4, 7),
            Coordinate::new(5, 7),
            Coordinate::new(6, 7),
            Coordinate::new(7, 7),
        ]
    }

    #[test]
    fn valid_move_updates_position_and_trail() {
        let mut grid = Grid::with_layout(corner_layout());
        assert!(grid.move_player(Direction::Right));
        assert_eq!(grid.player_position(), Coordinate::new(1, 0));
        assert_eq!(grid.cells()[0][0], Cell::Visited);
        assert_eq!(grid.cells()[0][1], Cell::Player);
    }

    #[test]
    fn out_of_bounds_move_rejected() {
        let mut grid = Grid::with_layout(corner_layout());
        assert!(!grid.move_player(Direction::Up));
        assert!(!grid.move_player(Direction::Left));
        assert_eq!(grid.player_position(), Coordinate::new(0, 0));
        assert_eq!(grid.cells()[0][0], Cell::Player);
    }

    #[test]
    fn each_axis_moves_one_unit() {
        let mut grid = Grid::with_layout(corner_layout());
        assert!(grid.move_player(Direction::Down));
        assert_eq!(grid.player_position(), Coordinate::new(0, 1));
        assert!(grid.move_player(Direction::Right));
        assert_eq!(grid.player_position(), Coordinate::new(1, 1));
        assert!(grid.move_player(Direction::Up));
        assert_eq!(grid.player_position(), Coordinate::new(1, 0));
        assert!(grid.move_player(Direction::Left));
        assert_eq!(grid.player_position(), Coordinate::new(0, 0));
    }

    #[test]
    fn treasure_at_skips_found_records() {
        let mut grid = Grid::with_layout(corner_layout());
        let pos = Coordinate::new(3, 7);
        assert_eq!(grid.treasure_at(pos), Some(3));
        grid.mark_found(3);
        assert_eq!(grid.treasure_at(pos), None);
        assert!(grid.treasures()[3].found);
    }

    #[test]
    fn all_found_after_every_record() {
        let mut grid = Grid::with_layout(corner_layout());
        assert!(!grid.all_found());
        for i in 0..NUM_TREASURES {
            grid.mark_found(i);
        }
        assert!(grid.all_found());
    }

    #[test]
    fn random_placement_is_distinct_and_in_bounds() {
        let grid = Grid::new();
        let records = grid.treasures();
        for (i, r) in records.iter().enumerate() {
            assert!((r.position.x as usize) < GRID_SIDE);
            assert!((r.position.y as usize) < GRID_SIDE);
            assert_ne!(r.position, Coordinate::new(0, 0));
            assert!(!r.found);
            for other in &records[i + 1..] {
                assert_ne!(r.position, other.position);
            }
        }
    }

    #[test]
    fn layout_marks_treasure_cells() {
        let grid = Grid::with_layout(corner_layout());
        for r in grid.treasures() {
            assert_eq!(
                grid.cells()[r.position.y as usize][r.position.x as usize],
                Cell::Treasure
            );
        }
    }
}
