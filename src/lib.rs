//! Generate perfect rectangular mazes by randomized depth-first carving
//!
//! A perfect maze has exactly one path between any two cells. The carver
//! starts from a fully walled grid, knocks walls down along a randomized
//! depth-first traversal, and finally opens an entrance in the upper left
//! and an exit in the lower right corner.
//!
//! # Examples
//! ```
//! use perfect_maze::carver::Carver;
//!
//! let mut carver = Carver::new(Some(7));
//! let maze = carver.carve(8, 5).unwrap();
//! for line in maze.render_lines() {
//!     println!("{}", line);
//! }
//! ```

use anyhow::bail;
use itertools::Itertools;

pub mod carver;

/// Cardinal direction from a cell towards one of its four neighbors
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order walls are stored in a [Cell].
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Direction of the matching wall as seen from the neighboring cell.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Location of a cell in the maze
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

/// One cell of the maze and the state of its four walls
#[derive(Clone, Debug)]
pub struct Cell {
    walls: [bool; 4],
    visited: bool,
}

impl Cell {
    fn new() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
        }
    }

    /// Whether the wall towards `direction` is still standing.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction as usize]
    }

    /// Whether the carver has reached this cell.
    pub fn visited(&self) -> bool {
        self.visited
    }
}

/// Rectangular grid of walled cells
///
/// A fresh maze has every wall standing; [carver::Carver] takes the interior
/// walls down. Cells are stored row-major in a flat vector, indexed by
/// `row * width + col`.
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Maze {
    /// Create a fully walled, unvisited grid.
    ///
    /// Returns an error when either dimension is zero; no partially built
    /// grid escapes.
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            bail!("maze dimensions must be positive, got {}x{}", width, height);
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::new(); width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `point`.
    ///
    /// Panics when `point` lies outside the grid.
    pub fn cell(&self, point: Point) -> &Cell {
        &self.cells[self.index(point)]
    }

    /// Whether the wall of the cell at `point` towards `direction` is standing.
    pub fn has_wall(&self, point: Point, direction: Direction) -> bool {
        self.cell(point).has_wall(direction)
    }

    /// Coordinates one step from `point`, or `None` when the step leaves the grid.
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        let Point { row, col } = point;
        let next = match direction {
            Direction::North => Point {
                row: row.checked_sub(1)?,
                col,
            },
            Direction::South => Point { row: row + 1, col },
            Direction::East => Point { row, col: col + 1 },
            Direction::West => Point {
                row,
                col: col.checked_sub(1)?,
            },
        };
        if next.row < self.height && next.col < self.width {
            Some(next)
        } else {
            None
        }
    }

    /// Take down the wall of the cell at `point` towards `direction`.
    ///
    /// The matching wall of the neighboring cell comes down in the same call,
    /// so the two sides of an interior wall never disagree. On the grid
    /// boundary there is no neighbor and only the one flag is cleared.
    pub fn remove_wall(&mut self, point: Point, direction: Direction) {
        let index = self.index(point);
        self.cells[index].walls[direction as usize] = false;
        if let Some(next) = self.neighbor(point, direction) {
            let index = self.index(next);
            self.cells[index].walls[direction.opposite() as usize] = false;
        }
    }

    pub(crate) fn mark_visited(&mut self, point: Point) {
        let index = self.index(point);
        self.cells[index].visited = true;
    }

    fn index(&self, point: Point) -> usize {
        assert!(
            point.row < self.height && point.col < self.width,
            "cell ({}, {}) outside the {}x{} grid",
            point.row,
            point.col,
            self.width,
            self.height
        );
        point.row * self.width + point.col
    }

    /// Draw the maze as text lines, two characters per cell.
    ///
    /// The first line closes the top of the grid. After that, one line per
    /// row carries each cell's west and south wall, with the east wall of
    /// the last column closing the line. The last row draws the floor of
    /// the maze, so an open west wall there renders as `_` instead of a
    /// space.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.height + 1);

        let top = (0..self.width)
            .map(|col| {
                if self.has_wall(Point { row: 0, col }, Direction::North) {
                    "__"
                } else {
                    " "
                }
            })
            .join("");
        lines.push(format!("{}_", top));

        for row in 0..self.height {
            let mut line = String::with_capacity(2 * self.width + 1);
            for col in 0..self.width {
                let point = Point { row, col };
                line.push(if self.has_wall(point, Direction::West) {
                    '|'
                } else if row == self.height - 1 {
                    '_'
                } else {
                    ' '
                });
                line.push(if self.has_wall(point, Direction::South) {
                    '_'
                } else {
                    ' '
                });
            }
            let last = Point {
                row,
                col: self.width - 1,
            };
            line.push(if self.has_wall(last, Direction::East) {
                '|'
            } else {
                ' '
            });
            lines.push(line);
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use crate::{Direction, Maze, Point};

    #[test]
    fn new_maze_is_fully_walled() {
        let maze = Maze::new(3, 2).unwrap();
        for row in 0..2 {
            for col in 0..3 {
                let cell = maze.cell(Point { row, col });
                assert!(!cell.visited());
                for direction in Direction::ALL {
                    assert!(cell.has_wall(direction));
                }
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(Maze::new(0, 5).is_err());
        assert!(Maze::new(5, 0).is_err());
        assert!(Maze::new(0, 0).is_err());
    }

    #[test]
    fn neighbor_steps_one_cell() {
        let maze = Maze::new(3, 3).unwrap();
        let center = Point { row: 1, col: 1 };
        assert_eq!(
            maze.neighbor(center, Direction::North),
            Some(Point { row: 0, col: 1 })
        );
        assert_eq!(
            maze.neighbor(center, Direction::South),
            Some(Point { row: 2, col: 1 })
        );
        assert_eq!(
            maze.neighbor(center, Direction::East),
            Some(Point { row: 1, col: 2 })
        );
        assert_eq!(
            maze.neighbor(center, Direction::West),
            Some(Point { row: 1, col: 0 })
        );
    }

    #[test]
    fn neighbor_stops_at_the_boundary() {
        let maze = Maze::new(3, 3).unwrap();
        let upper_left = Point { row: 0, col: 0 };
        let lower_right = Point { row: 2, col: 2 };
        assert_eq!(maze.neighbor(upper_left, Direction::North), None);
        assert_eq!(maze.neighbor(upper_left, Direction::West), None);
        assert_eq!(maze.neighbor(lower_right, Direction::South), None);
        assert_eq!(maze.neighbor(lower_right, Direction::East), None);
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn remove_wall_clears_both_sides() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.remove_wall(Point { row: 0, col: 0 }, Direction::East);

        assert!(!maze.has_wall(Point { row: 0, col: 0 }, Direction::East));
        assert!(!maze.has_wall(Point { row: 0, col: 1 }, Direction::West));

        // Every other wall of both cells is untouched
        assert!(maze.has_wall(Point { row: 0, col: 0 }, Direction::North));
        assert!(maze.has_wall(Point { row: 0, col: 0 }, Direction::South));
        assert!(maze.has_wall(Point { row: 0, col: 0 }, Direction::West));
        assert!(maze.has_wall(Point { row: 0, col: 1 }, Direction::North));
        assert!(maze.has_wall(Point { row: 0, col: 1 }, Direction::South));
        assert!(maze.has_wall(Point { row: 0, col: 1 }, Direction::East));
    }

    #[test]
    fn remove_wall_on_the_boundary_touches_one_cell() {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.remove_wall(Point { row: 0, col: 0 }, Direction::West);

        assert!(!maze.has_wall(Point { row: 0, col: 0 }, Direction::West));
        assert!(maze.has_wall(Point { row: 0, col: 0 }, Direction::East));
        assert!(maze.has_wall(Point { row: 0, col: 1 }, Direction::West));
    }

    #[test]
    fn render_single_cell_with_openings() {
        let mut maze = Maze::new(1, 1).unwrap();
        maze.remove_wall(Point { row: 0, col: 0 }, Direction::West);
        maze.remove_wall(Point { row: 0, col: 0 }, Direction::East);

        assert_eq!(maze.render_lines(), vec!["___", "__ "]);
    }

    #[test]
    fn render_hand_carved_grid() {
        // Passages (0,0)-(0,1), (0,1)-(1,1), (1,1)-(1,0) plus the entrance
        // and exit openings
        let mut maze = Maze::new(2, 2).unwrap();
        maze.remove_wall(Point { row: 0, col: 0 }, Direction::East);
        maze.remove_wall(Point { row: 0, col: 1 }, Direction::South);
        maze.remove_wall(Point { row: 1, col: 1 }, Direction::West);
        maze.remove_wall(Point { row: 0, col: 0 }, Direction::West);
        maze.remove_wall(Point { row: 1, col: 1 }, Direction::East);

        assert_eq!(maze.render_lines(), vec!["_____", " _  |", "|___ "]);
    }
}
