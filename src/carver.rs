//! Maze carving
//!
//! Randomized depth-first wall removal, also known as the recursive
//! backtracker. Starting from a random cell, the carver repeatedly knocks a
//! wall down towards an unvisited neighbor and continues from there,
//! backtracking when a cell has no unvisited neighbors left. Walls only ever
//! come down between a visited and an unvisited cell, so the open passages
//! form a spanning tree over the grid and the maze has exactly one path
//! between any two cells.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{Direction, Maze, Point};

/// Carving progress hooks
///
/// The carver reports each step right after mutating the maze. Observers get
/// the maze by shared reference and no access to the carver's random number
/// generator, so instrumentation cannot change which maze comes out.
pub trait CarveObserver {
    /// Called after `cell` is marked visited.
    fn cell_visited(&mut self, maze: &Maze, cell: Point) {
        let _ = (maze, cell);
    }

    /// Called after the wall from `cell` towards `direction` came down.
    fn wall_removed(&mut self, maze: &Maze, cell: Point, direction: Direction) {
        let _ = (maze, cell, direction);
    }
}

/// No-op observer for plain generation.
impl CarveObserver for () {}

/// One depth-first step: a visited cell and the directions not yet tried
/// from it, in the order they were drawn.
struct Frame {
    cell: Point,
    directions: [Direction; 4],
    tried: usize,
}

/// Maze carver with a reproducible random source.
pub struct Carver {
    random: StdRng,
}

impl Carver {
    /// Create a carver, seeded for reproducible output when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve a perfect maze of the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use perfect_maze::carver::Carver;
    ///
    /// let maze = Carver::new(Some(1)).carve(4, 3).unwrap();
    /// assert_eq!(maze.render_lines().len(), 4);
    /// ```
    pub fn carve(&mut self, width: usize, height: usize) -> anyhow::Result<Maze> {
        self.carve_with(width, height, &mut ())
    }

    /// Carve a perfect maze, reporting each step to `observer`.
    ///
    /// The maze starts fully walled, the interior walls come down along a
    /// depth-first traversal from a random cell, and the entrance and exit
    /// are opened last: the west wall of the upper left cell and the east
    /// wall of the lower right cell. In a 1x1 maze those are two walls of
    /// the same cell; both are opened all the same.
    pub fn carve_with(
        &mut self,
        width: usize,
        height: usize,
        observer: &mut dyn CarveObserver,
    ) -> anyhow::Result<Maze> {
        let mut maze = Maze::new(width, height)?;

        let start = Point {
            row: self.random.gen_range(0..height),
            col: self.random.gen_range(0..width),
        };
        self.carve_from(&mut maze, start, observer);

        maze.remove_wall(Point { row: 0, col: 0 }, Direction::West);
        maze.remove_wall(
            Point {
                row: height - 1,
                col: width - 1,
            },
            Direction::East,
        );

        Ok(maze)
    }

    /// Depth-first wall removal from `start` until every cell is visited.
    ///
    /// The recursion of the textbook backtracker is replaced by an explicit
    /// frame stack, so grid size is not limited by the call stack. Each
    /// frame keeps the shuffled direction order drawn when its cell was
    /// first entered.
    fn carve_from(&mut self, maze: &mut Maze, start: Point, observer: &mut dyn CarveObserver) {
        let mut stack = vec![self.enter(maze, start, observer)];

        while let Some(frame) = stack.last_mut() {
            if frame.tried == frame.directions.len() {
                stack.pop();
                continue;
            }
            let cell = frame.cell;
            let direction = frame.directions[frame.tried];
            frame.tried += 1;

            let next = match maze.neighbor(cell, direction) {
                Some(next) => next,
                None => continue,
            };
            if maze.cell(next).visited() {
                continue;
            }

            maze.remove_wall(cell, direction);
            observer.wall_removed(maze, cell, direction);

            let frame = self.enter(maze, next, observer);
            stack.push(frame);
        }
    }

    /// Mark `cell` visited and draw the order its neighbors will be tried in.
    fn enter(&mut self, maze: &mut Maze, cell: Point, observer: &mut dyn CarveObserver) -> Frame {
        maze.mark_visited(cell);
        observer.cell_visited(maze, cell);

        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.random);
        Frame {
            cell,
            directions,
            tried: 0,
        }
    }
}
