pub mod palette;

use std::fmt;

use crate::life::palette::ColorScheme;

/// Generate a pseudorandom seed for the game's PRNG.
pub fn generate_seed() -> (u64, u64) {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed).expect("failed to getrandom");

    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}

/// Relative positions of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// One grid position. `age` is the number of consecutive generations the
/// cell has been alive, counting the generation it was born as 0; dead
/// cells hold `-1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    alive_next: bool,
    age: i32,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            alive: false,
            alive_next: false,
            age: -1,
        }
    }
}

impl Cell {
    fn born() -> Self {
        Self {
            alive: true,
            alive_next: false,
            age: 0,
        }
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

/// Error for a grid configured with zero rows or columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for InvalidDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid dimensions must be positive, got {} rows x {} cols",
            self.rows, self.cols
        )
    }
}

impl std::error::Error for InvalidDimensions {}

#[derive(Debug)]
pub struct LifeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl LifeGrid {
    /// Create an all-dead grid. The dimensions are fixed for the life of
    /// the grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, InvalidDimensions> {
        if rows == 0 || cols == 0 {
            return Err(InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }

    pub fn new_random(
        rows: usize,
        cols: usize,
        threshold: f32,
    ) -> Result<Self, InvalidDimensions> {
        let mut result = Self::new(rows, cols)?;
        let mut rng: randomize::PCG32 = generate_seed().into();
        result.randomize(&mut rng, threshold);
        Ok(result)
    }

    /// Reseed every cell, alive with probability `threshold`, then compute
    /// the pending generation so the grid is consistent before it is next
    /// drawn or stepped.
    pub fn randomize(&mut self, rng: &mut randomize::PCG32, threshold: f32) {
        for cell in self.cells.iter_mut() {
            let draw = randomize::f32_half_open_right(rng.next_u32());
            *cell = if draw < threshold {
                Cell::born()
            } else {
                Cell::default()
            };
        }
        self.compute_next();
    }

    /// Set the listed positions alive (age 0) and recompute the pending
    /// generation. Positions outside the grid are ignored.
    pub fn place(&mut self, positions: &[(usize, usize)]) {
        for &(row, col) in positions {
            if row < self.rows && col < self.cols {
                self.cells[row * self.cols + col] = Cell::born();
            }
        }
        self.compute_next();
    }

    /// Advance one generation: commit the precomputed states, update ages,
    /// then recompute the next generation for every cell.
    pub fn update(&mut self) {
        for cell in self.cells.iter_mut() {
            let was_alive = cell.alive;
            cell.alive = cell.alive_next;

            cell.age = if !cell.alive {
                -1
            } else if was_alive {
                cell.age + 1
            } else {
                // Newly born this generation. Set the age outright rather
                // than incrementing past the dead sentinel.
                0
            };
        }
        self.compute_next();
    }

    // Reads only the committed `alive` values, so the pass never observes
    // an `alive_next` written for a neighbor in the same pass.
    fn compute_next(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neighbors = self.live_neighbors(row, col);
                let cell = &mut self.cells[row * self.cols + col];
                cell.alive_next = neighbors == 3 || (neighbors == 2 && cell.alive);
            }
        }
    }

    /// Count live cells among the up-to-8 surrounding positions. Positions
    /// outside the grid are excluded, not wrapped.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || c < 0 || r >= self.rows as isize || c >= self.cols as isize {
                continue;
            }
            if self.cells[r as usize * self.cols + c as usize].alive {
                count += 1;
            }
        }
        count
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Ordered read-only view of the whole grid, row-major.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i / self.cols, i % self.cols), cell))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Paint the current generation into an RGBA frame, one pixel per
    /// cell, row-major. Dead cells take the background color.
    pub fn draw(&self, screen: &mut [u8], scheme: &ColorScheme) {
        debug_assert_eq!(screen.len(), self.cells.len() * 4);
        for (cell, pixel) in self.cells.iter().zip(screen.chunks_exact_mut(4)) {
            pixel.copy_from_slice(&scheme.color(cell.age));
        }
    }
}
