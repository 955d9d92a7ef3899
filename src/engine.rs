//! Core game engine for the Pupu sliding-tile puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Tile`: Represents the different kinds of tiles on the board.
//! - `Move`: A horizontal slide of one tile along its row.
//! - `Board`: Represents the playfield and includes methods for move
//!   generation and the transition mechanics (slide, gravity, and
//!   connected-group removal down to a stable fixed point).
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::error::IllegalMove;

/// Represents the kind of a tile on the game board.
///
/// The first eight kinds are game pieces that fall and disappear when two
/// or more of the same kind touch. `Glass` falls like a piece but never
/// matches, so it can only be pushed around. The remaining kinds are the
/// immobile parts of a level: `Wall` blocks everything, `Pattern` is the
/// decorative backdrop outside the basin, and `Empty` is walkable floor
/// space that tiles slide through and fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Heart,
    Diamond,
    Triangle,
    Ring,
    CrossA,
    Sandglass,
    CrossB,
    Frame,
    /// Falls like a game piece but never participates in matches.
    Glass,
    Wall,
    /// Background decoration outside the playable basin.
    Pattern,
    Empty,
}

/// Number of distinct erasable tile kinds.
pub const ERASABLE_KINDS: usize = 8;

// Used by `Board::new_random_with_seed` so generated boards only contain
// kinds that can actually be cleared.
fn random_erasable_kind(rng: &mut impl Rng) -> Tile {
    match rng.gen_range(0..ERASABLE_KINDS as u8) {
        0 => Tile::Heart,
        1 => Tile::Diamond,
        2 => Tile::Triangle,
        3 => Tile::Ring,
        4 => Tile::CrossA,
        5 => Tile::Sandglass,
        6 => Tile::CrossB,
        7 => Tile::Frame,
        _ => unreachable!("Generated value out of range"),
    }
}

impl Tile {
    /// Returns `true` if this tile falls under gravity and can be slid by
    /// the player: the eight erasable kinds plus `Glass`.
    pub fn is_mobile(&self) -> bool {
        self.is_erasable() || *self == Tile::Glass
    }

    /// Returns `true` if this tile participates in match removal.
    pub fn is_erasable(&self) -> bool {
        self.erasable_index().is_some()
    }

    /// The counting index of an erasable kind, `0..ERASABLE_KINDS`.
    /// `None` for `Glass` and the immobile kinds.
    pub fn erasable_index(&self) -> Option<usize> {
        match self {
            Tile::Heart => Some(0),
            Tile::Diamond => Some(1),
            Tile::Triangle => Some(2),
            Tile::Ring => Some(3),
            Tile::CrossA => Some(4),
            Tile::Sandglass => Some(5),
            Tile::CrossB => Some(6),
            Tile::Frame => Some(7),
            _ => None,
        }
    }

    /// Converts the tile to its character representation.
    ///
    /// This is the fixed symbol table used by level files and board dumps.
    ///
    /// # Examples
    ///
    /// ```
    /// use pupu_solver::engine::Tile;
    /// assert_eq!(Tile::Heart.to_char(), 'H');
    /// assert_eq!(Tile::Empty.to_char(), '.');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Tile::Heart => 'H',
            Tile::Diamond => 'D',
            Tile::Triangle => 'T',
            Tile::Ring => 'R',
            Tile::CrossA => '1',
            Tile::Sandglass => 'S',
            Tile::CrossB => '2',
            Tile::Frame => 'F',
            Tile::Glass => 'G',
            Tile::Wall => '#',
            Tile::Pattern => 'P',
            Tile::Empty => '.',
        }
    }

    /// The inverse of [`Tile::to_char`]. Returns `None` for characters
    /// outside the symbol table.
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            'H' => Some(Tile::Heart),
            'D' => Some(Tile::Diamond),
            'T' => Some(Tile::Triangle),
            'R' => Some(Tile::Ring),
            '1' => Some(Tile::CrossA),
            'S' => Some(Tile::Sandglass),
            '2' => Some(Tile::CrossB),
            'F' => Some(Tile::Frame),
            'G' => Some(Tile::Glass),
            '#' => Some(Tile::Wall),
            'P' => Some(Tile::Pattern),
            '.' => Some(Tile::Empty),
            _ => None,
        }
    }
}

/// Width of the playfield in tiles.
pub const FIELD_W: usize = 12;
/// Height of the playfield in tiles.
pub const FIELD_H: usize = 12;

/// The raw tile grid of a board, including the one-cell `Wall` border
/// padding the playfield on all sides.
///
/// This is the visited-set key used by the solver: two boards with the
/// same grid are the same search state regardless of how they were
/// reached, and arrays of `Tile` hash and compare by content.
pub type Grid = [[Tile; FIELD_W + 2]; FIELD_H + 2];

/// A horizontal slide of the tile at `(from_col, row)` to the empty cell
/// at `(to_col, row)`. Vertical motion is never a move; tiles fall on
/// their own once slid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub from_col: usize,
    pub to_col: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) -> ({},{})",
            self.from_col, self.row, self.to_col, self.row
        )
    }
}

/// Represents the game board: a `FIELD_W` x `FIELD_H` playfield padded by
/// a border of `Wall` tiles, plus the ordered list of moves that produced
/// it from the initial board.
///
/// The border removes bounds checking from neighbor queries and is never
/// mutated. The move history is provenance, not game state: it is copied
/// on clone, excluded from the visited-set key, and only read back when a
/// solved board's path is reported.
///
/// Boards are never mutated once handed out: [`Board::apply`] returns a
/// freshly cloned, fully settled successor and leaves `self` untouched.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    path: Vec<Move>,
}

impl Board {
    /// Creates a board whose playfield is entirely `Empty`, enclosed by
    /// the `Wall` border.
    ///
    /// # Examples
    /// ```
    /// use pupu_solver::engine::{Board, Tile};
    /// let board = Board::new_empty();
    /// assert_eq!(board.get(0, 0), Tile::Empty);
    /// ```
    pub fn new_empty() -> Self {
        let mut grid = [[Tile::Wall; FIELD_W + 2]; FIELD_H + 2];
        for row in grid.iter_mut().take(FIELD_H + 1).skip(1) {
            for cell in row.iter_mut().take(FIELD_W + 1).skip(1) {
                *cell = Tile::Empty;
            }
        }
        Board {
            grid,
            path: Vec::new(),
        }
    }

    /// Creates a board by dropping `pairs` same-kind tile pairs into an
    /// empty walled basin, using a deterministic random number generator.
    ///
    /// The same seed always produces the same board. Every kind placed is
    /// drawn from the eight erasable kinds and placed twice, so a
    /// generated board never starts with a singleton kind. Each tile
    /// lands on the lowest free cell of a randomly chosen column, so the
    /// result is already gravity-stable (though adjacent same-kind
    /// neighbors may still match on the first settle).
    ///
    /// # Arguments
    /// * `seed`: Seed for the random number generator.
    /// * `pairs`: Number of tile pairs to place.
    ///
    /// # Panics
    /// Panics if `2 * pairs` exceeds the playfield capacity.
    pub fn new_random_with_seed(seed: u64, pairs: usize) -> Self {
        assert!(
            2 * pairs <= FIELD_W * FIELD_H,
            "cannot place {} tiles on a {}x{} field",
            2 * pairs,
            FIELD_W,
            FIELD_H
        );

        let mut board = Board::new_empty();
        let mut rng = SmallRng::seed_from_u64(seed);

        for _ in 0..pairs {
            let kind = random_erasable_kind(&mut rng);
            for _ in 0..2 {
                // Retry until a column with room turns up; the capacity
                // assert above guarantees one exists.
                loop {
                    let col = rng.gen_range(0..FIELD_W) as isize;
                    if board.at(col, 0) != Tile::Empty {
                        continue;
                    }
                    let mut y = 0;
                    while board.at(col, y + 1) == Tile::Empty {
                        y += 1;
                    }
                    board.put(col, y, kind);
                    break;
                }
            }
        }
        board
    }

    /// Returns the tile at playfield column `x`, row `y`.
    ///
    /// Row 0 is the top of the board; columns count from the left.
    ///
    /// # Panics
    /// Panics if `x >= FIELD_W` or `y >= FIELD_H`.
    pub fn get(&self, x: usize, y: usize) -> Tile {
        assert!(x < FIELD_W && y < FIELD_H);
        self.grid[y + 1][x + 1]
    }

    /// Sets the tile at playfield column `x`, row `y`.
    ///
    /// This writes directly into the grid and performs no settling, so it
    /// can leave the board in a non-stable state (floating tiles,
    /// touching matches). Use it for constructing test or level layouts,
    /// then [`Board::settle`] if a stable board is needed.
    ///
    /// # Panics
    /// Panics if `x >= FIELD_W` or `y >= FIELD_H`. The wall border cannot
    /// be addressed.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        assert!(x < FIELD_W && y < FIELD_H);
        self.grid[y + 1][x + 1] = tile;
    }

    // Border-inclusive read used by neighbor queries; valid for
    // -1..=FIELD_W / -1..=FIELD_H, where the out-of-field ring is Wall.
    fn at(&self, x: isize, y: isize) -> Tile {
        self.grid[(y + 1) as usize][(x + 1) as usize]
    }

    fn put(&mut self, x: isize, y: isize, tile: Tile) {
        debug_assert!(x >= 0 && (x as usize) < FIELD_W);
        debug_assert!(y >= 0 && (y as usize) < FIELD_H);
        self.grid[(y + 1) as usize][(x + 1) as usize] = tile;
    }

    /// Returns the raw padded grid, the content key used for
    /// visited-state deduplication.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The moves that produced this board from the initial board.
    pub fn path(&self) -> &[Move] {
        &self.path
    }

    /// Enumerates all legal moves available on this board.
    ///
    /// For every mobile tile and each horizontal direction (left, then
    /// right), consecutive empty cells are offered as destinations.
    /// Extension in a direction ends after the current candidate when the
    /// cell below the next candidate is `Empty` (the tile would drop off
    /// a ledge there; stopping points past the fall are reachable through
    /// a later move) or holds the moving tile's own kind (it would
    /// immediately match and rest there). Tiles are visited in row-major
    /// order, so the result is deterministic.
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for y in 0..FIELD_H as isize {
            for x in 0..FIELD_W as isize {
                let t = self.at(x, y);
                if !t.is_mobile() {
                    continue;
                }

                for dir in [-1, 1] {
                    let mut x2 = x + dir;
                    while self.at(x2, y) == Tile::Empty {
                        moves.push(Move {
                            row: y as usize,
                            from_col: x as usize,
                            to_col: x2 as usize,
                        });
                        let below = self.at(x2, y + 1);
                        if below == Tile::Empty || below == t {
                            // Ledge or same kind: we're done in this direction
                            break;
                        }
                        x2 += dir;
                    }
                }
            }
        }
        moves
    }

    // Transition-boundary validation: the source must hold a mobile tile
    // and every cell from the first step through the destination must be
    // Empty. Accepts a superset of what `moves` generates (the early
    // stopping rules are not rechecked), which is enough to reject any
    // hand-built move that would teleport through obstacles.
    fn is_legal(&self, mv: Move) -> bool {
        if mv.row >= FIELD_H || mv.from_col >= FIELD_W || mv.to_col >= FIELD_W {
            return false;
        }
        if mv.to_col == mv.from_col {
            return false;
        }
        if !self.get(mv.from_col, mv.row).is_mobile() {
            return false;
        }

        let dir: isize = if mv.to_col > mv.from_col { 1 } else { -1 };
        let mut x = mv.from_col as isize + dir;
        loop {
            if self.at(x, mv.row as isize) != Tile::Empty {
                return false;
            }
            if x == mv.to_col as isize {
                return true;
            }
            x += dir;
        }
    }

    /// Applies a move and resolves the board to its stable fixed point.
    ///
    /// The board is cloned (grid and history), the move is appended to the
    /// clone's history, the tile slides from source to destination, and
    /// then gravity and match removal run until neither changes anything.
    /// `self` is never mutated, so the same board can be expanded for
    /// every candidate move.
    ///
    /// # Arguments
    /// * `mv`: The move to apply. Must reference a mobile source tile and
    ///   a destination reachable by an unobstructed slide along the row.
    ///
    /// # Returns
    /// * `Ok(Board)`: The settled successor board.
    /// * `Err(IllegalMove)`: The move failed validation. Unreachable when
    ///   only moves produced by [`Board::moves`] are applied.
    pub fn apply(&self, mv: Move) -> Result<Board, IllegalMove> {
        if !self.is_legal(mv) {
            return Err(IllegalMove(mv));
        }

        let mut next = self.clone();
        next.path.push(mv);

        let t = next.get(mv.from_col, mv.row);
        next.set(mv.from_col, mv.row, Tile::Empty);
        next.set(mv.to_col, mv.row, t);

        next.settle();
        Ok(next)
    }

    /// Runs gravity and match removal repeatedly until one full cycle
    /// changes nothing, leaving the board stable.
    ///
    /// Settling an already-stable board is a no-op, so calling this twice
    /// in a row yields an identical board.
    pub fn settle(&mut self) {
        loop {
            // drop all the tiles that can drop
            let mut changed = self.drop_tiles();

            // remove all the groups that can be removed
            if self.remove_tiles() {
                changed = true;
            }

            if !changed {
                return;
            }
        }
    }

    // One gravity pass. Rows are scanned bottom to top (the bottom row
    // has nowhere to fall); each mobile tile with an empty cell below
    // drops to the lowest contiguous empty cell in its column.
    fn drop_tiles(&mut self) -> bool {
        let mut changed = false;
        for y in (0..FIELD_H as isize - 1).rev() {
            for x in 0..FIELD_W as isize {
                let t = self.at(x, y);
                if t.is_mobile() && self.at(x, y + 1) == Tile::Empty {
                    let mut y2 = y;
                    while self.at(x, y2 + 1) == Tile::Empty {
                        y2 += 1;
                    }
                    self.put(x, y, Tile::Empty);
                    self.put(x, y2, t);
                    changed = true;
                }
            }
        }
        changed
    }

    // One removal pass. Every maximal 4-connected component of equal
    // erasable kind with two or more cells is cleared to Empty. Each cell
    // is decided at most once per pass.
    fn remove_tiles(&mut self) -> bool {
        let mut changed = false;
        let mut decided = [[false; FIELD_W]; FIELD_H];

        for y in 0..FIELD_H {
            for x in 0..FIELD_W {
                if decided[y][x] || !self.get(x, y).is_erasable() {
                    continue;
                }

                let group = self.collect_kind_group(x, y, &mut decided);
                if group.len() >= 2 {
                    for &(gx, gy) in &group {
                        self.put(gx as isize, gy as isize, Tile::Empty);
                    }
                    changed = true;
                }
            }
        }
        changed
    }

    // Flood fill over 4-connected cells of the same kind as (x, y), with
    // an explicit stack so adversarial layouts cannot overflow the call
    // stack. Marks every collected cell in `decided`.
    fn collect_kind_group(
        &self,
        x: usize,
        y: usize,
        decided: &mut [[bool; FIELD_W]; FIELD_H],
    ) -> Vec<(usize, usize)> {
        let kind = self.get(x, y);
        let mut group = Vec::new();
        let mut stack = vec![(x, y)];
        decided[y][x] = true;

        let dx = [-1, 1, 0, 0]; // Delta for column (left, right)
        let dy = [0, 0, -1, 1]; // Delta for row (up, down)

        while let Some((cx, cy)) = stack.pop() {
            group.push((cx, cy));

            for i in 0..4 {
                let nx = cx as isize + dx[i];
                let ny = cy as isize + dy[i];
                // The border is Wall, never an erasable kind, so a kind
                // match implies the neighbor is inside the playfield.
                if self.at(nx, ny) != kind {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !decided[ny][nx] {
                    decided[ny][nx] = true;
                    stack.push((nx, ny));
                }
            }
        }
        group
    }

    /// Returns `true` if no erasable tiles remain on the board.
    ///
    /// Glass blocks and the immobile kinds do not count; a board holding
    /// only those is cleared.
    pub fn is_solved(&self) -> bool {
        for y in 0..FIELD_H {
            for x in 0..FIELD_W {
                if self.get(x, y).is_erasable() {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Board {
    /// Formats the playfield as `FIELD_H` rows of tile symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..FIELD_H {
            for x in 0..FIELD_W {
                write!(f, "{}", self.get(x, y).to_char())?;
            }
            if y < FIELD_H - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
