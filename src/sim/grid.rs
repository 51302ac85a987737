//! Maze grid and level blueprint
//!
//! The maze layout is fixed per level. The only mutation after construction is
//! collectible pickup, which turns a pellet or power pellet into empty floor.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::motion::Position;

/// Contents of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellKind {
    Wall,
    Pellet,
    PowerPellet,
    #[default]
    Empty,
}

impl CellKind {
    pub fn from_char(c: char) -> Self {
        match c {
            '#' => CellKind::Wall,
            '.' => CellKind::Pellet,
            'o' => CellKind::PowerPellet,
            _ => CellKind::Empty,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Pellet => '.',
            CellKind::PowerPellet => 'o',
            CellKind::Empty => ' ',
        }
    }

    /// Pellets and power pellets are consumed when the player steps on them
    pub fn is_collectible(&self) -> bool {
        matches!(self, CellKind::Pellet | CellKind::PowerPellet)
    }
}

/// Rectangular maze, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Build a grid from text rows. Short rows are padded with empty floor.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let mut count = 0;
            for c in row.chars() {
                cells.push(CellKind::from_char(c));
                count += 1;
            }
            cells.extend(std::iter::repeat_n(CellKind::Empty, width - count));
        }
        Self {
            width: width as i32,
            height: height as i32,
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    /// Out-of-range positions read as walls.
    pub fn cell_at(&self, pos: Position) -> CellKind {
        self.index(pos)
            .map(|i| self.cells[i])
            .unwrap_or(CellKind::Wall)
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.cell_at(pos) == CellKind::Wall
    }

    /// Clear a collectible cell and return what was there.
    ///
    /// Returns `Empty` and leaves the grid alone for walls, empty floor, and
    /// out-of-range positions.
    pub fn consume(&mut self, pos: Position) -> CellKind {
        let Some(i) = self.index(pos) else {
            return CellKind::Empty;
        };
        let kind = self.cells[i];
        if kind.is_collectible() {
            self.cells[i] = CellKind::Empty;
            kind
        } else {
            CellKind::Empty
        }
    }

    /// Number of pellets and power pellets still on the grid
    pub fn collectible_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_collectible()).count() as u32
    }

    /// Iterate all positions with their cell contents, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (IVec2::new(i as i32 % width, i as i32 / width), kind))
    }

    /// Text form of the grid, one string per row
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(CellKind::as_char).collect())
            .collect()
    }
}

/// Corner of the maze a pursuer drifts toward when it is not tracking the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HomeCorner {
    /// Innermost open cell of the corner, just inside the outer wall
    pub fn target(self, width: i32, height: i32) -> Position {
        match self {
            HomeCorner::TopLeft => IVec2::new(1, 1),
            HomeCorner::TopRight => IVec2::new(width - 2, 1),
            HomeCorner::BottomLeft => IVec2::new(1, height - 2),
            HomeCorner::BottomRight => IVec2::new(width - 2, height - 2),
        }
    }
}

/// Identity and presentation data for a pursuer slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PursuerPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub corner: HomeCorner,
}

pub static PURSUER_PRESETS: [PursuerPreset; 4] = [
    PursuerPreset {
        id: "blinky",
        name: "Blinky",
        color: "#ff3c3c",
        corner: HomeCorner::TopRight,
    },
    PursuerPreset {
        id: "pinky",
        name: "Pinky",
        color: "#ff9bff",
        corner: HomeCorner::TopLeft,
    },
    PursuerPreset {
        id: "inky",
        name: "Inky",
        color: "#4effff",
        corner: HomeCorner::BottomRight,
    },
    PursuerPreset {
        id: "clyde",
        name: "Clyde",
        color: "#ffb852",
        corner: HomeCorner::BottomLeft,
    },
];

/// The standard maze. Fully enclosed, 19 columns by 17 rows.
pub const CLASSIC_MAZE: [&str; 17] = [
    "###################",
    "#o....#.....#....o#",
    "#.###.#.###.#.###.#",
    "#.#...#.....#...#.#",
    "#.#.###.###.###.#.#",
    "#.#...........#.#.#",
    "#.#.###.#.#.###.#.#",
    "#.....#.#.#.#.....#",
    "###.#.#.#.#.#.#.###",
    "#...#.#.....#.#...#",
    "#.#.#.###.###.#.#.#",
    "#.#.#.#   #.#.#.#.#",
    "#.#.#.#.#.#.#.#.#.#",
    "#........G........#",
    "###.###.#.#.###.###",
    "#o....#.....#....o#",
    "###################",
];

/// Everything needed to start a round on a given maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelBlueprint {
    pub grid: Grid,
    pub player_start: Position,
    pub pursuer_starts: Vec<Position>,
}

impl LevelBlueprint {
    /// Build a blueprint, clearing any collectible under an actor start cell.
    pub fn new(rows: &[&str], player_start: Position, pursuer_starts: Vec<Position>) -> Self {
        let mut grid = Grid::from_rows(rows);
        for &pos in std::iter::once(&player_start).chain(pursuer_starts.iter()) {
            let _ = grid.consume(pos);
        }
        Self {
            grid,
            player_start,
            pursuer_starts,
        }
    }

    pub fn classic() -> Self {
        Self::new(
            &CLASSIC_MAZE,
            IVec2::new(9, 13),
            vec![
                IVec2::new(8, 11),
                IVec2::new(9, 11),
                IVec2::new(9, 9),
                IVec2::new(9, 10),
            ],
        )
    }

    /// Preset for pursuer slot `index` (slots beyond the presets cycle)
    pub fn preset(index: usize) -> &'static PursuerPreset {
        &PURSUER_PRESETS[index % PURSUER_PRESETS.len()]
    }
}

impl Default for LevelBlueprint {
    fn default() -> Self {
        Self::classic()
    }
}
