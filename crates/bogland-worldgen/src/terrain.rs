//! Terrain tags and the grid that holds them.

use std::fmt;

use bogland_common::{BoglandError, BoglandResult, GridCoord};

/// Terrain tag of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Terrain {
    /// Empty ground. Every cell starts here.
    #[default]
    Sand,
    /// Seed cell of a sinkhole.
    SinkholeCore,
    /// Periphery grown around a core.
    SinkholeSide,
    /// Swamp fluid.
    Swamp,
    /// Ground-affiliated nest.
    NestBc,
    /// Swamp-affiliated nest on dry ground.
    NestSc,
    /// Swamp-affiliated nest sitting on a swamp cell.
    NestSwampSc,
    /// BC nest without enough SC support.
    NestStarvedBc,
}

impl Terrain {
    /// Every tag, in legend order.
    pub const ALL: [Self; 8] = [
        Self::Sand,
        Self::SinkholeCore,
        Self::SinkholeSide,
        Self::Swamp,
        Self::NestBc,
        Self::NestSc,
        Self::NestSwampSc,
        Self::NestStarvedBc,
    ];

    /// Human readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Sand => "Sand",
            Self::SinkholeCore => "Sinkhole core",
            Self::SinkholeSide => "Sinkhole side",
            Self::Swamp => "Swamp",
            Self::NestBc => "BC nest",
            Self::NestSc => "SC nest",
            Self::NestSwampSc => "SC nest (swamp)",
            Self::NestStarvedBc => "Starved BC nest",
        }
    }

    /// One-character symbol used by the grid's `Display` impl.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Sand => '.',
            Self::SinkholeCore => '@',
            Self::SinkholeSide => 'o',
            Self::Swamp => '~',
            Self::NestBc => 'b',
            Self::NestSc => 's',
            Self::NestSwampSc => 'S',
            Self::NestStarvedBc => 'x',
        }
    }

    /// Position in [`Terrain::ALL`].
    #[must_use]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Core or side sinkhole tile.
    #[must_use]
    pub fn is_sinkhole(self) -> bool {
        matches!(self, Self::SinkholeCore | Self::SinkholeSide)
    }

    /// Open swamp tile.
    #[must_use]
    pub fn is_swamp(self) -> bool {
        self == Self::Swamp
    }

    /// Live (not starved) BC nest tile.
    #[must_use]
    pub fn is_bc_nest(self) -> bool {
        self == Self::NestBc
    }

    /// SC nest tile, dry or on swamp.
    #[must_use]
    pub fn is_sc_nest(self) -> bool {
        matches!(self, Self::NestSc | Self::NestSwampSc)
    }

    /// Dry SC nest tile. Only these feed BC nests.
    #[must_use]
    pub fn is_dry_sc_nest(self) -> bool {
        self == Self::NestSc
    }

    /// Whether the cell is still unclaimed.
    #[must_use]
    pub fn is_sand(self) -> bool {
        self == Self::Sand
    }
}

/// Per-tag cell counts for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerrainCensus {
    counts: [usize; 8],
}

impl TerrainCensus {
    /// Number of cells holding `terrain`.
    #[must_use]
    pub fn count(&self, terrain: Terrain) -> usize {
        self.counts[terrain.ordinal()]
    }

    /// Total number of cells counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(tag, count)` pairs in legend order.
    pub fn iter(&self) -> impl Iterator<Item = (Terrain, usize)> + '_ {
        Terrain::ALL.iter().map(|&t| (t, self.count(t)))
    }
}

impl fmt::Display for TerrainCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (terrain, count) in self.iter().filter(|&(_, n)| n > 0) {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={count}", terrain.display_name())?;
            first = false;
        }
        Ok(())
    }
}

/// Fixed-size, row-major grid of terrain tags with origin at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    width: i32,
    height: i32,
    cells: Vec<Terrain>,
}

impl TerrainGrid {
    /// Creates a grid of `width × height` sand cells.
    pub fn new(width: i32, height: i32) -> BoglandResult<Self> {
        if width < 1 || height < 1 {
            return Err(BoglandError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Terrain::Sand; (width as usize) * (height as usize)],
        })
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Whether `(x, y)` lies on the grid.
    #[must_use]
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Terrain at `(x, y)`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Terrain> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells
            .get(GridCoord::new(x, y).to_index(self.width))
            .copied()
    }

    /// Terrain at `coord`, or `None` off the grid.
    #[must_use]
    pub fn at(&self, coord: GridCoord) -> Option<Terrain> {
        self.get(coord.x, coord.y)
    }

    /// Overwrites `(x, y)`. Returns false off the grid.
    pub fn set(&mut self, x: i32, y: i32, terrain: Terrain) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let index = GridCoord::new(x, y).to_index(self.width);
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = terrain;
            return true;
        }
        false
    }

    /// Writes `terrain` only if `(x, y)` is on the grid and still sand.
    pub fn fill_sand(&mut self, x: i32, y: i32, terrain: Terrain) -> bool {
        if self.get(x, y) != Some(Terrain::Sand) {
            return false;
        }
        self.set(x, y, terrain)
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Terrain] {
        &self.cells
    }

    /// Row-major iterator over `(coord, terrain)`.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, Terrain)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &t)| (GridCoord::from_index(i, self.width), t))
    }

    /// Coordinates of every cell holding `terrain`, row-major.
    #[must_use]
    pub fn positions_of(&self, terrain: Terrain) -> Vec<GridCoord> {
        self.iter()
            .filter(|&(_, t)| t == terrain)
            .map(|(c, _)| c)
            .collect()
    }

    /// Counts cells per tag.
    #[must_use]
    pub fn census(&self) -> TerrainCensus {
        let mut census = TerrainCensus::default();
        for &t in &self.cells {
            census.counts[t.ordinal()] += 1;
        }
        census
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for t in row {
                write!(f, "{}", t.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
