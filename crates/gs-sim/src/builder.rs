//! Fluent builder for constructing a [`World`].

use gs_body::{Body, BodyError};
use gs_core::{Cell, Direction, Grid, SimConfig, SimRng};
use gs_path::{ConfiguredPathFinder, PathFinder};

use crate::{SimError, SimResult, SimState, World};

/// Fluent builder for [`World<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: grid size, seed, tick cap and search policy
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                          |
/// |-----------------------|--------------------------------------------------|
/// | `.grid(g)`            | `Grid::from_config(&config.grid)`                |
/// | `.body(cells)`        | one cell at the grid centre                      |
/// | `.direction(d)`       | uniformly random                                 |
/// | `.target(c)`          | uniformly random free cell                       |
/// | `.path_finder(p)`     | `ConfiguredPathFinder` from `config.search`      |
///
/// Random defaults are drawn from the world's own RNG in the order listed
/// (direction, then target), so a given seed always yields the same start.
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config)
///     .body([Cell::new(2, 2), Cell::new(2, 1)])
///     .direction(Direction::Down)
///     .target(Cell::new(0, 2))
///     .build()?;
/// world.run(&mut NoopObserver)?;
/// ```
pub struct WorldBuilder<P: PathFinder = ConfiguredPathFinder> {
    config:    SimConfig,
    grid:      Option<Grid>,
    body:      Option<Vec<Cell>>,
    direction: Option<Direction>,
    target:    Option<Cell>,
    finder:    P,
}

impl WorldBuilder<ConfiguredPathFinder> {
    /// Create a builder using the search policy named in `config`.
    pub fn new(config: SimConfig) -> Self {
        let finder = ConfiguredPathFinder::new(config.search, config.tie_break);
        Self {
            config,
            grid:      None,
            body:      None,
            direction: None,
            target:    None,
            finder,
        }
    }
}

impl<P: PathFinder> WorldBuilder<P> {
    /// Use an explicit grid instead of deriving it from `config.grid`.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Start with these head-first body cells.
    pub fn body<I: IntoIterator<Item = Cell>>(mut self, cells: I) -> Self {
        self.body = Some(cells.into_iter().collect());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Place the first target explicitly.  Must be in bounds and off the body.
    pub fn target(mut self, target: Cell) -> Self {
        self.target = Some(target);
        self
    }

    /// Replace the search implementation.
    pub fn path_finder<Q: PathFinder>(self, finder: Q) -> WorldBuilder<Q> {
        WorldBuilder {
            config:    self.config,
            grid:      self.grid,
            body:      self.body,
            direction: self.direction,
            target:    self.target,
            finder,
        }
    }

    /// Validate inputs and return a ready-to-step [`World`].
    pub fn build(self) -> SimResult<World<P>> {
        let grid = match self.grid {
            Some(g) => g,
            None    => Grid::from_config(&self.config.grid)?,
        };
        let mut rng = SimRng::new(self.config.seed);

        let body = match self.body {
            Some(cells) => Body::from_cells(&grid, cells)?,
            None        => Body::new(grid.center()),
        };

        let direction = match self.direction {
            Some(d) => d,
            None    => rng.random_direction(),
        };

        // A body that already covers the grid starts (and ends) as Filled.
        let (target, state) = match self.target {
            Some(t) => {
                if !grid.in_bounds(t) {
                    return Err(SimError::Config(format!("target {t} is outside the grid")));
                }
                if body.occupies(t, true) {
                    return Err(SimError::Config(format!("target {t} is on the body")));
                }
                (t, SimState::Running)
            }
            None => match body.place_target(&grid, &mut rng) {
                Ok(t) => (t, SimState::Running),
                Err(BodyError::GridExhausted { .. }) => (body.head(), SimState::Filled),
                Err(e) => return Err(e.into()),
            },
        };

        Ok(World {
            config: self.config,
            grid,
            body,
            target,
            direction,
            score: 0,
            state,
            tick: 0,
            rng,
            finder: self.finder,
        })
    }
}
