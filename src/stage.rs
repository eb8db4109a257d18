use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::input::Direction;
use crate::snake::{Cell, GridInt, Snake};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Continue,
    Ate,
    GameOver,
}

/// Everything one run mutates, plus the pieces that survive a restart
/// (the configuration and the last known highest score).
pub struct Stage {
    config: GameConfig,
    snake: Snake,
    food: Cell,
    score: u64,
    highest_score: u64,
    is_over: bool,
    rng: StdRng,
}

impl Stage {
    pub fn new(config: GameConfig) -> Self {
        Self::init(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::init(config, StdRng::seed_from_u64(seed))
    }

    fn init(config: GameConfig, mut rng: StdRng) -> Self {
        config.validate();
        let snake = Snake::new(config.initial_length);
        let food = place_food(&config, &mut rng);
        Stage {
            config,
            snake,
            food,
            score: 0,
            highest_score: 0,
            is_over: false,
            rng,
        }
    }

    pub fn step(&mut self, latest: Option<Direction>) -> StepResult {
        // The driver's timer never stops; once the run is over every
        // further tick must leave the state untouched.
        if self.is_over {
            return StepResult::Continue;
        }

        if let Some(direction) = latest {
            self.snake.set_direction(direction);
        }

        let candidate = self.snake.next_head();
        if self.hits_wall(candidate) {
            self.is_over = true;
            return StepResult::GameOver;
        }

        if candidate == self.food {
            self.snake.grow(candidate);
            self.score += 1;
            self.food = place_food(&self.config, &mut self.rng);
            return StepResult::Ate;
        }

        self.snake.advance(candidate);
        StepResult::Continue
    }

    // Playable indices run 0..cols-1; -1 and cols itself are the walls.
    fn hits_wall(&self, cell: Cell) -> bool {
        cell.x == -1
            || cell.x == self.config.grid_cols() as GridInt
            || cell.y == -1
            || cell.y == self.config.grid_rows() as GridInt
    }

    pub fn restart(&mut self) {
        self.snake = Snake::new(self.config.initial_length);
        self.food = place_food(&self.config, &mut self.rng);
        self.score = 0;
        self.is_over = false;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn body(&self) -> &[Cell] {
        self.snake.body()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn highest_score(&self) -> u64 {
        self.highest_score
    }

    pub fn set_highest_score(&mut self, value: u64) {
        self.highest_score = value;
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }
}

// Coordinates are sampled uniformly over the visible grid and rounded.
// Cells occupied by the snake are not excluded, so food can land on
// the body.
fn place_food(config: &GameConfig, rng: &mut StdRng) -> Cell {
    let max_x = f64::from(config.width - config.cell_size) / f64::from(config.cell_size);
    let max_y = f64::from(config.height - config.cell_size) / f64::from(config.cell_size);
    let x = (rng.gen::<f64>() * max_x).round() as GridInt;
    let y = (rng.gen::<f64>() * max_y).round() as GridInt;
    Cell::new(x, y)
}
