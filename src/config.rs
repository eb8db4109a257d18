/// Board geometry is kept in pixels with a fixed cell size. Grid
/// indices are pixel extents divided by the cell size.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub cell_size: u16,
    pub initial_length: usize,
    pub tick_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 400,
            height: 400,
            cell_size: 10,
            initial_length: 5,
            tick_millis: 1000,
        }
    }
}

impl GameConfig {
    pub fn grid_cols(&self) -> u16 {
        self.width / self.cell_size
    }

    pub fn grid_rows(&self) -> u16 {
        self.height / self.cell_size
    }

    // A malformed configuration is a programming error, not a runtime
    // condition. No graceful recovery.
    pub fn validate(&self) {
        if self.cell_size == 0 || self.width < self.cell_size || self.height < self.cell_size {
            panic!("Board must be at least one cell in each dimension");
        }
        if self.initial_length == 0 || self.initial_length as u16 > self.grid_cols() {
            panic!("Initial snake length must fit on the top row");
        }
        if self.tick_millis == 0 {
            panic!("Tick interval must be non-zero");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_extents_come_from_pixels_and_cell_size() {
        let config = GameConfig { width: 400, height: 300, cell_size: 10, ..Default::default() };
        assert_eq!(config.grid_cols(), 40);
        assert_eq!(config.grid_rows(), 30);
    }

    #[test]
    fn default_board_is_400_square_with_one_second_ticks() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (400, 400));
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.initial_length, 5);
        assert_eq!(config.tick_millis, 1000);
    }

    #[test]
    #[should_panic]
    fn zero_cell_size_is_rejected() {
        GameConfig { cell_size: 0, ..Default::default() }.validate();
    }

    #[test]
    #[should_panic]
    fn snake_longer_than_the_top_row_is_rejected() {
        GameConfig { width: 30, initial_length: 4, ..Default::default() }.validate();
    }
}
