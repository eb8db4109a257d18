use crate::input::Direction::{self, *};

pub type GridInt = i16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: GridInt,
    pub y: GridInt,
}

impl Cell {
    pub fn new(x: GridInt, y: GridInt) -> Self {
        Cell { x, y }
    }

    pub fn neighbour(&self, direction: Direction) -> Cell {
        match direction {
            Up => Cell::new(self.x, self.y - 1),
            Down => Cell::new(self.x, self.y + 1),
            Left => Cell::new(self.x - 1, self.y),
            Right => Cell::new(self.x + 1, self.y),
        }
    }
}

/// The body is ordered head-first; the tail sits at the last index.
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
}

impl Snake {
    // The snake starts along the top row heading right, head in front.
    pub fn new(size: usize) -> Self {
        let body = (0..size).rev().map(|i| Cell::new(i as GridInt, 0)).collect();
        Snake { body, direction: Right }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    // Any recognized key steers, reversal included.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn next_head(&self) -> Cell {
        self.head().neighbour(self.direction)
    }

    // Moves without growing: the tail cell is popped and reused as the
    // new head instead of shifting every cell forward.
    pub fn advance(&mut self, head: Cell) {
        let mut tail = self.body.pop().unwrap();
        tail.x = head.x;
        tail.y = head.y;
        self.body.insert(0, tail);
    }

    pub fn grow(&mut self, head: Cell) {
        self.body.insert(0, head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_body_sits_on_the_top_row_head_first() {
        let snake = Snake::new(4);
        let expected = [Cell::new(3, 0), Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)];
        assert_eq!(snake.body(), &expected);
        assert_eq!(snake.head(), Cell::new(3, 0));
        assert_eq!(snake.direction(), Right);
    }

    #[test]
    fn advance_reuses_the_tail_as_the_new_head() {
        let mut snake = Snake::new(3);
        snake.advance(snake.next_head());
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body(), &[Cell::new(3, 0), Cell::new(2, 0), Cell::new(1, 0)]);
    }

    #[test]
    fn grow_prepends_without_dropping_the_tail() {
        let mut snake = Snake::new(3);
        snake.grow(snake.next_head());
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(3, 0));
        assert_eq!(snake.body()[3], Cell::new(0, 0));
    }

    #[test]
    fn neighbour_offsets_one_cell_per_direction() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.neighbour(Up), Cell::new(5, 4));
        assert_eq!(cell.neighbour(Down), Cell::new(5, 6));
        assert_eq!(cell.neighbour(Left), Cell::new(4, 5));
        assert_eq!(cell.neighbour(Right), Cell::new(6, 5));
    }

    #[test]
    fn steering_is_unfiltered_even_into_a_reversal() {
        let mut snake = Snake::new(3);
        snake.set_direction(Left);
        assert_eq!(snake.direction(), Left);
        assert_eq!(snake.next_head(), Cell::new(1, 0));
    }
}
