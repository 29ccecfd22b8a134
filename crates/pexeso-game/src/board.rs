use rand::Rng;
use rand::seq::SliceRandom;

/// Cursor movement direction on the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One card: a colour/sign face plus whether its pair has been found.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Card {
    pub colour: u8,
    pub sign: u8,
    matched: bool,
}

/// The rows x cols card grid.
///
/// Cards are indexed row-major. The grid itself is pure bookkeeping; game
/// flow (rounds, picks, pending checks) lives in the app layer.
pub struct Board {
    rows: usize,
    cols: usize,
    cards: Vec<Card>,
}

impl Board {
    /// Deals a shuffled grid of `rows * cols` cards.
    ///
    /// Faces cycle colour-first through the `colours x signs` combinations
    /// so every face occurs an even number of times. `rows * cols` must be
    /// even.
    pub fn deal<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        colours: usize,
        signs: usize,
        rng: &mut R,
    ) -> Self {
        debug_assert!(rows * cols % 2 == 0, "odd number of cards");

        let pairs = rows * cols / 2;
        let mut cards = Vec::with_capacity(rows * cols);

        for pair in 0..pairs {
            let card = Card {
                colour: (pair % colours) as u8,
                sign: ((pair / colours) % signs) as u8,
                matched: false,
            };
            cards.push(card);
            cards.push(card);
        }

        cards.shuffle(rng);

        Self { rows, cols, cards }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> &Card {
        &self.cards[index]
    }

    /// Whether the card's pair has already been found.
    pub fn is_matched(&self, index: usize) -> bool {
        self.cards[index].matched
    }

    /// Marks a card as found; it stays face-up for the rest of the game.
    pub fn mark_matched(&mut self, index: usize) {
        self.cards[index].matched = true;
    }

    /// Whether two cards carry the same colour/sign face.
    pub fn same_face(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.cards[a], &self.cards[b]);
        a.colour == b.colour && a.sign == b.sign
    }

    /// Moves the cursor one cell, wrapping around the grid edges.
    pub fn move_cursor(&self, direction: Direction, from: usize) -> usize {
        let row = from / self.cols;
        let col = from % self.cols;

        let (row, col) = match direction {
            Direction::Up => ((row + self.rows - 1) % self.rows, col),
            Direction::Down => ((row + 1) % self.rows, col),
            Direction::Left => (row, (col + self.cols - 1) % self.cols),
            Direction::Right => (row, (col + 1) % self.cols),
        };

        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(rows: usize, cols: usize, colours: usize, signs: usize) -> Board {
        let mut rng = StdRng::seed_from_u64(7);
        Board::deal(rows, cols, colours, signs, &mut rng)
    }

    // ── deal ──────────────────────────────────────────────────────────────

    #[test]
    fn deal_fills_the_grid() {
        let b = board(4, 4, 6, 3);
        assert_eq!(b.len(), 16);
        assert_eq!(b.rows(), 4);
        assert_eq!(b.cols(), 4);
    }

    #[test]
    fn every_face_occurs_an_even_number_of_times() {
        let b = board(4, 3, 2, 3);
        let mut counts = std::collections::HashMap::new();
        for i in 0..b.len() {
            let c = b.card(i);
            *counts.entry((c.colour, c.sign)).or_insert(0usize) += 1;
        }
        assert!(counts.values().all(|n| n % 2 == 0));
    }

    #[test]
    fn faces_stay_within_requested_ranges() {
        let b = board(6, 4, 3, 2);
        for i in 0..b.len() {
            let c = b.card(i);
            assert!(c.colour < 3);
            assert!(c.sign < 2);
        }
    }

    #[test]
    fn same_seed_deals_the_same_grid() {
        let a = board(4, 4, 6, 3);
        let b = board(4, 4, 6, 3);
        for i in 0..a.len() {
            assert_eq!(a.card(i), b.card(i));
        }
    }

    // ── matching ──────────────────────────────────────────────────────────

    #[test]
    fn cards_of_one_pair_share_a_face() {
        let b = board(2, 2, 2, 1);
        // 2x2 with two colours and one sign: exactly two distinct faces.
        let partner = (1..4).find(|&i| b.same_face(0, i)).unwrap();
        for i in 1..4 {
            assert_eq!(b.same_face(0, i), i == partner);
        }
    }

    #[test]
    fn mark_matched_is_sticky() {
        let mut b = board(2, 2, 2, 1);
        assert!(!b.is_matched(3));
        b.mark_matched(3);
        assert!(b.is_matched(3));
    }

    // ── cursor movement ───────────────────────────────────────────────────

    #[test]
    fn cursor_moves_within_the_grid() {
        let b = board(4, 4, 6, 3);
        assert_eq!(b.move_cursor(Direction::Right, 0), 1);
        assert_eq!(b.move_cursor(Direction::Down, 1), 5);
        assert_eq!(b.move_cursor(Direction::Left, 5), 4);
        assert_eq!(b.move_cursor(Direction::Up, 4), 0);
    }

    #[test]
    fn cursor_wraps_at_every_edge() {
        let b = board(3, 4, 6, 3);
        // Top-left corner.
        assert_eq!(b.move_cursor(Direction::Up, 0), 8);
        assert_eq!(b.move_cursor(Direction::Left, 0), 3);
        // Bottom-right corner.
        assert_eq!(b.move_cursor(Direction::Down, 11), 3);
        assert_eq!(b.move_cursor(Direction::Right, 11), 8);
    }
}
