use std::path::PathBuf;

use anyhow::Result;

use pexeso_engine::coords::{ColorRgba, Rect};
use pexeso_engine::core::{App, AppControl, FrameCtx};
use pexeso_engine::input::Key;
use pexeso_engine::render::QuadRenderer;
use pexeso_glsl::{GlShaderApi, load_program};

use crate::board::{Board, Direction};

/// Card face colours, indexed by the card's colour value.
const PALETTE: [ColorRgba; 6] = [
    ColorRgba::opaque(0.86, 0.22, 0.22), // red
    ColorRgba::opaque(0.22, 0.66, 0.28), // green
    ColorRgba::opaque(0.23, 0.38, 0.85), // blue
    ColorRgba::opaque(0.93, 0.78, 0.16), // yellow
    ColorRgba::opaque(0.74, 0.25, 0.75), // magenta
    ColorRgba::opaque(0.20, 0.72, 0.76), // cyan
];

const FACE_DOWN: ColorRgba = ColorRgba::opaque(0.78, 0.78, 0.78);
const PIP: ColorRgba = ColorRgba::opaque(0.96, 0.96, 0.96);
const CURSOR: ColorRgba = ColorRgba::opaque(0.12, 0.12, 0.12);

/// The memory game: board, cursor, round bookkeeping, drawing.
///
/// Flow per round: the first space press reveals a card, a second space
/// press on a different unmatched card arms a check. The armed check is
/// drawn revealed for one frame and resolved on the next; after that the
/// pair either stays face-up (match) or stays revealed until any key
/// starts the next round.
pub struct GameApp {
    glsl_dir: PathBuf,
    board: Board,
    renderer: Option<QuadRenderer>,

    cursor: usize,
    first_pick: Option<usize>,
    check_pending: bool,
    round_over: bool,
    round: u32,
    cards_left: usize,
    won: bool,
}

impl GameApp {
    pub fn new(glsl_dir: PathBuf, board: Board) -> Self {
        let cards_left = board.len();
        Self {
            glsl_dir,
            board,
            renderer: None,
            cursor: 0,
            first_pick: None,
            check_pending: false,
            round_over: false,
            round: 1,
            cards_left,
            won: false,
        }
    }

    /// Ends the post-check reveal, hiding unmatched picks again.
    fn end_reveal(&mut self) {
        if self.round_over {
            self.first_pick = None;
            self.round_over = false;
        }
    }

    /// Resolves a check armed on the previous frame. Returns whether the
    /// state changed and a redraw is needed.
    fn resolve_check(&mut self) -> bool {
        if !self.check_pending {
            return false;
        }
        let Some(first) = self.first_pick else {
            self.check_pending = false;
            return false;
        };

        if self.board.same_face(first, self.cursor) {
            self.board.mark_matched(first);
            self.board.mark_matched(self.cursor);
            self.cards_left -= 2;
            log::info!("match!");
        }

        self.check_pending = false;
        self.round_over = true;

        if self.cards_left == 0 {
            self.won = true;
            log::info!("won in {} rounds", self.round);
        } else {
            self.round += 1;
            log::info!("round {}", self.round);
        }

        true
    }

    /// Applies one key press. Returns whether a redraw is needed.
    fn apply_key(&mut self, key: Key) -> bool {
        if self.won || self.check_pending {
            return false;
        }

        let direction = match key {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            _ => None,
        };

        if let Some(direction) = direction {
            self.end_reveal();
            self.cursor = self.board.move_cursor(direction, self.cursor);
            return true;
        }

        if key == Key::Space {
            self.end_reveal();
            if !self.board.is_matched(self.cursor) {
                match self.first_pick {
                    None => self.first_pick = Some(self.cursor),
                    Some(first) if first != self.cursor => self.check_pending = true,
                    Some(_) => {}
                }
            }
            return true;
        }

        false
    }

    fn draw(&self, ctx: &FrameCtx<'_>, renderer: &QuadRenderer) {
        let (w, h) = ctx.size();
        renderer.begin(ctx.gl, w, h);

        let rows = self.board.rows();
        let cols = self.board.cols();
        let cell = ((w / cols as f32).min(h / rows as f32)).floor();
        let x0 = (w - cell * cols as f32) * 0.5;
        let y0 = (h - cell * rows as f32) * 0.5;

        for index in 0..self.board.len() {
            let row = index / cols;
            let col = index % cols;
            let cell_rect = Rect::new(
                x0 + col as f32 * cell,
                y0 + row as f32 * cell,
                cell,
                cell,
            );
            let card_rect = cell_rect.inset(cell * 0.06);

            let face_up = self.board.is_matched(index)
                || self.first_pick == Some(index)
                || (index == self.cursor && (self.check_pending || self.round_over));

            if face_up {
                let card = self.board.card(index);
                let colour = PALETTE[card.colour as usize % PALETTE.len()];
                renderer.fill_rect(ctx.gl, card_rect, colour);
                self.draw_pips(ctx, renderer, card_rect, card.sign);
            } else {
                renderer.fill_rect(ctx.gl, card_rect, FACE_DOWN);
            }

            if index == self.cursor {
                renderer.stroke_rect(ctx.gl, cell_rect.inset(cell * 0.02), cell * 0.025, CURSOR);
            }
        }
    }

    /// Draws `sign + 1` pips across the middle of the card face.
    fn draw_pips(&self, ctx: &FrameCtx<'_>, renderer: &QuadRenderer, card_rect: Rect, sign: u8) {
        let pips = sign as usize + 1;
        let pip = card_rect.size.x * 0.14;
        let step = pip * 2.0;
        let center = card_rect.center();
        let start_x = center.x - step * (pips as f32 - 1.0) * 0.5;

        for p in 0..pips {
            let x = start_x + p as f32 * step;
            renderer.fill_rect(
                ctx.gl,
                Rect::new(x - pip * 0.5, center.y - pip * 0.5, pip, pip),
                PIP,
            );
        }
    }
}

impl App for GameApp {
    fn on_ready(&mut self, gl: &glow::Context) -> Result<()> {
        let api = GlShaderApi::new(gl);
        let program = load_program(
            &api,
            &self.glsl_dir.join("CardVertex.glsl"),
            &self.glsl_dir.join("CardFragment.glsl"),
        )?;
        self.renderer = Some(QuadRenderer::new(gl, program)?);

        log::info!("round {}", self.round);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if self.resolve_check() {
            ctx.window.request_redraw();
        }

        if ctx.frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        // Deterministic order; the set rarely holds more than one key.
        for key in [
            Key::ArrowUp,
            Key::ArrowDown,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::Space,
        ] {
            if ctx.frame.keys_pressed.contains(&key) && self.apply_key(key) {
                ctx.window.request_redraw();
            }
        }

        if let Some(renderer) = self.renderer.as_ref() {
            self.draw(ctx, renderer);
        }

        // An armed check needs one revealed frame before resolution.
        if self.check_pending {
            ctx.window.request_redraw();
        }

        AppControl::Continue
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        if self.cards_left != 0 {
            log::info!("game aborted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(rows: usize, cols: usize, colours: usize, signs: usize) -> GameApp {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::deal(rows, cols, colours, signs, &mut rng);
        GameApp::new(PathBuf::from("."), board)
    }

    /// Index of card 0's partner.
    fn partner_of_zero(app: &GameApp) -> usize {
        (1..app.board.len())
            .find(|&i| app.board.same_face(0, i))
            .unwrap()
    }

    #[test]
    fn first_space_picks_the_cursor_card() {
        let mut a = app(2, 2, 2, 1);
        a.apply_key(Key::Space);
        assert_eq!(a.first_pick, Some(0));
        assert!(!a.check_pending);
    }

    #[test]
    fn space_on_the_same_card_does_not_arm_a_check() {
        let mut a = app(2, 2, 2, 1);
        a.apply_key(Key::Space);
        a.apply_key(Key::Space);
        assert!(!a.check_pending);
    }

    #[test]
    fn matching_pair_is_resolved_and_stays_matched() {
        let mut a = app(2, 2, 2, 1);
        let partner = partner_of_zero(&a);

        a.apply_key(Key::Space);
        a.cursor = partner;
        a.apply_key(Key::Space);
        assert!(a.check_pending);

        assert!(a.resolve_check());
        assert!(a.board.is_matched(0));
        assert!(a.board.is_matched(partner));
        assert_eq!(a.cards_left, 2);
        assert_eq!(a.round, 2);
        assert!(a.round_over);
    }

    #[test]
    fn mismatched_pair_keeps_cards_hidden_for_the_next_round() {
        let mut a = app(2, 2, 2, 1);
        let partner = partner_of_zero(&a);
        // Any index that is not 0 and not the partner mismatches card 0.
        let other = (1..4).find(|&i| i != partner).unwrap();

        a.apply_key(Key::Space);
        a.cursor = other;
        a.apply_key(Key::Space);
        a.resolve_check();

        assert!(!a.board.is_matched(0));
        assert_eq!(a.cards_left, 4);
        assert_eq!(a.round, 2);

        // The next key press ends the reveal.
        a.apply_key(Key::ArrowRight);
        assert_eq!(a.first_pick, None);
        assert!(!a.round_over);
    }

    #[test]
    fn clearing_the_board_wins() {
        let mut a = app(2, 2, 2, 1);
        let partner = partner_of_zero(&a);
        let (other_a, other_b) = {
            let mut rest = (1..4).filter(|&i| i != partner);
            (rest.next().unwrap(), rest.next().unwrap())
        };

        a.apply_key(Key::Space);
        a.cursor = partner;
        a.apply_key(Key::Space);
        a.resolve_check();

        a.apply_key(Key::ArrowRight); // end reveal
        a.cursor = other_a;
        a.apply_key(Key::Space);
        a.cursor = other_b;
        a.apply_key(Key::Space);
        a.resolve_check();

        assert!(a.won);
        assert_eq!(a.cards_left, 0);
        // The winning check does not start another round.
        assert_eq!(a.round, 2);
    }

    #[test]
    fn input_is_ignored_once_won() {
        let mut a = app(2, 2, 2, 1);
        a.won = true;
        a.cards_left = 0;
        assert!(!a.apply_key(Key::Space));
        assert!(!a.apply_key(Key::ArrowDown));
    }

    #[test]
    fn space_on_a_matched_card_is_a_no_op() {
        let mut a = app(2, 2, 2, 1);
        a.board.mark_matched(0);
        a.apply_key(Key::Space);
        assert_eq!(a.first_pick, None);
    }
}
