//! GameView: maps a [`BoardView`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each card is a 5x3 box with its glyph in the middle:
//!
//! ```text
//! ┌───┐ ┌───┐
//! │ ? │ │ C │
//! └───┘ └───┘
//! ```

use crate::board_view::{BoardView, CardView};
use crate::fb::{BoxChars, CellStyle, FrameBuffer, Rgb};
use crate::types::{CardFace, CardState, Difficulty};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Card box width in terminal columns.
pub const CARD_W: u16 = 5;
/// Card box height in terminal rows.
pub const CARD_H: u16 = 3;

const GAP_X: u16 = 1;
const PAD_X: u16 = 1;
const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 14;

const TABLE: Rgb = Rgb::new(24, 40, 32);

/// Where the board frame sits for a given view and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    columns: u16,
}

impl Layout {
    fn card_origin(&self, position: usize) -> (u16, u16) {
        let col = (position % self.columns as usize) as u16;
        let row = (position / self.columns as usize) as u16;
        (
            self.start_x + 1 + PAD_X + col * (CARD_W + GAP_X),
            self.start_y + 1 + row * CARD_H,
        )
    }
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, view: &BoardView, viewport: Viewport) -> Layout {
        let columns = (view.columns as u16).max(1);
        let rows = view.rows() as u16;
        let grid_w = columns * CARD_W + columns.saturating_sub(1) * GAP_X;
        let frame_w = grid_w + 2 * PAD_X + 2;
        let frame_h = rows * CARD_H + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            columns,
        }
    }

    /// Render the current view into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        view: &BoardView,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(view, viewport);
        let table = CellStyle::fg(Rgb::new(80, 90, 80)).on(TABLE);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            table,
        );
        fb.draw_box(
            layout.start_x,
            layout.start_y,
            layout.frame_w,
            layout.frame_h,
            BoxChars::LIGHT,
            border,
        );

        for (position, card) in view.cards.iter().enumerate() {
            let selected = cursor == Some(position);
            self.draw_card(fb, &layout, position, card, selected);
        }

        self.draw_side_panel(fb, view, viewport, &layout);

        if let Some(message) = &view.win_message {
            self.draw_banner(fb, viewport, &layout, message);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        view: &BoardView,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, cursor, viewport, &mut fb);
        fb
    }

    /// Hit-test a terminal cell against the card boxes.
    pub fn card_at(&self, view: &BoardView, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        let layout = self.layout(view, viewport);
        (0..view.cards.len()).find(|&position| {
            let (cx, cy) = layout.card_origin(position);
            x >= cx && x < cx + CARD_W && y >= cy && y < cy + CARD_H
        })
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        position: usize,
        card: &CardView,
        selected: bool,
    ) {
        let (x, y) = layout.card_origin(position);

        let (glyph, glyph_style) = match card.state {
            CardState::FaceDown => ('?', CellStyle::fg(Rgb::new(150, 150, 160))),
            CardState::FaceUp => (card.face.glyph(), CellStyle::fg(face_color(card.face)).bold()),
            CardState::Matched => (card.face.glyph(), CellStyle::fg(Rgb::new(100, 200, 120)).dim()),
        };

        let (chars, edge) = if selected {
            (BoxChars::HEAVY, CellStyle::fg(Rgb::new(250, 210, 80)).bold())
        } else if card.state == CardState::Matched {
            (BoxChars::LIGHT, CellStyle::fg(Rgb::new(70, 130, 80)))
        } else {
            (BoxChars::LIGHT, CellStyle::fg(Rgb::new(180, 180, 190)))
        };

        fb.draw_box(x, y, CARD_W, CARD_H, chars, edge.on(TABLE));
        fb.put_char(x + CARD_W / 2, y + CARD_H / 2, glyph, glyph_style.on(TABLE));
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        view: &BoardView,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(PANEL_GAP);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, view.difficulty.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, view.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MATCHES", label);
        y = y.saturating_add(1);
        let x = fb.put_u32(panel_x, y, view.matches, value);
        let x = fb.put_str(x, y, "/", hint);
        fb.put_u32(x, y, view.total_pairs(), hint);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &view.timer, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        for difficulty in Difficulty::ALL {
            let x = fb.put_str(panel_x, y, difficulty.as_str(), hint);
            let x = x.saturating_add(1);
            match view.best(difficulty) {
                Some(moves) => {
                    fb.put_u32(x, y, moves, value);
                }
                None => {
                    fb.put_str(x, y, "-", value);
                }
            }
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);

        if view.start_enabled {
            fb.put_str(panel_x, y, "g start", hint);
            y = y.saturating_add(1);
        }
        for line in ["r restart", "t easy/hard", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, viewport: Viewport, layout: &Layout, text: &str) {
        let y = layout.start_y.saturating_add(layout.frame_h / 2);
        let style = CellStyle::fg(Rgb::new(255, 255, 255))
            .on(Rgb::new(30, 110, 60))
            .bold();
        let w = (text.chars().count() as u16).saturating_add(2).min(viewport.width);
        let x = viewport.width.saturating_sub(w) / 2;
        fb.fill_rect(x, y, w, 1, ' ', style);
        fb.put_str_centered(x, y, w, text, style);
    }
}

fn face_color(face: CardFace) -> Rgb {
    const PALETTE: [Rgb; 6] = [
        Rgb::new(240, 90, 90),
        Rgb::new(250, 210, 80),
        Rgb::new(180, 120, 230),
        Rgb::new(250, 160, 60),
        Rgb::new(90, 200, 240),
        Rgb::new(120, 220, 120),
    ];
    PALETTE[face.index() as usize % PALETTE.len()]
}
