//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), so the difficulty-dependent reveal rules and the HUD can be
//! unit-tested. The simulation keeps positions and font sizes as data; this
//! module decides what they look like: simulation units are scaled into the
//! bordered play area, and a grown font renders as bold.

use crate::core::matcher::Reveal;
use crate::core::{FallingWord, GameState};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BASE_FONT_SIZE, DEFINITION_PREVIEW_LEN, MEDIUM_FLASH_Y, MISS_LIMIT};

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

/// Words rendered at or past this font size are drawn bold.
const BOLD_FONT_SIZE: f32 = BASE_FONT_SIZE + 2.0;

/// Renders the falling-word field, HUD and overlays.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        if viewport.width < 10 || viewport.height < 8 {
            return fb;
        }

        self.draw_hud(&mut fb, state);

        // Play area: bordered box between the HUD row and the input row.
        let frame_y = 1;
        let frame_h = viewport.height - 3;
        let frame_w = viewport.width;
        self.draw_frame(&mut fb, 0, frame_y, frame_w, frame_h);

        let inner_x = 1;
        let inner_y = frame_y + 1;
        let inner_w = frame_w - 2;
        let inner_h = frame_h - 2;

        for word in state.active_words() {
            self.draw_word(&mut fb, state, word, inner_x, inner_y, inner_w, inner_h);
        }

        // Input line.
        let input_y = viewport.height - 2;
        let prompt = CellStyle::fg(Rgb::new(120, 200, 120));
        fb.put_str(0, input_y, "> ", prompt);
        fb.put_str(2, input_y, state.input_buffer(), CellStyle::default().bold());
        fb.put_str(
            0,
            viewport.height - 1,
            "type the words | tab: difficulty | esc: quit",
            CellStyle::default().dim(),
        );

        if state.game_over() {
            self.draw_game_over(&mut fb, state, frame_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, state: &GameState) {
        let label = CellStyle::default().bold();
        let hud = format!(
            "SCORE {:<6} WAVE {:<3} TIME {:>2}s  MISS {}/{}  WPM {:>5.1}  ACC {:>3.0}%  [{}]",
            state.score(),
            state.wave(),
            state.wave_time_remaining().floor().max(0.0) as u32,
            state.misses(),
            MISS_LIMIT,
            state.words_per_minute(),
            state.summary().accuracy * 100.0,
            state.difficulty().as_str(),
        );
        fb.put_str(0, 0, &hud, label);
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(Rgb::new(150, 150, 160));
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        fb.hline(x + 1, y, w - 2, '─', style);
        fb.hline(x + 1, y + h - 1, w - 2, '─', style);
        fb.vline(x, y + 1, h - 2, '│', style);
        fb.vline(x + w - 1, y + 1, h - 2, '│', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_word(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        word: &FallingWord,
        inner_x: u16,
        inner_y: u16,
        inner_w: u16,
        inner_h: u16,
    ) {
        let col = sim_to_cell(word.x, state.canvas_width(), inner_w);
        let row = sim_to_cell(word.y, state.canvas_height(), inner_h);
        let x = inner_x + col.min(inner_w - 1);
        let y = inner_y + row.min(inner_h - 1);

        // Definition just above the placeholder line, when there is room.
        if row >= 1 {
            let def = definition_preview(&word.definition);
            let def_style = CellStyle::fg(Rgb::new(110, 150, 230)).dim();
            self.put_clipped(fb, x, y - 1, &def, def_style, inner_x + inner_w);
        }

        let policy = state.policy();
        let matched = policy.matched_len(state.input_buffer(), &word.term);
        let bold = word.font_size >= BOLD_FONT_SIZE;

        let base = CellStyle::fg(Rgb::new(230, 230, 230));
        let hit = CellStyle::fg(Rgb::new(230, 90, 90)).bold();
        let flash = CellStyle::fg(Rgb::new(160, 160, 160)).dim();

        // One character per 2 columns, so hidden glyphs read as "_ _ _".
        for (i, ch) in word.term.chars().enumerate() {
            let cx = x + (i as u16) * 2;
            if cx >= inner_x + inner_w {
                break;
            }
            let (glyph, mut style) = if i < matched {
                (ch, hit)
            } else {
                match policy.reveal {
                    Reveal::FirstChar if i == 0 => (ch, base),
                    Reveal::FlashNearTop if word.y < MEDIUM_FLASH_Y => (ch, flash),
                    _ => ('_', base),
                }
            };
            if bold {
                style.bold = true;
            }
            fb.put_char(cx, y, glyph, style);
        }
    }

    fn put_clipped(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        s: &str,
        style: CellStyle,
        right_edge: u16,
    ) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= right_edge {
                break;
            }
            fb.put_char(cx, y, ch, style);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        frame_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let summary = state.summary();
        let lines = [
            "GAME OVER".to_string(),
            format!("score {}  words {}", summary.score, summary.words_typed),
            format!(
                "wave {}  wpm {:.1}  accuracy {:.0}%",
                summary.wave,
                state.words_per_minute(),
                summary.accuracy * 100.0
            ),
            "enter: restart  esc: quit".to_string(),
        ];
        let mid_y = frame_y + frame_h / 2;
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = frame_w.saturating_sub(w) / 2;
            let style = if i == 0 {
                CellStyle::fg(Rgb::new(255, 255, 255)).bold()
            } else {
                CellStyle::default()
            };
            fb.put_str(x, mid_y.saturating_sub(1) + i as u16, line, style);
        }
    }
}

/// Scale a simulation coordinate into a cell offset within `cells`.
fn sim_to_cell(v: f32, sim_extent: f32, cells: u16) -> u16 {
    if sim_extent <= 0.0 || cells == 0 {
        return 0;
    }
    let frac = (v / sim_extent).clamp(0.0, 1.0);
    ((frac * cells as f32) as u16).min(cells - 1)
}

/// Truncate a definition for display, with an ellipsis past the limit.
pub fn definition_preview(definition: &str) -> String {
    let count = definition.chars().count();
    if count <= DEFINITION_PREVIEW_LEN {
        return definition.to_string();
    }
    let mut s: String = definition.chars().take(DEFINITION_PREVIEW_LEN).collect();
    s.push_str("...");
    s
}
