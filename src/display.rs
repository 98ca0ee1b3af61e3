/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// world-pixel rectangles into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use pop_my_balloons::entities::{Direction, GameState, GameStatus};
use pop_my_balloons::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_GROUND: Color = Color::DarkGreen;
const C_PLAYER: Color = Color::White;
const C_BALLOON: Color = Color::Red;
const C_BALLOON_ENTERING: Color = Color::DarkRed;
const C_ARROW: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

const CONTROLS: &str = "← → / A D : Move   SPACE : Shoot   Q : Quit";

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Maps the world onto rows `1..rows-1` of the terminal; row 0 is the HUD
/// and the last row the controls hint.
struct Viewport {
    world: Rect,
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn new(world: Rect, cols: u16, rows: u16) -> Self {
        Viewport { world, cols, rows }
    }

    fn play_rows(&self) -> i64 {
        i64::from(self.rows.saturating_sub(2)).max(1)
    }

    fn col(&self, x: i32) -> i64 {
        i64::from(x - self.world.x) * i64::from(self.cols) / i64::from(self.world.width)
    }

    fn row(&self, y: i32) -> i64 {
        1 + i64::from(y - self.world.y) * self.play_rows() / i64::from(self.world.height)
    }

    /// Cell span `(col, row, width, height)` covered by `rect`, clipped to
    /// the play area.  Every visible rectangle covers at least one cell.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = self.col(rect.x);
        let c1 = self.col(rect.right()).max(c0 + 1);
        let r0 = self.row(rect.y);
        let r1 = self.row(rect.bottom()).max(r0 + 1);

        let c0 = c0.max(0);
        let c1 = c1.min(i64::from(self.cols));
        let r0 = r0.max(1);
        let r1 = r1.min(1 + self.play_rows());
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16, (c1 - c0) as u16, (r1 - r0) as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(state.rules.screen_rect(), cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state, cols)?;
    draw_ground(out, state, &view)?;

    for balloon in &state.balloons {
        let color = if balloon.active { C_BALLOON } else { C_BALLOON_ENTERING };
        fill(out, &view, &balloon.rect, color, '●')?;
    }
    for arrow in &state.arrows {
        fill(out, &view, &arrow.rect, C_ARROW, '↑')?;
    }
    draw_player(out, state, &view)?;
    draw_controls_hint(out, rows)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn fill<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
    glyph: char,
) -> std::io::Result<()> {
    let Some((col, row, w, h)) = view.cells(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(glyph).take(w as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for r in row..row + h {
        out.queue(cursor::MoveTo(col, r))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Popped:{:>5}", state.popped)))?;

    let arrows_left = state
        .rules
        .arrow
        .max_on_screen
        .saturating_sub(state.arrows.len());
    let right_str = format!(
        "Arrows:{}  Time:{:>4}s",
        "↑".repeat(arrows_left),
        state.elapsed_ms / 1000
    );
    let rx = cols.saturating_sub(right_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&right_str))?;
    Ok(())
}

// ── Scenery & player ──────────────────────────────────────────────────────────

fn draw_ground<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let screen = state.rules.screen_rect();
    let ground_y = state.rules.player.spawn_bottom;
    if ground_y >= screen.bottom() {
        return Ok(());
    }
    let ground = Rect::new(screen.x, ground_y, screen.width, screen.bottom() - ground_y);
    fill(out, view, &ground, C_GROUND, '▒')
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    let glyph = match state.player.direction {
        Direction::Left => '◀',
        Direction::Stationary => '█',
        Direction::Right => '▶',
    };
    fill(out, view, &state.player.rect, C_PLAYER, glyph)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let popped_line = format!("Balloons popped: {:>5}", state.popped);
    let time_line = format!("Survived: {:>5.1}s", state.elapsed_ms as f64 / 1000.0);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (popped_line.as_str(), Color::Yellow),
        (time_line.as_str(), Color::Yellow),
        ("Enter / Q : Exit", Color::White),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
