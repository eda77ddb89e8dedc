//! Draws the world: sprites onto the canvas, then the text overlays.

use super::canvas::{Canvas, CanvasView};
use crate::assets::Assets;
use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::{Rect, World};
use ratatui::{
    layout::{Alignment, Rect as Area},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = " Flappy Bird Clone ";

/// Paint one frame of the world onto `canvas`.
///
/// Order matters for overlap only: background, pipes, ground, bird.
pub fn draw_world(canvas: &mut Canvas, world: &World, assets: &Assets) {
    canvas.blit(
        &assets.background,
        &Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
    );

    for pipe in &world.pipes {
        canvas.blit(&assets.pipe_bottom, &pipe.bottom);
        canvas.blit(&assets.pipe_top, &pipe.top);
    }

    for tile in &world.ground {
        canvas.blit(&assets.ground, tile);
    }

    canvas.blit(assets.bird_frame(world.bird.wing), &world.bird.rect);
}

/// Render the full game screen into the terminal frame.
pub fn render_game(frame: &mut Frame, world: &World, assets: &Assets) {
    let area = frame.size();

    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut canvas = Canvas::fit(inner.width, inner.height);
    draw_world(&mut canvas, world, assets);

    let screen = centered(inner, canvas.cell_size());
    frame.render_widget(CanvasView::new(&canvas), screen);

    if world.game_over_overlay_visible() {
        render_game_over_text(frame, screen);
    } else if !world.running {
        render_start_prompt(frame, screen);
    }
}

/// Center a `(cols, rows)` box inside `area`.
fn centered(area: Area, (cols, rows): (u16, u16)) -> Area {
    let width = cols.min(area.width);
    let height = rows.min(area.height);
    Area::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// "Game Over" banner drawn straight over the frozen scene.
fn render_game_over_text(frame: &mut Frame, area: Area) {
    let lines = vec![
        Line::from(Span::styled(
            "Game Over",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press R to Restart",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    render_centered_lines(frame, area, lines);
}

fn render_start_prompt(frame: &mut Frame, area: Area) {
    let lines = vec![
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::White)),
            Span::styled(" Flap  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    render_centered_lines(frame, area, lines);
}

fn render_centered_lines(frame: &mut Frame, area: Area, lines: Vec<Line<'static>>) {
    let height = (lines.len() as u16).min(area.height);
    let y = area.y + (area.height - height) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, Area::new(area.x, y, area.width, height));
}
