//! UI rendering for the terminal user interface.
//!
//! Two screens: the preset picker (a grid of gradient swatches) and the home
//! screen (gradient background, artwork, song info and the transport bar).
//! Everything here only reads from [`App`].

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, HomePage};
use crate::artwork::Artwork;
use crate::audio::{AudioOutput, MediaPlayer};
use crate::commands::{Command, MENU, Menu, menu_entries};
use crate::controls::PlaybackState;
use crate::navigation::PreferenceStore;
use crate::presets::{Preset, Rgba};

/// Width of one swatch card in the preset picker, in cells.
const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 4;

/// Half-block glyph: foreground paints the top pixel, background the bottom one.
const HALF_BLOCK: &str = "\u{2580}";

/// Number of picker columns that fit in `width` cells.
pub fn picker_columns(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

fn color(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Black or white, whichever reads better on `bg`.
fn contrast(bg: Rgba) -> Color {
    let luma = 0.299 * bg.r as f32 + 0.587 * bg.g as f32 + 0.114 * bg.b as f32;
    if luma > 140.0 {
        Color::Black
    } else {
        Color::White
    }
}

/// Render the whole UI for the current screen.
pub fn draw<P, S>(frame: &mut Frame, app: &App<P, S>)
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    if !app.window_visible {
        draw_hidden(frame, app);
        return;
    }

    let [menu_area, body, status_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    match app.home() {
        Some(home) => draw_home(frame, body, home),
        None => draw_picker(frame, body, app.picker_cursor),
    }

    frame.render_widget(menu_bar(app), menu_area);
    frame.render_widget(status_line(app), status_area);

    let help = match app.home() {
        Some(_) => controls_text(),
        None => "[←↓↑→/hjkl] move | [enter] apply preset".to_string(),
    };
    let footer = Paragraph::new(help)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, footer_area);
}

/// One line listing the File, Preset and Tray menus with their keys.
fn menu_bar<P, S>(app: &App<P, S>) -> Paragraph<'static>
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    let mut spans: Vec<Span<'static>> = Vec::new();
    for menu in [Menu::File, Menu::Preset, Menu::Tray] {
        spans.push(Span::styled(
            format!(" {} ", menu.title()),
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ));
        for entry in menu_entries(menu) {
            let mut label = entry.command.label().to_string();
            if entry.command == Command::ToggleQuitOnClose {
                let mark = if app.quit_on_close { "x" } else { " " };
                label = format!("[{mark}] {label}");
            }
            spans.push(Span::raw(format!(" [{}] {} ", entry.key_label, label)));
        }
    }
    Paragraph::new(Line::from(spans))
}

/// The transport key help, rendered from the command table.
fn controls_text() -> String {
    menu_entries(Menu::Controls)
        .map(|e| format!("[{}] {}", e.key_label, e.command.label()))
        .chain(std::iter::once("[0-9] jump".to_string()))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn status_line<P, S>(app: &App<P, S>) -> Paragraph<'static>
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    let text = match (&app.status, app.home()) {
        (Some(msg), _) => format!(" {msg}"),
        (None, Some(home)) => {
            let state = match home.controls.playback_state() {
                PlaybackState::Stopped => "Stopped",
                PlaybackState::Playing => "Playing",
                PlaybackState::Paused => "Paused",
            };
            format!(
                " {} • {} • {}/{}",
                app.window_title(),
                state,
                home.controls.song_num(),
                home.controls.catalog().len()
            )
        }
        (None, None) => format!(" {} • choose a preset", app.window_title()),
    };
    Paragraph::new(text).add_modifier(Modifier::DIM)
}

fn draw_hidden<P, S>(frame: &mut Frame, app: &App<P, S>)
where
    P: MediaPlayer + AudioOutput + Clone,
    S: PreferenceStore,
{
    let area = frame.area();
    frame.render_widget(Clear, area);
    let show = MENU
        .iter()
        .find(|e| e.command == Command::ShowWindow)
        .map_or("v", |e| e.key_label);
    let text = format!(
        "{}\n\nwindow hidden, playback continues\n[{show}] show window | [q] quit",
        app.window_title()
    );
    let area = centered_rect(60, 5, area);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Fill `area` with the preset's gradient, running diagonally.
fn paint_gradient(buf: &mut Buffer, area: Rect, preset: Preset) {
    let span = (area.width + area.height).saturating_sub(2).max(1) as f32;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let t = ((x - area.x) + (y - area.y)) as f32 / span;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_bg(color(preset.color_at(t)));
            }
        }
    }
}

fn draw_picker(frame: &mut Frame, area: Rect, cursor: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" choose a preset ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = picker_columns(inner.width);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    for (i, preset) in Preset::list_all().enumerate() {
        let row = i / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let card = Rect {
            x: inner.x + (i % columns) as u16 * CARD_WIDTH,
            y: inner.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width),
            height: CARD_HEIGHT,
        }
        .intersection(inner);
        draw_card(frame, card, preset, i == cursor);
    }
}

fn draw_card(frame: &mut Frame, card: Rect, preset: Preset, selected: bool) {
    let border = if selected {
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} {} ", preset.name(), preset.value()));
    let swatch = block.inner(card);
    frame.render_widget(block, card);
    paint_gradient(frame.buffer_mut(), swatch, preset);
}

fn draw_home<P: MediaPlayer + AudioOutput>(frame: &mut Frame, area: Rect, home: &HomePage<P>) {
    let preset = home.selection.preset;
    let (start, end) = home.selection.colors;
    paint_gradient(frame.buffer_mut(), area, preset);

    let [info_area, transport_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(4)]).areas(area);

    let display = home.controls.display();

    // Artwork on the left, title and band beside it.
    let art_cols = display
        .artwork
        .as_ref()
        .map_or(0, |art| art.fit(info_area.width / 2, info_area.height).0);
    let [art_area, text_area] = Layout::horizontal([
        Constraint::Length(art_cols.saturating_add(2)),
        Constraint::Min(10),
    ])
    .areas(info_area);
    if let Some(art) = display.artwork.as_ref() {
        draw_artwork(frame.buffer_mut(), art_area.inner(ratatui::layout::Margin::new(1, 1)), art);
    }

    let text_fg = contrast(preset.color_at(0.5));
    let info = Paragraph::new(vec![
        Line::from(display.title.clone()).bold(),
        Line::from(display.band.clone()),
    ])
    .fg(text_fg)
    .block(Block::default().padding(Padding::new(1, 1, 1, 0)));
    frame.render_widget(info, text_area);

    draw_transport(frame, transport_area, home, (start, end));
}

/// Paint `art` into `area` with half blocks, two pixel rows per cell.
fn draw_artwork(buf: &mut Buffer, area: Rect, art: &Artwork) {
    let (cols, rows) = art.fit(area.width, area.height);
    if cols == 0 || rows == 0 {
        return;
    }
    let px_h = u32::from(rows) * 2;
    for row in 0..rows {
        for col in 0..cols {
            let sx = u32::from(col) * art.width() / u32::from(cols);
            let top_y = u32::from(row) * 2 * art.height() / px_h;
            let bot_y = (u32::from(row) * 2 + 1) * art.height() / px_h;
            let [tr, tg, tb] = art.pixel(sx, top_y);
            let [br, bg, bb] = art.pixel(sx, bot_y);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol(HALF_BLOCK)
                    .set_fg(Color::Rgb(tr, tg, tb))
                    .set_bg(Color::Rgb(br, bg, bb));
            }
        }
    }
}

fn draw_transport<P: MediaPlayer + AudioOutput>(
    frame: &mut Frame,
    area: Rect,
    home: &HomePage<P>,
    (start, end): (Rgba, Rgba),
) {
    let controls = &home.controls;
    let display = controls.display();

    let [slider_row, _, button_row, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let [elapsed_area, gauge_area, total_area] = Layout::horizontal([
        Constraint::Length(7),
        Constraint::Min(10),
        Constraint::Length(7),
    ])
    .areas(slider_row);
    let label_fg = contrast(start);
    frame.render_widget(
        Paragraph::new(display.elapsed.clone())
            .alignment(Alignment::Center)
            .fg(label_fg),
        elapsed_area,
    );
    frame.render_widget(
        Gauge::default()
            .ratio(display.progress())
            .label("")
            .gauge_style(Style::default().fg(color(end)).bg(color(start))),
        gauge_area,
    );
    frame.render_widget(
        Paragraph::new(display.total.clone())
            .alignment(Alignment::Center)
            .fg(label_fg),
        total_area,
    );

    // Buttons use the first boundary color, the shuffle button swaps them while active.
    let normal = Style::default().fg(contrast(start)).bg(color(start));
    let active = Style::default().fg(contrast(end)).bg(color(end));
    let play_icon = match controls.playback_state() {
        PlaybackState::Playing => " ⏸ ",
        PlaybackState::Paused | PlaybackState::Stopped => " ▶ ",
    };
    let mut spans = vec![Span::raw(" ")];
    for (icon, style) in [
        (" ⏮ ", normal),
        (" ⏪ ", normal),
        (play_icon, normal),
        (" ⏹ ", normal),
        (" ⏩ ", normal),
        (" ⏭ ", normal),
        (" 🔀 ", if display.shuffle_active { active } else { normal }),
    ] {
        spans.push(Span::styled(icon, style));
        spans.push(Span::raw(" "));
    }

    let autoplay = if display.autoplay { "[x]" } else { "[ ]" };
    let autoplay_style = if display.autoplay { active } else { normal };
    spans.push(Span::styled(format!(" {autoplay} AutoPlay "), autoplay_style));
    spans.push(Span::raw("  "));

    let devices = controls.output_devices();
    let device = display
        .device
        .and_then(|i| devices.get(i).cloned())
        .unwrap_or_else(|| "default output".to_string());
    spans.push(Span::styled(
        format!(" vol {:>3}% • {device} ", display.volume),
        normal,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), button_row);
}
