use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use tracing_subscriber::EnvFilter;

use glyph_morph::canvas::dot_size;
use glyph_morph::{ButtonConfig, GlyphKind, MorphButton, Phase};

const COLUMNS: usize = 4;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const PAIRS: &[(GlyphKind, GlyphKind)] = &[
    (GlyphKind::Plus, GlyphKind::X),
    (GlyphKind::Plus, GlyphKind::Minus),
    (GlyphKind::Menu, GlyphKind::X),
    (GlyphKind::Check, GlyphKind::X),
    (GlyphKind::ArrowDown, GlyphKind::ArrowUp),
    (GlyphKind::ArrowLeft, GlyphKind::ArrowRight),
    (GlyphKind::AngleDown, GlyphKind::AngleUp),
    (GlyphKind::AngleLeft, GlyphKind::AngleRight),
    (GlyphKind::Menu, GlyphKind::ArrowLeft),
    (GlyphKind::Minus, GlyphKind::Menu),
    (GlyphKind::AngleRight, GlyphKind::Check),
];

fn main() -> io::Result<()> {
    init_logging()?;

    let base = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            ButtonConfig::from_toml(&text).map_err(io::Error::other)?
        }
        None => ButtonConfig {
            stroke_width_dip: 2,
            ..ButtonConfig::default()
        },
    };

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

    let result = run(&base);

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

/// The TUI owns stdout, so logs only go to the file named by `GLYPH_MORPH_LOG`.
fn init_logging() -> io::Result<()> {
    let Some(path) = std::env::var_os("GLYPH_MORPH_LOG") else {
        return Ok(());
    };

    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn build_buttons(base: &ButtonConfig) -> Vec<MorphButton> {
    let configured = MorphButton::new(base.clone());

    let pairs = PAIRS.iter().map(|&(unchecked_glyph, checked_glyph)| {
        MorphButton::new(ButtonConfig {
            unchecked_glyph,
            checked_glyph,
            ..base.clone()
        })
    });

    std::iter::once(configured).chain(pairs).collect()
}

fn run(base: &ButtonConfig) -> io::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut buttons = build_buttons(base);
    let mut selected = 0;
    let mut last_tick = Instant::now();

    terminal.draw(|f| draw(f, &mut buttons, selected))?;

    loop {
        let animating = buttons.iter().any(|b| b.phase() == Phase::Transitioning);
        let timeout = if animating {
            FRAME_INTERVAL
        } else {
            Duration::from_secs(1)
        };

        let mut dirty = false;

        if event::poll(timeout)? {
            dirty = true;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,

                    KeyCode::Char(' ') | KeyCode::Enter => {
                        buttons[selected].on_toggle_requested();
                    }

                    KeyCode::Char('i') => {
                        let button = &mut buttons[selected];
                        let enable = !button.is_checked();
                        button.set_checked(enable, false);
                    }

                    KeyCode::Char('a') => {
                        for button in &mut buttons {
                            button.on_toggle_requested();
                        }
                    }

                    KeyCode::Right => selected = (selected + 1) % buttons.len(),
                    KeyCode::Left => selected = (selected + buttons.len() - 1) % buttons.len(),
                    KeyCode::Down => selected = (selected + COLUMNS).min(buttons.len() - 1),
                    KeyCode::Up => selected = selected.saturating_sub(COLUMNS),

                    _ => {}
                }
            }
        }

        let now = Instant::now();
        let dt = now - last_tick;
        last_tick = now;

        for button in &mut buttons {
            button.tick(dt);
            dirty |= button.take_redraw();
        }

        if dirty {
            terminal.draw(|f| draw(f, &mut buttons, selected))?;
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, buttons: &mut [MorphButton], selected: usize) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(f.area());

    f.render_widget(
        Paragraph::new("glyph-morph  [←↑↓→ select]  [space toggle]  [i instant]  [a all]  [q quit]")
            .style(Style::new().fg(Color::DarkGray)),
        chunks[0],
    );

    let rows = buttons.len().div_ceil(COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(chunks[1]);

    for (index, button) in buttons.iter_mut().enumerate() {
        let row = Layout::horizontal(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(row_areas[index / COLUMNS]);
        let cell = row[index % COLUMNS];

        let state = button.state();
        let title = format!(
            " {} ⇄ {} ",
            state.unchecked_glyph().name(),
            state.checked_glyph().name()
        );
        let border = if index == selected {
            Style::new().fg(Color::Yellow)
        } else {
            Style::new().fg(Color::DarkGray)
        };
        let block = Block::bordered().title(title).border_style(border);
        let inner = block.inner(cell);
        f.render_widget(block, cell);

        let (width, height) = dot_size(inner);
        button.layout(width, height);
        f.render_widget(&*button, inner);
    }
}
