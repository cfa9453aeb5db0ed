//! Player — the terminal animation driver.
//!
//! Owns the show, the pixel canvas and the random source. Once per frame it
//! paints the current show, advances it, and copies the canvas to the
//! terminal. Quitting simply stops the loop; the engine holds nothing that
//! needs releasing.

mod viewport;

pub use viewport::{HalfCell, Viewport, diff};

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use crossterm::event::{KeyCode, KeyEventKind};
use crossterm::{cursor, event, execute, queue, style, terminal};
use log::info;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::engine::Show;
use crate::menubar::{PLAYER_ITEMS, render_menubar};
use crate::random::{RandomSource, RngSource};
use crate::renderer::{self, Canvas};
use crate::types::Rgb;

/// Rows reserved above the canvas for the menu bar.
const CANVAS_OFFSET: u16 = 1;
/// Menu bar plus status bar.
const CHROME_ROWS: u16 = 2;
const HALF_BLOCK: char = '\u{2580}';

pub struct Player<R> {
    config: Config,
    show: Show,
    canvas: Canvas,
    rng: R,
    paused: bool,
    fullscreen: bool,
    viewport: Viewport,
    /// Cells currently on screen; `None` forces a full redraw.
    screen: Option<Vec<Vec<HalfCell>>>,
}

impl Player<RngSource<StdRng>> {
    pub fn new(config: Config) -> Self {
        let rng = config.rng();
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Player<R> {
    pub fn with_rng(config: Config, mut rng: R) -> Self {
        let show = new_show(&config, &mut rng);
        let canvas = Canvas::new(
            config.width as usize,
            config.height as usize,
            config.background.to_rgb(),
        );
        let viewport = Viewport::fit(canvas.width(), canvas.height(), 80, 22);
        Self {
            config,
            show,
            canvas,
            rng,
            paused: false,
            fullscreen: false,
            viewport,
            screen: None,
        }
    }

    pub fn show(&self) -> &Show {
        &self.show
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// One frame: paint the current show, then advance it.
    pub fn tick(&mut self) {
        renderer::draw_frame(&mut self.canvas, &self.show.fireworks, &mut self.rng);
        self.show = self.show.advance(&mut self.rng);
    }

    /// Replace the whole population with freshly launched fireworks.
    pub fn relaunch(&mut self) {
        self.show = new_show(&self.config, &mut self.rng);
        info!("relaunched {} fireworks", self.show.fireworks.len());
    }

    /// Play the show in the terminal.
    ///
    /// Sets up the terminal, enters the frame loop, and restores the terminal
    /// on exit (even on error).
    pub fn play(&mut self) -> Result<()> {
        let (term_w, term_h) = terminal::size()?;
        if term_w == 0 || term_h <= CHROME_ROWS {
            bail!(
                "Terminal too small: need at least 1x{}, have {}x{}",
                CHROME_ROWS + 1,
                term_w,
                term_h,
            );
        }
        self.fit(term_w, term_h);

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let result = self.run_loop(&mut stdout);

        // Always restore terminal state.
        let _ = execute!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();

        info!("stopped after {} ticks", self.show.tick);
        result
    }

    // -----------------------------------------------------------------------
    // Frame loop
    // -----------------------------------------------------------------------

    fn run_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let frame = Duration::from_secs_f64(1.0 / self.config.fps as f64);
        let mut deadline = Instant::now();
        render_menubar(stdout, PLAYER_ITEMS)?;

        loop {
            let now = Instant::now();
            if now >= deadline {
                if !self.paused {
                    self.tick();
                }
                self.present(stdout)?;
                self.render_status(stdout)?;
                deadline += frame;
                if deadline < now {
                    deadline = now + frame;
                }
            }

            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                continue;
            }
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => self.paused = !self.paused,
                    KeyCode::Char('r') => self.relaunch(),
                    KeyCode::F(11) => {
                        self.fullscreen = !self.fullscreen;
                        if self.fullscreen {
                            stdout.write_all(b"\x1b[10;1t")?;
                        } else {
                            stdout.write_all(b"\x1b[10;0t")?;
                        }
                        stdout.flush()?;
                    }
                    _ => {}
                },
                event::Event::Resize(w, h) => {
                    self.fit(w, h);
                    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
                    render_menubar(stdout, PLAYER_ITEMS)?;
                    self.present(stdout)?;
                    self.render_status(stdout)?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn fit(&mut self, term_w: u16, term_h: u16) {
        let rows = term_h.saturating_sub(CHROME_ROWS);
        self.viewport = Viewport::fit(self.canvas.width(), self.canvas.height(), term_w, rows);
        self.screen = None;
    }

    // -----------------------------------------------------------------------
    // Terminal output
    // -----------------------------------------------------------------------

    /// Copy the canvas to the terminal, writing only the cells that changed.
    fn present(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let next = self.viewport.sample(&self.canvas);
        match &self.screen {
            Some(prev) => {
                for (x, y, cell) in diff(prev, &next) {
                    print_cell(stdout, x, y, cell)?;
                }
            }
            None => {
                for (y, row) in next.iter().enumerate() {
                    for (x, cell) in row.iter().enumerate() {
                        print_cell(stdout, x as u16, y as u16, *cell)?;
                    }
                }
            }
        }
        queue!(stdout, style::ResetColor)?;
        stdout.flush()?;
        self.screen = Some(next);
        Ok(())
    }

    fn render_status(&self, stdout: &mut io::Stdout) -> Result<()> {
        let status_y = self.viewport.rows + CANVAS_OFFSET;
        let (_, term_h) = terminal::size()?;
        if status_y >= term_h {
            return Ok(()); // No room for status bar.
        }

        let status = format!(
            " Tick {} | {}/{} exploded{} ",
            self.show.tick,
            self.show.exploded(),
            self.show.fireworks.len(),
            if self.paused { " | paused" } else { "" },
        );

        let mut cs = style::ContentStyle::default();
        cs.attributes.set(style::Attribute::Dim);

        queue!(
            stdout,
            cursor::MoveTo(0, status_y),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::PrintStyledContent(style::StyledContent::new(cs, status)),
        )?;
        stdout.flush()?;
        Ok(())
    }
}

fn new_show(config: &Config, rng: &mut impl RandomSource) -> Show {
    Show::new(
        config.width,
        config.height,
        config.max_fireworks,
        config.max_sparks,
        rng,
    )
}

fn print_cell(stdout: &mut io::Stdout, x: u16, y: u16, cell: HalfCell) -> Result<()> {
    let mut cs = style::ContentStyle::default();
    cs.foreground_color = Some(to_ct_color(cell.top));
    cs.background_color = Some(to_ct_color(cell.bottom));
    queue!(
        stdout,
        cursor::MoveTo(x, y + CANVAS_OFFSET),
        style::PrintStyledContent(style::StyledContent::new(cs, HALF_BLOCK)),
    )?;
    Ok(())
}

pub fn to_ct_color(c: Rgb) -> style::Color {
    style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}
