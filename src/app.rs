//! Game window.
//!
//! The window owns a [`Game`] and moves it once per configured delay. Input
//! read between two ticks is buffered, the last pressed direction wins.

use crate::settings::Settings;
use eframe::{
    egui::{self, epaint},
    epi,
};
use game::prelude::*;
use std::time::Instant;

/// Width of the score panel.
const PANEL_WIDTH: f32 = 160.0;

/// Snake body parts are drawn a bit smaller than a cell so the head stands
/// out.
const BODY_SHRINK: f32 = 0.1;

/// Food is drawn at half of a cell.
const FOOD_SHRINK: f32 = 0.25;

/// Keys steering the snake.
const KEYMAP: [(egui::Key, Direction); 8] = [
    (egui::Key::ArrowUp, Direction::Up),
    (egui::Key::ArrowDown, Direction::Down),
    (egui::Key::ArrowLeft, Direction::Left),
    (egui::Key::ArrowRight, Direction::Right),
    (egui::Key::W, Direction::Up),
    (egui::Key::S, Direction::Down),
    (egui::Key::A, Direction::Left),
    (egui::Key::D, Direction::Right),
];

/// Return direction bound to `key`.
pub fn key_direction(key: egui::Key) -> Option<Direction> {
    KEYMAP
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, direction)| *direction)
}

/// Return window size fitting the whole grid and the score panel.
pub fn window_size(settings: &Settings) -> egui::Vec2 {
    let (w, h) = settings.game.grid.size;
    egui::vec2(
        w as f32 * settings.cell + PANEL_WIDTH + settings.cell,
        h as f32 * settings.cell + settings.cell,
    )
}

/// Window state: the game and the input buffered for its next tick.
pub struct App {
    game: Game,
    settings: Settings,

    /// Direction pressed since the last tick.
    pending: Option<Direction>,

    last_tick: Instant,
}

impl App {
    /// Return a new [`App`] with a fresh game.
    pub fn new(settings: Settings) -> Self {
        Self {
            game: Game::new(settings.game.clone()),
            settings,
            pending: None,
            last_tick: Instant::now(),
        }
    }

    /// Read keyboard. Return `false` if the player wants to quit.
    fn handle_input(&mut self, input: &egui::InputState) -> bool {
        if input.key_pressed(egui::Key::Escape) {
            return false;
        }
        if input.key_pressed(egui::Key::Space) {
            self.game.toggle_pause();
        }
        if input.key_pressed(egui::Key::R) && self.game.state().is_finished() {
            self.restart();
        }
        if let Some(direction) = input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => key_direction(*key),
                _ => None,
            })
            .last()
        {
            self.pending = Some(direction);
        }
        true
    }

    /// Move the game if the delay has passed since the previous move.
    fn update_game(&mut self) {
        if self.last_tick.elapsed() < self.settings.delay {
            return;
        }
        self.last_tick = Instant::now();

        if self.game.state() != GameState::Running {
            return;
        }
        self.game.tick(self.pending.take());

        if self.settings.debug_frames {
            match self.game.frame().to_json() {
                Ok(json) => logger::trace!("{}", json),
                Err(e) => logger::warn!("Failed to dump frame: {}", e),
            }
        }
    }

    fn restart(&mut self) {
        self.game.restart();
        self.pending = None;
        self.last_tick = Instant::now();
    }

    fn draw_board(&self, ui: &mut egui::Ui, frame: &Frame) {
        let cell = self.settings.cell;
        let (w, h) = self.game.grid().size;
        let origin = ui.max_rect().min + egui::vec2(cell / 2.0, cell / 2.0);

        let cell_rect = |point: Position, shrink: f32| {
            let min = origin + egui::vec2(point.x as f32 * cell, point.y as f32 * cell);
            egui::Rect::from_min_size(min, egui::vec2(cell, cell)).shrink(cell * shrink / 2.0)
        };

        let mut shapes: Vec<egui::Shape> = Vec::with_capacity(frame.snake.len() + 2);

        shapes.push(egui::Shape::Rect(epaint::RectShape::filled(
            egui::Rect::from_min_size(origin, egui::vec2(w as f32 * cell, h as f32 * cell)),
            0.0,
            color32(Color::BACKGROUND),
        )));

        if let Some(food) = frame.food {
            shapes.push(egui::Shape::Rect(epaint::RectShape::filled(
                cell_rect(food, FOOD_SHRINK),
                0.0,
                color32(Food::COLOR),
            )));
        }

        for (i, point) in frame.snake.iter().enumerate() {
            let shrink = if i == 0 { 0.0 } else { BODY_SHRINK };
            shapes.push(egui::Shape::Rect(epaint::RectShape::filled(
                cell_rect(*point, shrink),
                0.0,
                color32(Color::SNAKE),
            )));
        }

        ui.painter().extend(shapes);
    }
}

impl epi::App for App {
    fn name(&self) -> &str {
        "Snake"
    }

    fn setup(
        &mut self,
        ctx: &egui::CtxRef,
        _frame: &mut epi::Frame<'_>,
        _storage: Option<&dyn epi::Storage>,
    ) {
        ctx.set_visuals(egui::Visuals::dark());
        logger::info!(
            "Starting on {} grid with {:?} delay",
            self.game.grid(),
            self.settings.delay
        );
    }

    fn update(&mut self, ctx: &egui::CtxRef, frame: &mut epi::Frame<'_>) {
        if !self.handle_input(ctx.input()) {
            frame.quit();
            return;
        }
        self.update_game();

        let snapshot = self.game.frame();

        egui::SidePanel::new(egui::panel::Side::Right, "score_panel")
            .resizable(false)
            .min_width(PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.heading(format!("Score: {}", snapshot.score));
                ui.label(format!("Length: {}", snapshot.snake.len()));
                ui.separator();
                ui.label(match snapshot.state {
                    GameState::Running => String::from("Running"),
                    GameState::Paused => String::from("Paused, Space to resume"),
                    GameState::Over(collision) => format!("Snake {}", collision),
                    GameState::Won => String::from("The grid is full!"),
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_board(ui, &snapshot);
        });

        if snapshot.state.is_finished() {
            egui::Window::new("Game over")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("Final score: {}", snapshot.score));
                    if ui.button("Restart (R)").clicked() {
                        self.restart();
                    }
                });
        }

        ctx.request_repaint();
    }

    fn on_exit(&mut self) {
        logger::info!("Bye! Score: {}", self.game.score());
    }
}

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_premultiplied(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settings() -> Settings {
        Settings {
            game: game::Settings {
                grid: Grid::new((10, 6)),
                ..Default::default()
            },
            delay: Duration::from_millis(100),
            cell: 20.0,
            debug_frames: false,
        }
    }

    #[test]
    fn keymap() {
        assert_eq!(key_direction(egui::Key::ArrowUp), Some(Direction::Up));
        assert_eq!(key_direction(egui::Key::D), Some(Direction::Right));
        assert_eq!(key_direction(egui::Key::Space), None);

        for direction in Direction::ALL {
            assert_eq!(KEYMAP.iter().filter(|(_, d)| *d == direction).count(), 2);
        }
    }

    #[test]
    fn window_fits_grid() {
        let size = window_size(&settings());
        assert_eq!(size, egui::vec2(10.0 * 20.0 + PANEL_WIDTH + 20.0, 6.0 * 20.0 + 20.0));
    }

    #[test]
    fn waits_for_delay() {
        let mut app = App::new(settings());
        app.pending = Some(Direction::Right);

        app.update_game();
        assert_eq!(app.game.frame().snake, [Position::new(5, 3)]);
        assert_eq!(app.pending, Some(Direction::Right));

        app.last_tick = Instant::now() - Duration::from_millis(150);
        app.update_game();
        assert_eq!(app.pending, None);
        assert_ne!(app.game.frame().snake, [Position::new(5, 3)]);
    }
}
