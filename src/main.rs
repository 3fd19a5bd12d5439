//! Orbit Trainer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use glam::Vec2;
    use orbit_trainer::consts::*;
    use orbit_trainer::render::{Surface, draw_frame};
    use orbit_trainer::sim::{ClickOutcome, Rgb, Trainer};

    /// Canvas-2d implementation of the drawing surface
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
        width: f32,
        height: f32,
    }

    impl CanvasSurface {
        fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
            let mut surface = Self { ctx, width, height };
            surface.apply_text_style();
            surface
        }

        fn resize(&mut self, width: f32, height: f32) {
            self.width = width;
            self.height = height;
            // The context resets to defaults when the backing store is resized
            self.apply_text_style();
        }

        fn apply_text_style(&mut self) {
            self.ctx.set_font("24px Arial");
            self.ctx.set_text_align("center");
        }
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self, color: Rgb) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx
                .fill_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }

        fn draw_text(&mut self, text: &str, center: Vec2, color: Rgb) {
            self.ctx.set_fill_style_str(&color.to_css());
            let _ = self
                .ctx
                .fill_text(text, f64::from(center.x), f64::from(center.y));
        }
    }

    /// Game instance holding all state
    struct Game {
        trainer: Trainer,
        surface: CanvasSurface,
    }

    impl Game {
        fn frame(&mut self, now: f64) {
            self.trainer.tick(now);
            draw_frame(&mut self.surface, &self.trainer, now);
        }
    }

    fn viewport_size(window: &web_sys::Window) -> (f32, f32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::from(DEFAULT_WIDTH));
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::from(DEFAULT_HEIGHT));
        (width as f32, height as f32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orbit Trainer starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let seed = js_sys::Date::now() as u64;
        let mut trainer = Trainer::new(seed);
        trainer.resize(width, height);
        let game = Rc::new(RefCell::new(Game {
            trainer,
            surface: CanvasSurface::new(ctx, width, height),
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());
        start_tick_loop(game);

        log::info!("Orbit Trainer running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Clicks, any button
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                let now = js_sys::Date::now();
                let x = event.offset_x() as f32;
                let y = event.offset_y() as f32;

                let outcome = game.borrow_mut().trainer.pointer_down(x, y, now);
                match outcome {
                    ClickOutcome::Armed => log::info!("Run started"),
                    ClickOutcome::Finished { score, elapsed_ms } => {
                        log::info!("Run finished: {} hits in {:.2}s", score, elapsed_ms / 1000.0);
                    }
                    ClickOutcome::Hit { score } => log::debug!("Hit ({})", score),
                    ClickOutcome::Miss => log::debug!("Miss"),
                    ClickOutcome::Ignored => {}
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Right-click menu would swallow half the misses
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let (width, height) = viewport_size(&window);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);

            let mut g = game.borrow_mut();
            g.trainer.resize(width, height);
            g.surface.resize(width, height);
            let now = js_sys::Date::now();
            draw_frame(&mut g.surface, &g.trainer, now);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_tick_loop(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().frame(js_sys::Date::now());
        });
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS as i32,
            )
            .expect("setInterval failed");
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use orbit_trainer::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, TICK_INTERVAL_MS};
    use orbit_trainer::sim::{ClickOutcome, Trainer, Tuning};

    env_logger::init();
    log::info!("Orbit Trainer (native) starting...");

    // Headless demo run: a scripted player that clicks the active target
    // every tick the input gate is open. Fixed seed, synthetic clock.
    let seed = 0xC0FFEE;
    let mut trainer = Trainer::with_tuning(
        seed,
        Tuning {
            score_goal: 10,
            ..Tuning::default()
        },
    );
    trainer.resize(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    log::info!("Demo initialized with seed: {}", seed);

    println!("\nRunning headless demo (goal: 10 hits)...");
    let mut now = 0.0;
    let mut clicks = 0u32;
    for _ in 0..10_000 {
        now += TICK_INTERVAL_MS;
        trainer.tick(now);
        if trainer.game().targets_disabled {
            continue;
        }
        let pos = trainer.target_position(trainer.game().active_target);
        let outcome = trainer.pointer_down(pos.x, pos.y, now);
        clicks += 1;
        if let ClickOutcome::Finished { score, elapsed_ms } = outcome {
            println!(
                "✓ Finished: {} hits in {:.2}s ({} clicks)",
                score,
                elapsed_ms / 1000.0,
                clicks
            );
            break;
        }
    }

    let summary = serde_json::to_string_pretty(trainer.game()).expect("state should serialize");
    println!("{summary}");
}
