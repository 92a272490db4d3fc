//! Pixel Runner entry point
//!
//! Browser: loads images, sizes the canvas, wires the keyboard and runs the
//! animation-frame loop. Native: runs the simulation headless.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use pixel_runner::platform::{FrameClock, KeyAction, fit_canvas};
    use pixel_runner::renderer::{Assets, CanvasSurface, WebImage};
    use pixel_runner::{Game, Settings};

    /// Frames slower than this are logged; physics still takes one step
    const LONG_FRAME_MS: f64 = 100.0;

    /// Everything the frame loop touches
    struct App {
        game: Game<WebImage>,
        surface: CanvasSurface,
        clock: FrameClock,
        canvas_width: f64,
        canvas_height: f64,
    }

    /// Start loading an image and wait for it to decode.
    ///
    /// A failed decode still yields the element; surfaces skip it when drawing.
    async fn load_image(src: &str) -> Result<WebImage, JsValue> {
        let img = HtmlImageElement::new()?;
        img.set_src(src);
        if let Err(e) = JsFuture::from(img.decode()).await {
            log::warn!("Image {} failed to decode: {:?}", src, e);
        }
        Ok(WebImage(img))
    }

    /// Scale the canvas display size to the window, keeping its aspect ratio
    fn resize_canvas(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        let size = fit_canvas(width, height);

        let style = canvas.style();
        style.set_property("width", &format!("{}px", size.width))?;
        style.set_property("height", &format!("{}px", size.height))?;
        Ok(())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Pixel Runner starting...");

        if let Err(e) = start().await {
            log::error!("Pixel Runner failed to start: {:?}", e);
        }
    }

    async fn start() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = Settings::load();
        // Write back so the key exists for editing
        settings.save();
        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);
        resize_canvas(&window, &canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let assets = Assets {
            ground: load_image("imgs/ground.png").await?,
            obstacles: load_image("imgs/obstacle.png").await?,
            player: load_image("imgs/player.png").await?,
        };

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(&settings, assets, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(ctx),
            clock: FrameClock::new(),
            canvas_width: settings.canvas_width,
            canvas_height: settings.canvas_height,
        }));

        setup_keyboard(&window, app.clone())?;
        setup_resize(&window, canvas)?;

        request_animation_frame(app);

        log::info!("Pixel Runner running!");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            event.prevent_default();
            if let Some(action) = KeyAction::from_key(&event.key()) {
                app.borrow_mut().game.handle_action(action);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_resize(window: &web_sys::Window, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                if let Err(e) = resize_canvas(&window, &canvas) {
                    log::warn!("Resize failed: {:?}", e);
                }
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let app = &mut *guard;

            let dt = app.clock.advance(time);
            if dt > LONG_FRAME_MS {
                log::debug!("Long frame: {:.1} ms", dt);
            }
            app.surface.clear(app.canvas_width, app.canvas_height);
            for event in app.game.tick(&mut app.surface) {
                log::debug!("{:?}", event);
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames simulated by the headless run (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_TICKS: u32 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pixel Runner (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    if let Err(e) = run_headless(HEADLESS_TICKS) {
        log::error!("Headless run failed: {e}");
        std::process::exit(1);
    }
}

/// Drive the game against a recording surface, jumping when obstacles get close
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(ticks: u32) -> pixel_runner::Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pixel_runner::renderer::{Assets, DrawList, NamedImage};
    use pixel_runner::sim::{GameEvent, RunnerState};
    use pixel_runner::{Game, Settings};

    // Obstacle front edge this close ahead of the player triggers a jump
    const JUMP_LOOKAHEAD: f64 = 40.0;

    fn obstacle_ahead(state: &RunnerState) -> bool {
        let gap = state.obstacles.x - (state.player.pos.x + state.player.width);
        (0.0..=JUMP_LOOKAHEAD).contains(&gap)
    }

    let settings = Settings::load();
    let assets = Assets {
        ground: NamedImage::new("ground", 1200.0, 48.0),
        obstacles: NamedImage::new("obstacles", 64.0, 128.0),
        player: NamedImage::new("player", 1200.0, 913.0),
    };
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut game = Game::new(&settings, assets, seed)?;
    let mut surface = DrawList::new();
    let (mut jumps, mut landings, mut respawns) = (0u32, 0u32, 0u32);
    let mut draw_calls = 0usize;

    for _ in 0..ticks {
        surface.clear();
        if game.state().player.is_grounded && obstacle_ahead(game.state()) {
            game.request_jump();
        }
        for event in game.tick(&mut surface) {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::Landed => landings += 1,
                GameEvent::ObstaclesRespawned { x, count } => {
                    respawns += 1;
                    log::info!("Respawn #{respawns}: {count} obstacle(s) at x={x:.1}");
                }
            }
        }
        draw_calls += surface.len();
    }

    log::info!(
        "Ran {ticks} ticks: {jumps} jumps, {landings} landings, {respawns} respawns, \
         {draw_calls} draw calls"
    );
    println!("{}", serde_json::to_string_pretty(game.state())?);
    Ok(())
}
