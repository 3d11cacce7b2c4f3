//! Graem Shooter entry point
//!
//! Browser: loads assets, wires DOM input and HUD, and runs the game loop.
//! Native: plays a scripted headless round and logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlImageElement,
        KeyboardEvent, MouseEvent,
    };

    use graem_shooter::audio::AudioManager;
    use graem_shooter::consts::*;
    use graem_shooter::hud::{self, HudSink};
    use graem_shooter::renderer::{Canvas2dRenderer, DrawOptions, Renderer, draw_scene};
    use graem_shooter::sim::{GameEvent, GamePhase, GameState, Outcome, TickInput, tick};
    use graem_shooter::{AssetCatalog, AssetError, Image, Settings, assets};

    /// HUD widgets in the page
    struct DomHud {
        window: web_sys::Window,
        player_health: Option<HtmlElement>,
        boss_health: Option<HtmlElement>,
        ammo: Option<web_sys::Element>,
        fps: Option<web_sys::Element>,
    }

    impl DomHud {
        fn new(window: web_sys::Window, document: &Document) -> Self {
            let bar = |selector: &str| {
                document
                    .query_selector(selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            };
            Self {
                player_health: bar("#playerHealth > div"),
                boss_health: bar("#bossHealth > div"),
                ammo: document.get_element_by_id("ammo"),
                fps: document.get_element_by_id("fps"),
                window,
            }
        }

        fn set_bar(bar: &Option<HtmlElement>, percent: i32) {
            if let Some(el) = bar {
                let _ = el.style().set_property("width", &format!("{}%", percent.max(0)));
            }
        }
    }

    impl HudSink for DomHud {
        fn set_player_health(&mut self, percent: i32) {
            Self::set_bar(&self.player_health, percent);
        }

        fn set_boss_health(&mut self, percent: i32) {
            Self::set_bar(&self.boss_health, percent);
        }

        fn set_ammo(&mut self, text: &str) {
            if let Some(el) = &self.ammo {
                el.set_text_content(Some(text));
            }
        }

        fn game_over(&mut self, outcome: Outcome) {
            let _ = self.window.alert_with_message(outcome.message());
        }

        fn set_fps(&mut self, fps: u32) {
            if let Some(el) = &self.fps {
                el.set_text_content(Some(&fps.to_string()));
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Canvas2dRenderer,
        hud: DomHud,
        audio: Option<AudioManager>,
        settings: Settings,
        input: TickInput,
        last_time: f64,
        // FPS tracking
        frames_this_second: u32,
        second_start: f64,
    }

    impl Game {
        /// Advance one frame and present it
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (((time - self.last_time) / 1000.0) as f32).min(MAX_FRAME_DT)
            } else {
                FIRST_FRAME_DT
            };
            self.last_time = time;

            let viewport = self.renderer.viewport();
            if viewport != self.state.viewport {
                self.state.resize(viewport);
            }

            tick(&mut self.state, &self.input, dt);
            // Clear one-shot inputs after processing
            self.input.pause = false;

            let events = self.state.drain_events();
            self.play_sounds(&events);

            let options = DrawOptions {
                debug: self.settings.debug_overlay,
                motion_blur: self.settings.effective_motion_blur(self.state.player.motion_blur),
            };
            draw_scene(&mut self.renderer, &self.state, self.input.pointer, options);

            // Presented after the final frame is drawn
            hud::apply_events(&mut self.hud, &events);
            self.count_frame(time);
        }

        fn play_sounds(&self, events: &[GameEvent]) {
            let Some(audio) = &self.audio else { return };
            for event in events {
                if let GameEvent::Sound(effect) = event {
                    audio.play(*effect);
                }
            }
        }

        fn count_frame(&mut self, time: f64) {
            self.frames_this_second += 1;
            if time - self.second_start >= 1000.0 {
                if self.settings.show_fps {
                    self.hud.set_fps(self.frames_this_second);
                }
                self.frames_this_second = 0;
                self.second_start = time;
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Graem Shooter starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;
        let ctx = context_2d(&canvas)?;
        let blur = match document.get_element_by_id("blur") {
            Some(el) => Some(context_2d(&el.dyn_into()?)?),
            None => None,
        };

        let settings = Settings::load_or_default(canvas.get_attribute("data-settings").as_deref());

        let (images, catalog) = load_images().await;
        log::info!("Loaded {} images", catalog.len());

        let audio = match AudioManager::new(settings.master_volume) {
            Ok(audio) => Some(audio),
            Err(e) => {
                log::warn!("{e}; audio disabled");
                None
            }
        };

        let renderer = Canvas2dRenderer::new(ctx, blur, images);
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::new(seed, renderer.viewport(), catalog);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            hud: DomHud::new(window.clone(), &document),
            audio,
            settings,
            input: TickInput::default(),
            last_time: 0.0,
            frames_this_second: 0,
            second_start: 0.0,
        }));

        // Initial HUD values
        {
            let mut g = game.borrow_mut();
            let events = g.state.drain_events();
            hud::apply_events(&mut g.hud, &events);
        }

        setup_input_handlers(&document, &canvas, game.clone());
        setup_auto_pause(&document, game.clone());

        request_animation_frame(game);
        Ok(())
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    /// Load every manifest image; failures are logged and left out of the
    /// catalog
    async fn load_images() -> (HashMap<String, HtmlImageElement>, AssetCatalog) {
        let mut images = HashMap::new();
        let mut catalog = AssetCatalog::new();
        for key in assets::manifest().images {
            match load_image(&key).await {
                Ok(image) => {
                    catalog.insert(Image::new(
                        key.clone(),
                        image.natural_width() as f32,
                        image.natural_height() as f32,
                    ));
                    images.insert(key, image);
                }
                Err(e) => log::warn!("{e}"),
            }
        }
        (images, catalog)
    }

    async fn load_image(src: &str) -> Result<HtmlImageElement, AssetError> {
        let failed = |e: JsValue| AssetError::Image {
            key: src.to_string(),
            reason: format!("{e:?}"),
        };

        let image = HtmlImageElement::new().map_err(failed)?;
        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(src);
        JsFuture::from(loaded).await.map_err(failed)?;

        image.set_onload(None);
        image.set_onerror(None);
        Ok(image)
    }

    fn setup_input_handlers(document: &Document, canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pointer_down = true;
            });
            let _ = document.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pointer_down = false;
            });
            let _ = document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move, converted from page to canvas pixels
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                let (w, h) = (canvas.width() as f64, canvas.height() as f64);
                let x = (event.client_x() as f64 - rect.left()) * w / rect.width();
                let y = (event.client_y() as f64 - rect.top()) * h / rect.height();
                game.borrow_mut().input.pointer =
                    Vec2::new(x.clamp(0.0, w) as f32, y.clamp(0.0, h) as f32);
            });
            let _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Escape" | "p" | "P" => g.input.pause = true,
                    key => {
                        g.input.set_key(key, true);
                    }
                }
            });
            let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.set_key(&event.key(), false);
            });
            let _ = document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Pause when the tab is hidden
    fn setup_auto_pause(document: &Document, game: Rc<RefCell<Game>>) {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Playing {
                    g.input.pause = true;
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let stopped = {
            let mut g = game.borrow_mut();
            g.frame(time);
            g.state.is_stopped()
        };

        // The frame that ended the run still completes; no more are scheduled
        if !stopped {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("startup failed: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use graem_shooter::Settings;

    env_logger::init();
    log::info!("Graem Shooter (native) starting...");
    log::info!("The game itself runs in the browser; playing a scripted headless round");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::from_file(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };

    headless::play(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use graem_shooter::audio::SoundEffect;
    use graem_shooter::consts::FIRST_FRAME_DT;
    use graem_shooter::hud::{self, HudSink};
    use graem_shooter::sim::{GameEvent, GameState, Outcome, TickInput, Viewport, tick};
    use graem_shooter::{AssetCatalog, Settings};

    /// Two minutes at 60 fps
    const MAX_FRAMES: u32 = 60 * 120;
    /// Seconds spent strafing in each direction
    const STRAFE_PERIOD: f32 = 2.0;

    struct LogHud;

    impl HudSink for LogHud {
        fn set_player_health(&mut self, percent: i32) {
            log::info!("player health {percent}%");
        }

        fn set_boss_health(&mut self, percent: i32) {
            log::debug!("boss health {percent}%");
        }

        fn set_ammo(&mut self, text: &str) {
            log::trace!("ammo {text}");
        }

        fn game_over(&mut self, outcome: Outcome) {
            println!("{}", outcome.message());
        }
    }

    /// Hold the trigger on Graem while strafing side to side
    pub fn play(settings: &Settings) {
        let seed = settings.seed.unwrap_or(0x6772_6165_6d);
        let mut state = GameState::new(seed, Viewport::new(800.0, 600.0), AssetCatalog::headless());
        let mut hud = LogHud;
        let mut shots = 0u32;

        for frame in 0..MAX_FRAMES {
            let strafe_left = (state.time / STRAFE_PERIOD) as u32 % 2 == 0;
            let input = TickInput {
                pointer: state.boss.as_ref().map_or(Vec2::ZERO, |b| b.entity.position),
                pointer_down: true,
                left: strafe_left,
                right: !strafe_left,
                ..Default::default()
            };
            tick(&mut state, &input, FIRST_FRAME_DT);

            let events = state.drain_events();
            shots += events
                .iter()
                .filter(|e| **e == GameEvent::Sound(SoundEffect::Shoot))
                .count() as u32;
            hud::apply_events(&mut hud, &events);

            if state.is_stopped() {
                log::info!("round ended after {} frames", frame + 1);
                break;
            }
        }

        let boss_health = state.boss.as_ref().map_or(0, |b| b.health);
        println!(
            "seed {seed}: {:.1}s simulated, player {} hp, Graem {} hp, {} minions left, {} shots fired",
            state.time,
            state.player.health,
            boss_health,
            state.minions.len(),
            shots,
        );
    }
}
