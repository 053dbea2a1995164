//! Browser host: canvas setup, pointer wiring and the animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use pong_core::{Arena, ArenaOverrides, Preset, Scheduler, SimulationState, Tick, Viewport};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::fsm::{GameAction, SessionFsm};
use crate::input::canvas_relative_x;
use crate::overlay::Overlay;
use crate::render::CanvasPresenter;
use crate::theme::Theme;

const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Everything one page session needs
struct App {
    arena: Arena,
    state: SimulationState,
    scheduler: Scheduler,
    presenter: CanvasPresenter,
    fsm: SessionFsm,
}

impl App {
    /// Run one frame; moves the FSM to game over when the scheduler halts
    fn tick(&mut self) -> Tick {
        let tick = self.scheduler.tick(&mut self.state, &mut self.presenter);
        if tick == Tick::Halt && self.fsm.is_playing() {
            self.fsm.transition(GameAction::GameOver);
        }
        tick
    }

    /// Start or restart the session; returns whether the loop should run
    fn start_session(&mut self, action: GameAction) -> Result<bool, JsValue> {
        let result = self.fsm.transition(action);
        if !result.success {
            log::warn!("Ignoring {:?} while {:?}", action, result.from_state);
            return Ok(false);
        }

        if self.state.reset(self.arena.clone()) {
            self.presenter.overlay_mut().hide()?;
        }
        self.scheduler.resume();
        Ok(true)
    }
}

/// Start the game on a fresh canvas appended to the page body
///
/// `config_toml` optionally overrides arena settings (preset, winning score,
/// names, ...). `theme` is `"gradient"` (default) or `"flat"`.
#[wasm_bindgen]
pub fn start(config_toml: Option<String>, theme: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialised");
    }

    let theme = match theme.as_deref() {
        Some(name) => Theme::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown theme: {}", name)))?,
        None => Theme::default(),
    };
    let mut overrides = match config_toml.as_deref() {
        Some(content) => ArenaOverrides::from_toml(content)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?,
        None => ArenaOverrides::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;

    if overrides.preset.is_none() {
        overrides.preset = Some(detect_preset(&window)?);
    }
    let arena = overrides.resolve(viewport(&window)?);
    log::info!(
        "Arena {}x{} ({:?}), first to {}",
        arena.width,
        arena.height,
        overrides.preset,
        arena.win_score
    );

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    body.append_child(&canvas)?;

    let overlay = Overlay::new(&document)?;
    let presenter = CanvasPresenter::new(canvas.clone(), theme, overlay)?;
    presenter.resize(arena.width, arena.height);

    let app = Rc::new(RefCell::new(App {
        state: SimulationState::new(arena.clone()),
        arena,
        scheduler: Scheduler::new(),
        presenter,
        fsm: SessionFsm::new(),
    }));

    setup_pointer_input(&canvas, app.clone())?;
    setup_play_again(app.clone())?;

    if app.borrow_mut().start_session(GameAction::Start)? {
        request_animation_frame(app);
    }
    Ok(())
}

fn detect_preset(window: &Window) -> Result<Preset, JsValue> {
    let mobile = window
        .match_media(MOBILE_QUERY)?
        .map(|query| query.matches())
        .unwrap_or(false);
    Ok(if mobile {
        Preset::Mobile
    } else {
        Preset::Desktop
    })
}

fn viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok(Viewport::new(width as f32, height as f32))
}

fn setup_pointer_input(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let left = canvas_clone.get_bounding_client_rect().left();
        let x = canvas_relative_x(event.client_x() as f64, left);
        app.borrow_mut().state.set_player_paddle_target(x);
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn setup_play_again(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let button = app.borrow().presenter.overlay().button().clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        let restarted = app.borrow_mut().start_session(GameAction::PlayAgain);
        match restarted {
            Ok(true) => {
                log::info!("Game restarted");
                request_animation_frame(app.clone());
            }
            Ok(false) => {}
            Err(e) => log::error!("Failed to restart: {:?}", e),
        }
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window to schedule the next frame on");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(app);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>) {
    let tick = app.borrow_mut().tick();
    if tick == Tick::Continue {
        request_animation_frame(app);
    }
}
