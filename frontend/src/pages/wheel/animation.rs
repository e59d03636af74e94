use gloo_timers::callback::Timeout;
use shared::engine::{Easing, SpinScheduler, WheelAnimator};
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::UseStateHandle;

/// Fire-and-forget browser timers behind the engine's scheduling seam.
pub struct TimeoutScheduler;

impl SpinScheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, move || f()).forget();
    }
}

// Easing function for smooth deceleration of the fast phase
fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

// Gentler curve for the settle phase
fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Where a phase starts from, given the currently displayed angle.
///
/// A fresh fast spin can begin above its absolute target when earlier
/// winning spins accumulated rotation; re-basing modulo a full turn lands
/// on the same visual position, so no rendered frame shows a jump and the
/// spin still runs forward. The settle phase is never re-based: it
/// legitimately moves backward by up to half a sector when the fast phase
/// stopped short of the sector center.
fn phase_start_angle(current: f64, target: f64, easing: Easing) -> f64 {
    if easing == Easing::FastSpin && current > target {
        current % TAU
    } else {
        current
    }
}

/// Drives the wheel's rotation state through requestAnimationFrame.
/// Targets from the engine are absolute angles; between-spin continuity
/// is handled by `phase_start_angle`.
pub struct RafAnimator {
    rotation: UseStateHandle<f64>,
    current: Rc<Cell<f64>>,
    // Bumped per animation so a superseded raf loop stops scheduling.
    generation: Rc<Cell<u64>>,
}

impl RafAnimator {
    pub fn new(rotation: UseStateHandle<f64>) -> Self {
        let current = Rc::new(Cell::new(*rotation));
        Self { rotation, current, generation: Rc::new(Cell::new(0)) }
    }
}

impl WheelAnimator for RafAnimator {
    fn animate_to(&self, target: f64, duration_ms: u32, easing: Easing) {
        let generation = Rc::clone(&self.generation);
        let this_generation = generation.get() + 1;
        generation.set(this_generation);

        let start = phase_start_angle(self.current.get(), target, easing);
        self.current.set(start);
        let change = target - start;
        let duration = duration_ms as f64;
        let start_time = js_sys::Date::now();
        let ease = match easing {
            Easing::FastSpin => ease_out_quart,
            Easing::Settle => ease_out_cubic,
        };

        let rotation = self.rotation.clone();
        let current = Rc::clone(&self.current);

        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if generation.get() != this_generation {
                return;
            }
            let elapsed = js_sys::Date::now() - start_time;
            let progress = (elapsed / duration).min(1.0);
            let angle = start + change * ease(progress);
            current.set(angle);
            rotation.set(angle);

            if elapsed < duration {
                if let Some(window) = web_sys::window() {
                    let _ = window.request_animation_frame(
                        f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    );
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(
                g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }

    fn snap_to(&self, target: f64) {
        // Cancel any in-flight loop, then jump in a single frame.
        self.generation.set(self.generation.get() + 1);
        self.current.set(target);
        self.rotation.set(target);
    }
}
