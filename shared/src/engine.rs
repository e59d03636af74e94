use rand::Rng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use crate::catalog::{Catalog, SpinResult};
use crate::rotation::{self, RotationPlan, SETTLE_DURATION_MS, SPIN_DURATION_MS};
use crate::sampler;

/// Easing descriptor for an animation phase. The actual curves live in the
/// animation layer; the engine only distinguishes the hard phase-1 spin
/// from the gentler settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    FastSpin,
    Settle,
}

/// Delayed-callback primitive. Browser code backs this with a timer; tests
/// back it with a manually advanced clock.
pub trait SpinScheduler {
    fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>);
}

/// Rotation sink. `animate_to` carries an absolute target angle; the sink
/// owns continuity from whatever angle is currently displayed. `snap_to`
/// jumps with no transition and must not produce a visible intermediate
/// frame.
pub trait WheelAnimator {
    fn animate_to(&self, target: f64, duration_ms: u32, easing: Easing);
    fn snap_to(&self, target: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpinState {
    Idle,
    Spinning,
}

struct EngineInner<R: Rng> {
    catalog: Catalog,
    rng: R,
    state: SpinState,
    /// Resting angle after the last completed spin, in radians.
    rotation: f64,
    plan: Option<RotationPlan>,
    scheduler: Rc<dyn SpinScheduler>,
    animator: Rc<dyn WheelAnimator>,
}

/// Two-phase spin state machine: `Idle -> Spinning` on `spin()`, back to
/// `Idle` when the settle timer fires. A `spin()` while already spinning is
/// a documented no-op; the in-flight plan is never restarted, queued, or
/// altered.
///
/// Phase boundaries are wall-clock timers, not completion signals from the
/// animator. If the animator renders slower than the timer the outcome
/// callback can fire before the wheel looks settled, and an animator that
/// never runs stalls nothing here but leaves the picture frozen mid-spin.
/// There is no cancellation and no timeout path.
pub struct WheelEngine<R: Rng> {
    inner: Rc<RefCell<EngineInner<R>>>,
}

impl<R: Rng> Clone for WheelEngine<R> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<R: Rng + 'static> WheelEngine<R> {
    pub fn new(
        catalog: Catalog,
        rng: R,
        scheduler: Rc<dyn SpinScheduler>,
        animator: Rc<dyn WheelAnimator>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EngineInner {
                catalog,
                rng,
                state: SpinState::Idle,
                rotation: 0.0,
                plan: None,
                scheduler,
                animator,
            })),
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.inner.borrow().state == SpinState::Spinning
    }

    /// Resting angle after the last completed spin.
    pub fn rotation(&self) -> f64 {
        self.inner.borrow().rotation
    }

    /// Targets of the in-flight spin, if any.
    pub fn current_plan(&self) -> Option<RotationPlan> {
        self.inner.borrow().plan
    }

    pub fn catalog(&self) -> Catalog {
        self.inner.borrow().catalog.clone()
    }

    /// Starts a spin: selects the winning sector, animates to a random
    /// point inside it over the fast phase, then settles onto its center.
    /// `on_settled` fires when the settle completes, `on_outcome` right
    /// after with the selected outcome. No-op while a spin is in flight.
    pub fn spin(
        &self,
        on_settled: impl FnOnce() + 'static,
        on_outcome: impl FnOnce(SpinResult) + 'static,
    ) {
        let (result, plan, scheduler, animator) = {
            let mut inner = self.inner.borrow_mut();
            if inner.state == SpinState::Spinning {
                log::debug!("spin ignored: wheel already spinning");
                return;
            }
            inner.state = SpinState::Spinning;

            let EngineInner { catalog, rng, .. } = &mut *inner;
            let result = sampler::select_outcome(catalog, rng);
            let plan = rotation::plan_rotation(result.index, catalog.len(), rng);
            inner.plan = Some(plan);
            (result, plan, Rc::clone(&inner.scheduler), Rc::clone(&inner.animator))
        };
        log::debug!(
            "spin: sector {} ({}), fast target {:.3} rad, settle target {:.3} rad",
            result.index,
            result.outcome.id,
            plan.fast_target,
            plan.settle_target
        );

        animator.animate_to(plan.fast_target, SPIN_DURATION_MS, Easing::FastSpin);

        let inner = Rc::clone(&self.inner);
        let phase2_scheduler = Rc::clone(&scheduler);
        scheduler.after(
            SPIN_DURATION_MS,
            Box::new(move || {
                animator.animate_to(plan.settle_target, SETTLE_DURATION_MS, Easing::Settle);

                let settle_animator = Rc::clone(&animator);
                phase2_scheduler.after(
                    SETTLE_DURATION_MS,
                    Box::new(move || {
                        let snap = {
                            let mut inner = inner.borrow_mut();
                            inner.state = SpinState::Idle;
                            inner.plan = None;
                            inner.rotation = if result.outcome.is_failure {
                                // Keep accumulated rotation bounded so the
                                // next plan's turn count stays meaningful.
                                plan.settle_target % TAU
                            } else {
                                plan.settle_target
                            };
                            result.outcome.is_failure.then_some(inner.rotation)
                        };
                        if let Some(angle) = snap {
                            settle_animator.snap_to(angle);
                        }
                        on_settled();
                        on_outcome(result);
                    }),
                );
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Outcome;
    use crate::rotation::MIN_EXTRA_TURNS;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    /// Manually advanced clock: tasks run, in due order, when `advance`
    /// crosses their deadline.
    struct TestScheduler {
        now: Cell<u64>,
        tasks: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
    }

    impl TestScheduler {
        fn new() -> Rc<Self> {
            Rc::new(Self { now: Cell::new(0), tasks: RefCell::new(Vec::new()) })
        }

        fn advance(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
            loop {
                let due = {
                    let mut tasks = self.tasks.borrow_mut();
                    let next = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _))| *at <= self.now.get())
                        .min_by_key(|(_, (at, _))| *at)
                        .map(|(i, _)| i);
                    next.map(|i| tasks.remove(i).1)
                };
                match due {
                    Some(task) => task(),
                    None => break,
                }
            }
        }

        fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }
    }

    impl SpinScheduler for TestScheduler {
        fn after(&self, delay_ms: u32, f: Box<dyn FnOnce()>) {
            self.tasks.borrow_mut().push((self.now.get() + delay_ms as u64, f));
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum AnimatorCall {
        Animate { target: f64, duration_ms: u32, easing: Easing },
        Snap { target: f64 },
    }

    #[derive(Default)]
    struct TestAnimator {
        calls: RefCell<Vec<AnimatorCall>>,
    }

    impl WheelAnimator for TestAnimator {
        fn animate_to(&self, target: f64, duration_ms: u32, easing: Easing) {
            self.calls.borrow_mut().push(AnimatorCall::Animate { target, duration_ms, easing });
        }

        fn snap_to(&self, target: f64) {
            self.calls.borrow_mut().push(AnimatorCall::Snap { target });
        }
    }

    fn win_lose_catalog() -> Catalog {
        Catalog::new(vec![
            Outcome::new("win", "Win", 1.0),
            Outcome::failure("lose", "Lose", 0.0),
        ])
        .unwrap()
    }

    fn always_lose_catalog() -> Catalog {
        Catalog::new(vec![
            Outcome::new("prize", "Prize", 0.0),
            Outcome::failure("zonk", "Zonk", 1.0),
        ])
        .unwrap()
    }

    fn engine_with(
        catalog: Catalog,
    ) -> (WheelEngine<SmallRng>, Rc<TestScheduler>, Rc<TestAnimator>) {
        let scheduler = TestScheduler::new();
        let animator = Rc::new(TestAnimator::default());
        let engine = WheelEngine::new(
            catalog,
            SmallRng::seed_from_u64(1234),
            Rc::clone(&scheduler) as Rc<dyn SpinScheduler>,
            Rc::clone(&animator) as Rc<dyn WheelAnimator>,
        );
        (engine, scheduler, animator)
    }

    #[test]
    fn spin_runs_both_phases_and_reports_outcome_in_order() {
        let (engine, scheduler, animator) = engine_with(win_lose_catalog());
        let events: Rc<RefCell<Vec<String>>> = Rc::default();

        let settled_events = Rc::clone(&events);
        let outcome_events = Rc::clone(&events);
        engine.spin(
            move || settled_events.borrow_mut().push("settled".into()),
            move |result| outcome_events.borrow_mut().push(format!("outcome:{}", result.outcome.id)),
        );

        assert!(engine.is_spinning());
        assert_eq!(animator.calls.borrow().len(), 1, "only phase 1 should have started");

        scheduler.advance(4_999);
        assert!(events.borrow().is_empty());
        assert_eq!(animator.calls.borrow().len(), 1);

        scheduler.advance(1);
        assert_eq!(animator.calls.borrow().len(), 2, "phase 2 starts when phase 1 elapses");
        assert!(events.borrow().is_empty());
        assert!(engine.is_spinning());

        scheduler.advance(1_199);
        assert!(events.borrow().is_empty());

        scheduler.advance(1);
        assert!(!engine.is_spinning());
        assert_eq!(*events.borrow(), vec!["settled".to_string(), "outcome:win".to_string()]);

        let calls = animator.calls.borrow();
        let plan_targets: Vec<f64> = calls
            .iter()
            .filter_map(|c| match c {
                AnimatorCall::Animate { target, .. } => Some(*target),
                AnimatorCall::Snap { .. } => None,
            })
            .collect();
        assert_eq!(plan_targets.len(), 2);
        assert_eq!(
            calls[0],
            AnimatorCall::Animate {
                target: plan_targets[0],
                duration_ms: SPIN_DURATION_MS,
                easing: Easing::FastSpin
            }
        );
        assert_eq!(
            calls[1],
            AnimatorCall::Animate {
                target: plan_targets[1],
                duration_ms: SETTLE_DURATION_MS,
                easing: Easing::Settle
            }
        );
    }

    #[test]
    fn spin_while_spinning_is_a_no_op() {
        let (engine, scheduler, animator) = engine_with(win_lose_catalog());

        engine.spin(|| {}, |_| {});
        let plan = engine.current_plan().expect("plan retained during spin");
        let calls_before = animator.calls.borrow().len();
        let pending_before = scheduler.pending();

        engine.spin(|| panic!("second spin must not run"), |_| panic!("second spin must not run"));

        assert_eq!(engine.current_plan(), Some(plan), "in-flight targets unchanged");
        assert_eq!(animator.calls.borrow().len(), calls_before, "no restarted animation");
        assert_eq!(scheduler.pending(), pending_before, "no restarted timers");

        scheduler.advance(5_000);
        scheduler.advance(1_200);
        assert!(!engine.is_spinning());
    }

    #[test]
    fn winning_spin_keeps_absolute_rotation() {
        let (engine, scheduler, animator) = engine_with(win_lose_catalog());
        engine.spin(|| {}, |_| {});
        let plan = engine.current_plan().unwrap();

        scheduler.advance(5_000);
        scheduler.advance(1_200);

        assert_eq!(engine.rotation(), plan.settle_target);
        assert!(
            !animator.calls.borrow().iter().any(|c| matches!(c, AnimatorCall::Snap { .. })),
            "no position normalization after a win"
        );
        assert!(engine.current_plan().is_none());
    }

    #[test]
    fn failure_spin_normalizes_rotation_without_animation() {
        let (engine, scheduler, animator) = engine_with(always_lose_catalog());
        let outcome_id: Rc<RefCell<Option<String>>> = Rc::default();
        let seen = Rc::clone(&outcome_id);
        engine.spin(|| {}, move |result| *seen.borrow_mut() = Some(result.outcome.id));

        let plan = engine.current_plan().unwrap();
        scheduler.advance(5_000);
        scheduler.advance(1_200);

        assert_eq!(outcome_id.borrow().as_deref(), Some("zonk"));
        assert!(engine.rotation() >= 0.0 && engine.rotation() < TAU);
        let expected = plan.settle_target % TAU;
        assert_eq!(
            animator.calls.borrow().last(),
            Some(&AnimatorCall::Snap { target: expected }),
            "reset applied as a snap, not an animated transition"
        );
    }

    #[test]
    fn spin_after_failure_reset_still_plans_full_turns() {
        let (engine, scheduler, _animator) = engine_with(always_lose_catalog());
        engine.spin(|| {}, |_| {});
        scheduler.advance(5_000);
        scheduler.advance(1_200);
        assert!(engine.rotation() < TAU);

        engine.spin(|| {}, |_| {});
        let plan = engine.current_plan().unwrap();
        // base angle embeds at least MIN_EXTRA_TURNS full rotations
        assert!(plan.fast_target >= (MIN_EXTRA_TURNS as f64 - 1.0) * TAU);
        scheduler.advance(5_000);
        scheduler.advance(1_200);
        assert!(!engine.is_spinning());
    }
}
