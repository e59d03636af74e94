mod animation;
mod wheel_canvas;
mod wheel_utils;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::catalog::{Catalog, SpinResult};
use shared::engine::{SpinScheduler, WheelAnimator, WheelEngine};
use shared::prizes::PRIZES;
use std::rc::Rc;
use yew::prelude::*;

use crate::audio::{Sound, SoundBank};
use crate::styles;
use animation::{RafAnimator, TimeoutScheduler};
use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct WheelPageProps {
    pub catalog: Catalog,
}

#[function_component(WheelPage)]
pub fn wheel_page(props: &WheelPageProps) -> Html {
    // Start on a boundary between sectors, as the wheel is shipped: the
    // pointer at twelve o'clock sits on a line, not inside a sector.
    let initial_rotation = -props.catalog.arc_size() / 2.0;
    let rotation = use_state(|| initial_rotation);
    let is_spinning = use_state(|| false);
    let result = use_state(|| None::<SpinResult>);
    let show_result = use_state(|| false);

    let sounds = use_mut_ref(SoundBank::new);

    // One engine per widget mount; the rotation state handle stays valid
    // for the component's whole lifetime.
    let engine = {
        let rotation = rotation.clone();
        let catalog = props.catalog.clone();
        use_mut_ref(move || {
            WheelEngine::new(
                catalog,
                SmallRng::from_entropy(),
                Rc::new(TimeoutScheduler) as Rc<dyn SpinScheduler>,
                Rc::new(RafAnimator::new(rotation)) as Rc<dyn WheelAnimator>,
            )
        })
    };

    let on_spin = {
        let engine = engine.clone();
        let is_spinning = is_spinning.clone();
        let result = result.clone();
        let show_result = show_result.clone();
        let sounds = sounds.clone();

        Callback::from(move |_: MouseEvent| {
            if *is_spinning {
                return;
            }
            is_spinning.set(true);
            show_result.set(false);
            result.set(None);
            if let Some(bank) = sounds.borrow().as_ref() {
                bank.play(Sound::Spin);
            }

            let is_spinning = is_spinning.clone();
            let result = result.clone();
            let show_result = show_result.clone();
            let sounds = sounds.clone();
            engine.borrow().spin(
                || {},
                move |spin_result| {
                    if let Some(bank) = sounds.borrow().as_ref() {
                        bank.play(if spin_result.outcome.is_failure {
                            Sound::Fail
                        } else {
                            Sound::Win
                        });
                    }
                    is_spinning.set(false);
                    result.set(Some(spin_result));
                    show_result.set(true);
                },
            );
        })
    };

    html! {
        <div class={styles::PAGE}>
            <h1 class={styles::TITLE}>
                <span class={styles::TITLE_ACCENT}>{"Spin to Win"}</span>
            </h1>
            <div class={styles::CARD}>
                <div class={styles::WHEEL_WRAP}>
                    <div class="w-full max-w-[450px] mx-auto">
                        <WheelCanvas
                            rotation={*rotation}
                            is_spinning={*is_spinning}
                            prizes={PRIZES.to_vec()}
                        />
                    </div>
                </div>
                <div class="flex justify-center mt-4">
                    <div class="w-full max-w-[300px]">
                        <SpinButton is_spinning={*is_spinning} onclick={on_spin} />
                    </div>
                </div>
                <ResultDisplay result={(*result).clone()} show_result={*show_result} />
            </div>
        </div>
    }
}
