use shared::catalog::SpinResult;
use shared::prizes::prize_by_id;
use yew::prelude::*;

use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<SpinResult>,
    pub show_result: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if !props.show_result {
        return html! {};
    }

    let Some(result) = &props.result else {
        return html! {};
    };

    let full_name = prize_by_id(&result.outcome.id)
        .map(|p| p.full_name)
        .unwrap_or(result.outcome.short_name.as_str());

    let (message, card_class) = if result.outcome.is_failure {
        (full_name.to_string(), styles::RESULT_FAIL)
    } else {
        (format!("You won: {full_name}"), styles::RESULT_WIN)
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <div class={card_class}>
                <span>{message}</span>
            </div>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin the Wheel" };
    let button_class =
        if props.is_spinning { styles::SPIN_BUTTON_DISABLED } else { styles::SPIN_BUTTON_ACTIVE };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={button_class}
        >
            <span>{button_text}</span>
        </button>
    }
}
