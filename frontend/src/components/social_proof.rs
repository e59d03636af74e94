use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shared::prizes::{winnable_prizes, Prize};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;
use yew::prelude::*;

use crate::styles;

const WINNER_NAMES: &[&str] = &[
    "Sarah Johnson",
    "Miguel Rodriguez",
    "Emma Chen",
    "Ahmed Hassan",
    "Maria Silva",
    "James Wilson",
    "Priya Patel",
    "Luca Rossi",
    "Anna Kowalski",
    "Carlos Mendoza",
    "Yuki Tanaka",
    "David Kim",
    "Isabella Morales",
    "Mohammed Al-Rashid",
    "Sophie Dubois",
    "Oliver Smith",
    "Elena Popa",
    "Hans Weber",
    "Fatima Zahra",
    "Choi Min-ho",
    "Anita Kumar",
    "George Brown",
    "Chloe Martin",
];

const TIME_PHRASES: &[&str] = &[
    "2m ago", "5m ago", "8m ago", "12m ago", "15m ago", "18m ago", "22m ago", "25m ago",
    "just now", "1m ago", "4m ago",
];

const FIRST_TOAST_DELAY_MS: u32 = 3_000;
const TOAST_VISIBLE_MS: u32 = 5_000;
const MIN_HIDDEN_MS: u32 = 8_000;
const HIDDEN_JITTER_MS: u32 = 7_000;

#[derive(Clone, PartialEq)]
struct Toast {
    masked_name: String,
    prize: &'static Prize,
    time_phrase: &'static str,
}

#[derive(Clone, PartialEq)]
enum FeedPhase {
    Hidden { delay_ms: u32 },
    Shown,
}

/// Masks a winner's name down to two leading characters per part, the way
/// the feed displays "recent" winners.
fn format_private_name(name: &str) -> String {
    let head = |s: &str| s.chars().take(2).collect::<String>();
    let parts: Vec<&str> = name.split(' ').collect();
    if parts.len() < 2 {
        return format!("{}***", head(name));
    }
    format!("{}*** {}***", head(parts[0]), head(parts[parts.len() - 1]))
}

fn get_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    let prefix = format!("{name}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|c| c.strip_prefix(prefix.as_str()))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn next_hidden_delay(rng: &mut SmallRng) -> u32 {
    MIN_HIDDEN_MS + rng.gen_range(0..HIDDEN_JITTER_MS)
}

// A visitor without the cookie is shown the US flag; only an explicit
// "unknown" gets the globe.
const DEFAULT_COUNTRY: &str = "us";

fn resolve_country(cookie: Option<String>) -> String {
    cookie.unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
}

fn flag_url(country: &str) -> Option<String> {
    (country != "unknown")
        .then(|| format!("https://flagcdn.com/20x15/{}.png", country.to_lowercase()))
}

/// Fabricated recent-winners toast. All feed state lives in this component
/// and is torn down with it; the show/hide cycle is a pair of one-shot
/// timers whose handles are dropped whenever the phase changes or the
/// component unmounts.
#[function_component(SocialProofFeed)]
pub fn social_proof_feed() -> Html {
    let phase = use_state(|| FeedPhase::Hidden { delay_ms: FIRST_TOAST_DELAY_MS });
    let toast = use_state(|| None::<Toast>);
    let rng = use_mut_ref(SmallRng::from_entropy);
    let country = use_memo((), |_| resolve_country(get_cookie("user_country")));

    {
        let phase_handle = phase.clone();
        let toast = toast.clone();
        let rng = rng.clone();
        use_effect_with((*phase).clone(), move |phase| {
            let handle = match phase {
                FeedPhase::Hidden { delay_ms } => Timeout::new(*delay_ms, move || {
                    let mut rng = rng.borrow_mut();
                    let name = WINNER_NAMES[rng.gen_range(0..WINNER_NAMES.len())];
                    let prizes: Vec<&'static Prize> = winnable_prizes().collect();
                    let prize = prizes[rng.gen_range(0..prizes.len())];
                    let time_phrase = TIME_PHRASES[rng.gen_range(0..TIME_PHRASES.len())];
                    toast.set(Some(Toast {
                        masked_name: format_private_name(name),
                        prize,
                        time_phrase,
                    }));
                    phase_handle.set(FeedPhase::Shown);
                }),
                FeedPhase::Shown => Timeout::new(TOAST_VISIBLE_MS, move || {
                    let delay_ms = next_hidden_delay(&mut rng.borrow_mut());
                    phase_handle.set(FeedPhase::Hidden { delay_ms });
                }),
            };
            move || drop(handle)
        });
    }

    let on_close = {
        let phase = phase.clone();
        let rng = rng.clone();
        Callback::from(move |_: MouseEvent| {
            let delay_ms = next_hidden_delay(&mut rng.borrow_mut());
            phase.set(FeedPhase::Hidden { delay_ms });
        })
    };

    if *phase != FeedPhase::Shown {
        return html! {};
    }
    let Some(toast) = (*toast).clone() else {
        return html! {};
    };

    let flag = match flag_url(&country) {
        Some(url) => html! { <img src={url} alt={(*country).clone()} /> },
        None => html! { <span>{"🌍"}</span> },
    };

    html! {
        <div class={styles::TOAST}>
            <div class={styles::TOAST_AVATAR}>
                {
                    if let Some(image) = toast.prize.image {
                        html! { <img src={image} alt="Prize" style="object-fit: contain; padding: 2px;" /> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div>
                <div>
                    <span class={styles::TOAST_NAME}>{&toast.masked_name}</span>
                    <span class={styles::TOAST_TIME}>{toast.time_phrase}</span>
                </div>
                <span class={styles::TOAST_PRIZE}>
                    {"Won "}<strong>{toast.prize.short_name}</strong>
                </span>
            </div>
            {flag}
            <div class={styles::TOAST_CLOSE} onclick={on_close}>{"\u{00d7}"}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_first_and_last_name() {
        assert_eq!(format_private_name("Sarah Johnson"), "Sa*** Jo***");
        assert_eq!(format_private_name("Mohammed Al-Rashid"), "Mo*** Al***");
    }

    #[test]
    fn masks_single_part_names() {
        assert_eq!(format_private_name("Cher"), "Ch***");
    }

    #[test]
    fn missing_cookie_defaults_to_us() {
        assert_eq!(resolve_country(None), "us");
        assert_eq!(resolve_country(Some("de".to_string())), "de");
    }

    #[test]
    fn unknown_country_gets_no_flag() {
        assert!(flag_url("unknown").is_none());
        assert_eq!(flag_url("US").as_deref(), Some("https://flagcdn.com/20x15/us.png"));
    }
}
