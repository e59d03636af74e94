use shared::prizes::Prize;
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, TAU};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;

// Radians between characters of a curved sector label.
const CHAR_SPACING: f64 = 0.07;

const LOGO_SRC: &str = "assets/logo.png";
const PRIZE_IMAGE_SIZE: f64 = 65.0;
const LOGO_SIZE: f64 = 50.0;

/// Prize and logo images, created once per canvas mount. Each load
/// notifies the component so the wheel redraws as images arrive; an image
/// is only drawn once the browser reports it complete, as the shipped
/// wheel does.
struct ImageCache {
    logo: Option<HtmlImageElement>,
    by_id: HashMap<&'static str, HtmlImageElement>,
    _on_load: Vec<Closure<dyn FnMut()>>,
}

impl ImageCache {
    fn new(prizes: &[Prize], on_load: Callback<()>) -> Self {
        let mut callbacks = Vec::new();
        let logo = Self::load(LOGO_SRC, &on_load, &mut callbacks);
        let mut by_id = HashMap::new();
        for prize in prizes {
            if let Some(src) = prize.image {
                if let Some(img) = Self::load(src, &on_load, &mut callbacks) {
                    by_id.insert(prize.id, img);
                }
            }
        }
        Self { logo, by_id, _on_load: callbacks }
    }

    fn load(
        src: &str,
        on_load: &Callback<()>,
        callbacks: &mut Vec<Closure<dyn FnMut()>>,
    ) -> Option<HtmlImageElement> {
        let img = HtmlImageElement::new().ok()?;
        let on_load = on_load.clone();
        let closure = Closure::wrap(Box::new(move || on_load.emit(())) as Box<dyn FnMut()>);
        img.set_onload(Some(closure.as_ref().unchecked_ref()));
        callbacks.push(closure);
        img.set_src(src);
        Some(img)
    }

    fn ready(img: &&HtmlImageElement) -> bool {
        img.complete() && img.natural_height() != 0
    }

    fn prize(&self, id: &str) -> Option<&HtmlImageElement> {
        self.by_id.get(id).filter(Self::ready)
    }

    fn hub_logo(&self) -> Option<&HtmlImageElement> {
        self.logo.as_ref().filter(Self::ready)
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Current wheel angle in radians.
    pub rotation: f64,
    pub is_spinning: bool,
    pub prizes: Vec<Prize>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    // Bumped by every image onload so the wheel redraws as images arrive.
    let loaded_images = use_state(|| 0u32);
    let load_count = use_mut_ref(|| 0u32);

    let images = {
        let prizes = props.prizes.clone();
        let loaded_images = loaded_images.clone();
        let load_count = load_count.clone();
        use_mut_ref(move || {
            let on_load = Callback::from(move |_: ()| {
                let mut count = load_count.borrow_mut();
                *count += 1;
                loaded_images.set(*count);
            });
            ImageCache::new(&prizes, on_load)
        })
    };

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let prizes = props.prizes.clone();
        let images = images.clone();

        use_effect_with(
            (rotation, props.is_spinning, prizes, *loaded_images),
            move |(rotation, _, prizes, _)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .unwrap()
                        .unwrap()
                        .dyn_into::<CanvasRenderingContext2d>()
                        .unwrap();
                    draw_wheel(&context, &canvas, *rotation, prizes, &images.borrow());
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(255, 165, 0, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    rotation: f64,
    prizes: &[Prize],
    images: &ImageCache,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 10.0;
    let arc = TAU / prizes.len() as f64;

    context.clear_rect(0.0, 0.0, width, height);

    // Rotate the whole wheel around its center
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation);
    let _ = context.translate(-center_x, -center_y);

    for (i, prize) in prizes.iter().enumerate() {
        let angle = i as f64 * arc;

        // Sector fill
        context.begin_path();
        context.set_fill_style_str(prize.color);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, angle, angle + arc);
        context.line_to(center_x, center_y);
        context.fill();
        context.set_stroke_style_str("#fff");
        context.set_line_width(2.0);
        context.stroke();

        // Prize image and curved label share the sector-center frame
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(angle + arc / 2.0);

        if let Some(img) = images.prize(prize.id) {
            let _ = context.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                radius - 110.0,
                -PRIZE_IMAGE_SIZE / 2.0,
                PRIZE_IMAGE_SIZE,
                PRIZE_IMAGE_SIZE,
            );
        }

        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_fill_style_str(prize.text_color);
        context.set_font("bold 14px Poppins, sans-serif");

        let text_radius = radius - 30.0;
        let characters: Vec<char> = prize.short_name.chars().collect();
        let total_text_angle = (characters.len().saturating_sub(1)) as f64 * CHAR_SPACING;
        let _ = context.rotate(-total_text_angle / 2.0);

        for ch in characters {
            context.save();
            let _ = context.translate(text_radius, 0.0);
            let _ = context.rotate(FRAC_PI_2);
            let _ = context.fill_text(&ch.to_string(), 0.0, 0.0);
            context.restore();
            let _ = context.rotate(CHAR_SPACING);
        }

        context.restore();
    }

    context.restore();

    // Center hub
    context.begin_path();
    let _ = context.arc(center_x, center_y, 40.0, 0.0, TAU);
    context.set_fill_style_str("#fff");
    context.fill();
    context.set_stroke_style_str("#FF6600");
    context.set_line_width(5.0);
    context.stroke();

    if let Some(logo) = images.hub_logo() {
        let _ = context.draw_image_with_html_image_element_and_dw_and_dh(
            logo,
            center_x - LOGO_SIZE / 2.0,
            center_y - LOGO_SIZE / 2.0,
            LOGO_SIZE,
            LOGO_SIZE,
        );
    }

    // Fixed pointer at twelve o'clock, drawn after the rotation restore
    context.begin_path();
    context.move_to(center_x, center_y - radius + 18.0);
    context.line_to(center_x - 14.0, center_y - radius - 14.0);
    context.line_to(center_x + 14.0, center_y - radius - 14.0);
    context.close_path();
    context.set_fill_style_str("#FF6600");
    context.fill();
    context.set_stroke_style_str("#fff");
    context.set_line_width(2.0);
    context.stroke();
}
