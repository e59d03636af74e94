use web_sys::HtmlAudioElement;

const SPIN_SOUND_URL: &str = "https://assets.mixkit.co/active_storage/sfx/2004/2004-preview.mp3";
const WIN_SOUND_URL: &str = "https://assets.mixkit.co/active_storage/sfx/1435/1435-preview.mp3";
const FAIL_SOUND_URL: &str = "https://assets.mixkit.co/active_storage/sfx/255/255-preview.mp3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Spin,
    Win,
    Fail,
}

/// Audio elements owned by the widget instance, created on mount and
/// dropped with it. Playback failures (browsers block audio before the
/// first user gesture) are ignored.
pub struct SoundBank {
    spin: HtmlAudioElement,
    win: HtmlAudioElement,
    fail: HtmlAudioElement,
}

impl SoundBank {
    pub fn new() -> Option<Self> {
        let spin = HtmlAudioElement::new_with_src(SPIN_SOUND_URL).ok()?;
        spin.set_volume(0.5);
        let win = HtmlAudioElement::new_with_src(WIN_SOUND_URL).ok()?;
        let fail = HtmlAudioElement::new_with_src(FAIL_SOUND_URL).ok()?;
        Some(Self { spin, win, fail })
    }

    pub fn play(&self, sound: Sound) {
        let element = match sound {
            Sound::Spin => &self.spin,
            Sound::Win => &self.win,
            Sound::Fail => &self.fail,
        };
        element.set_current_time(0.0);
        if element.play().is_err() {
            log::debug!("sound blocked by browser");
        }
    }
}
