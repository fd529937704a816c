use std::time::Duration;

use crate::motion::frame_index;

/// Where a preset is meant to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Loader,
    Idle,
    Event,
}

/// Looping text animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub kind: PresetKind,
    pub frames: &'static [&'static str],
    /// Time each frame stays on screen
    pub interval: Duration,
}

impl Preset {
    /// Frame to show at `frame` ticks of `tick_period` each.
    ///
    /// The interval is converted to whole ticks (at least one), so presets
    /// keep their pace across performance tiers.
    pub fn frame_at(&self, frame: u64, tick_period: Duration) -> &'static str {
        if self.frames.is_empty() {
            return "";
        }
        let ticks = (self.interval.as_millis() / tick_period.as_millis().max(1)).max(1);
        self.frames[frame_index(frame, ticks as u64, self.frames.len())]
    }
}

pub const DEFAULT_PRESET: &str = "vhs-scan";

const fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub(crate) fn builtin() -> Vec<Preset> {
    use PresetKind::*;

    vec![
        Preset {
            name: DEFAULT_PRESET,
            kind: Loader,
            frames: &["▞▚▞▚▞▚▞▚▞▚▞▚", "▚▞▚▞▚▞▚▞▚▞▚▞"],
            interval: ms(70),
        },
        Preset {
            name: "crt-wipe",
            kind: Loader,
            frames: &["│││││││││││││", "┃┃┃┃┃┃┃┃┃┃┃┃┃", "║║║║║║║║║║║║║"],
            interval: ms(60),
        },
        Preset {
            name: "matrix-rain",
            kind: Loader,
            frames: &["ａａｂｂ０１０１ｚｚ", "０１０１ｚｚａａｂｂ", "ｚｚａａｂｂ０１０１"],
            interval: ms(90),
        },
        Preset {
            name: "slime-bounce",
            kind: Loader,
            frames: &["(o˶╹︿╹˶o)", "(o˶╹﹏╹˶o)", "(o˶╹︿╹˶o)~", "~(o˶╹︿╹˶o)"],
            interval: ms(80),
        },
        Preset {
            name: "floppy-spin",
            kind: Loader,
            frames: &["💾", "💽", "💿"],
            interval: ms(80),
        },
        Preset {
            name: "vibe-wave",
            kind: Idle,
            frames: &["~    ~    ~", "  ~    ~   ", "    ~    ~  ", " ~    ~    ~"],
            interval: ms(120),
        },
        Preset {
            name: "fireworks",
            kind: Event,
            frames: &["  .  ", " .*. ", ".*★*.", " .*. ", "  '  "],
            interval: ms(100),
        },
        Preset {
            name: "doge-wow",
            kind: Event,
            frames: &["wow much wait", "such load very vibe", "plz hold pupper"],
            interval: ms(110),
        },
        Preset {
            name: "shrek-blink",
            kind: Event,
            frames: &["  ／|、", " (°､ ｡ 7", " | 、`\\", " じしf_, )ノ"],
            interval: ms(140),
        },
        Preset {
            name: "cat-bounce",
            kind: Event,
            frames: &["/ᐠ. ｡.ᐟ\\", "/ᐠ｡‸｡ᐟ\\", "/ᐠ – ᆽ – ᐟ\\"],
            interval: ms(90),
        },
        Preset {
            name: "wojak-stare",
            kind: Event,
            frames: &["(・_・;)", "(・_・`)"],
            interval: ms(120),
        },
    ]
}
