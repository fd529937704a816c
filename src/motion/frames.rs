/// Index into an `len`-frame loop that advances once every `period` ticks.
///
/// Different effects share one frame counter and move at different speeds by
/// choosing different periods. A zero period or an empty loop yields 0.
pub fn frame_index(frame: u64, period: u64, len: usize) -> usize {
    if period == 0 || len == 0 {
        return 0;
    }
    ((frame / period) % len as u64) as usize
}

const BOUNCE_HEIGHT: u64 = 15;

/// Horizontal offset of the mascot: walks out and back, one column per tick
pub fn bounce_offset(frame: u64) -> u16 {
    let t = frame % (BOUNCE_HEIGHT * 2);
    let offset = if t <= BOUNCE_HEIGHT {
        t
    } else {
        BOUNCE_HEIGHT * 2 - t
    };
    offset as u16
}

const DOG: &[&str] = &[
    "૮ ˶ᵔ ᵕ ᵔ˶ ა",
    "૮ ˶• ﻌ •˶ ა",
    "૮ ≧ ﻌ ≦ ა",
    "૮ / ˶ • ﻌ • ˶ \\ ა",
    "૮ – ﻌ – ა",
    "૮ ﾟ ﻌ ﾟ ა",
];
const SPARKLES: &[&str] = &["｡･ﾟ✧", "✧･ﾟ｡", "｡･ﾟ★", "☆･ﾟ｡", "･ﾟ☆｡"];
const THINKING: &[&str] = &[
    "… thinking …",
    "… scheming …",
    "… cooking bits …",
    "… brewing chaos …",
];

const DOG_ASCII: &[&str] = &["(•ᴗ• )", "(•̀ᴗ• )✧", "(•ᴗ• )ノ", "(ᵕ•ᴗ•ᵕ)"];
const SPARKLES_ASCII: &[&str] = &["*", "✶", "✷", "✸", "✹"];
const THINKING_ASCII: &[&str] = &["thinking", "scheming", "brewing", "loading"];

const DOG_PERIOD: u64 = 4;
const SPARKLE_PERIOD: u64 = 2;
const THINKING_PERIOD: u64 = 3;

/// The dog and its props, picked from the shared frame counter
#[derive(Debug, Clone, Copy)]
pub struct Mascot {
    dog: &'static [&'static str],
    sparkles: &'static [&'static str],
    thinking: &'static [&'static str],
}

impl Mascot {
    pub fn new(emoji: bool) -> Self {
        if emoji {
            Self {
                dog: DOG,
                sparkles: SPARKLES,
                thinking: THINKING,
            }
        } else {
            Self {
                dog: DOG_ASCII,
                sparkles: SPARKLES_ASCII,
                thinking: THINKING_ASCII,
            }
        }
    }

    pub fn dog(&self, frame: u64) -> &'static str {
        self.dog[frame_index(frame, DOG_PERIOD, self.dog.len())]
    }

    pub fn sparkle(&self, frame: u64) -> &'static str {
        self.sparkles[frame_index(frame, SPARKLE_PERIOD, self.sparkles.len())]
    }

    pub fn thinking(&self, frame: u64) -> &'static str {
        self.thinking[frame_index(frame, THINKING_PERIOD, self.thinking.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 4, 6, 0)]
    #[case(3, 4, 6, 0)]
    #[case(4, 4, 6, 1)]
    #[case(23, 4, 6, 5)]
    #[case(24, 4, 6, 0)]
    #[case(7, 2, 5, 3)]
    #[case(10, 2, 5, 0)]
    #[case(1_000_003, 3, 4, 2)]
    fn frame_index_is_frame_over_period_mod_len(
        #[case] frame: u64,
        #[case] period: u64,
        #[case] len: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(frame_index(frame, period, len), expected);
    }

    #[test]
    fn frame_index_effects_share_one_counter() {
        let frame = 38;
        // Dog (P=4, F=6) and sparkle (P=2, F=5) move at different rates
        assert_eq!(frame_index(frame, 4, 6), (38 / 4) % 6);
        assert_eq!(frame_index(frame, 2, 5), (38 / 2) % 5);
        assert_ne!(frame_index(frame, 4, 6), frame_index(frame, 2, 5));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(5, 0)]
    fn frame_index_degenerate_inputs_yield_zero(#[case] period: u64, #[case] len: usize) {
        assert_eq!(frame_index(42, period, len), 0);
    }

    #[test]
    fn bounce_offset_goes_out_and_back() {
        assert_eq!(bounce_offset(0), 0);
        assert_eq!(bounce_offset(15), 15);
        assert_eq!(bounce_offset(20), 10);
        assert_eq!(bounce_offset(30), 0);
        assert!((0..300).all(|f| bounce_offset(f) <= 15));
    }

    #[test]
    fn mascot_uses_ascii_frames_without_emoji() {
        let mascot = Mascot::new(false);
        assert_eq!(mascot.dog(0), "(•ᴗ• )");
        assert_eq!(mascot.sparkle(2), "✶");
        assert_eq!(mascot.thinking(3), "scheming");
    }

    #[test]
    fn mascot_dog_advances_every_four_ticks() {
        let mascot = Mascot::new(true);
        assert_eq!(mascot.dog(3), mascot.dog(0));
        assert_ne!(mascot.dog(4), mascot.dog(0));
    }
}
