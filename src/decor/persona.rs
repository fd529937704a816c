/// How rude the copy is allowed to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnarkLevel {
    #[default]
    Mild,
    Spicy,
    Unhinged,
}

impl SnarkLevel {
    /// Unknown names fall back to `Mild`
    pub fn parse(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "spicy" => Self::Spicy,
            "unhinged" => Self::Unhinged,
            _ => Self::Mild,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Spicy => "spicy",
            Self::Unhinged => "unhinged",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Mild => Self::Spicy,
            Self::Spicy => Self::Unhinged,
            Self::Unhinged => Self::Mild,
        }
    }
}

/// Mood the quip should match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Waiting,
    Success,
    Error,
    Idle,
}

/// Quip for `mood` at `level`; `pick` selects among the candidates
pub fn quip(mood: Mood, level: SnarkLevel, pick: usize) -> &'static str {
    let lines = pack(level, mood);
    lines[pick % lines.len()]
}

fn pack(level: SnarkLevel, mood: Mood) -> &'static [&'static str] {
    use Mood::*;
    use SnarkLevel::*;

    match (level, mood) {
        (Mild, Waiting) => &["Loading... promise I'm not doomscrolling.", "Buffering vibes..."],
        (Mild, Success) => &["Done. Sparkles delivered.", "Shipped. No take-backs."],
        (Mild, Error) => &[
            "Oopsie. Let's pretend that didn't happen.",
            "Error? Never heard of her.",
        ],
        (Mild, Idle) => &["Idle mode. Hydrate, maybe?", "Waiting for chaos to resume..."],
        (Spicy, Waiting) => &[
            "Cooking the bits. Might burn them a little.",
            "Hold up, optimizing my snark cache...",
        ],
        (Spicy, Success) => &[
            "Boom. Pixel-perfect flex.",
            "Mission accomplished, no body count (this time).",
        ],
        (Spicy, Error) => &[
            "I swear that compiled in my head.",
            "Stacktrace says it's your fault. Kidding. Mostly.",
        ],
        (Spicy, Idle) => &[
            "Idle. Manifesting a raise.",
            "BRB, updating my LinkedIn to 'professional gremlin'.",
        ],
        (Unhinged, Waiting) => &[
            "Buffering the chaos. Please enjoy this existential dread.",
            "Spinning up demons... I mean daemons.",
        ],
        (Unhinged, Success) => &[
            "Shipped. If it breaks, that's a feature drop.",
            "Done. Tell compliance I was never here.",
        ],
        (Unhinged, Error) => &["Error 500: vibes deceased.", "It exploded. Deploy to prod?"],
        (Unhinged, Idle) => &[
            "Idle. Practicing my villain arc.",
            "Loading memes from forbidden archives...",
        ],
    }
}

pub const PUNS: &[&str] = &[
    "Fetching code... hope it's not a stick.",
    "Debugging: removing the needles from the haystack.",
    "I code, therefore I nap.",
    "Who's a good agent? I am! ...probably.",
    "Refactoring my life choices...",
    "Compiling... aka 'nap time'.",
    "Git commit -m 'fixed the thing (maybe)'.",
    "Ctrl+C is my safe word.",
    "Warning: may contain traces of nuts and bolts.",
    "Spending your API credits like treatos.",
    "Sniffing out bugs... found one! Eww.",
    "Barking at the compiler.",
    "Digging for memory leaks.",
    "Chasing tail - I mean, tail -f logs.",
];

pub const TIPS: &[&str] = &[
    "Tip: 'opencode models --refresh' is like a spa day for my brain.",
    "Tip: Edit prd.md mid-run to confuse me. I dare you.",
    "Tip: RALPH_MODEL_OVERRIDE lets you play god.",
    "Tip: Infinite loops are just zoomies for code.",
    "Tip: If I get stuck, it's a feature, not a bug.",
    "Tip: Press 'r' to run it back once I'm done.",
    "Tip: Don't feed the gremlins after midnight.",
    "Tip: Press 'q' to quit, but I'll miss you.",
];
