use std::path::PathBuf;

use clap::Parser;

use crate::decor::{Catalog, DEFAULT_PRESET, DEFAULT_THEME, SnarkLevel};
use crate::motion::Performance;

/// Program launched when `--program` is not given
pub const DEFAULT_PROGRAM: &str = "vibepup";

/// Used when the new-project idea is left blank
pub const DEFAULT_IDEA: &str = "Something chaotic and beautiful";

/// Command-line flags
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "vibepup-tui",
    author,
    version,
    about = "A guided, slightly unhinged front-end for vibepup",
    long_about = None
)]
pub struct Flags {
    /// Reduce motion and chatter
    #[arg(long)]
    pub quiet: bool,

    /// Disable emoji rendering
    #[arg(long)]
    pub no_emoji: bool,

    /// Lower FPS for slower terminals
    #[arg(long)]
    pub perf_low: bool,

    /// Snark level: mild|spicy|unhinged
    #[arg(long, default_value = "mild")]
    pub snark: String,

    /// Theme name
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Animation preset
    #[arg(long, default_value = DEFAULT_PRESET)]
    pub anim: String,

    /// Render in the alternate screen
    #[arg(long)]
    pub alt_screen: bool,

    /// Run the child process even if stdin/stdout is not a TTY
    #[arg(long)]
    pub force_run: bool,

    /// Executable to launch
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub program: String,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Extra arguments appended to every launch
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Validated, immutable session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub performance: Performance,
    pub quiet: bool,
    pub emoji: bool,
    pub snark: SnarkLevel,
    pub theme: usize,
    pub preset: usize,
    pub force_run: bool,
    pub program: String,
    pub extra_args: Vec<String>,
}

impl Settings {
    pub fn from_flags(flags: &Flags, catalog: &Catalog) -> Self {
        Self {
            performance: Performance::from_low_flag(flags.perf_low),
            quiet: flags.quiet,
            emoji: !flags.no_emoji,
            snark: SnarkLevel::parse(&flags.snark),
            theme: catalog.theme_index(&flags.theme),
            preset: catalog.preset_index(&flags.anim),
            force_run: flags.force_run,
            program: if flags.program.is_empty() {
                DEFAULT_PROGRAM.to_string()
            } else {
                flags.program.clone()
            },
            extra_args: flags.args.clone(),
        }
    }
}

/// What the setup form offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Watch,
    Run,
    New,
    Free,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::Watch, Choice::Run, Choice::New, Choice::Free];

    pub fn name(self) -> &'static str {
        match self {
            Choice::Watch => "watch",
            Choice::Run => "run",
            Choice::New => "new",
            Choice::Free => "free",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::Watch => "Watch Mode (Stalker vibes)",
            Choice::Run => "Run 5 Loops (Quickie)",
            Choice::New => "New Project (YOLO)",
            Choice::Free => "Free Setup (Broke af)",
        }
    }

    /// Arguments for this selection, followed by `extra`.
    ///
    /// `idea` is only used by [`Choice::New`]; blank ideas become [`DEFAULT_IDEA`].
    pub fn launch_args(self, idea: Option<&str>, extra: &[String]) -> Vec<String> {
        let mut args: Vec<String> = match self {
            Choice::Watch => vec!["--watch".into()],
            Choice::Run => vec!["5".into()],
            Choice::Free => vec!["free".into()],
            Choice::New => {
                let idea = idea.map(str::trim).filter(|s| !s.is_empty());
                vec!["new".into(), idea.unwrap_or(DEFAULT_IDEA).to_string()]
            }
        };
        args.extend(extra.iter().cloned());
        args
    }
}
