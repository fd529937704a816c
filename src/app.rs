use std::borrow::Cow;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{info, warn};

use crate::buffer::OutputLine;
use crate::config::{Choice, Settings};
use crate::decor::persona::{self, PUNS, TIPS};
use crate::decor::{Catalog, Mood, Preset, SnarkLevel, Theme};
use crate::event::{AppEvent, Submission};
use crate::motion::{Mascot, Tick};
use crate::process::{
    ExitError, ProcessLauncher, StartError, StdioProbe, Supervisor, SystemLauncher, TerminalProbe,
};
use crate::tui::{IdeaForm, LogView, RUNNING_CHROME_HEIGHT, SetupForm, handle_key};

/// How long the splash stays up
pub const SPLASH_DURATION: Duration = Duration::from_secs(3);

/// Ticks between quip/tip rotations (about four seconds at 60 FPS)
const QUIP_ROTATION_TICKS: u64 = 80;

/// Coarse stage of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Setup,
    Running,
    /// Reached only by quitting
    Done,
}

/// Application state
pub struct App {
    phase: Phase,
    started: Instant,
    frame: u64,
    settings: Settings,
    catalog: Catalog,
    supervisor: Supervisor,
    probe: Box<dyn TerminalProbe>,
    setup_form: SetupForm,
    idea_form: Option<IdeaForm>,
    selection: Option<Choice>,
    last_args: Option<Vec<String>>,
    log: LogView,
    theme: usize,
    preset: usize,
    snark: SnarkLevel,
    show_help: bool,
    quip: Cow<'static, str>,
    tip: &'static str,
    should_quit: bool,
}

impl App {
    /// Application wired to real processes and the real terminal
    pub fn new(settings: Settings, catalog: Catalog) -> Self {
        Self::with_parts(
            settings,
            catalog,
            Box::new(SystemLauncher),
            Box::new(StdioProbe),
        )
    }

    pub fn with_parts(
        settings: Settings,
        catalog: Catalog,
        launcher: Box<dyn ProcessLauncher>,
        probe: Box<dyn TerminalProbe>,
    ) -> Self {
        Self {
            phase: Phase::Splash,
            started: Instant::now(),
            frame: 0,
            theme: settings.theme,
            preset: settings.preset,
            snark: settings.snark,
            settings,
            catalog,
            supervisor: Supervisor::new(launcher),
            probe,
            setup_form: SetupForm::new(),
            idea_form: None,
            selection: None,
            last_args: None,
            log: LogView::new(),
            show_help: false,
            quip: Cow::Borrowed(PUNS[0]),
            tip: TIPS[0],
            should_quit: false,
        }
    }

    /// Apply one event. The only place where the phase changes.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick(tick) => self.on_tick(tick),
            AppEvent::Key(key) => {
                if let Some(submission) = handle_key(self, key) {
                    self.handle_event(AppEvent::FormSubmitted(submission));
                }
            }
            AppEvent::Resize { height, .. } => {
                self.log
                    .set_visible_lines(height.saturating_sub(RUNNING_CHROME_HEIGHT) as usize);
            }
            AppEvent::ProcessOutput(line) => self.log.push(line),
            AppEvent::ProcessDone(result) => self.on_process_done(result),
            AppEvent::FormSubmitted(submission) => self.on_submit(submission),
        }
    }

    fn on_tick(&mut self, tick: Tick) {
        self.frame += 1;
        if self.frame % QUIP_ROTATION_TICKS == 0 {
            self.rotate_copy();
        }

        if self.phase == Phase::Splash
            && tick.at.saturating_duration_since(self.started) > SPLASH_DURATION
        {
            info!("splash done");
            self.phase = Phase::Setup;
        }
    }

    /// Puns and waiting quips take turns; the tip always advances
    fn rotate_copy(&mut self) {
        let rotation = (self.frame / QUIP_ROTATION_TICKS) as usize;
        self.quip = if rotation % 2 == 0 {
            Cow::Borrowed(PUNS[(rotation / 2) % PUNS.len()])
        } else {
            Cow::Borrowed(persona::quip(Mood::Waiting, self.snark, rotation / 2))
        };
        self.tip = TIPS[rotation % TIPS.len()];
    }

    fn on_submit(&mut self, submission: Submission) {
        match submission {
            Submission::Setup(choice) if self.phase == Phase::Setup => {
                info!(choice = choice.name(), "setup submitted");
                self.phase = Phase::Running;
                self.selection = Some(choice);
                if choice == Choice::New {
                    self.idea_form = Some(IdeaForm::new());
                } else {
                    let args = choice.launch_args(None, &self.settings.extra_args);
                    self.start_process(args);
                }
            }
            Submission::Idea(idea) if self.idea_form.is_some() => {
                self.idea_form = None;
                let args = Choice::New.launch_args(Some(&idea), &self.settings.extra_args);
                self.start_process(args);
            }
            stale => warn!(?stale, phase = ?self.phase, "ignoring form submission"),
        }
    }

    fn start_process(&mut self, args: Vec<String>) {
        self.last_args = Some(args.clone());

        if !self.settings.force_run && !self.probe.is_interactive() {
            self.report_start_error(StartError::NotInteractive);
            return;
        }

        match self.supervisor.start(&self.settings.program, &args) {
            Ok(()) => {
                let cmdline = format!("$ {} {}", self.settings.program, args.join(" "));
                self.log.push(OutputLine::notice(cmdline.trim_end().to_string()));
                self.quip = Cow::Borrowed("Vibepup unleashed!");
            }
            Err(e) => self.report_start_error(e),
        }
    }

    fn report_start_error(&mut self, err: StartError) {
        warn!(error = %err, "process not started");
        self.log.push(OutputLine::notice(format!("✗ {}", err)));
        self.quip = Cow::Owned(format!("Process bailed: {}", err));
    }

    fn on_process_done(&mut self, result: Result<(), ExitError>) {
        match result {
            Ok(()) => {
                self.log.push(OutputLine::notice(format!(
                    "✓ {} finished",
                    self.settings.program
                )));
                self.quip = Cow::Borrowed(persona::quip(
                    Mood::Success,
                    self.snark,
                    self.frame as usize,
                ));
            }
            Err(e) => {
                self.log.push(OutputLine::notice(format!(
                    "✗ {} {}",
                    self.settings.program, e
                )));
                self.quip = Cow::Owned(format!("Process bailed: {}", e));
            }
        }
    }

    /// Launch the last selection again once the previous run is over
    pub fn rerun(&mut self) {
        if self.phase != Phase::Running
            || self.idea_form.is_some()
            || !self.supervisor.is_drained()
        {
            return;
        }
        if let Some(args) = self.last_args.clone() {
            self.start_process(args);
        }
    }

    /// Kill the child tree, then end the session
    pub fn quit(&mut self) {
        self.supervisor.kill();
        self.phase = Phase::Done;
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn supervisor(&self) -> &Supervisor {
        &self.supervisor
    }

    pub fn supervisor_mut(&mut self) -> &mut Supervisor {
        &mut self.supervisor
    }

    pub fn setup_form(&self) -> &SetupForm {
        &self.setup_form
    }

    pub fn setup_form_mut(&mut self) -> &mut SetupForm {
        &mut self.setup_form
    }

    pub fn idea_form(&self) -> Option<&IdeaForm> {
        self.idea_form.as_ref()
    }

    pub fn idea_form_mut(&mut self) -> Option<&mut IdeaForm> {
        self.idea_form.as_mut()
    }

    pub fn selection(&self) -> Option<Choice> {
        self.selection
    }

    pub fn log(&self) -> &LogView {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut LogView {
        &mut self.log
    }

    pub fn theme(&self) -> &Theme {
        self.catalog.theme(self.theme)
    }

    pub fn next_theme(&mut self) {
        self.theme = self.catalog.next_theme(self.theme);
    }

    pub fn preset(&self) -> &Preset {
        self.catalog.preset(self.preset)
    }

    pub fn next_preset(&mut self) {
        self.preset = self.catalog.next_preset(self.preset);
    }

    pub fn snark(&self) -> SnarkLevel {
        self.snark
    }

    pub fn next_snark(&mut self) {
        self.snark = self.snark.next();
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn quip(&self) -> &str {
        &self.quip
    }

    pub fn tip(&self) -> &'static str {
        self.tip
    }

    /// Mascot frames for the current theme and emoji setting
    pub fn mascot(&self) -> Mascot {
        Mascot::new(self.settings.emoji && self.theme().supports_emoji)
    }
}
