use crossterm::event::KeyEvent;

use crate::buffer::OutputLine;
use crate::config::Choice;
use crate::motion::Tick;
use crate::process::{ExitError, SupervisorEvent};

/// A completed form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Setup form: which mode to run
    Setup(Choice),
    /// New-project form: the free-text idea, untrimmed
    Idea(String),
}

/// Everything the event loop reacts to
#[derive(Debug)]
pub enum AppEvent {
    Tick(Tick),
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    ProcessOutput(OutputLine),
    ProcessDone(Result<(), ExitError>),
    FormSubmitted(Submission),
}

impl From<SupervisorEvent> for AppEvent {
    fn from(event: SupervisorEvent) -> Self {
        match event {
            SupervisorEvent::Output(line) => AppEvent::ProcessOutput(line),
            SupervisorEvent::Done(result) => AppEvent::ProcessDone(result),
        }
    }
}
