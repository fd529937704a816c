//! Supervision of the external program: launching it in its own process
//! group, relaying its output and killing the whole tree on request.

#[cfg(test)]
pub(crate) mod fake;
mod launcher;
mod probe;
mod supervisor;

pub use launcher::{
    ExitInfo, Launched, OutputStream, ProcessGroup, ProcessLauncher, SystemLauncher, TerminateTree,
};
pub use probe::{FixedProbe, StdioProbe, TerminalProbe};
pub use supervisor::{ExitError, Lifecycle, StartError, Supervisor, SupervisorEvent};
