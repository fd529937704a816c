use std::io;
use std::process::{ExitStatus, Stdio};

use futures::future::BoxFuture;
use nix::errno::Errno;
use nix::sys::signal::{Signal, killpg};
use nix::unistd::Pid;
use tokio::io::AsyncRead;
use tokio::process::Command;

/// Boxed output stream of a launched process
pub type OutputStream = Box<dyn AsyncRead + Send + Unpin>;

/// How a process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ExitInfo {
    pub fn code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub fn signal(signal: i32) -> Self {
        Self {
            code: None,
            signal: Some(signal),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ExitInfo {
    fn from(status: ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        Self {
            code: status.code(),
            signal: status.signal(),
        }
    }
}

/// Forcefully terminate a process together with all of its descendants.
///
/// Implementations must tolerate being called after the tree is gone.
pub trait TerminateTree: Send + Sync {
    fn terminate_tree(&self);
}

/// A freshly launched process, split into the parts the supervisor drives
pub struct Launched {
    pub pid: Option<u32>,
    pub stdout: Option<OutputStream>,
    pub stderr: Option<OutputStream>,
    /// Resolves once the process has exited and been reaped
    pub exit: BoxFuture<'static, io::Result<ExitInfo>>,
    pub terminator: Box<dyn TerminateTree>,
}

/// Capability to start an external program
pub trait ProcessLauncher: Send + Sync {
    /// Start `program` with `args`.
    ///
    /// An error means nothing was spawned.
    fn launch(&self, program: &str, args: &[String]) -> io::Result<Launched>;
}

/// Launches real OS processes, each leading its own process group
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, program: &str, args: &[String]) -> io::Result<Launched> {
        let mut child = Command::new(program)
            .args(args)
            .process_group(0)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let pid = child.id();
        let stdout = child.stdout.take().map(|s| Box::new(s) as OutputStream);
        let stderr = child.stderr.take().map(|s| Box::new(s) as OutputStream);
        let exit = Box::pin(async move { child.wait().await.map(ExitInfo::from) });

        Ok(Launched {
            pid,
            stdout,
            stderr,
            exit,
            terminator: Box::new(ProcessGroup { pgid: pid }),
        })
    }
}

/// Process group led by a spawned child; the group id equals the child's pid
#[derive(Debug, Clone, Copy)]
pub struct ProcessGroup {
    pgid: Option<u32>,
}

impl TerminateTree for ProcessGroup {
    fn terminate_tree(&self) {
        let Some(pgid) = self.pgid.and_then(|p| i32::try_from(p).ok()) else {
            return;
        };
        match killpg(Pid::from_raw(pgid), Signal::SIGKILL) {
            Ok(()) | Err(Errno::ESRCH) => {}
            Err(e) => tracing::debug!(pgid, error = %e, "killpg failed"),
        }
    }
}
