use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::launcher::{ExitInfo, OutputStream, ProcessLauncher, TerminateTree};
use crate::buffer::{OutputKind, OutputLine};

/// Why a start request did not produce a running process
#[derive(Debug, Error)]
pub enum StartError {
    #[error("not a tty; use --force-run to override")]
    NotInteractive,
    #[error("a process is still running or draining")]
    AlreadyRunning,
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Unsuccessful end of a process that did start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExitError {
    #[error("exited with status {0}")]
    Status(i32),
    #[error("terminated by signal {0}")]
    Signal(i32),
    #[error("wait failed: {0}")]
    Wait(String),
}

impl ExitError {
    fn check(info: ExitInfo) -> Result<(), ExitError> {
        match (info.code, info.signal) {
            (Some(0), _) => Ok(()),
            (Some(code), _) => Err(ExitError::Status(code)),
            (None, Some(signal)) => Err(ExitError::Signal(signal)),
            (None, None) => Err(ExitError::Wait("unknown exit status".into())),
        }
    }
}

/// Lifecycle of the supervised child
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle {
    NotStarted,
    Running,
    Completed(ExitInfo),
    Failed(String),
    Killed,
}

/// What one drain step produced
#[derive(Debug)]
pub enum SupervisorEvent {
    Output(OutputLine),
    /// Delivered exactly once per started process
    Done(Result<(), ExitError>),
}

struct ActiveChild {
    pid: Option<u32>,
    terminator: Box<dyn TerminateTree>,
    sink: mpsc::UnboundedReceiver<OutputLine>,
    exit: oneshot::Receiver<io::Result<ExitInfo>>,
    readers: Vec<JoinHandle<()>>,
}

/// Owns the lifecycle of at most one running external process
pub struct Supervisor {
    launcher: Box<dyn ProcessLauncher>,
    active: Option<ActiveChild>,
    lifecycle: Lifecycle,
}

impl Supervisor {
    pub fn new(launcher: Box<dyn ProcessLauncher>) -> Self {
        Self {
            launcher,
            active: None,
            lifecycle: Lifecycle::NotStarted,
        }
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Process id of the current child, if one is still being drained
    pub fn pid(&self) -> Option<u32> {
        self.active.as_ref().and_then(|a| a.pid)
    }

    /// True once the last child has delivered its completion
    pub fn is_drained(&self) -> bool {
        self.active.is_none()
    }

    /// Start `program` in its own process group and begin streaming its output.
    ///
    /// Rejected until the previous child, killed or not, has delivered its
    /// completion through [`Supervisor::wait_for_next`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, program: &str, args: &[String]) -> Result<(), StartError> {
        if !self.is_drained() {
            return Err(StartError::AlreadyRunning);
        }

        let launched = match self.launcher.launch(program, args) {
            Ok(launched) => launched,
            Err(source) => {
                warn!(program, error = %source, "launch failed");
                self.lifecycle = Lifecycle::Failed(source.to_string());
                return Err(StartError::Launch {
                    program: program.to_string(),
                    source,
                });
            }
        };
        info!(program, args = %args.join(" "), pid = ?launched.pid, "process launched");

        let (tx, sink) = mpsc::unbounded_channel();
        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = launched.stdout {
            readers.push(spawn_reader(stdout, OutputKind::Stdout, tx.clone()));
        }
        if let Some(stderr) = launched.stderr {
            readers.push(spawn_reader(stderr, OutputKind::Stderr, tx.clone()));
        }
        // Sink closes once both readers are done
        drop(tx);

        let (exit_tx, exit) = oneshot::channel();
        let wait = launched.exit;
        tokio::spawn(async move {
            let _ = exit_tx.send(wait.await);
        });

        self.active = Some(ActiveChild {
            pid: launched.pid,
            terminator: launched.terminator,
            sink,
            exit,
            readers,
        });
        self.lifecycle = Lifecycle::Running;
        Ok(())
    }

    /// Next output line, then the completion exactly once, then `None` forever.
    ///
    /// Cancel-safe, so it can sit in a `tokio::select!` arm.
    pub async fn wait_for_next(&mut self) -> Option<SupervisorEvent> {
        let active = self.active.as_mut()?;
        if let Some(line) = active.sink.recv().await {
            return Some(SupervisorEvent::Output(line));
        }

        let outcome = match (&mut active.exit).await {
            Ok(Ok(info)) => {
                if self.lifecycle == Lifecycle::Running {
                    self.lifecycle = Lifecycle::Completed(info);
                }
                ExitError::check(info)
            }
            Ok(Err(e)) => {
                if self.lifecycle == Lifecycle::Running {
                    self.lifecycle = Lifecycle::Failed(e.to_string());
                }
                Err(ExitError::Wait(e.to_string()))
            }
            Err(_) => Err(ExitError::Wait("waiter dropped".into())),
        };
        self.active = None;
        info!(outcome = ?outcome, "process finished");
        Some(SupervisorEvent::Done(outcome))
    }

    /// Forcefully stop the child and its whole process group.
    ///
    /// Idempotent; a no-op unless a process is running. Pending drains still
    /// resolve: the readers are aborted so the sink closes, and the completion
    /// is reported as usual.
    pub fn kill(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(active) = self.active.as_mut() {
            info!(pid = ?active.pid, "killing process tree");
            active.terminator.terminate_tree();
            for reader in &active.readers {
                reader.abort();
            }
        }
        self.lifecycle = Lifecycle::Killed;
    }
}

impl Drop for Supervisor {
    fn drop(&mut self) {
        self.kill();
    }
}

fn spawn_reader(
    stream: OutputStream,
    kind: OutputKind,
    tx: mpsc::UnboundedSender<OutputLine>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        // I/O errors end the stream like EOF does
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(OutputLine::new(kind, line)).is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::fake::FakeLauncher;
    use crate::process::launcher::SystemLauncher;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    async fn drain(supervisor: &mut Supervisor) -> (Vec<OutputLine>, Vec<Result<(), ExitError>>) {
        let mut lines = Vec::new();
        let mut done = Vec::new();
        let drained = tokio::time::timeout(Duration::from_secs(5), async {
            while let Some(event) = supervisor.wait_for_next().await {
                match event {
                    SupervisorEvent::Output(line) => lines.push(line),
                    SupervisorEvent::Done(result) => done.push(result),
                }
            }
        })
        .await;
        assert!(drained.is_ok(), "drain did not terminate");
        (lines, done)
    }

    #[tokio::test]
    async fn supervisor_drains_lines_in_push_order_then_completes_once() {
        let launcher = FakeLauncher {
            stdout: (0..50).map(|i| format!("line{}", i)).collect(),
            exit_code: Some(0),
            ..Default::default()
        };
        let mut supervisor = Supervisor::new(Box::new(launcher));
        supervisor.start("vibepup", &[]).unwrap();

        let (lines, done) = drain(&mut supervisor).await;
        let plain: Vec<_> = lines.iter().map(|l| l.plain()).collect();
        let expected: Vec<_> = (0..50).map(|i| format!("line{}", i)).collect();
        assert_eq!(plain, expected);
        assert_eq!(done, vec![Ok(())]);
        assert_eq!(supervisor.lifecycle(), &Lifecycle::Completed(ExitInfo::code(0)));

        // Further calls are no-ops
        assert!(supervisor.wait_for_next().await.is_none());
        assert!(supervisor.wait_for_next().await.is_none());
    }

    #[tokio::test]
    async fn supervisor_tags_stderr_lines() {
        let launcher = FakeLauncher {
            stderr: vec!["boom".into()],
            exit_code: Some(3),
            ..Default::default()
        };
        let mut supervisor = Supervisor::new(Box::new(launcher));
        supervisor.start("vibepup", &[]).unwrap();

        let (lines, done) = drain(&mut supervisor).await;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, OutputKind::Stderr);
        assert_eq!(done, vec![Err(ExitError::Status(3))]);
    }

    #[tokio::test]
    async fn supervisor_launch_failure_spawns_nothing() {
        let launcher = FakeLauncher {
            fail_launch: true,
            ..Default::default()
        };
        let mut supervisor = Supervisor::new(Box::new(launcher));

        let err = supervisor.start("vibepup", &[]).unwrap_err();
        assert!(matches!(err, StartError::Launch { .. }));
        assert!(matches!(supervisor.lifecycle(), Lifecycle::Failed(_)));
        assert!(supervisor.wait_for_next().await.is_none());
    }

    #[tokio::test]
    async fn supervisor_rejects_second_start_while_running() {
        let launcher = FakeLauncher::default();
        let launches = launcher.launches.clone();
        let mut supervisor = Supervisor::new(Box::new(launcher));

        supervisor.start("vibepup", &[]).unwrap();
        let err = supervisor.start("vibepup", &[]).unwrap_err();

        assert!(matches!(err, StartError::AlreadyRunning));
        assert_eq!(launches.load(Ordering::SeqCst), 1);
        assert!(supervisor.is_running());
    }

    #[tokio::test]
    async fn supervisor_rejects_start_until_killed_child_is_drained() {
        let launcher = FakeLauncher {
            stdout: vec!["first-run".into()],
            ..FakeLauncher::default()
        };
        let launches = launcher.launches.clone();
        let mut supervisor = Supervisor::new(Box::new(launcher));

        supervisor.start("vibepup", &[]).unwrap();
        supervisor.kill();
        let err = supervisor.start("vibepup", &["--watch".into()]).unwrap_err();
        assert!(matches!(err, StartError::AlreadyRunning));
        assert_eq!(launches.load(Ordering::SeqCst), 1);
        assert!(!supervisor.is_drained());

        let (_, done) = drain(&mut supervisor).await;
        assert_eq!(done, vec![Err(ExitError::Signal(9))]);
        assert!(supervisor.is_drained());

        supervisor.start("vibepup", &["--watch".into()]).unwrap();
        assert_eq!(launches.load(Ordering::SeqCst), 2);
        assert!(supervisor.is_running());
    }

    #[tokio::test]
    async fn supervisor_delivers_one_completion_per_kill_cycle() {
        let mut supervisor = Supervisor::new(Box::new(FakeLauncher::default()));
        let mut completions = 0;

        for _ in 0..2 {
            supervisor.start("vibepup", &[]).unwrap();
            supervisor.kill();
            let (_, done) = drain(&mut supervisor).await;
            completions += done.len();
        }
        assert_eq!(completions, 2);
    }

    #[tokio::test]
    async fn supervisor_kill_is_idempotent_and_unblocks_drain() {
        let launcher = FakeLauncher::default();
        let terminations = launcher.terminations.clone();
        let mut supervisor = Supervisor::new(Box::new(launcher));
        supervisor.start("vibepup", &[]).unwrap();

        supervisor.kill();
        supervisor.kill();
        supervisor.kill();
        assert_eq!(terminations.load(Ordering::SeqCst), 1);
        assert_eq!(supervisor.lifecycle(), &Lifecycle::Killed);

        let (_, done) = drain(&mut supervisor).await;
        assert_eq!(done, vec![Err(ExitError::Signal(9))]);
        assert_eq!(supervisor.lifecycle(), &Lifecycle::Killed);

        supervisor.kill();
        assert_eq!(terminations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn supervisor_kill_after_natural_exit_is_noop() {
        let launcher = FakeLauncher {
            exit_code: Some(0),
            ..Default::default()
        };
        let terminations = launcher.terminations.clone();
        let mut supervisor = Supervisor::new(Box::new(launcher));
        supervisor.start("vibepup", &[]).unwrap();
        drain(&mut supervisor).await;

        supervisor.kill();
        assert_eq!(terminations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn supervisor_drop_kills_running_tree() {
        let launcher = FakeLauncher::default();
        let terminations = launcher.terminations.clone();
        let mut supervisor = Supervisor::new(Box::new(launcher));
        supervisor.start("vibepup", &[]).unwrap();

        drop(supervisor);
        assert_eq!(terminations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn supervisor_passes_args_through() {
        let launcher = FakeLauncher {
            exit_code: Some(0),
            ..Default::default()
        };
        let last_args = launcher.last_args.clone();
        let mut supervisor = Supervisor::new(Box::new(launcher));
        supervisor
            .start("vibepup", &["--watch".into(), "--verbose".into()])
            .unwrap();

        assert_eq!(*last_args.lock().unwrap(), vec!["--watch", "--verbose"]);
    }

    // Real processes

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".into(), script.into()]
    }

    #[tokio::test]
    async fn system_launcher_captures_stdout_and_stderr() {
        let mut supervisor = Supervisor::new(Box::new(SystemLauncher));
        supervisor
            .start("sh", &sh("echo hello; echo oops >&2"))
            .unwrap();
        assert!(supervisor.pid().is_some());

        let (lines, done) = drain(&mut supervisor).await;
        assert!(
            lines
                .iter()
                .any(|l| l.kind == OutputKind::Stdout && l.plain() == "hello")
        );
        assert!(
            lines
                .iter()
                .any(|l| l.kind == OutputKind::Stderr && l.plain() == "oops")
        );
        assert_eq!(done, vec![Ok(())]);
    }

    #[tokio::test]
    async fn system_launcher_preserves_single_stream_order() {
        let mut supervisor = Supervisor::new(Box::new(SystemLauncher));
        supervisor
            .start("sh", &sh("for i in 1 2 3 4 5; do echo line$i; done"))
            .unwrap();

        let (lines, _) = drain(&mut supervisor).await;
        let plain: Vec<_> = lines.iter().map(|l| l.plain()).collect();
        assert_eq!(plain, vec!["line1", "line2", "line3", "line4", "line5"]);
    }

    #[tokio::test]
    async fn system_launcher_reports_exit_status() {
        let mut supervisor = Supervisor::new(Box::new(SystemLauncher));
        supervisor.start("sh", &sh("exit 42")).unwrap();

        let (_, done) = drain(&mut supervisor).await;
        assert_eq!(done, vec![Err(ExitError::Status(42))]);
        assert_eq!(
            supervisor.lifecycle(),
            &Lifecycle::Completed(ExitInfo::code(42))
        );
    }

    #[tokio::test]
    async fn system_launcher_missing_program_is_launch_failure() {
        let mut supervisor = Supervisor::new(Box::new(SystemLauncher));
        let err = supervisor
            .start("/nonexistent/vibepup-binary", &[])
            .unwrap_err();

        assert!(matches!(err, StartError::Launch { .. }));
        assert!(supervisor.wait_for_next().await.is_none());
    }

    #[tokio::test]
    async fn system_launcher_kill_terminates_whole_group() {
        let mut supervisor = Supervisor::new(Box::new(SystemLauncher));
        // Background grandchild keeps the pipes open unless the group dies
        supervisor
            .start("sh", &sh("sleep 30 & echo started; sleep 30"))
            .unwrap();

        match supervisor.wait_for_next().await {
            Some(SupervisorEvent::Output(line)) => assert_eq!(line.plain(), "started"),
            other => panic!("unexpected event: {:?}", other),
        }

        supervisor.kill();
        let (_, done) = drain(&mut supervisor).await;
        assert_eq!(done, vec![Err(ExitError::Signal(9))]);
    }
}
