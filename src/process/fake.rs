use std::io::{self, Cursor};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use super::launcher::{ExitInfo, Launched, OutputStream, ProcessLauncher, TerminateTree};

/// Scripted process: fixed output, then either exits with `exit_code` or
/// runs until its tree is terminated (reported as SIGKILL).
#[derive(Clone, Default)]
pub(crate) struct FakeLauncher {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub exit_code: Option<i32>,
    pub fail_launch: bool,
    pub launches: Arc<AtomicUsize>,
    pub terminations: Arc<AtomicUsize>,
    pub last_args: Arc<Mutex<Vec<String>>>,
}

struct FakeTerminator {
    count: Arc<AtomicUsize>,
    exit_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl TerminateTree for FakeTerminator {
    fn terminate_tree(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
        if let Some(tx) = self.exit_tx.lock().unwrap().take() {
            let _ = tx.send(());
        }
    }
}

fn stream(lines: &[String]) -> OutputStream {
    let mut text = lines.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    Box::new(Cursor::new(text.into_bytes()))
}

impl ProcessLauncher for FakeLauncher {
    fn launch(&self, _program: &str, args: &[String]) -> io::Result<Launched> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        if self.fail_launch {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }
        *self.last_args.lock().unwrap() = args.to_vec();

        let (exit_tx, exit_rx) = oneshot::channel::<()>();
        let exit_code = self.exit_code;
        let exit = Box::pin(async move {
            match exit_code {
                Some(code) => Ok(ExitInfo::code(code)),
                None => {
                    let _ = exit_rx.await;
                    Ok(ExitInfo::signal(9))
                }
            }
        });

        Ok(Launched {
            pid: Some(4242),
            stdout: Some(stream(&self.stdout)),
            stderr: Some(stream(&self.stderr)),
            exit,
            terminator: Box::new(FakeTerminator {
                count: self.terminations.clone(),
                exit_tx: Mutex::new(Some(exit_tx)),
            }),
        })
    }
}
