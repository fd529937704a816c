use std::io;

use crossterm::tty::IsTty;

/// Answers whether the session is attached to an interactive terminal
pub trait TerminalProbe: Send + Sync {
    fn is_interactive(&self) -> bool;
}

/// Checks that both stdin and stdout are ttys
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioProbe;

impl TerminalProbe for StdioProbe {
    fn is_interactive(&self) -> bool {
        io::stdin().is_tty() && io::stdout().is_tty()
    }
}

/// Fixed answer, for sessions that already know
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl TerminalProbe for FixedProbe {
    fn is_interactive(&self) -> bool {
        self.0
    }
}
