mod output;

pub use output::{LogBuffer, OutputKind, OutputLine};
