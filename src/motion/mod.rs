mod frames;
mod ticker;

pub use frames::{Mascot, bounce_offset, frame_index};
pub use ticker::{Performance, Tick, Ticker};
