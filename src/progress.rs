use std::io::{self, Write};

/// Round progress meter on stdout. Prints one bar per completed round
/// between brackets, then a closing line when the loop is done.
pub struct ProgressMeter;

impl ProgressMeter {
    pub fn start() -> Self {
        print!("[");
        let _ = io::stdout().flush();
        Self
    }

    pub fn tick(&mut self) {
        print!("=");
        let _ = io::stdout().flush();
    }

    pub fn finish(self) {
        println!("] Label Propagation Complete");
    }
}
