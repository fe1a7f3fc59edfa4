use crate::frames::Frame;

/// A named window and the frame it currently shows
#[derive(Debug, Clone)]
pub struct Panel {
    pub window: &'static str,
    pub frame: Frame,
}

/// Display state independent of any windowing backend.
///
/// Frames are pulled from the source one at a time. Each one replaces the
/// panel with the same window name (or opens a new panel), and pulling stops
/// at the first frame that waits for a key press.
pub struct Stage<I> {
    frames: I,
    panels: Vec<Panel>,
    current: Option<usize>,
    shown: usize,
    finished: bool,
}

impl<I: Iterator<Item = Frame>> Stage<I> {
    pub fn new(frames: I) -> Self {
        Self {
            frames,
            panels: Vec::new(),
            current: None,
            shown: 0,
            finished: false,
        }
    }

    /// Show frames up to and including the next one that waits for a key.
    ///
    /// Returns false once the sequence is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }

        while let Some(frame) = self.frames.next() {
            let waits = frame.waits_for_key();
            self.show(frame);
            if waits {
                return true;
            }
        }

        self.finished = true;
        false
    }

    fn show(&mut self, frame: Frame) {
        let window = frame.window();
        match self.panels.iter().position(|p| p.window == window) {
            Some(i) => {
                self.panels[i].frame = frame;
                self.current = Some(i);
            }
            None => {
                self.panels.push(Panel { window, frame });
                self.current = Some(self.panels.len() - 1);
            }
        }
        self.shown += 1;
    }

    /// Panels in the order their windows were first opened
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panel updated most recently
    pub fn current(&self) -> Option<&Panel> {
        self.current.map(|i| &self.panels[i])
    }

    /// Total number of frames shown so far
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Present frames on the terminal, waiting for Enter at each key wait.
///
/// Used when the crate is built without the `gui` feature. End of input on
/// stdin stops the presentation early.
pub fn run_console<I: Iterator<Item = Frame>>(frames: I) -> anyhow::Result<()> {
    use std::io::{BufRead, Write};

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    for frame in frames {
        let (w, h) = (frame.image.width(), frame.image.height());
        match frame.kind.angle() {
            Some(angle) => println!("{} [{}°]: {}x{}", frame.window(), angle, w, h),
            None => println!("{}: {}x{}", frame.window(), w, h),
        }

        if frame.waits_for_key() {
            print!("Press Enter to continue...");
            std::io::stdout().flush()?;
            if lines.next().transpose()?.is_none() {
                println!();
                break;
            }
        }
    }

    Ok(())
}
