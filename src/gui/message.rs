#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Any key was pressed; show the next frame
    Advance,
}
