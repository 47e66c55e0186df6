/// Offset (px) below which the header always stays visible.
pub const HIDE_THRESHOLD: u32 = 200;

/// Tracks the last scroll offset and whether the fixed header is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    previous_offset: u32,
    is_visible: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            previous_offset: 0,
            is_visible: true,
        }
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_offset(&self) -> u32 {
        self.previous_offset
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Feed the current vertical offset and return the new visibility.
    ///
    /// The header hides only while scrolling down past [`HIDE_THRESHOLD`];
    /// any upward or stationary event shows it again.
    pub fn on_scroll(&mut self, current_offset: u32) -> bool {
        let scrolling_down = current_offset > self.previous_offset;
        self.is_visible = !(scrolling_down && current_offset > HIDE_THRESHOLD);
        self.previous_offset = current_offset;
        self.is_visible
    }
}

/// Browsers report fractional offsets and can go negative during overscroll.
pub fn offset_from_viewport(raw: f64) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= u32::MAX as f64 {
        u32::MAX
    } else {
        raw.round() as u32
    }
}
