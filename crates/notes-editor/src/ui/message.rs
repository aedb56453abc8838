//! Application messages

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick from the subscription
    Tick,

    // Transport
    TogglePlayback,

    // Timeline controls
    ScaleChanged(f32),
    DivisionsChanged(f32),
    BpmTextChanged(String),

    // Timeline canvas (x in window coordinates)
    TimelinePressed(f32),
    CursorMoved(f32),
    TimelineReleased,

    /// Write the current BPM, divisions and scale as config defaults
    SaveDefaults,
}
