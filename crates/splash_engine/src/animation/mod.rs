//! Mesh-swap animation and scripted motion
//!
//! Animated props are drawn by swapping between pre-built meshes on a fixed
//! cadence. Each animated entity owns its own [`ClipClock`]; clocks are never
//! shared, so two players walking out of step stay out of step.

pub mod path;

pub use path::{PingPongCatmull, PingPongLerp, Spinner};

/// Pick the frame shown at `clock_seconds` for a clip of `frame_count` frames
///
/// `floor(clock / frame_duration) mod frame_count`. Degenerate clips (no
/// frames or a non-positive duration) always show frame 0.
pub fn select_frame(clock_seconds: f32, frame_duration: f32, frame_count: usize) -> usize {
    if frame_count == 0 || frame_duration <= 0.0 || clock_seconds <= 0.0 {
        return 0;
    }
    let bucket = (clock_seconds / frame_duration).floor() as usize;
    bucket % frame_count
}

/// How a clip behaves once its last frame has been shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Restart from the first frame forever
    Loop,
    /// Play through once, then deactivate the clock
    Once,
}

/// Ordered frames shown for a fixed duration each
#[derive(Debug, Clone)]
pub struct AnimationClip<F> {
    frames: Vec<F>,
    frame_duration: f32,
    mode: PlaybackMode,
}

impl<F> AnimationClip<F> {
    /// Create a clip
    pub fn new(frames: Vec<F>, frame_duration: f32, mode: PlaybackMode) -> Self {
        Self {
            frames,
            frame_duration,
            mode,
        }
    }

    /// Create a looping clip
    pub fn looping(frames: Vec<F>, frame_duration: f32) -> Self {
        Self::new(frames, frame_duration, PlaybackMode::Loop)
    }

    /// Create a play-once clip
    pub fn once(frames: Vec<F>, frame_duration: f32) -> Self {
        Self::new(frames, frame_duration, PlaybackMode::Once)
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Seconds each frame stays on screen
    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    /// Total length of one pass through the clip
    pub fn duration(&self) -> f32 {
        self.frame_duration * self.frames.len() as f32
    }

    /// Playback mode
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Index of the frame shown at the clock's current time
    pub fn frame_index(&self, clock: &ClipClock) -> usize {
        select_frame(clock.time(), self.frame_duration, self.frames.len())
    }

    /// Frame shown at the clock's current time
    pub fn frame(&self, clock: &ClipClock) -> Option<&F> {
        self.frames.get(self.frame_index(clock))
    }
}

/// Clip-local clock
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipClock {
    time: f32,
    active: bool,
}

impl ClipClock {
    /// A clock that is already running
    pub fn running() -> Self {
        Self { time: 0.0, active: true }
    }

    /// A clock that waits for [`start`](Self::start)
    pub fn stopped() -> Self {
        Self::default()
    }

    /// Restart from zero and run
    pub fn start(&mut self) {
        self.time = 0.0;
        self.active = true;
    }

    /// Stop and rewind
    pub fn stop(&mut self) {
        self.time = 0.0;
        self.active = false;
    }

    /// Whether the clock is accumulating time
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds since the clip (re)started
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Accumulate `dt`, wrapping or finishing at the end of `clip`
    pub fn advance<F>(&mut self, dt: f32, clip: &AnimationClip<F>) {
        if !self.active {
            return;
        }

        self.time += dt;
        if self.time >= clip.duration() {
            match clip.mode() {
                PlaybackMode::Loop => self.time = 0.0,
                PlaybackMode::Once => self.stop(),
            }
        }
    }
}
