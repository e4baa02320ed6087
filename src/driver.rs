//! Host-facing collaborator traits: the windowing/canvas surface that
//! presents the framebuffer and the key-event source that injects
//! button presses (§1, §6). The core depends on these, never the
//! reverse, the same way the retrieval pack's sibling emulator-core
//! crate models its host-facing `System` trait.

use crate::pad::Button;

/// A button press or release, tagged with the bit number from §6
/// (RIGHT=0, LEFT=1, UP=2, DOWN=3, A=4, B=5, SELECT=6, START=7).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub button: Button,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(button: Button) -> Self {
        Self {
            button,
            pressed: true,
        }
    }

    pub fn release(button: Button) -> Self {
        Self {
            button,
            pressed: false,
        }
    }
}

/// A host surface that receives one finished framebuffer per frame.
///
/// `buffer` is a flat, row-major RGB byte slice, 160*144*3 bytes,
/// matching [`crate::ppu::Ppu::frame_buffer`]'s shape.
pub trait FrameSink {
    fn present(&mut self, buffer: &[u8]);
}

/// A host key-event source, polled once per frame by the driver.
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Trivial in-memory [`FrameSink`] that only remembers the last frame
/// it was handed; used by tests, never shipped as a real host surface.
#[derive(Default)]
pub struct RecordingSink {
    pub frames: usize,
    pub last_frame: Vec<u8>,
}

impl FrameSink for RecordingSink {
    fn present(&mut self, buffer: &[u8]) {
        self.frames += 1;
        self.last_frame = buffer.to_vec();
    }
}

/// Trivial in-memory [`InputSource`] that replays a fixed, pre-seeded
/// queue of events; used by tests, never shipped as a real host source.
#[derive(Default)]
pub struct ScriptedSource {
    queue: Vec<InputEvent>,
}

impl ScriptedSource {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { queue: events }
    }
}

impl InputSource for ScriptedSource {
    fn poll(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.queue)
    }
}
