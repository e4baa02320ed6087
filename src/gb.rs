//! Top level `GameBoy` driver: owns the CPU (and, through it, the
//! MMU), multiplexes CPU -> Timer -> PPU -> interrupt dispatch on
//! every step (§5 ordering contract) and runs the ~70,224 T-cycle
//! per-frame loop (§4.6).

use std::collections::VecDeque;

use crate::{
    cpu::Cpu,
    driver::{FrameSink, InputEvent, InputSource},
    error::Error,
    mmu::Mmu,
    pad::Button,
    rom::Cartridge,
};

/// T-cycles in one frame: 4,194,304 Hz / 59.7 Hz, rounded (§4.6, §6).
pub const CYCLES_PER_FRAME: u32 = 70_224;

pub struct GameBoy {
    cpu: Cpu,

    /// Host-injected key events waiting to be applied before the next
    /// step, draining the asynchronous host input source onto the
    /// single emulation thread (§5).
    input_queue: VecDeque<InputEvent>,
}

impl GameBoy {
    pub fn new(cartridge: Cartridge) -> Self {
        let mut mmu = Mmu::new(cartridge);
        mmu.reset();
        let mut cpu = Cpu::new(mmu);
        cpu.boot();
        Self {
            cpu,
            input_queue: VecDeque::new(),
        }
    }

    /// Parses `data` as a cartridge image and builds a ready-to-run
    /// `GameBoy` around it.
    pub fn load_cartridge(data: &[u8]) -> Result<Self, Error> {
        Cartridge::from_data(data).map(Self::new)
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cpu.mmu_i().reset();
        self.cpu.boot();
        self.input_queue.clear();
    }

    /// Runs one CPU step, then advances the Timer and PPU by the
    /// reported T-cycle count, then lets the CPU service any newly
    /// pending interrupt -- all already sequenced inside
    /// [`Cpu::clock`]/[`Mmu::clock`] in the required order.
    pub fn clock(&mut self) -> u8 {
        let cycles = self.cpu.clock();
        self.cpu.mmu_i().clock(cycles);
        cycles
    }

    /// Enqueues a key event to be applied before the next step.
    pub fn enqueue_key(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    pub fn key_press(&mut self, button: Button) {
        self.enqueue_key(InputEvent::press(button));
    }

    pub fn key_release(&mut self, button: Button) {
        self.enqueue_key(InputEvent::release(button));
    }

    /// Applies every queued key event to the pad.
    pub fn drain_input(&mut self) {
        while let Some(event) = self.input_queue.pop_front() {
            if event.pressed {
                self.cpu.mmu_i().key_press(event.button);
                self.cpu.clear_stop();
            } else {
                self.cpu.mmu_i().key_release(event.button);
            }
        }
    }

    /// Runs one frame: polls `input`, drains it onto the pad, steps
    /// the CPU until [`CYCLES_PER_FRAME`] T-cycles have elapsed (or
    /// the stop flag aborts the frame early), then hands the finished
    /// framebuffer to `sink`.
    pub fn run_frame(&mut self, sink: &mut dyn FrameSink, input: &mut dyn InputSource) {
        for event in input.poll() {
            self.enqueue_key(event);
        }
        self.drain_input();

        let mut elapsed = 0u32;
        while elapsed < CYCLES_PER_FRAME {
            if self.cpu.stopped() {
                break;
            }
            elapsed += self.clock() as u32;
        }

        sink.present(self.cpu.mmu().ppu().frame_buffer());
    }

    #[inline(always)]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    #[inline(always)]
    pub fn cpu_i(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    #[inline(always)]
    pub fn mmu(&self) -> &Mmu {
        self.cpu.mmu()
    }

    #[inline(always)]
    pub fn mmu_i(&mut self) -> &mut Mmu {
        self.cpu.mmu_i()
    }
}
