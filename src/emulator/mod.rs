// Emulator module - top-level driver coordinating CPU, bus, and PPU
//
// This is the sequencer described in the concurrency model: CPU and PPU are
// logically concurrent but progress only through this single-threaded loop,
// which advances one CPU instruction, lets it trigger OAM DMA and page the
// cartridge as needed, then steps the PPU three dots for every CPU cycle the
// instruction (plus any DMA stall) consumed, before checking interrupt lines
// again. No component suspends or blocks on I/O; DMA steals cycles
// deterministically and does not pre-empt mid-instruction.

mod config;

pub use config::EmulatorConfig;

use crate::bus::Bus;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::{Cartridge, CartridgeError};
use crate::cpu::Cpu;
use crate::debug::CpuDebugger;
use crate::error::HaltDump;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Errors that can occur while loading a cartridge into the emulator.
#[derive(Debug)]
pub enum LoadError {
    /// The iNES image itself was malformed (bad magic, truncated banks, ...).
    Cartridge(CartridgeError),
    /// The cartridge named a mapper this core does not implement.
    UnsupportedMapper(u8),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Cartridge(e) => write!(f, "{}", e),
            LoadError::UnsupportedMapper(n) => write!(f, "unsupported mapper {}", n),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<CartridgeError> for LoadError {
    fn from(e: CartridgeError) -> Self {
        LoadError::Cartridge(e)
    }
}

/// Top-level driver tying the CPU, bus, and PPU together.
///
/// `Emulator` owns the CPU and bus (which in turn owns the PPU and the
/// attached cartridge mapper) and exposes the host-facing control surface:
/// `power_on`/`reset`/`load_rom`, a per-instruction `step` that advances
/// every component in lockstep, and `run_frame` for running until a frame
/// completes. Host-supplied interrupt lines (`irq_line`) are level-triggered
/// per the external-interface contract; NMI is driven internally by the PPU.
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    rom_path: Option<PathBuf>,
    /// Level-triggered IRQ line from an external source the host ties in
    /// (e.g. expansion hardware). The stubbed APU never asserts this itself.
    irq_line: bool,
    config: EmulatorConfig,
}

impl Emulator {
    /// Create a new emulator with no cartridge attached, CPU and PPU in
    /// their power-on state (see `Cpu::new`/`Bus::new`).
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            rom_path: None,
            irq_line: false,
            config: EmulatorConfig::load_or_default(),
        }
    }

    /// Load an iNES ROM, attach its mapper to the bus, and reset.
    ///
    /// Rejects malformed images and unsupported mapper numbers as a
    /// `FatalConfigurationError`: the emulator is left with no cartridge
    /// attached and the caller should not proceed.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        self.attach_cartridge(cartridge)?;
        self.rom_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Load an iNES image already resident in memory (e.g. embedded test ROMs).
    pub fn load_rom_bytes(&mut self, data: &[u8]) -> Result<(), LoadError> {
        let cartridge = Cartridge::from_ines_bytes(data)?;
        self.attach_cartridge(cartridge)?;
        self.rom_path = None;
        Ok(())
    }

    fn attach_cartridge(&mut self, cartridge: Cartridge) -> Result<(), LoadError> {
        let mapper = create_mapper(cartridge)
            .map_err(|_| LoadError::UnsupportedMapper(0))?;
        self.bus.attach_mapper(Rc::new(RefCell::new(mapper)));
        self.power_on();
        Ok(())
    }

    /// Drive the RESET line: reload CPU registers to their post-reset values
    /// (PC from the reset vector) and reset PPU timing, without clearing RAM.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.bus.reset();
        self.irq_line = false;
    }

    /// Drive the POWER_ON line. Equivalent to `reset` for this core, since
    /// RAM contents at power-on are implementation-defined (zero, per this
    /// core's lifecycle) and already established by `Bus::new`.
    pub fn power_on(&mut self) {
        self.reset();
    }

    /// Assert or release the host-tied external IRQ line. Level-triggered:
    /// while held high and the CPU's I flag is clear, an IRQ is delivered
    /// between every instruction.
    pub fn set_irq_line(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    /// Execute exactly one CPU instruction and advance the PPU in lockstep.
    ///
    /// Returns `Ok(true)` if this step crossed into a new frame (the PPU
    /// reached the end of the post-render scanline), `Ok(false)` otherwise.
    /// Returns `Err` with a full state dump if the CPU hit a fatal error
    /// (currently: an undefined opcode) — per the error-handling design, the
    /// caller should stop calling `step` after that.
    pub fn step(&mut self) -> Result<bool, HaltDump> {
        self.bus.set_cycle_count(self.cpu.cycles);

        let cpu_cycles = match self.cpu.step(&mut self.bus) {
            Ok(cycles) => cycles as u32,
            Err(e) => {
                let message = e.to_string();
                return Err(self.halt_dump(message));
            }
        };

        // OAM DMA (triggered by a $4014 write during the instruction just
        // executed) steals 513/514 CPU cycles; the PPU still steps through
        // them at the usual 3-dots-per-cycle rate.
        let dma_cycles = self.bus.take_dma_stall();
        let total_cycles = cpu_cycles + dma_cycles;

        let mut frame_completed = false;
        for _ in 0..(total_cycles * 3) {
            if self.bus.step_ppu_dot() {
                frame_completed = true;
            }
        }

        // Interrupt priority is RESET > NMI > IRQ; RESET is driven
        // externally via `reset`, so between instructions only NMI and IRQ
        // are polled here. NMI is edge-triggered: the PPU latches it once at
        // VBlank start and `nmi_pending` reads that latch.
        if self.bus.nmi_pending() {
            self.bus.clear_nmi();
            self.cpu.nmi(&mut self.bus);
        } else if self.irq_line && !self.cpu.get_interrupt_disable() {
            self.cpu.irq(&mut self.bus);
        }

        Ok(frame_completed)
    }

    /// Run CPU instructions until a full frame completes (or a fatal error
    /// halts the core). Convenience wrapper around `step`.
    pub fn run_frame(&mut self) -> Result<(), HaltDump> {
        loop {
            if self.step()? {
                return Ok(());
            }
        }
    }

    fn halt_dump(&mut self, error: String) -> HaltDump {
        let snapshot = self.bus.ppu_snapshot();
        let cpu = CpuDebugger::new().capture_state(&self.cpu, &mut self.bus);
        HaltDump {
            error,
            cpu,
            scanline: snapshot.scanline,
            dot: snapshot.cycle,
            frame: snapshot.frame,
            dma_active: false,
        }
    }

    /// Read-only access to the CPU, e.g. for host-side inspection or tests.
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable access to the CPU (e.g. to seed registers in unit tests).
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Read-only access to the bus (RAM, PPU, attached cartridge).
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutable access to the bus.
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// The 256x240 RGB framebuffer completed by the most recent frame.
    pub fn framebuffer(&self) -> std::cell::Ref<'_, [u8]> {
        std::cell::Ref::map(self.bus.ppu(), |ppu| ppu.frame())
    }

    /// The current debug/logging configuration.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Mutable access to the debug/logging configuration.
    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    /// The currently loaded ROM's path, if loaded from disk.
    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
