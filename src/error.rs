// Error handling - emulation-halt surface
//
// Per the core's error-handling design there are two fatal error kinds and no
// recoverable ones: every observable hardware quirk (stack wrap, the JMP
// indirect page bug, palette aliasing, ...) is defined behavior, not an
// error. `FatalConfigurationError` (see `CartridgeError` in `cartridge`) is
// surfaced at load time and the core never starts; `FatalRuntimeError`
// (`EmulationError` below) aborts a running core with a dump of CPU/PPU
// state rather than attempting to retry or degrade.

use crate::debug::CpuState;

/// A fatal runtime error raised while the core is executing.
///
/// The core does not attempt recovery: the driver that produced this should
/// stop calling `step`/`step_instruction` and report the dump to the host.
#[derive(Debug, Clone)]
pub enum EmulationError {
    /// The CPU fetched an opcode with no documented 6502 semantics. Real
    /// hardware executes undocumented opcodes with ad-hoc behavior; this
    /// core treats any of them as a halt rather than guessing.
    UndefinedOpcode { opcode: u8, pc: u16 },

    /// The cartridge's mapper number has no implementation. Raised lazily at
    /// the first CPU/PPU access rather than at load time if a caller bypasses
    /// `mappers::create_mapper`'s own (load-time) rejection.
    UnsupportedMapper(u8),
}

impl std::fmt::Display for EmulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmulationError::UndefinedOpcode { opcode, pc } => write!(
                f,
                "undefined opcode ${:02X} fetched at ${:04X}",
                opcode, pc
            ),
            EmulationError::UnsupportedMapper(n) => write!(f, "unsupported mapper {}", n),
        }
    }
}

impl std::error::Error for EmulationError {}

/// A dump of CPU/PPU/DMA state taken at the moment an `EmulationError` was
/// raised: registers, opcode/operand context, and PPU timing, for a host to
/// report alongside the halt.
#[derive(Debug, Clone)]
pub struct HaltDump {
    pub error: String,
    pub cpu: CpuState,
    pub scanline: u16,
    pub dot: u16,
    pub frame: u64,
    pub dma_active: bool,
}

impl std::fmt::Display for HaltDump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "emulation halted: {}", self.error)?;
        writeln!(
            f,
            "  cpu: PC={:04X} A={:02X} X={:02X} Y={:02X} SP={:02X} P={:02X} CYC={}",
            self.cpu.pc,
            self.cpu.a,
            self.cpu.x,
            self.cpu.y,
            self.cpu.sp,
            self.cpu.status,
            self.cpu.cycles
        )?;
        writeln!(
            f,
            "  ppu: scanline={} dot={} frame={}",
            self.scanline, self.dot, self.frame
        )?;
        write!(f, "  dma_active={}", self.dma_active)
    }
}
