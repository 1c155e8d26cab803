// NES Emulator - Headless runner
//
// Loads an iNES ROM and runs the CPU/PPU core frame by frame, reporting a
// full state dump if the core halts on a fatal error. This binary has no
// display, audio, or input backend of its own; it exists to exercise the
// core crate from the command line.

use nes_rs::Emulator;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "nes-rs".to_string());
    let Some(rom_path) = args.next() else {
        eprintln!("usage: {} <rom.nes> [frames]", program);
        return ExitCode::FAILURE;
    };
    let frame_count: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60);

    let mut emulator = Emulator::new();
    if let Err(e) = emulator.load_rom(&rom_path) {
        eprintln!("failed to load '{}': {}", rom_path, e);
        return ExitCode::FAILURE;
    }

    println!("NES Emulator (nes-rs) v0.1.0");
    println!("loaded '{}', running {} frame(s)", rom_path, frame_count);

    for frame in 0..frame_count {
        if let Err(dump) = emulator.run_frame() {
            eprintln!("frame {}: {}", frame, dump);
            return ExitCode::FAILURE;
        }
    }

    println!("completed {} frame(s) without error", frame_count);
    ExitCode::SUCCESS
}
