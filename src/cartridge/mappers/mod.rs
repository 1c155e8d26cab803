// Mappers module - cartridge mapper factory and implementations
//
// This module contains the mapper factory and individual mapper implementations.
// Dispatch is a plain match on the iNES mapper number (a tagged-variant
// dispatch per mapper, not a registry or dyn-trait lookup) since the set of
// supported mappers is small and fixed: only NROM (mapper 0), the simplest
// PRG/CHR-ROM mapping, is implemented. Production-grade coverage of the
// wider mapper zoo (MMC1, MMC3, UxROM, ...) is out of scope for this core;
// any other mapper number is a `FatalConfigurationError` at load time.

mod mapper0;

pub use mapper0::Mapper0;

use super::{Cartridge, Mapper};

/// Error type for mapper creation
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
    /// Invalid cartridge configuration for the mapper
    InvalidConfiguration(String),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "Mapper {} is not supported", num)
            }
            MapperError::InvalidConfiguration(msg) => {
                write!(f, "Invalid mapper configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Create a mapper instance for the cartridge's iNES mapper number.
///
/// Unknown mapper numbers are a `FatalConfigurationError`: the core never
/// starts, per the error-handling design.
///
/// # Errors
/// Returns `MapperError::UnsupportedMapper` if the mapper number is not implemented
///
/// # Example
/// ```no_run
/// use nes_rs::Cartridge;
/// use nes_rs::cartridge::mappers::create_mapper;
///
/// let cartridge = Cartridge::from_ines_file("game.nes").unwrap();
/// let mapper = create_mapper(cartridge).unwrap();
/// ```
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge))),
        mapper_num => Err(MapperError::UnsupportedMapper(mapper_num)),
    }
}
