/// Left shift applied to the old slot 1 word.
pub const SHIFT_LEFT: u32 = 23;
/// Right shift applied to the shifted slot 1 word.
pub const SHIFT_RIGHT_Y: u32 = 18;
/// Right shift applied to the old slot 0 word.
pub const SHIFT_RIGHT_X: u32 = 5;

/// Number of advances the reference harness records.
pub const DEFAULT_COUNT: usize = 100;

/// Hex digits per vector line (`%016x`).
pub const WORD_HEX_WIDTH: usize = 16;

pub const DEFAULT_STATE0_FILE: &str = "state0.txt";
pub const DEFAULT_STATE1_FILE: &str = "state1.txt";

// FNV-1 64-bit parameters, used for stream fingerprints.
pub const FINGERPRINT_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
pub const FINGERPRINT_PRIME: u64 = 0x0000_0100_0000_01B3;
