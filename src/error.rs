#[derive(Debug)]
pub enum FfdhError {
    InvalidPublicKey,
    GroupTooSmall { bits: u64, min_bits: u64 },
    InvalidParameters(String),
    InvalidHex(String),
}

impl std::error::Error for FfdhError {}

impl core::fmt::Display for FfdhError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FfdhError::InvalidPublicKey => write!(f, "derived public element is degenerate"),
            FfdhError::GroupTooSmall { bits, min_bits } => {
                write!(f, "group too small (bits={}, min_bits={})", bits, min_bits)
            }
            FfdhError::InvalidParameters(msg) => write!(f, "invalid group parameters: {}", msg),
            FfdhError::InvalidHex(msg) => write!(f, "invalid hex: {}", msg),
        }
    }
}
