// Fantasy Contract - Error Codes
// This module defines all error codes for character and registry operations.
//
// Error Code Ranges:
// - 1-99: Race module registry errors
// - 100-199: Character / token errors
// - 200-299: Permission errors
// - 300-399: Randomness oracle errors
// - 400-499: Input and configuration errors
// - 900-999: System errors

use thiserror::Error;

/// Fantasy operation result type
pub type FantasyResult<T> = Result<T, FantasyError>;

/// Fantasy error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum FantasyError {
    // ========================================
    // Registry errors (1-99)
    // ========================================
    #[error("race already added")]
    DuplicateRace = 1,

    #[error("unknown race")]
    UnknownRace = 2,

    #[error("no race module deployed at this address")]
    ModuleNotDeployed = 3,

    // ========================================
    // Character errors (100-199)
    // ========================================
    #[error("token not found")]
    TokenNotFound = 100,

    #[error("character already finalized")]
    AlreadyFinalized = 101,

    #[error("insufficient payment, artist fee required")]
    InsufficientPayment = 102,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("unauthorized")]
    Unauthorized = 200,

    // ========================================
    // Oracle errors (300-399)
    // ========================================
    #[error("unknown request")]
    UnknownRequest = 300,

    #[error("request already registered")]
    DuplicateRequest = 301,

    #[error("not enough random words")]
    InsufficientRandomWords = 302,

    // ========================================
    // Input errors (400-499)
    // ========================================
    #[error("invalid race name")]
    InvalidRaceName = 400,

    #[error("invalid configuration")]
    InvalidConfig = 401,

    #[error("nothing to withdraw")]
    NothingToWithdraw = 402,

    #[error("invalid address")]
    InvalidAddress = 403,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("arithmetic overflow")]
    Overflow = 900,

    #[error("storage error")]
    StorageError = 901,

    #[error("internal error")]
    Internal = 999,
}

impl FantasyError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::DuplicateRace),
            2 => Some(Self::UnknownRace),
            3 => Some(Self::ModuleNotDeployed),
            100 => Some(Self::TokenNotFound),
            101 => Some(Self::AlreadyFinalized),
            102 => Some(Self::InsufficientPayment),
            200 => Some(Self::Unauthorized),
            300 => Some(Self::UnknownRequest),
            301 => Some(Self::DuplicateRequest),
            302 => Some(Self::InsufficientRandomWords),
            400 => Some(Self::InvalidRaceName),
            401 => Some(Self::InvalidConfig),
            402 => Some(Self::NothingToWithdraw),
            403 => Some(Self::InvalidAddress),
            900 => Some(Self::Overflow),
            901 => Some(Self::StorageError),
            999 => Some(Self::Internal),
            _ => None,
        }
    }
}
