use pinocchio::program_error::ProgramError;

/// Offset of the first custom error code, matching the range Anchor programs use.
pub const ERROR_CODE_OFFSET: u32 = 6000;

// domain errors surfaced as ProgramError::Custom(6000 + n)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum RegistryError {
    InsufficientFunds,
    RegistryFull,
    OwnerMismatch,
    FieldTooLong,
    InvalidRevenueSplit,
    InvalidAccountKind,
    TokenOwnerMismatch,
}

// map internal errors to a program error the runtime can report
pub fn to_program_error(err: RegistryError) -> ProgramError {
    ProgramError::Custom(ERROR_CODE_OFFSET + err as u32)
}

impl From<RegistryError> for ProgramError {
    fn from(err: RegistryError) -> Self {
        to_program_error(err)
    }
}
