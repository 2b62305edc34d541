use pinocchio::program_error::ProgramError;

use crate::state::header::{AccountHeader, AccountKind, HEADER_LEN};

/// Writes `payload` after a header of `kind` and zeroes any stale tail bytes.
pub fn write_record(data: &mut [u8], kind: AccountKind, payload: &[u8]) -> Result<(), ProgramError> {
    let end = HEADER_LEN + payload.len();
    if data.len() < end {
        return Err(ProgramError::AccountDataTooSmall);
    }
    AccountHeader::new(kind, 0, payload.len() as u32).write(data)?;
    data[HEADER_LEN..end].copy_from_slice(payload);
    data[end..].fill(0);
    Ok(())
}

/// Returns the stored payload of a record of `kind`.
pub fn read_record(data: &[u8], kind: AccountKind) -> Result<&[u8], ProgramError> {
    let len = AccountHeader::load_checked(data, kind)?.len() as usize;
    data.get(HEADER_LEN..HEADER_LEN + len)
        .ok_or(ProgramError::InvalidAccountData)
}
