use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::RegistryError;
use crate::helpers::constant::PUBKEY_LEN;

/// Zero-copy cursor over bincode-encoded bytes (default config: little-endian
/// fixed-width integers, `u64` length prefixes for strings and sequences).
///
/// Values borrow from the underlying slice so no allocation happens on-chain.
pub struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ProgramError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(ProgramError::InvalidInstructionData)?;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or(ProgramError::InvalidInstructionData)?;
        self.offset = end;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], ProgramError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8, ProgramError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, ProgramError> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, ProgramError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, ProgramError> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, ProgramError> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    pub fn read_pubkey(&mut self) -> Result<&'a Pubkey, ProgramError> {
        let bytes = self.take(PUBKEY_LEN)?;
        <&Pubkey>::try_from(bytes).map_err(|_| ProgramError::InvalidInstructionData)
    }

    /// Reads a length prefix and rejects anything above `max`.
    pub fn read_len(&mut self, max: usize) -> Result<usize, ProgramError> {
        let len = self.read_u64()?;
        if len > max as u64 {
            return Err(RegistryError::FieldTooLong.into());
        }
        Ok(len as usize)
    }

    /// Reads a length-prefixed UTF-8 string of at most `max_len` bytes.
    pub fn read_str(&mut self, max_len: usize) -> Result<&'a str, ProgramError> {
        let len = self.read_len(max_len)?;
        let bytes = self.take(len)?;
        core::str::from_utf8(bytes).map_err(|_| ProgramError::InvalidInstructionData)
    }

    /// Fails if any bytes are left unread.
    pub fn finish(self) -> Result<(), ProgramError> {
        if self.remaining() != 0 {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(())
    }
}

/// Encoded size of a string field holding at most `max_len` bytes.
pub const fn max_str_size(max_len: usize) -> usize {
    8 + max_len
}
