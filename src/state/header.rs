use pinocchio::program_error::ProgramError;

use crate::error::RegistryError;

pub const HEADER_LEN: usize = core::mem::size_of::<AccountHeader>();

/// Discriminates every account this program owns.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    Uninitialized,
    GpuNodeRegistry,
    AgentRegistry,
    AiTaskRegistry,
    GpuNodeList,
    AgentList,
    GpuNode,
    Agent,
    AiTask,
}

impl TryFrom<u8> for AccountKind {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountKind::Uninitialized),
            1 => Ok(AccountKind::GpuNodeRegistry),
            2 => Ok(AccountKind::AgentRegistry),
            3 => Ok(AccountKind::AiTaskRegistry),
            4 => Ok(AccountKind::GpuNodeList),
            5 => Ok(AccountKind::AgentList),
            6 => Ok(AccountKind::GpuNode),
            7 => Ok(AccountKind::Agent),
            8 => Ok(AccountKind::AiTask),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}

/// Fixed 8-byte prefix of every program account.
///
/// `len` counts entries for list accounts and payload bytes for records.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountHeader {
    pub kind: u8,
    pub bump: u8,
    _reserved: [u8; 2],
    len: [u8; 4],
}

impl AccountHeader {
    pub fn new(kind: AccountKind, bump: u8, len: u32) -> Self {
        Self {
            kind: kind as u8,
            bump,
            _reserved: [0; 2],
            len: len.to_le_bytes(),
        }
    }

    #[inline]
    pub fn kind(&self) -> Result<AccountKind, ProgramError> {
        AccountKind::try_from(self.kind)
    }

    #[inline]
    pub fn len(&self) -> u32 {
        u32::from_le_bytes(self.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn set_len(&mut self, len: u32) {
        self.len = len.to_le_bytes();
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < HEADER_LEN {
            return Err(ProgramError::AccountDataTooSmall);
        }
        // Safety: the header is `repr(C)` with only byte fields, so alignment is 1
        // and any bit pattern is valid.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < HEADER_LEN {
            return Err(ProgramError::AccountDataTooSmall);
        }
        // Safety: see `load`.
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    /// Loads the header and checks it carries `expected`.
    pub fn load_checked(data: &[u8], expected: AccountKind) -> Result<&Self, ProgramError> {
        let header = Self::load(data)?;
        if header.kind()? != expected {
            return Err(RegistryError::InvalidAccountKind.into());
        }
        Ok(header)
    }

    pub fn write(&self, data: &mut [u8]) -> Result<(), ProgramError> {
        *Self::load_mut(data)? = *self;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_eight_bytes() {
        assert_eq!(HEADER_LEN, 8);
    }

    #[test]
    fn write_then_load_checked() {
        let mut data = [0u8; 16];
        AccountHeader::new(AccountKind::AgentList, 254, 3)
            .write(&mut data)
            .unwrap();

        assert_eq!(&data[..8], &[5, 254, 0, 0, 3, 0, 0, 0]);
        let header = AccountHeader::load_checked(&data, AccountKind::AgentList).unwrap();
        assert_eq!(header.bump, 254);
        assert_eq!(header.len(), 3);

        assert_eq!(
            AccountHeader::load_checked(&data, AccountKind::GpuNodeList).unwrap_err(),
            RegistryError::InvalidAccountKind.into()
        );
    }

    #[test]
    fn unknown_kind_and_short_data_fail() {
        let data = [42u8, 0, 0, 0, 0, 0, 0, 0];
        assert!(AccountHeader::load(&data).unwrap().kind().is_err());
        assert_eq!(
            AccountHeader::load(&data[..4]).unwrap_err(),
            ProgramError::AccountDataTooSmall
        );
    }
}
