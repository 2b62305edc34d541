use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::RegistryError;
use crate::helpers::constant::*;
use crate::state::header::{AccountHeader, AccountKind, HEADER_LEN};

/// Most keys a list of `kind` may ever hold.
pub const fn max_keys(kind: AccountKind) -> usize {
    match kind {
        AccountKind::GpuNodeRegistry => GPU_NODE_REGISTRY_MAX_KEYS,
        AccountKind::AgentRegistry => AGENT_REGISTRY_MAX_KEYS,
        AccountKind::AiTaskRegistry => AI_TASK_REGISTRY_MAX_KEYS,
        AccountKind::GpuNodeList => GPU_NODE_LIST_MAX_KEYS,
        AccountKind::AgentList => AGENT_LIST_MAX_KEYS,
        _ => 0,
    }
}

/// Account size of a list holding up to `capacity` keys.
pub const fn list_account_size(capacity: usize) -> usize {
    HEADER_LEN + capacity * PUBKEY_LEN
}

/// Capacity of a full list of `kind` after one growth step.
pub fn grown_capacity(kind: AccountKind, capacity: usize) -> Result<usize, ProgramError> {
    let max = max_keys(kind);
    if capacity >= max {
        return Err(RegistryError::RegistryFull.into());
    }
    Ok((capacity + LIST_GROWTH_KEYS).min(max))
}

/// Append-only list of account keys stored after an [`AccountHeader`].
///
/// Backs the three global registries and the per-owner node/agent lists.
pub struct KeyList<'a> {
    data: &'a mut [u8],
}

impl<'a> KeyList<'a> {
    /// Writes an empty header into freshly allocated account data.
    pub fn init(data: &'a mut [u8], kind: AccountKind, bump: u8) -> Result<Self, ProgramError> {
        if data.len() < HEADER_LEN + PUBKEY_LEN {
            return Err(ProgramError::AccountDataTooSmall);
        }
        if AccountHeader::load(data)?.kind != AccountKind::Uninitialized as u8 {
            return Err(ProgramError::AccountAlreadyInitialized);
        }
        AccountHeader::new(kind, bump, 0).write(data)?;
        Ok(Self { data })
    }

    pub fn load(data: &'a mut [u8], kind: AccountKind) -> Result<Self, ProgramError> {
        let header = AccountHeader::load_checked(data, kind)?;
        let capacity = (data.len() - HEADER_LEN) / PUBKEY_LEN;
        if header.len() as usize > capacity {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(Self { data })
    }

    fn header(&self) -> &AccountHeader {
        // Safety: `init` and `load` checked the data holds a header, whose
        // alignment is 1.
        unsafe { &*(self.data.as_ptr() as *const AccountHeader) }
    }

    #[inline]
    pub fn bump(&self) -> u8 {
        self.header().bump
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.header().len() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        (self.data.len() - HEADER_LEN) / PUBKEY_LEN
    }

    fn entries(&self) -> core::slice::ChunksExact<'_, u8> {
        let end = HEADER_LEN + self.len() * PUBKEY_LEN;
        self.data[HEADER_LEN..end].chunks_exact(PUBKEY_LEN)
    }

    pub fn keys(&self) -> impl Iterator<Item = Pubkey> + '_ {
        self.entries().map(|chunk| {
            let mut key = [0u8; PUBKEY_LEN];
            key.copy_from_slice(chunk);
            key
        })
    }

    pub fn contains(&self, key: &Pubkey) -> bool {
        self.entries().any(|chunk| chunk == key.as_slice())
    }

    pub fn push(&mut self, key: &Pubkey) -> Result<(), ProgramError> {
        let len = self.len();
        if self.is_full() {
            return Err(RegistryError::RegistryFull.into());
        }
        let start = HEADER_LEN + len * PUBKEY_LEN;
        self.data[start..start + PUBKEY_LEN].copy_from_slice(key);
        AccountHeader::load_mut(self.data)?.set_len(len as u32 + 1);
        Ok(())
    }

    /// Pushes `key` unless already present. Returns whether it was added.
    pub fn push_unique(&mut self, key: &Pubkey) -> Result<bool, ProgramError> {
        if self.contains(key) {
            return Ok(false);
        }
        self.push(key)?;
        Ok(true)
    }
}
