use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::state::header::HEADER_LEN;

/// A task agreed between a user, an agent owner and a GPU node owner.
///
/// Stored after the account header exactly as it arrives in instruction data.
#[repr(C)]
#[derive(ShankAccount, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTask {
    pub user: Pubkey,
    pub agent_owner: Pubkey,
    pub gpu_node_owner: Pubkey,
    timestamp: [u8; 8],
    price: [u8; 8],
}

pub const AI_TASK_ACCOUNT_SIZE: usize = HEADER_LEN + AiTask::LEN;

impl AiTask {
    pub const LEN: usize = core::mem::size_of::<AiTask>();

    pub fn new(user: Pubkey, agent_owner: Pubkey, gpu_node_owner: Pubkey, timestamp: u64, price: u64) -> Self {
        Self {
            user,
            agent_owner,
            gpu_node_owner,
            timestamp: timestamp.to_le_bytes(),
            price: price.to_le_bytes(),
        }
    }

    #[inline]
    pub fn timestamp(&self) -> u64 {
        u64::from_le_bytes(self.timestamp)
    }

    #[inline]
    pub fn price(&self) -> u64 {
        u64::from_le_bytes(self.price)
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        // Safety: `repr(C)` with only byte-array fields, alignment 1, every bit
        // pattern valid.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn as_bytes(&self) -> &[u8] {
        // Safety: see `load`.
        unsafe { core::slice::from_raw_parts(self as *const Self as *const u8, Self::LEN) }
    }
}
