use pinocchio::{account_info::AccountInfo, msg, program_error::ProgramError, ProgramResult};

use crate::error::RegistryError;
use crate::helpers::{AGENTS_SEED, AGENT_REGISTRY_SEED};
use crate::instruction::registration::{DedupScope, Registration};
use crate::state::{AccountKind, AgentView, AGENT_ACCOUNT_SIZE};

/// Registers (or updates) an agent and links it from its owner's list and
/// the global agent registry.
///
/// Accounts (exactly 5):
/// 0. `[writable]`         Agent registry PDA
/// 1. `[writable]`         Owner's agent list PDA `["agents", owner]`, created if missing
/// 2. `[writable, signer]` Agent account (signer only when being created)
/// 3. `[writable, signer]` Owner, pays for new accounts
/// 4. `[]`                 System program
///
/// Data: owner list bump followed by the encoded agent.
pub fn process_register_agent(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    let [registry_ai, agents_ai, agent_ai, owner_ai, system_program_ai, _rest @ ..] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let (list_bump, agent_data) = payload
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    let agent = AgentView::parse(agent_data)?;

    if agent.owner != owner_ai.key() {
        return Err(RegistryError::OwnerMismatch.into());
    }

    let registration = Registration {
        registry: registry_ai,
        registry_kind: AccountKind::AgentRegistry,
        registry_seed: AGENT_REGISTRY_SEED,
        owner_list: agents_ai,
        owner_list_kind: AccountKind::AgentList,
        owner_list_seed: AGENTS_SEED,
        record: agent_ai,
        record_kind: AccountKind::Agent,
        record_space: AGENT_ACCOUNT_SIZE,
        owner: owner_ai,
        system_program: system_program_ai,
    };

    let added = registration.register(agent_data, *list_bump, DedupScope::Registry, |data| {
        Ok(*AgentView::parse(data)?.owner)
    })?;
    if !added {
        msg!("Agent updated");
    }
    Ok(())
}
