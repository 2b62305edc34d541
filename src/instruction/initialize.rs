use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};

use crate::helpers::*;
use crate::state::{AccountKind, KeyList};

/// Creates the three global registries.
///
/// Accounts (exactly 5):
/// 0. `[writable]`         GPU node registry PDA `["gpu_node_registry"]`
/// 1. `[writable]`         Agent registry PDA `["agent_registry"]`
/// 2. `[writable]`         AI task registry PDA `["ai_task_registry"]`
/// 3. `[writable, signer]` Payer
/// 4. `[]`                 System program
///
/// Data: the three canonical registry bumps, in account order.
pub fn process_initialize(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    let [gpu_node_registry_ai, agent_registry_ai, ai_task_registry_ai, user_ai, system_program_ai, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let [gpu_node_bump, agent_bump, ai_task_bump] = payload else {
        return Err(ProgramError::InvalidInstructionData);
    };

    require_signer(user_ai)?;
    require_program_id(system_program_ai, &pinocchio_system::ID)?;

    // Each registry may only live at its canonical address, so once created a
    // second initialize fails on the existing accounts.
    init_registry(
        user_ai,
        gpu_node_registry_ai,
        GPU_NODE_REGISTRY_SEED,
        *gpu_node_bump,
        AccountKind::GpuNodeRegistry,
    )?;
    init_registry(
        user_ai,
        agent_registry_ai,
        AGENT_REGISTRY_SEED,
        *agent_bump,
        AccountKind::AgentRegistry,
    )?;
    init_registry(
        user_ai,
        ai_task_registry_ai,
        AI_TASK_REGISTRY_SEED,
        *ai_task_bump,
        AccountKind::AiTaskRegistry,
    )?;

    Ok(())
}

fn init_registry(
    payer: &AccountInfo,
    registry_ai: &AccountInfo,
    seed: &[u8],
    bump: u8,
    kind: AccountKind,
) -> ProgramResult {
    require_canonical_pda(registry_ai, &[seed], bump)?;
    if !is_uninitialized(registry_ai) {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    create_singleton_pda(payer, registry_ai, REGISTRY_ACCOUNT_SIZE, seed, bump)?;

    let mut data = registry_ai.try_borrow_mut_data()?;
    KeyList::init(&mut data, kind, bump)?;
    Ok(())
}
