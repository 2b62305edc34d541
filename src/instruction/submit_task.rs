use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult};
use pinocchio_log::log;
use pinocchio_token::{instructions::Transfer, state::TokenAccount};

use crate::error::RegistryError;
use crate::helpers::*;
use crate::state::{
    read_record, write_record, AccountKind, AgentView, AiTask, GpuNodeView, AI_TASK_ACCOUNT_SIZE,
};

/// Records an AI task and pays the agent and GPU node owners out of the
/// user's token account.
///
/// The user, agent owner and GPU node owner approve the task by signing.
///
/// Accounts (exactly 12):
/// 0.  `[writable]`         AI task registry PDA
/// 1.  `[writable, signer]` New AI task account
/// 2.  `[]`                 GPU node account
/// 3.  `[]`                 Agent account
/// 4.  `[writable]`         User token account (source)
/// 5.  `[writable]`         Agent owner token account
/// 6.  `[writable]`         GPU node owner token account
/// 7.  `[writable, signer]` User, payer and transfer authority
/// 8.  `[signer]`           Agent owner
/// 9.  `[signer]`           GPU node owner
/// 10. `[]`                 System program
/// 11. `[]`                 Token program
///
/// Data: the encoded task.
pub fn process_submit_task(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    let [registry_ai, ai_task_ai, gpu_node_ai, agent_ai, user_token_ai, agent_token_ai, gpu_node_token_ai, user_ai, agent_owner_ai, gpu_node_owner_ai, system_program_ai, token_program_ai, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let task = *AiTask::load(payload)?;
    let price = task.price();

    require_signer(user_ai)?;
    require_signer(agent_owner_ai)?;
    require_signer(gpu_node_owner_ai)?;
    require_signer(ai_task_ai)?;
    require_writable(registry_ai)?;
    require_program_id(system_program_ai, &pinocchio_system::ID)?;
    require_program_id(token_program_ai, &pinocchio_token::ID)?;
    require_registry(registry_ai, AccountKind::AiTaskRegistry, AI_TASK_REGISTRY_SEED)?;

    require_key(user_ai, &task.user)?;
    require_key(agent_owner_ai, &task.agent_owner)?;
    require_key(gpu_node_owner_ai, &task.gpu_node_owner)?;

    require_program_owned(gpu_node_ai)?;
    {
        let data = gpu_node_ai.try_borrow_data()?;
        let node = GpuNodeView::parse(read_record(&data, AccountKind::GpuNode)?)?;
        if node.owner != &task.gpu_node_owner {
            return Err(RegistryError::OwnerMismatch.into());
        }
    }

    require_program_owned(agent_ai)?;
    let (agent_reward, gpu_node_reward) = {
        let data = agent_ai.try_borrow_data()?;
        let agent = AgentView::parse(read_record(&data, AccountKind::Agent)?)?;
        if agent.owner != &task.agent_owner {
            return Err(RegistryError::OwnerMismatch.into());
        }
        agent.split_price(price)
    };

    check_token_accounts(
        user_token_ai,
        agent_token_ai,
        gpu_node_token_ai,
        &task,
    )?;

    pay(user_token_ai, agent_token_ai, user_ai, agent_reward)?;
    pay(user_token_ai, gpu_node_token_ai, user_ai, gpu_node_reward)?;
    log!("agent reward {}, gpu node reward {}", agent_reward, gpu_node_reward);

    if !is_uninitialized(ai_task_ai) {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    create_program_account(user_ai, ai_task_ai, AI_TASK_ACCOUNT_SIZE, &[])?;
    {
        let mut data = ai_task_ai.try_borrow_mut_data()?;
        write_record(&mut data, AccountKind::AiTask, task.as_bytes())?;
    }

    push_key(user_ai, registry_ai, AccountKind::AiTaskRegistry, ai_task_ai.key())?;
    Ok(())
}

fn require_key(account: &AccountInfo, expected: &Pubkey) -> ProgramResult {
    if account.key() != expected {
        return Err(RegistryError::OwnerMismatch.into());
    }
    Ok(())
}

// The token account borrows end here, before any transfer CPI.
fn check_token_accounts(
    user_token_ai: &AccountInfo,
    agent_token_ai: &AccountInfo,
    gpu_node_token_ai: &AccountInfo,
    task: &AiTask,
) -> ProgramResult {
    let user_token = TokenAccount::from_account_info(user_token_ai)?;
    if user_token.owner() != &task.user {
        return Err(RegistryError::TokenOwnerMismatch.into());
    }
    if user_token.amount() < task.price() {
        return Err(RegistryError::InsufficientFunds.into());
    }

    if TokenAccount::from_account_info(agent_token_ai)?.owner() != &task.agent_owner {
        return Err(RegistryError::TokenOwnerMismatch.into());
    }
    if TokenAccount::from_account_info(gpu_node_token_ai)?.owner() != &task.gpu_node_owner {
        return Err(RegistryError::TokenOwnerMismatch.into());
    }
    Ok(())
}

fn pay(from: &AccountInfo, to: &AccountInfo, authority: &AccountInfo, amount: u64) -> ProgramResult {
    if amount == 0 {
        return Ok(());
    }
    Transfer {
        from,
        to,
        authority,
        amount,
    }
    .invoke()
}
