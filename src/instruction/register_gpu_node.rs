use pinocchio::{account_info::AccountInfo, msg, program_error::ProgramError, ProgramResult};

use crate::error::RegistryError;
use crate::helpers::{GPU_NODES_SEED, GPU_NODE_REGISTRY_SEED};
use crate::instruction::registration::{DedupScope, Registration};
use crate::state::{AccountKind, GpuNodeView, GPU_NODE_ACCOUNT_SIZE};

/// Registers (or updates) a GPU node and links it from its owner's list and
/// the global GPU node registry.
///
/// Accounts (exactly 5):
/// 0. `[writable]`         GPU node registry PDA
/// 1. `[writable]`         Owner's node list PDA `["gpu_nodes", owner]`, created if missing
/// 2. `[writable, signer]` GPU node account (signer only when being created)
/// 3. `[writable, signer]` Owner, pays for new accounts
/// 4. `[]`                 System program
///
/// Data: owner list bump followed by the encoded node.
pub fn process_register_gpu_node(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    let [registry_ai, gpu_nodes_ai, gpu_node_ai, owner_ai, system_program_ai, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let (list_bump, node_data) = payload
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    let node = GpuNodeView::parse(node_data)?;

    // ownership transfer is not supported: the node names its registrant
    if node.owner != owner_ai.key() {
        return Err(RegistryError::OwnerMismatch.into());
    }

    let registration = Registration {
        registry: registry_ai,
        registry_kind: AccountKind::GpuNodeRegistry,
        registry_seed: GPU_NODE_REGISTRY_SEED,
        owner_list: gpu_nodes_ai,
        owner_list_kind: AccountKind::GpuNodeList,
        owner_list_seed: GPU_NODES_SEED,
        record: gpu_node_ai,
        record_kind: AccountKind::GpuNode,
        record_space: GPU_NODE_ACCOUNT_SIZE,
        owner: owner_ai,
        system_program: system_program_ai,
    };

    let added = registration.register(node_data, *list_bump, DedupScope::OwnerList, |data| {
        Ok(*GpuNodeView::parse(data)?.owner)
    })?;
    if !added {
        msg!("GPU node updated");
    }
    Ok(())
}
