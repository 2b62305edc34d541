use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use gpu_agent_registry::client::{self, Agent, AiTask, GpuNode};

use super::{agents_pda, gpu_nodes_pda, program_id, registry_pdas, token_program_id};

fn system_program() -> AccountMeta {
    AccountMeta::new_readonly(solana_sdk::system_program::id(), false)
}

pub fn initialize(user: &Pubkey) -> Instruction {
    let ([gpu_node_registry, agent_registry, ai_task_registry], bumps) = registry_pdas();
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(gpu_node_registry, false),
            AccountMeta::new(agent_registry, false),
            AccountMeta::new(ai_task_registry, false),
            AccountMeta::new(*user, true),
            system_program(),
        ],
        data: client::initialize_data(bumps),
    }
}

/// `gpu_node_is_new` marks the node account as a signer so it can be created.
pub fn register_gpu_node(
    owner: &Pubkey,
    gpu_node: &Pubkey,
    gpu_node_is_new: bool,
    node: &GpuNode,
) -> Instruction {
    let ([gpu_node_registry, _, _], _) = registry_pdas();
    let (gpu_nodes, bump) = gpu_nodes_pda(owner);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(gpu_node_registry, false),
            AccountMeta::new(gpu_nodes, false),
            AccountMeta::new(*gpu_node, gpu_node_is_new),
            AccountMeta::new(*owner, true),
            system_program(),
        ],
        data: client::register_gpu_node_data(bump, node).unwrap(),
    }
}

pub fn register_agent(owner: &Pubkey, agent_key: &Pubkey, agent_is_new: bool, agent: &Agent) -> Instruction {
    let ([_, agent_registry, _], _) = registry_pdas();
    let (agents, bump) = agents_pda(owner);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(agent_registry, false),
            AccountMeta::new(agents, false),
            AccountMeta::new(*agent_key, agent_is_new),
            AccountMeta::new(*owner, true),
            system_program(),
        ],
        data: client::register_agent_data(bump, agent).unwrap(),
    }
}

pub struct SubmitTaskAccounts {
    pub ai_task: Pubkey,
    pub gpu_node: Pubkey,
    pub agent: Pubkey,
    pub user_token: Pubkey,
    pub agent_token: Pubkey,
    pub gpu_node_token: Pubkey,
    pub user: Pubkey,
    pub agent_owner: Pubkey,
    pub gpu_node_owner: Pubkey,
}

pub fn submit_task(accounts: &SubmitTaskAccounts, task: &AiTask) -> Instruction {
    let ([_, _, ai_task_registry], _) = registry_pdas();
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(ai_task_registry, false),
            AccountMeta::new(accounts.ai_task, true),
            AccountMeta::new_readonly(accounts.gpu_node, false),
            AccountMeta::new_readonly(accounts.agent, false),
            AccountMeta::new(accounts.user_token, false),
            AccountMeta::new(accounts.agent_token, false),
            AccountMeta::new(accounts.gpu_node_token, false),
            AccountMeta::new(accounts.user, true),
            AccountMeta::new_readonly(accounts.agent_owner, true),
            AccountMeta::new_readonly(accounts.gpu_node_owner, true),
            system_program(),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: client::submit_task_data(task).unwrap(),
    }
}
