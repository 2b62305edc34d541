use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod initialize;
pub use initialize::*;

pub mod registration;

pub mod register_gpu_node;
pub use register_gpu_node::*;

pub mod register_agent;
pub use register_agent::*;

pub mod submit_task;
pub use submit_task::*;

#[repr(u8)]
#[derive(ShankInstruction, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryInstruction {
    /// Creates the GPU node, agent and AI task registries.
    #[account(0, writable, name = "gpu_node_registry", desc = "PDA [\"gpu_node_registry\"]")]
    #[account(1, writable, name = "agent_registry", desc = "PDA [\"agent_registry\"]")]
    #[account(2, writable, name = "ai_task_registry", desc = "PDA [\"ai_task_registry\"]")]
    #[account(3, writable, signer, name = "user", desc = "Payer")]
    #[account(4, name = "system_program", desc = "System program")]
    Initialize,

    /// Registers or updates a GPU node.
    #[account(0, writable, name = "gpu_node_registry", desc = "Global GPU node registry")]
    #[account(1, writable, name = "gpu_nodes", desc = "PDA [\"gpu_nodes\", owner]")]
    #[account(2, writable, signer, name = "gpu_node", desc = "GPU node account")]
    #[account(3, writable, signer, name = "owner", desc = "Node owner and payer")]
    #[account(4, name = "system_program", desc = "System program")]
    RegisterGpuNode,

    /// Registers or updates an agent.
    #[account(0, writable, name = "agent_registry", desc = "Global agent registry")]
    #[account(1, writable, name = "agents", desc = "PDA [\"agents\", owner]")]
    #[account(2, writable, signer, name = "agent", desc = "Agent account")]
    #[account(3, writable, signer, name = "owner", desc = "Agent owner and payer")]
    #[account(4, name = "system_program", desc = "System program")]
    RegisterAgent,

    /// Records a task and pays the agent and GPU node owners.
    #[account(0, writable, name = "ai_task_registry", desc = "Global AI task registry")]
    #[account(1, writable, signer, name = "ai_task", desc = "New AI task account")]
    #[account(2, name = "gpu_node", desc = "GPU node serving the task")]
    #[account(3, name = "agent", desc = "Agent serving the task")]
    #[account(4, writable, name = "user_token", desc = "User token account")]
    #[account(5, writable, name = "agent_token", desc = "Agent owner token account")]
    #[account(6, writable, name = "gpu_node_token", desc = "GPU node owner token account")]
    #[account(7, writable, signer, name = "user", desc = "User, payer and transfer authority")]
    #[account(8, signer, name = "agent_owner", desc = "Agent owner")]
    #[account(9, signer, name = "gpu_node_owner", desc = "GPU node owner")]
    #[account(10, name = "system_program", desc = "System program")]
    #[account(11, name = "token_program", desc = "SPL token program")]
    SubmitTask,
}

impl TryFrom<&u8> for RegistryInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(RegistryInstruction::Initialize),
            1 => Ok(RegistryInstruction::RegisterGpuNode),
            2 => Ok(RegistryInstruction::RegisterAgent),
            3 => Ok(RegistryInstruction::SubmitTask),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
