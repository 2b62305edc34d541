//! Host-side payload types and instruction-data builders.
//!
//! The structs here serialize with `bincode` into exactly the bytes the
//! program decodes, so off-chain callers and tests never hand-roll layouts.

use serde::{Deserialize, Serialize};
use std::{string::String, vec, vec::Vec};

use crate::instruction::RegistryInstruction;

pub use crate::helpers::constant::{
    AGENTS_SEED, AGENT_REGISTRY_SEED, AI_TASK_REGISTRY_SEED, GPU_NODES_SEED, GPU_NODE_REGISTRY_SEED,
};

pub type WirePubkey = [u8; 32];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    /// MB
    pub memory: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuNode {
    pub id: String,
    pub owner: WirePubkey,
    pub cards: Vec<Card>,
    pub cuda_version: String,
    pub price: u64,
    /// ip or domain
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub owner: WirePubkey,
    pub title: String,
    pub desc: String,
    pub poster: String,
    pub category: String,
    pub docker_image_href: String,
    pub api_protocol: String,
    pub api_port: u16,
    pub api_doc: String,
    pub revenue_split: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTask {
    pub user: WirePubkey,
    pub agent_owner: WirePubkey,
    pub gpu_node_owner: WirePubkey,
    pub timestamp: u64,
    pub price: u64,
}

/// Bumps of the three registry PDAs, in the order `Initialize` takes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryBumps {
    pub gpu_node_registry: u8,
    pub agent_registry: u8,
    pub ai_task_registry: u8,
}

pub fn initialize_data(bumps: RegistryBumps) -> Vec<u8> {
    vec![
        RegistryInstruction::Initialize as u8,
        bumps.gpu_node_registry,
        bumps.agent_registry,
        bumps.ai_task_registry,
    ]
}

pub fn register_gpu_node_data(gpu_nodes_bump: u8, node: &GpuNode) -> bincode::Result<Vec<u8>> {
    tagged(RegistryInstruction::RegisterGpuNode, Some(gpu_nodes_bump), node)
}

pub fn register_agent_data(agents_bump: u8, agent: &Agent) -> bincode::Result<Vec<u8>> {
    tagged(RegistryInstruction::RegisterAgent, Some(agents_bump), agent)
}

pub fn submit_task_data(task: &AiTask) -> bincode::Result<Vec<u8>> {
    tagged(RegistryInstruction::SubmitTask, None, task)
}

fn tagged<T: Serialize>(
    instruction: RegistryInstruction,
    bump: Option<u8>,
    payload: &T,
) -> bincode::Result<Vec<u8>> {
    let mut data = vec![instruction as u8];
    data.extend(bump);
    bincode::serialize_into(&mut data, payload)?;
    Ok(data)
}
