use crate::state::header::HEADER_LEN;

pub const GPU_NODE_REGISTRY_SEED: &[u8] = b"gpu_node_registry";
pub const AGENT_REGISTRY_SEED: &[u8] = b"agent_registry";
pub const AI_TASK_REGISTRY_SEED: &[u8] = b"ai_task_registry";
pub const GPU_NODES_SEED: &[u8] = b"gpu_nodes";
pub const AGENTS_SEED: &[u8] = b"agents";

/// Largest account the system program will create for us through CPI.
pub const MAX_PERMITTED_DATA_INCREASE: usize = 10_240;

pub const PUBKEY_LEN: usize = 32;

/// Keys a registry or owner list holds when created. A full list grows by
/// the same amount, the most one instruction may add to an account.
pub const REGISTRY_CAPACITY: usize = (MAX_PERMITTED_DATA_INCREASE - HEADER_LEN) / PUBKEY_LEN;
pub const REGISTRY_ACCOUNT_SIZE: usize = HEADER_LEN + REGISTRY_CAPACITY * PUBKEY_LEN;
pub const LIST_GROWTH_KEYS: usize = REGISTRY_CAPACITY;

// Key list limits
pub const GPU_NODE_REGISTRY_MAX_KEYS: usize = 99_999;
pub const AGENT_REGISTRY_MAX_KEYS: usize = 9_999;
pub const AI_TASK_REGISTRY_MAX_KEYS: usize = 9_999;
pub const GPU_NODE_LIST_MAX_KEYS: usize = 9_999;
pub const AGENT_LIST_MAX_KEYS: usize = 999;

// GPU node field limits (bytes)
pub const GPU_NODE_ID_MAX_LEN: usize = 32;
pub const GPU_NODE_MAX_CARDS: usize = 128;
pub const CARD_NAME_MAX_LEN: usize = 64;
pub const CUDA_VERSION_MAX_LEN: usize = 16;
pub const ENDPOINT_MAX_LEN: usize = 256;

// Agent field limits (bytes)
pub const AGENT_TITLE_MAX_LEN: usize = 64;
pub const AGENT_DESC_MAX_LEN: usize = 2048;
pub const AGENT_LINK_MAX_LEN: usize = 2048;
pub const AGENT_CATEGORY_MAX_LEN: usize = 8;
pub const AGENT_PROTOCOL_MAX_LEN: usize = 8;
