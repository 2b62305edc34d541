pub mod agent;     // AgentView, price split
pub mod ai_task;   // AiTask
pub mod gpu_node;  // GpuNodeView, CardView
pub mod header;    // AccountHeader, AccountKind
pub mod record;    // record payload read/write
pub mod registry;  // KeyList

// Re-export the types so everyone can `use crate::state::{...}`.
pub use agent::{AgentView, AGENT_ACCOUNT_SIZE};
pub use ai_task::{AiTask, AI_TASK_ACCOUNT_SIZE};
pub use gpu_node::{CardView, GpuNodeView, GPU_NODE_ACCOUNT_SIZE};
pub use header::{AccountHeader, AccountKind, HEADER_LEN};
pub use record::{read_record, write_record};
pub use registry::{grown_capacity, list_account_size, max_keys, KeyList};
