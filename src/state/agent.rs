use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::RegistryError;
use crate::helpers::constant::*;
use crate::helpers::serialization::{max_str_size, Reader};
use crate::state::header::HEADER_LEN;

pub const AGENT_MAX_PAYLOAD: usize = PUBKEY_LEN
    + max_str_size(AGENT_TITLE_MAX_LEN)
    + max_str_size(AGENT_DESC_MAX_LEN)
    + max_str_size(AGENT_LINK_MAX_LEN)
    + max_str_size(AGENT_CATEGORY_MAX_LEN)
    + max_str_size(AGENT_LINK_MAX_LEN)
    + max_str_size(AGENT_PROTOCOL_MAX_LEN)
    + 2
    + max_str_size(AGENT_LINK_MAX_LEN)
    + 8;

pub const AGENT_ACCOUNT_SIZE: usize = HEADER_LEN + AGENT_MAX_PAYLOAD;

/// Validated, borrowed view of an encoded agent.
#[derive(Debug, Clone, Copy)]
pub struct AgentView<'a> {
    pub owner: &'a Pubkey,
    pub title: &'a str,
    pub desc: &'a str,
    /// image link
    pub poster: &'a str,
    /// LLM, Image, Audio, Video
    pub category: &'a str,
    pub docker_image_href: &'a str,
    /// https, wss
    pub api_protocol: &'a str,
    pub api_port: u16,
    pub api_doc: &'a str,
    /// Share of a task price paid to the agent owner, in `[0, 1]`.
    pub revenue_split: f64,
}

impl<'a> AgentView<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, ProgramError> {
        let mut reader = Reader::new(data);
        let view = Self {
            owner: reader.read_pubkey()?,
            title: reader.read_str(AGENT_TITLE_MAX_LEN)?,
            desc: reader.read_str(AGENT_DESC_MAX_LEN)?,
            poster: reader.read_str(AGENT_LINK_MAX_LEN)?,
            category: reader.read_str(AGENT_CATEGORY_MAX_LEN)?,
            docker_image_href: reader.read_str(AGENT_LINK_MAX_LEN)?,
            api_protocol: reader.read_str(AGENT_PROTOCOL_MAX_LEN)?,
            api_port: reader.read_u16()?,
            api_doc: reader.read_str(AGENT_LINK_MAX_LEN)?,
            revenue_split: reader.read_f64()?,
        };
        reader.finish()?;

        // NaN fails both comparisons
        if !(view.revenue_split >= 0.0 && view.revenue_split <= 1.0) {
            return Err(RegistryError::InvalidRevenueSplit.into());
        }
        Ok(view)
    }

    /// Splits `price` into `(agent_reward, gpu_node_reward)`.
    pub fn split_price(&self, price: u64) -> (u64, u64) {
        split_price(price, self.revenue_split)
    }
}

pub fn split_price(price: u64, revenue_split: f64) -> (u64, u64) {
    // float-to-int casts saturate, the min keeps rounding from exceeding price
    let agent_reward = ((price as f64) * revenue_split) as u64;
    let agent_reward = agent_reward.min(price);
    (agent_reward, price - agent_reward)
}
