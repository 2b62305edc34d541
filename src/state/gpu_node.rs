use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::helpers::constant::*;
use crate::helpers::serialization::{max_str_size, Reader};
use crate::state::header::HEADER_LEN;

pub const CARD_MAX_SIZE: usize = max_str_size(CARD_NAME_MAX_LEN) + 4;

/// Largest encoded `GpuNode` payload the limits allow.
pub const GPU_NODE_MAX_PAYLOAD: usize = max_str_size(GPU_NODE_ID_MAX_LEN)
    + PUBKEY_LEN
    + 8
    + GPU_NODE_MAX_CARDS * CARD_MAX_SIZE
    + max_str_size(CUDA_VERSION_MAX_LEN)
    + 8
    + max_str_size(ENDPOINT_MAX_LEN);

pub const GPU_NODE_ACCOUNT_SIZE: usize = HEADER_LEN + GPU_NODE_MAX_PAYLOAD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    pub name: &'a str,
    /// MB
    pub memory: u32,
}

/// Validated, borrowed view of an encoded GPU node.
#[derive(Debug, Clone, Copy)]
pub struct GpuNodeView<'a> {
    pub id: &'a str,
    pub owner: &'a Pubkey,
    card_count: usize,
    cards: &'a [u8],
    pub cuda_version: &'a str,
    pub price: u64,
    /// ip or domain
    pub endpoint: &'a str,
}

impl<'a> GpuNodeView<'a> {
    /// Decodes `data`, enforcing field limits. The whole slice must be consumed.
    pub fn parse(data: &'a [u8]) -> Result<Self, ProgramError> {
        let mut reader = Reader::new(data);
        let id = reader.read_str(GPU_NODE_ID_MAX_LEN)?;
        let owner = reader.read_pubkey()?;

        let card_count = reader.read_len(GPU_NODE_MAX_CARDS)?;
        let cards_start = reader.position();
        for _ in 0..card_count {
            read_card(&mut reader)?;
        }
        let cards = &data[cards_start..reader.position()];

        let cuda_version = reader.read_str(CUDA_VERSION_MAX_LEN)?;
        let price = reader.read_u64()?;
        let endpoint = reader.read_str(ENDPOINT_MAX_LEN)?;
        reader.finish()?;

        Ok(Self {
            id,
            owner,
            card_count,
            cards,
            cuda_version,
            price,
            endpoint,
        })
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn cards(&self) -> impl Iterator<Item = CardView<'a>> {
        let mut reader = Reader::new(self.cards);
        (0..self.card_count).map_while(move |_| read_card(&mut reader).ok())
    }

    /// Total card memory in MB.
    pub fn total_memory(&self) -> u64 {
        self.cards().map(|card| card.memory as u64).sum()
    }
}

fn read_card<'a>(reader: &mut Reader<'a>) -> Result<CardView<'a>, ProgramError> {
    let name = reader.read_str(CARD_NAME_MAX_LEN)?;
    let memory = reader.read_u32()?;
    Ok(CardView { name, memory })
}
