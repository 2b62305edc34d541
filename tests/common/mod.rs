#![allow(dead_code)]

use solana_program_test::{BanksClientError, ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, ProgramTestContext};
pub use solana_sdk::{
    account::Account,
    instruction::{Instruction, InstructionError},
    message::Message,
    pubkey::Pubkey,
    rent::Rent,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

use gpu_agent_registry::client::{
    RegistryBumps, AGENTS_SEED, AGENT_REGISTRY_SEED, AI_TASK_REGISTRY_SEED, GPU_NODES_SEED,
    GPU_NODE_REGISTRY_SEED,
};

// Instruction builders for every program entry point
pub mod ixn;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(gpu_agent_registry::ID)
}

pub fn token_program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_token::ID)
}

/// Bank with the compiled program loaded from `target/deploy`.
pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("gpu_agent_registry.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("gpu_agent_registry", &program_id());
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

/// Signs `ixs` with the payer plus `signers` and processes them, returning the
/// transaction signature.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let msg = Message::new(ixs, Some(&ctx.payer.pubkey()));
    let mut tx = Transaction::new_unsigned(msg);
    let mut all: Vec<&Keypair> = Vec::with_capacity(signers.len() + 1);
    all.push(&ctx.payer);
    all.extend_from_slice(signers);
    tx.try_sign(&all, ctx.last_blockhash).unwrap();

    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount)],
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

/// Custom program error raised by the first instruction of a failed transaction.
pub fn custom_error(err: BanksClientError) -> Option<u32> {
    match err.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
        _ => None,
    }
}

// ---- PDAs ----

pub fn registry_pdas() -> ([Pubkey; 3], RegistryBumps) {
    let find = |seed: &[u8]| Pubkey::find_program_address(&[seed], &program_id());
    let (gpu_node_registry, gpu_bump) = find(GPU_NODE_REGISTRY_SEED);
    let (agent_registry, agent_bump) = find(AGENT_REGISTRY_SEED);
    let (ai_task_registry, task_bump) = find(AI_TASK_REGISTRY_SEED);
    (
        [gpu_node_registry, agent_registry, ai_task_registry],
        RegistryBumps {
            gpu_node_registry: gpu_bump,
            agent_registry: agent_bump,
            ai_task_registry: task_bump,
        },
    )
}

pub fn gpu_nodes_pda(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GPU_NODES_SEED, owner.as_ref()], &program_id())
}

pub fn agents_pda(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[AGENTS_SEED, owner.as_ref()], &program_id())
}

/// A valid PDA for `seeds` at the highest bump below the canonical one.
pub fn non_canonical_pda(seeds: &[&[u8]]) -> (Pubkey, u8) {
    let (_, canonical) = Pubkey::find_program_address(seeds, &program_id());
    (0..canonical)
        .rev()
        .find_map(|bump| {
            let bump_seed = [bump];
            let mut with_bump = seeds.to_vec();
            with_bump.push(&bump_seed);
            Pubkey::create_program_address(&with_bump, &program_id())
                .ok()
                .map(|key| (key, bump))
        })
        .expect("some lower bump is off the curve")
}

// ---- Accounts ----

pub async fn account_data(ctx: &mut ProgramTestContext, key: &Pubkey) -> Vec<u8> {
    ctx.banks_client
        .get_account(*key)
        .await
        .unwrap()
        .expect("account should exist")
        .data
}

/// Keys stored in a registry or owner list account.
pub async fn list_keys(
    ctx: &mut ProgramTestContext,
    key: &Pubkey,
    kind: gpu_agent_registry::state::AccountKind,
) -> Vec<Pubkey> {
    let mut data = account_data(ctx, key).await;
    gpu_agent_registry::state::KeyList::load(&mut data, kind)
        .unwrap()
        .keys()
        .map(Pubkey::new_from_array)
        .collect()
}

/// Empty system account holding a single lamport, as left by a stray transfer.
pub fn prefunded() -> Account {
    Account {
        lamports: 1,
        data: vec![],
        owner: solana_sdk::system_program::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Program-owned key list account of `kind` holding `keys`, sized to `capacity`.
pub fn key_list_account(
    kind: gpu_agent_registry::state::AccountKind,
    bump: u8,
    keys: &[Pubkey],
    capacity: usize,
) -> Account {
    let size = gpu_agent_registry::state::list_account_size(capacity);
    let mut data = vec![0u8; size];
    let mut list = gpu_agent_registry::state::KeyList::init(&mut data, kind, bump).unwrap();
    for key in keys {
        list.push(&key.to_bytes()).unwrap();
    }

    Account {
        lamports: Rent::default().minimum_balance(size),
        data,
        owner: program_id(),
        executable: false,
        rent_epoch: 0,
    }
}

pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// Packed, initialized SPL token account holding `amount` of `mint`.
pub fn token_account(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Account {
    let mut data = vec![0u8; TOKEN_ACCOUNT_LEN];
    data[0..32].copy_from_slice(mint.as_ref());
    data[32..64].copy_from_slice(owner.as_ref());
    data[64..72].copy_from_slice(&amount.to_le_bytes());
    // delegate: None (72..108), state: Initialized
    data[108] = 1;
    // is_native, delegated_amount and close_authority stay zeroed (None / 0)

    Account {
        lamports: Rent::default().minimum_balance(TOKEN_ACCOUNT_LEN),
        data,
        owner: token_program_id(),
        executable: false,
        rent_epoch: 0,
    }
}

pub async fn token_amount(ctx: &mut ProgramTestContext, key: &Pubkey) -> u64 {
    let data = account_data(ctx, key).await;
    u64::from_le_bytes(data[64..72].try_into().unwrap())
}

/// Creates the three registries, as every flow needs them.
pub async fn initialize(ctx: &mut ProgramTestContext) -> Signature {
    let ix = ixn::initialize(&ctx.payer.pubkey());
    send(ctx, &[ix], &[]).await.unwrap()
}
