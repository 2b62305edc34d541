use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::{create_program_address, try_find_program_address, Pubkey},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::state::{grown_capacity, list_account_size, AccountKind, KeyList};

#[inline]
pub fn require_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline]
pub fn require_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(ProgramError::Immutable);
    }
    Ok(())
}

#[inline]
pub fn require_program_owned(account: &AccountInfo) -> ProgramResult {
    if !account.is_owned_by(&crate::ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    Ok(())
}

#[inline]
pub fn require_program_id(account: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    if account.key() != program_id {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// True for an account the system program still owns and that holds no data.
#[inline]
pub fn is_uninitialized(account: &AccountInfo) -> bool {
    account.is_owned_by(&pinocchio_system::ID) && account.data_is_empty()
}

/// Creates a rent-exempt account of `space` bytes owned by this program.
///
/// `signers` carries PDA seeds; keypair accounts sign the transaction instead.
/// An account that already holds lamports is topped up, allocated and
/// assigned, since `CreateAccount` refuses it.
pub fn create_program_account(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    signers: &[Signer],
) -> ProgramResult {
    let required = Rent::get()?.minimum_balance(space);
    let current = account.lamports();

    if current == 0 {
        return CreateAccount {
            from: payer,
            to: account,
            lamports: required,
            space: space as u64,
            owner: &crate::ID,
        }
        .invoke_signed(signers);
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        Transfer {
            from: payer,
            to: account,
            lamports: top_up,
        }
        .invoke()?;
    }
    Allocate {
        account,
        space: space as u64,
    }
    .invoke_signed(signers)?;
    Assign {
        account,
        owner: &crate::ID,
    }
    .invoke_signed(signers)
}

/// Creates a PDA with seeds `[prefix, &[bump]]`.
pub fn create_singleton_pda(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    prefix: &[u8],
    bump: u8,
) -> ProgramResult {
    let bump = [bump];
    let seeds = [Seed::from(prefix), Seed::from(&bump)];
    create_program_account(payer, account, space, &[Signer::from(&seeds)])
}

/// Creates a PDA with seeds `[prefix, owner, &[bump]]`.
pub fn create_owner_pda(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    prefix: &[u8],
    owner: &Pubkey,
    bump: u8,
) -> ProgramResult {
    let bump = [bump];
    let seeds = [Seed::from(prefix), Seed::from(owner), Seed::from(&bump)];
    create_program_account(payer, account, space, &[Signer::from(&seeds)])
}

/// Checks `account` is the PDA of `seeds` at its canonical bump, and that
/// `bump` is that bump. Run before creating a PDA so only one address per
/// seed set can ever be initialized.
pub fn require_canonical_pda(account: &AccountInfo, seeds: &[&[u8]], bump: u8) -> ProgramResult {
    let (expected, canonical) =
        try_find_program_address(seeds, &crate::ID).ok_or(ProgramError::InvalidSeeds)?;
    if account.key() != &expected || bump != canonical {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

/// Checks `account` is the `[prefix, &[bump]]` PDA of this program.
pub fn verify_singleton_pda(account: &AccountInfo, prefix: &[u8], bump: u8) -> ProgramResult {
    let expected = create_program_address(&[prefix, &[bump]], &crate::ID)?;
    if account.key() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

/// Checks `account` is the `[prefix, owner, &[bump]]` PDA of this program.
pub fn verify_owner_pda(
    account: &AccountInfo,
    prefix: &[u8],
    owner: &Pubkey,
    bump: u8,
) -> ProgramResult {
    let expected = create_program_address(&[prefix, owner, &[bump]], &crate::ID)?;
    if account.key() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

/// Checks `registry` is the global registry of `kind` stored under `seed`.
///
/// Registries are only created at their canonical bump, which the header keeps.
pub fn require_registry(registry: &AccountInfo, kind: AccountKind, seed: &[u8]) -> ProgramResult {
    require_program_owned(registry)?;
    let bump = {
        let mut data = registry.try_borrow_mut_data()?;
        KeyList::load(&mut data, kind)?.bump()
    };
    verify_singleton_pda(registry, seed, bump)
}

/// Appends `key` to the key list in `list` unless it is already there,
/// growing the account when the list is full. `payer` funds the growth.
///
/// Returns whether the key was added.
pub fn push_key(
    payer: &AccountInfo,
    list: &AccountInfo,
    kind: AccountKind,
    key: &Pubkey,
) -> Result<bool, ProgramError> {
    let grow_to = {
        let mut data = list.try_borrow_mut_data()?;
        let keys = KeyList::load(&mut data, kind)?;
        if keys.contains(key) {
            return Ok(false);
        }
        if keys.is_full() {
            Some(grown_capacity(kind, keys.capacity())?)
        } else {
            None
        }
    };

    if let Some(capacity) = grow_to {
        fund_then_resize(payer, list, list_account_size(capacity))?;
    }

    let mut data = list.try_borrow_mut_data()?;
    let mut keys = KeyList::load(&mut data, kind)?;
    keys.push(key)?;
    pinocchio_log::log!("list size {}", keys.len() as u64);
    Ok(true)
}

/// Tops `account` up to rent exemption at `new_size` and resizes it.
///
/// No borrow of `account`'s data may be live.
fn fund_then_resize(payer: &AccountInfo, account: &AccountInfo, new_size: usize) -> ProgramResult {
    let required = Rent::get()?.minimum_balance(new_size);
    let top_up = required.saturating_sub(account.lamports());
    if top_up > 0 {
        Transfer {
            from: payer,
            to: account,
            lamports: top_up,
        }
        .invoke()?;
    }
    account.resize(new_size)
}
