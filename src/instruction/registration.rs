use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};

use crate::error::RegistryError;
use crate::helpers::*;
use crate::state::{read_record, write_record, AccountKind, KeyList};

/// Which list decides whether a record is already registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DedupScope {
    OwnerList,
    Registry,
}

/// Accounts and layout shared by the GPU node and agent registration flows.
pub struct Registration<'a> {
    pub registry: &'a AccountInfo,
    pub registry_kind: AccountKind,
    pub registry_seed: &'static [u8],
    pub owner_list: &'a AccountInfo,
    pub owner_list_kind: AccountKind,
    pub owner_list_seed: &'static [u8],
    pub record: &'a AccountInfo,
    pub record_kind: AccountKind,
    pub record_space: usize,
    pub owner: &'a AccountInfo,
    pub system_program: &'a AccountInfo,
}

impl Registration<'_> {
    /// Writes `payload` into the record account and links the record from the
    /// owner list and the global registry.
    ///
    /// `stored_owner` decodes the owner of a record that already exists so an
    /// update by anyone else can be refused. Returns whether the record key was
    /// newly added to the lists.
    pub fn register(
        &self,
        payload: &[u8],
        owner_list_bump: u8,
        dedup: DedupScope,
        stored_owner: fn(&[u8]) -> Result<Pubkey, ProgramError>,
    ) -> Result<bool, ProgramError> {
        require_signer(self.owner)?;
        require_writable(self.registry)?;
        require_writable(self.owner_list)?;
        require_writable(self.record)?;
        require_program_id(self.system_program, &pinocchio_system::ID)?;
        require_registry(self.registry, self.registry_kind, self.registry_seed)?;

        self.prepare_owner_list(owner_list_bump)?;
        self.write_record(payload, stored_owner)?;

        // the list named by `dedup` decides, the other one follows it
        let key = self.record.key();
        let (first, first_kind, second, second_kind) = match dedup {
            DedupScope::OwnerList => (self.owner_list, self.owner_list_kind, self.registry, self.registry_kind),
            DedupScope::Registry => (self.registry, self.registry_kind, self.owner_list, self.owner_list_kind),
        };
        if !push_key(self.owner, first, first_kind, key)? {
            return Ok(false);
        }
        push_key(self.owner, second, second_kind, key)?;

        Ok(true)
    }

    // Creates the owner's list on first use, otherwise checks it is theirs.
    fn prepare_owner_list(&self, bump: u8) -> Result<(), ProgramError> {
        let owner_key = self.owner.key();

        if is_uninitialized(self.owner_list) {
            require_canonical_pda(self.owner_list, &[self.owner_list_seed, owner_key], bump)?;
            create_owner_pda(
                self.owner,
                self.owner_list,
                REGISTRY_ACCOUNT_SIZE,
                self.owner_list_seed,
                owner_key,
                bump,
            )?;
            let mut data = self.owner_list.try_borrow_mut_data()?;
            KeyList::init(&mut data, self.owner_list_kind, bump)?;
            return Ok(());
        }

        require_program_owned(self.owner_list)?;
        let stored_bump = {
            let mut data = self.owner_list.try_borrow_mut_data()?;
            KeyList::load(&mut data, self.owner_list_kind)?.bump()
        };
        verify_owner_pda(self.owner_list, self.owner_list_seed, owner_key, stored_bump)
    }

    fn write_record(
        &self,
        payload: &[u8],
        stored_owner: fn(&[u8]) -> Result<Pubkey, ProgramError>,
    ) -> Result<(), ProgramError> {
        if is_uninitialized(self.record) {
            // keypair account: it signs the transaction itself
            require_signer(self.record)?;
            create_program_account(self.owner, self.record, self.record_space, &[])?;
        } else {
            require_program_owned(self.record)?;
            let data = self.record.try_borrow_data()?;
            let current_owner = stored_owner(read_record(&data, self.record_kind)?)?;
            if &current_owner != self.owner.key() {
                return Err(RegistryError::OwnerMismatch.into());
            }
        }

        let mut data = self.record.try_borrow_mut_data()?;
        write_record(&mut data, self.record_kind, payload)
    }
}
