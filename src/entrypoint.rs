use crate::instruction::{self, RegistryInstruction};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if program_id != &crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Single-byte discriminator + raw payload
    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match RegistryInstruction::try_from(disc)? {
        RegistryInstruction::Initialize => {
            msg!("Instruction: Initialize");
            instruction::process_initialize(accounts, payload)
        }
        RegistryInstruction::RegisterGpuNode => {
            msg!("Instruction: RegisterGpuNode");
            instruction::process_register_gpu_node(accounts, payload)
        }
        RegistryInstruction::RegisterAgent => {
            msg!("Instruction: RegisterAgent");
            instruction::process_register_agent(accounts, payload)
        }
        RegistryInstruction::SubmitTask => {
            msg!("Instruction: SubmitTask");
            instruction::process_submit_task(accounts, payload)
        }
    }
}
