//! Structural verification of compiled programs.
//!
//! The matcher trusts the program: it follows jumps without bounds checks
//! beyond decoding. The compiler runs this in debug builds, tests run it on
//! every program they build.

use std::collections::BTreeSet;

use super::instructions::{CompareEntry, DecodeError, Instruction};
use super::program::Program;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("jump at {ip} lands at {target}, which is not an instruction boundary")]
    BadJumpTarget { ip: usize, target: i64 },

    #[error("capture group {group} at {ip} exceeds the group count {count}")]
    GroupOutOfRange { ip: usize, group: u32, count: usize },

    #[error("literal referenced at {ip} is outside the literal pool")]
    LiteralOutOfRange { ip: usize },

    #[error("compare at {ip} has an inverse entry that is not its first")]
    MisplacedInverse { ip: usize },

    #[error("named group at {ip} is not in the group name table")]
    UnknownGroupName { ip: usize },

    #[error("program does not end with Exit")]
    MissingExit,
}

pub(crate) fn verify(program: &Program) -> Result<(), VerifyError> {
    let mut boundaries = BTreeSet::new();
    let mut jumps = Vec::new();
    let mut last = None;

    for (ip, decoded) in program.instructions() {
        let instr = decoded?;
        boundaries.insert(ip);
        check_operands(program, ip, &instr)?;
        if let Some(offset) = instr.offset() {
            let target = (ip + instr.size()) as i64 + i64::from(offset);
            jumps.push((ip, target));
        }
        last = Some(instr);
    }

    if !matches!(last, Some(Instruction::Exit)) {
        return Err(VerifyError::MissingExit);
    }

    for (ip, target) in jumps {
        let valid = usize::try_from(target).is_ok_and(|t| boundaries.contains(&t));
        if !valid {
            return Err(VerifyError::BadJumpTarget { ip, target });
        }
    }

    Ok(())
}

fn check_operands(program: &Program, ip: usize, instr: &Instruction<'_>) -> Result<(), VerifyError> {
    match *instr {
        Instruction::Compare(c) => {
            for (i, entry) in c.entries().enumerate() {
                match entry {
                    CompareEntry::Inverse if i > 0 => {
                        return Err(VerifyError::MisplacedInverse { ip });
                    }
                    CompareEntry::String(r) if program.literal(r).is_none() => {
                        return Err(VerifyError::LiteralOutOfRange { ip });
                    }
                    _ => {}
                }
            }
        }
        Instruction::SaveLeftCaptureGroup(group) | Instruction::SaveRightCaptureGroup(group) => {
            let count = program.capture_groups_count();
            if group as usize >= count {
                return Err(VerifyError::GroupOutOfRange { ip, group, count });
            }
        }
        Instruction::SaveLeftNamedCaptureGroup(name)
        | Instruction::SaveRightNamedCaptureGroup(name) => {
            if program.literal(name).is_none() {
                return Err(VerifyError::LiteralOutOfRange { ip });
            }
            if program.named_group_slot(name).is_none() {
                return Err(VerifyError::UnknownGroupName { ip });
            }
        }
        _ => {}
    }
    Ok(())
}
