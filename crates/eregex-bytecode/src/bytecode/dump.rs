//! Human-readable disassembly of compiled programs.
//!
//! ```text
//! [header]
//! groups = 1
//! named = 0
//! min_len = 1
//! options = none
//!
//! [code]
//!   00  SaveLeftCaptureGroup #0
//!   02  Compare      char 'a'
//!   07  SaveRightCaptureGroup #0
//!   09  Exit
//! ```

use std::fmt::Write as _;

use crate::Colors;

use super::instructions::{CompareEntry, Instruction};
use super::literals::LiteralRef;
use super::program::Program;

/// Column width for opcode names; longer names push their arguments right.
const NAME_WIDTH: usize = 12;

/// Generate a human-readable dump of the program.
pub fn dump(program: &Program, colors: Colors) -> String {
    let mut out = String::new();
    dump_header(&mut out, program, colors);
    dump_literals(&mut out, program, colors);
    dump_code(&mut out, program, colors);
    out
}

/// Digits needed to print indices `0..count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

pub(crate) fn ip_width(program: &Program) -> usize {
    width_for_count(program.len()).max(2)
}

fn dump_header(out: &mut String, program: &Program, colors: Colors) {
    let c = colors;
    writeln!(out, "{}[header]{}", c.blue, c.reset).unwrap();
    writeln!(out, "groups = {}", program.capture_groups_count()).unwrap();
    writeln!(out, "named = {}", program.named_capture_groups_count()).unwrap();
    writeln!(out, "min_len = {}", program.match_length_minimum()).unwrap();
    writeln!(out, "options = {}", program.options()).unwrap();
    out.push('\n');
}

fn dump_literals(out: &mut String, program: &Program, colors: Colors) {
    let literals = program.literals();
    if literals.is_empty() {
        return;
    }

    let c = colors;
    let w = width_for_count(literals.len());
    writeln!(out, "{}[literals]{}", c.blue, c.reset).unwrap();
    for (i, r) in literals.entries().iter().enumerate() {
        let text = literal_text(program, *r);
        writeln!(out, "L{i:0w$} {}{text:?}{}", c.green, c.reset).unwrap();
    }
    out.push('\n');
}

fn dump_code(out: &mut String, program: &Program, colors: Colors) {
    let c = colors;
    let w = ip_width(program);
    writeln!(out, "{}[code]{}", c.blue, c.reset).unwrap();

    for (ip, decoded) in program.instructions() {
        match decoded {
            Ok(instr) => {
                let content = format_instruction(program, ip, &instr, colors);
                writeln!(out, "  {}{ip:0w$}{}  {content}", c.dim, c.reset).unwrap();
            }
            Err(e) => {
                writeln!(out, "  {}{ip:0w$}{}  {}<{e}>{}", c.dim, c.reset, c.red, c.reset)
                    .unwrap();
            }
        }
    }
}

/// Opcode name and decoded arguments of one instruction.
pub fn format_instruction(
    program: &Program,
    ip: usize,
    instr: &Instruction<'_>,
    colors: Colors,
) -> String {
    let c = colors;
    let name = instr.opcode().name();
    let args = format_arguments(program, ip, instr, colors);
    if args.is_empty() {
        format!("{}{name}{}", c.blue, c.reset)
    } else {
        format!("{}{name:<NAME_WIDTH$}{} {args}", c.blue, c.reset)
    }
}

fn format_arguments(program: &Program, ip: usize, instr: &Instruction<'_>, colors: Colors) -> String {
    let c = colors;
    match *instr {
        Instruction::Compare(cmp) => cmp
            .entries()
            .map(|entry| format_entry(program, entry, colors))
            .collect::<Vec<_>>()
            .join(", "),
        Instruction::Jump(offset) | Instruction::ForkJump(offset) | Instruction::ForkStay(offset) => {
            let w = ip_width(program);
            match instr.jump_target(ip) {
                Some(target) => format!("{offset:+} {}[&{target:0w$}]{}", c.dim, c.reset),
                None => format!("{offset:+} {}[&?]{}", c.dim, c.reset),
            }
        }
        Instruction::SaveLeftCaptureGroup(group) | Instruction::SaveRightCaptureGroup(group) => {
            format!("#{group}")
        }
        Instruction::SaveLeftNamedCaptureGroup(name)
        | Instruction::SaveRightNamedCaptureGroup(name) => {
            format!("{}{:?}{}", c.green, literal_text(program, name), c.reset)
        }
        Instruction::CheckBegin | Instruction::CheckEnd | Instruction::Exit => String::new(),
    }
}

fn format_entry(program: &Program, entry: CompareEntry, colors: Colors) -> String {
    let c = colors;
    match entry {
        CompareEntry::Inverse => "inverse".to_string(),
        CompareEntry::AnyChar => "any".to_string(),
        CompareEntry::Char(b) => format!("char {}'{}'{}", c.green, b.escape_ascii(), c.reset),
        CompareEntry::String(r) => {
            format!("string {}{:?}{}", c.green, literal_text(program, r), c.reset)
        }
        CompareEntry::CharClass(class) => format!("class {}", class.name()),
        CompareEntry::CharRange(range) => format!(
            "range {}'{}'-'{}'{}",
            c.green,
            range.from.escape_ascii(),
            range.to.escape_ascii(),
            c.reset
        ),
    }
}

fn literal_text(program: &Program, r: LiteralRef) -> String {
    program
        .literal(r)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap_or_else(|| "?".to_string())
}
