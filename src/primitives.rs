// The primitive table: every word the kernel itself knows how to run,
// numbered by registration order (the opcode stored in a dictionary entry's
// codeword cell). Grounded on timbarnes-f3's internals/general.rs and
// internals/compiler.rs (f_plus, f_dup, f_swap, f_create, f_colon, f_semi_colon,
// ...), rewritten against this kernel's (ip, np) calling convention instead
// of the teacher's embedded-opcode-array dispatch.
//
// Two shapes of primitive:
//   - `Control` primitives see the thread's instruction pointer and the next
//     cell after it, and decide where execution continues (DOCOL, DOVAR,
//     DORETURN, EXIT, LIT, BRANCH, 0BRANCH, EVALUATE, BYE... RETURN).
//   - `Simple` primitives just act on the stacks/heap; the driving loop
//     always advances to `np` afterward (+, DUP, EMIT, CREATE, ...).

use crate::dictionary;
use crate::error::ForthError;
use crate::kernel::{CELL, OP_DOCOL, OP_DORETURN, OP_DOVAR};
use crate::vm::Vm;
use std::io::{self, Write};

#[derive(Clone, Copy)]
pub enum PrimKind {
    Control(fn(&mut Vm, i32, i32) -> Result<i32, ForthError>),
    Simple(fn(&mut Vm) -> Result<(), ForthError>),
}

pub struct PrimEntry {
    pub name: &'static str,
    pub kind: PrimKind,
}

/// Register every kernel word. Order fixes the opcodes: the first three
/// entries MUST be DOCOL/DOVAR/DORETURN (kernel.rs's OP_* constants assume
/// it); everything after is free-standing.
pub fn install(vm: &mut Vm) -> Result<(), ForthError> {
    vm.add_builtin("(docol)", 0, PrimKind::Control(p_docol))?;
    vm.add_builtin("(dovar)", 0, PrimKind::Control(p_dovar))?;
    vm.add_builtin("(doreturn)", 0, PrimKind::Control(p_doreturn))?;

    vm.add_builtin("EXIT", 0, PrimKind::Control(p_exit))?;
    vm.add_builtin("LIT", 0, PrimKind::Control(p_lit))?;
    vm.add_builtin("BRANCH", 0, PrimKind::Control(p_branch))?;
    vm.add_builtin("0BRANCH", 0, PrimKind::Control(p_zbranch))?;
    vm.add_builtin("EVALUATE", 0, PrimKind::Control(p_evaluate))?;
    vm.add_builtin("RETURN", 0, PrimKind::Control(p_return))?;

    vm.add_builtin("BYE", 0, PrimKind::Simple(p_bye))?;

    vm.add_builtin("+", 0, PrimKind::Simple(p_add))?;
    vm.add_builtin("-", 0, PrimKind::Simple(p_sub))?;
    vm.add_builtin("*", 0, PrimKind::Simple(p_mul))?;
    vm.add_builtin("/", 0, PrimKind::Simple(p_div))?;
    vm.add_builtin("MOD", 0, PrimKind::Simple(p_mod))?;
    vm.add_builtin("<", 0, PrimKind::Simple(p_lt))?;
    vm.add_builtin("=", 0, PrimKind::Simple(p_eq))?;
    vm.add_builtin("0=", 0, PrimKind::Simple(p_zeq))?;
    vm.add_builtin("0<", 0, PrimKind::Simple(p_zlt))?;
    vm.add_builtin("AND", 0, PrimKind::Simple(p_and))?;
    vm.add_builtin("OR", 0, PrimKind::Simple(p_or))?;

    vm.add_builtin("DUP", 0, PrimKind::Simple(p_dup))?;
    vm.add_builtin("DROP", 0, PrimKind::Simple(p_drop))?;
    vm.add_builtin("SWAP", 0, PrimKind::Simple(p_swap))?;
    vm.add_builtin("OVER", 0, PrimKind::Simple(p_over))?;
    vm.add_builtin("ROT", 0, PrimKind::Simple(p_rot))?;
    vm.add_builtin(">R", 0, PrimKind::Simple(p_to_r))?;
    vm.add_builtin("R>", 0, PrimKind::Simple(p_r_from))?;

    vm.add_builtin("@", 0, PrimKind::Simple(p_fetch))?;
    vm.add_builtin("!", 0, PrimKind::Simple(p_store))?;
    vm.add_builtin("C@", 0, PrimKind::Simple(p_cfetch))?;
    vm.add_builtin("C!", 0, PrimKind::Simple(p_cstore))?;
    vm.add_builtin("+!", 0, PrimKind::Simple(p_plus_store))?;

    vm.add_builtin(",", 0, PrimKind::Simple(p_comma))?;
    vm.add_builtin("C,", 0, PrimKind::Simple(p_c_comma))?;
    vm.add_builtin("ALIGN", 0, PrimKind::Simple(p_align))?;
    vm.add_builtin("HERE", 0, PrimKind::Simple(p_here))?;

    vm.add_builtin("CREATE", 0, PrimKind::Simple(p_create))?;
    vm.add_builtin("DEF", 0, PrimKind::Simple(p_def))?;
    vm.add_builtin("END", crate::kernel::F_IMMEDIATE, PrimKind::Simple(p_end))?;
    vm.add_builtin("IMMEDIATE", crate::kernel::F_IMMEDIATE, PrimKind::Simple(p_immediate))?;

    vm.add_builtin("'", crate::kernel::F_IMMEDIATE, PrimKind::Simple(p_tick))?;
    vm.add_builtin("PARSE", 0, PrimKind::Simple(p_parse))?;
    vm.add_builtin("EXECUTE", 0, PrimKind::Simple(p_execute))?;
    vm.add_builtin("COMPILE,", 0, PrimKind::Simple(p_compile_comma))?;
    vm.add_builtin("[", crate::kernel::F_IMMEDIATE, PrimKind::Simple(p_lbracket))?;
    vm.add_builtin("]", 0, PrimKind::Simple(p_rbracket))?;
    vm.add_builtin("{", crate::kernel::F_IMMEDIATE, PrimKind::Simple(p_brace_open))?;
    vm.add_builtin("}", crate::kernel::F_IMMEDIATE, PrimKind::Simple(p_brace_close))?;

    vm.add_builtin("EMIT", 0, PrimKind::Simple(p_emit))?;
    vm.add_builtin("PRINT", 0, PrimKind::Simple(p_print))?;
    vm.add_builtin("DUMP", 0, PrimKind::Simple(p_dump))?;

    Ok(())
}

// -- control primitives --

fn p_docol(vm: &mut Vm, target: i32, np: i32) -> Result<i32, ForthError> {
    vm.kernel.push_return(np)?;
    Ok(target + 2 * CELL)
}

fn p_dovar(vm: &mut Vm, target: i32, np: i32) -> Result<i32, ForthError> {
    vm.kernel.push_data(target + 2 * CELL)?;
    Ok(np)
}

fn p_doreturn(vm: &mut Vm, target: i32, np: i32) -> Result<i32, ForthError> {
    vm.kernel.push_data(target + 2 * CELL)?;
    vm.kernel.push_return(np)?;
    vm.kernel.get_cell(target + CELL)
}

fn p_exit(vm: &mut Vm, _target: i32, _np: i32) -> Result<i32, ForthError> {
    vm.kernel.pop_return()
}

fn p_lit(vm: &mut Vm, _target: i32, np: i32) -> Result<i32, ForthError> {
    let value = vm.kernel.get_cell(np)?;
    vm.kernel.push_data(value)?;
    Ok(np + CELL)
}

fn p_branch(vm: &mut Vm, _target: i32, np: i32) -> Result<i32, ForthError> {
    vm.kernel.get_cell(np)
}

fn p_zbranch(vm: &mut Vm, _target: i32, np: i32) -> Result<i32, ForthError> {
    let flag = vm.kernel.pop_data()?;
    if flag == 0 {
        vm.kernel.get_cell(np)
    } else {
        Ok(np + CELL)
    }
}

/// `RETURN` turns the word currently being defined into a CREATE-built word
/// with custom runtime behavior: it rewrites LATEST's codeword from DOVAR to
/// DORETURN, stashes the does-code continuation in the reserved cell, then
/// returns exactly like EXIT. Precondition: LATEST must currently be a DOVAR
/// word and the return stack must be non-empty (we must be executing inside
/// a defining word, not at top level).
fn p_return(vm: &mut Vm, _target: i32, np: i32) -> Result<i32, ForthError> {
    let latest = vm.kernel.latest();
    if latest == 0 {
        return Err(ForthError::BadReturnState("no LATEST word"));
    }
    let cfa = dictionary::to_cfa(&vm.kernel, latest)?;
    if vm.kernel.get_cell(cfa)? != OP_DOVAR {
        return Err(ForthError::BadReturnState("LATEST is not a CREATE-built word"));
    }
    if vm.kernel.return_stack_len() == 0 {
        return Err(ForthError::BadReturnState("return stack empty"));
    }
    vm.kernel.set_cell(cfa, OP_DORETURN)?;
    vm.kernel.set_cell(cfa + CELL, np)?;
    vm.kernel.pop_return()
}

fn p_evaluate(vm: &mut Vm, _target: i32, np: i32) -> Result<i32, ForthError> {
    match vm.tokenizer.next_word(' ') {
        None => {
            vm.exit_flag = true;
            Ok(-1)
        }
        Some(word) => {
            vm.evaluate_word(&word)?;
            Ok(np)
        }
    }
}

// -- arithmetic / comparison --

const TRUE: i32 = -1;
const FALSE: i32 = 0;

fn p_add(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(a.wrapping_add(b))
}

fn p_sub(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(a.wrapping_sub(b))
}

fn p_mul(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(a.wrapping_mul(b))
}

/// Integer division, truncating toward zero (the Open Question in §9 is
/// resolved this way — see DESIGN.md).
fn p_div(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    if b == 0 {
        return Err(ForthError::BadReturnState("division by zero"));
    }
    vm.kernel.push_data(a.wrapping_div(b))
}

fn p_mod(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    if b == 0 {
        return Err(ForthError::BadReturnState("division by zero"));
    }
    vm.kernel.push_data(a.wrapping_rem(b))
}

fn p_lt(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(if a < b { TRUE } else { FALSE })
}

fn p_eq(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(if a == b { TRUE } else { FALSE })
}

fn p_zeq(vm: &mut Vm) -> Result<(), ForthError> {
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(if a == 0 { TRUE } else { FALSE })
}

fn p_zlt(vm: &mut Vm) -> Result<(), ForthError> {
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(if a < 0 { TRUE } else { FALSE })
}

fn p_and(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(a & b)
}

fn p_or(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(a | b)
}

// -- stack shuffling --

fn p_dup(vm: &mut Vm) -> Result<(), ForthError> {
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(a)?;
    vm.kernel.push_data(a)
}

fn p_drop(vm: &mut Vm) -> Result<(), ForthError> {
    vm.kernel.pop_data()?;
    Ok(())
}

fn p_swap(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(b)?;
    vm.kernel.push_data(a)
}

fn p_over(vm: &mut Vm) -> Result<(), ForthError> {
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(a)?;
    vm.kernel.push_data(b)?;
    vm.kernel.push_data(a)
}

fn p_rot(vm: &mut Vm) -> Result<(), ForthError> {
    let c = vm.kernel.pop_data()?;
    let b = vm.kernel.pop_data()?;
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_data(b)?;
    vm.kernel.push_data(c)?;
    vm.kernel.push_data(a)
}

fn p_to_r(vm: &mut Vm) -> Result<(), ForthError> {
    let a = vm.kernel.pop_data()?;
    vm.kernel.push_return(a)
}

fn p_r_from(vm: &mut Vm) -> Result<(), ForthError> {
    let a = vm.kernel.pop_return()?;
    vm.kernel.push_data(a)
}

// -- memory --

fn p_fetch(vm: &mut Vm) -> Result<(), ForthError> {
    let addr = vm.kernel.pop_data()?;
    let value = vm.kernel.get_cell(addr)?;
    vm.kernel.push_data(value)
}

fn p_store(vm: &mut Vm) -> Result<(), ForthError> {
    let addr = vm.kernel.pop_data()?;
    let value = vm.kernel.pop_data()?;
    vm.kernel.set_cell(addr, value)
}

fn p_cfetch(vm: &mut Vm) -> Result<(), ForthError> {
    let addr = vm.kernel.pop_data()?;
    let value = vm.kernel.get_byte(addr)?;
    vm.kernel.push_data(value as i32)
}

fn p_cstore(vm: &mut Vm) -> Result<(), ForthError> {
    let addr = vm.kernel.pop_data()?;
    let value = vm.kernel.pop_data()?;
    vm.kernel.set_byte(addr, value as u8)
}

fn p_plus_store(vm: &mut Vm) -> Result<(), ForthError> {
    let addr = vm.kernel.pop_data()?;
    let n = vm.kernel.pop_data()?;
    let cur = vm.kernel.get_cell(addr)?;
    vm.kernel.set_cell(addr, cur.wrapping_add(n))
}

// -- dictionary writer surface --

fn p_comma(vm: &mut Vm) -> Result<(), ForthError> {
    let value = vm.kernel.pop_data()?;
    dictionary::comma(&mut vm.kernel, value)
}

fn p_c_comma(vm: &mut Vm) -> Result<(), ForthError> {
    let value = vm.kernel.pop_data()?;
    dictionary::c_comma(&mut vm.kernel, value as u8)
}

fn p_align(vm: &mut Vm) -> Result<(), ForthError> {
    dictionary::align(&mut vm.kernel);
    Ok(())
}

fn p_here(vm: &mut Vm) -> Result<(), ForthError> {
    vm.kernel.push_data(vm.kernel.here())
}

// -- compiler-mode primitives (§4.7) --

/// `CREATE` parses a name from the source, builds a DOVAR header, and
/// publishes it into CURRENT immediately (unlike `DEF`, which defers
/// publication to `END`).
fn p_create(vm: &mut Vm) -> Result<(), ForthError> {
    let name = vm.tokenizer.next_word(' ').ok_or(ForthError::UnexpectedEof)?;
    let header = dictionary::create(&mut vm.kernel, name.as_bytes(), 0)?;
    dictionary::comma(&mut vm.kernel, OP_DOVAR)?;
    dictionary::comma(&mut vm.kernel, 0)?;
    vm.kernel.set_current_head(header);
    Ok(())
}

/// `DEF` parses a name, builds a DOCOL header, enters compile mode. The new
/// word is *not* published into CURRENT until `END` runs, so a definition
/// cannot call itself by name mid-compile (no accidental recursion).
fn p_def(vm: &mut Vm) -> Result<(), ForthError> {
    let name = vm.tokenizer.next_word(' ').ok_or(ForthError::UnexpectedEof)?;
    dictionary::create(&mut vm.kernel, name.as_bytes(), 0)?;
    dictionary::comma(&mut vm.kernel, OP_DOCOL)?;
    dictionary::comma(&mut vm.kernel, 0)?;
    vm.kernel.set_state(1);
    Ok(())
}

/// `END` (IMMEDIATE) appends EXIT, leaves compile mode, and publishes
/// LATEST into CURRENT.
fn p_end(vm: &mut Vm) -> Result<(), ForthError> {
    let exit_cfa = vm.cfa_of("EXIT")?;
    dictionary::comma(&mut vm.kernel, exit_cfa)?;
    vm.kernel.set_state(0);
    let latest = vm.kernel.latest();
    vm.kernel.set_current_head(latest);
    Ok(())
}

fn p_immediate(vm: &mut Vm) -> Result<(), ForthError> {
    let latest = vm.kernel.latest();
    if latest == 0 {
        return Err(ForthError::BadReturnState("no LATEST word"));
    }
    let flags_addr = latest + CELL;
    let flags = vm.kernel.get_byte(flags_addr)?;
    vm.kernel.set_byte(flags_addr, flags | crate::kernel::F_IMMEDIATE)
}

// -- lookup / execution surface --

/// `'` (IMMEDIATE) parses the next name and resolves its CFA. Used at the
/// top level it simply pushes the CFA; used while compiling (as in the
/// bootstrap definitions of `IF`/`UNTIL`/`ELSE`) it compiles a `LIT` of that
/// CFA instead, so the resolved address survives to be `,`-compiled into
/// the *host* definition when the immediate word that used `'` later runs.
fn p_tick(vm: &mut Vm) -> Result<(), ForthError> {
    let name = vm.tokenizer.next_word(' ').ok_or(ForthError::UnexpectedEof)?;
    let header = dictionary::find(&vm.kernel, name.as_bytes())?;
    if header == dictionary::NOT_FOUND {
        return Err(ForthError::UnknownWord(name));
    }
    let cfa = dictionary::to_cfa(&vm.kernel, header)?;
    if vm.kernel.is_compiling() {
        let lit_cfa = vm.cfa_of("LIT")?;
        dictionary::comma(&mut vm.kernel, lit_cfa)?;
        dictionary::comma(&mut vm.kernel, cfa)
    } else {
        vm.kernel.push_data(cfa)
    }
}

/// `PARSE ( delim -- addr len )` copies the next delimited token into a
/// scratch area just past HERE (without advancing HERE) and returns its
/// address and length.
fn p_parse(vm: &mut Vm) -> Result<(), ForthError> {
    let delim = vm.kernel.pop_data()?;
    let delim_char = char::from_u32(delim as u32).unwrap_or(' ');
    let word = vm.tokenizer.next_word(delim_char).unwrap_or_default();
    let scratch = vm.kernel.here();
    vm.kernel.set_bytes(scratch, word.as_bytes())?;
    vm.kernel.push_data(scratch)?;
    vm.kernel.push_data(word.len() as i32)
}

fn p_execute(vm: &mut Vm) -> Result<(), ForthError> {
    let xt = vm.kernel.pop_data()?;
    vm.execute_word(xt)
}

fn p_compile_comma(vm: &mut Vm) -> Result<(), ForthError> {
    let xt = vm.kernel.pop_data()?;
    dictionary::comma(&mut vm.kernel, xt)
}

fn p_lbracket(vm: &mut Vm) -> Result<(), ForthError> {
    vm.kernel.set_state(0);
    Ok(())
}

fn p_rbracket(vm: &mut Vm) -> Result<(), ForthError> {
    vm.kernel.set_state(1);
    Ok(())
}

/// `{` opens an anonymous quotation body. If the surrounding context is
/// already compiling, a BRANCH-around is emitted first so flow skips the
/// quotation's own threaded code; the quotation's header address is stashed
/// on `Vm::quote_stack` for `}` to finish.
fn p_brace_open(vm: &mut Vm) -> Result<(), ForthError> {
    let was_compiling = vm.kernel.is_compiling();
    let mut branch_patch_addr = -1;
    if was_compiling {
        let branch_cfa = vm.cfa_of("BRANCH")?;
        dictionary::comma(&mut vm.kernel, branch_cfa)?;
        branch_patch_addr = vm.kernel.here();
        dictionary::comma(&mut vm.kernel, 0)?;
    }
    let header_addr = vm.kernel.here();
    dictionary::comma(&mut vm.kernel, OP_DOCOL)?;
    dictionary::comma(&mut vm.kernel, 0)?;
    vm.quote_stack.push(crate::vm::QuoteFrame {
        was_compiling,
        branch_patch_addr,
        header_addr,
    });
    vm.kernel.set_state(1);
    Ok(())
}

/// `}` closes the quotation opened by the matching `{`: appends EXIT, then
/// either patches the branch-around and compiles a `LIT <header>` into the
/// outer body (nested case), or leaves the outer state alone and pushes the
/// quotation's execution token directly (top-level case).
fn p_brace_close(vm: &mut Vm) -> Result<(), ForthError> {
    let frame = vm
        .quote_stack
        .pop()
        .ok_or(ForthError::BadReturnState("} without matching {"))?;
    let exit_cfa = vm.cfa_of("EXIT")?;
    dictionary::comma(&mut vm.kernel, exit_cfa)?;
    if frame.was_compiling {
        vm.kernel.set_state(1);
        let here = vm.kernel.here();
        vm.kernel.set_cell(frame.branch_patch_addr, here)?;
        let lit_cfa = vm.cfa_of("LIT")?;
        dictionary::comma(&mut vm.kernel, lit_cfa)?;
        dictionary::comma(&mut vm.kernel, frame.header_addr)
    } else {
        vm.kernel.set_state(0);
        vm.kernel.push_data(frame.header_addr)
    }
}

fn p_bye(vm: &mut Vm) -> Result<(), ForthError> {
    vm.exit_flag = true;
    Ok(())
}

// -- host I/O (§6) --

fn p_emit(vm: &mut Vm) -> Result<(), ForthError> {
    let code = vm.kernel.pop_data()?;
    if let Some(c) = char::from_u32(code as u32) {
        print!("{c}");
        io::stdout().flush().ok();
    }
    Ok(())
}

fn p_print(vm: &mut Vm) -> Result<(), ForthError> {
    let n = vm.kernel.pop_data()?;
    print!("{n}");
    io::stdout().flush().ok();
    Ok(())
}

/// `DUMP ( addr len -- )` — hex/ASCII memory dump to standard error, in
/// 16-byte rows: `{addr:06X}: b0 b1 b2 b3  b4 b5 b6 b7 - b8 b9 ba bb  bc bd
/// be bf  ................` (see spec §6).
fn p_dump(vm: &mut Vm) -> Result<(), ForthError> {
    let len = vm.kernel.pop_data()?;
    let addr = vm.kernel.pop_data()?;
    let mut offset = 0;
    while offset < len {
        let row_len = std::cmp::min(16, len - offset);
        let row_addr = addr + offset;
        let bytes = vm.kernel.get_bytes(row_addr, row_len)?;
        eprintln!("{}", format_dump_row(row_addr, bytes));
        offset += 16;
    }
    Ok(())
}

fn format_dump_row(addr: i32, bytes: &[u8]) -> String {
    let mut hex = String::new();
    for i in 0..16 {
        if i < bytes.len() {
            hex.push_str(&format!("{:02x}", bytes[i]));
        } else {
            hex.push_str("  ");
        }
        match i {
            3 | 11 => hex.push_str("  "),
            7 => hex.push_str(" - "),
            15 => {}
            _ => hex.push(' '),
        }
    }
    let ascii: String = bytes
        .iter()
        .map(|&b| if (0x20..0x7f).contains(&b) { b as char } else { '.' })
        .collect();
    format!("{addr:06X}: {hex}  {ascii}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dump_row_full() {
        let bytes: Vec<u8> = (0u8..16).collect();
        let row = format_dump_row(0xA00000u32 as i32, &bytes);
        assert!(row.starts_with("A00000: "));
        assert!(row.contains("00 01 02 03"));
        assert!(row.contains("0a 0b"));
        assert!(row.ends_with("................"));
    }

    #[test]
    fn test_format_dump_row_printable_ascii() {
        let row = format_dump_row(0, b"HELLO!..........");
        assert!(row.contains("HELLO!"));
    }
}
