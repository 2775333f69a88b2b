// Ties the heap/stacks (kernel.rs), the dictionary (dictionary.rs), the
// primitive table (primitives.rs) and the character source (tokenizer.rs)
// together into one running interpreter. Grounded on timbarnes-f3's
// runtime.rs (`Runtime::run`, `f_eval`, the builtin-registration loop) and
// internals/inner.rs (the codeword dispatch), reshaped around this kernel's
// (ip, np) primitive calling convention (see SPEC_FULL.md §4.6).

use crate::dictionary;
use crate::error::ForthError;
use crate::kernel::{Kernel, CELL};
use crate::messages::{DebugLevel, Msg};
use crate::primitives::{self, PrimEntry, PrimKind};
use crate::tokenizer::Tokenizer;

/// Marks "this nested call is finished, return control to the Rust caller"
/// — distinct from the negative `ip` that signals the whole program ending
/// (BYE, end-of-source). Any heap address is non-negative and below
/// `HEAP_CAPACITY`, so this value can never collide with a real one.
const SENTINEL: i32 = i32::MAX;

pub struct QuoteFrame {
    pub was_compiling: bool,
    pub branch_patch_addr: i32,
    pub header_addr: i32,
}

pub struct Vm {
    pub kernel: Kernel,
    pub msg: Msg,
    pub tokenizer: Tokenizer,
    pub primitives: Vec<PrimEntry>,
    pub quote_stack: Vec<QuoteFrame>,
    pub exit_flag: bool,
}

impl Vm {
    pub fn new(bootstrap: &str, debug_level: DebugLevel) -> Result<Vm, ForthError> {
        let mut msg = Msg::new();
        msg.set_level(debug_level);
        let mut vm = Vm {
            kernel: Kernel::new(),
            msg,
            tokenizer: Tokenizer::new(bootstrap),
            primitives: Vec::new(),
            quote_stack: Vec::new(),
            exit_flag: false,
        };
        primitives::install(&mut vm)?;
        Ok(vm)
    }

    /// Register one primitive: create its dictionary header (codeword cell
    /// holds its opcode, the registration index), publish it into CURRENT,
    /// and remember its Rust implementation.
    pub fn add_builtin(&mut self, name: &'static str, flags: u8, kind: PrimKind) -> Result<(), ForthError> {
        let opcode = self.primitives.len() as i32;
        let header = dictionary::create(&mut self.kernel, name.as_bytes(), flags)?;
        dictionary::comma(&mut self.kernel, opcode)?;
        dictionary::comma(&mut self.kernel, 0)?;
        self.kernel.set_current_head(header);
        self.primitives.push(PrimEntry { name, kind });
        Ok(())
    }

    pub fn cfa_of(&self, name: &str) -> Result<i32, ForthError> {
        let header = dictionary::find(&self.kernel, name.as_bytes())?;
        if header == dictionary::NOT_FOUND {
            return Err(ForthError::UnknownWord(name.to_string()));
        }
        dictionary::to_cfa(&self.kernel, header)
    }

    fn dispatch(&mut self, opcode: i32, target: i32, np: i32) -> Result<i32, ForthError> {
        let entry = self
            .primitives
            .get(opcode as usize)
            .ok_or(ForthError::BadOpcode { ip: target, opcode })?;
        match entry.kind {
            PrimKind::Control(f) => f(self, target, np),
            PrimKind::Simple(f) => {
                f(self)?;
                Ok(np)
            }
        }
    }

    /// Run the word whose CFA is `cfa` to completion: the generalized inner
    /// interpreter (spec §4.6). Used both for top-level dispatch and for
    /// `EXECUTE`/quotation re-entry, since both are "run this word, then
    /// come back to Rust" — the SENTINEL marks exactly that boundary.
    pub fn execute_word(&mut self, cfa: i32) -> Result<(), ForthError> {
        let opcode = self.kernel.get_cell(cfa)?;
        let mut ip = self.dispatch(opcode, cfa, SENTINEL)?;
        loop {
            if self.exit_flag {
                return Ok(());
            }
            if ip == SENTINEL {
                return Ok(());
            }
            if ip < 0 {
                self.exit_flag = true;
                return Ok(());
            }
            let target = self.kernel.get_cell(ip)?;
            let np = ip + CELL;
            let opcode = self.kernel.get_cell(target)?;
            ip = self.dispatch(opcode, target, np)?;
        }
    }

    /// The outer interpreter's one-token step (spec §4.8): find-or-number,
    /// then compile-or-execute depending on STATE and the word's IMMEDIATE
    /// flag. Termination on end-of-stream is handled by the caller
    /// (`primitives::p_evaluate`), since only a Control primitive can steer
    /// `ip` negative.
    pub fn evaluate_word(&mut self, word: &str) -> Result<(), ForthError> {
        let header = dictionary::find(&self.kernel, word.as_bytes())?;
        if header != dictionary::NOT_FOUND {
            let cfa = dictionary::to_cfa(&self.kernel, header)?;
            let flags = self.kernel.get_byte(header + CELL)?;
            let immediate = flags & crate::kernel::F_IMMEDIATE != 0;
            if self.kernel.is_compiling() && !immediate {
                dictionary::comma(&mut self.kernel, cfa)
            } else {
                self.execute_word(cfa)
            }
        } else if let Some(n) = parse_number(word) {
            if self.kernel.is_compiling() {
                let lit_cfa = self.cfa_of("LIT")?;
                dictionary::comma(&mut self.kernel, lit_cfa)?;
                dictionary::comma(&mut self.kernel, n)
            } else {
                self.kernel.push_data(n)
            }
        } else {
            Err(ForthError::UnknownWord(word.to_string()))
        }
    }

    /// Build and run the top-level `EVALUATE BRANCH <self>` loop (the
    /// self-hosted QUIT equivalent), until BYE or clean end-of-source.
    pub fn run(&mut self) -> Result<(), ForthError> {
        let evaluate_cfa = self.cfa_of("EVALUATE")?;
        let branch_cfa = self.cfa_of("BRANCH")?;
        let loop_header = self.kernel.here();
        dictionary::comma(&mut self.kernel, crate::kernel::OP_DOCOL)?;
        dictionary::comma(&mut self.kernel, 0)?;
        let body_start = self.kernel.here();
        dictionary::comma(&mut self.kernel, evaluate_cfa)?;
        dictionary::comma(&mut self.kernel, branch_cfa)?;
        dictionary::comma(&mut self.kernel, body_start)?;
        self.execute_word(loop_header)
    }

    /// Terminal error boundary: every `ForthError` is fatal (spec §7). No
    /// local recovery, one line to stderr, exit 1.
    pub fn fatal(&self, err: &ForthError) -> ! {
        self.msg.error("forth", "fatal error", Some(err.to_string()));
        use std::io::Write;
        std::io::stdout().flush().ok();
        std::process::exit(1);
    }
}

/// Accepts decimal (`-12`), hex (`0x1F`), and binary (`0b101`) literals.
/// Decimal parses the whole (possibly signed) string in one shot so
/// `i32::MIN` round-trips; `strip-sign-then-negate-the-magnitude` would
/// overflow on `"-2147483648"` since `2147483648` itself doesn't fit `i32`.
fn parse_number(word: &str) -> Option<i32> {
    let (neg, rest) = match word.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, word),
    };
    if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        let magnitude = i64::from_str_radix(hex, 16).ok()?;
        let value = if neg { -magnitude } else { magnitude };
        i32::try_from(value).ok()
    } else if let Some(bin) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        let magnitude = i64::from_str_radix(bin, 2).ok()?;
        let value = if neg { -magnitude } else { magnitude };
        i32::try_from(value).ok()
    } else {
        word.parse::<i32>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm_with(source: &str) -> Vm {
        Vm::new(source, DebugLevel::Error).unwrap()
    }

    #[test]
    fn test_parse_number_decimal_and_hex_and_binary() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("-7"), Some(-7));
        assert_eq!(parse_number("0x1F"), Some(31));
        assert_eq!(parse_number("0b101"), Some(5));
        assert_eq!(parse_number("DUP"), None);
    }

    #[test]
    fn test_parse_number_i32_min_round_trips() {
        assert_eq!(parse_number("-2147483648"), Some(i32::MIN));
    }

    #[test]
    fn test_scenario_arithmetic() {
        let mut vm = vm_with("2 37 + PRINT BYE");
        vm.run().unwrap();
        assert!(vm.exit_flag);
    }

    #[test]
    fn test_scenario_define_and_call_square() {
        let mut vm = vm_with("DEF SQUARE DUP * END 5 SQUARE PRINT BYE");
        vm.run().unwrap();
        assert_eq!(vm.kernel.data_stack_len(), 0);
    }

    #[test]
    fn test_scenario_abs_if_then() {
        let bootstrap = "\
            DEF IF ' 0BRANCH , HERE 0 , END IMMEDIATE \
            DEF THEN HERE SWAP ! END IMMEDIATE \
            DEF ABS DUP 0< IF -1 * THEN END \
            -9 ABS PRINT 10 ABS PRINT BYE";
        let mut vm = vm_with(bootstrap);
        vm.run().unwrap();
    }

    #[test]
    fn test_scenario_stars_begin_until() {
        let bootstrap = "\
            DEF IF ' 0BRANCH , HERE 0 , END IMMEDIATE \
            DEF THEN HERE SWAP ! END IMMEDIATE \
            DEF BEGIN HERE END IMMEDIATE \
            DEF UNTIL ' 0BRANCH , , END IMMEDIATE \
            DEF STAR 42 EMIT END \
            DEF STARS BEGIN STAR 1 - DUP 0 = UNTIL DROP END \
            3 STARS BYE";
        let mut vm = vm_with(bootstrap);
        vm.run().unwrap();
    }

    #[test]
    fn test_scenario_counter_return() {
        let bootstrap = "\
            DEF COUNTER CREATE , RETURN DUP 1 SWAP +! @ END \
            0 COUNTER C \
            C PRINT C PRINT BYE";
        let mut vm = vm_with(bootstrap);
        vm.run().unwrap();
    }

    #[test]
    fn test_scenario_quotation_execute() {
        let mut vm = vm_with("{ 2 3 * } EXECUTE PRINT BYE");
        vm.run().unwrap();
    }

    #[test]
    fn test_empty_source_terminates_cleanly() {
        let mut vm = vm_with("");
        let result = vm.run();
        assert!(result.is_ok());
        assert!(vm.exit_flag);
    }

    #[test]
    fn test_unknown_word_is_fatal_error() {
        let mut vm = vm_with("NOSUCHWORD BYE");
        let result = vm.run();
        assert!(matches!(result, Err(ForthError::UnknownWord(_))));
    }

    #[test]
    fn test_stack_underflow_is_fatal_error() {
        let mut vm = vm_with("DUP BYE");
        let result = vm.run();
        assert!(result.is_err());
    }
}
