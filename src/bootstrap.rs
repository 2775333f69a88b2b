// The minimal surface-language preamble: the control-structure words the
// kernel deliberately does not know about (spec §4.10 — "the kernel need
// not know about them directly"), built from the kernel primitives it does
// expose: `'`, `,`, `HERE`, `@`/`!`, `0BRANCH`/`BRANCH`. Fed to the VM ahead
// of stdin so every session starts with IF/THEN/ELSE/BEGIN/UNTIL and a
// line comment already defined, the way timbarnes-f3 ships `runtime.rs`'s
// built-in word set ahead of user input.
pub const BOOTSTRAP: &str = "\
DEF IF ' 0BRANCH , HERE 0 , END IMMEDIATE
DEF ELSE ' BRANCH , HERE 0 , SWAP HERE SWAP ! END IMMEDIATE
DEF THEN HERE SWAP ! END IMMEDIATE
DEF BEGIN HERE END IMMEDIATE
DEF UNTIL ' 0BRANCH , , END IMMEDIATE
DEF # 10 PARSE DROP DROP END IMMEDIATE
";

#[cfg(test)]
mod tests {
    use super::BOOTSTRAP;
    use crate::messages::DebugLevel;
    use crate::vm::Vm;

    #[test]
    fn test_bootstrap_loads_without_error() {
        let source = format!("{BOOTSTRAP}\nBYE");
        let mut vm = Vm::new(&source, DebugLevel::Error).unwrap();
        vm.run().unwrap();
        assert!(vm.exit_flag);
    }

    #[test]
    fn test_bootstrap_if_then_else_both_branches() {
        let source = format!(
            "{BOOTSTRAP}\nDEF SIGN DUP 0< IF DROP -1 ELSE DROP 1 THEN END \
             -5 SIGN PRINT 5 SIGN PRINT BYE"
        );
        let mut vm = Vm::new(&source, DebugLevel::Error).unwrap();
        vm.run().unwrap();
    }

    #[test]
    fn test_bootstrap_comment_is_skipped() {
        let source = format!("{BOOTSTRAP}\n# this whole line is ignored\n1 2 + PRINT BYE");
        let mut vm = Vm::new(&source, DebugLevel::Error).unwrap();
        vm.run().unwrap();
    }
}
