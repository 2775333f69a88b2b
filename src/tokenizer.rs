// The character source: an embedded bootstrap program chained into stdin.
// Reads one character at a time and assembles whitespace/newline-delimited
// tokens, matching spec §4.9. Grounded on timbarnes-f3's files.rs
// (`FileHandle::get_line`/`read_char`) but simplified to the two stages this
// kernel actually needs (embedded source, then the interactive stream) —
// the teacher's general `include-file` nesting is out of scope here (see
// SPEC_FULL.md §B).

use std::collections::VecDeque;
use std::io::{self, BufRead};

pub struct Tokenizer {
    pending: VecDeque<char>,
    stdin_exhausted: bool,
}

impl Tokenizer {
    pub fn new(bootstrap: &str) -> Tokenizer {
        Tokenizer {
            pending: bootstrap.chars().collect(),
            stdin_exhausted: false,
        }
    }

    fn refill_from_stdin(&mut self) -> bool {
        if self.stdin_exhausted {
            return false;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                self.stdin_exhausted = true;
                false
            }
            Ok(_) => {
                self.pending.extend(line.chars());
                true
            }
            Err(_) => {
                self.stdin_exhausted = true;
                false
            }
        }
    }

    fn next_char(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.pending.pop_front() {
                return Some(c);
            }
            if !self.refill_from_stdin() {
                return None;
            }
        }
    }

    /// Read one token delimited by `delim` or newline. Leading delimiters
    /// and newlines are skipped. Returns `None` on clean end-of-stream with
    /// no token started (the §4.8 end-of-program sentinel).
    pub fn next_word(&mut self, delim: char) -> Option<String> {
        let mut c;
        loop {
            match self.next_char() {
                Some(ch) if ch == delim || ch == '\n' => continue,
                Some(ch) => {
                    c = ch;
                    break;
                }
                None => return None,
            }
        }
        let mut token = String::new();
        token.push(c);
        loop {
            match self.next_char() {
                Some(ch) if ch == delim || ch == '\n' => break,
                Some(ch) => token.push(ch),
                None => break,
            }
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut t = Tokenizer::new("2 37 +");
        assert_eq!(t.next_word(' '), Some("2".to_string()));
        assert_eq!(t.next_word(' '), Some("37".to_string()));
        assert_eq!(t.next_word(' '), Some("+".to_string()));
        assert_eq!(t.next_word(' '), None);
    }

    #[test]
    fn test_newline_is_whitespace() {
        let mut t = Tokenizer::new("DUP\nDROP");
        assert_eq!(t.next_word(' '), Some("DUP".to_string()));
        assert_eq!(t.next_word(' '), Some("DROP".to_string()));
    }

    #[test]
    fn test_empty_source_terminates_cleanly() {
        let mut t = Tokenizer::new("");
        assert_eq!(t.next_word(' '), None);
    }

    #[test]
    fn test_custom_delimiter_for_parse() {
        let mut t = Tokenizer::new("hello world\nrest");
        assert_eq!(t.next_word('\n'), Some("hello world".to_string()));
    }

    #[test]
    fn test_leading_whitespace_skipped() {
        let mut t = Tokenizer::new("   DUP");
        assert_eq!(t.next_word(' '), Some("DUP".to_string()));
    }
}
