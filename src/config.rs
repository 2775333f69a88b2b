// Fixed run configuration. No argv parsing and no environment variables
// (spec §6: "CLI: None ... no flags, no environment variables") — the
// verbosity the teacher's Config exposed through clap is a compile-time
// constant here instead.

use crate::messages::DebugLevel;

pub struct Config {
    pub debug_level: DebugLevel,
}

impl Config {
    pub fn new() -> Config {
        Config {
            debug_level: DebugLevel::Warning,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_warning_level() {
        let config = Config::new();
        assert_eq!(config.debug_level, DebugLevel::Warning);
    }
}
