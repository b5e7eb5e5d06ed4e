use calc::{calculate, format_result, EvalConfig};
use calc_lexer::{format_tokens, tokenize};

/// State of an interactive session; one expression per line
pub(crate) struct ReplSession {
    config: EvalConfig,
}

impl ReplSession {
    pub(crate) fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub(crate) fn prompt(&self) -> &'static str {
        "calc> "
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        let (command, argument) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            ":help" => (
                vec![
                    "commands: :help, :quit, :tokens <expr>, :allow-invalid on|off".to_string(),
                    "note: enter an expression using digits, '.', + - * / ^ and parentheses"
                        .to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":tokens" => {
                let out = match tokenize(argument) {
                    Ok(tokens) => format_tokens(&tokens),
                    Err(e) => format!("error: {e}"),
                };
                (vec![out], false)
            }
            ":allow-invalid" => {
                match argument {
                    "on" => self.config.allow_invalid_results = true,
                    "off" => self.config.allow_invalid_results = false,
                    "" => {}
                    other => {
                        return (
                            vec![format!("error: expected 'on' or 'off', got '{other}'")],
                            false,
                        )
                    }
                }
                let state = if self.config.allow_invalid_results {
                    "on"
                } else {
                    "off"
                };
                (vec![format!("allow-invalid: {state}")], false)
            }
            _ => (vec![format!("error: unknown command '{command}'")], false),
        }
    }

    /// Returns the lines to print and whether the session should end
    pub(crate) fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }

        let out = match calculate(trimmed, &self.config) {
            Ok(value) => format_result(value),
            Err(e) => format!("error: {e}"),
        };
        (vec![out], false)
    }
}

pub(crate) fn run_repl(config: EvalConfig) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(config);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}
