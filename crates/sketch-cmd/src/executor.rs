//! Command executor
//!
//! Dispatches and executes commands against a [`HostLike`] implementation.

use crate::args::ParsedCommand;
use crate::command::{CommandContext, CommandRegistry, HostLike};
use crate::config::SketchConfig;
use crate::error::{CmdError, CmdResult};
use crate::output::OutputMessage;
use crate::parser::{parse_command, parse_commands};

/// Result of command execution including any output messages
#[derive(Debug, Default)]
pub struct CommandOutput {
    pub messages: Vec<OutputMessage>,
}

impl CommandOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Message texts, one per line
    pub fn lines(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.text.as_str()).collect()
    }
}

/// Command executor
///
/// Owns the command registry and the defaults commands fall back to.
pub struct CommandExecutor {
    registry: CommandRegistry,
    config: SketchConfig,
    /// Whether to echo commands
    echo: bool,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    /// Create a new executor with the sketch commands and default config
    pub fn new() -> Self {
        Self::with_config(SketchConfig::default())
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            registry: CommandRegistry::with_builtins(),
            config,
            echo: false,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SketchConfig {
        &mut self.config
    }

    /// Echo each command at info level before running it
    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    /// Execute a single command string
    ///
    /// # Example
    /// ```ignore
    /// executor.do_(&mut session, "sketch_scom prot, radius=2")?;
    /// ```
    pub fn do_(&self, host: &mut dyn HostLike, cmd: &str) -> CmdResult {
        self.do_with_options(host, cmd, false).map(|_| ())
    }

    /// Execute a command, returning any output messages
    ///
    /// With `quiet`, summaries are neither logged nor collected.
    pub fn do_with_options(
        &self,
        host: &mut dyn HostLike,
        cmd: &str,
        quiet: bool,
    ) -> Result<CommandOutput, CmdError> {
        let cmd = cmd.trim();
        if cmd.is_empty() || cmd.starts_with('#') {
            return Ok(CommandOutput::new());
        }

        if self.echo && !quiet {
            log::info!("PyMOL> {}", cmd);
        }

        let parsed = parse_command(cmd)?;
        self.execute(host, &parsed, quiet)
    }

    /// Execute an already parsed command
    pub fn execute(
        &self,
        host: &mut dyn HostLike,
        parsed: &ParsedCommand,
        quiet: bool,
    ) -> Result<CommandOutput, CmdError> {
        let command = self
            .registry
            .get(&parsed.name)
            .ok_or_else(|| CmdError::UnknownCommand(parsed.name.clone()))?;

        let host: &mut dyn HostLike = &mut *host;
        let mut ctx = CommandContext::new(host, &self.config).with_quiet(quiet);
        command.execute(&mut ctx, parsed)?;

        Ok(CommandOutput {
            messages: ctx.take_output(),
        })
    }

    /// Execute multiple commands (semicolon or newline separated)
    ///
    /// Stops at the first failing command.
    pub fn do_multi(&self, host: &mut dyn HostLike, cmds: &str) -> Result<CommandOutput, CmdError> {
        let mut output = CommandOutput::new();
        for parsed in parse_commands(cmds)? {
            if self.echo {
                log::info!("PyMOL> {}", format_command(&parsed));
            }
            let result = self.execute(host, &parsed, false)?;
            output.messages.extend(result.messages);
        }
        Ok(output)
    }

    /// Help text of a command
    pub fn help(&self, name: &str) -> CmdResult<String> {
        self.registry
            .get(name)
            .map(|cmd| cmd.help().to_string())
            .ok_or_else(|| CmdError::UnknownCommand(name.to_string()))
    }
}

/// Format a parsed command back to a command string
pub fn format_command(cmd: &ParsedCommand) -> String {
    let mut text = cmd.name.clone();
    for (i, (name, value)) in cmd.args.iter().enumerate() {
        text.push_str(if i == 0 { " " } else { ", " });
        if let Some(name) = name {
            text.push_str(name);
            text.push('=');
        }
        text.push_str(&value.to_string());
    }
    text
}
