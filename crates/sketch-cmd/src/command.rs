//! Command trait and registry
//!
//! Defines the interface for commands and the registry that maps names to implementations.

use std::sync::Arc;

use ahash::AHashMap;

pub use sketch_scene::HostLike;

use crate::args::ParsedCommand;
use crate::config::SketchConfig;
use crate::error::CmdResult;
use crate::output::OutputMessage;

/// Command execution context
///
/// Provides access to the host and the command defaults, and collects the
/// messages a command prints. Generic over `H: HostLike` so commands can run
/// against any host.
pub struct CommandContext<'a, H: HostLike + ?Sized> {
    /// The host (atoms, colors, object table)
    pub host: &'a mut H,
    /// Defaults for omitted arguments
    pub config: &'a SketchConfig,
    /// Whether to suppress output messages
    pub quiet: bool,
    output: Vec<OutputMessage>,
}

impl<'a, H: HostLike + ?Sized> CommandContext<'a, H> {
    pub fn new(host: &'a mut H, config: &'a SketchConfig) -> Self {
        Self {
            host,
            config,
            quiet: false,
            output: Vec::new(),
        }
    }

    /// Set the quiet flag
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a message (unless quiet mode is enabled)
    pub fn print(&mut self, msg: &str) {
        if !self.quiet {
            log::info!("{}", msg);
            self.output.push(OutputMessage::info(msg));
        }
    }

    /// Print a warning (even in quiet mode)
    pub fn warn(&mut self, msg: &str) {
        log::warn!("{}", msg);
        self.output.push(OutputMessage::warning(msg));
    }

    /// Messages printed so far
    pub fn output(&self) -> &[OutputMessage] {
        &self.output
    }

    /// Take the printed messages, leaving the buffer empty
    pub fn take_output(&mut self) -> Vec<OutputMessage> {
        std::mem::take(&mut self.output)
    }
}

/// Trait for command implementations
///
/// Commands receive a context with access to the host and parsed
/// arguments, and return a result indicating success or failure.
pub trait Command: Send + Sync {
    /// Get the command name
    fn name(&self) -> &str;

    /// Execute the command
    ///
    /// The lifetime lets the context borrow a non-'static host.
    fn execute<'a>(
        &self,
        ctx: &mut CommandContext<'a, dyn HostLike + 'a>,
        args: &ParsedCommand,
    ) -> CmdResult;

    /// Get help text for this command
    fn help(&self) -> &str {
        "No help available."
    }
}

/// Registry mapping command names to implementations
#[derive(Default)]
pub struct CommandRegistry {
    commands: AHashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every sketch command registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::commands::register_all(&mut registry);
        registry
    }

    /// Register a command, replacing any command of the same name
    pub fn register<C: Command + 'static>(&mut self, cmd: C) {
        self.commands.insert(cmd.name().to_string(), Arc::new(cmd));
    }

    /// Look up a command by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
