//! Debug command implementation.
//!
//! `agentlab debug` launches the remote debugger with inherited stdio and
//! blocks until it exits. The command template comes from project config;
//! `${port}` is substituted from `--port`.

use std::path::{Path, PathBuf};

use crate::cli::args::DebugArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::shell;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The debug command implementation.
pub struct DebugCommand {
    project_root: PathBuf,
    args: DebugArgs,
}

impl DebugCommand {
    /// Create a new debug command.
    pub fn new(project_root: &Path, args: DebugArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for DebugCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root)?;
        let command = config
            .debug
            .command
            .replace("${port}", &self.args.port.to_string());

        ui.message(&format!("Launching debugger: {}", command));

        match shell::execute_interactive(&command, Some(&self.project_root)) {
            Ok(output) if output.success => Ok(CommandResult::success()),
            Ok(output) => {
                let code = output.exit_code.unwrap_or(1);
                ui.error(&format!("Debugger exited with code {}", code));
                Ok(CommandResult::failure(code))
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".agentlab.yml"), config).unwrap();
        temp
    }

    #[cfg(unix)]
    #[test]
    fn port_is_substituted_into_the_template() {
        let config = r#"
debug:
  command: "true # port ${port}"
"#;
        let temp = setup_project(config);
        let cmd = DebugCommand::new(temp.path(), DebugArgs { port: 9229 });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("port 9229"));
    }

    #[cfg(unix)]
    #[test]
    fn debugger_exit_code_is_propagated() {
        let config = r#"
debug:
  command: exit 4
"#;
        let temp = setup_project(config);
        let cmd = DebugCommand::new(temp.path(), DebugArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 4);
        assert!(ui.has_error("exited with code 4"));
    }

    #[test]
    fn default_port_appears_in_default_template() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();
        let command = config.debug.command.replace("${port}", "5678");
        assert!(command.contains("5678"));
        assert!(!command.contains("${port}"));
    }
}
