//! Run command implementation

use super::{Command, CommandContext};
use crate::config::Credential;
use crate::git::Session;
use crate::runner::WorkflowRunner;
use crate::workspace::Workspace;
use anyhow::Result;

/// Clone, commit a message file, push
pub struct RunCommand {
    /// Commit message; a timestamped default is generated when absent
    pub message: Option<String>,
    /// Print the run report as JSON when done
    pub json: bool,
}

impl Command for RunCommand {
    fn execute(&self, context: &CommandContext) -> Result<()> {
        let settings = &context.settings;

        // Pre-flight: nothing touches the filesystem or network before these pass
        settings.validate()?;
        let credential = Credential::from_env(&settings.token_env)?;

        let message = match &self.message {
            Some(message) => message.clone(),
            None => settings.default_message(),
        };

        let workspace = Workspace::provision(&settings.repository_name(), settings.keep_workspace)?;
        let mut session = Session::new(settings, workspace.path().to_path_buf(), credential);
        if self.json {
            // stdout carries only the JSON report
            let logger = session.logger().clone().with_stderr();
            session = session.with_logger(logger);
        }
        let logger = session.logger();

        logger.info(&format!("Working copy: {}", workspace.path().display()));

        let result = WorkflowRunner::new(&session).run(&message);
        if result.is_err() {
            logger.error("Run aborted, nothing after the failed step was attempted");
        }

        let kept = workspace.is_kept();

        if kept {
            let path = workspace.into_kept_path();
            logger.info(&format!("Workspace kept at {}", path.display()));
        } else if let Err(e) = workspace.close() {
            logger.warn(&format!("{e:#}"));
        }

        let mut report = result?;
        report.workspace_kept = kept;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        logger.success(&format!(
            "Pushed {} to {}",
            report.committed.short_id(),
            report.remote_url
        ));
        Ok(())
    }
}
