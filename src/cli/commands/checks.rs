//! The `gplint checks` command.
//!
//! Lists the checks of one format in the order the pipeline runs them.

use crate::cli::args::{ArtifactFormat, ChecksArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::lint::CheckRegistry;
use crate::ui::UserInterface;
use crate::{dockerfile, documentation, gpunit, manifest, paramgroups, wrapper};

use super::dispatcher::{Command, CommandResult};

/// Prints check identifiers, names and descriptions.
pub struct ChecksCommand {
    args: ChecksArgs,
    settings: Settings,
}

impl ChecksCommand {
    pub fn new(args: ChecksArgs, settings: Settings) -> Self {
        Self { args, settings }
    }

    fn lines(&self) -> Vec<String> {
        let settings = &self.settings;
        match self.args.artifact {
            ArtifactFormat::Manifest => describe(&manifest::registry()),
            ArtifactFormat::Gpunit => describe(&gpunit::registry(settings)),
            ArtifactFormat::Paramgroups => describe(&paramgroups::registry()),
            ArtifactFormat::Dockerfile => describe(&dockerfile::registry(settings)),
            ArtifactFormat::Documentation => describe(&documentation::registry(settings)),
            ArtifactFormat::Wrapper => describe(&wrapper::registry(settings)),
        }
    }
}

fn describe<C>(registry: &CheckRegistry<C>) -> Vec<String> {
    let ordered = registry.ordered();
    let width = ordered
        .iter()
        .map(|c| c.id().as_str().len())
        .max()
        .unwrap_or(0);
    ordered
        .iter()
        .map(|c| {
            format!(
                "{:<width$}  {}: {}",
                c.id().as_str(),
                c.name(),
                c.description(),
                width = width
            )
        })
        .collect()
}

impl Command for ChecksCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for line in self.lines() {
            ui.message(&line);
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn listed(artifact: ArtifactFormat) -> Vec<String> {
        let mut ui = MockUI::new();
        ChecksCommand::new(ChecksArgs { artifact }, Settings::default())
            .execute(&mut ui)
            .unwrap();
        ui.messages().to_vec()
    }

    #[test]
    fn manifest_lists_file_name_first() {
        let lines = listed(ArtifactFormat::Manifest);
        assert_eq!(lines.len(), manifest::registry().len());
        assert!(lines[0].starts_with("file-name "));
    }

    #[test]
    fn gpunit_follows_priority() {
        let ids: Vec<_> = listed(ArtifactFormat::Gpunit)
            .iter()
            .filter_map(|l| l.split_whitespace().next().map(str::to_string))
            .collect();
        assert_eq!(
            &ids[..4],
            [
                "file-validation",
                "structure-validation",
                "module-validation",
                "parameter-validation"
            ]
        );
    }

    #[test]
    fn every_format_has_checks() {
        for artifact in [
            ArtifactFormat::Manifest,
            ArtifactFormat::Gpunit,
            ArtifactFormat::Paramgroups,
            ArtifactFormat::Dockerfile,
            ArtifactFormat::Documentation,
            ArtifactFormat::Wrapper,
        ] {
            assert!(!listed(artifact).is_empty(), "{:?}", artifact);
        }
    }
}
