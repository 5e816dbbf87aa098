// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::Term;
use std::path::PathBuf;

use crate::batch::BatchCommitter;
use crate::config::BcConfig;
use crate::error::{Result, ResultExt};
use crate::git::{GitCli, Repository};

use super::args::{Cli, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let start_dir = match &cli.repo {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let workdir = resolve_workdir(start_dir);

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        BcConfig::load_from(config_path)?
    } else {
        BcConfig::load_in(&workdir)?
    };
    apply_overrides(&cli, &mut config);
    config.validate()?;

    if cli.print_config {
        let rendered = toml::to_string(&config).context("Failed to render configuration")?;
        print!("{}", rendered);
        return Ok(());
    }

    tracing::debug!("Running batch in {:?} with {:?}", workdir, config);

    // Keep stdout clean for the JSON document
    let term = match cli.format {
        OutputFormat::Text => Term::stdout(),
        OutputFormat::Json => Term::stderr(),
    };

    let git = GitCli::new(workdir)
        .with_dry_run(cli.dry_run)
        .with_echo(term.clone());
    let summary = BatchCommitter::new(&git, &config).with_term(term).run();

    match cli.format {
        OutputFormat::Text => summary.print(),
        OutputFormat::Json => {
            let json = summary.to_json().context("Failed to render summary")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Porcelain paths are relative to the repository root, so git runs there.
///
/// Outside a repository the start directory is kept and the status query
/// fails later, which a run treats as "no changes".
fn resolve_workdir(start_dir: PathBuf) -> PathBuf {
    match Repository::open(&start_dir) {
        Ok(repo) => repo.workdir().to_path_buf(),
        Err(e) => {
            tracing::debug!("Could not open repository at {:?}: {}", start_dir, e);
            start_dir
        }
    }
}

/// Apply command-line overrides on top of file configuration.
fn apply_overrides(cli: &Cli, config: &mut BcConfig) {
    if let Some(target) = cli.target {
        config.batch.target_commits = target;
    }
    if let Some(remote) = &cli.remote {
        config.push.remote = remote.clone();
    }
    if let Some(branch) = &cli.branch {
        config.push.branch = Some(branch.clone());
    }
    if cli.no_push {
        config.push.enabled = false;
    }
}
