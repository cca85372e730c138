use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::config::Config;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Generate,
    Deploy,
}

impl Stage {
    pub fn argument(self, config: &Config) -> &str {
        match self {
            Stage::Generate => &config.generator.generate,
            Stage::Deploy => &config.generator.deploy,
        }
    }
}

/// A single external command call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    pub fn for_stage(config: &Config, stage: Stage) -> Self {
        Self {
            program: config.generator.command.clone(),
            args: vec![stage.argument(config).to_string()],
            working_dir: config.blog_root.clone(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Runs commands as child processes sharing this process's terminal.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        log::debug!(
            "spawning `{invocation}` in {}",
            invocation.working_dir.display()
        );
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| {
                format!(
                    "failed to start `{invocation}` in {}",
                    invocation.working_dir.display()
                )
            })?;

        if !status.success() {
            match status.code() {
                Some(code) => bail!("`{invocation}` exited with status {code}"),
                None => bail!("`{invocation}` was terminated by a signal"),
            }
        }
        Ok(())
    }
}

pub fn run_stage(runner: &mut impl CommandRunner, config: &Config, stage: Stage) -> Result<()> {
    let invocation = Invocation::for_stage(config, stage);
    println!("👉 Running: {invocation}");
    runner.run(&invocation)?;
    log::info!("{stage:?} step finished");
    Ok(())
}
