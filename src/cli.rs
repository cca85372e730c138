use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "clhe", version)]
#[command(
    about = "Publish class notes to a hexo blog",
    long_about = "clhe copies a markdown note from your class notes repository into the hexo \n\
posts directory, adds front matter when the note has none, and runs the hexo \n\
generate and deploy commands."
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "CLHE_CONFIG",
        value_name = "PATH",
        help = "Path to clhe.yaml",
        long_help = "Read configuration from this file instead of searching for clhe.yaml in the current directory and its parents. Supports tilde expansion (e.g., ~/.config/clhe.yaml)."
    )]
    pub config: Option<PathBuf>,
    #[arg(
        short,
        long,
        global = true,
        help = "Print debug logs",
        long_help = "Log configuration lookups, file operations, and spawned commands. RUST_LOG takes precedence when set."
    )]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn build() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    #[command(
        about = "Copy a note into the blog and run generate + deploy",
        long_about = "Publish a markdown note. The note gets a front matter header (title, date, tags)\n\
when it does not already start with ---, is copied into the posts directory, and the\n\
blog is generated and deployed. A failing step stops the run; earlier steps are kept."
    )]
    Publish(PublishArgs),
    #[command(
        about = "List the markdown notes in the notes repository",
        long_about = "Print every markdown note found under notes_root with the index that --select accepts."
    )]
    List,
    #[command(
        about = "Show the resolved configuration",
        long_about = "Print the configuration after applying clhe.yaml, environment overrides, and tilde\n\
expansion. Pass one flag to print a single value."
    )]
    Config(ConfigArgs),
    #[command(
        about = "Write a starter clhe.yaml into the current directory",
        long_about = "Create clhe.yaml with default values. The command is idempotent: an existing file is\n\
left untouched unless --force is given."
    )]
    Init(InitArgs),
}

#[derive(Args, Clone, Debug)]
pub struct PublishArgs {
    #[arg(
        value_name = "MD_PATH",
        help = "Markdown note to publish",
        long_help = "Path to the note. Relative paths that do not exist from the current directory are looked up under notes_root. Ignored when --select is given."
    )]
    pub md_path: PathBuf,
    #[arg(help = "Tag written into new front matter")]
    pub tag: Option<String>,
    #[arg(
        short,
        long,
        help = "Pick the note interactively from the notes repository",
        long_help = "List the markdown notes under notes_root and prompt for the one to publish. MD_PATH must still be given but is not used."
    )]
    pub select: bool,
    #[arg(
        long,
        help = "Copy the note without running generate and deploy",
        long_help = "Stop after the note has been copied into the posts directory."
    )]
    pub no_build: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    #[arg(long, help = "Print the config file in use")]
    pub path: bool,
    #[arg(long, help = "Print notes_root")]
    pub notes_root: bool,
    #[arg(long, help = "Print blog_root")]
    pub blog_root: bool,
    #[arg(long, help = "Print the posts directory (joined with blog_root)")]
    pub posts_dir: bool,
    #[arg(long, help = "Print the generator command")]
    pub generator: bool,
}

#[derive(Args, Clone, Debug)]
pub struct InitArgs {
    #[arg(long, help = "Overwrite an existing clhe.yaml")]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_accepts_path_and_tag() {
        let cli = Cli::try_parse_from(["clhe", "publish", "notes/go.md", "golang"]).unwrap();
        match cli.command {
            Command::Publish(args) => {
                assert_eq!(args.md_path, PathBuf::from("notes/go.md"));
                assert_eq!(args.tag.as_deref(), Some("golang"));
                assert!(!args.select);
                assert!(!args.no_build);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn publish_requires_a_path_even_with_select() {
        assert!(Cli::try_parse_from(["clhe", "publish", "-s"]).is_err());

        let cli = Cli::try_parse_from(["clhe", "publish", "-s", "_"]).unwrap();
        assert!(matches!(cli.command, Command::Publish(args) if args.select));
    }

    #[test]
    fn publish_rejects_three_positionals() {
        assert!(Cli::try_parse_from(["clhe", "publish", "a.md", "tag", "extra"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "clhe",
            "publish",
            "a.md",
            "--verbose",
            "--config",
            "/tmp/clhe.yaml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/clhe.yaml")));
    }
}
