use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::error::GitletError;
use gitlet::artifacts::core::{NO_PAGER_ENV, PagerWriter};
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive
const LOG_FILTER_ENV: &str = "GITLET_LOG";

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny local version-control system",
    long_about = "Gitlet tracks snapshots of the files in one directory tree: \
    commits, branches, a staging area and three-way merges, all stored under .gitlet.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates a repository holding a single root commit on master, \
        in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "commit", about = "Record the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, or mark a tracked file for removal and delete it"
    )]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the active branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the IDs of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "checkout <branch> switches to a branch, \
        checkout -- <file> restores a file from the head commit and \
        checkout <commit> -- <file> restores a file from the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch name, or commit ID when a file is given")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the active commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Check out a commit and move its branch there")]
    Reset {
        #[arg(index = 1)]
        commit_id: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working tree status")]
    Status,
    #[command(name = "merge", about = "Merge a branch into the active branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
}

impl Commands {
    fn uses_pager(&self) -> bool {
        matches!(self, Commands::Log | Commands::GlobalLog)
            && std::env::var_os(NO_PAGER_ENV).is_none()
            && std::io::stdout().is_terminal()
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Parse the command line, mapping clap failures to user errors
fn parse_cli() -> Result<Cli, GitletError> {
    Cli::try_parse().map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            GitletError::MissingCommand
        }
        _ => {
            let command_name = std::env::args().nth(1).unwrap_or_default();
            let known = command_name.starts_with('-')
                || Cli::command().find_subcommand(&command_name).is_some();

            if known {
                GitletError::IncorrectOperands
            } else {
                GitletError::NoSuchCommand
            }
        }
    })
}

fn run(command: Commands) -> Result<()> {
    let pwd = std::env::current_dir()?;

    if let Commands::Init { path } = &command {
        let path = path.as_ref().map(PathBuf::from).unwrap_or(pwd);
        Repository::init(&path, Box::new(std::io::stdout()))?;
        return Ok(());
    }

    let pager = command.uses_pager().then(Pager::new);
    let writer: Box<dyn Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };
    let mut repository = Repository::open(&pwd, writer)?;

    match command {
        Commands::Init { .. } => anyhow::bail!("init cannot run inside an opened repository"),
        Commands::Add { file } => repository.add(&file)?,
        Commands::Commit { message } => repository.commit(message.as_deref().unwrap_or_default())?,
        Commands::Rm { file } => repository.rm(&file)?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Find { message } => repository.find(&message)?,
        Commands::Checkout { target, file } => match (target, file) {
            (Some(branch), None) => repository.checkout_branch(&branch)?,
            (commit_id, Some(file)) => repository.checkout_file(commit_id.as_deref(), &file)?,
            (None, None) => return Err(GitletError::IncorrectOperands.into()),
        },
        Commands::Branch { name } => repository.branch(&name)?,
        Commands::RmBranch { name } => repository.rm_branch(&name)?,
        Commands::Reset { commit_id } => repository.reset(&commit_id)?,
        Commands::Status => repository.status()?,
        Commands::Merge { branch } => {
            repository.merge(&branch)?;
        }
    }

    repository.persist()?;
    repository.writer().flush()?;

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    let result = parse_cli()
        .map_err(anyhow::Error::from)
        .and_then(|cli| run(cli.command));

    match result {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<GitletError>() {
            Some(user_error) => {
                tracing::debug!(error = ?user_error, "command refused");
                println!("{}", user_error);
                Ok(())
            }
            None => Err(err),
        },
    }
}
