#![allow(dead_code)]

use crate::areas::repository::Repository;
use anyhow::Result;
use clap::{Parser, Subcommand};

mod areas;
mod artifacts;
mod commands;
mod errors;

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    about = "A minimal content-addressed version control tool",
    long_about = "minigit records snapshots of user-selected files, organizes them into \
    a directed acyclic history of commits, supports named branches and detached \
    snapshots, restores prior snapshots into the working directory, and performs \
    three-way merges with textual conflict marking.",
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
        long_about = "This command creates the .minigit repository directory in the current \
        working directory, with HEAD attached to the default branch."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage one file for the next commit",
        long_about = "This command stores the file's current content as a blob and records \
        the path in the staging area."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Snapshot the staged files",
        long_about = "This command creates a new commit from the staging area with the \
        specified commit message and clears the staging area."
    )]
    Commit {
        #[arg(
            short,
            required = true,
            num_args = 1..,
            help = "The commit message; multiple words are joined by single spaces"
        )]
        message: Vec<String>,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command prints the history reachable from HEAD, following \
        first parents from newest to oldest."
    )]
    Log,
    #[command(
        name = "branch",
        about = "Create a new branch at the current HEAD commit",
        long_about = "This command creates a branch pointing at the commit HEAD currently \
        resolves to. HEAD itself does not move."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: String,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch or a commit",
        long_about = "This command restores the working tree to the target snapshot. \
        A branch name attaches HEAD to the branch; a commit fingerprint detaches HEAD."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name or a commit fingerprint")]
        target: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current branch",
        long_about = "This command performs a three-way merge of the named branch into the \
        current HEAD, marking conflicted files in the working tree."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge into the current one")]
        branch: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir()?;
    let mut repository = Repository::new(pwd, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Init => repository.init()?,
        Commands::Add { path } => repository.add(path).await?,
        Commands::Commit { message } => repository.commit(&message.join(" ")).await?,
        Commands::Log => repository.log()?,
        Commands::Branch { name } => repository.branch(name)?,
        Commands::Checkout { target } => repository.checkout(target).await?,
        Commands::Merge { branch } => repository.merge(branch).await?,
    }

    Ok(())
}
