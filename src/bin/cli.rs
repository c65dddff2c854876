use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use easwipe::store::Store;
use easwipe_access::{DepartmentTree, audit_departments, resolve_department_closure};
use easwipe_config::StoreConfig;
use easwipe_core::hash_password;
use easwipe_models::{Department, DepartmentId};

#[derive(Parser)]
#[command(name = "easwipe-cli")]
#[command(about = "eaSwipe CLI - Offline tools for the department tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a department and every department beneath it
    Closure {
        /// JSON file holding an array of departments
        #[arg(short = 'f', long)]
        file: PathBuf,

        /// Department to resolve
        #[arg(short = 'r', long)]
        root: String,
    },
    /// Report dangling parents and cycles; exits non-zero when any are found
    CheckDepartments {
        /// JSON file holding an array of departments
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
    /// Print the demo tenant's departments as JSON
    DemoDepartments,
    /// Hash a password with bcrypt
    HashPassword {
        password: String,

        /// Bcrypt cost (defaults to PASSWORD_HASH_COST or 12)
        #[arg(short = 'c', long)]
        cost: Option<u32>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Closure { file, root } => handle_closure(&file, root),
        Commands::CheckDepartments { file } => handle_check_departments(&file),
        Commands::DemoDepartments => handle_demo_departments(),
        Commands::HashPassword { password, cost } => handle_hash_password(&password, cost),
    }
}

fn load_departments(file: &Path) -> anyhow::Result<Vec<Department>> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", file.display()))
}

fn handle_closure(file: &Path, root: String) -> anyhow::Result<ExitCode> {
    let departments = load_departments(file)?;
    let root = DepartmentId::from(root);
    let tree = DepartmentTree::new(&departments);

    if !tree.contains(&root) {
        eprintln!("⚠️  {} is not in {}; its closure is itself", root, file.display());
    }

    let mut closure: Vec<_> = resolve_department_closure(&root, &departments)
        .into_iter()
        .collect();
    closure.sort();

    for id in closure {
        match tree.get(&id) {
            Some(department) => println!("{}\t{}", id, department.name),
            None => println!("{}", id),
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_check_departments(file: &Path) -> anyhow::Result<ExitCode> {
    let departments = load_departments(file)?;
    let issues = audit_departments(&departments);

    if issues.is_empty() {
        println!("✅ {} departments, no issues found", departments.len());
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &issues {
        eprintln!("❌ {}", issue);
    }
    eprintln!("\n{} issue(s) in {} departments", issues.len(), departments.len());
    Ok(ExitCode::FAILURE)
}

fn handle_demo_departments() -> anyhow::Result<ExitCode> {
    // Only the org tree is printed, so the cheapest cost will do.
    let config = StoreConfig {
        password_hash_cost: 4,
        ..StoreConfig::default()
    };
    let store = Store::seeded(config)?;
    println!("{}", serde_json::to_string_pretty(&store.org().departments)?);
    Ok(ExitCode::SUCCESS)
}

fn handle_hash_password(password: &str, cost: Option<u32>) -> anyhow::Result<ExitCode> {
    let cost = cost.unwrap_or_else(|| StoreConfig::from_env().password_hash_cost);
    let hash = hash_password(password, cost).map_err(|e| e.error)?;
    println!("{}", hash);
    Ok(ExitCode::SUCCESS)
}
