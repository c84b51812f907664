use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use docdex_core::config::Config;
use docdex_core::frontmatter::{self, ValidationStatus};
use docdex_core::render::{category_counts, render_section};
use docdex_core::scan::scan_articles;
use docdex_core::splice::update_readme;
use docdex_core::{DocdexError, Result};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let base_dir = cli.base_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let quiet = cli.quiet;
    let verbose = cli.verbose;

    let result = match cli.command {
        Some(Commands::Update {
            articles_dir,
            readme,
            dry_run,
        }) => handle_update(
            &base_dir,
            articles_dir.as_deref(),
            readme.as_deref(),
            dry_run,
            quiet,
            verbose,
        ),
        Some(Commands::Validate {
            paths,
            articles_dir,
        }) => handle_validate(&base_dir, &paths, articles_dir.as_deref(), quiet),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        // No subcommand runs the pipeline with defaults
        None => handle_update(&base_dir, None, None, false, quiet, verbose),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "docdex", &mut io::stdout());
}

fn handle_update(
    base_dir: &Path,
    articles_dir: Option<&Path>,
    readme: Option<&Path>,
    dry_run: bool,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    let articles_dir = articles_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.join("articles"));
    let readme = readme
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.join("README.md"));

    if !quiet {
        println!("Scanning {}...", articles_dir.display());
    }

    let outcome = scan_articles(&articles_dir, &config)?;

    for skipped in &outcome.skipped {
        eprintln!(
            "{} Skipping {}: {}",
            "[WARN]".yellow().bold(),
            skipped.path.display(),
            skipped.message
        );
    }

    if !quiet {
        println!("Found {} article(s)", outcome.articles.len());
    }

    if verbose {
        for article in &outcome.articles {
            println!(
                "  {} [{}] {}",
                article.file_name.cyan(),
                article.category,
                article.title
            );
        }
    }

    let section = render_section(&outcome.articles, &config.render);

    if dry_run {
        println!();
        println!("{}", section);
    } else {
        update_readme(&readme, &section)?;
        if !quiet {
            println!("{} updated", readme.display());
        }
    }

    if !quiet && !outcome.articles.is_empty() {
        println!();
        println!("Categories found:");
        for (category, count) in category_counts(&outcome.articles) {
            println!("  - {}: {} article(s)", category.cyan(), count);
        }
    }

    Ok(())
}

fn handle_validate(
    base_dir: &Path,
    paths: &[PathBuf],
    articles_dir: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let config = Config::load(base_dir)?;

    let files = if paths.is_empty() {
        let dir = articles_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base_dir.join("articles"));
        list_article_files(&dir, &config)?
    } else {
        paths.to_vec()
    };

    let mut invalid = 0usize;

    for path in &files {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("{} {}: {}", "[ERROR]".red().bold(), path.display(), e);
                invalid += 1;
                continue;
            }
        };

        let result = frontmatter::validate(&content);
        match result.status {
            ValidationStatus::NoFrontmatter => {
                if !quiet {
                    println!("{} No frontmatter in {}", "[INFO]".blue(), path.display());
                }
            }
            ValidationStatus::Valid => {
                if !quiet {
                    println!(
                        "{} Valid frontmatter in {}",
                        "[PASS]".green().bold(),
                        path.display()
                    );
                }
                for warning in &result.warnings {
                    println!("  {} {}", "[WARN]".yellow().bold(), warning);
                }
            }
            ValidationStatus::Unterminated => {
                println!(
                    "{} Unterminated frontmatter in {}",
                    "[FAIL]".red().bold(),
                    path.display()
                );
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        return Err(DocdexError::ValidationFailed { count: invalid });
    }

    if !quiet {
        println!();
        println!("{} file(s) checked", files.len());
    }

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let existed = Config::path(base_dir).exists();
            let path = Config::init(base_dir)?;
            if existed {
                println!("Config already exists: {}", path.display());
            } else {
                println!("Created {}", path.display());
            }
        }
        ConfigAction::Show => {
            let config = Config::load(base_dir)?;
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

/// Files in `dir` with a configured extension, in name order.
fn list_article_files(dir: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DocdexError::ArticlesDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && config.matches_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
