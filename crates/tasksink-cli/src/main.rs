use anyhow::Result;
use std::{env, io::Read as _, path::PathBuf, process};

use tasksink_config::Config;
use tasksink_engine::{io, sort};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut check = false;
    let mut target: Option<String> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--check" => check = true,
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            _ if target.is_none() => target = Some(arg.clone()),
            _ => {
                print_usage(&args[0]);
                process::exit(2);
            }
        }
    }

    if target.as_deref() == Some("-") {
        return run_stdin(check);
    }

    // Fall back to the config file when no path is given
    let root = match target {
        Some(path) => PathBuf::from(path),
        None => match Config::load() {
            Ok(Some(config)) => config.tasks_path,
            Ok(None) => {
                eprintln!("Error: no path given and no config file found");
                eprintln!(
                    "Pass a path, or create {} with a tasks_path entry",
                    Config::config_path().display()
                );
                process::exit(2);
            }
            Err(e) => {
                eprintln!("Error: failed to load config file: {e}");
                process::exit(2);
            }
        },
    };

    let files = if root.is_dir() {
        match io::scan_task_files(&root) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("Error: cannot scan '{}': {e}", root.display());
                process::exit(1);
            }
        }
    } else {
        vec![root]
    };

    let mut changed = Vec::new();
    for file in &files {
        let result = if check {
            io::check_file(file)
        } else {
            io::sort_file(file)
        };
        match result {
            Ok(true) => changed.push(file.clone()),
            Ok(false) => {}
            Err(e) => {
                eprintln!("Error: {}: {e}", file.display());
                process::exit(1);
            }
        }
    }

    if check {
        for file in &changed {
            println!("{}", file.display());
        }
        if !changed.is_empty() {
            eprintln!("{} of {} files need sorting", changed.len(), files.len());
            process::exit(1);
        }
    } else if !changed.is_empty() {
        eprintln!("sorted {} of {} files", changed.len(), files.len());
    }

    Ok(())
}

/// Read the whole document from stdin, write the sorted text to stdout. In
/// check mode nothing is written; the exit code says whether input was
/// already sorted.
fn run_stdin(check: bool) -> Result<()> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;

    let sorted = sort(&content);
    if check {
        if sorted != content {
            process::exit(1);
        }
        return Ok(());
    }

    print!("{sorted}");
    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [--check] [path | -]");
    eprintln!();
    eprintln!("Sinks completed checkbox tasks below their unfinished siblings.");
    eprintln!("  <path>   a task file (sorted in place) or a directory to sweep");
    eprintln!("  -        read stdin, write the sorted text to stdout");
    eprintln!("  --check  report what would change and exit nonzero, writing nothing");
    eprintln!();
    eprintln!(
        "With no path, tasks_path from {} is swept",
        Config::config_path().display()
    );
}
