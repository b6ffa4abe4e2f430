use clap::{Parser, Subcommand};
use docdex::types::Index;
use docdex::{generate, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docdex")]
#[command(about = "Table-of-contents generator for VuePress-style docs trees")]
#[command(long_about = "\
Table-of-contents generator for VuePress-style docs trees

Your filesystem is the data source. Each immediate subdirectory of the docs
root is a topic, each file inside it is a note whose first line carries the
display title, and the output is a flat directory.md table of contents.

Docs structure:

  docs/
  ├── .vuepress/                   # Site tooling (required, never indexed)
  ├── config.toml                  # docdex config (optional)
  ├── directory.md                 # Generated output (overwritten each run)
  ├── guide/                       # Topic → '## guide' heading
  │   ├── intro.md                 # First line '# Getting Started' → title
  │   └── faq.md
  └── drafts/                      # Empty topic → '[nothing yet](/)'

Link targets are site-relative: everything after the 'docs' path segment,
prefixed with '/'. Running docdex with no subcommand is the same as
'docdex build'.")]
#[command(version)]
struct Cli {
    /// Docs root directory
    #[arg(long, default_value = "docs", global = true)]
    root: PathBuf,

    /// Output file (defaults to <root>/<output_file> from config.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the docs root and write the table of contents (the default)
    Build,
    /// Scan the docs root and print the discovered index without writing
    Scan {
        /// Print the index as JSON instead of the tree view
        #[arg(long)]
        json: bool,
    },
    /// Validate the docs tree and report whether the table of contents is stale
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            println!("==> Scanning {}", cli.root.display());
            let index = scan::scan(&cli.root)?;
            let out_path = resolve_output(&cli.root, cli.output.as_deref(), &index);
            generate::write_index(&index, &out_path)?;
            output::print_build_output(&index, &out_path);
        }
        Command::Scan { json } => {
            let index = scan::scan(&cli.root)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&index)?);
            } else {
                output::print_scan_output(&index);
            }
        }
        Command::Check => {
            let index = scan::scan(&cli.root)?;
            output::print_scan_output(&index);

            let out_path = resolve_output(&cli.root, cli.output.as_deref(), &index);
            match std::fs::read_to_string(&out_path) {
                Ok(existing) if generate::parse_index(&existing) == index.topics => {
                    println!("==> {} is up to date", out_path.display());
                }
                Ok(_) => {
                    println!(
                        "==> {} is stale (run 'docdex' to regenerate)",
                        out_path.display()
                    );
                    std::process::exit(1);
                }
                Err(_) => {
                    println!(
                        "==> {} is missing (run 'docdex' to generate it)",
                        out_path.display()
                    );
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Resolve the output path: the --output flag wins, otherwise the configured
/// filename relative to the docs root.
fn resolve_output(root: &Path, flag: Option<&Path>, index: &Index) -> PathBuf {
    match flag {
        Some(path) => path.to_path_buf(),
        None => root.join(&index.config.output_file),
    }
}
