use clap::{Parser, Subcommand};
use std::path::PathBuf;
use webphotos::{generate, output, scan};

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup, on the --version path only
        Box::leak(format!("{}+{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "webphotos")]
#[command(about = "Static HTML grid page from a directory of photos")]
#[command(long_about = "\
Static HTML grid page from a directory of photos

Scans one directory (non-recursive) for entries ending in .jpeg, .jpg, or
.dng (exact case) and writes a single HTML page embedding each match in a
grid, in the order the filesystem lists them.

The output filename is fixed by mode:

  webphotos.html        plain page
  index.html            with --download-buttons

The page links an external style.css for the grid layout; the stylesheet is
referenced, not generated. Filenames are inserted into the page without HTML
escaping, so a name containing '\"' or '<' produces invalid markup.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a directory and write the gallery page
    Build {
        /// Directory to scan for images
        source: PathBuf,

        /// Add a download button to every cell (writes index.html)
        #[arg(long)]
        download_buttons: bool,

        /// Directory the page is written into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Scan a directory and report what the page would contain
    Check {
        /// Directory to scan for images
        source: PathBuf,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            source,
            download_buttons,
            output_dir,
        } => {
            let mode = if download_buttons {
                generate::Mode::Download
            } else {
                generate::Mode::Plain
            };
            let listing = scan::scan(&source)?;
            let path = generate::generate(&listing, mode, &output_dir)?;
            output::print_build_output(&listing, &path);
        }
        Command::Check { source, json } => {
            let listing = scan::scan(&source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                output::print_check_output(&listing);
            }
        }
    }

    Ok(())
}
