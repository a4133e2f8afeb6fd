use chrono::Datelike;
use clap::{Parser, Subcommand};
use gallery_gen::{config, generate, output, scan};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gallery-gen")]
#[command(about = "Generate a lightbox gallery page or a portfolio index from a folder of images")]
#[command(long_about = "\
Generate a lightbox gallery page or a portfolio index from a folder of images

Working directory layout (all names configurable in config.toml):

  ./
  ├── config.toml          # Optional overrides (see 'gallery-gen gen-config')
  ├── instagram.txt        # Index footer link (URL on one line)
  ├── linkedin.txt
  ├── hackaday.txt
  └── images/
      ├── Lamp Study.txt   # Project title (from filename) and description
      ├── logo.png         # Index header logo, never listed as a project
      ├── 01-sketch.jpg    # Project page: ordered by first number in the name
      └── 10-final.webp    # Index page: ordered newest first

Commands:
  page    writes gallery.html: one project with a lightbox viewer
  index   writes index.html: every image links to <name>/<name>.html")]
#[command(version)]
struct Cli {
    /// Working directory holding the image folder, config.toml, and link files
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the single-project gallery page
    Page,
    /// Build the index page linking to every project
    Index,
    /// Scan the image folder and report without writing anything
    Check {
        /// Check the index page instead of the project page
        #[arg(long)]
        index: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_failure(err.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = config::load_config(&cli.root)?;
    let year = chrono::Local::now().year();

    output::print_scanning(&config.images.folder);
    match cli.command {
        Command::Page => {
            let manifest = scan::scan_project(&cli.root, &config)?;
            output::print_project_scan(&manifest);
            let report = generate::write_project_page(&cli.root, &config, &manifest, year)?;
            output::print_generated(&report);
        }
        Command::Index => {
            let manifest = scan::scan_index(&cli.root, &config)?;
            output::print_index_scan(&manifest, &config.index.heading);
            let report = generate::write_index_page(&cli.root, &config, &manifest, year)?;
            output::print_generated(&report);
        }
        Command::Check { index: false } => {
            let manifest = scan::scan_project(&cli.root, &config)?;
            output::print_project_scan(&manifest);
            println!("==> Content is valid");
        }
        Command::Check { index: true } => {
            let manifest = scan::scan_index(&cli.root, &config)?;
            output::print_index_scan(&manifest, &config.index.heading);
            println!("==> Content is valid");
        }
        Command::GenConfig => {}
    }

    Ok(())
}
