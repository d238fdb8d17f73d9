use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod group;
mod ids;
mod input;
mod person;
mod sort;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "roster-report")]
#[command(about = "Sort a roster of people and render a report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort the input roster and write the sorted group as JSON.
    Report {
        /// People file (JSON array, or a single person object).
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Sort spec file (JSON array of { sortOn, direction } layers).
        /// Defaults to first_name ascending, then dob ascending.
        #[arg(long)]
        sort: Option<PathBuf>,

        #[arg(short = 'o', long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report { input, sort, out } => {
            // 1) Load people; ids are issued in file order.
            let ids = ids::IdAssigner::new();
            let people = input::load_people(&input, &ids)?;
            let mut group = group::Group::new(people);

            // 2) Resolve the sort spec (file or the default layers).
            let spec = match sort {
                Some(path) => input::load_sort_spec(&path)?,
                None => sort::SortSpec::new(vec![
                    sort::SortLayerSpec::new("first_name", "ascending"),
                    sort::SortLayerSpec::new("dob", "ascending"),
                ]),
            };

            // 3) Show the roster before and after sorting.
            println!("{}", group.render());
            println!("---------------------");
            group.sort_by(&spec)?;
            println!("{}", group.render());

            if let (Some(young), Some(old)) = (group.youngest(), group.oldest()) {
                println!("---------------------");
                println!("Youngest: {}", young.formatted_name());
                println!("Oldest:   {}", old.formatted_name());
            }

            // 4) Write the sorted group as JSON.
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("create output dir {}", parent.display()))?;
                }
            }
            let json = serde_json::to_string_pretty(&group)?;
            std::fs::write(&out, json)
                .with_context(|| format!("write output file {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}
