//! Load a course catalog, select courses by id, and print a timetable.
//!
//! Usage: run <catalog.json> <course-id>...

use std::env;
use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use schedule_solver::{extract, Course, Schedule};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("usage: run <catalog.json> <course-id>..."),
    };
    let ids: Vec<String> = args.collect();

    let file = File::open(&path).with_context(|| format!("opening catalog {path}"))?;
    let catalog: Vec<Course> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing catalog {path}"))?;

    let selection: Vec<Course> = catalog
        .iter()
        .filter(|course| ids.contains(&course.id))
        .cloned()
        .collect();

    let sys = Schedule::new(&selection);
    match sys.solve_any() {
        Some(solution) => {
            let schedule = extract(&selection, &solution)?;
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        None => println!("No valid schedule found with the selected courses."),
    }

    Ok(())
}
