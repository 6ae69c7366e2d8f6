use std::{path::PathBuf, process::ExitCode};

use anyhow::Error;
use clap::{Parser, Subcommand};
use gjk2d_cli::{GenerateSettings, OverlapReport, Scene, random_scene};
use gjk2d_math::Vec2;
use rand::{SeedableRng, rngs::SmallRng};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a scene of random convex polygons as JSON.
    Generate {
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1440)]
        width: u32,
        #[arg(long, default_value_t = 810)]
        height: u32,
        /// Print to stdout if not given.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Print every pair of intersecting polygons in a scene.
    Check {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Move the polygon under a point and report what it intersects afterwards.
    Drag {
        path: PathBuf,
        #[arg(
            long,
            required = true,
            num_args = 2,
            value_names = ["X", "Y"],
            allow_negative_numbers = true
        )]
        at: Vec<f64>,
        #[arg(
            long,
            required = true,
            num_args = 2,
            value_names = ["DX", "DY"],
            allow_negative_numbers = true
        )]
        by: Vec<f64>,
        /// Save the moved scene back to `path`.
        #[arg(long)]
        write: bool,
    },
}

fn print_report(report: &OverlapReport, json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if report.pairs.is_empty() {
        println!("no intersecting polygons");
    } else {
        for (i, j) in &report.pairs {
            println!("{i} intersects {j}");
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode, Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            count,
            seed,
            width,
            height,
            output,
        } => {
            let settings = GenerateSettings {
                count,
                width,
                height,
                ..Default::default()
            };
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_rng(&mut rand::rng()),
            };

            let scene = random_scene(&mut rng, &settings)?;
            match output {
                Some(path) => scene.save(path)?,
                None => println!("{}", scene.to_json()?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { path, json } => {
            let scene = Scene::load(&path)?;
            print_report(&scene.overlap_report()?, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Drag {
            path,
            at,
            by,
            write,
        } => {
            let mut scene = Scene::load(&path)?;
            let at = Vec2::new(at[0], at[1]);
            let by = Vec2::new(by[0], by[1]);

            let Some(index) = scene.pick(at) else {
                println!("no polygon at ({}, {})", at.x, at.y);
                return Ok(ExitCode::FAILURE);
            };
            scene.drag(index, by)?;
            log::info!("moved polygon {index} by ({}, {})", by.x, by.y);

            print_report(&scene.overlap_report()?, false)?;
            if write {
                scene.save(&path)?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
