use docopt::Docopt;
use lattice_mazes::{
    errors::*,
    generators,
    maze::MazeDescriptor,
    pathing,
    renderers,
    units::{ColumnsCount, RowsCount},
};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Lattice mazes

Usage:
    maze_driver -h | --help
    maze_driver [--rows=<r>] [--cols=<c>] [--seed=<s>] [--show-path] [--text-out=<path>] [--json-out=<path>]

Options:
    -h --help            Show this screen.
    --rows=<r>           Number of grid rows, at least 3 [default: 21].
    --cols=<c>           Number of grid columns, at least 3 [default: 41].
    --seed=<s>           Seed for the random number generator. A random seed is chosen and logged if not given.
    --show-path          Mark the longest path through the maze.
    --text-out=<path>    Write the text rendering to a file instead of standard output.
    --json-out=<path>    Also write the maze as JSON: {\"data\": [wall flags, row major], \"cols\": c, \"rows\": r}.

Set RUST_LOG=debug to see generation statistics.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_cols: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_text_out: String,
    flag_json_out: String,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let seed = args.flag_seed.unwrap_or_else(rand::random::<u64>);
    info!("Generating a {} x {} maze with seed {}", args.flag_cols, args.flag_rows, seed);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let maze = generators::generate(RowsCount(args.flag_rows), ColumnsCount(args.flag_cols), &mut rng)
        .chain_err(|| "Cannot generate a maze with the requested dimensions")?;

    let path = if args.flag_show_path {
        let longest = pathing::longest_path(&maze);
        if longest.is_none() {
            warn!("No path to show, the start cell is not open");
        }
        longest
    } else {
        None
    };

    let render_options = renderers::RenderOptionsBuilder::new()
        .path(path)
        .build();
    let text = renderers::render_text(&maze, &render_options);

    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("Wrote maze rendering to {}", args.flag_text_out);
    }

    if !args.flag_json_out.is_empty() {
        save_maze_json(&maze, &args.flag_json_out)?;
        info!("Wrote maze descriptor to {}", args.flag_json_out);
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_json(maze: &MazeDescriptor, file_path: &str) -> Result<()> {
    let json = serde_json::to_string(maze)?;
    write_text_to_file(&json, file_path)
        .chain_err(|| format!("Failed to write maze descriptor to JSON file {}", file_path))?;
    Ok(())
}
