use anyhow::{bail, Context, Result};
use clap::Parser;
use longest_trail::{CLIArgs, JunctionGraph};

fn main() -> Result<()> {
    env_logger::init();

    let args = CLIArgs::parse();
    let maze = longest_trail::read_maze(&args.input_path).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            args.input_path.display()
        )
    })?;
    let longest = if args.slopes {
        let graph = JunctionGraph::from_maze_with_slopes(&maze);
        longest_trail::exhaustive_longest(&graph)
    } else {
        let graph = JunctionGraph::from_maze(&maze)
            .context("Failed to reduce the maze to its junctions.")?;
        if args.exhaustive {
            longest_trail::exhaustive_longest(&graph)
        } else {
            longest_trail::solve(&graph).longest
        }
    };

    if let Some(len) = longest {
        println!("{}", len);
    } else {
        bail!(
            "There's no simple path from start{} to end{} in the given maze.",
            maze.start_pos(),
            maze.end_pos()
        );
    }

    Ok(())
}
