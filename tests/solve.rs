use anyhow::{ensure, Context};
use tileswap_solver::solve;

use crate::common::*;

mod common;

fn main() {
    run_tests("solve", |content| {
        let input = input_of(content);
        let (start, target) = parse_pair(input)?;

        let result = solve::bfs(&start, &target, |_| {});
        let path = result.path.context("No solution")?;

        // Validate.
        let mut config = start.clone();
        config.apply(&path).context("Invalid move")?;
        ensure!(config == target, "Invalid solution");
        ensure!(config.path() == &path, "Recorded path differs");

        Ok(format!(
            "{input}\n\n{SEPARATOR}{path}\n{} configurations traversed\n",
            result.visited,
        ))
    });
}
