use anyhow::{bail, ensure, Context as _, Result};
use rand::prelude::*;

mod basis;
mod cube;
mod cubie;
mod solve;

use crate::{
    basis::{CubeColor, Rotation},
    cube::CubeState,
    solve::{solve, SolveOutcome, SolveParam},
};

fn main() -> Result<()> {
    let config = Config::from_args(std::env::args().skip(1))?;

    let (scramble_rotations, scrambled) = if let Some(state) = config.state {
        (vec![], state)
    } else if let Some(rotations) = config.moves {
        let state = rotations
            .iter()
            .fold(CubeState::solved(), |state, &rotation| {
                state.apply(rotation)
            });
        (rotations, state)
    } else {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        cube::scramble(&mut rng, config.scramble_count)
    };

    if !scramble_rotations.is_empty() {
        println!("initial scramble:");
        for (i, rotation) in scramble_rotations.iter().enumerate() {
            println!(" - rotation {}: {}", i + 1, rotation);
        }
    }

    let param = SolveParam {
        divisor: config.divisor,
        node_budget: config.node_budget,
    };
    match solve(scrambled, param) {
        SolveOutcome::Solved { rotations, visited } => {
            println!("a total of {} nodes were explored", visited);
            println!("number of rotations for solving: {}", rotations.len());
            for (i, rotation) in rotations.iter().enumerate() {
                println!(" - rotation {}: {}", i + 1, rotation);
            }
        }
        SolveOutcome::Exhausted { visited } => {
            println!(
                "the frontier was exhausted after {} nodes without reaching the solved state",
                visited
            );
        }
        SolveOutcome::BudgetExhausted { visited } => {
            println!("the node budget ran out after {} nodes", visited);
        }
    }
    Ok(())
}

const USAGE: &str = "usage: rubik-solver <scramble count> \
[--seed <u64>] [--divisor <f64>] [--budget <nodes>] \
[--moves \"x01 y2-1 z02 ...\"] [--state <54 color digits>]";

struct Config {
    scramble_count: usize,
    seed: Option<u64>,
    divisor: f64,
    node_budget: Option<usize>,
    moves: Option<Vec<Rotation>>,
    state: Option<CubeState>,
}

impl Config {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self {
            scramble_count: 0,
            seed: None,
            divisor: solve::heuristic::DEFAULT_DIVISOR,
            node_budget: None,
            moves: None,
            state: None,
        };
        let mut count = None;
        while let Some(arg) = args.next() {
            let mut flag_value = |name| {
                args.next()
                    .with_context(|| format!("{} requires a value\n{}", name, USAGE))
            };
            match arg.as_str() {
                "--seed" => config.seed = Some(flag_value("--seed")?.parse()?),
                "--divisor" => config.divisor = flag_value("--divisor")?.parse()?,
                "--budget" => config.node_budget = Some(flag_value("--budget")?.parse()?),
                "--moves" => config.moves = Some(parse_rotations(&flag_value("--moves")?)?),
                "--state" => config.state = Some(parse_state(&flag_value("--state")?)?),
                value if count.is_none() && !value.starts_with("--") => {
                    count = Some(value.parse().with_context(|| {
                        format!("expected a scramble count, but found '{}'", value)
                    })?);
                }
                value => bail!("unexpected argument '{}'\n{}", value, USAGE),
            }
        }
        ensure!(0.0 < config.divisor, "the divisor must be positive");
        match (count, &config.moves, &config.state) {
            (Some(count), None, None) => {
                ensure!(1 <= count, "the scramble count must be at least 1");
                config.scramble_count = count;
            }
            (None, Some(_), None) | (None, None, Some(_)) => {}
            _ => bail!("{}", USAGE),
        }
        Ok(config)
    }
}

/// 54 桁の色番号の列から初期配置を読む.
fn parse_state(input: &str) -> Result<CubeState> {
    let colors = input
        .trim()
        .chars()
        .map(|c| {
            let digit = c
                .to_digit(10)
                .with_context(|| format!("expected a color digit, but found '{}'", c))?;
            CubeColor::from_index(digit as u8)
        })
        .collect::<Result<Vec<_>>>()?;
    CubeState::from_colors(&colors)
}

/// 空白区切りの `x01` 形式 (軸の文字, 層番号, 向きの符号) の列を読む.
fn parse_rotations(input: &str) -> Result<Vec<Rotation>> {
    input
        .split_whitespace()
        .map(parse_rotation)
        .collect::<Result<Vec<_>>>()
        .and_then(|rotations| {
            ensure!(!rotations.is_empty(), "expected at least one rotation");
            Ok(rotations)
        })
}

fn parse_rotation(token: &str) -> Result<Rotation> {
    let mut chars = token.chars();
    let axis = chars
        .next()
        .with_context(|| format!("expected an axis letter in '{}'", token))?;
    let layer = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .with_context(|| format!("expected a layer digit in '{}'", token))? as u8;
    let sense = chars
        .as_str()
        .parse()
        .with_context(|| format!("expected a sense code in '{}'", token))?;
    Rotation::from_raw(axis, layer, sense)
}
