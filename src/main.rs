use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;

use std::io::{stdin, stdout, Write};
use std::time::Duration;

use connect4_engine::*;

mod display;
use display::*;

/// Play Connect 4 in the terminal against a negamax engine
#[derive(Parser, Debug)]
#[command(name = "connect4", version)]
struct Args {
    /// Maximum search depth in plies
    #[arg(short, long, default_value_t = 10)]
    depth: usize,

    /// Column exploration order
    #[arg(long, value_enum, default_value_t = Order::CenterOut)]
    order: Order,

    /// Which players the engine controls
    #[arg(long, value_enum, default_value_t = Control::Two)]
    ai: Control,

    /// Stop expanding columns after this many nodes per move
    #[arg(long)]
    nodes: Option<u64>,

    /// Stop expanding columns after this many milliseconds per move
    #[arg(long)]
    time_ms: Option<u64>,

    /// Start from a 42 cell grid, top row first ('-' empty, '1', '2')
    #[arg(long, conflicts_with = "moves")]
    position: Option<String>,

    /// Start from a move history of 1-indexed columns, e.g. 4453
    #[arg(long)]
    moves: Option<String>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Order {
    CenterOut,
    LeftToRight,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum Control {
    One,
    Two,
    Both,
    None,
}

impl Control {
    fn controls(self, player: Player) -> bool {
        match self {
            Control::One => player == Player::One,
            Control::Two => player == Player::Two,
            Control::Both => true,
            Control::None => false,
        }
    }
}

impl Args {
    fn config(&self, ai_role: Player) -> EngineConfig {
        let mut config = EngineConfig::default()
            .with_max_depth(self.depth)
            .with_ai_role(ai_role)
            .with_search_order(match self.order {
                Order::CenterOut => SearchOrder::CenterOut,
                Order::LeftToRight => SearchOrder::LeftToRight,
            });
        if let Some(nodes) = self.nodes {
            config = config.with_node_limit(nodes);
        }
        if let Some(time_ms) = self.time_ms {
            config = config.with_time_limit(Duration::from_millis(time_ms));
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut board = match (&args.position, &args.moves) {
        (Some(grid), _) => notation::parse_grid(grid)?,
        (None, Some(moves)) => notation::parse_moves(moves)?,
        (None, None) => BitBoard::new(),
    };
    let mut searchers = (
        Searcher::new(args.config(Player::One)),
        Searcher::new(args.config(Player::Two)),
    );

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display(&board)?;

        if let Some(winner) = board.winner() {
            println!("{} wins!", winner);
            break;
        }
        if board.is_full() {
            println!("Draw!");
            break;
        }

        let player = board.next_player();
        let column = if args.ai.controls(player) {
            // slow down play if both players are AI
            if args.ai == Control::Both {
                std::thread::sleep(Duration::from_secs(1));
            }

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("AI is thinking...");
            spinner.enable_steady_tick(100);

            let searcher = match player {
                Player::One => &mut searchers.0,
                Player::Two => &mut searchers.1,
            };
            let result = searcher.choose_move(&board);
            spinner.finish_and_clear();

            match result {
                Ok(best) => {
                    if searcher.budget_exhausted() {
                        println!("Search budget ran out after {} positions", searcher.node_count);
                    }
                    println!(
                        "{} plays column {} (score {}, {} positions searched)",
                        player,
                        best.column + 1,
                        best.score,
                        searcher.node_count
                    );
                    best.column
                }
                Err(EngineError::NoLegalMove) => {
                    println!("No legal move left, draw!");
                    break;
                }
                Err(err) => return Err(err.into()),
            }

        // human player
        } else {
            print!("{} move input > ", player);
            stdout().flush()?;
            let mut input_str = String::new();
            if stdin.read_line(&mut input_str)? == 0 {
                // stdin closed
                break;
            }

            match input_str.trim().parse::<usize>() {
                Ok(column @ 1..=WIDTH) => column - 1,
                Ok(column) => {
                    println!(
                        "Invalid move, column {} out of range. Columns must be between 1 and {}",
                        column, WIDTH
                    );
                    continue;
                }
                Err(_) => {
                    println!("Invalid number: {}", input_str.trim());
                    continue;
                }
            }
        };

        if let Err(err) = board.try_drop(column, player) {
            println!("{}", err);
            // try the move again
            continue;
        }
    }

    println!("Final position: {}", notation::to_grid(&board));
    Ok(())
}
