// Play chess against the engine in the terminal

use abchess::{
    board::PrettyStyle, legal_moves, search::Difficulty, Color, Game, Move, Square,
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "play")]
#[command(about = "Play chess against the alpha-beta engine")]
struct Args {
    /// Color played by the engine (`w` or `b`)
    #[arg(long, default_value = "b")]
    ai: Color,

    /// Engine strength (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Search depth in plies, overrides --difficulty
    #[arg(short, long)]
    depth: Option<u8>,

    /// Starting position in FEN
    #[arg(long)]
    fen: Option<String>,

    /// Print the board with Unicode chess symbols
    #[arg(long)]
    utf8: bool,
}

fn print_help() {
    println!("Commands:");
    println!("  e2e4     make a move");
    println!("  e2       list the legal moves of the piece on e2");
    println!("  undo     take back the last move pair");
    println!("  restart  start a new game");
    println!("  quit     exit");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let depth = args.depth.unwrap_or(args.difficulty.depth());
    let style = if args.utf8 {
        PrettyStyle::Utf8
    } else {
        PrettyStyle::Ascii
    };
    let mut game = match &args.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::new_initial(),
    };
    let start = args.fen.as_ref().map(|_| game.board().clone());

    print_help();
    let mut stdin = io::stdin().lock();
    loop {
        let status = game.status();
        if let Some(outcome) = status.outcome() {
            println!("{}", game.board().pretty(style));
            println!("Game finished: {}", outcome);
            let moves: Vec<String> = game.history().map(|mv| mv.to_string()).collect();
            println!("Moves: {}", moves.join(" "));
            break;
        }

        if status.turn == args.ai {
            let mv = game.play_ai(depth)?;
            println!("Engine plays {}", mv);
            continue;
        }

        println!("{}", game.board().pretty(style));
        if status.in_check {
            println!("Check!");
        }
        print!("{} move: ", status.turn);
        io::stdout().flush()?;
        let mut s = String::new();
        if stdin.read_line(&mut s)? == 0 {
            break;
        }
        let s = s.trim();

        match s {
            "quit" | "exit" => break,
            "help" => print_help(),
            "restart" => match &start {
                Some(b) => game = Game::new(b.clone()),
                None => game.restart(),
            },
            "undo" => {
                // Take back the engine reply too, so it's the player's turn again
                game.pop();
                if game.status().turn == args.ai {
                    game.pop();
                }
            }
            _ => {
                if let Ok(sq) = Square::from_str(s) {
                    let dsts: Vec<String> = legal_moves(game.board(), sq)
                        .iter()
                        .map(ToString::to_string)
                        .collect();
                    println!("Legal moves from {}: {}", sq, dsts.join(" "));
                    continue;
                }
                let mv = match Move::from_str(s) {
                    Ok(mv) => mv,
                    Err(e) => {
                        println!("Bad move: {}", e);
                        continue;
                    }
                };
                if let Err(e) = game.push(mv) {
                    println!("Cannot play {}: {}", mv, e);
                }
            }
        }
        println!();
    }

    Ok(())
}
