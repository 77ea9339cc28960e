use chess_rules_core::rules::all_legal_moves;
use chess_rules_core::{analyze_position, GameState, Result, Square};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    match args[1].as_str() {
        "play" => play(),
        "replay" => {
            if args.len() < 3 {
                println!("Error: Please provide a move file");
                println!("Usage: {} replay <file>", args[0]);
                process::exit(1);
            }
            replay(&args[2]);
        }
        "fen" => {
            if args.len() < 3 {
                println!("Error: Please provide a FEN string");
                println!("Usage: {} fen \"<fen>\"", args[0]);
                process::exit(1);
            }
            show_position(&args[2]);
        }
        _ => {
            print_usage(&args[0]);
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    println!("Usage: {} <command> [arguments]", program);
    println!();
    println!("Commands:");
    println!("  play                 Play a game, reading commands from stdin");
    println!("  replay <file>        Replay coordinate moves (e2e4 ...) from a file");
    println!("  fen \"<fen>\"          Show a position and its legal moves");
    println!();
    println!("Examples:");
    println!("  {} play", program);
    println!("  {} fen \"4k3/8/8/8/8/8/4r3/4K3 w - - 0 1\"", program);
}

/// Parses `e2e4` or `e2 e4`.
fn parse_coordinate_move(text: &str) -> Result<(Square, Square)> {
    let compact: String = text.split_whitespace().collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(chess_rules_core::Error::InvalidSquare(text.to_string()));
    }
    Ok((compact[..2].parse()?, compact[2..].parse()?))
}

fn print_game(game: &GameState) {
    println!("{}", game.board());
    println!();
    println!("   {}", game.status().describe());
    let record = game.move_list();
    if !record.is_empty() {
        println!("   Moves: {}", record);
    }
}

fn play() {
    let mut game = GameState::new();
    print_game(&game);
    println!();
    println!("Enter a move (e2e4), or: back, forward, reset, moves, fen, board, save <path>, load <path>, quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                println!("[ERROR] {}", e);
                break;
            }
        }

        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "back" => {
                if game.step_back() {
                    print_game(&game);
                } else {
                    println!("Already at the starting position");
                }
            }
            "forward" => match game.step_forward() {
                Ok(true) => print_game(&game),
                Ok(false) => println!("Already at the latest position"),
                Err(e) => println!("[ERROR] {}", e),
            },
            "reset" => {
                game.reset();
                print_game(&game);
            }
            "moves" => println!("{}", game.move_list()),
            "fen" => println!("{}", game.fen()),
            "board" => print_game(&game),
            "save" => match game.save(argument) {
                Ok(()) => println!("[OK] Saved to {}", argument),
                Err(e) => println!("[ERROR] {}", e),
            },
            "load" => match GameState::load(argument) {
                Ok(loaded) => {
                    game = loaded;
                    print_game(&game);
                }
                Err(e) => println!("[ERROR] {}", e),
            },
            _ => {
                let result =
                    parse_coordinate_move(line).and_then(|(from, to)| game.play(from, to));
                match result {
                    Ok(notation) => {
                        println!("   Played {}", notation);
                        print_game(&game);
                    }
                    Err(e) => println!("[ERROR] {}", e),
                }
            }
        }
    }
}

fn replay(file_path: &str) {
    println!("Loading: {}", file_path);
    println!();

    let contents = match fs::read_to_string(file_path) {
        Ok(c) => c,
        Err(e) => {
            println!("[ERROR] {}", e);
            process::exit(1);
        }
    };

    let mut game = GameState::new();
    for (ply, token) in contents.split_whitespace().enumerate() {
        let result = parse_coordinate_move(token).and_then(|(from, to)| game.play(from, to));
        if let Err(e) = result {
            println!("[ERROR] Ply {} ({}): {}", ply + 1, token, e);
            println!("   Moves so far: {}", game.move_list());
            process::exit(1);
        }
    }

    println!("[OK] Replayed {} ply(s)", game.notations().len());
    println!();
    print_game(&game);
    println!("   FEN: {}", game.fen());
}

fn show_position(fen: &str) {
    let game = match GameState::from_fen(fen) {
        Ok(g) => g,
        Err(e) => {
            println!("[ERROR] {}", e);
            process::exit(1);
        }
    };

    print_game(&game);
    let info = analyze_position(&game);
    println!("   Pieces: {}", info.piece_count);
    println!("   Legal moves: {}", info.legal_move_count);

    let moves: Vec<String> = all_legal_moves(game.board(), game.turn(), game.last_move())
        .into_iter()
        .map(|(from, to)| format!("{}{}", from, to))
        .collect();
    if !moves.is_empty() {
        println!("   {}", moves.join(" "));
    }
}
