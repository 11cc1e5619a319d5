use crate::{Color, ComputerStrength, Game, GameStatus, Point};

/// Play an interactive game in the terminal: a human holding Black against
/// the built-in computer holding White.
pub fn play_interactive(strength: ComputerStrength) {
    let mut game = Game::new(false, strength);

    while !game.is_game_over() {
        if game.get_turn() == Color::Black {
            human_turn(&mut game);
        } else {
            computer_turn(&mut game);
        }
    }

    println!("\n{}", game.state());
}

fn human_turn(game: &mut Game) {
    use std::io::Write;

    loop {
        println!("\n{}\n", game.state());

        print!("Enter a move: ");
        std::io::stdout().flush().unwrap();
        let mut input_line = String::new();
        std::io::stdin().read_line(&mut input_line).unwrap();

        let point: Point = match input_line.trim().parse() {
            Ok(point) => point,
            Err(_) => {
                println!("Cannot parse move.");
                continue;
            }
        };

        match game.put(point.x, point.y) {
            GameStatus::InvalidMove => {
                println!("Invalid move. Legal moves: {}", game.state().moves());
            }
            GameStatus::WhiteCantPutStone => {
                println!("White has no move and passes.");
                return;
            }
            _ => return,
        }
    }
}

fn computer_turn(game: &mut Game) {
    // The turn machine never leaves a stuck side on move, so the computer
    // always has a choice here.
    let point = game.decide().unwrap();
    println!("\nWhite plays {}.", point);

    if game.put(point.x, point.y) == GameStatus::BlackCantPutStone {
        println!("Black has no move and passes.");
    }
}
