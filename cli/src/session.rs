use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use sapper_core::Board;

use crate::render;

/// Runs one session to a win, a loss, or end of input.
pub fn run(mut board: Board) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print!("{}", render::draw(&board));

        let Some(raw) = prompt(&mut lines, "select a cell (e.g. a1): ")? else {
            return Ok(());
        };
        let coords = match render::parse_position(&raw, board.config()) {
            Ok(coords) => coords,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        let Some(action) = prompt(&mut lines, "choose an action (1: open, 2: flag): ")? else {
            return Ok(());
        };
        match action.trim() {
            "1" => {
                let cell = board.cell_at(coords)?;
                if cell.is_flagged() {
                    println!("that cell is flagged and stays closed");
                    continue;
                }
                if cell.is_opened() {
                    println!("that cell is already open");
                    continue;
                }
                if board.is_mine(coords)? {
                    board.open(coords)?;
                    println!();
                    print!("{}", render::draw(&board));
                    println!("you stepped on a mine, game over");
                    return Ok(());
                }
                board.open_surrounded(coords);
            }
            "2" => {
                if let Err(err) = board.flag(coords) {
                    println!("{err}");
                    continue;
                }
            }
            other => {
                println!("{other:?} is not an action, use 1 or 2");
                continue;
            }
        }

        if board.is_all_checked() {
            println!();
            print!("{}", render::draw(&board));
            println!("every cell is cleared, you win");
            return Ok(());
        }
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().context("failed to flush the prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read a move")?)),
        None => Ok(None),
    }
}
