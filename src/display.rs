use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{BitBoard, Player, HEIGHT, WIDTH};

/// Screen position of a cell, bottom row on the `origin_y` line
///
/// Rows that would land above the top of the terminal are pinned to line 0.
fn cell_position(origin: (u16, u16), column: usize, row: usize) -> (u16, u16) {
    let (origin_x, origin_y) = origin;
    (
        origin_x.saturating_add(column as u16),
        origin_y.saturating_sub(row as u16),
    )
}

/// Draws the board below the cursor, bottom row last
pub fn display(board: &BitBoard) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let origin = crossterm::cursor::position()?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let (pos_x, pos_y) = cell_position(origin, column, row);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.cell(column, row) {
                            Some(Player::One) => Color::Red,
                            Some(Player::Two) => Color::Yellow,
                            None => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin.0.saturating_add(WIDTH as u16), origin.1))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
