use crate::core::board::{Board, Position, Side};
use crate::core::moves::Move;
use crate::engine::{perft, Game, MoveReport, RulesConfig, RulesEngine, SelectionOutcome};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub struct Console {
    pub game: Game,
    /// Options picked up by the next `newgame` or `position`.
    config: RulesConfig,
}

impl Console {
    pub fn new() -> Self {
        Console {
            game: Game::new(),
            config: RulesConfig::default(),
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Run against stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let keep_going = self.handle_line(&line, &mut output)?;
            output.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command line. Returns `false` once the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = parts.first() else {
            return Ok(true);
        };

        match first {
            "quit" => return Ok(false),
            "help" => self.cmd_help(out)?,
            "newgame" => self.cmd_newgame(),
            "setoption" => self.cmd_setoption(&parts),
            "position" => self.cmd_position(&parts, out)?,
            "select" => self.cmd_select(&parts, out)?,
            "move" => self.cmd_move(&parts, out)?,
            "moves" => self.cmd_moves(out)?,
            "turn" => writeln!(out, "turn {}", self.game.current_turn())?,
            "d" | "display" => self.cmd_display(out)?,
            "perft" => self.cmd_perft(&parts, out)?,
            _ => debug!("unknown command '{}'", first),
        }

        Ok(true)
    }

    fn cmd_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "commands:")?;
        writeln!(out, "  select <row> <col>              pick a piece, then its destination")?;
        writeln!(out, "  move <row> <col> <row> <col>    play a move directly")?;
        writeln!(out, "  moves                           list the moves that may be played")?;
        writeln!(out, "  turn                            show the side to move")?;
        writeln!(out, "  d | display                     show the board")?;
        writeln!(out, "  newgame                         reset to the starting position")?;
        writeln!(out, "  position startpos | position diagram <diagram> [w|b]")?;
        writeln!(out, "  setoption name <FirstToMove|CrowningEndsTurn> value <v>")?;
        writeln!(out, "  perft <depth>")?;
        writeln!(out, "  quit")
    }

    pub fn cmd_newgame(&mut self) {
        self.game = Game::with_config(self.config);
    }

    pub fn cmd_setoption(&mut self, parts: &[&str]) {
        let mut name = String::new();
        let mut value = String::new();
        let mut in_name = false;
        let mut in_value = false;

        for part in parts.iter().skip(1) {
            match *part {
                "name" => { in_name = true; in_value = false; }
                "value" => { in_name = false; in_value = true; }
                _ => {
                    if in_name { if !name.is_empty() { name.push(' '); } name.push_str(part); }
                    else if in_value { if !value.is_empty() { value.push(' '); } value.push_str(part); }
                }
            }
        }

        self.apply_setoption(&name, &value);
    }

    fn apply_setoption(&mut self, name: &str, value: &str) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.trim();
        match opt.as_str() {
            "firsttomove" => match value.parse::<Side>() {
                Ok(side) => self.config.first_to_move = side,
                Err(err) => warn!("FirstToMove: {}", err),
            },
            "crowningendsturn" => {
                self.config.crowning_ends_turn = value.eq_ignore_ascii_case("true") || value == "1";
            }
            _ => warn!("unknown option '{}'", name),
        }
    }

    fn cmd_position<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<()> {
        match parts.get(1).copied() {
            Some("startpos") => self.cmd_newgame(),
            Some("diagram") => {
                let Some(diagram) = parts.get(2) else {
                    return writeln!(out, "error: missing diagram");
                };
                let board = match diagram.parse::<Board>() {
                    Ok(board) => board,
                    Err(err) => return writeln!(out, "error: {}", err),
                };
                let turn = match parts.get(3).map(|s| s.parse::<Side>()) {
                    None => self.config.first_to_move,
                    Some(Ok(side)) => side,
                    Some(Err(err)) => return writeln!(out, "error: {}", err),
                };
                self.game = Game::from_engine(RulesEngine::from_board(board, turn, self.config));
            }
            _ => writeln!(out, "error: expected 'startpos' or 'diagram'")?,
        }
        Ok(())
    }

    fn cmd_select<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let Some(&[row, col]) = parse_coords(&parts[1..]).as_deref() else {
            return writeln!(out, "error: expected 'select <row> <col>'");
        };

        match self.game.submit_selection(Position::new(row, col)) {
            SelectionOutcome::Selected(pos) | SelectionOutcome::Reselected(pos) => {
                writeln!(out, "selected {}", pos)
            }
            SelectionOutcome::Deselected => writeln!(out, "deselected"),
            SelectionOutcome::Ignored(pos) => writeln!(out, "ignored {}", pos),
            SelectionOutcome::Moved(report) => write_report(out, &report),
            SelectionOutcome::Rejected(err) => writeln!(out, "rejected: {}", err),
        }
    }

    fn cmd_move<W: Write>(&mut self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let Some(&[r1, c1, r2, c2]) = parse_coords(&parts[1..]).as_deref() else {
            return writeln!(out, "error: expected 'move <row> <col> <row> <col>'");
        };

        let mv = Move::new(Position::new(r1, c1), Position::new(r2, c2));
        match self.game.submit_move(mv) {
            Ok(report) => write_report(out, &report),
            Err(err) => writeln!(out, "rejected: {}", err),
        }
    }

    fn cmd_moves<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let engine = self.game.engine();
        let label = if engine.must_jump() { "jumps" } else { "moves" };
        let list: Vec<String> = engine.candidates().iter().map(|mv| mv.to_string()).collect();
        writeln!(out, "{}: {}", label, list.join(", "))
    }

    fn cmd_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let engine = self.game.engine();
        write!(out, "{}", engine.board())?;
        writeln!(out, "  Turn: {}", engine.current_turn())?;
        if let Some(pos) = self.game.pending_selection() {
            writeln!(out, "  Selected: {}", pos)?;
        }
        if let Some(pos) = engine.chain_square() {
            writeln!(out, "  Continue jumping from: {}", pos)?;
        }
        Ok(())
    }

    fn cmd_perft<W: Write>(&self, parts: &[&str], out: &mut W) -> io::Result<()> {
        let depth: u32 = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
        let start = std::time::Instant::now();
        let nodes = perft(self.game.engine(), depth);
        let elapsed = start.elapsed();
        writeln!(out, "Nodes: {} ({} ms)", nodes, elapsed.as_millis())
    }
}

impl Default for Console {
    fn default() -> Self { Self::new() }
}

/// All tokens as coordinates, or `None` if any fails to parse.
fn parse_coords(tokens: &[&str]) -> Option<Vec<i8>> {
    tokens.iter().map(|s| s.parse().ok()).collect()
}

fn write_report<W: Write>(out: &mut W, report: &MoveReport) -> io::Result<()> {
    write!(out, "moved {}", report.mv)?;
    if let Some(pos) = report.captured {
        write!(out, " capturing {}", pos)?;
    }
    if report.promoted {
        write!(out, " and crowned")?;
    }
    writeln!(out)?;
    if report.turn_ended {
        writeln!(out, "turn {}", report.next_turn)
    } else {
        writeln!(out, "continue jumping from {}", report.mv.destination)
    }
}
