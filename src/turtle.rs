//! Turtle state and the symbol-to-command table.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The state of the 2D pen.
///
/// `heading` is measured in degrees counter-clockwise from the +X axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current plane position of the pen.
    pub position: DVec2,

    /// Current heading in degrees.
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    /// Creates a pen at the origin facing `heading` degrees.
    pub fn new(heading: f64) -> Self {
        Self {
            position: DVec2::ZERO,
            heading,
        }
    }

    /// Unit vector pointing along the current heading.
    pub fn direction(&self) -> DVec2 {
        DVec2::from_angle(self.heading.to_radians())
    }

    /// Moves the pen `distance` units along its heading.
    pub fn advance(&mut self, distance: f64) {
        self.position += self.direction() * distance;
    }

    /// Rotates the heading by `degrees` (positive is counter-clockwise).
    pub fn turn(&mut self, degrees: f64) {
        self.heading += degrees;
    }
}

/// Operations the turtle can perform for a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Advance one segment and record the new position (`F`, `G`, `R`, `L`).
    Draw,
    /// Rotate by the angle increment multiplied by the given sign.
    /// `+` is `Turn(-1.0)` (clockwise), `-` is `Turn(1.0)` (counter-clockwise).
    Turn(f64),
    /// Save the full turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op. The symbol has no registered meaning.
    #[default]
    Ignore,
}

/// Symbols conventionally bound to [`TurtleOp::Draw`].
pub const DRAW_SYMBOLS: [char; 4] = ['F', 'G', 'R', 'L'];

const ASCII_SLOTS: usize = 128;

/// Fixed lookup from symbol to [`TurtleOp`], resolved once per symbol.
///
/// ASCII symbols are stored in a flat slot array; anything else falls back to
/// a hash map. Unregistered symbols resolve to [`TurtleOp::Ignore`].
#[derive(Clone, Debug)]
pub struct CommandTable {
    ascii: [TurtleOp; ASCII_SLOTS],
    extended: HashMap<char, TurtleOp>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommandTable {
    /// A table in which every symbol is ignored.
    pub fn empty() -> Self {
        Self {
            ascii: [TurtleOp::Ignore; ASCII_SLOTS],
            extended: HashMap::new(),
        }
    }

    /// The conventional bindings: draw class `F G R L`, `+`, `-`, `[`, `]`.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.populate_standard_symbols();
        table
    }

    /// Registers the conventional symbol bindings on top of the existing ones.
    pub fn populate_standard_symbols(&mut self) {
        for sym in DRAW_SYMBOLS {
            self.set_op(sym, TurtleOp::Draw);
        }
        let mappings = [
            ('+', TurtleOp::Turn(-1.0)),
            ('-', TurtleOp::Turn(1.0)),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];
        for (sym, op) in mappings {
            self.set_op(sym, op);
        }
    }

    /// Binds `symbol` to `op`, replacing any previous binding.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        if symbol.is_ascii() {
            self.ascii[symbol as usize] = op;
        } else {
            self.extended.insert(symbol, op);
        }
    }

    /// Builder form of [`set_op`](Self::set_op).
    pub fn with_op(mut self, symbol: char, op: TurtleOp) -> Self {
        self.set_op(symbol, op);
        self
    }

    /// Resolves the operation bound to `symbol`.
    pub fn op(&self, symbol: char) -> TurtleOp {
        if symbol.is_ascii() {
            self.ascii[symbol as usize]
        } else {
            self.extended
                .get(&symbol)
                .copied()
                .unwrap_or(TurtleOp::Ignore)
        }
    }
}
