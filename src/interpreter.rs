//! Interpreter that converts an L-System symbol sequence into a 2D [`Trace`].
//!
//! The entry point is [`TurtleInterpreter`]. Build it from a [`TurtleConfig`],
//! optionally swap the symbol bindings with [`TurtleInterpreter::with_commands`],
//! then call [`TurtleInterpreter::interpret`]. The free [`interpret`] function
//! covers the common case with the standard bindings.

use crate::error::InvalidGeometryInput;
use crate::trace::Trace;
use crate::turtle::{CommandTable, TurtleOp, TurtleState};
use serde::{Deserialize, Serialize};

/// Geometric parameters for interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Length of one drawn segment. Must be finite and positive.
    pub segment_length: f64,
    /// Heading of the pen before the first symbol, in degrees.
    pub initial_heading: f64,
    /// Rotation applied by `+` and `-`, in degrees.
    pub angle_increment: f64,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            segment_length: 1.0,
            initial_heading: 0.0,
            angle_increment: 90.0,
        }
    }
}

impl TurtleConfig {
    /// Checks the parameters without building an interpreter.
    pub fn validate(&self) -> Result<(), InvalidGeometryInput> {
        if !self.segment_length.is_finite() || self.segment_length <= 0.0 {
            return Err(InvalidGeometryInput::InvalidSegmentLength(
                self.segment_length,
            ));
        }
        for (field, value) in [
            ("initial heading", self.initial_heading),
            ("angle increment", self.angle_increment),
        ] {
            if !value.is_finite() {
                return Err(InvalidGeometryInput::NonFiniteAngle { field, value });
            }
        }
        Ok(())
    }
}

/// Walks a symbol sequence with a pen and records the visited points.
#[derive(Clone, Debug)]
pub struct TurtleInterpreter {
    op_map: CommandTable,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter with the standard symbol bindings.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidGeometryInput`] before any interpretation if the
    /// segment length is not a finite positive number or an angle is not finite.
    pub fn new(config: TurtleConfig) -> Result<Self, InvalidGeometryInput> {
        config.validate()?;
        Ok(Self {
            op_map: CommandTable::standard(),
            config,
        })
    }

    /// Replaces the symbol bindings (builder pattern).
    pub fn with_commands(mut self, commands: CommandTable) -> Self {
        self.op_map = commands;
        self
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    pub fn commands(&self) -> &CommandTable {
        &self.op_map
    }

    /// Interprets `sequence` left to right and returns the resulting [`Trace`].
    ///
    /// The pen starts at the origin facing `initial_heading`; the trace starts
    /// with the origin.
    ///
    /// # Push / Pop
    ///
    /// `[` saves the pen state. `]` restores it and records the restored
    /// position, so disconnected branches show up as a jump back. A `]` with
    /// nothing saved is counted in [`Trace::unmatched_closes`] and otherwise
    /// ignored; states still saved at the end are counted in
    /// [`Trace::unmatched_opens`]. Neither condition aborts interpretation.
    pub fn interpret(&self, sequence: &str) -> Trace {
        let mut trace = Trace::new();
        let mut turtle = TurtleState::new(self.config.initial_heading);
        let mut stack: Vec<TurtleState> = Vec::new();

        for (index, symbol) in sequence.chars().enumerate() {
            match self.op_map.op(symbol) {
                TurtleOp::Draw => {
                    turtle.advance(self.config.segment_length);
                    trace.push(turtle.position);
                }
                TurtleOp::Turn(sign) => turtle.turn(self.config.angle_increment * sign),
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => match stack.pop() {
                    Some(saved) => {
                        turtle = saved;
                        trace.push(turtle.position);
                    }
                    None => {
                        trace.unmatched_closes += 1;
                        tracing::warn!(index, "unmatched `]` ignored");
                    }
                },
                TurtleOp::Ignore => {}
            }
        }

        trace.unmatched_opens = stack.len();
        if trace.unmatched_opens > 0 {
            tracing::warn!(
                unmatched_opens = trace.unmatched_opens,
                "sequence ended with unmatched `[`"
            );
        }
        tracing::debug!(points = trace.len(), "interpretation complete");

        trace
    }
}

/// Interprets `sequence` with the standard bindings.
///
/// `+` turns clockwise (`heading -= angle_increment`) and `-` turns
/// counter-clockwise. See [`TurtleInterpreter::interpret`].
pub fn interpret(
    sequence: &str,
    segment_length: f64,
    initial_heading: f64,
    angle_increment: f64,
) -> Result<Trace, InvalidGeometryInput> {
    let interpreter = TurtleInterpreter::new(TurtleConfig {
        segment_length,
        initial_heading,
        angle_increment,
    })?;
    Ok(interpreter.interpret(sequence))
}
