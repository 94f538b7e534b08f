//! Battle driver.
//!
//! [`Simulation::tick`] never removes a warrior on its own. This module is the
//! policy layer that does: it runs a match to completion and eliminates any
//! warrior that executes `DAT` or faults on a malformed word.

use std::fmt;

use tracing::info;

use crate::common::error::{DecodeError, SimError};
use crate::sim::simulator::{EndReason, Simulation, TickOutcome};

/// Why a warrior was eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// It executed `DAT`.
    Dat,
    /// It fetched a word that does not decode.
    Fault(DecodeError),
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dat => f.write_str("executed DAT"),
            Self::Fault(e) => write!(f, "fault: {e}"),
        }
    }
}

/// One entry of the elimination log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elimination {
    /// Program identifier of the eliminated warrior.
    pub id: u32,
    /// Address of the fatal instruction.
    pub addr: usize,
    /// Value of `elapsed` when the warrior was removed.
    pub tick: u64,
    /// What killed it.
    pub cause: Cause,
}

/// Final standing of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleResult {
    /// Exactly one warrior survived.
    Winner {
        /// The survivor's program identifier.
        id: u32,
    },
    /// Several warriors were still alive when the duration ran out.
    Tie {
        /// Survivor identifiers in scheduling order.
        survivors: Vec<u32>,
    },
    /// Every warrior was eliminated.
    NoSurvivors,
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { id } => write!(f, "warrior {id} wins"),
            Self::Tie { survivors } => {
                let ids: Vec<String> = survivors.iter().map(u32::to_string).collect();
                write!(f, "tie between {}", ids.join(", "))
            }
            Self::NoSurvivors => f.write_str("no survivors"),
        }
    }
}

/// Everything a finished match produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    /// Final standing.
    pub result: BattleResult,
    /// Eliminations in the order they happened.
    pub eliminations: Vec<Elimination>,
    /// Ticks executed.
    pub ticks: u64,
}

/// Runs `sim` to completion.
///
/// A match that starts with more than one warrior stops as soon as one is
/// left; a solo match runs until its warrior dies or the duration is spent.
///
/// # Returns
///
/// The [`BattleReport`], or a [`SimError`] other than a fault (faults are
/// turned into eliminations).
pub fn run(sim: &mut Simulation) -> Result<BattleReport, SimError> {
    let contenders = sim.alive_count();
    let mut eliminations = Vec::new();

    loop {
        let (handle, elimination) = match sim.tick() {
            Ok(TickOutcome::Executed { .. }) => continue,
            Ok(TickOutcome::Ended(reason)) => {
                if reason == EndReason::DurationReached {
                    info!(ticks = sim.elapsed(), "duration reached");
                }
                break;
            }
            Ok(TickOutcome::DatExecuted { warrior, id, addr }) => (
                warrior,
                Elimination {
                    id,
                    addr,
                    tick: sim.elapsed(),
                    cause: Cause::Dat,
                },
            ),
            Err(SimError::Fault {
                warrior,
                id,
                addr,
                source,
            }) => (
                warrior,
                Elimination {
                    id,
                    addr,
                    tick: sim.elapsed(),
                    cause: Cause::Fault(source),
                },
            ),
            Err(e) => return Err(e),
        };

        let _ = sim.remove_warrior(handle)?;
        info!(id = elimination.id, addr = elimination.addr, cause = %elimination.cause, "warrior eliminated");
        eliminations.push(elimination);

        if contenders > 1 && sim.alive_count() <= 1 {
            break;
        }
    }

    let survivors: Vec<u32> = sim.warriors().iter().map(|(_, w)| w.id).collect();
    let result = match survivors.as_slice() {
        [] => BattleResult::NoSurvivors,
        [id] => BattleResult::Winner { id: *id },
        _ => BattleResult::Tie { survivors },
    };
    info!(ticks = sim.elapsed(), %result, "battle over");

    Ok(BattleReport {
        result,
        eliminations,
        ticks: sim.elapsed(),
    })
}
