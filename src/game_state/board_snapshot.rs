//! Caller-owned board snapshot.
//!
//! A `BoardSnapshot` holds a placement of pieces and the per-team occupancy
//! derived from it. It exists to feed the generator consistent occupancy
//! sets; turns, rights, and clocks are not tracked.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::location_set::LocationSet;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub location: BoardLocation,
    pub class: PieceClass,
    pub team: PieceTeam,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    squares: [Option<(PieceClass, PieceTeam)>; 64],
    occupancy_by_team: [LocationSet; 2],
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl BoardSnapshot {
    pub fn new_empty() -> Self {
        Self {
            squares: [None; 64],
            occupancy_by_team: [LocationSet::EMPTY; 2],
        }
    }

    /// Puts a piece on an empty square.
    pub fn place(
        &mut self,
        location: BoardLocation,
        class: PieceClass,
        team: PieceTeam,
    ) -> Result<(), ChessErrors> {
        let square = &mut self.squares[location.index()];
        if square.is_some() {
            return Err(ChessErrors::BoardLocationOccupied(location));
        }
        *square = Some((class, team));
        self.occupancy_by_team[team.index()].insert(location);
        Ok(())
    }

    /// Removes and returns whatever stands on `location`.
    pub fn remove(&mut self, location: BoardLocation) -> Option<(PieceClass, PieceTeam)> {
        let removed = self.squares[location.index()].take();
        if let Some((_, team)) = removed {
            self.occupancy_by_team[team.index()].remove(location);
        }
        removed
    }

    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<(PieceClass, PieceTeam)> {
        self.squares[location.index()]
    }

    #[inline]
    pub fn occupancy(&self, team: PieceTeam) -> LocationSet {
        self.occupancy_by_team[team.index()]
    }

    /// Pieces of `team`, in ascending square index (a1, b1, ..., h8).
    pub fn pieces(&self, team: PieceTeam) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.occupancy(team).iter().filter_map(move |location| {
            self.piece_at(location).map(|(class, team)| PlacedPiece {
                location,
                class,
                team,
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.occupancy(PieceTeam::White).len() + self.occupancy(PieceTeam::Black).len()
    }
}
