use crate::form::FormSnapshot;

/// Fixed capacity of a bowling lane.
pub const PLAYERS_PER_LANE: u32 = 4;

/// Check a snapshot against the submission rules. Rules are evaluated in
/// order and the first failure wins; the Display message of the error is
/// what the user sees.
pub fn validate(snapshot: &FormSnapshot) -> Result<(), ValidationError> {
    let complete = !snapshot.date.is_empty()
        && !snapshot.time.is_empty()
        && snapshot.players > 0
        && snapshot.lanes > 0
        && snapshot.shoes.len() == snapshot.players as usize
        && snapshot.shoes.iter().all(|size| !size.is_empty());

    if !complete {
        return Err(ValidationError::IncompleteForm);
    }

    // Saturating: lane counts near u32::MAX must not overflow the capacity
    if snapshot.players > snapshot.lanes.saturating_mul(PLAYERS_PER_LANE) {
        return Err(ValidationError::LaneCapacityExceeded {
            players: snapshot.players,
            lanes: snapshot.lanes,
        });
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields must be filled in and every player needs a shoe size")]
    IncompleteForm,

    #[error(
        "Max {max} players per lane ({players} players on {lanes} lanes)",
        max = PLAYERS_PER_LANE
    )]
    LaneCapacityExceeded { players: u32, lanes: u32 },
}
