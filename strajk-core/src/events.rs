use serde::{Deserialize, Serialize};

/// Scalar fields of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Date,
    Time,
    Players,
    Lanes,
}

/// One user interaction with the form.
///
/// Input widgets map onto these directly: a labeled input dispatches
/// `Set`, the shoe-list "+"/"-" affordances dispatch `AddShoe` and
/// `RemoveShoe`, and each shoe input dispatches `SetShoe` with its index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormEvent {
    Set(FormField, String),
    AddShoe,
    RemoveShoe,
    SetShoe(usize, String),
}
