use crate::events::{FormEvent, FormField};

/// Aggregate state of the booking form.
///
/// Holds values only; it never rejects input. Numeric fields parse
/// leniently (unparsable input stores 0) so bad input surfaces at
/// validation time instead of here. The shoe list is decoupled from the
/// player count on purpose: changing `players` never resizes `shoes`,
/// and a mismatch is a legal transient state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    date: String,
    time: String,
    players: u32,
    lanes: u32,
    shoes: Vec<String>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one form event. The only fallible case is `SetShoe` with an
    /// index past the end of the list, which is a caller bug rather than
    /// a user-facing condition.
    pub fn apply(&mut self, event: FormEvent) -> Result<(), FormError> {
        match event {
            FormEvent::Set(field, value) => {
                match field {
                    FormField::Date => self.date = value,
                    FormField::Time => self.time = value,
                    FormField::Players => self.players = parse_count(&value),
                    FormField::Lanes => self.lanes = parse_count(&value),
                }
                Ok(())
            }
            FormEvent::AddShoe => {
                self.shoes.push(String::new());
                Ok(())
            }
            FormEvent::RemoveShoe => {
                self.shoes.pop();
                Ok(())
            }
            FormEvent::SetShoe(index, value) => {
                let len = self.shoes.len();
                let slot = self
                    .shoes
                    .get_mut(index)
                    .ok_or(FormError::IndexOutOfRange { index, len })?;
                *slot = value;
                Ok(())
            }
        }
    }

    /// Owned, immutable view of the form for validation and submission.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            date: self.date.clone(),
            time: self.time.clone(),
            players: self.players,
            lanes: self.lanes,
            shoes: self.shoes.clone(),
        }
    }

    pub fn shoe_count(&self) -> usize {
        self.shoes.len()
    }
}

fn parse_count(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

/// Point-in-time copy of every form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub date: String,
    pub time: String,
    pub players: u32,
    pub lanes: u32,
    pub shoes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Shoe entry {index} is out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}
