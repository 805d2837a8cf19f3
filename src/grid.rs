//! The scheduling grid: weekdays and half-hour marks.

use std::fmt;

/// A clock value in minutes since midnight.
pub type Minutes = u16;

/// A weekday on which a course may be placed.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All weekdays, in scheduling order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn from_index(idx: usize) -> Day {
        Day::ALL[idx]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        })
    }
}

impl serde::Serialize for Day {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One of the half-hour marks between 08:00 and 21:00 inclusive.
///
/// # Examples
///
/// ```
/// use schedule_solver::Slot;
///
/// assert_eq!(Slot::all().count(), 27);
/// assert_eq!(Slot::all().next().unwrap().to_string(), "08:00");
/// assert_eq!(Slot::all().last().unwrap().to_string(), "21:00");
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Slot(u8);

impl Slot {
    /// The number of half-hour marks in a scheduling day.
    pub const COUNT: usize = 27;

    const FIRST: Minutes = 8 * 60;

    /// Iterate over every mark of the day, earliest first.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..Slot::COUNT as u8).map(Slot)
    }

    /// The clock value of this mark.
    pub fn minutes(self) -> Minutes {
        Slot::FIRST + 30 * self.0 as Minutes
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(idx: usize) -> Slot {
        debug_assert!(idx < Slot::COUNT);
        Slot(idx as u8)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let minutes = self.minutes();
        write!(f, "{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl serde::Serialize for Slot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single (day, slot) pair; the value a course variable takes.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Placement {
    pub day: Day,
    pub slot: Slot,
}

impl Placement {
    /// The size of the full day x slot grid.
    pub const COUNT: usize = Day::ALL.len() * Slot::COUNT;

    /// The dense day-major index of this placement. Ascending index order
    /// is the day-outer, slot-inner iteration order of the search.
    pub fn index(self) -> usize {
        self.day.index() * Slot::COUNT + self.slot.index()
    }

    pub(crate) fn from_index(idx: usize) -> Placement {
        Placement {
            day: Day::from_index(idx / Slot::COUNT),
            slot: Slot::from_index(idx % Slot::COUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_clock_values() {
        let slots: Vec<Slot> = Slot::all().collect();
        assert_eq!(slots.len(), Slot::COUNT);
        assert_eq!(slots[0].minutes(), 480);
        assert_eq!(slots[2].to_string(), "09:00");
        assert_eq!(slots[26].minutes(), 1260);
    }

    #[test]
    fn placement_index_roundtrip() {
        for idx in 0..Placement::COUNT {
            assert_eq!(Placement::from_index(idx).index(), idx);
        }

        let last = Placement::from_index(Placement::COUNT - 1);
        assert_eq!(last.day, Day::Friday);
        assert_eq!(last.slot.to_string(), "21:00");
    }
}
