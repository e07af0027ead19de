//! Closed sets of coach roles and squads offered by the add-player prompts.

use std::fmt;

/// A value picked from a numbered sub-menu.
///
/// `defaulted` is set when the number was out of range and choice 1 was
/// substituted, so the caller can tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Selection<T> {
    fn picked(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

/// Coaching staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoachRole {
    Head,
    Assistant,
    Scrum,
}

impl CoachRole {
    pub const ALL: [CoachRole; 3] = [CoachRole::Head, CoachRole::Assistant, CoachRole::Scrum];

    /// Map a 1-based menu choice to a role, falling back to `Head`.
    pub fn from_choice(choice: i64) -> Selection<Self> {
        match choice {
            1 => Selection::picked(CoachRole::Head),
            2 => Selection::picked(CoachRole::Assistant),
            3 => Selection::picked(CoachRole::Scrum),
            _ => Selection::fallback(CoachRole::Head),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CoachRole::Head => "Head Coach",
            CoachRole::Assistant => "Assistant Coach",
            CoachRole::Scrum => "Scrum Coach",
        }
    }
}

impl fmt::Display for CoachRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Club squads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Squad {
    A,
    B,
    Under13,
}

impl Squad {
    pub const ALL: [Squad; 3] = [Squad::A, Squad::B, Squad::Under13];

    /// Map a 1-based menu choice to a squad, falling back to `A`.
    pub fn from_choice(choice: i64) -> Selection<Self> {
        match choice {
            1 => Selection::picked(Squad::A),
            2 => Selection::picked(Squad::B),
            3 => Selection::picked(Squad::Under13),
            _ => Selection::fallback(Squad::A),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Squad::A => "A Squad",
            Squad::B => "B Squad",
            Squad::Under13 => "Under-13 Squad",
        }
    }
}

impl fmt::Display for Squad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
