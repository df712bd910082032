//! Running score table.

use serde::{Deserialize, Serialize};

use crate::match_runner::Winner;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub id: String,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points: f64,
}

impl Standing {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            wins: 0,
            losses: 0,
            draws: 0,
            points: 0.0,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    fn win(&mut self) {
        self.wins += 1;
        self.points += 1.0;
    }

    fn loss(&mut self) {
        self.losses += 1;
    }

    fn draw(&mut self) {
        self.draws += 1;
        self.points += 0.5;
    }
}

/// Standings in registration order. [`ranked`](Self::ranked) sorts them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standings {
    entries: Vec<Standing>,
}

impl Standings {
    /// One row per `(id, display name)` pair.
    pub fn new<'a>(participants: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: participants
                .into_iter()
                .map(|(id, name)| Standing::new(id, name))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Standing> {
        self.entries.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Standing> {
        self.entries.iter_mut().find(|s| s.id == id)
    }

    /// Credit one finished match. Unknown ids are ignored.
    pub fn record(&mut self, white: &str, black: &str, winner: Winner) {
        let (w, b): (fn(&mut Standing), fn(&mut Standing)) = match winner {
            Winner::White => (Standing::win, Standing::loss),
            Winner::Black => (Standing::loss, Standing::win),
            Winner::Draw => (Standing::draw, Standing::draw),
        };
        if let Some(s) = self.get_mut(white) {
            w(s);
        }
        if let Some(s) = self.get_mut(black) {
            b(s);
        }
    }

    pub fn total_points(&self) -> f64 {
        self.entries.iter().map(|s| s.points).sum()
    }

    /// Highest points first; equal points keep registration order.
    pub fn ranked(&self) -> Vec<Standing> {
        let mut rows = self.entries.clone();
        rows.sort_by(|a, b| b.points.total_cmp(&a.points));
        rows
    }

    /// Text table of the ranked standings.
    pub fn report(&self) -> String {
        format_table(&self.ranked())
    }
}

/// Renders rows as a fixed-width table, in the order given.
pub fn format_table(rows: &[Standing]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<20} {:>6} {:>6} {:>6} {:>7}\n",
        "#", "Strategy", "Wins", "Losses", "Draws", "Points"
    ));
    out.push_str(&"-".repeat(54));
    out.push('\n');
    for (i, s) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<20} {:>6} {:>6} {:>6} {:>7.1}\n",
            i + 1,
            s.name,
            s.wins,
            s.losses,
            s.draws,
            s.points
        ));
    }
    out
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
