//! Deterministic facts derived from a final score line.
//!
//! The resolution prompt hands these to the model precomputed, so the
//! settlement arithmetic never depends on the model adding up goals.

use std::fmt::Write as _;

use super::fixture::Fixture;

/// Which side of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Facts about a fixture's final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreFacts {
    pub home_goals: u32,
    pub away_goals: u32,
}

impl ScoreFacts {
    #[must_use]
    pub const fn new(home_goals: u32, away_goals: u32) -> Self {
        Self {
            home_goals,
            away_goals,
        }
    }

    #[must_use]
    pub const fn from_fixture(fixture: &Fixture) -> Self {
        Self::new(fixture.home_score, fixture.away_score)
    }

    #[must_use]
    pub const fn total_goals(&self) -> u32 {
        self.home_goals + self.away_goals
    }

    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.home_goals == self.away_goals
    }

    /// The side with strictly more goals, `None` on a draw.
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        if self.home_goals > self.away_goals {
            Some(Side::Home)
        } else if self.away_goals > self.home_goals {
            Some(Side::Away)
        } else {
            None
        }
    }

    #[must_use]
    pub fn won(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    #[must_use]
    pub fn lost(&self, side: Side) -> bool {
        matches!(self.winner(), Some(w) if w != side)
    }

    /// A side keeps a clean sheet when its opponent scored zero.
    #[must_use]
    pub const fn clean_sheet(&self, side: Side) -> bool {
        match side {
            Side::Home => self.away_goals == 0,
            Side::Away => self.home_goals == 0,
        }
    }

    #[must_use]
    pub const fn both_teams_scored(&self) -> bool {
        self.home_goals >= 1 && self.away_goals >= 1
    }

    /// "Over X.5": total goals strictly greater than X.
    #[must_use]
    pub const fn over(&self, x: u32) -> bool {
        self.total_goals() > x
    }

    /// "Under X.5": total goals strictly less than X.
    #[must_use]
    pub const fn under(&self, x: u32) -> bool {
        self.total_goals() < x
    }

    /// Render the facts as prompt lines naming both teams.
    ///
    /// `lines` are the X values of any "X.5" goal lines the market mentions.
    #[must_use]
    pub fn describe(&self, home: &str, away: &str, lines: &[u32]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "- TOTAL GOALS: {}", self.total_goals());
        let result = match self.winner() {
            Some(Side::Home) => format!("{home} WON, {away} LOST"),
            Some(Side::Away) => format!("{away} WON, {home} LOST"),
            None => "DRAW".to_string(),
        };
        let _ = writeln!(out, "- RESULT: {result}");
        let _ = writeln!(
            out,
            "- {home} CLEAN SHEET: {}",
            yes_no(self.clean_sheet(Side::Home))
        );
        let _ = writeln!(
            out,
            "- {away} CLEAN SHEET: {}",
            yes_no(self.clean_sheet(Side::Away))
        );
        let _ = writeln!(
            out,
            "- BOTH TEAMS SCORED: {}",
            yes_no(self.both_teams_scored())
        );
        for &x in lines {
            let _ = writeln!(out, "- OVER {x}.5: {}", yes_no(self.over(x)));
            let _ = writeln!(out, "- UNDER {x}.5: {}", yes_no(self.under(x)));
        }
        out
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

/// Find the X of every "X.5" goal line mentioned in `texts`.
///
/// Returns each X once, in ascending order.
#[must_use]
pub fn goal_lines<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<u32> {
    let mut lines: Vec<u32> = texts
        .into_iter()
        .flat_map(|text| {
            text.split(|c: char| !(c.is_ascii_digit() || c == '.'))
                .filter_map(|token| token.trim_end_matches('.').strip_suffix(".5"))
                .filter_map(|whole| whole.parse::<u32>().ok())
                .collect::<Vec<_>>()
        })
        .collect();
    lines.sort_unstable();
    lines.dedup();
    lines
}
