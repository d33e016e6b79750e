//! User-adjustable filter parameters.
//!
//! A `FilterParams` is rebuilt on every interaction and passed explicitly to
//! the view model; nothing about a previous interaction is remembered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::player::PlayerColumn;
use super::team::{Conference, TeamRecord};

crate::define_label_enum! {
    /// Conference selector, including the "both conferences" choice.
    #[derive(Default)]
    pub enum ConferenceFilter {
        #[default]
        Both => "Both",
        East => "East",
        West => "West",
    }
}

impl ConferenceFilter {
    pub fn matches(&self, conference: Conference) -> bool {
        match self {
            ConferenceFilter::Both => true,
            ConferenceFilter::East => conference == Conference::East,
            ConferenceFilter::West => conference == Conference::West,
        }
    }
}

impl From<Conference> for ConferenceFilter {
    fn from(conference: Conference) -> Self {
        match conference {
            Conference::East => ConferenceFilter::East,
            Conference::West => ConferenceFilter::West,
        }
    }
}

/// Complete set of parameters governing one dashboard view.
///
/// The default admits every team (no conference restriction, no PPG floor,
/// playoff teams and non-playoff teams alike) and selects no monthly teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    pub conference: ConferenceFilter,
    /// Minimum team points per game (inclusive)
    pub min_ppg: f64,
    pub playoff_only: bool,
    /// Teams shown in the monthly trends
    pub teams: BTreeSet<String>,
    /// Player column used to colour the player scatter
    pub color_by: PlayerColumn,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            conference: ConferenceFilter::Both,
            min_ppg: 0.0,
            playoff_only: false,
            teams: BTreeSet::new(),
            color_by: PlayerColumn::Ppg,
        }
    }
}

impl FilterParams {
    pub fn with_conference(mut self, conference: ConferenceFilter) -> Self {
        self.conference = conference;
        self
    }

    pub fn with_min_ppg(mut self, min_ppg: f64) -> Self {
        self.min_ppg = min_ppg;
        self
    }

    pub fn with_playoff_only(mut self, playoff_only: bool) -> Self {
        self.playoff_only = playoff_only;
        self
    }

    pub fn with_teams<I, S>(mut self, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.teams = teams.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color_by(mut self, color_by: PlayerColumn) -> Self {
        self.color_by = color_by;
        self
    }

    /// True when `team` passes the conference, PPG floor and playoff predicates.
    pub fn admits(&self, team: &TeamRecord) -> bool {
        self.conference.matches(team.conference)
            && team.ppg >= self.min_ppg
            && (!self.playoff_only || team.playoff)
    }

    /// Reject parameters no widget could produce.
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_ppg.is_finite() {
            return Err(format!("min_ppg must be a finite number, got {}", self.min_ppg));
        }
        Ok(())
    }
}
