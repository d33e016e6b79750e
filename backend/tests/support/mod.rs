#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use league_dashboard::models::{Conference, Dataset, MonthlyRecord, Month, TeamRecord};
use league_dashboard::parsing::embedded_dataset;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to the process
/// environment across tests in the same binary.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// The season snapshot compiled into the crate.
pub fn embedded() -> Dataset {
    embedded_dataset().expect("embedded dataset must load")
}

pub fn team(name: &str, conference: Conference, wins: u32, losses: u32, ppg: f64) -> TeamRecord {
    TeamRecord {
        name: name.to_string(),
        conference,
        wins,
        losses,
        ppg,
        opp_ppg: 110.0,
        fg_pct: 0.47,
        three_pct: 0.36,
        rebounds: 44.0,
        assists: 26.0,
        playoff: wins >= 41,
    }
}

pub fn monthly(team: &str, month: Month, win_pct: f64) -> MonthlyRecord {
    MonthlyRecord {
        team: team.to_string(),
        month,
        win_pct,
        ppg: 115.0,
    }
}

/// Boston 61-21 and OKC 68-14 with their season scoring averages.
pub fn boston_and_okc() -> Vec<TeamRecord> {
    vec![
        team("Boston", Conference::East, 61, 21, 116.3),
        team("OKC", Conference::West, 68, 14, 120.5),
    ]
}
