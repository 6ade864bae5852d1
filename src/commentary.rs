//! End-of-run commentary
//!
//! Given the final distance and coin count, picks a title/comment pair from
//! a fixed distance-bracket table, randomizing within the bracket's pools.
//! The numeric stats never depend on this module; if a summary cannot be
//! produced the host falls back to `RunSummary::fallback`.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

/// Title and comment shown on the game-over screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub title: String,
    pub comment: String,
}

impl RunSummary {
    /// Fixed degradation pair used when summary generation is unavailable
    pub fn fallback() -> Self {
        Self {
            title: "A Run To Remember".to_string(),
            comment: "The dog is still out there. Run again.".to_string(),
        }
    }
}

struct Pool {
    titles: [&'static str; 5],
    comments: [&'static str; 5],
}

/// Distance < 100: barely got going
static PANIC: Pool = Pool {
    titles: [
        "Tripped At The Start",
        "One Bark And Down",
        "Running On Hope",
        "Caught Before Warm-Up",
        "Startled Sprinter",
    ],
    comments: [
        "One bark and the legs just stopped working.",
        "Chased down before knowing what happened.",
        "Pure panic. Even the dog looked unimpressed.",
        "Heart at 200 before the feet got warm.",
        "First life lesson: see dog, run faster.",
    ],
};

/// Distance < 500: a proper chase
static CHASE: Pool = Pool {
    titles: [
        "Chased Flat Out",
        "Running For Dear Life",
        "Dog On The Heels",
        "A Narrow Escape",
        "Dodging On Instinct",
    ],
    comments: [
        "Dog behind, wind ahead.",
        "Not a pretty run, but an honest one.",
        "One hair-raising dodge after another.",
        "Still clearing obstacles mid-chase. Not bad.",
        "Legs shaking, brain somehow still working.",
    ],
};

/// Distance < 1000: real skill showing
static SKILL: Pool = Pool {
    titles: [
        "Master Of The Dodge",
        "The Hunted Runner",
        "Running On Instinct",
        "Even The Dog Is Tired",
        "Escaped By A Whisker",
    ],
    comments: [
        "The dog got more tired than you did.",
        "Slipping past hazards like fear was never a factor.",
        "Ran until the dog was the one panting.",
        "Survival instinct fully awakened.",
        "The dog chased. You glided.",
    ],
};

/// Distance >= 1000: the stuff of legend
static LEGEND: Pool = Pool {
    titles: [
        "Legend Of The Chase",
        "Too Fast For The Dog",
        "Ghost Of The Back Roads",
        "Patron Saint Of Escapes",
        "The Dog Gave Up",
    ],
    comments: [
        "Chased from dawn to dusk, never bitten.",
        "At this speed the dog could only watch.",
        "That was not running. That was survival.",
        "The dog quit. You kept going.",
        "Legend says the dog is still looking for you.",
    ],
};

fn bracket(distance: u64) -> &'static Pool {
    if distance < 100 {
        &PANIC
    } else if distance < 500 {
        &CHASE
    } else if distance < 1000 {
        &SKILL
    } else {
        &LEGEND
    }
}

/// Produce a run summary for the final stats.
///
/// Bracket selection is deterministic in `distance`; the pick within the
/// bracket uses the supplied RNG. Coins currently only flavor the log line.
pub fn summarize(distance: u64, coins: u32, rng: &mut Pcg32) -> RunSummary {
    let pool = bracket(distance);
    let title = pool.titles[rng.random_range(0..pool.titles.len())];
    let comment = pool.comments[rng.random_range(0..pool.comments.len())];
    log::debug!("run summary for distance={distance} coins={coins}: {title}");
    RunSummary {
        title: title.to_string(),
        comment: comment.to_string(),
    }
}
