use super::*;
use crate::{
    data::score::ScoreStore,
    model::score::PlayerScore,
    service::{command::CommandRouter, leaderboard, messages},
};

mod ignored;
