mod create;
mod exists;

use super::*;
use crate::model::league::CreateLeagueParam;
use entity::prelude::{League, LeagueLeaderboard};
use test_utils::{builder::TestBuilder, factory};
