
use pi_ledger_test_utils::prelude::*;

use crate::server::data::{planetary::ColonyRepository, sde::SdeRepository};
