//! Commodity tier classification.
//!
//! Planetary commodities are listed under four fixed market groups, one per refined tier.
//! A type's tier is found by walking its market group's parent chain until one of those roots
//! is reached. Types without a market group, or whose chain never reaches a tier root, are raw
//! materials (P0).

use dioxus_logger::tracing;

use crate::{model::tier::Tier, planetary::catalog::MarketTaxonomy};

/// Market group ID of Processed Materials (P1).
pub const P1_MARKET_GROUP_ID: i64 = 1334;
/// Market group ID of Refined Commodities (P2).
pub const P2_MARKET_GROUP_ID: i64 = 1335;
/// Market group ID of Specialized Commodities (P3).
pub const P3_MARKET_GROUP_ID: i64 = 1336;
/// Market group ID of Advanced Commodities (P4).
pub const P4_MARKET_GROUP_ID: i64 = 1337;

/// Maximum number of market groups visited while walking a parent chain.
///
/// Bounds the walk so a cyclic or malformed taxonomy terminates.
pub const MAX_MARKET_GROUP_DEPTH: usize = 16;

/// Maps a tier root market group to its tier.
pub fn tier_of_root_group(market_group_id: i64) -> Option<Tier> {
    match market_group_id {
        P1_MARKET_GROUP_ID => Some(Tier::P1),
        P2_MARKET_GROUP_ID => Some(Tier::P2),
        P3_MARKET_GROUP_ID => Some(Tier::P3),
        P4_MARKET_GROUP_ID => Some(Tier::P4),
        _ => None,
    }
}

pub struct TierClassifier<'a, T: ?Sized> {
    taxonomy: &'a T,
}

impl<'a, T: MarketTaxonomy + ?Sized> TierClassifier<'a, T> {
    /// Creates a new instance of [`TierClassifier`]
    pub fn new(taxonomy: &'a T) -> Self {
        Self { taxonomy }
    }

    /// Determines the commodity tier of a type.
    ///
    /// The walk starts at the type's own market group (inclusive) and follows parents until a
    /// tier root matches or the chain ends. Never fails: anything unknown is [`Tier::P0`].
    ///
    /// # Arguments
    /// - `type_id` - EVE Online type ID of the commodity
    ///
    /// # Returns
    /// - `Tier::P1`..`Tier::P4` - The type sits under the matching tier root
    /// - `Tier::P0` - No market group, a chain ending at an unrelated root, or a chain longer
    ///   than [`MAX_MARKET_GROUP_DEPTH`]
    pub fn classify(&self, type_id: i64) -> Tier {
        let Some(mut group_id) = self.taxonomy.market_group_of(type_id) else {
            return Tier::P0;
        };

        for _ in 0..MAX_MARKET_GROUP_DEPTH {
            if let Some(tier) = tier_of_root_group(group_id) {
                return tier;
            }

            match self.taxonomy.parent_group(group_id) {
                Some(parent_id) => group_id = parent_id,
                None => return Tier::P0,
            }
        }

        tracing::warn!(
            "Market group chain of type {} exceeded {} hops, classifying as P0",
            type_id,
            MAX_MARKET_GROUP_DEPTH
        );

        Tier::P0
    }
}
