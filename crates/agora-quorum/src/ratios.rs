//! Ratio engine
//!
//! Computes the quorum/support percentages for a proposal from exact
//! decimal arithmetic over 18-decimal fixed-point chain values. Native
//! floats would drift at wei scale, so everything stays in [`Decimal`]
//! until the panel formats it.
//!
//! Undefined-ratio policy: a ratio whose denominator is zero (total voting
//! power not yet meaningful, or no votes cast at all) or whose percentage
//! exceeds the representable decimal range is `None`, an "undefined ratio"
//! sentinel. Never a panic, never a silent zero.

use agora_common::{Proposal, RATIO_DP, TURNOUT_DP};
use rust_decimal::{Decimal, RoundingStrategy};

/// The five outputs of the ratio engine
///
/// All percentages are pre-rounded: `support_needed`, `vp_needed` and
/// `for_percent` to 9 fractional digits, `voted_percent` to 2. Display
/// rounding happens downstream on top of these.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct QuorumRatios {
    /// Minimum for-vote percentage of votes cast required to pass
    pub support_needed: Option<Decimal>,
    /// Percentage of total voting power required for quorum
    pub vp_needed: Option<Decimal>,
    /// Total voting power cast (for + against), wei-scale, exact
    pub votes_cast: Decimal,
    /// For-votes as a percentage of votes cast
    pub for_percent: Option<Decimal>,
    /// Votes cast as a percentage of total voting power
    pub voted_percent: Option<Decimal>,
}

/// `(numerator / denominator) * 100`, rounded half-away-from-zero to
/// exactly `dp` fractional digits; `None` when the denominator is zero or
/// the percentage overflows the decimal range.
fn percent_of(numerator: Decimal, denominator: Decimal, dp: u32) -> Option<Decimal> {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| {
            let mut pct =
                pct.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            // Pad trailing zeros so the string form always carries dp digits
            pct.rescale(dp);
            pct
        })
}

/// Compute all quorum ratios for a proposal at a given total voting power.
///
/// Pure: identical inputs yield identical outputs, and the proposal is
/// never mutated.
pub fn compute_ratios(proposal: &Proposal, total_voting_power: Decimal) -> QuorumRatios {
    let votes_cast = proposal.for_votes + proposal.against_votes;

    QuorumRatios {
        support_needed: percent_of(proposal.majority_percentage, total_voting_power, RATIO_DP),
        vp_needed: percent_of(proposal.quorum, total_voting_power, RATIO_DP),
        votes_cast,
        for_percent: percent_of(proposal.for_votes, votes_cast, RATIO_DP),
        voted_percent: percent_of(votes_cast, total_voting_power, TURNOUT_DP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wei_proposal() -> Proposal {
        // Wei-scale values: 18 fractional digits of fixed point
        Proposal::new(
            4510000,
            1612345678,
            dec!(725000000000000000000000),   // 725k tokens worth of support
            dec!(1450000000000000000000000),  // 1.45M tokens quorum
        )
        .with_for_votes(dec!(900000000000000000000000))
        .with_against_votes(dec!(100000000000000000000000))
    }

    #[test]
    fn test_votes_cast_is_exact_sum() {
        let proposal = wei_proposal();
        let ratios = compute_ratios(&proposal, dec!(2900000000000000000000000));
        assert_eq!(
            ratios.votes_cast,
            proposal.for_votes + proposal.against_votes
        );
    }

    #[test]
    fn test_wei_scale_percentages() {
        let ratios = compute_ratios(&wei_proposal(), dec!(2900000000000000000000000));

        // 725k / 2.9M * 100 = 25%, padded to 9 fractional digits
        assert_eq!(ratios.support_needed, Some(dec!(25.000000000)));
        assert_eq!(
            ratios.support_needed.unwrap().to_string(),
            "25.000000000"
        );
        // 1.45M / 2.9M * 100 = 50%
        assert_eq!(ratios.vp_needed, Some(dec!(50.000000000)));
        // 900k / 1M * 100 = 90%
        assert_eq!(ratios.for_percent, Some(dec!(90.000000000)));
        // 1M / 2.9M * 100 = 34.48%
        assert_eq!(ratios.voted_percent, Some(dec!(34.48)));
    }

    #[test]
    fn test_rounding_digits() {
        let proposal = Proposal::new(1, 1, dec!(1), dec!(1))
            .with_for_votes(dec!(1))
            .with_against_votes(dec!(2));
        let ratios = compute_ratios(&proposal, dec!(3));

        // 1/3 * 100 = 33.333... kept at exactly 9 fractional digits
        assert_eq!(ratios.support_needed, Some(dec!(33.333333333)));
        assert_eq!(ratios.support_needed.unwrap().scale(), 9);
        assert_eq!(ratios.for_percent, Some(dec!(33.333333333)));
        // Turnout is computed directly to 2 fractional digits
        assert_eq!(ratios.voted_percent, Some(dec!(100.00)));
        assert_eq!(ratios.voted_percent.unwrap().scale(), 2);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 0.125% rounded to 2 digits is a midpoint; toFixed rounds away from zero
        assert_eq!(percent_of(dec!(1.25), dec!(1000), 2), Some(dec!(0.13)));
        assert_eq!(percent_of(dec!(-1.25), dec!(1000), 2), Some(dec!(-0.13)));
    }

    #[test]
    fn test_zero_total_voting_power_is_defined() {
        let ratios = compute_ratios(&wei_proposal(), Decimal::ZERO);

        assert_eq!(ratios.support_needed, None);
        assert_eq!(ratios.vp_needed, None);
        assert_eq!(ratios.voted_percent, None);
        // for_percent divides by votes cast, not total voting power
        assert_eq!(ratios.for_percent, Some(dec!(90.000000000)));
        // The exact sum is still defined
        assert_eq!(ratios.votes_cast, dec!(1000000000000000000000000));
    }

    #[test]
    fn test_extreme_ratio_is_undefined_not_a_panic() {
        // A near-max-mantissa threshold against a 1-wei total voting power:
        // the percentage exceeds the decimal range and must collapse into
        // the sentinel instead of aborting
        let proposal = Proposal::new(
            1,
            1,
            dec!(79000000000000000000000000000),
            dec!(79000000000000000000000000000),
        );
        let ratios = compute_ratios(&proposal, dec!(1));

        assert_eq!(ratios.support_needed, None);
        assert_eq!(ratios.vp_needed, None);
        assert_eq!(ratios.votes_cast, Decimal::ZERO);
    }

    #[test]
    fn test_zero_votes_cast_is_defined() {
        let proposal = Proposal::new(1, 1, dec!(50), dec!(500));
        let ratios = compute_ratios(&proposal, dec!(1000));

        assert_eq!(ratios.votes_cast, Decimal::ZERO);
        assert_eq!(ratios.for_percent, None);
        assert_eq!(ratios.voted_percent, Some(dec!(0.00)));
    }

    #[test]
    fn test_idempotent() {
        let proposal = wei_proposal();
        let tvp = dec!(2900000000000000000000000);
        let first = compute_ratios(&proposal, tvp);
        let second = compute_ratios(&proposal, tvp);
        assert_eq!(first, second);
        // Bit-identical string renderings, not just numeric equality
        assert_eq!(
            first.support_needed.unwrap().to_string(),
            second.support_needed.unwrap().to_string()
        );
    }
}
