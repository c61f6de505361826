//! Payer balances and settlement
//!
//! Every payer owes the same fair share of the household total. A payer's
//! balance is what they paid minus that share: positive means they are owed
//! money, negative means they owe.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::{Expense, Money, Payer, PayerId};

/// Balances within this many minor units of zero count as settled
pub const SETTLED_TOLERANCE: Money = Money::from_cents(1);

/// How the household total is divided into fair shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Every payer gets `round(total / payers)`. The shares can miss the
    /// total by up to `payers - 1` minor units.
    #[default]
    #[value(alias = "equal")]
    RoundedEqual,
    /// Shares differ by at most one minor unit and always add up to the
    /// total; leftover units go to payers in list order.
    #[value(alias = "exact")]
    LargestRemainder,
}

impl SplitPolicy {
    /// Fair share for each of `payer_count` payers, in payer order
    pub fn shares(self, total: Money, payer_count: usize) -> Vec<Money> {
        if payer_count == 0 {
            return Vec::new();
        }
        match self {
            Self::RoundedEqual => vec![total.rounded_share(payer_count); payer_count],
            Self::LargestRemainder => {
                let count = payer_count as i64;
                let base = total.cents().div_euclid(count);
                let remainder = total.cents().rem_euclid(count) as usize;
                (0..payer_count)
                    .map(|i| Money::from_cents(base + i64::from(i < remainder)))
                    .collect()
            }
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundedEqual => write!(f, "rounded-equal"),
            Self::LargestRemainder => write!(f, "largest-remainder"),
        }
    }
}

/// What one payer paid against their fair share
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayerBalance {
    pub payer_id: PayerId,
    pub payer_name: String,
    pub paid: Money,
    pub share: Money,
    /// `paid - share`
    pub balance: Money,
}

/// The single transfer that squares up a two-person household
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub from: PayerId,
    pub to: PayerId,
    pub amount: Money,
}

/// Balances under the default rounded equal split
pub fn payer_balance(expenses: &[Expense], payers: &[Payer]) -> Vec<PayerBalance> {
    payer_balance_with(expenses, payers, SplitPolicy::default())
}

/// Balances for every payer, in payer order
///
/// The fair share is taken from the total of all `expenses`, including any
/// paid by someone outside `payers`. Returns an empty list when there are no
/// payers.
pub fn payer_balance_with(
    expenses: &[Expense],
    payers: &[Payer],
    policy: SplitPolicy,
) -> Vec<PayerBalance> {
    if payers.is_empty() {
        return Vec::new();
    }

    let mut paid: HashMap<PayerId, Money> = HashMap::new();
    let mut grand_total = Money::zero();
    for expense in expenses {
        *paid.entry(expense.payer_id).or_default() += expense.amount;
        grand_total += expense.amount;
    }

    payers
        .iter()
        .zip(policy.shares(grand_total, payers.len()))
        .map(|(payer, share)| {
            let paid = paid.get(&payer.id).copied().unwrap_or_default();
            PayerBalance {
                payer_id: payer.id,
                payer_name: payer.display_name.clone(),
                paid,
                share,
                balance: paid - share,
            }
        })
        .collect()
}

/// Who pays whom to settle up
///
/// Only defined for exactly two payers; any other count yields `None`. Also
/// `None` when both balances are within `SETTLED_TOLERANCE` of zero.
/// Otherwise the payer with the lower balance pays the other the absolute
/// value of their balance.
pub fn settlement(balances: &[PayerBalance]) -> Option<Settlement> {
    let [first, second] = balances else {
        return None;
    };

    if first.balance.abs() <= SETTLED_TOLERANCE && second.balance.abs() <= SETTLED_TOLERANCE {
        return None;
    }

    let (debtor, creditor) = if first.balance <= second.balance {
        (first, second)
    } else {
        (second, first)
    };

    Some(Settlement {
        from: debtor.payer_id,
        to: creditor.payer_id,
        amount: debtor.balance.abs(),
    })
}
