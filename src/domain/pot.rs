//! Savings pots: prioritized allocation buckets funded by the forecaster.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, prioritized bucket with a target amount and a funding cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pot {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_balance: f64,
    /// Lower values are funded first.
    pub priority: i32,
    pub frequency: ContributionFrequency,
    #[serde(default)]
    pub kind: PotKind,
}

impl Pot {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        priority: i32,
        frequency: ContributionFrequency,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_balance: 0.0,
            priority,
            frequency,
            kind: PotKind::default(),
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.current_balance = balance;
        self
    }

    pub fn with_kind(mut self, kind: PotKind) -> Self {
        self.kind = kind;
        self
    }

    /// Amount still missing before the pot reaches its target.
    pub fn remaining(&self) -> f64 {
        self.target_amount - self.current_balance
    }

    pub fn is_funded(&self) -> bool {
        self.remaining() <= 0.0
    }
}

/// How often a pot receives automatic contributions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ContributionFrequency {
    Daily,
    Weekly,
    Monthly,
    BiWeekly,
    Flexible,
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContributionFrequency::Daily => "daily",
            ContributionFrequency::Weekly => "weekly",
            ContributionFrequency::Monthly => "monthly",
            ContributionFrequency::BiWeekly => "bi-weekly",
            ContributionFrequency::Flexible => "flexible",
        };
        f.write_str(label)
    }
}

/// UI classification tag. Never consulted by the allocation rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PotKind {
    Essential,
    #[default]
    Savings,
    Debt,
    Buffer,
    NextMonth,
}

impl fmt::Display for PotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PotKind::Essential => "essential",
            PotKind::Savings => "savings",
            PotKind::Debt => "debt",
            PotKind::Buffer => "buffer",
            PotKind::NextMonth => "next-month",
        };
        f.write_str(label)
    }
}
