//! Launch workflow sequencing
//!
//! A launch is an explicit, ordered selection of steps. The dependency
//! order (mint before account, account before supply and transfers,
//! create-metadata before update-metadata) is validated up front and
//! violations come back as typed errors instead of failing half-way
//! through a run.

use std::fmt;
use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

use crate::error::{LaunchError, LaunchResult};

/// A single step of the launch workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateMint,
    CreateTokenAccount,
    MintSupply,
    CreateMetadata,
    UpdateMetadata,
    Transfer,
}

impl Step {
    /// All steps in canonical dependency order
    pub const ALL: [Step; 6] = [
        Step::CreateMint,
        Step::CreateTokenAccount,
        Step::MintSupply,
        Step::CreateMetadata,
        Step::UpdateMetadata,
        Step::Transfer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Step::CreateMint => "create-mint",
            Step::CreateTokenAccount => "create-account",
            Step::MintSupply => "mint",
            Step::CreateMetadata => "create-metadata",
            Step::UpdateMetadata => "update-metadata",
            Step::Transfer => "transfer",
        }
    }

    fn rank(self) -> usize {
        match self {
            Step::CreateMint => 0,
            Step::CreateTokenAccount => 1,
            Step::MintSupply => 2,
            Step::CreateMetadata => 3,
            Step::UpdateMetadata => 4,
            Step::Transfer => 5,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create-mint" => Ok(Step::CreateMint),
            "create-account" => Ok(Step::CreateTokenAccount),
            "mint" => Ok(Step::MintSupply),
            "create-metadata" => Ok(Step::CreateMetadata),
            "update-metadata" => Ok(Step::UpdateMetadata),
            "transfer" => Ok(Step::Transfer),
            other => Err(LaunchError::InvalidParameters(format!(
                "unknown step: {}",
                other
            ))),
        }
    }
}

/// An ordered selection of workflow steps plus any state carried over
/// from a previous run
#[derive(Debug, Clone, Default)]
pub struct LaunchPlan {
    pub steps: Vec<Step>,
    /// Mint from a previous run, for plans that skip create-mint
    pub existing_mint: Option<Pubkey>,
    /// Token account from a previous run, for plans that skip create-account
    pub existing_token_account: Option<Pubkey>,
}

impl LaunchPlan {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            ..Default::default()
        }
    }

    /// The default end-to-end launch: mint, account, supply, metadata
    pub fn full_launch() -> Self {
        Self::new(vec![
            Step::CreateMint,
            Step::CreateTokenAccount,
            Step::MintSupply,
            Step::CreateMetadata,
        ])
    }

    pub fn with_existing_mint(mut self, mint: Pubkey) -> Self {
        self.existing_mint = Some(mint);
        self
    }

    pub fn with_existing_token_account(mut self, account: Pubkey) -> Self {
        self.existing_token_account = Some(account);
        self
    }

    /// Check the plan respects the workflow dependency order.
    ///
    /// Chain-state preconditions (metadata existing or not) are checked at
    /// execution time by the services; this only catches plans that could
    /// never succeed.
    pub fn validate(&self) -> LaunchResult<()> {
        if self.steps.is_empty() {
            return Err(LaunchError::InvalidParameters(
                "no steps selected".to_string(),
            ));
        }

        let mut seen = Vec::with_capacity(self.steps.len());
        for &step in &self.steps {
            if seen.contains(&step) {
                return Err(LaunchError::InvalidParameters(format!(
                    "duplicate step: {}",
                    step
                )));
            }
            seen.push(step);
        }

        for pair in self.steps.windows(2) {
            if pair[1].rank() < pair[0].rank() {
                return Err(LaunchError::StepOrder {
                    step: pair[0],
                    requires: pair[1],
                });
            }
        }

        let has = |s: Step| self.steps.contains(&s);
        let mint_available = has(Step::CreateMint) || self.existing_mint.is_some();
        for &step in &self.steps {
            if step != Step::CreateMint && !mint_available {
                return Err(LaunchError::MissingMint { step });
            }
        }

        let account_available =
            has(Step::CreateTokenAccount) || self.existing_token_account.is_some();
        for step in [Step::MintSupply, Step::Transfer] {
            if has(step) && !account_available {
                return Err(LaunchError::StepOrder {
                    step,
                    requires: Step::CreateTokenAccount,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_launch_plan_is_valid() {
        assert!(LaunchPlan::full_launch().validate().is_ok());
    }

    #[test]
    fn canonical_order_of_all_steps_is_valid() {
        // update-metadata right after create-metadata is redundant but legal
        let plan = LaunchPlan::new(Step::ALL.to_vec());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn empty_plan_is_rejected() {
        let plan = LaunchPlan::new(vec![]);
        assert!(matches!(
            plan.validate(),
            Err(LaunchError::InvalidParameters(_))
        ));
    }

    #[test]
    fn supply_before_mint_creation_is_rejected() {
        let plan = LaunchPlan::new(vec![Step::MintSupply, Step::CreateMint]);
        assert!(matches!(
            plan.validate(),
            Err(LaunchError::StepOrder {
                step: Step::MintSupply,
                requires: Step::CreateMint,
            })
        ));
    }

    #[test]
    fn duplicate_steps_are_rejected() {
        let plan = LaunchPlan::new(vec![Step::CreateMint, Step::CreateMint]);
        assert!(matches!(
            plan.validate(),
            Err(LaunchError::InvalidParameters(_))
        ));
    }

    #[test]
    fn steps_without_a_mint_are_rejected() {
        let plan = LaunchPlan::new(vec![Step::CreateTokenAccount]);
        assert!(matches!(
            plan.validate(),
            Err(LaunchError::MissingMint {
                step: Step::CreateTokenAccount,
            })
        ));
    }

    #[test]
    fn existing_mint_satisfies_the_mint_requirement() {
        let plan = LaunchPlan::new(vec![Step::UpdateMetadata])
            .with_existing_mint(Pubkey::new_unique());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn supply_needs_a_token_account() {
        let plan =
            LaunchPlan::new(vec![Step::MintSupply]).with_existing_mint(Pubkey::new_unique());
        assert!(matches!(
            plan.validate(),
            Err(LaunchError::StepOrder {
                step: Step::MintSupply,
                requires: Step::CreateTokenAccount,
            })
        ));

        let plan = LaunchPlan::new(vec![Step::MintSupply])
            .with_existing_mint(Pubkey::new_unique())
            .with_existing_token_account(Pubkey::new_unique());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn step_names_round_trip() {
        for step in Step::ALL {
            assert_eq!(step.as_str().parse::<Step>().unwrap(), step);
        }
        assert!("mint-more".parse::<Step>().is_err());
    }
}
