// Principle 1: Encapsulation - private state behind validated operations.
// The balance can only change through deposit/withdraw, and a rejected
// operation leaves the account exactly as it was.

use crate::config::AccountLimits;
use crate::error::{DemoError, ValidationError};
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "encapsulation",
    topic: Topic::Principle,
    summary: "Bank account whose balance only changes through validated operations",
    run,
};

// ============================================================================
// Bad: public fields, anyone can put the account in an invalid state
// ============================================================================

pub struct OpenAccount {
    pub owner: String,
    pub balance: f64,
}

// ============================================================================
// Good: private state, validated mutations, read-only history
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    Deposit(f64),
    Withdrawal(f64),
}

#[derive(Debug)]
pub struct BankAccount {
    owner: String,
    balance: f64,
    limits: AccountLimits,
    history: Vec<Transaction>,
}

impl BankAccount {
    pub fn open(owner: impl Into<String>, limits: AccountLimits) -> Self {
        Self {
            owner: owner.into(),
            balance: limits.opening_balance,
            limits,
            history: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, ValidationError> {
        require_positive(amount)?;
        require_within(amount, self.limits.max_deposit)?;

        self.balance += amount;
        self.history.push(Transaction::Deposit(amount));
        Ok(self.balance)
    }

    /// Returns the new balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, ValidationError> {
        require_positive(amount)?;
        require_within(amount, self.limits.max_withdrawal)?;
        if amount > self.balance {
            return Err(ValidationError::InsufficientFunds {
                balance: self.balance,
                amount,
            });
        }

        self.balance -= amount;
        self.history.push(Transaction::Withdrawal(amount));
        Ok(self.balance)
    }
}

fn require_positive(amount: f64) -> Result<(), ValidationError> {
    // `!(x > 0)` also catches NaN
    if !(amount > 0.0) {
        return Err(ValidationError::NonPositiveAmount { amount });
    }
    Ok(())
}

fn require_within(amount: f64, limit: f64) -> Result<(), ValidationError> {
    if amount > limit {
        return Err(ValidationError::LimitExceeded { limit, amount });
    }
    Ok(())
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Encapsulation");

    let mut open = OpenAccount {
        owner: "Mallory".to_string(),
        balance: 100.0,
    };
    open.balance = -5_000.0;
    session.step(format!(
        "Public field lets {} set the balance to {:.2}",
        open.owner, open.balance
    ));

    let limits = session.config().account;
    let mut account = BankAccount::open("Alice", limits);
    session.step(format!(
        "Opened account for {} with {:.2}",
        account.owner(),
        account.balance()
    ));

    let operations: [(&str, f64); 6] = [
        ("deposit", 500.0),
        ("deposit", -20.0),
        ("deposit", limits.max_deposit + 1.0),
        ("withdraw", 200.0),
        ("withdraw", limits.max_withdrawal + 1.0),
        ("withdraw", account.balance() + 1_000.0),
    ];

    for (op, amount) in operations {
        session.step(format!("{} {:.2}", op, amount));
        let result = match op {
            "deposit" => account.deposit(amount),
            _ => account.withdraw(amount),
        };
        match result {
            Ok(balance) => session.result(format!("balance is now {:.2}", balance)),
            Err(err) => session.rejected(&err),
        }
    }

    session.result(format!(
        "Final balance {:.2} after {} accepted transactions",
        account.balance(),
        account.history().len()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn account() -> BankAccount {
        BankAccount::open("test", AccountLimits::default())
    }

    #[test]
    fn test_opening_balance() {
        let account = account();
        assert_eq!(account.balance(), 1000.0);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit_and_withdraw() {
        let mut account = account();
        assert_eq!(account.deposit(500.0), Ok(1500.0));
        assert_eq!(account.withdraw(200.0), Ok(1300.0));
        assert_eq!(
            account.history(),
            &[Transaction::Deposit(500.0), Transaction::Withdrawal(200.0)]
        );
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut account = account();

        assert_eq!(
            account.deposit(0.0),
            Err(ValidationError::NonPositiveAmount { amount: 0.0 })
        );
        assert!(account.deposit(f64::NAN).is_err());
        assert_eq!(
            account.deposit(10_000.5),
            Err(ValidationError::LimitExceeded {
                limit: 10_000.0,
                amount: 10_000.5
            })
        );
        assert_eq!(
            account.withdraw(5_001.0),
            Err(ValidationError::LimitExceeded {
                limit: 5_000.0,
                amount: 5_001.0
            })
        );
        assert_eq!(
            account.withdraw(1_000.01),
            Err(ValidationError::InsufficientFunds {
                balance: 1000.0,
                amount: 1_000.01
            })
        );

        assert_eq!(account.balance(), 1000.0);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_limits_are_inclusive() {
        let mut account = BankAccount::open(
            "test",
            AccountLimits {
                opening_balance: 6_000.0,
                ..AccountLimits::default()
            },
        );
        assert_eq!(account.withdraw(5_000.0), Ok(1_000.0));
        assert_eq!(account.deposit(10_000.0), Ok(11_000.0));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = account();
        assert_eq!(account.withdraw(1000.0), Ok(0.0));
    }

    proptest! {
        #[test]
        fn test_non_positive_deposit_is_rejected(amount in -10_000.0f64..=0.0) {
            let mut account = account();
            prop_assert!(account.deposit(amount).is_err());
            prop_assert_eq!(account.balance(), 1000.0);
        }

        #[test]
        fn test_deposit_adds_exactly(amount in 0.01f64..=10_000.0) {
            let mut account = account();
            let before = account.balance();
            prop_assert_eq!(account.deposit(amount), Ok(before + amount));
            prop_assert_eq!(account.balance(), before + amount);
        }

        #[test]
        fn test_overdraft_is_rejected(extra in 0.01f64..4_000.0) {
            let mut account = account();
            let before = account.balance();
            prop_assert!(account.withdraw(before + extra).is_err());
            prop_assert_eq!(account.balance(), before);
        }

        #[test]
        fn test_withdraw_subtracts_exactly(amount in 0.01f64..=1000.0) {
            let mut account = account();
            let before = account.balance();
            prop_assert_eq!(account.withdraw(amount), Ok(before - amount));
            prop_assert_eq!(account.balance(), before - amount);
        }
    }
}
