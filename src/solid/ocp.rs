// SOLID 2: Open/Closed - add behavior by adding types, not by editing a
// branch that every caller depends on.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "ocp",
    topic: Topic::Solid,
    summary: "String-matched discounts vs a DiscountPolicy trait open for extension",
    run,
};

// ============================================================================
// Bad: every new customer kind means editing this function
// ============================================================================

pub fn discount_for(kind: &str, total: f64) -> f64 {
    match kind {
        "regular" => 0.0,
        "member" => total * 0.05,
        "vip" => total * 0.15,
        _ => 0.0,
    }
}

// ============================================================================
// Good: each policy is its own type
// ============================================================================

pub trait DiscountPolicy {
    fn label(&self) -> &'static str;
    fn discount(&self, total: f64) -> f64;
}

pub struct Regular;
pub struct Member;
pub struct Vip;

/// Added later without touching anything above.
pub struct Seasonal {
    pub percent: f64,
    pub minimum_spend: f64,
}

impl DiscountPolicy for Regular {
    fn label(&self) -> &'static str {
        "regular"
    }

    fn discount(&self, _total: f64) -> f64 {
        0.0
    }
}

impl DiscountPolicy for Member {
    fn label(&self) -> &'static str {
        "member"
    }

    fn discount(&self, total: f64) -> f64 {
        total * 0.05
    }
}

impl DiscountPolicy for Vip {
    fn label(&self) -> &'static str {
        "vip"
    }

    fn discount(&self, total: f64) -> f64 {
        total * 0.15
    }
}

impl DiscountPolicy for Seasonal {
    fn label(&self) -> &'static str {
        "seasonal"
    }

    fn discount(&self, total: f64) -> f64 {
        if total >= self.minimum_spend {
            total * self.percent / 100.0
        } else {
            0.0
        }
    }
}

pub struct Checkout<'a> {
    policy: &'a dyn DiscountPolicy,
}

impl<'a> Checkout<'a> {
    pub fn new(policy: &'a dyn DiscountPolicy) -> Self {
        Self { policy }
    }

    pub fn amount_due(&self, total: f64) -> f64 {
        total - self.policy.discount(total)
    }
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Open/Closed");
    let total = 200.0;

    session.step("Bad: string switch");
    for kind in ["regular", "member", "vip", "seasonal"] {
        session.result(format!("{}: discount {:.2}", kind, discount_for(kind, total)));
    }
    session.note("'seasonal' silently gets nothing until someone edits the match");

    session.step("Good: DiscountPolicy implementations");
    let policies: [&dyn DiscountPolicy; 4] = [
        &Regular,
        &Member,
        &Vip,
        &Seasonal {
            percent: 20.0,
            minimum_spend: 100.0,
        },
    ];
    for policy in policies {
        let checkout = Checkout::new(policy);
        session.result(format!(
            "{}: pay {:.2} of {:.2}",
            policy.label(),
            checkout.amount_due(total),
            total
        ));
    }
    Ok(())
}
