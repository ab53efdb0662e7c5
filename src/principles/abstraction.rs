// Principle 4: Abstraction - callers see what an employee costs, not how it
// is computed.

use crate::error::DemoError;
use crate::harness::{Demo, Session, Topic};

pub const DEMO: Demo = Demo {
    name: "abstraction",
    topic: Topic::Principle,
    summary: "Payroll over an Employee contract that hides how pay is computed",
    run,
};

pub trait Employee {
    fn name(&self) -> &str;
    fn monthly_pay(&self) -> f64;

    fn annual_pay(&self) -> f64 {
        self.monthly_pay() * 12.0
    }

    fn pay_slip(&self) -> String {
        format!("{}: {:.2}/month, {:.2}/year", self.name(), self.monthly_pay(), self.annual_pay())
    }
}

pub struct FullTimeEmployee {
    name: String,
    annual_salary: f64,
}

impl FullTimeEmployee {
    pub fn new(name: impl Into<String>, annual_salary: f64) -> Self {
        Self {
            name: name.into(),
            annual_salary,
        }
    }
}

impl Employee for FullTimeEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn monthly_pay(&self) -> f64 {
        self.annual_salary / 12.0
    }

    fn annual_pay(&self) -> f64 {
        self.annual_salary
    }
}

pub struct Contractor {
    name: String,
    hourly_rate: f64,
    hours_per_month: f64,
}

impl Contractor {
    pub fn new(name: impl Into<String>, hourly_rate: f64, hours_per_month: f64) -> Self {
        Self {
            name: name.into(),
            hourly_rate,
            hours_per_month,
        }
    }
}

impl Employee for Contractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn monthly_pay(&self) -> f64 {
        self.hourly_rate * self.hours_per_month
    }
}

pub fn monthly_payroll(staff: &[Box<dyn Employee>]) -> f64 {
    staff.iter().map(|e| e.monthly_pay()).sum()
}

fn run(session: &mut Session) -> Result<(), DemoError> {
    session.heading("Abstraction");

    let staff: Vec<Box<dyn Employee>> = vec![
        Box::new(FullTimeEmployee::new("Grace", 96_000.0)),
        Box::new(Contractor::new("Linus", 85.0, 120.0)),
    ];

    for employee in &staff {
        session.result(employee.pay_slip());
    }
    session.result(format!("monthly payroll {:.2}", monthly_payroll(&staff)));
    Ok(())
}
