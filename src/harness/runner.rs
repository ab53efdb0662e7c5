use serde::Serialize;

use super::transcript::{Line, Session, Transcript};
use super::{Catalog, Demo, Topic};
use crate::config::TourConfig;
use crate::error::{DemoError, TourError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum Outcome {
    Completed,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub name: &'static str,
    pub topic: Topic,
    pub outcome: Outcome,
    pub lines: Vec<Line>,
}

impl DemoReport {
    pub fn is_completed(&self) -> bool {
        self.outcome == Outcome::Completed
    }
}

/// Runs demos one after another, each against a fresh session.
pub struct Runner<'a> {
    config: &'a TourConfig,
    echo: bool,
}

impl<'a> Runner<'a> {
    /// Records transcripts without printing them.
    pub fn quiet(config: &'a TourConfig) -> Self {
        Self { config, echo: false }
    }

    /// Prints each line as the demo produces it.
    pub fn live(config: &'a TourConfig) -> Self {
        Self { config, echo: true }
    }

    pub fn run(&self, demo: &Demo) -> DemoReport {
        let span = tracing::info_span!("demo", name = demo.name);
        let _guard = span.enter();

        let transcript = if self.echo {
            Transcript::echoing(self.config.color)
        } else {
            Transcript::new()
        };
        let mut session = Session::new(self.config, transcript);
        let result = (demo.run)(&mut session);
        let lines = session.finish().into_lines();
        if self.echo {
            println!();
        }

        let outcome = match result {
            Ok(()) => {
                tracing::debug!(lines = lines.len(), "demo completed");
                Outcome::Completed
            }
            Err(err) => {
                tracing::warn!(error = %err, "demo failed");
                Outcome::Failed(err.to_string())
            }
        };

        DemoReport {
            name: demo.name,
            topic: demo.topic,
            outcome,
            lines,
        }
    }

    /// A failing demo does not stop the ones after it.
    pub fn run_all<'d>(&self, demos: impl IntoIterator<Item = &'d Demo>) -> Vec<DemoReport> {
        demos.into_iter().map(|demo| self.run(demo)).collect()
    }

    /// Resolves every name first; nothing runs if one of them is unknown.
    pub fn run_named<S: AsRef<str>>(
        &self,
        catalog: &Catalog,
        names: &[S],
    ) -> Result<Vec<DemoReport>, DemoError> {
        let demos = catalog.select(names)?;
        Ok(self.run_all(demos))
    }

    /// Every catalog demo the config does not skip.
    pub fn run_tour(&self, catalog: &Catalog) -> Vec<DemoReport> {
        self.run_all(catalog.tour(self.config))
    }
}

/// `Err` naming the failed demos, if any.
pub fn ensure_completed(reports: &[DemoReport]) -> Result<(), TourError> {
    let failed: Vec<&'static str> = reports
        .iter()
        .filter(|r| !r.is_completed())
        .map(|r| r.name)
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(TourError::Failed(failed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::LineKind;

    fn broken(session: &mut Session) -> Result<(), DemoError> {
        session.step("about to fail");
        Err(DemoError::UnknownKind("spaceship".to_string()))
    }

    fn must_not_run(_: &mut Session) -> Result<(), DemoError> {
        panic!("a demo ran although the selection was invalid");
    }

    fn broken_demo() -> Demo {
        Demo {
            name: "broken",
            topic: Topic::Structural,
            summary: "always fails",
            run: broken,
        }
    }

    #[test]
    fn test_every_standard_demo_completes() {
        let config = TourConfig::default();
        let catalog = Catalog::standard();
        let reports = Runner::quiet(&config).run_all(catalog.iter());

        assert_eq!(reports.len(), catalog.len());
        for report in &reports {
            assert!(report.is_completed(), "{} failed: {:?}", report.name, report.outcome);
            assert!(!report.lines.is_empty(), "{} printed nothing", report.name);
            assert_eq!(report.lines[0].kind, LineKind::Heading);
        }
    }

    #[test]
    fn test_failure_is_recorded_and_others_still_run() {
        let config = TourConfig::default();
        let failing = broken_demo();
        let catalog = Catalog::standard();
        let facade = catalog.get("facade").unwrap();

        let reports = Runner::quiet(&config).run_all([&failing, facade]);
        assert_eq!(
            reports[0].outcome,
            Outcome::Failed("unknown kind 'spaceship'".to_string())
        );
        assert_eq!(reports[0].lines.len(), 1);
        assert!(reports[1].is_completed());
    }

    #[test]
    fn test_anti_pattern_demos_complete_with_unsupported_lines() {
        let config = TourConfig::default();
        let catalog = Catalog::standard();
        let runner = Runner::quiet(&config);

        for name in ["lsp", "isp"] {
            let report = runner.run(catalog.get(name).unwrap());
            assert!(report.is_completed());
            let unsupported = report
                .lines
                .iter()
                .filter(|l| l.kind == LineKind::Unsupported)
                .count();
            assert!(unsupported > 0, "{} reported no unsupported operation", name);
        }
    }

    #[test]
    fn test_unknown_name_runs_nothing() {
        let config = TourConfig::default();
        let mut catalog = Catalog::standard();
        catalog.register(Demo {
            name: "tripwire",
            topic: Topic::Principle,
            summary: "panics when run",
            run: must_not_run,
        });

        let result = Runner::quiet(&config).run_named(&catalog, &["tripwire", "visitor"]);
        assert!(matches!(result, Err(DemoError::UnknownDemo(name)) if name == "visitor"));
    }

    #[test]
    fn test_run_named_in_given_order() {
        let config = TourConfig::default();
        let catalog = Catalog::standard();
        let reports = Runner::quiet(&config)
            .run_named(&catalog, &["facade", "encapsulation"])
            .unwrap();
        let names: Vec<_> = reports.iter().map(|r| r.name).collect();
        assert_eq!(names, ["facade", "encapsulation"]);
        assert!(ensure_completed(&reports).is_ok());
    }

    #[test]
    fn test_run_tour_honours_skip() {
        let config = TourConfig::from_toml_str("skip = [\"proxy\"]\n").unwrap();
        let catalog = Catalog::standard();
        let reports = Runner::quiet(&config).run_tour(&catalog);
        assert_eq!(reports.len(), catalog.len() - 1);
        assert!(reports.iter().all(|r| r.name != "proxy"));
    }

    #[test]
    fn test_failed_demo_fails_the_tour() {
        let config = TourConfig::default();
        let mut catalog = Catalog::standard();
        catalog.register(broken_demo());

        let reports = Runner::quiet(&config).run_named(&catalog, &["broken", "bridge"]).unwrap();
        assert!(reports[1].is_completed());
        assert!(matches!(
            ensure_completed(&reports),
            Err(TourError::Failed(names)) if names == ["broken"]
        ));
    }

    #[test]
    fn test_report_json_shape() {
        let config = TourConfig::default();
        let catalog = Catalog::standard();
        let report = Runner::quiet(&config).run(catalog.get("decorator").unwrap());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"], "decorator");
        assert_eq!(json["topic"], "structural");
        assert_eq!(json["outcome"]["status"], "completed");
        assert_eq!(json["lines"][0]["kind"], "heading");
    }
}
