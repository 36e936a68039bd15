//! Pipeline runner.
//!
//! Runs every check of a [`CheckRegistry`] against one target, threading a
//! single mutable context through them in registry order. A check that
//! returns an error or panics contributes exactly one synthetic error issue;
//! the remaining checks still run.

use std::panic::{self, AssertUnwindSafe};

use super::check::{Check, CheckId, Target};
use super::issue::{Issue, Severity};
use super::registry::CheckRegistry;

/// Identifier attached to issues the pipeline itself reports.
pub const PIPELINE_CHECK_ID: &str = "pipeline";

/// An issue together with the check that reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub check: CheckId,
    pub issue: Issue,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    /// True iff no finding has severity [`Severity::Error`].
    pub passed: bool,
    /// Findings in check order, then emission order.
    pub findings: Vec<Finding>,
}

impl PipelineResult {
    fn from_findings(findings: Vec<Finding>) -> Self {
        let passed = !findings.iter().any(|f| f.issue.is_error());
        Self { passed, findings }
    }

    /// Iterate over the issues in report order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.findings.iter().map(|f| &f.issue)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues().filter(|i| i.severity == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }
}

/// A resolved target and the result of validating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub target: Target,
    pub result: PipelineResult,
}

/// Hooks for reporting progress while a pipeline runs.
pub trait PipelineObserver {
    /// Called before a check runs.
    fn check_started(&mut self, _check: &CheckId, _name: &str) {}

    /// Called with the issues a check contributed.
    fn check_finished(&mut self, _check: &CheckId, _issues: &[Issue]) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Run all checks of `registry` against `target`.
pub fn run_pipeline<C>(registry: &CheckRegistry<C>, target: &Target, ctx: &mut C) -> PipelineResult {
    run_pipeline_with(registry, target, ctx, &mut NoopObserver)
}

/// Run all checks, reporting progress to `observer`.
pub fn run_pipeline_with<C>(
    registry: &CheckRegistry<C>,
    target: &Target,
    ctx: &mut C,
    observer: &mut dyn PipelineObserver,
) -> PipelineResult {
    if registry.is_empty() {
        tracing::warn!("No checks registered for {}", target);
        return PipelineResult::from_findings(vec![Finding {
            check: CheckId::new(PIPELINE_CHECK_ID),
            issue: Issue::warning("No checks registered for this format"),
        }]);
    }

    let mut findings = Vec::new();
    for check in registry.ordered() {
        let id = check.id();
        tracing::debug!("Running check '{}' on {}", id, target);
        observer.check_started(&id, check.name());

        let issues = run_isolated(check, target, ctx);
        log_outcome(&id, &issues);
        observer.check_finished(&id, &issues);

        findings.extend(issues.into_iter().map(|issue| Finding {
            check: id.clone(),
            issue,
        }));
    }

    PipelineResult::from_findings(findings)
}

fn run_isolated<C>(check: &dyn Check<C>, target: &Target, ctx: &mut C) -> Vec<Issue> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| check.run(target, ctx)));
    let message = match outcome {
        Ok(Ok(issues)) => return issues,
        Ok(Err(err)) => format!("{:#}", err),
        Err(payload) => panic_message(payload.as_ref()),
    };
    tracing::debug!("Check '{}' failed: {}", check.id(), message);
    vec![Issue::error(format!(
        "Failed to run check {}: {}",
        check.id(),
        message
    ))]
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_string()
    }
}

fn log_outcome(id: &CheckId, issues: &[Issue]) {
    let errors = issues.iter().filter(|i| i.is_error()).count();
    let warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();
    if errors > 0 {
        tracing::info!("Check '{}': {} error(s) found", id, errors);
    } else if warnings > 0 {
        tracing::info!("Check '{}': PASSED with {} warning(s)", id, warnings);
    } else {
        tracing::info!("Check '{}': PASSED", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Default)]
    struct Ctx {
        seen: Vec<String>,
    }

    struct Recording {
        id: &'static str,
        issues: Vec<Issue>,
    }

    impl Check<Ctx> for Recording {
        fn id(&self) -> CheckId {
            CheckId::new(self.id)
        }
        fn name(&self) -> &str {
            self.id
        }
        fn description(&self) -> &str {
            "records its id"
        }
        fn run(&self, _target: &Target, ctx: &mut Ctx) -> anyhow::Result<Vec<Issue>> {
            ctx.seen.push(self.id.to_string());
            Ok(self.issues.clone())
        }
    }

    struct Failing;

    impl Check<Ctx> for Failing {
        fn id(&self) -> CheckId {
            CheckId::new("failing")
        }
        fn name(&self) -> &str {
            "Failing"
        }
        fn description(&self) -> &str {
            "always errors"
        }
        fn run(&self, _target: &Target, _ctx: &mut Ctx) -> anyhow::Result<Vec<Issue>> {
            anyhow::bail!("disk on fire")
        }
    }

    struct Panicking;

    impl Check<Ctx> for Panicking {
        fn id(&self) -> CheckId {
            CheckId::new("panicking")
        }
        fn name(&self) -> &str {
            "Panicking"
        }
        fn description(&self) -> &str {
            "always panics"
        }
        fn run(&self, _target: &Target, _ctx: &mut Ctx) -> anyhow::Result<Vec<Issue>> {
            panic!("unreachable state");
        }
    }

    fn target() -> Target {
        Target::File(PathBuf::from("artifact"))
    }

    #[test]
    fn context_is_threaded_in_order() {
        let mut registry = CheckRegistry::new().with_priority(&["zz"]);
        registry.register(Box::new(Recording { id: "aa", issues: vec![] }));
        registry.register(Box::new(Recording { id: "zz", issues: vec![] }));

        let mut ctx = Ctx::default();
        let result = run_pipeline(&registry, &target(), &mut ctx);

        assert!(result.passed);
        assert_eq!(ctx.seen, vec!["zz", "aa"]);
    }

    #[test]
    fn warnings_do_not_fail() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(Recording {
            id: "a",
            issues: vec![Issue::warning("w"), Issue::info("i")],
        }));

        let result = run_pipeline(&registry, &target(), &mut Ctx::default());
        assert!(result.passed);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.info_count(), 1);
    }

    #[test]
    fn error_fails() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(Recording {
            id: "a",
            issues: vec![Issue::error("e")],
        }));

        let result = run_pipeline(&registry, &target(), &mut Ctx::default());
        assert!(!result.passed);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn returned_error_becomes_one_synthetic_issue() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(Failing));
        registry.register(Box::new(Recording {
            id: "later",
            issues: vec![Issue::info("still ran")],
        }));

        let result = run_pipeline(&registry, &target(), &mut Ctx::default());
        assert!(!result.passed);
        let messages: Vec<_> = result.issues().map(|i| i.message.clone()).collect();
        assert_eq!(
            messages,
            vec!["Failed to run check failing: disk on fire", "still ran"]
        );
        assert_eq!(result.findings[0].check, CheckId::new("failing"));
    }

    #[test]
    fn panic_becomes_one_synthetic_issue() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(Panicking));
        registry.register(Box::new(Recording { id: "zz", issues: vec![] }));

        let mut ctx = Ctx::default();
        let result = run_pipeline(&registry, &target(), &mut ctx);

        assert_eq!(result.error_count(), 1);
        assert!(result
            .issues()
            .next()
            .is_some_and(|i| i.message == "Failed to run check panicking: unreachable state"));
        assert_eq!(ctx.seen, vec!["zz"]);
    }

    #[test]
    fn empty_registry_passes_with_single_warning() {
        let registry: CheckRegistry<Ctx> = CheckRegistry::new();
        let result = run_pipeline(&registry, &target(), &mut Ctx::default());

        assert!(result.passed);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].issue.severity, Severity::Warning);
    }

    #[test]
    fn observer_sees_each_check() {
        #[derive(Default)]
        struct Seen(Vec<String>);
        impl PipelineObserver for Seen {
            fn check_finished(&mut self, check: &CheckId, issues: &[Issue]) {
                self.0.push(format!("{}:{}", check, issues.len()));
            }
        }

        let mut registry = CheckRegistry::new();
        registry.register(Box::new(Recording {
            id: "a",
            issues: vec![Issue::info("i")],
        }));
        registry.register(Box::new(Recording { id: "b", issues: vec![] }));

        let mut seen = Seen::default();
        run_pipeline_with(&registry, &target(), &mut Ctx::default(), &mut seen);
        assert_eq!(seen.0, vec!["a:1", "b:0"]);
    }
}
