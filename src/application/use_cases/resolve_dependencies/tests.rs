use super::*;
use crate::application::dto::{ExplicitDeclaration, ScopeDefinition};
use crate::application::read_models::SectionStatus;
use crate::dependency_management::domain::{BomCoordinates, DependencyKey, ImportRequest, ScopeGraph};
use crate::dependency_management::services::test_support::{bom, StubRepository};
use crate::dependency_management::services::VersionDecision;
use std::cell::RefCell;

// Mock implementations for testing
#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn key(s: &str) -> DependencyKey {
    s.parse().unwrap()
}

fn import(s: &str) -> ImportRequest {
    s.parse::<BomCoordinates>().unwrap().into()
}

fn requested(items: &[&str]) -> Vec<RequestedDependency> {
    items.iter().map(|s| s.parse().unwrap()).collect()
}

fn repository() -> StubRepository {
    StubRepository::new()
        .with_model(bom("g:bom:1.0").manages_excluding("g:a", "1.1", &["g:x"]).manages("g:b", "2.0"))
        .with_model(bom("g:test-bom:1.0").manages("g:junit", "4.12"))
}

/// compile <- runtime <- test
fn build() -> BuildDefinition {
    let mut scope_graph = ScopeGraph::new();
    scope_graph.add_scope("compile", vec![]);
    scope_graph.add_scope("runtime", vec!["compile".to_string()]);
    scope_graph.add_scope("test", vec!["runtime".to_string()]);

    let mut build = BuildDefinition {
        local_projects: LocalProjects::new(vec![key("com.example:core")]),
        scope_graph,
        overridden_by_dependencies: true,
        ..Default::default()
    };
    build.global.imports.push(import("g:bom:1.0"));
    build.scopes.insert(
        "compile".to_string(),
        ScopeDefinition {
            management: ManagementDefinition {
                imports: Vec::new(),
                dependencies: vec![ExplicitDeclaration::new(key("g:a"), "1.2", vec![key("g:y")])],
            },
            dependencies: requested(&["g:a", "g:b:1.0", "com.example:core:0.1"]),
        },
    );
    build.scopes.insert("runtime".to_string(), ScopeDefinition::default());
    build.scopes.insert(
        "test".to_string(),
        ScopeDefinition {
            management: ManagementDefinition {
                imports: vec![import("g:test-bom:1.0")],
                dependencies: Vec::new(),
            },
            dependencies: requested(&["g:junit", "g:b:1.+"]),
        },
    );
    build
}

fn use_case(reporter: &MockProgressReporter) -> ResolveDependenciesUseCase<StubRepository, StubRepository, &MockProgressReporter> {
    ResolveDependenciesUseCase::new(repository(), repository(), reporter)
}

#[test]
fn test_execute_applies_explicit_over_imported() {
    let reporter = MockProgressReporter::default();
    let response = use_case(&reporter).execute(ResolveRequest::new(build())).unwrap();

    let compile = response.scope("compile").unwrap();
    assert!(compile.error.is_none());
    let a = compile.dependencies.iter().find(|d| d.dependency == key("g:a")).unwrap();
    assert_eq!(a.version.as_deref(), Some("1.2"));
    assert!(a.is_managed());
    assert_eq!(a.exclusions, vec![key("g:x"), key("g:y")]);
}

#[test]
fn test_execute_keeps_pinned_versions_when_overridden_by_dependencies() {
    let reporter = MockProgressReporter::default();
    let response = use_case(&reporter).execute(ResolveRequest::new(build())).unwrap();

    let compile = response.scope("compile").unwrap();
    let b = compile.dependencies.iter().find(|d| d.dependency == key("g:b")).unwrap();
    assert_eq!(b.version.as_deref(), Some("1.0"));
    assert_eq!(b.decision, VersionDecision::Managed("1.0".to_string()));
}

#[test]
fn test_execute_overrides_pinned_versions_when_disabled() {
    let mut build = build();
    build.overridden_by_dependencies = false;
    let reporter = MockProgressReporter::default();
    let response = use_case(&reporter).execute(ResolveRequest::new(build)).unwrap();

    let compile = response.scope("compile").unwrap();
    let b = compile.dependencies.iter().find(|d| d.dependency == key("g:b")).unwrap();
    assert_eq!(b.requested_version.as_deref(), Some("1.0"));
    assert_eq!(b.version.as_deref(), Some("2.0"));
}

#[test]
fn test_execute_skips_local_projects_and_dynamic_versions() {
    let reporter = MockProgressReporter::default();
    let response = use_case(&reporter).execute(ResolveRequest::new(build())).unwrap();

    let compile = response.scope("compile").unwrap();
    let core = compile
        .dependencies
        .iter()
        .find(|d| d.dependency == key("com.example:core"))
        .unwrap();
    assert_eq!(core.decision, VersionDecision::LocalProject);

    let test = response.scope("test").unwrap();
    let b = test.dependencies.iter().find(|d| d.dependency == key("g:b")).unwrap();
    assert_eq!(b.decision, VersionDecision::DynamicVersion);
    assert_eq!(b.version.as_deref(), Some("1.+"));
}

#[test]
fn test_execute_inherits_requested_dependencies() {
    let reporter = MockProgressReporter::default();
    let response = use_case(&reporter).execute(ResolveRequest::new(build())).unwrap();

    let test = response.scope("test").unwrap();
    assert_eq!(test.hierarchy, vec!["test", "runtime", "compile"]);
    let keys: Vec<String> = test.dependencies.iter().map(|d| d.dependency.to_string()).collect();
    assert_eq!(keys, vec!["g:junit", "g:b", "g:a", "com.example:core"]);

    let junit = &test.dependencies[0];
    assert_eq!(junit.version.as_deref(), Some("4.12"));
    assert_eq!(test.imported_boms, vec!["g:test-bom:1.0"]);
}

#[test]
fn test_execute_reports_failed_scope_and_continues() {
    let mut build = build();
    build
        .scopes
        .get_mut("runtime")
        .unwrap()
        .management
        .imports
        .push(import("g:missing:1.0"));
    let reporter = MockProgressReporter::default();
    let response = use_case(&reporter).execute(ResolveRequest::new(build)).unwrap();

    assert_eq!(response.failure_count(), 2);
    assert!(response.scope("compile").unwrap().error.is_none());
    let runtime_error = response.scope("runtime").unwrap().error.clone().unwrap();
    assert!(runtime_error.contains("scope 'runtime'"));
    // test extends runtime, so it sees the same failure
    let test_error = response.scope("test").unwrap().error.clone().unwrap();
    assert_eq!(test_error, runtime_error);

    assert!(matches!(
        response.report.scope("runtime").unwrap().status,
        SectionStatus::Failed(_)
    ));
    assert_eq!(reporter.errors.borrow().len(), 2);
}

#[test]
fn test_execute_lists_explicit_dependencies_per_scope() {
    let reporter = MockProgressReporter::default();
    let response = use_case(&reporter).execute(ResolveRequest::new(build())).unwrap();

    let compile = response.scope("compile").unwrap();
    assert_eq!(compile.explicit_dependencies.len(), 1);
    assert_eq!(compile.explicit_dependencies[0].version(), "1.2");
    assert!(response.scope("runtime").unwrap().explicit_dependencies.is_empty());
}

#[test]
fn test_execute_rejects_undeclared_scope() {
    let mut build = build();
    build.scopes.insert("unknown".to_string(), ScopeDefinition::default());
    let reporter = MockProgressReporter::default();

    let result = use_case(&reporter).execute(ResolveRequest::new(build));
    assert!(result.is_err());
}

#[test]
fn test_execute_reports_completion() {
    let reporter = MockProgressReporter::default();
    use_case(&reporter).execute(ResolveRequest::new(build())).unwrap();

    let messages = reporter.messages.borrow();
    assert!(messages[0].contains("3 scope(s)"));
    assert!(messages.last().unwrap().contains("✅ Resolved dependency management for 3 scope(s)"));
}
