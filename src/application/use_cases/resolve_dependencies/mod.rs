use crate::application::dto::{
    BuildDefinition, ManagementDefinition, ResolveRequest, ResolveResponse, ResolvedDependency,
    ScopeResolution,
};
use crate::application::read_models::DependencyManagementReportBuilder;
use crate::dependency_management::domain::{
    DependencyResolveDetails, Exclusions, LocalProjects, RequestedDependency, Scope,
};
use crate::dependency_management::services::{
    DependencyManagementContainer, ImplicitVersionCollector, VersionResolutionAction,
};
use crate::ports::outbound::{ArtifactLocator, ModelProvider, ProgressReporter};
use crate::shared::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// ResolveDependenciesUseCase - Core use case for applying dependency management
///
/// Populates a [`DependencyManagementContainer`] from a build definition and
/// runs the [`VersionResolutionAction`] over every dependency requested in
/// every scope.
///
/// # Type Parameters
/// * `AL` - ArtifactLocator implementation
/// * `MP` - ModelProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<AL, MP, PR> {
    artifact_locator: Arc<AL>,
    model_provider: Arc<MP>,
    progress_reporter: PR,
}

impl<AL, MP, PR> ResolveDependenciesUseCase<AL, MP, PR>
where
    AL: ArtifactLocator + 'static,
    MP: ModelProvider + 'static,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(artifact_locator: AL, model_provider: MP, progress_reporter: PR) -> Self {
        Self {
            artifact_locator: Arc::new(artifact_locator),
            model_provider: Arc::new(model_provider),
            progress_reporter,
        }
    }

    /// Executes the resolution use case
    ///
    /// A scope whose imported BOMs fail to resolve is reported in its
    /// [`ScopeResolution::error`]; the remaining scopes are still resolved.
    ///
    /// # Errors
    /// Returns an error if the scope graph is invalid or a definition names
    /// an undeclared scope
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let build = request.build;
        let scopes = build.scope_graph.scopes()?;
        self.progress_reporter.report(&format!(
            "🔧 Loading dependency management for {} scope(s)",
            scopes.len()
        ));

        // Step 1: Declarations and imports
        let container = self.populate_container(&build)?;

        // Step 2: Versions pinned by the scopes' own dependencies
        if build.overridden_by_dependencies {
            self.collect_implicit_versions(&container, &build)?;
        }

        // Step 3: Apply dependency management scope by scope
        let mut resolutions = Vec::with_capacity(scopes.len());
        for (index, scope) in scopes.iter().enumerate() {
            self.progress_reporter
                .report_progress(index, scopes.len(), Some(scope.name()));
            resolutions.push(self.resolve_scope(&container, &build, scope));
        }
        self.progress_reporter
            .report_progress(scopes.len(), scopes.len(), None);

        // Step 4: Build the report
        let report = DependencyManagementReportBuilder::build(&container, &scopes);
        let response = ResolveResponse {
            report,
            scopes: resolutions,
        };
        self.report_outcome(&response);
        Ok(response)
    }

    fn populate_container(&self, build: &BuildDefinition) -> Result<DependencyManagementContainer> {
        let container = DependencyManagementContainer::new(
            Arc::clone(&self.artifact_locator) as Arc<dyn ArtifactLocator>,
            Arc::clone(&self.model_provider) as Arc<dyn ModelProvider>,
        );

        Self::apply_management(&container, None, &build.global);
        for (name, definition) in &build.scopes {
            let scope = build.scope_graph.scope(name)?;
            Self::apply_management(&container, Some(&scope), &definition.management);
        }
        Ok(container)
    }

    fn apply_management(
        container: &DependencyManagementContainer,
        scope: Option<&Scope>,
        management: &ManagementDefinition,
    ) {
        for declaration in &management.dependencies {
            container.add_explicit_managed_version(
                scope,
                declaration.key.clone(),
                declaration.version.as_str(),
                declaration.exclusions.iter().cloned(),
            );
        }
        for import in &management.imports {
            container.import_bom(scope, import.clone());
        }
    }

    fn collect_implicit_versions(
        &self,
        container: &DependencyManagementContainer,
        build: &BuildDefinition,
    ) -> Result<()> {
        let mut recorded = 0;
        for (name, definition) in &build.scopes {
            let scope = build.scope_graph.scope(name)?;
            recorded += ImplicitVersionCollector::collect(container, Some(&scope), &definition.dependencies);
        }
        if recorded > 0 {
            self.progress_reporter.report(&format!(
                "📌 Recorded {} version(s) pinned by declared dependencies",
                recorded
            ));
        }
        Ok(())
    }

    /// Dependencies requested anywhere in the hierarchy of `scope`. A
    /// declaration in a more specific scope hides the same key further up.
    fn requested_dependencies(build: &BuildDefinition, scope: &Scope) -> Vec<RequestedDependency> {
        let mut seen = HashSet::new();
        let mut requested = Vec::new();
        for name in scope.self_to_root() {
            let Some(definition) = build.scopes.get(name) else {
                continue;
            };
            for dependency in &definition.dependencies {
                if seen.insert(dependency.key().clone()) {
                    requested.push(dependency.clone());
                }
            }
        }
        requested
    }

    fn resolve_scope(
        &self,
        container: &DependencyManagementContainer,
        build: &BuildDefinition,
        scope: &Scope,
    ) -> ScopeResolution {
        let mut resolution = ScopeResolution {
            scope: scope.name().to_string(),
            hierarchy: scope.self_to_root().map(str::to_string).collect(),
            dependencies: Vec::new(),
            explicit_dependencies: container.explicitly_managed_dependencies(Some(scope)),
            imported_boms: Vec::new(),
            error: None,
        };

        match Self::apply_to_dependencies(container, &build.local_projects, build, scope) {
            Ok(dependencies) => resolution.dependencies = dependencies,
            Err(err) => {
                self.progress_reporter.report_error(&format!("❌ {}", err));
                resolution.error = Some(err.to_string());
                return resolution;
            }
        }

        match container.imported_boms(Some(scope)) {
            Ok(boms) => resolution.imported_boms = boms.into_iter().map(|bom| bom.coordinates).collect(),
            Err(err) => resolution.error = Some(err.to_string()),
        }
        resolution
    }

    fn apply_to_dependencies(
        container: &DependencyManagementContainer,
        local_projects: &LocalProjects,
        build: &BuildDefinition,
        scope: &Scope,
    ) -> Result<Vec<ResolvedDependency>> {
        let action = VersionResolutionAction::new(container, local_projects, Some(scope));
        let exclusions: Exclusions = container.exclusions(Some(scope))?;

        Self::requested_dependencies(build, scope)
            .into_iter()
            .map(|requested| {
                let mut details = DependencyResolveDetails::new(requested);
                let decision = action.execute(&mut details)?;
                let key = details.requested().key().clone();
                Ok(ResolvedDependency {
                    exclusions: exclusions
                        .exclusions_for_dependency(&key)
                        .map(|set| set.iter().cloned().collect())
                        .unwrap_or_default(),
                    requested_version: details.requested().version().map(str::to_string),
                    version: details.target_version().map(str::to_string),
                    dependency: key,
                    decision,
                })
            })
            .collect()
    }

    fn report_outcome(&self, response: &ResolveResponse) {
        let failures = response.failure_count();
        if failures == 0 {
            self.progress_reporter.report_completion(&format!(
                "✅ Resolved dependency management for {} scope(s)",
                response.scopes.len()
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "⚠️  {} of {} scope(s) failed to resolve their imported BOMs",
                failures,
                response.scopes.len()
            ));
        }
    }
}

#[cfg(test)]
mod tests;
