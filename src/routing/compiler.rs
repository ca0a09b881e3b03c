//! Controller compilation: the single entry point of the routing core.
//!
//! # Responsibilities
//! - Resolve the controller identifier through the injected resolver
//! - Enumerate public operations, own first, then inherited
//! - Classify, compile and build one route per routable operation
//! - Return the prioritized RouteSet
//!
//! # Design Decisions
//! - No I/O: registration and listing emission belong to the caller
//! - Conventions are fixed at construction, so one compiler can be shared
//!   across threads
//! - Resolution failures abort the whole controller; everything else
//!   degrades to "this operation produces no route"

use std::collections::HashSet;
use thiserror::Error;

use crate::config::ConventionsConfig;
use crate::descriptor::{resolve, ClassResolutionError, ClassResolver, ControllerDescriptor, Operation};
use crate::routing::prioritize::prioritize;
use crate::routing::route::{build_route, Route, RouteSet};
use crate::routing::slug::compile_slug;
use crate::routing::verb::{classify, VerbMatching};

/// Operation that is never routable, whatever the configured conventions say.
pub const RESERVED_OPERATION: &str = "getMiddleware";

/// Errors that abort compilation of a controller.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Resolution(#[from] ClassResolutionError),

    #[error("inheritance cycle detected at class `{class}`")]
    InheritanceCycle { class: String },
}

/// Compiles controllers into ordered route sets.
#[derive(Debug, Clone)]
pub struct ControllerCompiler<R> {
    resolver: R,
    conventions: ConventionsConfig,
}

impl<R: ClassResolver> ControllerCompiler<R> {
    /// Create a compiler over `resolver` with fixed conventions.
    pub fn new(resolver: R, conventions: ConventionsConfig) -> Self {
        Self {
            resolver,
            conventions,
        }
    }

    pub fn conventions(&self) -> &ConventionsConfig {
        &self.conventions
    }

    /// Compile every routable operation of `controller` under `base_path`.
    pub fn compile(&self, base_path: &str, controller: &str) -> Result<RouteSet, CompileError> {
        let descriptor = resolve(
            &self.resolver,
            &self.conventions.controller_namespace,
            controller,
        )?;
        let operations = self.public_operations(descriptor)?;

        let routes: Vec<Route> = operations
            .into_iter()
            .filter_map(|op| self.compile_operation(base_path, &descriptor.name, op))
            .collect();
        let routes = prioritize(routes);

        tracing::info!(
            controller = %descriptor.name,
            base_path = %base_path,
            routes = routes.len(),
            "Controller compiled"
        );
        Ok(routes)
    }

    /// Public operations of the class and its ancestors.
    ///
    /// Operations declared lower in the hierarchy hide ancestor operations
    /// of the same name.
    fn public_operations<'a>(
        &'a self,
        descriptor: &'a ControllerDescriptor,
    ) -> Result<Vec<&'a Operation>, CompileError> {
        let mut operations = Vec::new();
        let mut declared: HashSet<&str> = HashSet::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = descriptor;

        loop {
            if !visited.insert(current.name.as_str()) {
                return Err(CompileError::InheritanceCycle {
                    class: current.name.clone(),
                });
            }

            for op in &current.operations {
                if declared.insert(op.name.as_str()) && op.is_public() {
                    operations.push(op);
                }
            }

            match &current.parent {
                Some(parent) => {
                    current = resolve(
                        &self.resolver,
                        &self.conventions.controller_namespace,
                        parent,
                    )?;
                }
                None => break,
            }
        }

        Ok(operations)
    }

    fn compile_operation(&self, base_path: &str, class: &str, op: &Operation) -> Option<Route> {
        if op.name == RESERVED_OPERATION
            || self.conventions.reserved_operations.iter().any(|r| *r == op.name)
        {
            tracing::debug!(operation = %op.name, "Skipping reserved operation");
            return None;
        }

        let Some(classified) = classify(&op.name, self.conventions.verb_matching) else {
            tracing::debug!(operation = %op.name, "No verb prefix, operation not routable");
            return None;
        };

        if self.conventions.verb_matching == VerbMatching::Prefix && classified.lacks_word_boundary() {
            tracing::debug!(
                operation = %op.name,
                verb = %classified.verb,
                "Verb prefix runs into a lowercase letter; check the operation name"
            );
        }

        let slug = compile_slug(classified.remainder, op, &self.conventions.request_type);
        Some(build_route(base_path, &slug, classified.verb, class, &op.name))
    }
}
