use crate::cancellation::CancellationToken;
use crate::insert::QuadInserter;
use crate::namespace::NamespaceEnvironment;
use crate::parser::QueryParser;
use crate::{ExecutionError, InsertionError};
use quadstore_model::{ExecutableUnit, SyntaxTree};

/// Statistics of a successful update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// The number of executed units.
    pub units: usize,
    /// The number of inserted quads.
    pub quads: usize,
}

/// Executes the units of an update request one after another.
///
/// Only `INSERT DATA` units are supported. The first failure aborts the whole update. Quads that
/// have been inserted before the failure stay in the store.
pub struct UpdateExecutor<'engine, TParser: QueryParser> {
    parser: &'engine TParser,
    inserter: &'engine QuadInserter,
}

impl<'engine, TParser: QueryParser> UpdateExecutor<'engine, TParser> {
    /// Creates a new [UpdateExecutor].
    pub fn new(parser: &'engine TParser, inserter: &'engine QuadInserter) -> Self {
        Self { parser, inserter }
    }

    /// Executes all units of `tree`. Succeeds only if every unit succeeds.
    pub async fn execute_update(
        &self,
        tree: &SyntaxTree<TParser::Unit>,
        cancellation: &CancellationToken,
    ) -> Result<UpdateSummary, ExecutionError> {
        let env = NamespaceEnvironment::from_prologue(&tree.prologue);
        let mut summary = UpdateSummary::default();

        for (unit_idx, unit) in tree.units.iter().enumerate() {
            if cancellation.is_cancelled() {
                return Err(ExecutionError::Cancelled);
            }

            let quads = match self.parser.parse_executable_unit(unit).await? {
                ExecutableUnit::InsertData { quads } => quads,
                unit => {
                    return Err(ExecutionError::UnsupportedExecutionUnit(
                        unit.kind().to_owned(),
                    ))
                }
            };

            for (quad_idx, quad) in quads.iter().enumerate() {
                self.inserter
                    .insert_quad(quad, &env, cancellation)
                    .await
                    .map_err(|source| match source {
                        InsertionError::Cancelled => ExecutionError::Cancelled,
                        source => ExecutionError::QuadInsertion {
                            unit: unit_idx,
                            quad: quad_idx,
                            source,
                        },
                    })?;
            }

            tracing::debug!(unit = unit_idx, quads = quads.len(), "executed insert data");
            summary.units += 1;
            summary.quads += quads.len();
        }

        Ok(summary)
    }
}
