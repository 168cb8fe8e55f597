//! The pack diff engine.

use super::changes::{
    diff_error_taxonomy, diff_states, diff_string_set, diff_vocabulary, RemovalImpact,
};
use super::log::ChangeLog;
use super::result::DiffResult;
use crate::model::ContextPack;

/// Configuration for a [`PackDiffEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Impact of removing a user goal
    pub goal_removal: RemovalImpact,
    /// Impact of removing a core action
    pub action_removal: RemovalImpact,
}

/// Semantic diff engine for context packs.
///
/// A diff is a pure function of the two documents: the engine holds only
/// configuration, retains no state between invocations, and never mutates
/// its inputs. Section differs run in a fixed order (states, vocabulary,
/// user goals, core actions, error taxonomy) because change codes are
/// assigned in run order and code stability is part of the contract.
#[derive(Debug, Clone, Default)]
pub struct PackDiffEngine {
    config: EngineConfig,
}

impl PackDiffEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Compare two packs and produce the classified change report.
    pub fn diff(&self, base: &ContextPack, head: &ContextPack) -> DiffResult {
        let mut log = ChangeLog::new();

        diff_states(&base.states, &head.states, &mut log);
        diff_vocabulary(&base.vocabulary, &head.vocabulary, &mut log);
        diff_string_set(
            "user_goals",
            &base.user_goals,
            &head.user_goals,
            self.config.goal_removal,
            &mut log,
        );
        diff_string_set(
            "core_actions",
            &base.core_actions,
            &head.core_actions,
            self.config.action_removal,
            &mut log,
        );
        diff_error_taxonomy(&base.error_taxonomy, &head.error_taxonomy, &mut log);

        tracing::debug!(
            changes = log.len(),
            pack = base.name(),
            "diff complete"
        );

        DiffResult {
            pack_name: base.name().to_string(),
            base_version: base.version().to_string(),
            head_version: head.version().to_string(),
            changes: log.into_changes(),
        }
    }
}
