//! Bot state shared across all event handlers.
//!
//! `BotState` is built once during startup and cloned into the serenity event
//! handler. Every field is cheap to clone: read-only resources sit behind `Arc`,
//! and the statistics store sits behind `Arc<RwLock<_>>` so each message update
//! happens under a single write guard.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    model::{artifact::SubstatTable, reply::ReplyCatalog},
    service::{artifact::ProcEvaluator, stats::StatsStore},
};

#[derive(Clone)]
pub struct BotState {
    /// Roll populations per substat, loaded from `artifacts/substats.json`.
    pub substats: Arc<SubstatTable>,

    /// Conversational replies, loaded from `communication.json`.
    pub replies: Arc<ReplyCatalog>,

    /// Per-user statistics for every tracked member. Lost on restart.
    pub stats: Arc<RwLock<StatsStore>>,

    /// Search bounds used by `/rate`.
    pub evaluator: ProcEvaluator,

    /// Members with this role are ignored by the message handler.
    pub ignored_role_id: Option<u64>,
}

impl BotState {
    pub fn new(
        substats: SubstatTable,
        replies: ReplyCatalog,
        evaluator: ProcEvaluator,
        ignored_role_id: Option<u64>,
    ) -> Self {
        Self {
            substats: Arc::new(substats),
            replies: Arc::new(replies),
            stats: Arc::new(RwLock::new(StatsStore::new())),
            evaluator,
            ignored_role_id,
        }
    }
}
