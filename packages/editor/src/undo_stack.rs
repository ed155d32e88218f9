//! # Undo/Redo Stack
//!
//! Tracks mutation history over a [`PageDocument`].
//!
//! ## Design
//!
//! - Each applied mutation reports restore-style inverses; the stack
//!   records them before moving on
//! - Undo applies the inverses and captures *their* inverses as the redo
//!   ops, so generated section ids survive undo/redo round trips intact
//! - New mutations clear the redo stack
//! - Batches group several mutations into one undo step (a preset
//!   application plus a follow-up tweak, for instance)

use crate::document::PageDocument;
use crate::mutations::{Mutation, MutationOutcome};

/// A group of mutations undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// Mutations as originally applied, in application order
    pub mutations: Vec<Mutation>,

    /// Ops that revert this step, in the order they must be applied
    undo_ops: Vec<Mutation>,

    /// Ops that reapply this step; refreshed on every undo so ids stay
    /// stable
    redo_ops: Vec<Mutation>,

    pub description: Option<String>,
}

impl MutationBatch {
    fn new() -> Self {
        Self {
            mutations: Vec::new(),
            undo_ops: Vec::new(),
            redo_ops: Vec::new(),
            description: None,
        }
    }

    fn record(&mut self, mutation: Mutation, inverses: Vec<Mutation>) {
        self.mutations.push(mutation);
        // Later mutations revert first; order inside one mutation's inverse
        // group is preserved.
        let mut ops = inverses;
        ops.extend(self.undo_ops.drain(..));
        self.undo_ops = ops;
    }
}

/// Undo/redo stack for page editing
#[derive(Debug)]
pub struct UndoStack {
    undo_stack: Vec<MutationBatch>,
    redo_stack: Vec<MutationBatch>,

    /// 0 = unlimited
    max_levels: usize,

    current_batch: Option<MutationBatch>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo
    ///
    /// No-ops (stale targets) are not recorded: undoing nothing would be
    /// surprising history.
    pub fn apply(&mut self, mutation: Mutation, doc: &mut PageDocument) -> MutationOutcome {
        let outcome = doc.apply(mutation.clone());

        if let MutationOutcome::Applied { inverses } = &outcome {
            if let Some(batch) = &mut self.current_batch {
                batch.record(mutation, inverses.clone());
            } else {
                let mut batch = MutationBatch::new();
                batch.record(mutation, inverses.clone());
                self.push_batch(batch);
            }
        }

        outcome
    }

    /// Start grouping mutations into one undo step
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(MutationBatch::new());
    }

    /// Close the current batch and push it onto the undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.mutations.is_empty() {
                self.push_batch(batch);
            }
        }
    }

    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // A new action invalidates the redo future.
        self.redo_stack.clear();
    }

    /// Undo the most recent batch; returns false when there is nothing to
    /// undo
    pub fn undo(&mut self, doc: &mut PageDocument) -> bool {
        let Some(mut batch) = self.undo_stack.pop() else {
            return false;
        };

        let mut redo_ops: Vec<Mutation> = Vec::new();
        for op in &batch.undo_ops {
            if let MutationOutcome::Applied { inverses } = doc.apply(op.clone()) {
                let mut ops = inverses;
                ops.extend(redo_ops.drain(..));
                redo_ops = ops;
            }
        }
        batch.redo_ops = redo_ops;

        self.redo_stack.push(batch);
        true
    }

    /// Redo the most recently undone batch
    pub fn redo(&mut self, doc: &mut PageDocument) -> bool {
        let Some(mut batch) = self.redo_stack.pop() else {
            return false;
        };

        let mut undo_ops: Vec<Mutation> = Vec::new();
        for op in &batch.redo_ops {
            if let MutationOutcome::Applied { inverses } = doc.apply(op.clone()) {
                let mut ops = inverses;
                ops.extend(undo_ops.drain(..));
                undo_ops = ops;
            }
        }
        batch.undo_ops = undo_ops;

        self.undo_stack.push(batch);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
