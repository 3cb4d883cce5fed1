//! Task list store
//!
//! Owns the task list, theme flag, active filter and the single edit slot.
//! Every list or theme mutation writes the full state through the
//! [`StateSink`] before returning, including calls that turn out to be
//! no-ops. Filter and edit-buffer changes are view state and are not
//! persisted.
//!
//! Invalid input (blank text, unknown ids) is ignored rather than reported.
//!
//! ```
//! use todo_dash::adapters::{ClockIdSource, MemoryKeyValueStore};
//! use todo_dash::core::services::{KvStateSink, TodoStore};
//!
//! let sink = KvStateSink::new(MemoryKeyValueStore::new());
//! let mut store = TodoStore::init(sink, ClockIdSource::new());
//! store.add("Buy milk");
//! assert_eq!(store.stats().pending, 1);
//! store.teardown().unwrap();
//! ```

use std::collections::HashSet;

use log::{debug, warn};

use crate::core::models::{EditSession, Filter, Snapshot, Stats, Task, TaskId, is_valid_label};
use crate::core::ports::{IdSource, StateSink, StorageError};

/// In-memory task list with write-through persistence
pub struct TodoStore {
    state: Snapshot,
    filter: Filter,
    editing: Option<EditSession>,
    last_id: TaskId,
    dirty: bool,
    sink: Box<dyn StateSink>,
    ids: Box<dyn IdSource>,
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("state", &self.state)
            .field("filter", &self.filter)
            .field("editing", &self.editing)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl TodoStore {
    /// Load persisted state from `sink` and build a store around it
    pub fn init(sink: impl StateSink + 'static, ids: impl IdSource + 'static) -> Self {
        let mut state = sink.load();
        dedupe_ids(&mut state.tasks);
        let last_id = state.tasks.iter().map(|t| t.id).max().unwrap_or(0);

        debug!(
            "Loaded {} task(s), dark_mode={}",
            state.tasks.len(),
            state.dark_mode
        );

        Self {
            state,
            filter: Filter::default(),
            editing: None,
            last_id,
            dirty: false,
            sink: Box::new(sink),
            ids: Box::new(ids),
        }
    }

    /// Flush any unsaved state and release the store
    ///
    /// This is the only place a persistence failure reaches the caller.
    pub fn teardown(self) -> Result<(), StorageError> {
        if self.dirty {
            debug!("Retrying write-back on teardown");
            self.sink.store(&self.state)?;
        }
        Ok(())
    }

    // =========================================================================
    // List mutations
    // =========================================================================

    /// Append a new pending task; blank text is ignored
    pub fn add(&mut self, text: &str) {
        if is_valid_label(text) {
            let id = self.fresh_id();
            debug!("Adding task {id}");
            self.state.tasks.push(Task::new(id, text));
        } else {
            debug!("Ignoring blank task text");
        }
        self.write_back();
    }

    /// Remove the task with `id`, if present
    pub fn delete(&mut self, id: TaskId) {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|t| t.id != id);
        if self.state.tasks.len() < before {
            debug!("Deleted task {id}");
            self.drop_orphaned_edit();
        }
        self.write_back();
    }

    /// Flip the completion flag of the task with `id`, if present
    pub fn toggle_complete(&mut self, id: TaskId) {
        if let Some(task) = self.task_mut(id) {
            task.completed = !task.completed;
            debug!("Task {id} completed={}", task.completed);
        }
        self.write_back();
    }

    /// Remove every completed task, keeping the rest in order
    pub fn clear_completed(&mut self) {
        self.state.tasks.retain(Task::is_pending);
        self.drop_orphaned_edit();
        self.write_back();
    }

    /// Remove every task
    pub fn clear_all(&mut self) {
        self.state.tasks.clear();
        self.editing = None;
        self.write_back();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Open the edit slot on `id`, discarding any previous uncommitted edit
    pub fn start_edit(&mut self, id: TaskId, current_value: &str) {
        if self.get(id).is_none() {
            debug!("Cannot edit unknown task {id}");
            return;
        }
        if let Some(previous) = self.editing.replace(EditSession::new(id, current_value)) {
            debug!("Abandoned edit of task {}", previous.target);
        }
    }

    /// Replace the text in the open edit slot
    pub fn set_edit_buffer(&mut self, text: &str) {
        if let Some(session) = self.editing.as_mut() {
            session.buffer = text.to_string();
        }
    }

    /// Apply the edit buffer to its task
    ///
    /// A blank buffer leaves both the task and the open edit untouched.
    pub fn commit_edit(&mut self) {
        match self.editing.take() {
            None => {},
            Some(session) if !is_valid_label(&session.buffer) => {
                debug!("Refusing blank edit of task {}", session.target);
                self.editing = Some(session);
            },
            Some(EditSession { target, buffer }) => match self.task_mut(target) {
                Some(task) => {
                    task.value = buffer;
                    debug!("Saved edit of task {target}");
                },
                None => debug!("Edited task {target} no longer exists"),
            },
        }
        self.write_back();
    }

    /// Close the edit slot without touching the task
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The open edit, if any
    #[must_use]
    pub const fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// Whether the dark theme is enabled
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.state.dark_mode
    }

    /// Switch between light and dark theme
    pub fn toggle_theme(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        self.write_back();
    }

    /// Set the theme explicitly
    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.state.dark_mode = dark_mode;
        self.write_back();
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Select which tasks [`Self::filtered_view`] yields
    pub const fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// The active filter
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Tasks matching the active filter, in list order
    ///
    /// Call again to restart the sequence.
    pub fn filtered_view(&self) -> impl Iterator<Item = &Task> + '_ {
        let filter = self.filter;
        self.state.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Counts over the whole list
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::of(&self.state.tasks)
    }

    /// All tasks, in list order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Look up a task by id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == id)
    }

    /// The state as last handed to the sink
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    /// True when the most recent write-back failed
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.state.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Ids always increase, even if the clock stalls or steps back, until
    /// nothing is left above the largest id seen.
    fn fresh_id(&mut self) -> TaskId {
        let candidate = self.ids.next_id();
        let Some(floor) = self.last_id.checked_add(1) else {
            return self.unused_id(candidate);
        };
        let id = candidate.max(floor);
        self.last_id = id;
        id
    }

    /// `candidate` if no task holds it, otherwise the highest free id.
    fn unused_id(&self, candidate: TaskId) -> TaskId {
        let used: HashSet<TaskId> = self.state.tasks.iter().map(|t| t.id).collect();
        if !used.contains(&candidate) {
            return candidate;
        }
        warn!("Task ids exhausted above {}, reusing a free id", self.last_id);
        (TaskId::MIN..=TaskId::MAX)
            .rev()
            .find(|id| !used.contains(id))
            .unwrap_or(candidate)
    }

    fn drop_orphaned_edit(&mut self) {
        let orphaned = self.editing.as_ref().is_some_and(|s| self.get(s.target).is_none());
        if orphaned {
            debug!("Closing edit of removed task");
            self.editing = None;
        }
    }

    fn write_back(&mut self) {
        match self.sink.store(&self.state) {
            Ok(()) => self.dirty = false,
            Err(err) => {
                warn!("Failed to persist todo state: {err}");
                self.dirty = true;
            },
        }
    }
}

/// Keep the first task for each id.
fn dedupe_ids(tasks: &mut Vec<Task>) {
    let mut seen = HashSet::new();
    let before = tasks.len();
    tasks.retain(|t| seen.insert(t.id));
    if tasks.len() < before {
        warn!("Dropped {} stored task(s) with duplicate ids", before - tasks.len());
    }
}
