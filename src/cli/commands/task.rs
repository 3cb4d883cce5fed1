//! Task commands - add, list, toggle, edit, delete, clear

use todo_dash::core::models::{Filter, TaskId};
use todo_dash::core::services::TodoStore;
use todo_dash::output::{
    OperationResult, OutputMode, StatsResult, TaskActionResult, TaskInfo, TaskListResult,
};

fn not_found(action: &'static str, id: TaskId) -> TaskActionResult {
    TaskActionResult {
        success: false,
        action,
        task: None,
        message: format!("Task not found: {id}"),
    }
}

/// Add a task
pub fn add(store: &mut TodoStore, text: &str, mode: OutputMode) -> anyhow::Result<()> {
    let before = store.tasks().len();
    store.add(text);

    let added = if store.tasks().len() > before {
        store.tasks().last()
    } else {
        None
    };

    let result = match added {
        Some(task) => TaskActionResult {
            success: true,
            action: "add",
            task: Some(task.into()),
            message: format!("Added task {}", task.id),
        },
        None => TaskActionResult {
            success: false,
            action: "add",
            task: None,
            message: "Nothing to add: task text is empty".to_string(),
        },
    };

    result.render(mode);
    Ok(())
}

/// List tasks through a filter
pub fn list(store: &mut TodoStore, filter: Filter, mode: OutputMode) -> anyhow::Result<()> {
    store.set_filter(filter);

    let result = TaskListResult {
        filter,
        tasks: store.filtered_view().map(TaskInfo::from).collect(),
        stats: store.stats(),
    };

    result.render(mode);
    Ok(())
}

/// Flip a task between completed and pending
pub fn toggle(store: &mut TodoStore, id: TaskId, mode: OutputMode) -> anyhow::Result<()> {
    store.toggle_complete(id);

    let result = match store.get(id) {
        Some(task) => TaskActionResult {
            success: true,
            action: "toggle",
            task: Some(task.into()),
            message: if task.completed {
                format!("Completed: {id}")
            } else {
                format!("Reopened: {id}")
            },
        },
        None => not_found("toggle", id),
    };

    result.render(mode);
    Ok(())
}

/// Replace a task's text via a single edit session
pub fn edit(store: &mut TodoStore, id: TaskId, text: &str, mode: OutputMode) -> anyhow::Result<()> {
    let Some(current) = store.get(id).map(|t| t.value.clone()) else {
        not_found("edit", id).render(mode);
        return Ok(());
    };

    store.start_edit(id, &current);
    store.set_edit_buffer(text);
    store.commit_edit();

    let result = if store.editing().is_some() {
        // Blank text keeps the edit open; there is nobody left to type.
        store.cancel_edit();
        TaskActionResult {
            success: false,
            action: "edit",
            task: store.get(id).map(TaskInfo::from),
            message: "Nothing to save: task text is empty".to_string(),
        }
    } else {
        TaskActionResult {
            success: true,
            action: "edit",
            task: store.get(id).map(TaskInfo::from),
            message: format!("Updated task {id}"),
        }
    };

    result.render(mode);
    Ok(())
}

/// Delete a task
pub fn delete(store: &mut TodoStore, id: TaskId, mode: OutputMode) -> anyhow::Result<()> {
    let removed = store.get(id).map(TaskInfo::from);
    store.delete(id);

    let result = match removed {
        Some(task) => TaskActionResult {
            success: true,
            action: "delete",
            task: Some(task),
            message: format!("Removed: {id}"),
        },
        None => not_found("delete", id),
    };

    result.render(mode);
    Ok(())
}

/// Delete completed tasks
pub fn clear_completed(store: &mut TodoStore, mode: OutputMode) -> anyhow::Result<()> {
    let before = store.stats();
    store.clear_completed();

    OperationResult {
        success: true,
        message: format!("Cleared {} completed task(s)", before.completed),
    }
    .render(mode);
    Ok(())
}

/// Delete every task
pub fn clear_all(store: &mut TodoStore, mode: OutputMode) -> anyhow::Result<()> {
    let before = store.stats();
    store.clear_all();

    OperationResult {
        success: true,
        message: format!("Cleared {} task(s)", before.total),
    }
    .render(mode);
    Ok(())
}

/// Show counts
pub fn stats(store: &TodoStore, mode: OutputMode) -> anyhow::Result<()> {
    StatsResult {
        stats: store.stats(),
    }
    .render(mode);
    Ok(())
}
