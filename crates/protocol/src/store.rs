//! The in-memory task store.
//!
//! [`TaskStore`] owns the ordered task collection and is the only place
//! tasks are created, changed or removed. Operations that reference an
//! unknown id do nothing; their return value only tells the caller whether
//! anything happened.
//!
//! # Examples
//!
//! ```
//! use todo_protocol::{TaskPayload, TaskStatus, TaskStore};
//!
//! let mut store = TaskStore::new();
//! let id = store.create(TaskPayload::normalized("Ship it", "", TaskStatus::ToDo));
//!
//! store.move_task(id, TaskStatus::Done);
//! assert!(store.get(id).unwrap().is_completed());
//!
//! store.advance_status(id);
//! assert_eq!(store.get(id).unwrap().status, TaskStatus::ToDo);
//! ```

use std::cell::OnceCell;

use tracing::debug;

use crate::payload::TaskPayload;
use crate::task::{Task, TaskId, TaskStatus};

/// Positions of the tasks of each status within the collection.
#[derive(Debug, Clone, Default)]
struct StatusIndex {
    columns: [Vec<usize>; 3],
}

impl StatusIndex {
    fn build(tasks: &[Task]) -> Self {
        let mut index = Self::default();
        for (position, task) in tasks.iter().enumerate() {
            index.columns[task.status.index()].push(position);
        }
        index
    }
}

/// An ordered, in-memory collection of tasks.
///
/// The collection is ordered newest-created first; that order is also the
/// display order within each status column.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Grouping by status, computed on first use after each change.
    groups: OnceCell<StatusIndex>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given tasks, in the given order.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            groups: OnceCell::new(),
        }
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over all tasks in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns `true` if a task with the given id exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Adds a new task built from `payload` at the front of the collection.
    ///
    /// Returns the id assigned to the new task.
    pub fn create(&mut self, payload: TaskPayload) -> TaskId {
        let task = Task::new(payload);
        let id = task.id;
        debug!(%id, status = %task.status, "task created");
        self.tasks.insert(0, task);
        self.invalidate();
        id
    }

    /// Replaces the title, description and status of a task.
    ///
    /// Returns `false` if no task has the given id.
    pub fn update(&mut self, id: TaskId, payload: TaskPayload) -> bool {
        let Some(task) = self.get_mut(id) else {
            debug!(%id, "update ignored, no such task");
            return false;
        };
        task.apply(payload);
        debug!(%id, status = %task.status, "task updated");
        self.invalidate();
        true
    }

    /// Advances a task to the next status, wrapping `Done` back to `ToDo`.
    ///
    /// Returns the new status, or `None` if no task has the given id.
    pub fn advance_status(&mut self, id: TaskId) -> Option<TaskStatus> {
        let Some(task) = self.get_mut(id) else {
            debug!(%id, "advance ignored, no such task");
            return None;
        };
        let next = task.status.next();
        task.set_status(next);
        debug!(%id, status = %next, "task advanced");
        self.invalidate();
        Some(next)
    }

    /// Sets the status of a task directly, as a drop onto a column does.
    ///
    /// Returns `false` if no task has the given id.
    pub fn move_task(&mut self, id: TaskId, to: TaskStatus) -> bool {
        let Some(task) = self.get_mut(id) else {
            debug!(%id, "move ignored, no such task");
            return false;
        };
        task.set_status(to);
        debug!(%id, status = %to, "task moved");
        self.invalidate();
        true
    }

    /// Removes a task from the collection.
    ///
    /// Returns the removed task, or `None` if no task has the given id.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(position) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(%id, "delete ignored, no such task");
            return None;
        };
        let removed = self.tasks.remove(position);
        debug!(%id, "task deleted");
        self.invalidate();
        Some(removed)
    }

    /// Groups the tasks by status, preserving collection order.
    ///
    /// The grouping is computed once and reused until the collection
    /// changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::{TaskPayload, TaskStatus, TaskStore};
    ///
    /// let mut store = TaskStore::new();
    /// store.create(TaskPayload::normalized("First", "", TaskStatus::Doing));
    /// store.create(TaskPayload::normalized("Second", "", TaskStatus::Doing));
    ///
    /// let groups = store.group_by_status();
    /// let titles: Vec<_> = groups.column(TaskStatus::Doing).map(|t| t.title.as_str()).collect();
    /// assert_eq!(titles, ["Second", "First"]);
    /// assert_eq!(groups.len(TaskStatus::ToDo), 0);
    /// ```
    #[must_use]
    pub fn group_by_status(&self) -> StatusGroups<'_> {
        StatusGroups {
            tasks: &self.tasks,
            index: self.groups.get_or_init(|| StatusIndex::build(&self.tasks)),
        }
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn invalidate(&mut self) {
        self.groups = OnceCell::new();
    }
}

/// A read-only view of the tasks partitioned into status columns.
#[derive(Debug, Clone, Copy)]
pub struct StatusGroups<'a> {
    tasks: &'a [Task],
    index: &'a StatusIndex,
}

impl<'a> StatusGroups<'a> {
    /// Iterates over the tasks of one column in display order.
    pub fn column(&self, status: TaskStatus) -> impl Iterator<Item = &'a Task> + use<'a> {
        let tasks = self.tasks;
        let index = self.index;
        index.columns[status.index()]
            .iter()
            .filter_map(move |&position| tasks.get(position))
    }

    /// Returns the number of tasks in one column.
    #[must_use]
    pub fn len(&self, status: TaskStatus) -> usize {
        self.index.columns[status.index()].len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self, status: TaskStatus) -> bool {
        self.len(status) == 0
    }

    /// Returns the task at `row` within a column.
    #[must_use]
    pub fn get(&self, status: TaskStatus, row: usize) -> Option<&'a Task> {
        let tasks = self.tasks;
        let position = *self.index.columns[status.index()].get(row)?;
        tasks.get(position)
    }

    /// Returns the row of a task within its column.
    #[must_use]
    pub fn row_of(&self, id: TaskId) -> Option<(TaskStatus, usize)> {
        TaskStatus::all().into_iter().find_map(|status| {
            self.column(status)
                .position(|t| t.id == id)
                .map(|row| (status, row))
        })
    }
}
