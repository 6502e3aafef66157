//! Centralized layout measurements and geometry for the TUI.
//!
//! The renderers and the mouse hit-testing in [`App`](crate::App) must agree
//! on where every column, card and button is. Both go through the helpers
//! in this module, so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};
use todo_protocol::{StatusGroups, TaskStatus};

use crate::form::FormField;

/// Height of the header bar in rows.
///
/// Two lines of text inside a rounded border.
pub const HEADER_HEIGHT: u16 = 4;

/// Height of the footer in rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of each task card in rows.
///
/// Border (2 rows) plus title and description. The action row is drawn
/// on the bottom border.
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Height of the "Add task" row at the top of each column.
pub const ADD_ROW_HEIGHT: u16 = 1;

/// Width of the task form popup.
pub const FORM_WIDTH: u16 = 58;

/// Height of the task form popup.
pub const FORM_HEIGHT: u16 = 15;

/// Number of text rows in the description field.
pub const DESCRIPTION_ROWS: u16 = 3;

/// Minimum terminal height for useful rendering.
///
/// Enough for the form popup above the footer. Below this height a
/// "terminal too small" message is shown instead.
pub const MIN_HEIGHT: u16 = FORM_HEIGHT + FOOTER_HEIGHT;

/// Minimum terminal height for rendering with the header.
///
/// Between `MIN_HEIGHT` and this value the header is hidden.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Three columns of 20 cells each fit a card with its action row.
pub const MIN_WIDTH: u16 = 60;

/// Width of one card action label such as `[e]`.
const ACTION_WIDTH: u16 = 3;

/// Narrowest card that still shows its action row.
const MIN_ACTION_CARD_WIDTH: u16 = 3 * (ACTION_WIDTH + 1) + 2;

/// Position of a column in the horizontal layout.
///
/// Adjacent columns share a border: every column draws its left edge and
/// only the last one draws a right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Leftmost column.
    First,
    /// Any column between the first and the last.
    Middle,
    /// Rightmost column, the only one with a right border.
    Last,
}

impl ColumnPosition {
    /// Returns the position of column `index` out of `count`.
    #[must_use]
    pub const fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }

    /// Returns the borders drawn by a column at this position.
    #[must_use]
    pub fn borders(self) -> Borders {
        match self {
            Self::First | Self::Middle => Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            Self::Last => Borders::ALL,
        }
    }
}

/// A button drawn on a card's bottom border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Move the task to its next status.
    Advance,
    /// Open the edit form.
    Edit,
    /// Delete the task.
    Delete,
}

impl CardAction {
    /// Returns all actions in left-to-right order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Advance, Self::Edit, Self::Delete]
    }

    /// Returns the label drawn for this action.
    ///
    /// The advance button shows a check mark on completed tasks.
    #[must_use]
    pub const fn label(self, completed: bool) -> &'static str {
        match self {
            Self::Advance if completed => "[✓]",
            Self::Advance => "[→]",
            Self::Edit => "[e]",
            Self::Delete => "[x]",
        }
    }
}

/// Returns where each action label of a card goes.
///
/// Labels are right-aligned on the bottom border, leaving the corner
/// free. Returns `None` when the card is too small to show them.
#[must_use]
pub fn card_action_areas(card: Rect) -> Option<[(CardAction, Rect); 3]> {
    if card.width < MIN_ACTION_CARD_WIDTH || card.height < TASK_CARD_HEIGHT {
        return None;
    }

    let y = card.bottom() - 1;
    let right = card.right() - 1;
    let slot = |from_right: u16| {
        let x = right - from_right * (ACTION_WIDTH + 1);
        Rect::new(x, y, ACTION_WIDTH, 1)
    };

    Some([
        (CardAction::Advance, slot(3)),
        (CardAction::Edit, slot(2)),
        (CardAction::Delete, slot(1)),
    ])
}

/// Calculates the scroll offset that keeps the selected card visible.
///
/// The selection is kept near the middle of the column once the column
/// holds more cards than fit.
#[must_use]
pub fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    let max_offset = total_tasks.saturating_sub(visible_tasks);
    selected.saturating_sub(visible_tasks / 2).min(max_offset)
}

/// Inner areas of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// The column including its borders.
    pub area: Rect,
    /// The "Add task" row.
    pub add_row: Rect,
    /// Where the cards go.
    pub cards: Rect,
}

impl ColumnLayout {
    /// Splits a column area into its add row and card list.
    #[must_use]
    pub fn new(area: Rect, position: ColumnPosition) -> Self {
        let inner = Block::default().borders(position.borders()).inner(area);
        let [add_row, cards] =
            Layout::vertical([Constraint::Length(ADD_ROW_HEIGHT), Constraint::Min(0)]).areas(inner);
        Self {
            area,
            add_row,
            cards,
        }
    }

    /// Returns how many cards fit, never less than one.
    #[must_use]
    pub fn visible_cards(&self) -> usize {
        usize::from((self.cards.height / TASK_CARD_HEIGHT).max(1))
    }

    /// Returns the area of the `slot`-th visible card, clipped to the list.
    #[must_use]
    pub fn card_slot(&self, slot: usize) -> Option<Rect> {
        if slot >= self.visible_cards() {
            return None;
        }
        let offset = u16::try_from(slot).ok()?.checked_mul(TASK_CARD_HEIGHT)?;
        let rect = Rect::new(
            self.cards.x,
            self.cards.y.saturating_add(offset),
            self.cards.width,
            TASK_CARD_HEIGHT,
        )
        .intersection(self.cards);
        (!rect.is_empty()).then_some(rect)
    }

    /// Returns the visible slot under `row`, if any.
    #[must_use]
    pub fn slot_at(&self, row: u16) -> Option<usize> {
        if row < self.cards.y || row >= self.cards.bottom() {
            return None;
        }
        let slot = usize::from((row - self.cards.y) / TASK_CARD_HEIGHT);
        (slot < self.visible_cards()).then_some(slot)
    }
}

/// What a mouse press on the board landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardHit {
    /// The "Add task" row of a column.
    AddTask(TaskStatus),
    /// A card; `action` is set when one of its buttons was hit.
    Card {
        /// Column of the card.
        status: TaskStatus,
        /// Row of the card within its column.
        row: usize,
        /// Button under the pointer, if any.
        action: Option<CardAction>,
    },
    /// Empty space inside a column.
    Column(TaskStatus),
}

/// Geometry of the three board columns within a board area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    columns: [ColumnLayout; 3],
}

impl BoardGeometry {
    /// Splits `area` into three equal columns.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let areas: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
        let count = areas.len();
        let columns = std::array::from_fn(|i| ColumnLayout::new(areas[i], ColumnPosition::of(i, count)));
        Self { columns }
    }

    /// Returns the layout of the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &ColumnLayout {
        &self.columns[status.index()]
    }

    /// Returns the column under the given position, if any.
    #[must_use]
    pub fn status_at(&self, column: u16, row: u16) -> Option<TaskStatus> {
        let position = Position::new(column, row);
        TaskStatus::all()
            .into_iter()
            .find(|status| self.column(*status).area.contains(position))
    }

    /// Resolves a mouse position to the element drawn there.
    ///
    /// `focused` and `selected_row` must be the values the board was
    /// rendered with, since they decide the focused column's scroll offset.
    #[must_use]
    pub fn hit(
        &self,
        groups: &StatusGroups<'_>,
        focused: TaskStatus,
        selected_row: Option<usize>,
        column: u16,
        row: u16,
    ) -> Option<BoardHit> {
        let status = self.status_at(column, row)?;
        let layout = self.column(status);
        let position = Position::new(column, row);

        if layout.add_row.contains(position) {
            return Some(BoardHit::AddTask(status));
        }

        let Some(slot) = layout.slot_at(row).filter(|_| layout.cards.contains(position)) else {
            return Some(BoardHit::Column(status));
        };

        let selected = if status == focused { selected_row } else { None };
        let offset =
            calculate_scroll_offset(selected, groups.len(status), layout.visible_cards());
        let task_row = offset + slot;
        if task_row >= groups.len(status) {
            return Some(BoardHit::Column(status));
        }

        let action = layout
            .card_slot(slot)
            .and_then(card_action_areas)
            .and_then(|areas| {
                areas
                    .into_iter()
                    .find(|(_, rect)| rect.contains(position))
                    .map(|(action, _)| action)
            });

        Some(BoardHit::Card {
            status,
            row: task_row,
            action,
        })
    }
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// is clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + area.width.saturating_sub(popup_width) / 2;
    let y = area.y + area.height.saturating_sub(popup_height) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

/// Width of the cancel button label, `[ Cancel ]`.
const CANCEL_BUTTON_WIDTH: u16 = 10;

/// Width reserved for the submit button label, `[ Save changes ]`.
const SUBMIT_BUTTON_WIDTH: u16 = 16;

/// Areas of the task form popup.
///
/// Rows inside the border, top to bottom: subtitle, title label, title
/// input, error line, description label, description input, status label,
/// status options, hint, a blank row, and the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormGeometry {
    /// The popup including its border.
    pub popup: Rect,
    /// Subtitle under the heading.
    pub subtitle: Rect,
    /// "Title *" label.
    pub title_label: Rect,
    /// Title input.
    pub title: Rect,
    /// Validation message under the title.
    pub error: Rect,
    /// "Description (optional)" label.
    pub description_label: Rect,
    /// Description input.
    pub description: Rect,
    /// "Status" label.
    pub status_label: Rect,
    /// One option per status, in column order.
    pub status_options: [Rect; 3],
    /// Hint under the status options.
    pub hint: Rect,
    /// Cancel button.
    pub cancel: Rect,
    /// Submit button.
    pub submit: Rect,
}

/// What a mouse press landed on while the form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormHit {
    /// Outside the popup.
    Backdrop,
    /// A text field.
    Field(FormField),
    /// One of the status options.
    StatusOption(TaskStatus),
    /// The cancel button.
    Cancel,
    /// The submit button.
    Submit,
    /// Anywhere else inside the popup.
    Inside,
}

impl FormGeometry {
    /// Centers the popup in `area` and lays out its rows.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        let inner = Block::default().borders(Borders::ALL).inner(popup);
        let rows = |offset: u16, height: u16| {
            Rect::new(inner.x, inner.y.saturating_add(offset), inner.width, height)
                .intersection(inner)
        };

        let status_row = rows(9, 1);
        let buttons = rows(12, 1);
        let submit_width = SUBMIT_BUTTON_WIDTH.min(buttons.width);
        let submit = Rect::new(
            buttons.right().saturating_sub(submit_width),
            buttons.y,
            submit_width,
            buttons.height,
        );
        let cancel_x = submit.x.saturating_sub(CANCEL_BUTTON_WIDTH + 2).max(buttons.x);
        let cancel = Rect::new(
            cancel_x,
            buttons.y,
            CANCEL_BUTTON_WIDTH.min(submit.x.saturating_sub(cancel_x)),
            buttons.height,
        );

        Self {
            popup,
            subtitle: rows(0, 1),
            title_label: rows(1, 1),
            title: rows(2, 1),
            error: rows(3, 1),
            description_label: rows(4, 1),
            description: rows(5, DESCRIPTION_ROWS),
            status_label: rows(8, 1),
            status_options: Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(status_row),
            hint: rows(10, 1),
            cancel,
            submit,
        }
    }

    /// Resolves a mouse position to the form element drawn there.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> FormHit {
        let position = Position::new(column, row);
        if !self.popup.contains(position) {
            return FormHit::Backdrop;
        }
        if self.title.contains(position) {
            return FormHit::Field(FormField::Title);
        }
        if self.description.contains(position) {
            return FormHit::Field(FormField::Description);
        }
        if let Some(status) = TaskStatus::all()
            .into_iter()
            .find(|status| self.status_options[status.index()].contains(position))
        {
            return FormHit::StatusOption(status);
        }
        if self.cancel.contains(position) {
            return FormHit::Cancel;
        }
        if self.submit.contains(position) {
            return FormHit::Submit;
        }
        FormHit::Inside
    }
}
