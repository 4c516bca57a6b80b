//! Reviewer selection state over a correction list

use crate::describe::describe;
use crate::icons::icon;
use revisor_domain::{Correction, OperationKind};
use serde::Serialize;

/// A correction offered to the reviewer
///
/// `id` and `description` are fixed when the list is built; only `selected`
/// changes while the reviewer decides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectableCorrection {
    id: String,

    /// Whether the reviewer accepts this correction
    pub selected: bool,

    description: String,

    icon: &'static str,

    #[serde(flatten)]
    correction: Correction,
}

impl SelectableCorrection {
    /// Session-unique id, `<kind>-<index>-<type>`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reviewer-facing description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Icon glyph
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// The wrapped correction
    pub fn correction(&self) -> &Correction {
        &self.correction
    }

    /// Flip the acceptance state
    pub fn toggle(&mut self) {
        self.selected = !self.selected;
    }
}

/// Wrap corrections for review, in input order
pub fn to_selectable(
    kind: OperationKind,
    corrections: &[Correction],
    initial_selected: bool,
) -> Vec<SelectableCorrection> {
    corrections
        .iter()
        .enumerate()
        .map(|(index, correction)| SelectableCorrection {
            id: format!("{}-{}-{}", kind, index, correction.type_name()),
            selected: initial_selected,
            description: describe(kind, correction),
            icon: icon(kind, correction.type_name()),
            correction: correction.clone(),
        })
        .collect()
}

/// The accepted corrections, in list order
pub fn get_selected(list: &[SelectableCorrection]) -> Vec<Correction> {
    list.iter()
        .filter(|item| item.selected)
        .map(|item| item.correction.clone())
        .collect()
}

/// Flip the item with `id`; returns `false` when no item has that id
pub fn toggle(list: &mut [SelectableCorrection], id: &str) -> bool {
    match list.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.toggle();
            true
        }
        None => false,
    }
}

/// Accept or reject every item
pub fn set_all(list: &mut [SelectableCorrection], selected: bool) {
    for item in list.iter_mut() {
        item.selected = selected;
    }
}

/// Number of accepted items
pub fn selected_count(list: &[SelectableCorrection]) -> usize {
    list.iter().filter(|item| item.selected).count()
}
