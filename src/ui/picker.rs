//! Interactive picker backed by inquire

use inquire::Select;
use scheme_editor::error::Result;
use scheme_editor::{Choice, DisplayRow, Presenter};

use super::format::picker_labels;
use super::progress::Spinner;

const PAGE_SIZE: usize = 15;

/// Presents rows in an inquire `Select` list
///
/// inquire reports only the final pick, so the highlight callback fires once
/// for the row under the starting cursor. A spinner handed over with
/// [`InquirePresenter::with_spinner`] is cleared before the list is drawn.
#[derive(Default)]
pub struct InquirePresenter {
    prompt: String,
    spinner: Option<Spinner>,
}

impl InquirePresenter {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            spinner: None,
        }
    }

    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        self.spinner = Some(spinner);
        self
    }
}

impl Presenter for InquirePresenter {
    fn show_choices(
        &mut self,
        rows: &[DisplayRow],
        on_highlight: Option<&mut dyn FnMut(usize)>,
    ) -> Result<Choice> {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }

        if rows.is_empty() {
            eprintln!("No matching resources.");
            return Ok(Choice::Dismissed);
        }

        if let Some(callback) = on_highlight {
            callback(0);
        }

        let picked = Select::new(&self.prompt, picker_labels(rows))
            .with_starting_cursor(0)
            .with_page_size(PAGE_SIZE)
            .with_help_message("↑↓ to move, type to filter, ENTER to select, ESC to cancel")
            .raw_prompt_skippable()?;

        Ok(picked.map_or(Choice::Dismissed, |option| Choice::Picked(option.index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows_dismiss_without_prompting() {
        let mut presenter = InquirePresenter::new("Select a color scheme");
        let mut highlighted = Vec::new();
        let mut callback = |index: usize| highlighted.push(index);
        let choice = presenter
            .show_choices(&[], Some(&mut callback as &mut dyn FnMut(usize)))
            .unwrap_or(Choice::Picked(99));
        assert_eq!(choice, Choice::Dismissed);
        assert!(highlighted.is_empty());
    }

    #[test]
    fn test_spinner_is_released_before_presenting() {
        let mut presenter =
            InquirePresenter::new("Select a color scheme").with_spinner(Spinner::start("Scanning"));
        let _ = presenter.show_choices(&[], None);
        assert!(presenter.spinner.is_none());
    }
}
