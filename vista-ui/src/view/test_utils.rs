use super::traits::View;
use crate::node::escape;
use std::cell::Cell;

/// Renders each string as an `<li>` and counts how often it was asked to.
#[derive(Default)]
pub(crate) struct ListView {
    calls: Cell<usize>,
}

impl ListView {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl View for ListView {
    type Data = Vec<String>;

    fn generate_markup(&self, data: &Self::Data) -> String {
        self.calls.set(self.calls.get() + 1);
        data.iter()
            .map(|item| format!("<li>{}</li>", escape(item)))
            .collect()
    }

    fn error_message(&self) -> &str {
        "Nothing to list"
    }
}
