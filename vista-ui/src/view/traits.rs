pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again!";

/// Payload a view renders. Sequences report emptiness; records never do.
pub trait ViewData {
    /// An empty payload is routed to the error display instead of being rendered.
    fn is_empty(&self) -> bool {
        false
    }
}

impl<T> ViewData for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// Markup provider
///
/// Every concrete view implements this. `generate_markup` must be a pure
/// function of `data`: no display tree access, same output for the same
/// input, and a stable element count for the parts `update` should patch.
pub trait View {
    type Data: ViewData;

    fn generate_markup(&self, data: &Self::Data) -> String;

    /// Shown by the error display when no message is passed, and for empty data.
    fn error_message(&self) -> &str {
        DEFAULT_ERROR_MESSAGE
    }

    /// Shown by the message display when no message is passed.
    fn default_message(&self) -> &str {
        ""
    }

    /// Non-mounting render, used to compose one view out of another.
    /// Empty data yields nothing.
    fn render_to_string(&self, data: &Self::Data) -> Option<String> {
        if data.is_empty() {
            return None;
        }
        Some(self.generate_markup(data))
    }
}
