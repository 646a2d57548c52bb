//! Form input state for the three known text fields.

/// Current values of the title/author/isbn inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all three fields to empty strings.
    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
        self.isbn.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::FormState;

    #[test]
    fn clear_resets_every_field() {
        let mut form = FormState {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "9780441013593".to_string(),
        };
        form.clear();
        assert_eq!(form, FormState::default());
    }
}
