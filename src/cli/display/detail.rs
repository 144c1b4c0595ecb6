//! Detail view builder for key-value display.

use console::style;

use super::colors::label;

/// A builder for detail views (key-value display).
pub struct DetailView {
    title: String,
    sections: Vec<DetailSection>,
}

struct DetailSection {
    header: Option<String>,
    fields: Vec<(String, String)>,
}

impl DetailView {
    /// Create a new detail view with the given title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: vec![DetailSection {
                header: None,
                fields: vec![],
            }],
        }
    }

    /// Add a key-value field to the current section.
    #[must_use]
    pub fn field(mut self, key: &str, value: &str) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.fields.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Start a new named section with a header.
    #[must_use]
    pub fn section(mut self, header: &str) -> Self {
        self.sections.push(DetailSection {
            header: Some(header.to_string()),
            fields: vec![],
        });
        self
    }

    /// Render the detail view to a string.
    pub fn render(&self) -> String {
        let mut lines = vec![style(&self.title).bold().to_string()];
        let key_width = self
            .sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|(k, _)| k.len())
            .max()
            .unwrap_or(12);

        for section in &self.sections {
            if let Some(header) = &section.header {
                lines.push(String::new());
                lines.push(style(header).bold().underlined().to_string());
            }
            for (key, value) in &section.fields {
                // Pad outside the styled label; escape codes have no width
                let padding = " ".repeat(key_width - key.len());
                lines.push(format!("  {}{padding}  {value}", label(key)));
            }
        }
        lines.join("\n")
    }
}
