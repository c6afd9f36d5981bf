//! A small HTML builder that escapes by default.
//!
//! Text goes through [`Html::text`] and is always escaped; raw markup has to
//! be pushed explicitly with [`Html::trusted`].

/// Accumulates an HTML document.
#[derive(Debug, Default, Clone)]
pub struct Html {
    buf: String,
}

impl Html {
    /// Starts an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `tag`. Tag names are always literals from this crate.
    pub fn open(&mut self, tag: &'static str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Closes `tag`.
    pub fn close(&mut self, tag: &'static str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Appends escaped text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        html_escape::encode_text_to_string(text, &mut self.buf);
        self
    }

    /// Appends markup as is. Only for content that is already HTML.
    pub fn trusted(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Appends `<a href="{href}">{text}</a>`, escaping both parts.
    pub fn link(&mut self, href: &str, text: &str) -> &mut Self {
        self.buf.push_str("<a href=\"");
        html_escape::encode_double_quoted_attribute_to_string(href, &mut self.buf);
        self.buf.push_str("\">");
        self.text(text);
        self.close("a")
    }

    /// Appends a line break in the source, not in the rendered page.
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Returns the document built so far.
    pub fn finish(self) -> String {
        self.buf
    }
}
