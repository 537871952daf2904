//! Indented, color-coded text output for decoded Netbox objects

use std::collections::BTreeMap;

use colored::Colorize;
use serde_json::Value;

/// Placeholder printed for absent or empty fields
pub const NOT_FOUND: &str = "no entry found";

const INDENT: &str = "    ";
const LABEL_WIDTH: usize = 28;
/// Lists whose joined text stays under this width are printed on one line
const INLINE_LIST_WIDTH: usize = 60;

/// A type that knows how to walk its own fields
pub trait Render {
    fn render(&self, r: &mut Renderer);
}

/// How one field value is printed
pub trait Field {
    /// Single-line text, or `None` when the value is absent
    fn text(&self) -> Option<String>;

    fn write(&self, r: &mut Renderer, label: &str) {
        match self.text() {
            Some(text) => r.line(label, &text),
            None => r.missing(label),
        }
    }
}

#[derive(Clone, Copy)]
enum Paint {
    Label,
    Title,
    Heading,
    Missing,
}

pub struct Renderer {
    buf: String,
    depth: usize,
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            buf: String::new(),
            depth: 0,
            color,
        }
    }

    pub fn field<F: Field + ?Sized>(&mut self, label: &str, value: &F) {
        value.write(self, label);
    }

    pub fn line(&mut self, label: &str, value: &str) {
        let label = self.label(label);
        self.push(&format!("{} {}", label, value));
    }

    pub fn missing(&mut self, label: &str) {
        let label = self.label(label);
        let placeholder = self.paint(NOT_FOUND, Paint::Missing);
        self.push(&format!("{} {}", label, placeholder));
    }

    /// Heading followed by indented content
    pub fn section(&mut self, label: &str, body: impl FnOnce(&mut Self)) {
        let heading = self.paint(&format!("{}:", label), Paint::Heading);
        self.push(&heading);
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }

    pub fn item(&mut self, text: &str) {
        self.push(&format!("- {}", text));
    }

    /// Title line plus every field of `body`, one level deeper
    pub fn record(&mut self, title: &str, body: &(impl Render + ?Sized)) {
        let title = self.paint(title, Paint::Title);
        self.push(&title);
        self.depth += 1;
        body.render(self);
        self.depth -= 1;
    }

    /// Free-standing line at the current depth
    pub fn note(&mut self, text: &str) {
        self.push(text);
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn label(&self, label: &str) -> String {
        let padded = format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH);
        self.paint(&padded, Paint::Label)
    }

    fn paint(&self, text: &str, paint: Paint) -> String {
        if !self.color {
            return text.to_string();
        }
        match paint {
            Paint::Label => text.cyan().to_string(),
            Paint::Title => text.green().bold().to_string(),
            Paint::Heading => text.yellow().to_string(),
            Paint::Missing => text.red().to_string(),
        }
    }

    fn push(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }
}

impl Field for String {
    fn text(&self) -> Option<String> {
        self.as_str().text()
    }
}

impl Field for str {
    fn text(&self) -> Option<String> {
        let trimmed = self.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

macro_rules! display_field {
    ($($ty:ty),*) => {
        $(
            impl Field for $ty {
                fn text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_field!(bool, u16, u32, u64, i32, i64, f64);

impl<T: Field + ?Sized> Field for &T {
    fn text(&self) -> Option<String> {
        (**self).text()
    }

    fn write(&self, r: &mut Renderer, label: &str) {
        (**self).write(r, label)
    }
}

impl<T: Field> Field for Option<T> {
    fn text(&self) -> Option<String> {
        self.as_ref().and_then(Field::text)
    }

    fn write(&self, r: &mut Renderer, label: &str) {
        match self {
            Some(value) => value.write(r, label),
            None => r.missing(label),
        }
    }
}

impl<T: Field> Field for Vec<T> {
    fn text(&self) -> Option<String> {
        let parts: Vec<String> = self.iter().filter_map(Field::text).collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }

    fn write(&self, r: &mut Renderer, label: &str) {
        let Some(joined) = self.text() else {
            r.missing(label);
            return;
        };
        if joined.len() <= INLINE_LIST_WIDTH {
            r.line(label, &joined);
            return;
        }
        r.section(label, |r| {
            for value in self {
                match value.text() {
                    Some(text) => r.item(&text),
                    None => r.item(NOT_FOUND),
                }
            }
        });
    }
}

impl Field for Value {
    fn text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) => s.text(),
            Value::Array(items) if items.is_empty() => None,
            Value::Object(map) if map.is_empty() => None,
            other => Some(other.to_string()),
        }
    }

    fn write(&self, r: &mut Renderer, label: &str) {
        match self {
            Value::Object(map) if !map.is_empty() => r.section(label, |r| {
                for (key, value) in map {
                    value.write(r, key);
                }
            }),
            other => match other.text() {
                Some(text) => r.line(label, &text),
                None => r.missing(label),
            },
        }
    }
}

impl Field for BTreeMap<String, Value> {
    fn text(&self) -> Option<String> {
        (!self.is_empty()).then(|| serde_json::to_string(self).unwrap_or_default())
    }

    fn write(&self, r: &mut Renderer, label: &str) {
        if self.is_empty() {
            r.missing(label);
            return;
        }
        r.section(label, |r| {
            for (key, value) in self {
                value.write(r, key);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Sample {
        name: String,
        serial: String,
        position: Option<f64>,
        vlans: Vec<u32>,
        extra: BTreeMap<String, Value>,
    }

    impl Render for Sample {
        fn render(&self, r: &mut Renderer) {
            r.field("Name", &self.name);
            r.field("Serial", &self.serial);
            r.field("Position", &self.position);
            r.field("VLANs", &self.vlans);
            r.field("Custom Fields", &self.extra);
        }
    }

    fn sample() -> Sample {
        let mut extra = BTreeMap::new();
        extra.insert("owner".to_string(), json!("netops"));
        extra.insert("warranty".to_string(), Value::Null);
        Sample {
            name: "sw1".into(),
            serial: String::new(),
            position: Some(12.0),
            vlans: vec![10, 20],
            extra,
        }
    }

    #[test]
    fn renders_fields_with_placeholders() {
        let mut r = Renderer::new(false);
        r.record("sw1", &sample());
        let text = r.finish();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "sw1");
        assert_eq!(lines[1].trim_end(), format!("    {:<28} sw1", "Name:"));
        assert_eq!(lines[2], format!("    {:<28} {}", "Serial:", NOT_FOUND));
        assert!(lines[3].ends_with(" 12"));
        assert!(lines[4].ends_with(" 10, 20"));
        assert_eq!(lines[5], "    Custom Fields:");
        assert!(lines[6].starts_with("        owner:"));
        assert!(lines[6].ends_with("netops"));
        assert!(lines[7].ends_with(NOT_FOUND));
    }

    #[test]
    fn absent_values_render_placeholder() {
        let mut r = Renderer::new(false);
        r.field("Missing", &Option::<String>::None);
        r.field("Empty List", &Vec::<String>::new());
        r.field("Null", &Value::Null);
        r.field("Blank", &"   ".to_string());
        r.field("Zero", &0u64);
        r.field("Flag", &false);
        let text = r.finish();
        let lines: Vec<&str> = text.lines().collect();

        for line in &lines[..4] {
            assert!(line.ends_with(NOT_FOUND), "{line}");
        }
        assert!(lines[4].ends_with(" 0"));
        assert!(lines[5].ends_with(" false"));
    }

    #[test]
    fn long_lists_become_sections() {
        let names: Vec<String> = (0..20).map(|i| format!("GigabitEthernet0/{}", i)).collect();
        let mut r = Renderer::new(false);
        r.field("Members", &names);
        let text = r.finish();

        assert!(text.starts_with("Members:\n"));
        assert!(text.contains("    - GigabitEthernet0/19\n"));
    }

    #[test]
    fn nested_json_objects_are_indented() {
        let mut r = Renderer::new(false);
        r.field("Context", &json!({"ntp": {"server": "10.0.0.1"}, "snmp": null}));
        let text = r.finish();

        assert!(text.starts_with("Context:\n    ntp:\n        server:"));
        assert!(text.contains("10.0.0.1"));
        assert!(text.lines().last().unwrap().ends_with(NOT_FOUND));
    }

    #[test]
    fn color_wraps_labels_in_escape_codes() {
        colored::control::set_override(true);
        let mut r = Renderer::new(true);
        r.missing("Rack");
        let text = r.finish();
        colored::control::unset_override();

        assert!(text.contains("\u{1b}["));
        assert!(text.contains(NOT_FOUND));
    }
}
