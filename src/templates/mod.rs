//! Post Templates
//!
//! Social-media post templates with `{name}` placeholders, and the renderer that fills them in.
//!
//! A placeholder is a `{` immediately followed by one or more ASCII letters, digits or
//! underscores and a closing `}`. Anything else containing braces is plain text.

use serde::Deserialize;
use smallvec::SmallVec;

pub mod values;

pub use values::{SubstitutionMap, Values};

/// A named post template from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Template {
    /// Catalog identifier
    pub id: u32,

    /// Display title
    pub title: String,

    /// Template text containing zero or more `{name}` placeholders
    pub body: String,
}

impl Template {
    /// Create a new template.
    pub fn new(id: u32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Render the template body with the given values. See [`render`].
    pub fn render<V: Values + ?Sized>(&self, values: &V) -> String {
        render(&self.body, values)
    }

    /// Distinct placeholder names in the body, in order of first appearance.
    pub fn placeholders(&self) -> SmallVec<[&str; 4]> {
        placeholders(&self.body)
    }

    /// Placeholders in the body that `values` does not supply.
    pub fn missing<V: Values + ?Sized>(&self, values: &V) -> SmallVec<[&str; 4]> {
        self.placeholders()
            .into_iter()
            .filter(|name| values.value(name).is_none())
            .collect()
    }
}

/// Fill `{name}` placeholders in `template` from `values`.
///
/// The template is scanned once, left to right. Each well-formed placeholder whose name
/// `values` supplies is replaced by that value verbatim; every other placeholder is left as
/// written. Inserted values are never rescanned, so a value containing `{other}` stays literal.
///
/// ```
/// use banquet::templates::render;
///
/// let post = render("{dish} for {price}! {dish}!", &[("dish", "Dumplings")]);
///
/// assert_eq!(post, "Dumplings for {price}! Dumplings!");
/// ```
pub fn render<V: Values + ?Sized>(template: &str, values: &V) -> String {
    if values.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());

    for segment in Segments::new(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder { name, token } => {
                out.push_str(values.value(name).unwrap_or(token));
            }
        }
    }

    out
}

/// Distinct placeholder names in `template`, in order of first appearance.
pub fn placeholders(template: &str) -> SmallVec<[&str; 4]> {
    let mut names: SmallVec<[&str; 4]> = SmallVec::new();

    for segment in Segments::new(template) {
        if let Segment::Placeholder { name, .. } = segment
            && !names.contains(&name)
        {
            names.push(name);
        }
    }

    names
}

/// A piece of template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Literal text, copied through unchanged
    Text(&'a str),

    /// A well-formed placeholder
    Placeholder {
        /// Name between the braces
        name: &'a str,

        /// The whole `{name}` token as written
        token: &'a str,
    },
}

/// Splits template text into literal runs and placeholders.
#[derive(Debug)]
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(template: &'a str) -> Self {
        Self { rest: template }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some((name, token, after)) = placeholder_prefix(self.rest) {
            self.rest = after;

            return Some(Segment::Placeholder { name, token });
        }

        // Literal text runs up to the next `{` that could open a placeholder. A leading `{`
        // here failed to open one, so it belongs to this run.
        let search_from = usize::from(self.rest.starts_with('{'));
        let end = self
            .rest
            .get(search_from..)
            .and_then(|tail| tail.find('{'))
            .map_or(self.rest.len(), |idx| idx + search_from);

        let (text, after) = self.rest.split_at(end);
        self.rest = after;

        Some(Segment::Text(text))
    }
}

/// If `text` starts with a placeholder, return `(name, token, remainder)`.
fn placeholder_prefix(text: &str) -> Option<(&str, &str, &str)> {
    let body = text.strip_prefix('{')?;
    let name_len = body.find(|c: char| !is_name_char(c))?;

    if name_len == 0 {
        return None;
    }

    let (name, tail) = body.split_at(name_len);

    if !tail.starts_with('}') {
        return None;
    }

    // `{` + name + `}`, all single-byte characters.
    let (token, after) = text.split_at(name_len + 2);

    Some((name, token, after))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn map(pairs: &[(&str, &str)]) -> SubstitutionMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_values_return_template_unchanged() {
        let template = "Only {price} during launch week for {dish_name}!";

        assert_eq!(render(template, &SubstitutionMap::default()), template);
    }

    #[test]
    fn empty_template_renders_empty() {
        assert_eq!(render("", &map(&[("a", "X")])), "");
    }

    #[test]
    fn repeated_placeholders_are_all_replaced() {
        assert_eq!(render("{a}{a}", &map(&[("a", "X")])), "XX");
    }

    #[test]
    fn unmatched_placeholder_is_left_verbatim() {
        assert_eq!(render("{a}-{b}", &map(&[("a", "1")])), "1-{b}");
    }

    #[test]
    fn unused_values_are_ignored() {
        assert_eq!(
            render("no placeholders", &map(&[("x", "y")])),
            "no placeholders"
        );
    }

    #[test]
    fn replacement_text_is_not_rescanned() {
        let values = map(&[("a", "{b}"), ("b", "nope")]);

        assert_eq!(render("{a} {b}", &values), "{b} nope");
    }

    #[test]
    fn whitespace_inside_braces_is_not_a_placeholder() {
        let values = map(&[("a", "X")]);

        assert_eq!(render("{ a } {a }", &values), "{ a } {a }");
    }

    #[test]
    fn stray_braces_are_copied_through() {
        let values = map(&[("a", "X")]);

        assert_eq!(render("{{a}} {} {", &values), "{X} {} {");
        assert_eq!(render("}{a}{", &values), "}X{");
    }

    #[test]
    fn placeholder_names_allow_digits_and_underscores() {
        let values = map(&[("min_people", "4"), ("2for1", "yes")]);

        assert_eq!(render("{min_people}+ {2for1}", &values), "4+ yes");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(render("{Price}", &map(&[("price", "$9")])), "{Price}");
    }

    #[test]
    fn non_ascii_text_survives_around_placeholders() {
        let values = map(&[("dish_name", "宫保鸡丁")]);

        assert_eq!(
            render("🎉 NEW: {dish_name} 🎉 {菜}", &values),
            "🎉 NEW: 宫保鸡丁 🎉 {菜}"
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let values = map(&[("a", "1")]);
        let template = "{a}-{b}-{a}";

        assert_eq!(render(template, &values), render(template, &values));
    }

    #[test]
    fn any_values_source_can_be_used() {
        let ordered = BTreeMap::from([("dish".to_string(), "Dumplings".to_string())]);

        assert_eq!(render("{dish}!", &ordered), "Dumplings!");
        assert_eq!(render("{dish}!", &[("dish", "Buns")]), "Buns!");
        assert_eq!(render("{dish}!", &vec![("dish", "Noodles")]), "Noodles!");
    }

    #[test]
    fn placeholders_are_distinct_and_ordered() {
        let names = placeholders("{b} {a} {b} {not valid} {c}");

        assert_eq!(names.as_slice(), &["b", "a", "c"]);
    }

    #[test]
    fn template_reports_missing_placeholders() {
        let template = Template::new(
            2,
            "Weekend Special",
            "Enjoy our {dish_name} for just {price}. Call us at {phone_number}.",
        );

        let missing = template.missing(&[("dish_name", "Peking Duck")]);

        assert_eq!(missing.as_slice(), &["price", "phone_number"]);
        assert_eq!(
            template.render(&[("dish_name", "Peking Duck")]),
            "Enjoy our Peking Duck for just {price}. Call us at {phone_number}."
        );
    }

    #[test]
    fn segments_split_text_and_tokens() {
        let segments: Vec<_> = Segments::new("a{b}{c").collect();

        assert_eq!(
            segments,
            vec![
                Segment::Text("a"),
                Segment::Placeholder {
                    name: "b",
                    token: "{b}"
                },
                Segment::Text("{c"),
            ]
        );
    }
}
