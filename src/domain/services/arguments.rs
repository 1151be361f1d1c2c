//! Tool argument templates
//!
//! Arguments are configured as a list of strings containing `{name}`
//! placeholders. Unknown placeholders are left as written. An argument that
//! expands to the empty string is dropped.

/// Placeholder values for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVars {
    pairs: Vec<(String, String)>,
}

impl ArgumentVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Boolean placeholders expand to `1` or `0`
    pub fn flag(self, key: &str, enabled: bool) -> Self {
        self.set(key, if enabled { "1" } else { "0" })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn expand_one(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Expand every template argument
pub fn expand_arguments(templates: &[String], vars: &ArgumentVars) -> Vec<String> {
    templates
        .iter()
        .map(|t| vars.expand_one(t))
        .filter(|a| !a.is_empty())
        .collect()
}
