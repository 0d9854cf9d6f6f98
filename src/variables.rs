//! Caller-owned variable storage.
//!
//! The table is an ordered list rather than a map: lookups scan from the front and the first
//! binding with a matching name wins, so a name pushed twice keeps its older value.

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: f64,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Variable {
            name: name.into(),
            value,
        }
    }
}

/// Returns true if `name` can be referenced from an expression: one or more ASCII letters.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    variables: Vec<Variable>,
}

impl VariableTable {
    pub fn new() -> Self {
        VariableTable { variables: vec![] }
    }

    /// Appends a binding. An existing binding with the same name shadows it.
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.variables.push(Variable::new(name, value));
    }

    /// Rebinds the first variable called `name`, or appends a new binding.
    pub fn assign(&mut self, name: &str, value: f64) {
        match self.variables.iter_mut().find(|variable| variable.name == name) {
            Some(variable) => variable.value = value,
            None => self.push(name, value),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.variables
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        VariableTable {
            variables: iter
                .into_iter()
                .map(|(name, value)| Variable::new(name, value))
                .collect(),
        }
    }
}
