use serde::{Deserialize, Serialize};

/// A public-transport route. Static reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusLine {
    pub id: String,
    /// Line number as painted on the bus (e.g. "101").
    pub number: String,
    pub name: String,
    /// Terminals served, e.g. "Centro - Rio Doce".
    pub route: String,
}

impl BusLine {
    /// Long label used by the submission form: `101 - Circular Olinda (Centro - Rio Doce)`.
    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.number, self.name, self.route)
    }

    /// Short label used by the list filter: `101 - Circular Olinda`.
    pub fn short_label(&self) -> String {
        format!("{} - {}", self.number, self.name)
    }
}

/// A complaint category (delay, overcrowding, ...). Static reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackType {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon tag understood by the front end (e.g. "clock").
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> BusLine {
        BusLine {
            id: "1".to_string(),
            number: "101".to_string(),
            name: "Circular Olinda".to_string(),
            route: "Centro - Rio Doce".to_string(),
        }
    }

    #[test]
    fn label_includes_route() {
        assert_eq!(line().label(), "101 - Circular Olinda (Centro - Rio Doce)");
    }

    #[test]
    fn short_label_omits_route() {
        assert_eq!(line().short_label(), "101 - Circular Olinda");
    }
}
