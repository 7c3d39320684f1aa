use thiserror::Error;

/// Convenient result alias for the Wayfarer library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a land route is built with mismatched biome and distance lists.
    #[error("land route has {biomes} biomes but {distances} distances")]
    BiomeDistanceMismatch { biomes: usize, distances: usize },

    /// Raised when a route record carries a negative or non-finite distance.
    #[error("route distance must be finite and non-negative, got {value}")]
    InvalidDistance { value: f64 },

    /// Raised when a settlement could not be found in the route graph.
    #[error("unknown settlement: {name}{}", format_suggestions(.suggestions))]
    UnknownSettlement {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a bare settlement name exists in more than one region.
    #[error(
        "settlement name {name} is ambiguous; qualify it with one of the regions: {}",
        .candidates.join(", ")
    )]
    AmbiguousSettlement {
        name: String,
        candidates: Vec<String>,
    },

    /// Raised when removing the minimum from an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// Raised when the travel party configuration cannot be used.
    #[error("invalid travel party: {message}")]
    InvalidTravelParty { message: String },

    /// Raised when a biome multiplier table fails validation.
    #[error("invalid biome table: {message}")]
    BiomeTableValidation { message: String },

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_settlement_lists_single_suggestion() {
        let err = Error::UnknownSettlement {
            name: "Shadowfn".to_string(),
            suggestions: vec!["Shadowfen".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown settlement: Shadowfn. Did you mean 'Shadowfen'?"
        );
    }

    #[test]
    fn unknown_settlement_without_suggestions_is_bare() {
        let err = Error::UnknownSettlement {
            name: "Nowhere".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown settlement: Nowhere");
    }

    #[test]
    fn ambiguous_settlement_lists_regions() {
        let err = Error::AmbiguousSettlement {
            name: "Ashford".to_string(),
            candidates: vec!["Kingdom A".to_string(), "Kingdom B".to_string()],
        };
        assert!(err.to_string().contains("Kingdom A, Kingdom B"));
    }
}
