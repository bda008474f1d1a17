//! Player score domain model

/// Accumulated points of a single player
///
/// `name` is the token the player was mentioned with, used verbatim: `Ann` and
/// `ann` are different players.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerScore {
    pub name: String,
    pub points: f64,
}

impl PlayerScore {
    pub fn new(name: impl Into<String>, points: f64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Renders a point total in its shortest numeric form.
///
/// Whole numbers print without a fractional part (`5`, not `5.0`) and negative
/// zero prints as `0`.
pub fn display_points(points: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}", points + 0.0)
}
