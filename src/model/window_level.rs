use serde::{Deserialize, Serialize};

/// Intensity-to-brightness mapping snapshot taken from the external viewer.
///
/// The two representations are mutually exclusive: a snapshot is restored in
/// exactly the representation it was captured in and is never converted into
/// the other form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindowLevel {
    Range { lower: f32, upper: f32 },
    CenterWidth { center: f32, width: f32 },
}
