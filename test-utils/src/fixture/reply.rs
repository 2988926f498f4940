//! Reply catalog fixtures.

use serde_json::{json, Value};

/// Catalog with one greeting, two question keywords and a goodbye pair.
///
/// # Returns
/// - `Value` - JSON object shaped like `communication.json`
pub fn catalog() -> Value {
    json!({
        "greetings": {
            "common": ["Hello!"]
        },
        "questions": {
            "how are you": ["Great, thanks!"],
            "weather": ["Looks sunny to me."]
        },
        "goodbyes": {
            "in": ["bye", "good night"],
            "out": ["See you!"]
        }
    })
}
