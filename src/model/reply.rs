//! Canned chat replies loaded from `communication.json`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Every reply the bot can send in conversation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReplyCatalog {
    #[serde(default)]
    pub greetings: Greetings,
    /// Question keyword -> possible answers. Keywords are matched in sorted order.
    #[serde(default)]
    pub questions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub goodbyes: Goodbyes,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Greetings {
    #[serde(default)]
    pub common: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Goodbyes {
    /// Words that mark a message as a farewell.
    #[serde(rename = "in", default)]
    pub triggers: Vec<String>,
    /// Possible farewell answers.
    #[serde(rename = "out", default)]
    pub answers: Vec<String>,
}
